//! neuroexpr-common — Shared error type used across all Neuroexpr crates.

pub mod error;

pub use error::{NeuroexprError, Result};
