//! neuroexpr-web — Web shell for the expression viewer.
//! Two pages:
//!   - Input form: choose the diagnosis partition
//!   - Result view: top-30 mean expression chart plus the ranked table

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
