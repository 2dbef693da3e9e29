//! neuroexpr-analysis — Per-gene mean aggregation over a diagnosis
//! partition, and the bar chart rendered from it.

pub mod aggregate;
pub mod chart;

pub use aggregate::{partition_label, top_mean_expression, GeneMean, TOP_GENE_COUNT};
pub use chart::render_bar_chart;
