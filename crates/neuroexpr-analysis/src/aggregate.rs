//! Top-30 mean FPKM per gene over one diagnosis partition of the cohort.

use std::cmp::Ordering;

use neuroexpr_common::{NeuroexprError, Result};
use neuroexpr_data::Dataset;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How many ranked genes a result carries at most.
pub const TOP_GENE_COUNT: usize = 30;

/// One row of the ranked result: gene plus its mean expression across the
/// selected subjects. Ephemeral — recomputed per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneMean {
    pub gene_id: String,
    pub gene_symbol: String,
    pub mean_fpkm: f64,
}

/// Label for a partition, used in chart titles and error text.
pub fn partition_label(include_ad: bool) -> &'static str {
    if include_ad {
        "ad=true"
    } else {
        "ad=false"
    }
}

/// Compute the top-30 mean gene-expression values for one diagnosis
/// partition.
///
/// Selects the subjects in the partition, averages each gene row of the
/// expression matrix over exactly their columns, ranks descending (stable:
/// equal means keep matrix row order), joins to the gene catalog, and takes
/// the first 30 joined rows. The join happens before truncation, so a gene
/// the catalog does not know drops out of the join and cannot displace a
/// true top-30 row.
pub fn top_mean_expression(dataset: &Dataset, include_ad: bool) -> Result<Vec<GeneMean>> {
    let subjects = dataset.cohort.partition(include_ad);
    if subjects.is_empty() {
        return Err(NeuroexprError::EmptyPartition(
            partition_label(include_ad).to_string(),
        ));
    }

    let mut columns = Vec::with_capacity(subjects.len());
    for subject in &subjects {
        let col = dataset
            .expression
            .column_index(&subject.rnaseq_profile_id)
            .ok_or_else(|| {
                NeuroexprError::ProfileNotInMatrix(subject.rnaseq_profile_id.clone())
            })?;
        columns.push(col);
    }

    let mut ranked: Vec<(usize, f64)> = (0..dataset.expression.gene_count())
        .map(|row| (row, dataset.expression.row_mean(row, &columns)))
        .collect();
    // Stable descending sort: ties keep matrix row order.
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut results = Vec::with_capacity(TOP_GENE_COUNT);
    for (row, mean_fpkm) in ranked {
        let gene_id = &dataset.expression.gene_ids()[row];
        if let Some(symbol) = dataset.genes.symbol(gene_id) {
            results.push(GeneMean {
                gene_id: gene_id.clone(),
                gene_symbol: symbol.to_string(),
                mean_fpkm,
            });
            if results.len() == TOP_GENE_COUNT {
                break;
            }
        }
    }

    let mut transcript = String::from("Gene Symbol: Mean\n");
    for r in &results {
        transcript.push_str(&format!("{}: {}\n", r.gene_symbol, r.mean_fpkm));
    }
    debug!(
        partition = partition_label(include_ad),
        subjects = subjects.len(),
        "{}",
        transcript
    );

    Ok(results)
}
