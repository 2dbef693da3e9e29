//! The wide normalized FPKM expression matrix.
//!
//! One row per gene, one column per RNA-seq profile. Row order is preserved
//! from the file: it is the tie-break order when means are ranked.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use tracing::info;

/// Header name of the matrix key column, verbatim from the published file.
pub const MATRIX_KEY_COLUMN: &str = r"gene_id \ rnaseq_profile_id";

#[derive(Debug, Clone)]
pub struct ExpressionMatrix {
    gene_ids: Vec<String>,
    profile_ids: Vec<String>,
    /// profile id -> column index into each row
    columns: HashMap<String, usize>,
    /// row-major, rows[gene][column]
    rows: Vec<Vec<f64>>,
}

impl ExpressionMatrix {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("failed to open expression matrix {}", path.display()))?;

        let headers = reader.headers()?.clone();
        let key = headers.get(0).unwrap_or_default();
        ensure!(
            key == MATRIX_KEY_COLUMN,
            "expression matrix {} must start with a '{}' column, found '{}'",
            path.display(),
            MATRIX_KEY_COLUMN,
            key
        );
        let profile_ids: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();

        let mut gene_ids = Vec::new();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record =
                record.with_context(|| format!("malformed row in {}", path.display()))?;
            let gene_id = record.get(0).unwrap_or_default().to_string();

            let mut row = Vec::with_capacity(profile_ids.len());
            for value in record.iter().skip(1) {
                let fpkm: f64 = value.parse().with_context(|| {
                    format!(
                        "malformed expression value '{}' for gene {} in {}",
                        value,
                        gene_id,
                        path.display()
                    )
                })?;
                row.push(fpkm);
            }
            gene_ids.push(gene_id);
            rows.push(row);
        }

        let matrix = Self::from_rows(gene_ids, profile_ids, rows)?;
        info!(
            "Loaded expression matrix: {} genes x {} profiles from {}",
            matrix.gene_count(),
            matrix.profile_count(),
            path.display()
        );
        Ok(matrix)
    }

    /// Build a matrix from already-parsed parts. Every row must be exactly
    /// as wide as the profile list.
    pub fn from_rows(
        gene_ids: Vec<String>,
        profile_ids: Vec<String>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self> {
        ensure!(
            gene_ids.len() == rows.len(),
            "expression matrix has {} gene ids but {} rows",
            gene_ids.len(),
            rows.len()
        );
        for (gene_id, row) in gene_ids.iter().zip(&rows) {
            ensure!(
                row.len() == profile_ids.len(),
                "gene {} has {} values, expected {}",
                gene_id,
                row.len(),
                profile_ids.len()
            );
        }

        let columns = profile_ids
            .iter()
            .enumerate()
            .map(|(i, p)| (p.clone(), i))
            .collect();

        Ok(Self {
            gene_ids,
            profile_ids,
            columns,
            rows,
        })
    }

    /// Column index for an RNA-seq profile id, if present.
    pub fn column_index(&self, profile_id: &str) -> Option<usize> {
        self.columns.get(profile_id).copied()
    }

    /// Arithmetic mean of one gene row over the given columns.
    /// Callers must pass at least one column; a mean over zero values is
    /// undefined and rejected upstream.
    pub fn row_mean(&self, row: usize, columns: &[usize]) -> f64 {
        let values = &self.rows[row];
        let sum: f64 = columns.iter().map(|&c| values[c]).sum();
        sum / columns.len() as f64
    }

    /// Gene ids in file row order.
    pub fn gene_ids(&self) -> &[String] {
        &self.gene_ids
    }

    pub fn gene_count(&self) -> usize {
        self.gene_ids.len()
    }

    pub fn profile_count(&self) -> usize {
        self.profile_ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn toy() -> ExpressionMatrix {
        ExpressionMatrix::from_rows(
            vec!["G1".into(), "G2".into()],
            vec!["P1".into(), "P2".into(), "P3".into()],
            vec![vec![10.0, 20.0, 0.0], vec![5.0, 5.0, 99.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_row_mean_over_selected_columns() {
        let m = toy();
        let cols = vec![
            m.column_index("P1").unwrap(),
            m.column_index("P2").unwrap(),
        ];
        assert_eq!(m.row_mean(0, &cols), 15.0);
        assert_eq!(m.row_mean(1, &cols), 5.0);
    }

    #[test]
    fn test_unknown_profile_has_no_column() {
        assert!(toy().column_index("P9").is_none());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = ExpressionMatrix::from_rows(
            vec!["G1".into()],
            vec!["P1".into(), "P2".into()],
            vec![vec![1.0]],
        )
        .unwrap_err();
        assert!(err.to_string().contains("expected 2"));
    }

    #[test]
    fn test_load_verifies_key_column_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fpkm.csv");
        fs::write(&path, "gene_id,P1\nG1,1.0\n").unwrap();

        let err = ExpressionMatrix::load(&path).unwrap_err();
        assert!(err.to_string().contains(MATRIX_KEY_COLUMN));
    }

    #[test]
    fn test_load_rejects_malformed_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fpkm.csv");
        fs::write(
            &path,
            "gene_id \\ rnaseq_profile_id,P1\nG1,not-a-number\n",
        )
        .unwrap();

        let err = ExpressionMatrix::load(&path).unwrap_err();
        assert!(err.to_string().contains("malformed expression value"));
    }

    #[test]
    fn test_load_preserves_row_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fpkm.csv");
        fs::write(
            &path,
            "gene_id \\ rnaseq_profile_id,P1\nG2,1.0\nG1,2.0\nG3,3.0\n",
        )
        .unwrap();

        let m = ExpressionMatrix::load(&path).unwrap();
        assert_eq!(m.gene_ids(), ["G2", "G1", "G3"]);
    }
}
