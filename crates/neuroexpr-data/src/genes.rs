//! Gene catalog: internal gene id -> human-readable symbol.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// One row per gene from rows-genes.csv. Lookup only; the catalog carries
/// no ordering of its own.
#[derive(Debug, Clone, Default)]
pub struct GeneCatalog {
    symbols: HashMap<String, String>,
}

impl GeneCatalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("failed to open gene catalog {}", path.display()))?;
        let headers = reader.headers()?.clone();
        let id_col = headers
            .iter()
            .position(|h| h == "gene_id")
            .with_context(|| format!("column 'gene_id' not found in {}", path.display()))?;
        let symbol_col = headers
            .iter()
            .position(|h| h == "gene_symbol")
            .with_context(|| format!("column 'gene_symbol' not found in {}", path.display()))?;

        let mut symbols = HashMap::new();
        for record in reader.records() {
            let record =
                record.with_context(|| format!("malformed row in {}", path.display()))?;
            symbols.insert(
                record.get(id_col).unwrap_or_default().to_string(),
                record.get(symbol_col).unwrap_or_default().to_string(),
            );
        }

        info!("Loaded {} gene symbols from {}", symbols.len(), path.display());
        Ok(Self { symbols })
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            symbols: pairs.into_iter().collect(),
        }
    }

    /// Display symbol for a gene id, if the catalog knows it.
    pub fn symbol(&self, gene_id: &str) -> Option<&str> {
        self.symbols.get(gene_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_and_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows-genes.csv");
        fs::write(
            &path,
            "gene_id,chromosome,gene_symbol\n1023,7,ACTB\n1024,17,GFAP\n",
        )
        .unwrap();

        let catalog = GeneCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.symbol("1023"), Some("ACTB"));
        assert_eq!(catalog.symbol("9999"), None);
    }

    #[test]
    fn test_missing_symbol_column_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows-genes.csv");
        fs::write(&path, "gene_id,chromosome\n1023,7\n").unwrap();

        let err = GeneCatalog::load(&path).unwrap_err();
        assert!(err.to_string().contains("gene_symbol"));
    }
}
