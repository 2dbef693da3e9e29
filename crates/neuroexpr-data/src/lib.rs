//! neuroexpr-data — Loads the four Aging/Dementia study tables into memory.
//!
//! The dataset is the Allen Institute "Aging, Dementia and TBI" bulk RNA-seq
//! release: donor metadata, sample metadata, a gene catalog, and a wide
//! normalized FPKM expression matrix. All four are read once at process start
//! and treated as immutable for the life of the server; there is no partial
//! load and no retry — a bad or missing file aborts startup.

pub mod cohort;
pub mod expression;
pub mod genes;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

pub use cohort::{Cohort, DonorRecord, SampleRecord, Subject, AD_DIAGNOSES};
pub use expression::{ExpressionMatrix, MATRIX_KEY_COLUMN};
pub use genes::GeneCatalog;

/// Donor metadata filename
pub const DONOR_FILE: &str = "DonorInformation.csv";

/// Sample metadata filename
pub const SAMPLE_FILE: &str = "columns-samples.csv";

/// Gene catalog filename
pub const GENE_FILE: &str = "rows-genes.csv";

/// Normalized expression matrix filename
pub const FPKM_FILE: &str = "fpkm_table_normalized.csv";

/// Locations of the four input tables.
#[derive(Debug, Clone)]
pub struct DatasetPaths {
    pub donors: PathBuf,
    pub samples: PathBuf,
    pub genes: PathBuf,
    pub expression: PathBuf,
}

impl DatasetPaths {
    /// Conventional layout: all four files under one directory with their
    /// published names.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            donors: dir.join(DONOR_FILE),
            samples: dir.join(SAMPLE_FILE),
            genes: dir.join(GENE_FILE),
            expression: dir.join(FPKM_FILE),
        }
    }
}

/// The immutable, load-once bundle handed to the aggregator.
#[derive(Debug)]
pub struct Dataset {
    pub cohort: Cohort,
    pub genes: GeneCatalog,
    pub expression: ExpressionMatrix,
}

impl Dataset {
    /// Load all four tables. All-or-nothing: any missing file, missing
    /// expected column, or malformed cell fails the whole load.
    pub fn load(paths: &DatasetPaths) -> Result<Self> {
        let cohort = Cohort::load(&paths.donors, &paths.samples)?;
        let genes = GeneCatalog::load(&paths.genes)?;
        let expression = ExpressionMatrix::load(&paths.expression)?;

        info!(
            "Dataset ready: {} subjects, {} catalog genes, {} x {} expression matrix",
            cohort.subject_count(),
            genes.len(),
            expression.gene_count(),
            expression.profile_count(),
        );

        Ok(Self {
            cohort,
            genes,
            expression,
        })
    }
}
