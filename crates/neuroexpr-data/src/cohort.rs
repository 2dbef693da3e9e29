//! Donor and sample metadata, joined into the per-sample Subject table.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// NINCDS-ADRDA diagnosis strings that count as presumptive AD.
/// The odd capitalisation ("Alzheimer'S") is verbatim from the dataset.
pub const AD_DIAGNOSES: [&str; 2] = [
    "Probable Alzheimer'S Disease",
    "Possible Alzheimer'S Disease",
];

/// One row of DonorInformation.csv (extra columns ignored).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorRecord {
    pub donor_id: String,
    /// The `nincds_arda_diagnosis` column; may be empty.
    pub diagnosis: String,
}

/// One row of columns-samples.csv (extra columns ignored).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRecord {
    pub donor_id: String,
    pub rnaseq_profile_id: String,
}

/// Inner join of donor and sample metadata on `donor_id`: one row per
/// sample with the donor's diagnosis attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub rnaseq_profile_id: String,
    pub donor_id: String,
    pub diagnosis: String,
}

impl Subject {
    /// Whether this subject falls in the presumptive-AD partition.
    /// Any other diagnosis value, including an empty one, is non-AD.
    pub fn is_ad(&self) -> bool {
        AD_DIAGNOSES.contains(&self.diagnosis.as_str())
    }
}

/// The joined subject table, in sample-file order.
#[derive(Debug, Clone)]
pub struct Cohort {
    subjects: Vec<Subject>,
}

impl Cohort {
    /// Load donor and sample metadata from CSV and join them.
    pub fn load(donors_path: impl AsRef<Path>, samples_path: impl AsRef<Path>) -> Result<Self> {
        let donors = load_donors(donors_path.as_ref())?;
        let samples = load_samples(samples_path.as_ref())?;
        Self::from_parts(donors, samples)
    }

    /// Inner join on `donor_id`. Samples whose donor is missing from the
    /// donor table are dropped, as in a relational inner join.
    pub fn from_parts(donors: Vec<DonorRecord>, samples: Vec<SampleRecord>) -> Result<Self> {
        let diagnoses: HashMap<&str, &str> = donors
            .iter()
            .map(|d| (d.donor_id.as_str(), d.diagnosis.as_str()))
            .collect();

        let mut subjects = Vec::with_capacity(samples.len());
        let mut orphaned = 0usize;
        for sample in &samples {
            match diagnoses.get(sample.donor_id.as_str()) {
                Some(diagnosis) => subjects.push(Subject {
                    rnaseq_profile_id: sample.rnaseq_profile_id.clone(),
                    donor_id: sample.donor_id.clone(),
                    diagnosis: (*diagnosis).to_string(),
                }),
                None => orphaned += 1,
            }
        }

        if orphaned > 0 {
            warn!("{} samples reference donors missing from the donor table", orphaned);
        }
        info!(
            "Joined cohort: {} donors x {} samples -> {} subjects",
            donors.len(),
            samples.len(),
            subjects.len()
        );

        Ok(Self { subjects })
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    /// Subjects in the requested diagnosis partition. The two partitions
    /// are exhaustive and disjoint over the cohort.
    pub fn partition(&self, include_ad: bool) -> Vec<&Subject> {
        self.subjects
            .iter()
            .filter(|s| s.is_ad() == include_ad)
            .collect()
    }
}

fn header_index(headers: &StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .with_context(|| format!("column '{}' not found in {}", name, path.display()))
}

fn load_donors(path: &Path) -> Result<Vec<DonorRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open donor table {}", path.display()))?;
    let headers = reader.headers()?.clone();
    let donor_col = header_index(&headers, "donor_id", path)?;
    let diagnosis_col = header_index(&headers, "nincds_arda_diagnosis", path)?;

    let mut donors = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("malformed row in {}", path.display()))?;
        donors.push(DonorRecord {
            donor_id: record.get(donor_col).unwrap_or_default().to_string(),
            diagnosis: record.get(diagnosis_col).unwrap_or_default().to_string(),
        });
    }

    info!("Loaded {} donors from {}", donors.len(), path.display());
    Ok(donors)
}

fn load_samples(path: &Path) -> Result<Vec<SampleRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open sample table {}", path.display()))?;
    let headers = reader.headers()?.clone();
    let donor_col = header_index(&headers, "donor_id", path)?;
    let profile_col = header_index(&headers, "rnaseq_profile_id", path)?;

    let mut samples = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("malformed row in {}", path.display()))?;
        samples.push(SampleRecord {
            donor_id: record.get(donor_col).unwrap_or_default().to_string(),
            rnaseq_profile_id: record.get(profile_col).unwrap_or_default().to_string(),
        });
    }

    info!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}
