use thiserror::Error;

#[derive(Debug, Error)]
pub enum NeuroexprError {
    /// A diagnosis partition matched zero subjects; a mean over zero
    /// columns is undefined, so aggregation refuses to proceed.
    #[error("no subjects match the requested diagnosis partition ({0})")]
    EmptyPartition(String),

    /// A joined subject's RNA-seq profile id has no column in the
    /// expression matrix.
    #[error("RNA-seq profile {0} has no column in the expression matrix")]
    ProfileNotInMatrix(String),

    #[error("chart rendering failed: {0}")]
    Chart(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, NeuroexprError>;
