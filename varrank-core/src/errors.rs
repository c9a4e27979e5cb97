use thiserror::Error;

#[derive(Error, Debug)]
pub enum VariantError {
    #[error("Invalid variant data: {0}")]
    InvalidVariantData(String),

    #[error("Unknown chromosome: {0}")]
    UnknownChromosome(String),

    #[error("Invalid weight field: {0}")]
    InvalidWeightField(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type VariantResult<T> = std::result::Result<T, VariantError>;
