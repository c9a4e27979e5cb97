use thiserror::Error;

use varrank_core::VariantError;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("Unsupported ranking method: {0}. Supported methods: popcov, popcov-blowup, hybrid")]
    UnsupportedMethod(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid variant data: {0}")]
    InvalidVariantData(String),

    #[error("Unknown chromosome: {0}")]
    UnknownChromosome(String),

    #[error("Ranking method `{0}` requires phasing data")]
    MissingPhasing(String),

    #[error(transparent)]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Output(#[from] anyhow::Error),
}

impl From<VariantError> for RankError {
    fn from(err: VariantError) -> Self {
        match err {
            VariantError::InvalidVariantData(msg) => RankError::InvalidVariantData(msg),
            VariantError::UnknownChromosome(chrom) => RankError::UnknownChromosome(chrom),
            VariantError::InvalidWeightField(msg) => RankError::InvalidConfiguration(msg),
            VariantError::Io(e) => RankError::Io(e),
        }
    }
}

pub type RankResult<T> = std::result::Result<T, RankError>;
