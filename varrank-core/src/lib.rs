//! # varrank-core
//!
//! Shared models for ranking variants for inclusion in a graph genome:
//!
//! - [models::Variant]: one variant site with its alternate alleles and their frequencies
//! - [models::VariantTable]: the ordered rows the ranker works on
//! - [models::Genome]: chromosome lengths
//! - [models::Phasing]: per-haplotype alleles for every variant row
//! - [models::WeightFields]: which frequency fields make up a variant's base weight
//!
//! The `utils` module holds the (gzip aware) reader and writer helpers used by the io
//! and ranker crates.
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{VariantError, VariantResult};
