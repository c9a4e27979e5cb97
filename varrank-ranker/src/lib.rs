//! # Variant ranking for graph genomes
//!
//! Orders the variants of a population variant set by how much they are worth
//! including in a graph genome of limited size. Three methods are provided:
//!
//! - `popcov`: summed allele frequencies, highest first
//! - `popcov-blowup`: the same weights discounted by `threshold ^ neighbors`, where
//!   `neighbors` counts other variants within one read length
//! - `hybrid`: greedy, phasing-aware ranking by the fraction of haplotypes each
//!   addition makes representable, reported both with and without blowup penalty
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use varrank_ranker::{OutputLayout, RankerConfig, RankingMethod, VariantRanker};
//!
//! let genome = varrank_io::read_genome("genome.fa", None).unwrap();
//! let variants = varrank_io::read_1ksnp("variants.1ksnp", None).unwrap();
//!
//! let ranker = VariantRanker::new(genome, variants, None, RankerConfig::default()).unwrap();
//! let ranking = ranker
//!     .rank_to_file(RankingMethod::PopCovBlowup, Path::new("ordered.txt"), OutputLayout::Erg)
//!     .unwrap();
//! ```
pub mod config;
pub mod consts;
pub mod errors;
pub mod hybrid;
pub mod output;
pub mod popcov;
pub mod ranker;
pub mod ranking_methods;
pub mod windows;

// re-exports
pub use config::*;
pub use errors::*;
pub use output::*;
pub use ranker::*;
pub use ranking_methods::*;
pub use windows::{Window, compute_windows};
