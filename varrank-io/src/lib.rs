//! # Input readers for varrank.
//!
//! Small readers that turn the files a ranking run starts from into the
//! `varrank-core` models:
//!
//! - `.1ksnp` variant files into a `VariantTable`
//! - FASTA, FASTA index and chrom.sizes files into a `Genome`
//! - phasing files into `Phasing`
//!
//! Every reader accepts gzipped input.
pub mod error;
pub mod genome;
pub mod onekg_snp;
pub mod phasing;

// re-expose core functions
pub use error::*;
pub use genome::*;
pub use onekg_snp::*;
pub use phasing::*;
