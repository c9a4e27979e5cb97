use std::path::Path;

use log::{debug, info};

use varrank_core::models::{Genome, Phasing, VariantTable};

use crate::config::RankerConfig;
use crate::errors::{RankError, RankResult};
use crate::hybrid::rank_hybrid;
use crate::output::{OutputLayout, Ranking};
use crate::popcov::{base_weights, rank_popcov, rank_popcov_blowup};
use crate::ranking_methods::RankingMethod;
use crate::windows::{Window, compute_windows};

///
/// Ranks the variants of one loaded table. Inputs are fixed at construction and
/// never mutated, so `rank` can be called repeatedly with different methods.
///
#[derive(Debug)]
pub struct VariantRanker {
    genome: Genome,
    variants: VariantTable,
    phasing: Option<Phasing>,
    config: RankerConfig,
}

impl VariantRanker {
    ///
    /// Create a new ranker.
    ///
    /// # Arguments
    /// - genome: length of every chromosome the variants sit on
    /// - variants: the variant table
    /// - phasing: per-haplotype alleles, one row per variant (enables `hybrid`)
    /// - config: window radius, pruning, blowup threshold and weight fields
    ///
    pub fn new(
        genome: Genome,
        variants: VariantTable,
        phasing: Option<Phasing>,
        config: RankerConfig,
    ) -> RankResult<Self> {
        config.validate()?;

        for (row, v) in variants.iter().enumerate() {
            let chrom_len = genome
                .chrom_len(&v.chrom)
                .ok_or_else(|| RankError::UnknownChromosome(v.chrom.clone()))?;
            if v.pos >= chrom_len {
                return Err(RankError::InvalidVariantData(format!(
                    "variant {} (row {}) at {}:{} lies beyond the chromosome end ({} bp)",
                    v.name,
                    row,
                    v.chrom,
                    v.one_based_pos(),
                    chrom_len
                )));
            }
        }

        if let Some(phasing) = &phasing {
            phasing.validate_against(&variants)?;
        }

        info!(
            "Ranker ready: {} variants, window radius {}, max {} variants per window",
            variants.len(),
            config.window_radius,
            config.max_variants()
        );

        Ok(VariantRanker {
            genome,
            variants,
            phasing,
            config,
        })
    }

    pub fn num_v(&self) -> usize {
        self.variants.len()
    }

    pub fn variants(&self) -> &VariantTable {
        &self.variants
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    pub fn base_weights(&self) -> Vec<f64> {
        base_weights(&self.variants, &self.config.weight_fields)
    }

    pub fn windows(&self) -> RankResult<Vec<Window>> {
        let windows = compute_windows(&self.variants, &self.genome, self.config.window_radius)?;
        if !windows.is_empty() {
            let total: usize = windows.iter().map(|w| w.neighbors()).sum();
            debug!(
                "Mean neighbors per window: {:.3}",
                total as f64 / windows.len() as f64
            );
        }
        Ok(windows)
    }

    ///
    /// Rank every variant with the given method.
    ///
    pub fn rank(&self, method: RankingMethod) -> RankResult<Ranking> {
        info!("Ranking {} variants with {}", self.num_v(), method);
        let fields = &self.config.weight_fields;

        let ranking = match method {
            RankingMethod::PopCov => Ranking {
                method,
                ordered: rank_popcov(&self.variants, fields),
                ordered_blowup: None,
            },
            RankingMethod::PopCovBlowup => {
                let windows = self.windows()?;
                Ranking {
                    method,
                    ordered: rank_popcov_blowup(
                        &self.variants,
                        &windows,
                        fields,
                        self.config.blowup_threshold,
                    ),
                    ordered_blowup: None,
                }
            }
            RankingMethod::Hybrid => {
                let phasing = self
                    .phasing
                    .as_ref()
                    .ok_or_else(|| RankError::MissingPhasing(method.to_string()))?;
                let windows = self.windows()?;
                let (ordered, ordered_blowup) = rank_hybrid(
                    &self.variants,
                    &windows,
                    phasing,
                    &self.base_weights(),
                    self.config.max_variants(),
                    self.config.blowup_threshold,
                );
                Ranking {
                    method,
                    ordered,
                    ordered_blowup: Some(ordered_blowup),
                }
            }
        };

        Ok(ranking)
    }

    ///
    /// Rank with a method given by name. Unknown names are reported as
    /// [RankError::UnsupportedMethod].
    ///
    pub fn rank_by_name(&self, method: &str) -> RankResult<Ranking> {
        self.rank(method.parse()?)
    }

    ///
    /// Rank and write the result to `output` (plus `output.blowup` for methods that
    /// report a blowup-adjusted order).
    ///
    pub fn rank_to_file(
        &self,
        method: RankingMethod,
        output: &Path,
        layout: OutputLayout,
    ) -> RankResult<Ranking> {
        let ranking = self.rank(method)?;
        ranking.write_to_file(&self.variants, output, layout)?;
        Ok(ranking)
    }
}
