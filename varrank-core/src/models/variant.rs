use std::fmt::{self, Display};

use crate::errors::{VariantError, VariantResult};

///
/// A single variant site: one reference allele and one or more alternate alleles,
/// each alternate allele carrying its population frequency.
///
/// `alts` and `probs` are kept private so that they can only grow together
/// through [Variant::add_alt].
///
#[derive(PartialEq, Debug, Clone)]
pub struct Variant {
    pub name: String,
    pub chrom: String,
    /// 0-based position on `chrom`
    pub pos: u32,
    pub orig: String,

    alts: Vec<String>,
    probs: Vec<f64>,
}

fn check_frequency(chrom: &str, pos: u32, prob: f64) -> VariantResult<()> {
    if !prob.is_finite() || prob < 0.0 {
        return Err(VariantError::InvalidVariantData(format!(
            "allele frequency at {}:{} must be a non-negative number, got {}",
            chrom,
            pos + 1,
            prob
        )));
    }
    Ok(())
}

impl Variant {
    ///
    /// Create a new variant.
    ///
    /// # Arguments
    /// - name: label for the variant
    /// - chrom: chromosome name
    /// - pos: 0-based position
    /// - orig: reference allele
    /// - alts: alternate alleles
    /// - probs: frequency of each alternate allele, parallel to `alts`
    ///
    pub fn new(
        name: String,
        chrom: String,
        pos: u32,
        orig: String,
        alts: Vec<String>,
        probs: Vec<f64>,
    ) -> VariantResult<Self> {
        if alts.len() != probs.len() {
            return Err(VariantError::InvalidVariantData(format!(
                "{}:{} has {} alternate alleles but {} frequencies",
                chrom,
                pos + 1,
                alts.len(),
                probs.len()
            )));
        }
        for &prob in probs.iter() {
            check_frequency(&chrom, pos, prob)?;
        }

        Ok(Variant {
            name,
            chrom,
            pos,
            orig,
            alts,
            probs,
        })
    }

    ///
    /// Append another alternate allele. Used when several ALT records at one
    /// position collapse into one variant.
    ///
    pub fn add_alt(&mut self, alt: String, prob: f64) -> VariantResult<()> {
        check_frequency(&self.chrom, self.pos, prob)?;
        self.alts.push(alt);
        self.probs.push(prob);
        Ok(())
    }

    pub fn alts(&self) -> &[String] {
        &self.alts
    }

    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    pub fn num_alts(&self) -> usize {
        self.alts.len()
    }

    /// 1-based position, as written to ranking files
    pub fn one_based_pos(&self) -> u64 {
        self.pos as u64 + 1
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.chrom,
            self.one_based_pos(),
            self.orig,
            self.alts.join(",")
        )
    }
}
