use crate::errors::{VariantError, VariantResult};
use crate::models::VariantTable;

///
/// Phased genotypes: for every variant row, the allele carried by each haplotype
/// (0 = reference, k = k-th alternate allele). Stored row-major in one buffer.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Phasing {
    num_haplotypes: usize,
    num_rows: usize,
    alleles: Vec<u8>,
}

impl Phasing {
    ///
    /// Build phasing data from one allele vector per variant row.
    /// Every row must list the same number of haplotypes.
    ///
    pub fn new(rows: Vec<Vec<u8>>) -> VariantResult<Self> {
        let num_haplotypes = rows.first().map(|r| r.len()).unwrap_or(0);
        let num_rows = rows.len();
        let mut alleles = Vec::with_capacity(num_rows * num_haplotypes);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != num_haplotypes {
                return Err(VariantError::InvalidVariantData(format!(
                    "phasing row {} has {} haplotypes, expected {}",
                    i,
                    row.len(),
                    num_haplotypes
                )));
            }
            alleles.extend(row);
        }

        Ok(Phasing {
            num_haplotypes,
            num_rows,
            alleles,
        })
    }

    pub fn num_haplotypes(&self) -> usize {
        self.num_haplotypes
    }

    pub fn len(&self) -> usize {
        self.num_rows
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    /// Alleles of every haplotype at one variant row
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.num_haplotypes;
        &self.alleles[start..start + self.num_haplotypes]
    }

    pub fn allele(&self, row: usize, haplotype: usize) -> u8 {
        self.alleles[row * self.num_haplotypes + haplotype]
    }

    ///
    /// Check that this phasing describes `table`: one row per variant and no allele
    /// index beyond the variant's alternate alleles.
    ///
    pub fn validate_against(&self, table: &VariantTable) -> VariantResult<()> {
        if self.num_rows != table.len() {
            return Err(VariantError::InvalidVariantData(format!(
                "phasing has {} rows but the variant table has {}",
                self.num_rows,
                table.len()
            )));
        }

        for (i, variant) in table.iter().enumerate() {
            if let Some(&allele) = self.row(i).iter().max() {
                if allele as usize > variant.num_alts() {
                    return Err(VariantError::InvalidVariantData(format!(
                        "phasing row {} references allele {} but {}:{} has {} alternate alleles",
                        i,
                        allele,
                        variant.chrom,
                        variant.one_based_pos(),
                        variant.num_alts()
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Variant;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_rows_and_alleles() {
        let phasing = Phasing::new(vec![vec![0, 1, 1], vec![1, 0, 2]]).unwrap();

        assert_eq!(phasing.len(), 2);
        assert_eq!(phasing.num_haplotypes(), 3);
        assert_eq!(phasing.row(1), &[1, 0, 2]);
        assert_eq!(phasing.allele(0, 2), 1);
    }

    #[rstest]
    fn test_ragged_rows_rejected() {
        assert!(Phasing::new(vec![vec![0, 1], vec![1]]).is_err());
    }

    #[rstest]
    fn test_validate_against_table() {
        let table = VariantTable::from(vec![
            Variant::new(
                "v".to_string(),
                "chr1".to_string(),
                3,
                "A".to_string(),
                vec!["C".to_string()],
                vec![0.5],
            )
            .unwrap(),
        ]);

        assert!(Phasing::new(vec![vec![0, 1]]).unwrap().validate_against(&table).is_ok());
        assert!(Phasing::new(vec![vec![0, 2]]).unwrap().validate_against(&table).is_err());
        assert!(Phasing::new(vec![]).unwrap().validate_against(&table).is_err());
    }
}
