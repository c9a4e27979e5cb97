use std::ops::Range;

use fxhash::FxHashSet as HashSet;

use crate::errors::{VariantError, VariantResult};
use crate::models::Variant;

///
/// VariantTable struct, the ordered collection of variants handed to the ranker.
/// Rows are addressed by their 0-based index in load order.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariantTable {
    pub variants: Vec<Variant>,
}

impl VariantTable {
    pub fn new() -> Self {
        VariantTable::default()
    }

    pub fn push(&mut self, variant: Variant) {
        self.variants.push(variant);
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&Variant> {
        self.variants.get(row)
    }

    pub fn last_mut(&mut self) -> Option<&mut Variant> {
        self.variants.last_mut()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variant> {
        self.variants.iter()
    }

    ///
    /// Split the table into one row range per chromosome, checking that every
    /// chromosome occupies a single contiguous block and that positions never
    /// decrease inside a block.
    ///
    pub fn chrom_blocks(&self) -> VariantResult<Vec<Range<usize>>> {
        let mut blocks: Vec<Range<usize>> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::default();
        let mut block_start = 0;

        for row in 1..=self.variants.len() {
            let at_boundary = row == self.variants.len()
                || self.variants[row].chrom != self.variants[row - 1].chrom;

            if !at_boundary {
                let (prev, curr) = (&self.variants[row - 1], &self.variants[row]);
                if curr.pos < prev.pos {
                    return Err(VariantError::InvalidVariantData(format!(
                        "variants are not sorted by position: {}:{} (row {}) follows {}:{}",
                        curr.chrom,
                        curr.one_based_pos(),
                        row,
                        prev.chrom,
                        prev.one_based_pos()
                    )));
                }
                continue;
            }

            let chrom = self.variants[block_start].chrom.as_str();
            if !seen.insert(chrom) {
                return Err(VariantError::InvalidVariantData(format!(
                    "variants on chromosome {} are not contiguous (block starting at row {})",
                    chrom, block_start
                )));
            }
            blocks.push(block_start..row);
            block_start = row;
        }

        Ok(blocks)
    }
}

impl From<Vec<Variant>> for VariantTable {
    fn from(variants: Vec<Variant>) -> Self {
        VariantTable { variants }
    }
}

impl<'a> IntoIterator for &'a VariantTable {
    type Item = &'a Variant;
    type IntoIter = std::slice::Iter<'a, Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn variant(chrom: &str, pos: u32) -> Variant {
        Variant::new(
            format!("{}:{}", chrom, pos),
            chrom.to_string(),
            pos,
            "A".to_string(),
            vec!["T".to_string()],
            vec![0.5],
        )
        .unwrap()
    }

    #[rstest]
    fn test_empty_table_has_no_blocks() {
        let table = VariantTable::new();
        assert_eq!(table.chrom_blocks().unwrap(), Vec::<Range<usize>>::new());
    }

    #[rstest]
    fn test_blocks_per_chromosome() {
        let table = VariantTable::from(vec![
            variant("chr1", 5),
            variant("chr1", 15),
            variant("chr2", 1),
            variant("chr3", 7),
            variant("chr3", 7),
        ]);

        assert_eq!(table.chrom_blocks().unwrap(), vec![0..2, 2..3, 3..5]);
    }

    #[rstest]
    fn test_unsorted_positions_rejected() {
        let table = VariantTable::from(vec![variant("chr1", 15), variant("chr1", 5)]);
        assert!(matches!(
            table.chrom_blocks(),
            Err(VariantError::InvalidVariantData(_))
        ));
    }

    #[rstest]
    fn test_split_chromosome_rejected() {
        let table = VariantTable::from(vec![
            variant("chr1", 5),
            variant("chr2", 5),
            variant("chr1", 50),
        ]);
        assert!(matches!(
            table.chrom_blocks(),
            Err(VariantError::InvalidVariantData(_))
        ));
    }
}
