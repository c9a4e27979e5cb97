use std::ops::RangeInclusive;

use varrank_core::models::{Genome, VariantTable};

use crate::errors::{RankError, RankResult};

///
/// The rows sharing a read-length window with one variant: every row of the same
/// chromosome whose position lies within `radius` bp of it, the variant included.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub first: usize,
    pub last: usize,
}

impl Window {
    /// Number of other variants in the window
    pub fn neighbors(&self) -> usize {
        self.last - self.first
    }

    pub fn rows(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }

    pub fn contains(&self, row: usize) -> bool {
        self.first <= row && row <= self.last
    }
}

///
/// Genomic span `[pos - radius, pos + radius]` clamped to the chromosome.
///
pub fn window_span(pos: u32, radius: u32, chrom_len: u32) -> (u32, u32) {
    let start = pos.saturating_sub(radius);
    let end = pos
        .saturating_add(radius)
        .min(chrom_len.saturating_sub(1));
    (start, end)
}

///
/// Compute the window of every row with a two-pointer sweep per chromosome.
///
/// The table must hold each chromosome in one contiguous block sorted by position;
/// this is checked and reported as invalid variant data otherwise. Windows never
/// reach into a neighboring chromosome.
///
pub fn compute_windows(
    table: &VariantTable,
    genome: &Genome,
    radius: u32,
) -> RankResult<Vec<Window>> {
    let blocks = table.chrom_blocks()?;
    let pos: Vec<u32> = table.iter().map(|v| v.pos).collect();
    let mut windows: Vec<Window> = Vec::with_capacity(table.len());

    for block in blocks {
        let chrom = &table.variants[block.start].chrom;
        let chrom_len = genome
            .chrom_len(chrom)
            .ok_or_else(|| RankError::UnknownChromosome(chrom.clone()))?;

        let mut first = block.start;
        let mut last = block.start;

        for i in block.clone() {
            let (lo, hi) = window_span(pos[i], radius, chrom_len);

            // pos[i] >= lo, so `first` never passes i
            while pos[first] < lo {
                first += 1;
            }
            last = last.max(i);
            while last + 1 < block.end && pos[last + 1] <= hi {
                last += 1;
            }

            windows.push(Window { first, last });
        }
    }

    Ok(windows)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use varrank_core::models::Variant;

    fn table(sites: &[(&str, u32)]) -> VariantTable {
        sites
            .iter()
            .map(|(chrom, pos)| {
                Variant::new(
                    format!("{}:{}", chrom, pos),
                    chrom.to_string(),
                    *pos,
                    "A".to_string(),
                    vec!["C".to_string()],
                    vec![1.0],
                )
                .unwrap()
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[fixture]
    fn genome() -> Genome {
        vec![("chr1".to_string(), 1_000), ("chr2".to_string(), 1_000)]
            .into_iter()
            .collect()
    }

    /// Brute force reference: scan every row for every variant
    fn naive_windows(table: &VariantTable, radius: u32) -> Vec<Window> {
        let rows = &table.variants;
        (0..rows.len())
            .map(|i| {
                let in_window = |j: &usize| {
                    rows[*j].chrom == rows[i].chrom && rows[*j].pos.abs_diff(rows[i].pos) <= radius
                };
                let first = (0..rows.len()).find(in_window).unwrap();
                let last = (0..rows.len()).rev().find(in_window).unwrap();
                Window { first, last }
            })
            .collect()
    }

    #[rstest]
    fn test_three_variant_scenario(genome: Genome) {
        let table = table(&[("chr1", 5), ("chr1", 15), ("chr1", 100)]);
        let windows = compute_windows(&table, &genome, 10).unwrap();

        assert_eq!(
            windows,
            vec![
                Window { first: 0, last: 1 },
                Window { first: 0, last: 1 },
                Window { first: 2, last: 2 },
            ]
        );
        assert_eq!(windows[2].neighbors(), 0);
    }

    #[rstest]
    fn test_windows_stop_at_chromosome_boundary(genome: Genome) {
        let table = table(&[("chr1", 990), ("chr1", 995), ("chr2", 0), ("chr2", 3)]);
        let windows = compute_windows(&table, &genome, 10).unwrap();

        assert_eq!(windows[1], Window { first: 0, last: 1 });
        assert_eq!(windows[2], Window { first: 2, last: 3 });
    }

    #[rstest]
    #[case(1)]
    #[case(7)]
    #[case(30)]
    #[case(u32::MAX)]
    fn test_sweep_matches_brute_force(genome: Genome, #[case] radius: u32) {
        let table = table(&[
            ("chr1", 0),
            ("chr1", 3),
            ("chr1", 3),
            ("chr1", 10),
            ("chr1", 31),
            ("chr1", 40),
            ("chr1", 999),
            ("chr2", 2),
            ("chr2", 9),
            ("chr2", 60),
        ]);

        let windows = compute_windows(&table, &genome, radius).unwrap();
        assert_eq!(windows, naive_windows(&table, radius));
    }

    #[rstest]
    fn test_unsorted_table_rejected(genome: Genome) {
        let table = table(&[("chr1", 50), ("chr1", 5)]);
        assert!(matches!(
            compute_windows(&table, &genome, 10),
            Err(RankError::InvalidVariantData(_))
        ));
    }

    #[rstest]
    fn test_unknown_chromosome(genome: Genome) {
        let table = table(&[("chrX", 5)]);
        assert!(matches!(
            compute_windows(&table, &genome, 10),
            Err(RankError::UnknownChromosome(c)) if c == "chrX"
        ));
    }

    #[rstest]
    #[case(5, 10, 100, (0, 15))]
    #[case(95, 10, 100, (85, 99))]
    #[case(50, 10, 100, (40, 60))]
    fn test_window_span_clamps(
        #[case] pos: u32,
        #[case] radius: u32,
        #[case] chrom_len: u32,
        #[case] expected: (u32, u32),
    ) {
        assert_eq!(window_span(pos, radius, chrom_len), expected);
    }
}
