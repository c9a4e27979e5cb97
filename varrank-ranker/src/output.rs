use std::fmt::{self, Display};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;

use varrank_core::models::VariantTable;
use varrank_core::utils::get_dynamic_writer;

use crate::consts::BLOWUP_SUFFIX;
use crate::errors::{RankError, RankResult};
use crate::ranking_methods::RankingMethod;

///
/// How ranked sites are laid out on disk. Both layouts hold the chromosome and the
/// 1-based position of every ranked variant, most important first, with no header.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputLayout {
    /// `chrom,pos` pairs, each terminated by a tab (what the graph builder reads)
    #[default]
    Erg,
    /// one `chrom<TAB>pos` line per variant
    Tsv,
}

impl FromStr for OutputLayout {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "erg" => Ok(OutputLayout::Erg),
            "tsv" => Ok(OutputLayout::Tsv),
            _ => Err(RankError::InvalidConfiguration(format!(
                "unknown output format: {} (expected erg or tsv)",
                s
            ))),
        }
    }
}

impl Display for OutputLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputLayout::Erg => write!(f, "erg"),
            OutputLayout::Tsv => write!(f, "tsv"),
        }
    }
}

///
/// The result of one ranking run: row indices of the variant table, highest
/// priority first. Strategies that also report a blowup-adjusted order fill
/// `ordered_blowup`.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Ranking {
    pub method: RankingMethod,
    pub ordered: Vec<usize>,
    pub ordered_blowup: Option<Vec<usize>>,
}

impl Ranking {
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    ///
    /// `(chromosome, 1-based position)` of every ranked variant, in ranking order.
    ///
    pub fn sites<'a>(&'a self, table: &'a VariantTable) -> Vec<(&'a str, u64)> {
        self.ordered
            .iter()
            .map(|&row| {
                let v = &table.variants[row];
                (v.chrom.as_str(), v.one_based_pos())
            })
            .collect()
    }

    ///
    /// Write the ranking to `path`. A blowup-adjusted order, when present, goes to a
    /// sibling file carrying the `.blowup` suffix.
    ///
    /// # Returns
    /// the paths written
    ///
    pub fn write_to_file(
        &self,
        table: &VariantTable,
        path: &Path,
        layout: OutputLayout,
    ) -> RankResult<Vec<PathBuf>> {
        let mut written = vec![path.to_path_buf()];
        write_order_to_file(table, &self.ordered, path, layout)?;

        if let Some(ordered_blowup) = &self.ordered_blowup {
            let blowup = blowup_path(path);
            write_order_to_file(table, ordered_blowup, &blowup, layout)?;
            written.push(blowup);
        }

        Ok(written)
    }
}

///
/// Write one ordering of `table` rows in the given layout.
///
pub fn write_order<W: Write>(
    writer: &mut W,
    table: &VariantTable,
    order: &[usize],
    layout: OutputLayout,
) -> std::io::Result<()> {
    for &row in order {
        let v = &table.variants[row];
        match layout {
            OutputLayout::Erg => write!(writer, "{},{}\t", v.chrom, v.one_based_pos())?,
            OutputLayout::Tsv => writeln!(writer, "{}\t{}", v.chrom, v.one_based_pos())?,
        }
    }
    Ok(())
}

fn write_order_to_file(
    table: &VariantTable,
    order: &[usize],
    path: &Path,
    layout: OutputLayout,
) -> RankResult<()> {
    let mut writer = get_dynamic_writer(path)?;
    write_order(&mut writer, table, order, layout)?;
    writer.finish()?;
    info!("Wrote {} ranked variants to {}", order.len(), path.display());
    Ok(())
}

///
/// Path of the blowup-adjusted ranking that accompanies `path`. The suffix goes
/// before a trailing `.gz` so the file stays gzip-compressed.
///
pub fn blowup_path(path: &Path) -> PathBuf {
    let name = path.as_os_str().to_string_lossy();
    match name.strip_suffix(".gz") {
        Some(stem) => PathBuf::from(format!("{}{}.gz", stem, BLOWUP_SUFFIX)),
        None => PathBuf::from(format!("{}{}", name, BLOWUP_SUFFIX)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::BufRead;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::tempdir;

    use varrank_core::models::Variant;
    use varrank_core::utils::get_dynamic_reader;

    #[fixture]
    fn table() -> VariantTable {
        [("chr1", 5), ("chr1", 15), ("chr2", 0)]
            .iter()
            .map(|(chrom, pos)| {
                Variant::new(
                    "v".to_string(),
                    chrom.to_string(),
                    *pos,
                    "A".to_string(),
                    vec!["C".to_string()],
                    vec![0.5],
                )
                .unwrap()
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[rstest]
    #[case(OutputLayout::Erg, "chr2,1\tchr1,6\tchr1,16\t")]
    #[case(OutputLayout::Tsv, "chr2\t1\nchr1\t6\nchr1\t16\n")]
    fn test_write_order(table: VariantTable, #[case] layout: OutputLayout, #[case] expected: &str) {
        let mut buf: Vec<u8> = Vec::new();
        write_order(&mut buf, &table, &[2, 0, 1], layout).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[rstest]
    fn test_sites(table: VariantTable) {
        let ranking = Ranking {
            method: RankingMethod::PopCov,
            ordered: vec![1, 2, 0],
            ordered_blowup: None,
        };
        assert_eq!(
            ranking.sites(&table),
            vec![("chr1", 16), ("chr2", 1), ("chr1", 6)]
        );
    }

    #[rstest]
    #[case("ordered.txt", "ordered.txt.blowup")]
    #[case("out/ordered.txt.gz", "out/ordered.txt.blowup.gz")]
    fn test_blowup_path(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(blowup_path(Path::new(path)), PathBuf::from(expected));
    }

    #[rstest]
    fn test_write_both_orders(table: VariantTable) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ordered.tsv.gz");
        let ranking = Ranking {
            method: RankingMethod::Hybrid,
            ordered: vec![0, 1, 2],
            ordered_blowup: Some(vec![2, 1, 0]),
        };

        let written = ranking
            .write_to_file(&table, &path, OutputLayout::Tsv)
            .unwrap();
        assert_eq!(written.len(), 2);

        let lines: Vec<String> = get_dynamic_reader(&written[1])
            .unwrap()
            .lines()
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines, vec!["chr2\t1", "chr1\t16", "chr1\t6"]);
    }

    #[rstest]
    fn test_parse_layout() {
        assert_eq!(OutputLayout::from_str("TSV").unwrap(), OutputLayout::Tsv);
        assert!(OutputLayout::from_str("csv").is_err());
    }
}
