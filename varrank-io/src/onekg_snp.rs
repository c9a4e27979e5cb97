//! Reader for `.1ksnp` variant files.
//!
//! Each data line is tab separated:
//!
//! ```text
//! chrom  pos  ref  alt  freq  [placeholder]  [num_alts]  [name]
//! ```
//!
//! `pos` is 1-based. The sixth column is a placeholder that is never read and
//! `num_alts` is informational; only the name is taken from the optional columns.
//! Without a name, a variant is labelled `chrom:pos`. Consecutive lines at the same chromosome and position describe
//! further alternate alleles of the same variant and are collapsed into one row.
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use varrank_core::models::{Variant, VariantTable};
use varrank_core::utils::{data_lines, get_dynamic_reader, get_dynamic_reader_w_stdin};

use crate::error::{ParseError, Result};

const MIN_FIELDS: usize = 5;
const NAME_FIELD: usize = 7;

fn spinner(msg: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed}] {msg}") {
        spinner.set_style(style.tick_strings(&["-", "\\", "|", "/"]));
    }
    spinner.set_message(msg.to_string());
    spinner
}

fn parse_field<T: FromStr>(field: &str, what: &str, path: &str, line: usize) -> Result<T> {
    field.trim().parse::<T>().map_err(|_| ParseError::Malformed {
        path: path.to_string(),
        line,
        msg: format!("invalid {}: {:?}", what, field),
    })
}

///
/// Read a `.1ksnp` file (optionally gzipped) into a [VariantTable].
///
/// # Arguments
/// - path: path to the file
/// - chrom: when set, only variants on this chromosome are kept
///
pub fn read_1ksnp<T: AsRef<Path>>(path: T, chrom: Option<&str>) -> Result<VariantTable> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;
    parse_1ksnp(reader, &path.display().to_string(), chrom)
}

///
/// Like [read_1ksnp], but `-` reads the variants from stdin.
///
pub fn read_1ksnp_w_stdin(path: &str, chrom: Option<&str>) -> Result<VariantTable> {
    let reader = get_dynamic_reader_w_stdin(path)?;
    let source = if path == "-" { "<stdin>" } else { path };
    parse_1ksnp(reader, source, chrom)
}

///
/// Parse `.1ksnp` records from any buffered reader. `source` names the input in
/// errors and logs.
///
pub fn parse_1ksnp<R: BufRead>(
    reader: R,
    source: &str,
    chrom: Option<&str>,
) -> Result<VariantTable> {
    let path_str = source.to_string();

    info!("Reading variants from {}", path_str);
    let progress = spinner("Reading variants...");

    let mut table = VariantTable::new();
    let mut alleles_read: u64 = 0;
    let mut skipped: u64 = 0;

    for line in data_lines(reader) {
        let (line_num, line) = line?;
        let fields: Vec<&str> = line.split('\t').collect();

        if fields.len() < MIN_FIELDS {
            return Err(ParseError::Malformed {
                path: path_str,
                line: line_num,
                msg: format!(
                    "expected at least {} tab separated fields, found {}",
                    MIN_FIELDS,
                    fields.len()
                ),
            });
        }

        let var_chrom = fields[0];
        if chrom.is_some_and(|c| c != var_chrom) {
            skipped += 1;
            continue;
        }

        let one_based: u32 = parse_field(fields[1], "position", &path_str, line_num)?;
        if one_based == 0 {
            return Err(ParseError::Malformed {
                path: path_str,
                line: line_num,
                msg: "positions are 1-based, found 0".to_string(),
            });
        }
        let pos = one_based - 1;
        let orig = fields[2];
        let alt = fields[3].to_string();
        let prob: f64 = parse_field(fields[4], "frequency", &path_str, line_num)?;

        alleles_read += 1;
        if alleles_read % 100_000 == 0 {
            progress.set_message(format!("Read {} alleles", alleles_read));
        }
        progress.inc(1);

        // another allele of the previous variant
        if let Some(prev) = table.last_mut() {
            if prev.chrom == var_chrom && prev.pos == pos {
                if prev.orig != orig {
                    return Err(ParseError::Malformed {
                        path: path_str,
                        line: line_num,
                        msg: format!(
                            "reference allele {} disagrees with {} on an earlier line for {}:{}",
                            orig, prev.orig, var_chrom, one_based
                        ),
                    });
                }
                prev.add_alt(alt, prob)?;
                continue;
            }
        }

        let name = match fields.get(NAME_FIELD).map(|n| n.trim()) {
            Some(n) if !n.is_empty() && n != "." => n.to_string(),
            _ => format!("{}:{}", var_chrom, one_based),
        };

        table.push(Variant::new(
            name,
            var_chrom.to_string(),
            pos,
            orig.to_string(),
            vec![alt],
            vec![prob],
        )?);
    }

    progress.finish_and_clear();

    if skipped > 0 {
        debug!("Skipped {} alleles on other chromosomes", skipped);
    }
    info!(
        "Loaded {} variants ({} alleles) from {}",
        table.len(),
        alleles_read,
        path_str
    );

    Ok(table)
}
