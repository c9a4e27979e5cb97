use std::io::BufRead;
use std::path::Path;

use log::info;

use varrank_core::models::Genome;
use varrank_core::utils::{data_lines, get_dynamic_reader};

use crate::error::{ParseError, Result};

const SIZES_EXTENSIONS: [&str; 4] = ["fai", "sizes", "txt", "tsv"];

fn keep_only(genome: Genome, chrom: Option<&str>, path: &str) -> Result<Genome> {
    match chrom {
        Some(c) => match genome.chrom_len(c) {
            Some(len) => Ok(std::iter::once((c.to_string(), len)).collect()),
            None => Err(ParseError::ChromosomeNotFound(c.to_string(), path.to_string())),
        },
        None => Ok(genome),
    }
}

fn finish_record(
    genome: &mut Genome,
    record: Option<(String, u64)>,
    path: &str,
    line: usize,
) -> Result<()> {
    if let Some((name, len)) = record {
        let len = u32::try_from(len).map_err(|_| ParseError::Malformed {
            path: path.to_string(),
            line,
            msg: format!("sequence {} is longer than {} bp", name, u32::MAX),
        })?;
        genome.insert(name, len);
    }
    Ok(())
}

///
/// Read the length of every record of a FASTA file (optionally gzipped). Sequence
/// content is counted line by line and never held in memory.
///
/// # Arguments
/// - path: path to the FASTA file
/// - chrom: when set, only this record is kept
///
pub fn read_fasta_lengths<T: AsRef<Path>>(path: T, chrom: Option<&str>) -> Result<Genome> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    let mut reader = get_dynamic_reader(path)?;

    let mut genome = Genome::new();
    let mut current: Option<(String, u64)> = None;
    let mut line = String::new();
    let mut line_num = 0;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            finish_record(&mut genome, current.take(), &path_str, line_num)?;
            break;
        }
        line_num += 1;

        let trimmed = line.trim();
        if let Some(header) = trimmed.strip_prefix('>') {
            finish_record(&mut genome, current.take(), &path_str, line_num)?;
            let name = header.split_whitespace().next().unwrap_or_default();
            if name.is_empty() {
                return Err(ParseError::Malformed {
                    path: path_str.clone(),
                    line: line_num,
                    msg: "FASTA header without a sequence name".to_string(),
                });
            }
            current = Some((name.to_string(), 0));
        } else if let Some((_, len)) = current.as_mut() {
            *len += trimmed.len() as u64;
        } else if !trimmed.is_empty() {
            return Err(ParseError::Malformed {
                path: path_str.clone(),
                line: line_num,
                msg: "sequence data before the first FASTA header".to_string(),
            });
        }
    }

    if genome.is_empty() {
        return Err(ParseError::NoRecords(path_str));
    }
    info!("Read {} sequence lengths from {}", genome.len(), path_str);

    keep_only(genome, chrom, &path_str)
}

///
/// Read chromosome lengths from a two column `name<whitespace>length` file. FASTA
/// index (`.fai`) files work too: only their first two columns are used.
///
pub fn read_chrom_sizes<T: AsRef<Path>>(path: T, chrom: Option<&str>) -> Result<Genome> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    let reader = get_dynamic_reader(path)?;

    let mut genome = Genome::new();
    for line in data_lines(reader) {
        let (line_num, line) = line?;
        let mut parts = line.split_whitespace();
        let (name, len) = match (parts.next(), parts.next()) {
            (Some(name), Some(len)) => (name, len),
            _ => {
                return Err(ParseError::Malformed {
                    path: path_str,
                    line: line_num,
                    msg: "expected `name length`".to_string(),
                });
            }
        };
        let len = len.parse::<u32>().map_err(|_| ParseError::Malformed {
            path: path_str.clone(),
            line: line_num,
            msg: format!("invalid chromosome length: {:?}", len),
        })?;
        genome.insert(name.to_string(), len);
    }

    if genome.is_empty() {
        return Err(ParseError::NoRecords(path_str));
    }
    info!("Read {} chromosome sizes from {}", genome.len(), path_str);

    keep_only(genome, chrom, &path_str)
}

///
/// Read genome metadata, picking the parser from the file extension: `.fai`,
/// `.sizes`, `.txt` and `.tsv` (optionally `.gz`) are sizes files, anything else is
/// treated as FASTA.
///
pub fn read_genome<T: AsRef<Path>>(path: T, chrom: Option<&str>) -> Result<Genome> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(name);
    let is_sizes = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SIZES_EXTENSIONS.contains(&ext));

    match is_sizes {
        true => read_chrom_sizes(path, chrom),
        false => read_fasta_lengths(path, chrom),
    }
}
