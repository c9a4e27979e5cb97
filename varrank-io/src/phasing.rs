use std::path::Path;

use log::info;

use varrank_core::models::Phasing;
use varrank_core::utils::{data_lines, get_dynamic_reader};

use crate::error::{ParseError, Result};

///
/// Read a phasing file: one line per variant row (in variant table order), holding
/// one comma separated allele index per haplotype. `0` is the reference allele and
/// `k` the k-th alternate allele of that row.
///
/// Rows are matched to variants by position in the file, so a phasing file only fits
/// the full, unfiltered variant file it was written for. Restricting the variants to
/// one chromosome needs a phasing file for that chromosome.
///
pub fn read_phasing<T: AsRef<Path>>(path: T) -> Result<Phasing> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    let reader = get_dynamic_reader(path)?;

    let mut rows: Vec<Vec<u8>> = Vec::new();
    let mut expected: Option<usize> = None;

    for line in data_lines(reader) {
        let (line_num, line) = line?;
        let row = line
            .split(',')
            .map(|a| a.trim().parse::<u8>())
            .collect::<std::result::Result<Vec<u8>, _>>()
            .map_err(|e| ParseError::Malformed {
                path: path_str.clone(),
                line: line_num,
                msg: format!("invalid allele index: {}", e),
            })?;

        match expected {
            Some(n) if n != row.len() => {
                return Err(ParseError::Malformed {
                    path: path_str,
                    line: line_num,
                    msg: format!("expected {} haplotypes, found {}", n, row.len()),
                });
            }
            Some(_) => {}
            None => expected = Some(row.len()),
        }
        rows.push(row);
    }

    let phasing = Phasing::new(rows)?;
    info!(
        "Read phasing for {} variants across {} haplotypes from {}",
        phasing.len(),
        phasing.num_haplotypes(),
        path_str
    );

    Ok(phasing)
}
