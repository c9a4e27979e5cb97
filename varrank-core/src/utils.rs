use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}

///
/// Buffered output file, gzip-compressed when its path ends in `.gz`. Call
/// [DynamicWriter::finish] when done: it flushes and, for gzip, writes the trailer,
/// reporting any error instead of losing it on drop.
///
pub enum DynamicWriter {
    Plain(BufWriter<File>),
    Gzip(BufWriter<GzEncoder<File>>),
}

impl DynamicWriter {
    pub fn finish(self) -> std::io::Result<()> {
        match self {
            DynamicWriter::Plain(mut writer) => writer.flush(),
            DynamicWriter::Gzip(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?;
                Ok(())
            }
        }
    }
}

impl Write for DynamicWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            DynamicWriter::Plain(writer) => writer.write(buf),
            DynamicWriter::Gzip(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            DynamicWriter::Plain(writer) => writer.flush(),
            DynamicWriter::Gzip(writer) => writer.flush(),
        }
    }
}

///
/// Get a writer for `path`, gzip-compressing when the path ends in `.gz`.
/// Parent directories are created when missing.
///
pub fn get_dynamic_writer(path: &Path) -> Result<DynamicWriter> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
    }

    let file = File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
    let writer = match is_gzipped(path) {
        true => DynamicWriter::Gzip(BufWriter::new(GzEncoder::new(file, Compression::default()))),
        false => DynamicWriter::Plain(BufWriter::new(file)),
    };

    Ok(writer)
}

///
/// Iterate the data lines of a reader: trailing whitespace trimmed, blank lines and
/// `#` comment lines skipped. Yields `(1-based line number, line)`.
///
pub fn data_lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<(usize, String)>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(i, line)| match line {
            Ok(line) => {
                let trimmed = line.trim_end();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    None
                } else {
                    Some(Ok((i + 1, trimmed.to_string())))
                }
            }
            Err(e) => Some(Err(e.into())),
        })
}
