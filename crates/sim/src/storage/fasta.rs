//! Sequence-record files.
//!
//! Arrays are written as FASTA: one record per unit in array order, a
//! `>{index}` header with a 1-based index and the unit's bases on the next
//! line. Reading accepts any header text, sequence wrapped over several lines
//! and blank lines, but every record must hold exactly one unit.

use crate::base::RepeatUnit;
use crate::color::Colorizer;
use crate::errors::{SequenceError, StorageError};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write `units` as FASTA records.
pub fn write_fasta<'a, W, I>(units: I, writer: &mut W) -> Result<(), StorageError>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a RepeatUnit>,
{
    for (i, unit) in units.into_iter().enumerate() {
        writeln!(writer, ">{}", i + 1)?;
        writeln!(writer, "{unit}")?;
    }
    Ok(())
}

/// Write `units` to a FASTA file at `path`, replacing it.
pub fn write_fasta_file<'a, I>(units: I, path: impl AsRef<Path>) -> Result<(), StorageError>
where
    I: IntoIterator<Item = &'a RepeatUnit>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_fasta(units, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Parse FASTA records into units, in file order.
///
/// # Errors
/// - `MissingHeader` if sequence data appears before the first `>` line
/// - `InvalidRecord` if a record's bases do not form a valid unit
pub fn read_fasta<R: BufRead>(reader: R) -> Result<Vec<RepeatUnit>, StorageError> {
    let mut units = Vec::new();
    let mut current: Option<String> = None;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('>') {
            if let Some(seq) = current.take() {
                units.push(parse_record(units.len() + 1, &seq)?);
            }
            current = Some(String::new());
        } else {
            match current.as_mut() {
                Some(seq) => seq.push_str(line),
                None => return Err(StorageError::MissingHeader { line: line_no + 1 }),
            }
        }
    }

    if let Some(seq) = current {
        units.push(parse_record(units.len() + 1, &seq)?);
    }
    Ok(units)
}

/// Read a FASTA file from `path`.
pub fn read_fasta_file(path: impl AsRef<Path>) -> Result<Vec<RepeatUnit>, StorageError> {
    read_fasta(BufReader::new(File::open(path)?))
}

fn parse_record(record: usize, seq: &str) -> Result<RepeatUnit, StorageError> {
    seq.parse()
        .map_err(|source: SequenceError| StorageError::InvalidRecord { record, source })
}

/// Write a CSV table `index,hash,r,g,b` with one row per unit.
///
/// Indices are 1-based to match the FASTA headers; `hash` is the unit's
/// FNV-1a hash.
pub fn write_color_table<'a, W, I>(
    units: I,
    colorizer: &mut Colorizer,
    writer: &mut W,
) -> Result<(), StorageError>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a RepeatUnit>,
{
    writeln!(writer, "index,hash,r,g,b")?;
    for (i, unit) in units.into_iter().enumerate() {
        let color = colorizer.get_color(unit);
        writeln!(
            writer,
            "{},{},{},{},{}",
            i + 1,
            unit.fnv1a(),
            color.r,
            color.g,
            color.b
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{Nucleotide, DEFAULT_MONOMER};
    use crate::genome::RepeatArray;
    use std::io::Cursor;

    fn sample_array() -> RepeatArray {
        let mut mutated = RepeatUnit::monomer();
        mutated.set(0, Nucleotide::C);
        RepeatArray::from_units(vec![
            RepeatUnit::monomer(),
            mutated,
            RepeatUnit::uniform(Nucleotide::T),
        ])
    }

    #[test]
    fn test_write_format() {
        let array = RepeatArray::filled(&RepeatUnit::monomer(), 2);
        let mut buf = Vec::new();
        write_fasta(&array, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, format!(">1\n{DEFAULT_MONOMER}\n>2\n{DEFAULT_MONOMER}\n"));
    }

    #[test]
    fn test_write_then_read() {
        let array = sample_array();
        let mut buf = Vec::new();
        write_fasta(&array, &mut buf).unwrap();
        let units = read_fasta(Cursor::new(buf)).unwrap();
        assert_eq!(units, array.as_slice());
    }

    #[test]
    fn test_read_wrapped_and_blank_lines() {
        let (head, tail) = DEFAULT_MONOMER.split_at(60);
        let text = format!("\n>unit_a some description\n{head}\n\n{tail}\n>b\n{}\n", DEFAULT_MONOMER.to_lowercase());
        let units = read_fasta(Cursor::new(text)).unwrap();
        assert_eq!(units.len(), 2);
        assert!(units.iter().all(|u| *u == RepeatUnit::monomer()));
    }

    #[test]
    fn test_read_empty_input() {
        assert!(read_fasta(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_read_missing_header() {
        let err = read_fasta(Cursor::new(format!("{DEFAULT_MONOMER}\n"))).unwrap_err();
        assert!(matches!(err, StorageError::MissingHeader { line: 1 }));
    }

    #[test]
    fn test_read_bad_record_reports_index() {
        let text = format!(">1\n{DEFAULT_MONOMER}\n>2\nACGT\n");
        match read_fasta(Cursor::new(text)).unwrap_err() {
            StorageError::InvalidRecord { record, source } => {
                assert_eq!(record, 2);
                assert!(matches!(source, SequenceError::WrongLength { found: 4, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_color_table() {
        let array = sample_array();
        let mut colorizer = Colorizer::new(42);
        let mut buf = Vec::new();
        write_color_table(&array, &mut colorizer, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "index,hash,r,g,b");
        assert!(lines[1].starts_with(&format!("1,{},", RepeatUnit::monomer().fnv1a())));
        assert_eq!(lines[3].split(',').count(), 5);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("array.fasta");
        let array = sample_array();
        write_fasta_file(&array, &path).unwrap();
        assert_eq!(read_fasta_file(&path).unwrap(), array.as_slice());
    }
}
