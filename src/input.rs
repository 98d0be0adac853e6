//! CSV row reader
//!
//! Accepts rows of either `control,label` or `slot,control,label`. The slot
//! column of the three-field layout is not used: slots are numbered by
//! position.

use crate::error::{Error, Result};
use crate::slots::SlotRow;
use std::io::Read;

/// Iterator over the slot rows of a CSV source
pub struct RowReader<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
    /// Line on which the last record started
    line: u64,
}

impl<R: Read> RowReader<R> {
    /// Create a reader. When `has_header` is set the first record is dropped.
    pub fn new(input: R, has_header: bool) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(has_header)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(input);

        Self {
            records: reader.into_records(),
            line: 0,
        }
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<SlotRow>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => return Some(Err(Error::Csv(e))),
            };
            // Physical line; csv drops blank lines without yielding a record
            self.line = record.position().map_or(self.line + 1, |pos| pos.line());

            if record.iter().all(str::is_empty) {
                continue;
            }

            return Some(parse_record(self.line, &record));
        }
    }
}

fn parse_record(row: u64, record: &csv::StringRecord) -> Result<SlotRow> {
    let (control, label) = match record.len() {
        2 => (&record[0], &record[1]),
        3 => (&record[1], &record[2]),
        n => {
            return Err(Error::Parse {
                row,
                message: format!("expected 2 or 3 fields, found {}", n),
            })
        }
    };
    Ok(SlotRow::new(row, control, label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(text: &str, has_header: bool) -> Result<Vec<SlotRow>> {
        RowReader::new(text.as_bytes(), has_header).collect()
    }

    #[test]
    fn test_two_field_rows() {
        let rows = read_all("60,Kick\n61,Snare\n", false).unwrap();
        assert_eq!(
            rows,
            vec![SlotRow::new(1, "60", "Kick"), SlotRow::new(2, "61", "Snare")]
        );
    }

    #[test]
    fn test_header_skipped() {
        let rows = read_all("cc,label\n60,Kick\n", true).unwrap();
        assert_eq!(rows, vec![SlotRow::new(2, "60", "Kick")]);
    }

    #[test]
    fn test_three_field_rows_ignore_slot_column() {
        let rows = read_all("slot,cc,label\n7,74,Cutoff\n", true).unwrap();
        assert_eq!(rows, vec![SlotRow::new(2, "74", "Cutoff")]);
    }

    #[test]
    fn test_fields_trimmed_and_quoted() {
        let rows = read_all(" 74 ,\"Cut, off\"\n", false).unwrap();
        assert_eq!(rows, vec![SlotRow::new(1, "74", "Cut, off")]);
    }

    #[test]
    fn test_blank_rows_ignored() {
        let rows = read_all("60,Kick\n,\n61,Snare\n", false).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].row, 3);
    }

    #[test]
    fn test_row_is_line_after_blank_line() {
        let rows = read_all("60,Kick\n\n61,Snare\n", false).unwrap();
        assert_eq!(rows[1], SlotRow::new(3, "61", "Snare"));

        let rows = read_all("\ncc,label\n60,Kick\n\n61,Snare\n", true).unwrap();
        assert_eq!(rows[0].row, 3);
        assert_eq!(rows[1].row, 5);
    }

    #[test]
    fn test_wrong_field_count() {
        let err = read_all("60,Kick\n61\n", false).unwrap_err();
        assert!(matches!(err, Error::Parse { row: 2, .. }));
    }
}
