//! Row pipeline: validate each row, compute its fee, collect outputs in order.
//!
//! The first invalid row aborts the run; no fees are returned for any row in
//! that case.

use crate::engine::FeeEngine;
use crate::error::Result;
use crate::validator::validate;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::io::{BufRead, BufReader, Read, Write};

/// Computes fees for in-memory rows with a fresh engine.
///
/// Rows are numbered from 1 in errors.
pub fn calculate_fees<I, R, S>(rows: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut engine = FeeEngine::new();
    let mut fees = Vec::new();

    for (idx, row) in rows.into_iter().enumerate() {
        fees.push(process_row(&mut engine, row.as_ref(), idx + 1)?);
    }

    Ok(fees)
}

/// Computes fees for a headerless CSV source with a fresh engine.
///
/// Every line is one row, numbered from 1; a blank line is an invalid row.
pub fn process_csv<R: Read>(reader: R) -> Result<Vec<String>> {
    process_csv_with(&mut FeeEngine::new(), reader)
}

/// Like [`process_csv`], but runs on a caller-supplied engine.
pub fn process_csv_with<R: Read>(engine: &mut FeeEngine, reader: R) -> Result<Vec<String>> {
    let mut fees = Vec::new();
    let mut record = StringRecord::new();

    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        split_line(&line, &mut record)?;

        // the csv reader yields no record for a blank line; keep it as one empty field
        let fields: Vec<&str> = if record.is_empty() {
            vec![line.as_str()]
        } else {
            record.iter().collect()
        };

        fees.push(process_row(engine, &fields, idx + 1)?);
    }

    info!(
        "Computed {} fees over {} user-weeks",
        fees.len(),
        engine.ledger().len()
    );
    Ok(fees)
}

/// Splits one line into fields. Leaves `record` empty for a blank line.
fn split_line(line: &str, record: &mut StringRecord) -> Result<()> {
    record.clear();
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes())
        .read_record(record)?;
    Ok(())
}

fn process_row<S: AsRef<str>>(
    engine: &mut FeeEngine,
    fields: &[S],
    row: usize,
) -> Result<String> {
    let op = validate(fields, row)?;
    let fee = engine.calculate(&op)?;
    debug!("Row {}: {:?} {} -> {}", row, op.kind, op.currency, fee);
    Ok(fee)
}

/// Writes one fee per line.
pub fn write_output<W: Write>(fees: &[String], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for fee in fees {
        csv_writer.write_record([fee])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FeeError, Field};
    use std::io::Cursor;

    #[test]
    fn test_calculate_fees_in_memory() {
        let rows = vec![
            vec!["2016-01-05", "1", "natural", "cash_in", "200.00", "EUR"],
            vec!["2016-01-06", "2", "legal", "cash_out", "300.00", "EUR"],
        ];

        let fees = calculate_fees(&rows).unwrap();
        assert_eq!(fees, vec!["5.00", "0.90"]);
    }

    #[test]
    fn test_process_csv_preserves_order() {
        let csv = "2016-01-06,1,natural,cash_out,1200,EUR\n\
                   2016-01-05,2,legal,cash_in,100,EUR\n\
                   2016-01-07,1,natural,cash_out,100,EUR\n";

        let fees = process_csv(Cursor::new(csv)).unwrap();
        assert_eq!(fees, vec!["0.60", "3.00", "0.30"]);
    }

    #[test]
    fn test_process_csv_fails_fast_with_line_number() {
        let csv = "2016-01-06,1,natural,cash_out,100,EUR\n\
                   2016-01-06,1,natural,cash_out,100,EURO\n\
                   2016-01-06,1,natural,cash_out,100,XXX\n";

        let err = process_csv(Cursor::new(csv)).unwrap_err();
        assert_eq!(err.validation_site(), Some((2, Field::Currency)));
    }

    #[test]
    fn test_process_csv_short_row() {
        let csv = "2016-01-06,1,natural,cash_out,100\n";

        let err = process_csv(Cursor::new(csv)).unwrap_err();
        assert!(matches!(
            err,
            FeeError::Validation {
                row: 1,
                field: Field::Fields
            }
        ));
    }

    #[test]
    fn test_process_csv_blank_line_is_invalid_row() {
        let csv = "2016-01-05,1,natural,cash_in,100,EUR\n\
                   \n\
                   2016-01-05,1,natural,cash_in,100,EUR\n";

        let err = process_csv(Cursor::new(csv)).unwrap_err();
        assert_eq!(err.validation_site(), Some((2, Field::Fields)));
    }

    #[test]
    fn test_process_csv_whitespace_line_is_invalid_row() {
        let csv = "2016-01-05,1,natural,cash_in,100,EUR\n   \n";

        let err = process_csv(Cursor::new(csv)).unwrap_err();
        assert_eq!(err.validation_site(), Some((2, Field::Fields)));
    }

    #[test]
    fn test_process_csv_crlf_line_endings() {
        let csv = "2016-01-05,1,natural,cash_in,100,EUR\r\n2016-01-06,2,legal,cash_out,100,EUR\r\n";

        let fees = process_csv(Cursor::new(csv)).unwrap();
        assert_eq!(fees, vec!["3.00", "0.50"]);
    }

    #[test]
    fn test_process_csv_overflow_reports_amount() {
        let csv = "2016-01-05,1,natural,cash_in,100,EUR\n\
                   2016-01-05,1,natural,cash_in,79228162514264337593543950335,EUR\n";

        let err = process_csv(Cursor::new(csv)).unwrap_err();
        assert_eq!(err.validation_site(), Some((2, Field::Amount)));
    }

    #[test]
    fn test_process_csv_empty_input() {
        let fees = process_csv(Cursor::new("")).unwrap();
        assert!(fees.is_empty());
    }

    #[test]
    fn test_write_output() {
        let fees = vec!["0.60".to_string(), "3.00".to_string(), "648".to_string()];
        let mut output = Vec::new();
        write_output(&fees, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "0.60\n3.00\n648\n");
    }
}
