//! CSV export of distance rows.
//!
//! One header row (`ASSET_ID` followed by the distance columns), then one row
//! per asset. Cells for columns a row does not carry are left empty.

use std::io::Write;

use thiserror::Error;

use crate::distance::{DistanceColumn, DistanceRow};

/// Header of the asset identifier column.
pub const ASSET_ID_COLUMN: &str = "ASSET_ID";

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write rows as CSV with the given column layout.
pub fn write_rows_csv<W: Write>(
    writer: W,
    columns: &[DistanceColumn],
    rows: &[DistanceRow],
) -> Result<(), ReportError> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(
        std::iter::once(ASSET_ID_COLUMN).chain(columns.iter().map(|c| c.key.as_str())),
    )?;

    for row in rows {
        let mut record = Vec::with_capacity(columns.len() + 1);
        record.push(row.asset_id().to_string());
        for column in columns {
            record.push(row.get(&column.key).map(format_value).unwrap_or_default());
        }
        csv.write_record(&record)?;
    }

    csv.flush()?;
    Ok(())
}

/// Write the column dictionary (`COLUMN,DESCRIPTION`) as CSV.
pub fn write_columns_csv<W: Write>(
    writer: W,
    columns: &[DistanceColumn],
) -> Result<(), ReportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["COLUMN", "DESCRIPTION"])?;
    for column in columns {
        csv.write_record([column.key.as_str(), column.description.as_str()])?;
    }
    csv.flush()?;
    Ok(())
}

/// Shortest decimal form that reads back to the same value.
fn format_value(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(key: &str) -> DistanceColumn {
        DistanceColumn {
            key: key.to_string(),
            description: format!("{} description", key),
        }
    }

    #[test]
    fn test_rows_csv() {
        let columns = vec![column("DIST_ROAD"), column("DIST_NORTH_PLAZA")];

        let mut a = DistanceRow::new("a-1");
        a.extend([("DIST_NORTH_PLAZA", 1.4142136), ("DIST_ROAD", 3.0)]);
        let mut b = DistanceRow::new("a-2");
        b.extend([("DIST_ROAD", 0.0)]);

        let mut out = Vec::new();
        write_rows_csv(&mut out, &columns, &[a, b]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ASSET_ID,DIST_ROAD,DIST_NORTH_PLAZA\na-1,3,1.4142136\na-2,0,\n"
        );
    }

    #[test]
    fn test_columns_csv_quotes_descriptions() {
        let columns = vec![DistanceColumn {
            key: "DIST_DST_CULT_EDU".to_string(),
            description: "Nearest district, culture".to_string(),
        }];

        let mut out = Vec::new();
        write_columns_csv(&mut out, &columns).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "COLUMN,DESCRIPTION\nDIST_DST_CULT_EDU,\"Nearest district, culture\"\n"
        );
    }
}
