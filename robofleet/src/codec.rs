//! The tabular codec: CSV text to robot records and back.
//!
//! Storage is one flat CSV file with a fixed header row
//! (`id,alias,type,used_by,start_time,end_time`) and one row per robot.
//! Parsing is serde-typed: empty cells in the optional columns become
//! `None`, numeric cells in the time columns become `i64`, and anything
//! that does not fit the row shape is a [`Error::Format`](crate::Error).
//!
//! The round-trip contract is `parse(stringify(robots)) == robots` for any
//! robot list; `proptests` below exercises it.

use crate::error::Result;
use crate::robot::Robot;

/// Storage column order. Must match the field order of [`Robot`].
pub const COLUMN_HEADERS: [&str; 6] = [
    "id",
    "alias",
    "type",
    "used_by",
    "start_time",
    "end_time",
];

/// Parses CSV data into robot records, preserving file order.
///
/// The first row is the header; each data row becomes one [`Robot`].
/// Takes raw bytes so that undecodable storage is a format error, not an
/// I/O error: decoding happens here, cell by cell.
///
/// # Errors
///
/// Returns [`Error::Format`](crate::Error) when a row has an inconsistent
/// column count, a time cell is non-numeric, or a cell is not valid
/// UTF-8.
///
/// # Examples
///
/// ```
/// let text = "id,alias,type,used_by,start_time,end_time\nR1,lefty,arm,,,\n";
/// let robots = robofleet::codec::parse(text).unwrap();
/// assert_eq!(robots.len(), 1);
/// assert_eq!(robots[0].id, "R1");
/// assert!(robots[0].is_free());
/// ```
pub fn parse(data: impl AsRef<[u8]>) -> Result<Vec<Robot>> {
    let mut reader = csv::ReaderBuilder::new().from_reader(data.as_ref());
    let mut robots = Vec::new();
    for row in reader.deserialize() {
        robots.push(row?);
    }
    Ok(robots)
}

/// Serializes robot records back into CSV text.
///
/// Emits the header line followed by one line per robot in sequence order;
/// absent optional fields render as empty strings and the column order is
/// identical across rows.
///
/// # Errors
///
/// Returns an error if writing or flushing the buffer fails.
pub fn stringify(robots: &[Robot]) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new().from_writer(&mut buf);
        writer.write_record(COLUMN_HEADERS)?;
        for robot in robots {
            let start = robot.start_time.map(|v| v.to_string()).unwrap_or_default();
            let end = robot.end_time.map(|v| v.to_string()).unwrap_or_default();
            writer.write_record([
                robot.id.as_str(),
                robot.alias.as_str(),
                robot.kind.as_str(),
                robot.used_by.as_deref().unwrap_or(""),
                start.as_str(),
                end.as_str(),
            ])?;
        }
        writer.flush()?;
    }
    String::from_utf8(buf)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

#[cfg(test)]
mod proptests;
