//! IO
//!
//! Loading categorical tables from CSV files. The header row names the
//! columns; one of them is chosen as the label and the rest become the
//! attributes, in file order.
use crate::data::Table;
use crate::errors::Id3Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a table from a CSV file.
///
/// * `path` - Path to a CSV file with a header row.
/// * `label` - Name of the column holding the label.
pub fn read_csv<P: AsRef<Path>>(path: P, label: &str) -> Result<Table, Id3Error> {
    let file = File::open(path.as_ref()).map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
    read_csv_from_reader(file, label)
}

/// Read a table from any source of CSV data with a header row.
pub fn read_csv_from_reader<R: Read>(reader: R, label: &str) -> Result<Table, Id3Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(|e| Id3Error::UnableToRead(e.to_string()))?.clone();
    let label_index = headers
        .iter()
        .position(|h| h == label)
        .ok_or_else(|| Id3Error::UnknownAttribute(label.to_string()))?;
    let attributes: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != label_index)
        .map(|(_, h)| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<String>>());
    }

    Table::new(rows, attributes, label_index)
}
