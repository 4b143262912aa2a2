use crate::experiment::Algorithm;
use crate::report::row::MeasurementRow;
use crate::report::table::MeasurementTable;
use anyhow::Context;
use csv::ReaderBuilder;
use std::path::Path;

/// Read one algorithm's measurement table.
///
/// The file must carry the header row and exactly the fixed 15 data rows;
/// the table's identity comes from its file name, so the `algorithmName`
/// column is carried along but not checked.
pub fn read_table(path: &Path, algorithm: Algorithm) -> anyhow::Result<MeasurementTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("read measurement table {}", path.display()))?;

    let mut rows: Vec<MeasurementRow> = Vec::new();
    for result in reader.deserialize() {
        let row: MeasurementRow =
            result.with_context(|| format!("parse measurement table {}", path.display()))?;
        rows.push(row);
    }

    MeasurementTable::from_rows(algorithm, rows)
        .with_context(|| format!("measurement table {}", path.display()))
}

/// Write a measurement table with its header row.
pub fn write_table(path: &Path, table: &MeasurementTable) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create measurement table {}", path.display()))?;
    for row in table.rows() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
