use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Date32Array, Float64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use parquet::arrow::ArrowWriter;

use super::model::{Metric, ProductionSeries};
use crate::error::{DataError, Result};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write a series to disk.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` / `.pq` – `date` (Date32) plus one Float64 column per metric
/// * `.csv`             – header row, dates as `YYYY-MM-DD`
/// * `.json`            – records-oriented array of objects
pub fn write_file(path: &Path, series: &ProductionSeries) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => write_parquet(path, series),
        "csv" => write_csv(path, series),
        "json" => write_json(path, series),
        other => Err(DataError::UnsupportedFormat(other.to_string())),
    }?;

    log::info!("Wrote {} records to {}", series.len(), path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV / JSON writers
// ---------------------------------------------------------------------------

fn write_csv(path: &Path, series: &ProductionSeries) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in series {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(path: &Path, series: &ProductionSeries) -> Result<()> {
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, &series.records)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Parquet writer
// ---------------------------------------------------------------------------

/// Days since 1970-01-01, the Arrow `Date32` representation.
fn to_date32(date: NaiveDate) -> i32 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();
    date.signed_duration_since(epoch).num_days() as i32
}

fn record_batch(series: &ProductionSeries) -> Result<RecordBatch> {
    let mut fields = vec![Field::new("date", DataType::Date32, false)];
    fields.extend(
        Metric::ALL
            .iter()
            .map(|m| Field::new(m.column(), DataType::Float64, false)),
    );
    let schema = Arc::new(Schema::new(fields));

    let dates = Date32Array::from(
        series.records.iter().map(|r| to_date32(r.date)).collect::<Vec<_>>(),
    );
    let mut columns: Vec<arrow::array::ArrayRef> = vec![Arc::new(dates)];
    for metric in Metric::ALL {
        columns.push(Arc::new(Float64Array::from(series.column(metric))));
    }

    Ok(RecordBatch::try_new(schema, columns)?)
}

fn write_parquet(path: &Path, series: &ProductionSeries) -> Result<()> {
    let batch = record_batch(series)?;
    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generator::simulate_seeded;
    use parquet::file::reader::{FileReader, SerializedFileReader};
    use tempfile::TempDir;

    fn sample() -> ProductionSeries {
        simulate_seeded(10, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), 3)
    }

    #[test]
    fn date32_counts_days_from_epoch() {
        assert_eq!(to_date32(NaiveDate::from_ymd_opt(1970, 1, 2).unwrap()), 1);
        assert_eq!(to_date32(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()), 19358);
    }

    #[test]
    fn csv_has_header_and_one_row_per_day() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("algae.csv");
        write_file(&path, &sample()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, ["date", "energy_generated", "carbon_content", "ph_level"]);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 10);
        assert_eq!(&rows[0][0], "2023-01-01");
        assert_eq!(&rows[9][0], "2023-01-10");
    }

    #[test]
    fn json_is_an_array_of_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("algae.json");
        write_file(&path, &sample()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0]["date"], "2023-01-01");
        assert!(rows[0]["ph_level"].is_f64());
    }

    #[test]
    fn parquet_holds_every_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("algae.parquet");
        write_file(&path, &sample()).unwrap();

        let reader = SerializedFileReader::new(File::open(&path).unwrap()).unwrap();
        let meta = reader.metadata();
        assert_eq!(meta.file_metadata().num_rows(), 10);
        assert_eq!(meta.file_metadata().schema_descr().num_columns(), 4);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let err = write_file(&dir.path().join("algae.xlsx"), &sample()).unwrap_err();
        assert!(matches!(err, DataError::UnsupportedFormat(ref ext) if ext == "xlsx"));
    }
}
