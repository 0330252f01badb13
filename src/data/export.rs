use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Float64Builder, ListBuilder, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

use super::model::{AreaRecord, AreaStatus, ContractType, ResourceType};

/// Extensions accepted by [`export_areas`].
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["csv", "json", "parquet", "pq"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write the given areas to a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – one row per area, boundary as `lon lat;lon lat;...`
/// * `.json`    – `[{ "name": ..., "boundary": [{ "lon": .., "lat": .. }] }, ...]`
/// * `.parquet` – flat columns plus `boundary` as interleaved lon/lat `List<Float64>`
pub fn export_areas(path: &Path, areas: &[&AreaRecord]) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let written = match ext.as_str() {
        "parquet" | "pq" => write_parquet(path, areas),
        "json" => write_json(path, areas),
        "csv" => write_csv(path, areas),
        other => Err(anyhow::anyhow!("Unsupported export extension: .{other}")),
    };
    written.with_context(|| format!("exporting {} areas to {}", areas.len(), path.display()))?;

    log::info!("Exported {} areas to {}", areas.len(), path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON writer
// ---------------------------------------------------------------------------

fn write_json(path: &Path, areas: &[&AreaRecord]) -> Result<()> {
    let file = File::create(path).context("creating JSON file")?;
    serde_json::to_writer_pretty(file, areas).context("writing JSON")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

const CSV_HEADER: [&str; 7] = [
    "name",
    "contract_type",
    "status",
    "resource_type",
    "investment_musd",
    "reserves_mmboe",
    "boundary",
];

/// Flat CSV row; the boundary is folded into one text cell. Field order
/// matches [`CSV_HEADER`].
#[derive(Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    contract_type: ContractType,
    status: AreaStatus,
    resource_type: ResourceType,
    investment_musd: f64,
    reserves_mmboe: f64,
    boundary: String,
}

fn write_csv(path: &Path, areas: &[&AreaRecord]) -> Result<()> {
    // header written up front so an empty export is still a valid table
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .context("creating CSV file")?;
    writer.write_record(CSV_HEADER).context("writing CSV header")?;
    for (row_no, area) in areas.iter().enumerate() {
        let boundary = area
            .boundary
            .vertices()
            .iter()
            .map(|p| format!("{} {}", p.lon, p.lat))
            .collect::<Vec<_>>()
            .join(";");
        writer
            .serialize(CsvRow {
                name: &area.name,
                contract_type: area.contract_type,
                status: area.status,
                resource_type: area.resource_type,
                investment_musd: area.investment_musd,
                reserves_mmboe: area.reserves_mmboe,
                boundary,
            })
            .with_context(|| format!("CSV row {row_no}"))?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Parquet writer
// ---------------------------------------------------------------------------

fn area_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("name", DataType::Utf8, false),
        Field::new("contract_type", DataType::Utf8, false),
        Field::new("status", DataType::Utf8, false),
        Field::new("resource_type", DataType::Utf8, false),
        Field::new("investment_musd", DataType::Float64, false),
        Field::new("reserves_mmboe", DataType::Float64, false),
        Field::new(
            "boundary",
            DataType::List(Arc::new(Field::new("item", DataType::Float64, true))),
            false,
        ),
    ]))
}

fn write_parquet(path: &Path, areas: &[&AreaRecord]) -> Result<()> {
    let mut boundary_builder = ListBuilder::new(Float64Builder::new());
    for area in areas {
        let values = boundary_builder.values();
        for p in area.boundary.vertices() {
            values.append_value(p.lon);
            values.append_value(p.lat);
        }
        boundary_builder.append(true);
    }

    let names: Vec<&str> = areas.iter().map(|a| a.name.as_str()).collect();
    let contract_types: Vec<&str> = areas.iter().map(|a| a.contract_type.code()).collect();
    let statuses: Vec<&str> = areas.iter().map(|a| a.status.code()).collect();
    let resource_types: Vec<&str> = areas.iter().map(|a| a.resource_type.code()).collect();
    let investment: Vec<f64> = areas.iter().map(|a| a.investment_musd).collect();
    let reserves: Vec<f64> = areas.iter().map(|a| a.reserves_mmboe).collect();

    let schema = area_schema();
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(names)),
            Arc::new(StringArray::from(contract_types)),
            Arc::new(StringArray::from(statuses)),
            Arc::new(StringArray::from(resource_types)),
            Arc::new(Float64Array::from(investment)),
            Arc::new(Float64Array::from(reserves)),
            Arc::new(boundary_builder.finish()),
        ],
    )
    .context("building area record batch")?;

    let file = File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet record batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use arrow::array::{Array, AsArray};
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    use super::*;
    use crate::data::engine::compute_reference;
    use crate::data::filter::FilterSelection;

    fn all_areas() -> Vec<&'static AreaRecord> {
        compute_reference(&FilterSelection::all()).matched
    }

    #[test]
    fn csv_has_header_and_one_row_per_area() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("areas.csv");
        export_areas(&path, &all_areas()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers[0], "name");
        assert_eq!(headers[6], "boundary");

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "Bloque Norte");
        assert_eq!(&rows[0][1], "assignment");
        assert_eq!(&rows[2][2], "suspended");
        assert_eq!(&rows[0][6], "-101 24;-100 24;-100 25;-101 25");
    }

    #[test]
    fn json_is_an_array_of_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("areas.JSON");
        export_areas(&path, &all_areas()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1]["name"], "Bloque Este");
        assert_eq!(records[1]["resource_type"], "unconventional");
        assert_eq!(records[1]["boundary"].as_array().unwrap().len(), 4);
        assert_eq!(records[1]["boundary"][0]["lon"], -98.0);
    }

    #[test]
    fn parquet_round_trips_schema_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("areas.parquet");
        export_areas(&path, &all_areas()).unwrap();

        let file = File::open(&path).unwrap();
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .unwrap()
            .build()
            .unwrap();
        let batches: Vec<RecordBatch> = reader.map(|b| b.unwrap()).collect();
        let rows: usize = batches.iter().map(|b| b.num_rows()).sum();
        assert_eq!(rows, 3);

        let batch = &batches[0];
        let names = batch.column(0).as_string::<i32>();
        assert_eq!(names.value(2), "Bloque Pacífico");
        let boundary = batch.column(6).as_list::<i32>();
        assert_eq!(boundary.value(0).len(), 8);
    }

    #[test]
    fn empty_selection_still_writes_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        export_areas(&path, &[]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn empty_csv_export_keeps_the_header_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        export_areas(&path, &[]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "name,contract_type,status,resource_type,investment_musd,reserves_mmboe,boundary\n"
        );

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.headers().unwrap().len(), 7);
        assert_eq!(reader.records().count(), 0);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("areas.xlsx");
        let err = export_areas(&path, &all_areas()).unwrap_err();
        assert!(format!("{err:#}").contains("Unsupported export extension: .xlsx"));
        assert!(!path.exists());
    }
}
