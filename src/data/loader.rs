use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the Pokédex table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row naming the record columns; extra columns ignored
/// * `.json`    – `[{ "name": "Bulbasaur", "generation": 1, ... }, ...]`
/// * `.parquet` – one column per record field, any int/float numeric type
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV")?;
            load_csv_reader(file)
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            load_json_str(&text)
        }
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Row coercion shared by all formats
// ---------------------------------------------------------------------------

/// A row that could not be turned into a [`Record`]. Such rows are skipped.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("row {row}: missing name")]
    MissingName { row: usize },
    #[error("row {row}: missing primary type")]
    MissingPrimaryType { row: usize },
    #[error("row {row}: generation {value:?} is not a positive integer")]
    InvalidGeneration { row: usize, value: Option<f64> },
    #[error("row {row}: pokedex number {value:?} is not a non-negative integer")]
    InvalidNumber { row: usize, value: Option<f64> },
}

/// One row as it appears in the file, before coercion.
#[derive(Debug, Default, Deserialize)]
struct RawRecord {
    #[serde(default, deserialize_with = "lenient_number")]
    pokedex_number: Option<f64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    generation: Option<f64>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    species: Option<String>,
    #[serde(default)]
    type_1: Option<String>,
    #[serde(default)]
    type_2: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    height_m: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    weight_kg: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    hp: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    attack: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    defense: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    sp_attack: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    sp_defense: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    speed: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    total_points: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    catch_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    percentage_male: Option<f64>,
}

/// A numeric cell: a number, a number written as text, or anything else
/// (empty, null, unparsable), which becomes `None`.
fn lenient_number<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<NumberOrText>::deserialize(de) {
        Ok(Some(NumberOrText::Number(n))) => Some(n),
        Ok(Some(NumberOrText::Text(text))) => {
            let text = text.trim();
            match text.parse::<f64>() {
                Ok(n) => Some(n),
                Err(_) if text.is_empty() => None,
                Err(_) => {
                    log::debug!("Numeric cell {text:?} is not a number");
                    None
                }
            }
        }
        Ok(None) => None,
        Err(e) => {
            log::debug!("Numeric cell ignored: {e}");
            None
        }
    })
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn whole_number(v: Option<f64>) -> Option<u32> {
    v.filter(|n| n.is_finite() && *n >= 0.0 && n.fract() == 0.0 && *n <= u32::MAX as f64)
        .map(|n| n as u32)
}

impl RawRecord {
    fn into_record(self, row: usize) -> Result<Record, RecordError> {
        let name = non_empty(self.name).ok_or(RecordError::MissingName { row })?;
        let type_1 = non_empty(self.type_1).ok_or(RecordError::MissingPrimaryType { row })?;
        let generation = whole_number(self.generation)
            .filter(|g| *g > 0)
            .ok_or(RecordError::InvalidGeneration {
                row,
                value: self.generation,
            })?;
        let pokedex_number = whole_number(self.pokedex_number).ok_or(RecordError::InvalidNumber {
            row,
            value: self.pokedex_number,
        })?;
        let num = |v: Option<f64>| v.unwrap_or(f64::NAN);

        Ok(Record {
            pokedex_number,
            name,
            generation,
            status: non_empty(self.status).unwrap_or_else(|| "Normal".to_string()),
            species: non_empty(self.species).unwrap_or_default(),
            type_1,
            type_2: non_empty(self.type_2),
            height_m: num(self.height_m),
            weight_kg: num(self.weight_kg),
            hp: num(self.hp),
            attack: num(self.attack),
            defense: num(self.defense),
            sp_attack: num(self.sp_attack),
            sp_defense: num(self.sp_defense),
            speed: num(self.speed),
            total_points: num(self.total_points),
            catch_rate: num(self.catch_rate),
            percentage_male: self.percentage_male.filter(|p| p.is_finite()),
        })
    }
}

/// Coerce raw rows, skipping (and logging) the ones that cannot be used.
fn collect_records(raw: impl IntoIterator<Item = RawRecord>) -> Dataset {
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (row, rec) in raw.into_iter().enumerate() {
        match rec.into_record(row) {
            Ok(r) => records.push(r),
            Err(e) => {
                log::warn!("Skipping {e}");
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        log::warn!("{skipped} rows skipped while loading");
    }
    Dataset::from_records(records)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names matching the record fields,
/// e.g. the `pokedex_(Update_05.20).csv` export. Unknown columns are ignored,
/// an empty `type_2` cell means "no secondary type".
pub fn load_csv_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for required in ["name", "generation", "type_1"] {
        if !headers.iter().any(|h| h == required) {
            bail!("CSV missing '{required}' column");
        }
    }

    let mut raw = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let rec = result.with_context(|| format!("CSV row {row_no}"))?;
        raw.push(rec);
    }

    Ok(collect_records(raw))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`:
///
/// ```json
/// [
///   { "pokedex_number": 1, "name": "Bulbasaur", "generation": 1,
///     "type_1": "Grass", "type_2": "Poison", "hp": 45, ... },
///   ...
/// ]
/// ```
pub fn load_json_str(text: &str) -> Result<Dataset> {
    let raw: Vec<RawRecord> = serde_json::from_str(text).context("parsing JSON")?;
    Ok(collect_records(raw))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one column per record field.
///
/// Numeric columns may be stored as any integer or float type; they are cast
/// to `Float64`. String columns may be `Utf8` or `LargeUtf8`.
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut raw = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        raw.extend(raw_records_from_batch(&batch)?);
    }

    Ok(collect_records(raw))
}

fn raw_records_from_batch(batch: &RecordBatch) -> Result<Vec<RawRecord>> {
    for required in ["name", "generation", "type_1"] {
        if batch.column_by_name(required).is_none() {
            bail!("Parquet file missing '{required}' column");
        }
    }

    let n_rows = batch.num_rows();
    let strings = |name: &str| string_column(batch, name, n_rows);
    let floats = |name: &str| f64_column(batch, name, n_rows);

    let names = strings("name")?;
    let statuses = strings("status")?;
    let species = strings("species")?;
    let type_1 = strings("type_1")?;
    let type_2 = strings("type_2")?;

    let pokedex_number = floats("pokedex_number")?;
    let generation = floats("generation")?;
    let height_m = floats("height_m")?;
    let weight_kg = floats("weight_kg")?;
    let hp = floats("hp")?;
    let attack = floats("attack")?;
    let defense = floats("defense")?;
    let sp_attack = floats("sp_attack")?;
    let sp_defense = floats("sp_defense")?;
    let speed = floats("speed")?;
    let total_points = floats("total_points")?;
    let catch_rate = floats("catch_rate")?;
    let percentage_male = floats("percentage_male")?;

    Ok((0..n_rows)
        .map(|i| RawRecord {
            pokedex_number: pokedex_number[i],
            name: names[i].clone(),
            generation: generation[i],
            status: statuses[i].clone(),
            species: species[i].clone(),
            type_1: type_1[i].clone(),
            type_2: type_2[i].clone(),
            height_m: height_m[i],
            weight_kg: weight_kg[i],
            hp: hp[i],
            attack: attack[i],
            defense: defense[i],
            sp_attack: sp_attack[i],
            sp_defense: sp_defense[i],
            speed: speed[i],
            total_points: total_points[i],
            catch_rate: catch_rate[i],
            percentage_male: percentage_male[i],
        })
        .collect())
}

// -- Arrow helpers --

/// Read a column as `Float64`, all-null when the column is absent.
fn f64_column(batch: &RecordBatch, name: &str, n_rows: usize) -> Result<Vec<Option<f64>>> {
    let Some(col) = batch.column_by_name(name) else {
        return Ok(vec![None; n_rows]);
    };
    let casted = cast(col.as_ref(), &DataType::Float64)
        .with_context(|| format!("column '{name}' is not numeric ({:?})", col.data_type()))?;
    Ok(casted.as_primitive::<Float64Type>().iter().collect())
}

/// Read a column as `Utf8`, all-null when the column is absent.
fn string_column(batch: &RecordBatch, name: &str, n_rows: usize) -> Result<Vec<Option<String>>> {
    let Some(col) = batch.column_by_name(name) else {
        return Ok(vec![None; n_rows]);
    };
    let casted = cast(col.as_ref(), &DataType::Utf8)
        .with_context(|| format!("column '{name}' is not text ({:?})", col.data_type()))?;
    Ok(casted
        .as_string::<i32>()
        .iter()
        .map(|v| v.map(str::to_string))
        .collect())
}
