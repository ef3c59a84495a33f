pub(crate) mod date;

use std::fmt;
use std::fs;
use std::path::Path;
use csv::StringRecord;
use log::{info, warn};
use serde::Deserialize;

use crate::config::{Config, ParseMode};
use crate::transaction::Transaction;

/// A transaction record as it appears in an input file, before any parsing
#[derive(Deserialize, Debug)]
struct RawRecord {
    transaction_id: RawValue,
    transaction_date: RawValue,
    transaction_amount: RawValue,
    transaction_type: String,
    #[serde(default)]
    transaction_description: String,
    #[serde(default)]
    merchant_name: String,
}

/// A field that may be given as a number or a string. Anything else lands in `Other` so the field is
/// rejected by name rather than by serde.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum RawValue {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RawValue::Int(i) => write!(f, "{}", i),
            RawValue::Float(n) => write!(f, "{}", n),
            RawValue::Text(s) => write!(f, "{}", s),
            RawValue::Other(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    FileNotFound(String),
    UnsupportedFormat(String),
    InvalidFile(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "transaction loading error: {}",
            match self {
                LoadError::FileNotFound(s) => s,
                LoadError::UnsupportedFormat(s) => s,
                LoadError::InvalidFile(s) => s,
            }
        )
    }
}

impl std::error::Error for LoadError {}

/// An input record that was skipped. `index` is the 0-based position of the record in the file,
/// not counting a CSV header row.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RejectedRecord {
    pub(crate) index: usize,
    pub(crate) reason: String,
}

impl fmt::Display for RejectedRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "record {}: {}", self.index, self.reason)
    }
}

/// Result of loading a file. Records that could not be parsed end up in `rejected`.
#[derive(Debug, Default)]
pub(crate) struct Loaded {
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) rejected: Vec<RejectedRecord>,
}

/// Load transactions from a JSON or CSV file, chosen by file extension.
/// A bad record never fails the whole load, see [`Loaded::rejected`].
pub(crate) fn read_transactions(file_path: &Path, config: &Config) -> Result<Loaded, LoadError> {
    let extension = file_path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if extension != "json" && extension != "csv" {
        return Err(LoadError::UnsupportedFormat(format!("Unsupported file type '{}', expecting .json or .csv", file_path.display())));
    }

    if !file_path.exists() {
        return Err(LoadError::FileNotFound(format!("File not found: {}", file_path.display())));
    }

    info!("Loading transactions from {:?}", file_path);
    let raw_records = if extension == "json" {
        read_json(file_path)?
    } else {
        read_csv(file_path)?
    };

    let mut loaded = Loaded::default();
    for (index, raw) in raw_records.into_iter().enumerate() {
        match raw.and_then(|r| to_transaction(r, config)) {
            Ok(t) => loaded.transactions.push(t),
            Err(reason) => {
                let rejected = RejectedRecord { index, reason };
                warn!("Skipping {}", rejected);
                loaded.rejected.push(rejected);
            }
        }
    }

    info!("Loaded {} transactions, {} rejected", loaded.transactions.len(), loaded.rejected.len());
    Ok(loaded)
}

/// The file must hold a JSON array. Each element is deserialised on its own.
fn read_json(file_path: &Path) -> Result<Vec<Result<RawRecord, String>>, LoadError> {
    let content = fs::read_to_string(file_path).map_err(|e| LoadError::InvalidFile(e.to_string()))?;
    let values: Vec<serde_json::Value> = serde_json::from_str(&content)
        .map_err(|e| LoadError::InvalidFile(format!("Expecting a JSON array of transactions: {}", e)))?;

    Ok(values.into_iter()
        .map(|v| serde_json::from_value::<RawRecord>(v).map_err(|e| e.to_string()))
        .collect())
}

/// Column index of each known field in a CSV header row
struct CsvHeaderIndex {
    id: usize,
    date: usize,
    amount: usize,
    transaction_type: usize,
    description: Option<usize>,
    merchant_name: Option<usize>,
}

/// CSV files must have a header row using the same field names as JSON. Every value is read as text so ids
/// like '007' keep their leading zeros.
fn read_csv(file_path: &Path) -> Result<Vec<Result<RawRecord, String>>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_path(file_path)
        .map_err(|e| LoadError::InvalidFile(e.to_string()))?;

    let headers = rdr.headers().map_err(|e| LoadError::InvalidFile(e.to_string()))?;
    let header_index = parse_header_index(headers)?;

    let mut records = vec![];
    for row in rdr.records() {
        records.push(match row {
            Ok(row) => Ok(raw_record_from_row(&row, &header_index)),
            Err(e) => Err(e.to_string()),
        });
    }

    Ok(records)
}

fn parse_header_index(headers: &StringRecord) -> Result<CsvHeaderIndex, LoadError> {
    let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let require = |name: &str| find(name)
        .ok_or_else(|| LoadError::InvalidFile(format!("Unable to locate '{}' column", name)));

    Ok(CsvHeaderIndex {
        id: require("transaction_id")?,
        date: require("transaction_date")?,
        amount: require("transaction_amount")?,
        transaction_type: require("transaction_type")?,
        description: find("transaction_description"),
        merchant_name: find("merchant_name"),
    })
}

fn raw_record_from_row(row: &StringRecord, header_index: &CsvHeaderIndex) -> RawRecord {
    let text = |i: usize| row.get(i).unwrap_or_default().to_string();
    RawRecord {
        transaction_id: RawValue::Text(text(header_index.id)),
        transaction_date: RawValue::Text(text(header_index.date)),
        transaction_amount: RawValue::Text(text(header_index.amount)),
        transaction_type: text(header_index.transaction_type),
        transaction_description: header_index.description.map(text).unwrap_or_default(),
        merchant_name: header_index.merchant_name.map(text).unwrap_or_default(),
    }
}

fn to_transaction(raw: RawRecord, config: &Config) -> Result<Transaction, String> {
    let id = match &raw.transaction_id {
        RawValue::Other(v) => return Err(format!("Unable to parse id '{}'", v)),
        id => id.to_string(),
    };

    let date = match &raw.transaction_date {
        RawValue::Text(s) => date::parse_date(s, &config.date_formats),
        RawValue::Int(millis) => date::from_epoch_millis(*millis),
        RawValue::Float(millis) => date::from_epoch_millis(*millis as i64),
        RawValue::Other(_) => None,
    }.ok_or_else(|| format!("Unable to parse date '{}'", raw.transaction_date))?;

    let amount = match parse_amount(&raw.transaction_amount) {
        Some(amount) => amount,
        None => match config.parse_mode {
            ParseMode::Strict => return Err(format!("Unable to parse amount '{}'", raw.transaction_amount)),
            ParseMode::Lenient => {
                warn!("Unable to parse amount '{}' of transaction {}, using NaN", raw.transaction_amount, id);
                f64::NAN
            }
        }
    };

    Ok(Transaction {
        id,
        date,
        amount,
        transaction_type: raw.transaction_type,
        description: raw.transaction_description,
        merchant_name: raw.merchant_name,
    })
}

/// Numbers are taken as is. Text may carry '$' and ',' thousands separators.
fn parse_amount(value: &RawValue) -> Option<f64> {
    let amount = match value {
        RawValue::Int(i) => *i as f64,
        RawValue::Float(f) => *f,
        RawValue::Text(s) => s.replace(['$', ','], "").trim().parse::<f64>().ok()?,
        RawValue::Other(_) => return None,
    };

    if amount.is_finite() {
        Some(amount)
    } else {
        None
    }
}
