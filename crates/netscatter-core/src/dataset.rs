// File: crates/netscatter-core/src/dataset.rs
// Summary: Network records, encoding fallback chain, CSV parsing and row filtering.
// Notes:
// - A candidate encoding "wins" only when the text both decodes strictly and
//   parses as CSV; otherwise the next candidate is tried.
// - Column validation runs after a successful parse and is not retried.

use std::borrow::Cow;
use std::path::Path;

use crate::error::{PlotError, Result};

pub const COL_NETWORK: &str = "Network";
pub const COL_ACCURACY: &str = "mIoU(%)";
pub const COL_PARAMS: &str = "Params(M)";
pub const COL_COMPUTE: &str = "GFLOPs";

/// Columns every input must carry, in reporting order.
pub const REQUIRED_COLUMNS: [&str; 4] = [COL_NETWORK, COL_ACCURACY, COL_PARAMS, COL_COMPUTE];

/// Default file name written by [`write_sample_csv`].
pub const SAMPLE_FILE: &str = "sample_network_data.csv";

/// Cell values treated as missing, the same set pandas' `read_csv` uses by
/// default. The empty cell is handled separately.
const NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// One plotted architecture.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkRecord {
    pub name: String,
    /// mIoU in percent.
    pub accuracy: f64,
    /// Parameters in millions.
    pub params: f64,
    /// GFLOPs per inference.
    pub compute: f64,
}

impl NetworkRecord {
    pub fn new(name: impl Into<String>, accuracy: f64, params: f64, compute: f64) -> Self {
        Self { name: name.into(), accuracy, params, compute }
    }
}

/// Text encodings tried when reading input, see [`TextEncoding::FALLBACK_ORDER`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Gbk,
    Gb2312,
    Utf8Sig,
    Latin1,
    Cp1252,
}

impl TextEncoding {
    /// Candidates in the order they are tried. `Utf8` already strips a BOM,
    /// so `Utf8Sig` can only be reached after `Utf8` has failed, which means it
    /// never wins; it stays so the reported chain matches the documented one.
    pub const FALLBACK_ORDER: [TextEncoding; 6] = [
        TextEncoding::Utf8,
        TextEncoding::Gbk,
        TextEncoding::Gb2312,
        TextEncoding::Utf8Sig,
        TextEncoding::Latin1,
        TextEncoding::Cp1252,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Gbk => "gbk",
            TextEncoding::Gb2312 => "gb2312",
            TextEncoding::Utf8Sig => "utf-8-sig",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Cp1252 => "cp1252",
        }
    }

    /// Strict decode; `None` if any byte sequence is invalid for this encoding.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        match self {
            // A leading BOM is dropped for plain utf-8 as well.
            TextEncoding::Utf8 | TextEncoding::Utf8Sig => {
                let body = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF][..]).unwrap_or(bytes);
                encoding_rs::UTF_8.decode_without_bom_handling_and_without_replacement(body)
            }
            // GB2312 is a subset of GBK.
            TextEncoding::Gbk | TextEncoding::Gb2312 => {
                encoding_rs::GBK.decode_without_bom_handling_and_without_replacement(bytes)
            }
            // encoding_rs maps the "latin1" label to windows-1252, so decode ISO-8859-1 directly.
            TextEncoding::Latin1 => Some(Cow::Owned(bytes.iter().map(|&b| b as char).collect())),
            TextEncoding::Cp1252 => {
                encoding_rs::WINDOWS_1252.decode_without_bom_handling_and_without_replacement(bytes)
            }
        }
    }
}

/// Header plus raw rows of a parsed CSV table.
#[derive(Clone, Debug, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Parse comma-separated text with a header row. Data fields are trimmed,
    /// header names are kept verbatim. Short rows are padded with empty
    /// (missing) cells; long rows are an error.
    pub fn parse(text: &str) -> Result<Self, csv::Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Fields)
            .from_reader(text.as_bytes());

        let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            if rec.iter().all(str::is_empty) {
                continue;
            }
            if rec.len() > headers.len() {
                let line = rec.position().map(|p| p.line()).unwrap_or(0);
                return Err(csv::Error::from(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("line {line}: expected {} fields, found {}", headers.len(), rec.len()),
                )));
            }
            let mut row = rec.iter().map(str::to_string).collect::<Vec<_>>();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }
        Ok(Self { headers, rows })
    }

    fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Try each candidate in order until one decodes and parses.
pub fn decode_table(bytes: &[u8], candidates: &[TextEncoding]) -> Option<(TextEncoding, RawTable)> {
    for &enc in candidates {
        let Some(text) = enc.decode(bytes) else {
            log::debug!("encoding {} rejected the input", enc.label());
            continue;
        };
        match RawTable::parse(&text) {
            Ok(table) => return Some((enc, table)),
            Err(e) => log::warn!("reading with encoding {} failed: {e}", enc.label()),
        }
    }
    None
}

/// Records that survived validation and filtering, plus load bookkeeping.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub records: Vec<NetworkRecord>,
    /// Header names in file order.
    pub columns: Vec<String>,
    pub encoding: TextEncoding,
    pub rows_read: usize,
    pub dropped: usize,
}

impl Dataset {
    /// Read, decode, validate and filter `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| PlotError::io(path, e))?;
        let (encoding, table) = decode_table(&bytes, &TextEncoding::FALLBACK_ORDER).ok_or_else(|| {
            PlotError::Unreadable {
                path: path.to_path_buf(),
                tried: TextEncoding::FALLBACK_ORDER.iter().map(TextEncoding::label).collect(),
            }
        })?;
        log::info!("read {} rows from {} using encoding {}", table.rows.len(), path.display(), encoding.label());
        Self::from_table(table, encoding)
    }

    /// Validate required columns and drop rows with a missing required value.
    pub fn from_table(table: RawTable, encoding: TextEncoding) -> Result<Self> {
        let missing = REQUIRED_COLUMNS
            .iter()
            .filter(|c| table.column(c).is_none())
            .map(|c| c.to_string())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(PlotError::MissingColumns { missing, present: table.headers });
        }
        // All four were found above.
        let idx = REQUIRED_COLUMNS.map(|c| table.column(c).unwrap_or_default());

        let rows_read = table.rows.len();
        let mut records = Vec::with_capacity(rows_read);
        for (i, row) in table.rows.iter().enumerate() {
            let cells = idx.map(|ix| row[ix].as_str());
            if cells.iter().any(|c| is_missing(c)) {
                log::debug!("dropping row {} with missing values", i + 1);
                continue;
            }
            let num = |k: usize| parse_number(cells[k], i + 1, REQUIRED_COLUMNS[k]);
            records.push(NetworkRecord {
                name: cells[0].to_string(),
                accuracy: num(1)?,
                params: num(2)?,
                compute: num(3)?,
            });
        }

        if records.is_empty() {
            return Err(PlotError::EmptyDataset { rows_read });
        }
        let dropped = rows_read - records.len();
        if dropped > 0 {
            log::info!("dropped {dropped} of {rows_read} rows with missing values");
        }
        Ok(Self { records, columns: table.headers, encoding, rows_read, dropped })
    }
}

fn is_missing(cell: &str) -> bool {
    cell.is_empty() || NA_TOKENS.contains(&cell)
}

fn parse_number(cell: &str, row: usize, column: &str) -> Result<f64> {
    match cell.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(PlotError::InvalidValue { row, column: column.to_string(), value: cell.to_string() }),
    }
}

/// The eight-network demonstration dataset.
pub fn sample_records() -> Vec<NetworkRecord> {
    vec![
        NetworkRecord::new("EGE-UNet", 79.6, 2.1, 1.2),
        NetworkRecord::new("MALUNet", 78.8, 1.8, 2.1),
        NetworkRecord::new("MobileViTv2", 78.7, 2.3, 3.4),
        NetworkRecord::new("UNeXt-S", 78.3, 1.5, 2.8),
        NetworkRecord::new("MobileNetv3", 77.7, 3.2, 4.2),
        NetworkRecord::new("UTNetV2", 77.3, 12.8, 8.5),
        NetworkRecord::new("UNet", 77.0, 7.8, 6.7),
        NetworkRecord::new("TransFuse", 79.2, 26.1, 12.3),
    ]
}

/// Write `records` as UTF-8 CSV with the required headers.
pub fn write_records_csv(path: impl AsRef<Path>, records: &[NetworkRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PlotError::io(parent, e))?;
    }
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(REQUIRED_COLUMNS)?;
    for r in records {
        w.write_record(&[r.name.clone(), r.accuracy.to_string(), r.params.to_string(), r.compute.to_string()])?;
    }
    w.flush().map_err(|e| PlotError::io(path, e))?;
    Ok(())
}

/// Write the demonstration dataset to `path` and return its records.
pub fn write_sample_csv(path: impl AsRef<Path>) -> Result<Vec<NetworkRecord>> {
    let records = sample_records();
    write_records_csv(path.as_ref(), &records)?;
    log::info!("sample data written to {}", path.as_ref().display());
    Ok(records)
}
