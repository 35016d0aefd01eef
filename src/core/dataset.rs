use crate::domain::model::LaunchRecord;
use crate::domain::ports::Storage;
use crate::utils::error::{DashError, Result};
use std::collections::BTreeSet;
use std::io::Read;

pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "Booster Version Category",
    "class",
];

/// The launch dataset, loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    min_payload: f64,
    max_payload: f64,
    skipped_rows: usize,
}

impl LaunchTable {
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        Self::build(records, 0)
    }

    /// Parses a delimited table with a header row. Rows that fail to parse
    /// are skipped; a header without the required columns is an error.
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();
        if !missing.is_empty() {
            return Err(DashError::DatasetError {
                message: format!("missing required column(s): {}", missing.join(", ")),
            });
        }

        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (index, row) in csv_reader.deserialize::<LaunchRecord>().enumerate() {
            match row {
                Ok(record) if record.payload_mass_kg.is_finite() => records.push(record),
                Ok(_) => {
                    tracing::debug!("Skipping row {}: payload mass is not finite", index + 1);
                    skipped += 1;
                }
                Err(e) => {
                    tracing::debug!("Skipping row {}: {}", index + 1, e);
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            tracing::warn!("⚠️ Skipped {} malformed row(s) while loading dataset", skipped);
        }

        Ok(Self::build(records, skipped))
    }

    /// 透過 Storage 讀取資料集
    pub async fn load<S: Storage>(storage: &S, path: &str, delimiter: u8) -> Result<Self> {
        tracing::debug!("Reading dataset from: {}", path);
        let data = storage.read_file(path).await?;
        tracing::debug!("Read {} bytes", data.len());

        let table = Self::from_reader(data.as_slice(), delimiter)?;
        tracing::info!(
            "📥 Loaded {} launch records across {} site(s), payload {} - {} kg",
            table.len(),
            table.sites().len(),
            table.min_payload(),
            table.max_payload()
        );
        Ok(table)
    }

    fn build(records: Vec<LaunchRecord>, skipped_rows: usize) -> Self {
        let sites: BTreeSet<&str> = records.iter().map(|r| r.launch_site.as_str()).collect();
        let sites = sites.into_iter().map(str::to_string).collect();

        let (min_payload, max_payload) = if records.is_empty() {
            (0.0, 0.0)
        } else {
            records.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r.payload_mass_kg), hi.max(r.payload_mass_kg))
            })
        };

        Self {
            records,
            sites,
            min_payload,
            max_payload,
            skipped_rows,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct launch sites, sorted.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}
