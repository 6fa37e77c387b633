use crate::core::filters::{matches_major, meets_gpa_requirement};
use crate::models::{GpaRequirement, UniversityRecord};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Highest GPA on the 4.0 scale
pub const MAX_GPA: f64 = 4.0;

/// Errors that can occur while loading the dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to open dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing the {0:?} column")]
    MissingColumn(String),

    #[error("Row {row}: GPA requirement {value} is outside 0.0..=4.0")]
    InvalidGpa { row: usize, value: f64 },
}

/// Header names every row must carry
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "University Name",
    "City",
    "State",
    "Common Majors",
    "GPA Requirement",
    "SAT Requirement",
    "English Proficiency",
    "Type",
];

/// One CSV row as written in the file
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "University Name")]
    name: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Common Majors")]
    majors: String,
    #[serde(rename = "GPA Requirement")]
    gpa: String,
    #[serde(rename = "SAT Requirement")]
    sat: String,
    #[serde(rename = "English Proficiency")]
    english: String,
    #[serde(rename = "Type")]
    kind: String,
}

/// In-memory university table, read-only after load
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<UniversityRecord>,
}

impl Dataset {
    /// Load the dataset from a CSV file
    pub fn load<P: AsRef<Path>>(path: P, gpa_wildcard: &str) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let dataset = Self::from_reader(file, gpa_wildcard)?;
        tracing::debug!("Loaded {} universities from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Parse CSV from any reader, keeping row order
    pub fn from_reader<R: Read>(reader: R, gpa_wildcard: &str) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|h| h == **column))
        {
            return Err(DatasetError::MissingColumn(missing.to_string()));
        }

        let mut records = Vec::new();
        for result in rdr.records() {
            let raw = result?;
            let row: CsvRow = raw.deserialize(Some(&headers))?;
            // Quoted cells may span lines, so take the line the record starts on
            let line = raw.position().map_or(0, |pos| pos.line() as usize);
            let gpa_requirement = parse_gpa_requirement(&row.gpa, gpa_wildcard)
                .map_err(|value| DatasetError::InvalidGpa { row: line, value })?;

            records.push(UniversityRecord {
                name: row.name,
                city: row.city,
                state: row.state,
                majors: row.majors,
                gpa_requirement,
                gpa_display: row.gpa,
                sat_requirement: row.sat,
                english_proficiency: row.english,
                institution_type: row.kind,
            });
        }

        Ok(Self { records })
    }

    pub fn from_records(records: Vec<UniversityRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[UniversityRecord] {
        &self.records
    }

    /// Scan for records offering `major` whose GPA requirement `gpa` meets
    pub fn query_by_major_and_gpa<'a>(
        &'a self,
        major: &'a str,
        gpa: f64,
    ) -> impl Iterator<Item = &'a UniversityRecord> + 'a {
        self.records
            .iter()
            .filter(move |record| matches_major(record, major))
            .filter(move |record| meets_gpa_requirement(record, gpa))
    }
}

/// Classify a raw GPA cell. Out-of-range numbers are returned as `Err`.
pub fn parse_gpa_requirement(raw: &str, wildcard: &str) -> Result<GpaRequirement, f64> {
    let raw = raw.trim();

    if !wildcard.is_empty() && raw.contains(wildcard) {
        return Ok(GpaRequirement::Any);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            if (0.0..=MAX_GPA).contains(&value) {
                Ok(GpaRequirement::Minimum(value))
            } else {
                Err(value)
            }
        }
        _ => Ok(GpaRequirement::Unparsed(raw.to_string())),
    }
}
