use crate::workflows::valuation::{CaseDomain, CaseProfile, EstimationResult, FieldValue};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum LeadsheetImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingLeadColumn,
}

impl std::fmt::Display for LeadsheetImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadsheetImportError::Io(err) => write!(f, "failed to read leadsheet: {}", err),
            LeadsheetImportError::Csv(err) => write!(f, "invalid leadsheet CSV data: {}", err),
            LeadsheetImportError::MissingLeadColumn => {
                write!(f, "leadsheet has no 'lead_ref' column")
            }
        }
    }
}

impl std::error::Error for LeadsheetImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeadsheetImportError::Io(err) => Some(err),
            LeadsheetImportError::Csv(err) => Some(err),
            LeadsheetImportError::MissingLeadColumn => None,
        }
    }
}

impl From<std::io::Error> for LeadsheetImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for LeadsheetImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One leadsheet row scored against the domain's rule table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredLead {
    pub lead_ref: String,
    pub estimate: EstimationResult,
}

/// A row the import could not score, with the CSV line it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedLead {
    pub line: u64,
    pub reason: String,
}

/// Outcome of one leadsheet import: every row ends up in exactly one list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadsheetReport {
    pub domain: &'static str,
    pub scored: Vec<ScoredLead>,
    pub skipped: Vec<SkippedLead>,
}

impl LeadsheetReport {
    pub fn row_count(&self) -> usize {
        self.scored.len() + self.skipped.len()
    }
}

fn normalize_choice(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join("-");
    collapsed.to_ascii_lowercase()
}

pub struct LeadsheetImporter;

impl LeadsheetImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        domain: &CaseDomain,
    ) -> Result<LeadsheetReport, LeadsheetImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, domain)
    }

    /// Score every row of a marketing leadsheet against one case domain.
    ///
    /// The header must carry a `lead_ref` column; every other column whose
    /// name matches a field the domain's table knows becomes an answer, and
    /// unknown columns are ignored. Rows with no lead reference, a repeated
    /// one, or an unparseable number are reported as skipped rather than
    /// aborting the batch.
    pub fn from_reader<R: Read>(
        reader: R,
        domain: &CaseDomain,
    ) -> Result<LeadsheetReport, LeadsheetImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let lead_column = headers
            .iter()
            .position(|name| name == "lead_ref")
            .ok_or(LeadsheetImportError::MissingLeadColumn)?;

        let table = domain.engine.table();
        let mut scored = Vec::new();
        let mut skipped = Vec::new();
        let mut seen_refs: HashSet<String> = HashSet::new();

        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            // Header occupies line 1.
            let line = record
                .position()
                .map(|position| position.line())
                .unwrap_or(index as u64 + 2);

            let lead_ref = record.get(lead_column).unwrap_or("").trim();
            if lead_ref.is_empty() {
                skipped.push(SkippedLead {
                    line,
                    reason: "row has no lead_ref".to_string(),
                });
                continue;
            }
            if !seen_refs.insert(lead_ref.to_string()) {
                skipped.push(SkippedLead {
                    line,
                    reason: format!("duplicate lead_ref '{}'", lead_ref),
                });
                continue;
            }

            let mut answers: BTreeMap<String, FieldValue> = BTreeMap::new();
            let mut bad_cell: Option<String> = None;
            for (column, cell) in headers.iter().zip(record.iter()) {
                if column == "lead_ref" || cell.is_empty() || !table.knows_field(column) {
                    continue;
                }

                if table.expects_amount(column) {
                    match cell.parse::<f64>() {
                        Ok(amount) => {
                            answers.insert(column.to_string(), FieldValue::amount(amount));
                        }
                        Err(_) => {
                            bad_cell =
                                Some(format!("field '{}' is not a number: '{}'", column, cell));
                            break;
                        }
                    }
                } else {
                    answers.insert(
                        column.to_string(),
                        FieldValue::choice(normalize_choice(cell)),
                    );
                }
            }

            if let Some(reason) = bad_cell {
                skipped.push(SkippedLead { line, reason });
                continue;
            }

            let profile = CaseProfile::from_answers(answers);
            scored.push(ScoredLead {
                lead_ref: lead_ref.to_string(),
                estimate: domain.engine.estimate(&profile),
            });
        }

        Ok(LeadsheetReport {
            domain: domain.slug,
            scored,
            skipped,
        })
    }
}
