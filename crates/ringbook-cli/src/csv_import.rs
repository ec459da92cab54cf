use ringbook_core::{ContactDraft, CoreError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CsvImportError {
    #[error("CSV file is empty or contains no valid data")]
    Empty,
    #[error("line {line}: each line must contain a name and a mobile number separated by a comma")]
    MissingField { line: usize },
    #[error("line {line}: {source}")]
    Invalid {
        line: usize,
        #[source]
        source: CoreError,
    },
}

/// Parses `name,mobile` lines. Blank lines are skipped and line numbers
/// count only the non-blank ones. Any bad line rejects the whole file.
pub fn parse_contacts(text: &str) -> Result<Vec<ContactDraft>, CsvImportError> {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.is_empty() {
        return Err(CsvImportError::Empty);
    }

    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| parse_line(index + 1, line))
        .collect()
}

fn parse_line(line_no: usize, line: &str) -> Result<ContactDraft, CsvImportError> {
    let mut fields = line.split(',');
    let name = fields.next().unwrap_or_default().trim();
    let mobile = fields.next().unwrap_or_default().trim();
    if name.is_empty() || mobile.is_empty() {
        return Err(CsvImportError::MissingField { line: line_no });
    }

    ContactDraft::new(name, mobile)
        .validate()
        .map_err(|source| CsvImportError::Invalid {
            line: line_no,
            source,
        })
}
