// src/output/render.rs
//! Pure rendering of the report artifacts.
//!
//! The CSV `attachments` cell holds the URL list as a JSON array string
//! (`["https://a","https://b"]`, `[]` when empty), which decodes back to
//! the exact list.

use crate::constants::CSV_COLUMNS;
use crate::error::AppError;
use crate::model::FilteredRecord;
use crate::types::CommentId;
use serde::Deserialize;

/// Renders the records as an indented JSON array.
pub fn render_json(records: &[FilteredRecord]) -> Result<String, AppError> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    Ok(json)
}

/// Renders the records as CSV with a header row, always present.
pub fn render_csv(records: &[FilteredRecord]) -> Result<String, AppError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_COLUMNS)?;
    for record in records {
        let attachments = encode_attachments(&record.attachments)?;
        writer.write_record([record.id.as_str(), record.comment.as_str(), attachments.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| AppError::MalformedResponse(e.to_string()))
}

/// Encodes an attachment URL list for a single CSV cell.
pub fn encode_attachments(urls: &[String]) -> Result<String, AppError> {
    Ok(serde_json::to_string(urls)?)
}

/// Decodes a CSV attachments cell. An empty cell is an empty list.
pub fn decode_attachments(cell: &str) -> Result<Vec<String>, AppError> {
    if cell.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(cell)?)
}

#[derive(Deserialize)]
struct CsvRow {
    id: String,
    comment: String,
    attachments: String,
}

/// Reads a CSV report back into records.
pub fn parse_csv_report(content: &str) -> Result<Vec<FilteredRecord>, AppError> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.iter().ne(CSV_COLUMNS.iter().copied()) {
        return Err(AppError::MalformedResponse(format!(
            "unexpected CSV header: {:?}",
            headers.iter().collect::<Vec<_>>()
        )));
    }

    reader
        .deserialize::<CsvRow>()
        .map(|row| -> Result<FilteredRecord, AppError> {
            let row = row?;
            Ok(FilteredRecord {
                id: CommentId::parse(&row.id)?,
                comment: row.comment,
                attachments: decode_attachments(&row.attachments)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: &str, comment: &str, attachments: &[&str]) -> FilteredRecord {
        FilteredRecord {
            id: CommentId::parse(id).unwrap(),
            comment: comment.to_string(),
            attachments: attachments.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn empty_report_still_has_header() {
        assert_eq!(render_csv(&[]).unwrap(), "id,comment,attachments\n");
        assert_eq!(render_json(&[]).unwrap(), "[]\n");
    }

    #[test]
    fn csv_cells_are_quoted_and_attachments_json_encoded() {
        let csv = render_csv(&[record(
            "FSA-2020-0004-0101",
            "Pima, \"ELS\" cotton",
            &["https://a/1.pdf", "https://a/1.docx"],
        )])
        .unwrap();

        assert_eq!(
            csv,
            "id,comment,attachments\n\
             FSA-2020-0004-0101,\"Pima, \"\"ELS\"\" cotton\",\"[\"\"https://a/1.pdf\"\",\"\"https://a/1.docx\"\"]\"\n"
        );
    }

    #[test]
    fn csv_report_reads_back_unchanged() {
        let records = vec![
            record("FSA-2020-0004-0101", "cotton\nacross lines", &["https://a|b", "https://c"]),
            record("FSA-2020-0004-0102", "Pima", &[]),
        ];
        let parsed = parse_csv_report(&render_csv(&records).unwrap()).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn attachment_cell_decoding() {
        assert_eq!(decode_attachments("").unwrap(), Vec::<String>::new());
        assert_eq!(decode_attachments("[]").unwrap(), Vec::<String>::new());
        assert!(decode_attachments("not json").is_err());
    }

    #[test]
    fn json_report_shape() {
        let json = render_json(&[record("c1", "cotton", &["https://a"])]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "id": "c1", "comment": "cotton", "attachments": ["https://a"] }])
        );
    }
}
