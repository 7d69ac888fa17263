use crate::record::{normalize_record, EmailRecord};
use crate::RedactError;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// The interchange document: `{ "version": 1, "emails": [...] }`
#[derive(Serialize)]
struct Payload<'a> {
    version: u32,
    emails: &'a [EmailRecord],
}

/// Serialize records to the pretty-printed JSON interchange document.
/// Field order is fixed: version first, then the email array with each
/// record's fields in declaration order.
pub fn export_json(records: &[EmailRecord]) -> Result<String, RedactError> {
    serde_json::to_string_pretty(&Payload {
        version: 1,
        emails: records,
    })
    .map_err(Into::into)
}

/// Parse an import document into normalized records.
///
/// Accepts either the versioned `{ emails: [...] }` shape or a bare record
/// array; unknown and missing fields fall back per
/// [`normalize_record`](crate::normalize_record). Blank input, a wrong
/// shape, or an empty array are errors, and nothing is partially applied.
pub fn import_json(text: &str) -> Result<Vec<EmailRecord>, RedactError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(RedactError::EmptyImport);
    }
    let parsed: Value = serde_json::from_str(text)?;
    let entries = match &parsed {
        Value::Array(entries) => entries,
        Value::Object(map) => match map.get("emails") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(RedactError::InvalidImport),
        },
        _ => return Err(RedactError::InvalidImport),
    };
    if entries.is_empty() {
        return Err(RedactError::InvalidImport);
    }
    Ok(entries.iter().map(normalize_record).collect())
}

/// Render records as a Markdown document: a title heading, then one block
/// per record with labelled header lines and fenced code blocks holding the
/// body and footer verbatim (no escaping inside fences), records separated
/// by a horizontal rule.
pub fn export_markdown(records: &[EmailRecord]) -> String {
    let blocks: Vec<String> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            [
                format!("## Block {}", index + 1),
                format!("From: {}", record.from),
                format!("DateLabel: {}", record.sent_label_or_default()),
                format!("Date: {}", record.sent),
                format!("To: {}", record.to),
                format!("Subject: {}", record.subject),
                "Body:".to_string(),
                "```".to_string(),
                record.body.clone(),
                "```".to_string(),
                "Footer:".to_string(),
                "```".to_string(),
                record.footer.clone(),
                "```".to_string(),
            ]
            .join("\n")
        })
        .collect();
    format!("# Redacted Mail Blocks\n\n{}", blocks.join("\n\n---\n\n"))
}

/// Write an exported document to disk (the library-side counterpart of the
/// editor's download button)
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), RedactError> {
    std::fs::write(path, contents).map_err(Into::into)
}
