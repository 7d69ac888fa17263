use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The footer pre-filled into freshly added records
pub const DEFAULT_FOOTER: &str = "Sent from my BlackBerry\u{ae} wireless device";

/// One email block in the transcript. All fields are plain display strings
/// and any may be empty; no RFC 5322 parsing happens anywhere. Field names
/// serialize to the exact JSON keys of the interchange format, in this
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    pub to: String,
    pub from: String,
    /// The label shown for the date header row, e.g. "Sent" or "Date"
    #[serde(rename = "sentLabel")]
    pub sent_label: String,
    pub sent: String,
    pub subject: String,
    pub body: String,
    pub footer: String,
}

impl Default for EmailRecord {
    fn default() -> EmailRecord {
        EmailRecord {
            to: String::new(),
            from: String::new(),
            sent_label: "Date".to_string(),
            sent: String::new(),
            subject: String::new(),
            body: String::new(),
            footer: String::new(),
        }
    }
}

impl EmailRecord {
    /// The blank template used when adding a new block to a session
    pub fn blank_template() -> EmailRecord {
        EmailRecord {
            sent_label: "Sent".to_string(),
            footer: DEFAULT_FOOTER.to_string(),
            ..EmailRecord::default()
        }
    }

    /// The date-row label, falling back to "Date" when unset
    pub fn sent_label_or_default(&self) -> &str {
        if self.sent_label.is_empty() {
            "Date"
        } else {
            &self.sent_label
        }
    }
}

/// Coerce a JSON value to a display string: strings pass through verbatim,
/// null counts as missing, anything else renders as its JSON text
fn coerce(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Normalize one imported JSON object into an [EmailRecord].
///
/// `sentLabel` falls back to the alternate key `dateLabel` and then to
/// `"Date"`; `sent` falls back to `date` and then to empty; every other
/// field defaults to empty. Every present value is coerced to a string, so
/// imports with numeric or boolean fields don't fail.
pub fn normalize_record(input: &Value) -> EmailRecord {
    let field = |key: &str| input.get(key).and_then(coerce);

    EmailRecord {
        to: field("to").unwrap_or_default(),
        from: field("from").unwrap_or_default(),
        sent_label: field("sentLabel")
            .or_else(|| field("dateLabel"))
            .unwrap_or_else(|| "Date".to_string()),
        sent: field("sent")
            .or_else(|| field("date"))
            .unwrap_or_default(),
        subject: field("subject").unwrap_or_default(),
        body: field("body").unwrap_or_default(),
        footer: field("footer").unwrap_or_default(),
    }
}
