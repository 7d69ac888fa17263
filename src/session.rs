use crate::export::import_json;
use crate::record::{EmailRecord, DEFAULT_FOOTER};
use crate::RedactError;

/// An editing session: the ordered record sequence plus which record the
/// editor currently has open. The sequence always contains at least one
/// record and `active_index` is always in range; every mutating operation
/// maintains both.
///
/// Record mutation and layout/export are mutually exclusive phases: a layout
/// pass borrows the records immutably for its whole duration, so the borrow
/// checker enforces the no-mutation-mid-layout contract for free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    records: Vec<EmailRecord>,
    active_index: usize,
}

impl Default for Session {
    fn default() -> Session {
        Session::sample()
    }
}

impl Session {
    /// A session seeded with the embedded sample transcript: three blocks of
    /// a mocked-up 2010 exchange, redaction markers included.
    pub fn sample() -> Session {
        Session {
            active_index: 0,
            records: vec![
                EmailRecord {
                    to: "Jeffrey Epstein[jeevacation@gmail.com]".to_string(),
                    from: "<redact>REDACTED</redact>".to_string(),
                    sent_label: "Sent".to_string(),
                    sent: "Sun 5/9/2010 10:14:50 PM".to_string(),
                    subject: "Re:".to_string(),
                    body: "Just leaving No10..will call".to_string(),
                    footer: DEFAULT_FOOTER.to_string(),
                },
                EmailRecord {
                    from: "Jeffrey Epstein <jeevacation@gmail.com>".to_string(),
                    sent_label: "Date".to_string(),
                    sent: "Sun, 9 May 2010 18:13:20 -0400".to_string(),
                    to: "<<redact>REDACTED</redact>>".to_string(),
                    subject: "Re:".to_string(),
                    body: "are you home\n\nOn Sun, May 9, 2010 at 5:39 PM, \
                           <<redact>REDACTED</redact>> wrote:\n\nSd be announced tonight"
                        .to_string(),
                    footer: DEFAULT_FOOTER.to_string(),
                },
                EmailRecord {
                    from: "Jeffrey Epstein <jeevacation@gmail.com>".to_string(),
                    sent_label: "Date".to_string(),
                    sent: "Sun, 9 May 2010 17:30:16 -0400".to_string(),
                    to: "PETER MANDELSON<redact>REDACTED</redact>".to_string(),
                    subject: String::new(),
                    body: "sources tell me 500 b euro bailout , almost compelte".to_string(),
                    footer: String::new(),
                },
            ],
        }
    }

    /// A session holding the given records. Returns [None] for an empty vec;
    /// the session invariant requires at least one record.
    pub fn from_records(records: Vec<EmailRecord>) -> Option<Session> {
        if records.is_empty() {
            return None;
        }
        Some(Session {
            records,
            active_index: 0,
        })
    }

    pub fn records(&self) -> &[EmailRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        // the invariant forbids an empty session, but Clippy wants the pair
        self.records.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active(&self) -> &EmailRecord {
        &self.records[self.active_index]
    }

    pub fn active_mut(&mut self) -> &mut EmailRecord {
        &mut self.records[self.active_index]
    }

    /// Activate the record at `index`, clamping into the valid range
    pub fn set_active(&mut self, index: usize) {
        self.active_index = index.min(self.records.len() - 1);
    }

    /// Insert a blank template block after the active record and activate it
    pub fn add(&mut self) {
        let index = self.active_index + 1;
        self.records.insert(index, EmailRecord::blank_template());
        self.active_index = index;
    }

    /// Insert a copy of the active record after it and activate the copy
    pub fn duplicate(&mut self) {
        let clone = self.active().clone();
        let index = self.active_index + 1;
        self.records.insert(index, clone);
        self.active_index = index;
    }

    /// Remove the active record. Refused (returns false) when it is the last
    /// remaining record; the sequence never becomes empty.
    pub fn remove(&mut self) -> bool {
        if self.records.len() == 1 {
            return false;
        }
        self.records.remove(self.active_index);
        self.active_index = self.active_index.min(self.records.len() - 1);
        true
    }

    /// Swap the active record with its neighbour `delta` positions away
    /// (±1 in practice) and follow it. Out-of-range moves are no-ops.
    pub fn move_active(&mut self, delta: isize) -> bool {
        let next = self.active_index as isize + delta;
        if next < 0 || next as usize >= self.records.len() {
            return false;
        }
        let next = next as usize;
        self.records.swap(self.active_index, next);
        self.active_index = next;
        true
    }

    /// Replace the session contents from an import document (see
    /// [`import_json`](crate::import_json)), activating the first record.
    /// On any error the session is left unmodified. Returns the number of
    /// records loaded.
    pub fn load_json(&mut self, text: &str) -> Result<usize, RedactError> {
        let records = import_json(text)?;
        let count = records.len();
        self.records = records;
        self.active_index = 0;
        Ok(count)
    }

    /// A short display snippet for the record at `index`: the first 28
    /// characters of its subject, body, or recipient (first non-empty wins)
    /// with bracket markers stripped.
    pub fn snippet(&self, index: usize) -> String {
        let Some(record) = self.records.get(index) else {
            return String::new();
        };
        let source = if !record.subject.is_empty() {
            &record.subject
        } else if !record.body.is_empty() {
            &record.body
        } else {
            &record.to
        };
        source
            .replace("[[", "")
            .replace("]]", "")
            .chars()
            .take(28)
            .collect()
    }
}
