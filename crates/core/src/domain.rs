use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::jid;

/// One row read from the device-session table.
#[derive(Debug, Clone)]
pub struct SessionRow {
    pub jid: String,
}

/// A phone-number/identity pair derived from a session jid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    pub phone: String,
    #[serde(rename = "lid")]
    pub identity: String,
    #[serde(rename = "extractedAt")]
    pub extracted_at: DateTime<Utc>,
}

impl ExtractedRecord {
    /// Derives a record from a jid, or `None` when the jid is empty.
    ///
    /// `phone` is the jid's local part; `identity` keeps the full original
    /// string, device suffix and domain included.
    pub fn from_jid(full_jid: &str) -> Option<Self> {
        if full_jid.is_empty() {
            return None;
        }
        Some(Self {
            phone: jid::local_part(full_jid).to_string(),
            identity: full_jid.to_string(),
            extracted_at: Utc::now(),
        })
    }
}

/// The aggregated export document, keyed by derived phone number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub timestamp: DateTime<Utc>,
    pub count: usize,
    pub bots: BTreeMap<String, ExtractedRecord>,
}

impl ExportDocument {
    /// Creates an empty document. `count` is the raw row count, which may
    /// exceed the number of entries in `bots`.
    pub fn new(count: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            count,
            bots: BTreeMap::new(),
        }
    }

    /// Inserts a record keyed by its phone number. A later record with the
    /// same phone replaces the earlier one.
    pub fn insert(&mut self, record: ExtractedRecord) {
        self.bots.insert(record.phone.clone(), record);
    }

    /// Builds the export from raw session rows.
    pub fn from_rows(rows: &[SessionRow]) -> Self {
        Self::from_rows_with(rows, |_, _| {})
    }

    /// Builds the export from raw session rows, calling `on_record` once per
    /// extracted record in row order. Rows with an empty jid produce no
    /// entry but still count toward `count`.
    pub fn from_rows_with<F>(rows: &[SessionRow], mut on_record: F) -> Self
    where
        F: FnMut(usize, &ExtractedRecord),
    {
        let mut document = Self::new(rows.len());
        for (index, row) in rows.iter().enumerate() {
            if let Some(record) = ExtractedRecord::from_jid(&row.jid) {
                on_record(index, &record);
                document.insert(record);
            }
        }
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(jids: &[&str]) -> Vec<SessionRow> {
        jids.iter()
            .map(|jid| SessionRow {
                jid: (*jid).to_string(),
            })
            .collect()
    }

    #[test]
    fn test_from_jid_plain() {
        let record = ExtractedRecord::from_jid("923001234567@s.whatsapp.net").unwrap();
        assert_eq!(record.phone, "923001234567");
        assert_eq!(record.identity, "923001234567@s.whatsapp.net");
    }

    #[test]
    fn test_from_jid_keeps_suffix_in_identity() {
        let record = ExtractedRecord::from_jid("923001234567:12@s.whatsapp.net").unwrap();
        assert_eq!(record.phone, "923001234567");
        assert_eq!(record.identity, "923001234567:12@s.whatsapp.net");
    }

    #[test]
    fn test_from_jid_without_separator() {
        let record = ExtractedRecord::from_jid("12345").unwrap();
        assert_eq!(record.phone, "12345");
        assert_eq!(record.identity, "12345");
    }

    #[test]
    fn test_from_jid_empty_is_none() {
        assert!(ExtractedRecord::from_jid("").is_none());
    }

    #[test]
    fn test_count_matches_row_count() {
        let document = ExportDocument::from_rows(&rows(&["1@a", "2@a", "3@a"]));
        assert_eq!(document.count, 3);
        assert_eq!(document.bots.len(), 3);
    }

    #[test]
    fn test_empty_jids_count_but_produce_no_entry() {
        let document = ExportDocument::from_rows(&rows(&["1@a", "", "2@a"]));
        assert_eq!(document.count, 3);
        assert_eq!(document.bots.len(), 2);
        assert!(!document.bots.contains_key(""));
    }

    #[test]
    fn test_duplicate_phone_last_write_wins() {
        let document = ExportDocument::from_rows(&rows(&[
            "123:1@s.whatsapp.net",
            "123:2@s.whatsapp.net",
        ]));
        assert_eq!(document.count, 2);
        assert_eq!(document.bots.len(), 1);
        assert_eq!(document.bots["123"].identity, "123:2@s.whatsapp.net");
    }

    #[test]
    fn test_observer_sees_every_record_in_row_order() {
        let mut seen = Vec::new();
        ExportDocument::from_rows_with(&rows(&["123:1@a", "", "123:2@a"]), |index, record| {
            seen.push((index, record.identity.clone()));
        });
        assert_eq!(
            seen,
            vec![(0, "123:1@a".to_string()), (2, "123:2@a".to_string())]
        );
    }

    #[test]
    fn test_json_field_names() {
        let document = ExportDocument::from_rows(&rows(&["123@a"]));
        let json = serde_json::to_value(&document).unwrap();
        let entry = &json["bots"]["123"];
        assert_eq!(entry["phone"], "123");
        assert_eq!(entry["lid"], "123@a");
        assert!(entry["extractedAt"].is_string());
        assert!(json["timestamp"].is_string());
        assert_eq!(json["count"], 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let document = ExportDocument::from_rows(&rows(&["1@a", "2:9@b", "3"]));
        let json = serde_json::to_string_pretty(&document).unwrap();
        let parsed: ExportDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, document);
    }
}
