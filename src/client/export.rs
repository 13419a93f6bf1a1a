//! CSV export of the enquiry inbox, shaped so spreadsheet apps open it cleanly.

use std::borrow::Cow;

use chrono::NaiveDate;

use crate::models::enquiries;

pub const CSV_HEADERS: [&str; 8] = [
    "Name", "Phone", "Email", "Service", "Message", "Status", "Notes", "Date",
];

/// Byte-order mark so Excel detects UTF-8.
const BOM: char = '\u{FEFF}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub content: String,
}

/// Quote a value when it contains a comma, quote or newline.
pub fn escape_csv(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

pub fn file_name(date: NaiveDate) -> String {
    format!("enquiries_{}.csv", date.format("%Y-%m-%d"))
}

pub fn enquiries_csv(enquiries: &[enquiries::Model]) -> String {
    let mut out = String::new();
    out.push(BOM);
    out.push_str(&CSV_HEADERS.join(","));

    for e in enquiries {
        let row = [
            escape_csv(&e.name),
            escape_csv(&e.phone),
            escape_csv(e.email.as_deref().unwrap_or("")),
            escape_csv(&e.service),
            escape_csv(&e.message),
            Cow::Borrowed(e.status.as_str()),
            escape_csv(e.notes.as_deref().unwrap_or("")),
            Cow::Owned(e.created_at.format("%Y-%m-%d %H:%M").to_string()),
        ];
        out.push('\n');
        out.push_str(&row.join(","));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fallback;

    #[test]
    fn plain_values_are_not_quoted() {
        assert_eq!(escape_csv("Hair Care"), "Hair Care");
    }

    #[test]
    fn special_characters_are_quoted() {
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn export_has_bom_header_and_one_row_per_enquiry() {
        let seed = fallback::enquiries();
        let csv = enquiries_csv(&seed);

        assert!(csv.starts_with('\u{FEFF}'));
        let mut lines = csv.trim_start_matches('\u{FEFF}').lines();
        assert_eq!(
            lines.next(),
            Some("Name,Phone,Email,Service,Message,Status,Notes,Date")
        );
        let rows: Vec<_> = lines.collect();
        assert_eq!(rows.len(), seed.len());
        assert_eq!(
            rows[1],
            "Meera Sharma,+91 88776 65544,,Herbal Facials,Do you offer packages for multiple facial sessions?,Contacted,\"Called back, explained monthly package options\",2024-12-17 14:00"
        );
    }

    #[test]
    fn file_name_carries_the_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(file_name(date), "enquiries_2025-03-09.csv");
    }
}
