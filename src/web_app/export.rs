// web_app/export.rs - Client-side result export
//
// Pure rendering of the stored records into downloadable files. The
// page turns the rendered payload into a `data:` URL anchor, so export
// never touches the server or re-fetches anything.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::web_app::model::{Source, SourceResults};
use crate::web_app::results::flatten_value;

/// Supported download formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    UserPass,
    UrlUserPass,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Json,
        ExportFormat::Csv,
        ExportFormat::UserPass,
        ExportFormat::UrlUserPass,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
            ExportFormat::UserPass => "user:pass",
            ExportFormat::UrlUserPass => "url:user:pass",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::UserPass | ExportFormat::UrlUserPass => "txt",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::UserPass | ExportFormat::UrlUserPass => "text/plain",
        }
    }
}

// Field preference orders for the text formats. Rows lacking a required
// field are dropped silently.
const LOGIN_KEYS: [&str; 4] = ["email", "username", "login", "user"];
const PASSWORD_KEYS: [&str; 2] = ["password", "pass"];
const URL_KEYS: [&str; 3] = ["url", "domain", "host"];

/// Render the stored records in the requested format.
pub fn render_export(results: &SourceResults, format: ExportFormat) -> String {
    match format {
        ExportFormat::Json => {
            serde_json::to_string_pretty(&results.records).unwrap_or_else(|_| "[]".to_string())
        }
        ExportFormat::Csv => render_csv(results),
        ExportFormat::UserPass => render_lines(&results.records, &[&LOGIN_KEYS, &PASSWORD_KEYS]),
        ExportFormat::UrlUserPass => {
            render_lines(&results.records, &[&URL_KEYS, &LOGIN_KEYS, &PASSWORD_KEYS])
        }
    }
}

/// Download file name: `<source-slug>-<query>.<ext>`.
///
/// The query is sanitized just enough to be a safe file name.
pub fn export_file_name(source: Source, query: &str, format: ExportFormat) -> String {
    let safe_query: String = query
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}-{}.{}", source.slug(), safe_query, format.extension())
}

/// Build the `data:` URL the download anchor points at.
pub fn data_url(format: ExportFormat, content: &str) -> String {
    format!(
        "data:{};charset=utf-8,{}",
        format.mime(),
        urlencoding::encode(content)
    )
}

fn render_csv(results: &SourceResults) -> String {
    let set = crate::web_app::results::RowSet::from_records(
        &results.records,
        results.source.preferred_columns(),
    );

    let mut out = String::new();
    out.push_str(
        &set.columns
            .iter()
            .map(|c| csv_field(c))
            .collect::<Vec<_>>()
            .join(","),
    );
    out.push('\n');

    for row in &set.rows {
        let line = set
            .columns
            .iter()
            .map(|col| csv_field(row.get(col)))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

// Naive CSV quoting: quote only when the field needs it, doubling any
// embedded quotes. No escaping beyond that.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn render_lines(records: &[Map<String, Value>], key_groups: &[&[&str]]) -> String {
    let mut lines = Vec::new();
    'records: for record in records {
        let mut parts = Vec::with_capacity(key_groups.len());
        for keys in key_groups {
            match first_field(record, keys) {
                Some(value) => parts.push(value),
                // Missing a required field: drop the row.
                None => continue 'records,
            }
        }
        lines.push(parts.join(":"));
    }
    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

// First non-empty field among `keys`, stringified for the text formats.
fn first_field(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = record.get(*key) {
            if value.is_null() {
                continue;
            }
            let text = flatten_value(value);
            if !text.is_empty() && text != crate::web_app::results::EMPTY_CELL {
                return Some(text);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::extract_records;
    use serde_json::json;

    fn sample_results() -> SourceResults {
        SourceResults::new(
            Source::LeakCheck,
            "test@example.com",
            extract_records(&json!([
                {"email": "a@b.c", "password": "one", "url": "https://x.y"},
                {"username": "bob", "password": "two"},
                {"email": "no-password@d.e"}
            ])),
        )
    }

    #[test]
    fn test_json_round_trip() {
        let results = sample_results();
        let payload = render_export(&results, ExportFormat::Json);
        let parsed: Vec<Map<String, Value>> = serde_json::from_str(&payload).unwrap();
        assert_eq!(parsed, results.records);
    }

    #[test]
    fn test_user_pass_prefers_email_and_drops_incomplete() {
        let results = sample_results();
        let payload = render_export(&results, ExportFormat::UserPass);
        // Third record has no password and is dropped.
        assert_eq!(payload, "a@b.c:one\nbob:two\n");
    }

    #[test]
    fn test_url_user_pass_requires_all_three() {
        let results = sample_results();
        let payload = render_export(&results, ExportFormat::UrlUserPass);
        assert_eq!(payload, "https://x.y:a@b.c:one\n");
    }

    #[test]
    fn test_empty_records_render_empty_text() {
        let results = SourceResults::new(Source::Ulp, "q", vec![]);
        assert_eq!(render_export(&results, ExportFormat::UserPass), "");
    }

    #[test]
    fn test_csv_header_uses_preferred_order() {
        let results = sample_results();
        let payload = render_export(&results, ExportFormat::Csv);
        let header = payload.lines().next().unwrap();
        // LeakCheck prefers email, username, password first.
        assert!(header.starts_with("email,username,password"));
        assert_eq!(payload.lines().count(), 4);
    }

    #[test]
    fn test_csv_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_csv_missing_cells_are_placeholders() {
        let results = sample_results();
        let payload = render_export(&results, ExportFormat::Csv);
        let second_row = payload.lines().nth(2).unwrap();
        assert!(second_row.contains("-"));
        assert!(second_row.contains("bob"));
    }

    #[test]
    fn test_file_name_sanitizes_query() {
        let name = export_file_name(Source::Ulp, "corp.com/admin login", ExportFormat::UserPass);
        assert_eq!(name, "ulp-corp.com_admin_login.txt");
    }

    #[test]
    fn test_file_name_per_format() {
        assert_eq!(
            export_file_name(Source::HackCheck, "a@b.c", ExportFormat::Json),
            "hackcheck-a@b.c.json"
        );
        assert_eq!(
            export_file_name(Source::HackCheck, "a@b.c", ExportFormat::Csv),
            "hackcheck-a@b.c.csv"
        );
    }

    #[test]
    fn test_data_url_encodes_content() {
        let url = data_url(ExportFormat::Json, r#"[{"a":"b c"}]"#);
        assert!(url.starts_with("data:application/json;charset=utf-8,"));
        assert!(url.contains("%20"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_format_metadata() {
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::Csv.mime(), "text/csv");
        assert_eq!(ExportFormat::UserPass.mime(), "text/plain");
        assert_eq!(ExportFormat::UrlUserPass.label(), "url:user:pass");
        assert_eq!(ExportFormat::ALL.len(), 4);
    }
}
