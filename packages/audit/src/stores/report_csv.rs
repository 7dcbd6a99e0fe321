//! CSV report sink with replace-on-write semantics.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;
use crate::traits::store::ReportSink;
use crate::types::report::GapReportRow;

/// Fixed header schema of the gap report table.
pub const GAP_REPORT_HEADERS: &[&str] = &[
    "Gap ID",
    "Category",
    "Gap Description",
    "Priority",
    "Suggested Article Title",
    "Rationale",
];

/// Writes the gap report to a CSV file, replacing it wholesale on
/// every run. The header row is always present, data rows only when
/// the report is non-empty.
pub struct CsvReportSink {
    path: PathBuf,
}

impl CsvReportSink {
    /// Create a sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Output file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn render(rows: &[GapReportRow]) -> String {
        let mut out = String::new();
        out.push_str(&GAP_REPORT_HEADERS.join(","));
        out.push('\n');

        for row in rows {
            let fields = [
                row.gap_id.as_str(),
                row.category.label(),
                row.description.as_str(),
                row.priority.label(),
                row.suggested_title.as_str(),
                row.rationale.as_str(),
            ];
            let line: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
            out.push_str(&line.join(","));
            out.push('\n');
        }

        out
    }
}

/// Quote a field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[async_trait]
impl ReportSink for CsvReportSink {
    async fn replace_report(&self, rows: &[GapReportRow]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let content = Self::render(rows);

        let tmp_path = self.path.with_extension("csv.tmp");
        tokio::fs::write(&tmp_path, content.as_bytes()).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        info!(path = %self.path.display(), rows = rows.len(), "gap report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::article::Category;
    use crate::types::report::Priority;

    fn row(id: &str, rationale: &str) -> GapReportRow {
        GapReportRow {
            gap_id: id.to_string(),
            category: Category::RolesPermissions,
            description: "Missing Role & Access Requirements".into(),
            priority: Priority::High,
            suggested_title: "Guide: Role & Access Requirements".into(),
            rationale: rationale.to_string(),
        }
    }

    #[test]
    fn test_render_header_and_rows() {
        let rendered = CsvReportSink::render(&[row("GAP-001", "Plain rationale")]);
        let mut lines = rendered.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Gap ID,Category,Gap Description,Priority,Suggested Article Title,Rationale"
        );
        let data = lines.next().unwrap();
        assert!(data.starts_with("GAP-001,"));
        assert!(data.ends_with("Plain rationale"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_render_quotes_delimiters_and_quotes() {
        let rendered = CsvReportSink::render(&[row("GAP-001", "Users are stuck, \"confused\"")]);
        assert!(rendered.contains("\"Users are stuck, \"\"confused\"\"\""));
    }

    #[test]
    fn test_render_empty_report_is_header_only() {
        assert_eq!(
            CsvReportSink::render(&[]),
            "Gap ID,Category,Gap Description,Priority,Suggested Article Title,Rationale\n"
        );
    }

    #[tokio::test]
    async fn test_replace_on_write() {
        let path = std::env::temp_dir().join(format!(
            "audit-report-{}-replace.csv",
            std::process::id()
        ));
        let sink = CsvReportSink::new(&path);

        sink.replace_report(&[row("GAP-001", "First"), row("GAP-002", "Second")])
            .await
            .unwrap();
        let first = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(first.lines().count(), 3);

        sink.replace_report(&[row("GAP-001", "Only")]).await.unwrap();
        let second = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(second.lines().count(), 2);
        assert!(!second.contains("Second"));

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
