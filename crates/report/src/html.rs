use crate::error::ReportError;
use chrono::{DateTime, Local};
use minijinja::{Environment, context};
use model::{
    core::risk::{FixType, RiskLevel},
    records::outcome::CheckResult,
};
use serde::Serialize;

/// The report template. Registered under an `.html` name so minijinja's
/// auto-escaping applies to every interpolated value, including raw query
/// output pulled from the database.
const REPORT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Oracle CIS Audit Report</title>
    <style>
        body { font-family: Arial; padding: 20px; }
        table { width: 100%; border-collapse: collapse; margin-top: 20px; }
        th, td { padding: 10px; border: 1px solid #ccc; vertical-align: top; }
        th { background-color: #f0f0f0; }
        .High { background-color: #f8d7da; }
        .Medium { background-color: #fff3cd; }
        .Low { background-color: #d4edda; }
        pre { white-space: pre-wrap; background: #f4f4f4; padding: 8px; }
    </style>
</head>
<body>
    <h1>Oracle Database CIS Audit Report</h1>
    <p><strong>Date:</strong> {{ date }}</p>
    <table>
        <thead>
            <tr>
                <th>Finding ID</th>
                <th>Description</th>
                <th>Risk Rating</th>
                <th>Fix Type</th>
                <th>Remediation</th>
                <th>Output</th>
            </tr>
        </thead>
        <tbody>
        {% for item in results %}
            <tr class="{{ item.risk }}">
                <td>{{ item.id }}</td>
                <td>{{ item.description }}</td>
                <td>{{ item.risk }}</td>
                <td>{{ item.fix_type }}</td>
                <td>{{ item.remediation }}</td>
                <td><pre>{{ item.output | join("\n") }}</pre></td>
            </tr>
        {% endfor %}
        </tbody>
    </table>
</body>
</html>
"#;

/// Row view handed to the template; `output` is the pre-rendered display
/// lines of the check's `CheckOutput`.
#[derive(Serialize)]
struct ReportRow<'a> {
    id: &'a str,
    description: &'a str,
    risk: RiskLevel,
    fix_type: FixType,
    remediation: &'a str,
    output: Vec<String>,
}

impl<'a> ReportRow<'a> {
    fn from_result(result: &'a CheckResult) -> Self {
        ReportRow {
            id: &result.id,
            description: &result.description,
            risk: result.risk,
            fix_type: result.fix_type,
            remediation: &result.remediation,
            output: result.output.lines(),
        }
    }
}

/// Renders the full report document in memory.
///
/// Deterministic: the same results and timestamp always produce the same
/// bytes.
pub fn render(
    results: &[CheckResult],
    generated_at: DateTime<Local>,
) -> Result<String, ReportError> {
    let mut env = Environment::new();
    env.add_template("report.html", REPORT_TEMPLATE)?;
    let template = env.get_template("report.html")?;

    let rows: Vec<ReportRow> = results.iter().map(ReportRow::from_result).collect();
    let html = template.render(context! {
        date => generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        results => rows,
    })?;
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use model::records::outcome::{AuditRow, CheckOutput};

    fn fixed_timestamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 1, 12, 30, 45).unwrap()
    }

    fn result(id: &str, risk: RiskLevel, output: CheckOutput) -> CheckResult {
        CheckResult {
            id: id.to_string(),
            description: "a check".to_string(),
            risk,
            fix_type: FixType::Quick,
            remediation: "fix it".to_string(),
            output,
        }
    }

    #[test]
    fn one_table_row_per_result_tagged_with_risk_class() {
        let results = vec![
            result("1.1", RiskLevel::High, CheckOutput::rows(vec![])),
            result("2.1", RiskLevel::Medium, CheckOutput::rows(vec![])),
            result("3.1", RiskLevel::Low, CheckOutput::rows(vec![])),
        ];

        let html = render(&results, fixed_timestamp()).unwrap();

        assert_eq!(html.matches("<tr class=").count(), results.len());
        assert!(html.contains(r#"<tr class="High">"#));
        assert!(html.contains(r#"<tr class="Medium">"#));
        assert!(html.contains(r#"<tr class="Low">"#));
    }

    #[test]
    fn single_value_row_renders_bare_in_output_cell() {
        let results = vec![result(
            "1.1",
            RiskLevel::High,
            CheckOutput::rows(vec![AuditRow::new(vec!["1".to_string()])]),
        )];

        let html = render(&results, fixed_timestamp()).unwrap();

        assert!(html.contains("<pre>1</pre>"));
    }

    #[test]
    fn error_output_renders_as_single_error_line() {
        let results = vec![result(
            "4.1",
            RiskLevel::Medium,
            CheckOutput::error("ORA-00942: table or view does not exist"),
        )];

        let html = render(&results, fixed_timestamp()).unwrap();

        assert!(html.contains("<pre>Error: ORA-00942: table or view does not exist</pre>"));
    }

    #[test]
    fn multi_row_output_joins_with_newlines() {
        let results = vec![result(
            "3.1",
            RiskLevel::High,
            CheckOutput::rows(vec![
                AuditRow::new(vec!["SYS".to_string()]),
                AuditRow::new(vec!["SYSTEM".to_string()]),
            ]),
        )];

        let html = render(&results, fixed_timestamp()).unwrap();

        assert!(html.contains("<pre>SYS\nSYSTEM</pre>"));
    }

    #[test]
    fn database_content_is_html_escaped() {
        let results = vec![result(
            "5.1",
            RiskLevel::Low,
            CheckOutput::rows(vec![AuditRow::new(vec![
                "<script>alert('x')</script>".to_string(),
            ])]),
        )];

        let html = render(&results, fixed_timestamp()).unwrap();

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn render_is_deterministic_for_fixed_timestamp() {
        let results = vec![
            result("1.1", RiskLevel::High, CheckOutput::rows(vec![])),
            result(
                "2.1",
                RiskLevel::Medium,
                CheckOutput::error("ORA-01031: insufficient privileges"),
            ),
        ];

        let first = render(&results, fixed_timestamp()).unwrap();
        let second = render(&results, fixed_timestamp()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn generation_date_is_embedded() {
        let html = render(&[], fixed_timestamp()).unwrap();
        assert!(html.contains("2025-06-01 12:30:45"));
    }

    #[test]
    fn empty_results_render_empty_table_body() {
        let html = render(&[], fixed_timestamp()).unwrap();
        assert_eq!(html.matches("<tr class=").count(), 0);
        assert!(html.contains("<tbody>"));
    }
}
