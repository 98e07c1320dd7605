use crate::{
    core::risk::{FixType, RiskLevel},
    records::check::CheckDescriptor,
};
use serde::Serialize;
use std::fmt;

/// One row fetched for a check, every column already stringified.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AuditRow {
    pub values: Vec<String>,
}

impl AuditRow {
    pub fn new(values: Vec<String>) -> Self {
        AuditRow { values }
    }

    /// Renders the row as a single report line.
    pub fn joined(&self) -> String {
        self.values.join(", ")
    }
}

/// What a single check produced: either the fetched rows, or the error text
/// that replaced them. A failing query degrades to an `Error` output for
/// that check alone; it never aborts the run.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum CheckOutput {
    Rows(Vec<AuditRow>),
    Error(String),
}

impl CheckOutput {
    pub fn rows(rows: Vec<AuditRow>) -> Self {
        CheckOutput::Rows(rows)
    }

    /// Folds a query failure into output text. The `Error: ` prefix is part
    /// of the report format.
    pub fn error(err: impl fmt::Display) -> Self {
        CheckOutput::Error(format!("Error: {err}"))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CheckOutput::Error(_))
    }

    /// The display lines for the report's output cell: one line per fetched
    /// row, or the single error line.
    pub fn lines(&self) -> Vec<String> {
        match self {
            CheckOutput::Rows(rows) => rows.iter().map(AuditRow::joined).collect(),
            CheckOutput::Error(text) => vec![text.clone()],
        }
    }
}

/// The record handed to the report renderer: the descriptor fields of one
/// check plus whatever its query produced.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub id: String,
    pub description: String,
    pub risk: RiskLevel,
    pub fix_type: FixType,
    pub remediation: String,
    pub output: CheckOutput,
}

impl CheckResult {
    pub fn new(check: &CheckDescriptor, output: CheckOutput) -> Self {
        CheckResult {
            id: check.id.clone(),
            description: check.description.clone(),
            risk: check.risk,
            fix_type: check.fix_type,
            remediation: check.remediation.clone(),
            output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_output_carries_prefix() {
        let output = CheckOutput::error("ORA-00942: table or view does not exist");
        assert_eq!(
            output.lines(),
            vec!["Error: ORA-00942: table or view does not exist".to_string()]
        );
        assert!(output.is_error());
    }

    #[test]
    fn rows_render_one_line_each() {
        let output = CheckOutput::rows(vec![
            AuditRow::new(vec!["SCOTT".to_string(), "OPEN".to_string()]),
            AuditRow::new(vec!["HR".to_string(), "LOCKED".to_string()]),
        ]);
        assert_eq!(output.lines(), vec!["SCOTT, OPEN", "HR, LOCKED"]);
        assert!(!output.is_error());
    }

    #[test]
    fn single_value_row_renders_bare() {
        let output = CheckOutput::rows(vec![AuditRow::new(vec!["1".to_string()])]);
        assert_eq!(output.lines(), vec!["1"]);
    }

    #[test]
    fn result_copies_descriptor_fields() {
        let check = CheckDescriptor::new(
            "1.1",
            "Ensure auditing is enabled",
            "SELECT value FROM v$parameter WHERE name = 'audit_trail'",
            RiskLevel::High,
            FixType::Quick,
            "Set 'audit_trail=DB,EXTENDED' in init.ora or spfile",
        );
        let result = CheckResult::new(&check, CheckOutput::rows(vec![]));
        assert_eq!(result.id, check.id);
        assert_eq!(result.description, check.description);
        assert_eq!(result.risk, check.risk);
        assert_eq!(result.fix_type, check.fix_type);
        assert_eq!(result.remediation, check.remediation);
    }
}
