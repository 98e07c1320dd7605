use model::records::outcome::AuditRow;
use oracle::{Row, SqlValue};
use tracing::warn;

/// Converts one driver row into its stringified report form.
pub fn stringify_row(row: &Row) -> AuditRow {
    AuditRow::new(row.sql_values().iter().map(stringify_value).collect())
}

/// Stringifies a single column value as encountered. NULL renders as `NULL`;
/// a value the driver cannot convert to text degrades to a placeholder
/// instead of failing the whole check.
fn stringify_value(value: &SqlValue) -> String {
    match value.get::<Option<String>>() {
        Ok(Some(text)) => text,
        Ok(None) => "NULL".to_string(),
        Err(err) => {
            warn!("Unconvertible column value: {err}");
            "<unreadable>".to_string()
        }
    }
}
