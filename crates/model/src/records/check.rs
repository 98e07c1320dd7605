use crate::core::risk::{FixType, RiskLevel};
use serde::Serialize;

/// One entry of the audit catalog: a read-only query against the system
/// catalog views plus the metadata that ends up in the report.
///
/// Descriptors are built once at startup and never mutated. Any query whose
/// result set is not small by nature must bound itself (`ROWNUM <= n`);
/// the session layer fetches all rows into memory without pagination.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CheckDescriptor {
    pub id: String,
    pub description: String,
    pub query: String,
    pub risk: RiskLevel,
    pub fix_type: FixType,
    pub remediation: String,
}

impl CheckDescriptor {
    pub fn new(
        id: &str,
        description: &str,
        query: &str,
        risk: RiskLevel,
        fix_type: FixType,
        remediation: &str,
    ) -> Self {
        CheckDescriptor {
            id: id.to_string(),
            description: description.to_string(),
            query: query.to_string(),
            risk,
            fix_type,
            remediation: remediation.to_string(),
        }
    }
}
