use serde::Serialize;
use std::fmt;

/// Risk rating assigned to an audit check.
///
/// The serialized form doubles as the CSS class of the report row, so the
/// variant names must stay `High`/`Medium`/`Low` verbatim.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effort class of the remediation for a failed check.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixType {
    Quick,
    Planned,
    Involved,
}

impl FixType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixType::Quick => "Quick",
            FixType::Planned => "Planned",
            FixType::Involved => "Involved",
        }
    }
}

impl fmt::Display for FixType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_display_matches_css_class_names() {
        assert_eq!(RiskLevel::High.to_string(), "High");
        assert_eq!(RiskLevel::Medium.to_string(), "Medium");
        assert_eq!(RiskLevel::Low.to_string(), "Low");
    }

    #[test]
    fn fix_type_display() {
        assert_eq!(FixType::Quick.to_string(), "Quick");
        assert_eq!(FixType::Planned.to_string(), "Planned");
        assert_eq!(FixType::Involved.to_string(), "Involved");
    }
}
