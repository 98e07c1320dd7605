//! The static audit catalog: every CIS check this tool knows how to run.
//!
//! The catalog is an ordered, immutable list built once at startup and passed
//! explicitly to the runner. Catalog order is report order.

use model::{
    core::risk::{FixType, RiskLevel},
    records::check::CheckDescriptor,
};

/// Builds the full check catalog in report order.
///
/// Every query is a bare SELECT against the data dictionary; anything that
/// could return an unbounded result set caps itself with `ROWNUM`.
pub fn builtin_checks() -> Vec<CheckDescriptor> {
    vec![
        CheckDescriptor::new(
            "1.1",
            "Ensure auditing is enabled",
            "SELECT value FROM v$parameter WHERE name = 'audit_trail'",
            RiskLevel::High,
            FixType::Quick,
            "Set 'audit_trail=DB,EXTENDED' in init.ora or spfile",
        ),
        CheckDescriptor::new(
            "2.1",
            "Password complexity enforced",
            "SELECT profile, resource_name, limit FROM dba_profiles \
             WHERE resource_name = 'PASSWORD_VERIFY_FUNCTION'",
            RiskLevel::Medium,
            FixType::Planned,
            "Assign strong password functions to user profiles",
        ),
        CheckDescriptor::new(
            "3.1",
            "DBA role misuse",
            "SELECT grantee FROM dba_role_privs WHERE granted_role = 'DBA'",
            RiskLevel::High,
            FixType::Involved,
            "Limit DBA role assignment to only authorized users",
        ),
        CheckDescriptor::new(
            "4.1",
            "Failed login audit check",
            "SELECT username, timestamp, returncode FROM dba_audit_session \
             WHERE returncode != 0 AND ROWNUM <= 5",
            RiskLevel::Medium,
            FixType::Quick,
            "Enable audit for session logon failures",
        ),
        CheckDescriptor::new(
            "5.1",
            "Check for default user accounts",
            "SELECT username, account_status FROM dba_users \
             WHERE username IN ('SCOTT','HR','OUTLN')",
            RiskLevel::Low,
            FixType::Quick,
            "Lock/remove unused default accounts",
        ),
        CheckDescriptor::new(
            "6.1",
            "PUBLIC execute on network/file packages",
            "SELECT table_name, privilege FROM dba_tab_privs \
             WHERE grantee = 'PUBLIC' AND privilege = 'EXECUTE' \
             AND table_name IN ('UTL_FILE','UTL_TCP','UTL_HTTP','UTL_SMTP','DBMS_LOB') \
             AND ROWNUM <= 5",
            RiskLevel::High,
            FixType::Planned,
            "Revoke EXECUTE on UTL_* and DBMS_LOB packages from PUBLIC",
        ),
        CheckDescriptor::new(
            "7.1",
            "Remote login password file",
            "SELECT value FROM v$parameter WHERE name = 'remote_login_passwordfile'",
            RiskLevel::Medium,
            FixType::Quick,
            "Set 'remote_login_passwordfile=NONE' unless SYSDBA over the network is required",
        ),
        CheckDescriptor::new(
            "8.1",
            "Profiles with unlimited failed login attempts",
            "SELECT profile, limit FROM dba_profiles \
             WHERE resource_name = 'FAILED_LOGIN_ATTEMPTS' AND limit = 'UNLIMITED'",
            RiskLevel::Medium,
            FixType::Quick,
            "Set FAILED_LOGIN_ATTEMPTS to 5 or fewer on all profiles",
        ),
    ]
}
