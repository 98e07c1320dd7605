use crate::error::CliError;
use dialoguer::{Input, Password};
use model::execution::connection::ConnectionDescriptor;

/// Collects the five connection inputs interactively.
///
/// No format validation: an empty host or service name passes through to the
/// driver uninterpreted. The password prompt does not echo.
pub fn collect_credentials() -> Result<ConnectionDescriptor, CliError> {
    let host: String = Input::new()
        .with_prompt("Oracle host")
        .allow_empty(true)
        .interact_text()?;
    let port: String = Input::new()
        .with_prompt("Port")
        .default("1521".to_string())
        .interact_text()?;
    let service: String = Input::new()
        .with_prompt("Service name/SID")
        .allow_empty(true)
        .interact_text()?;
    let username: String = Input::new()
        .with_prompt("Read-only username")
        .allow_empty(true)
        .interact_text()?;
    let password = Password::new()
        .with_prompt(format!("Password for {username}"))
        .allow_empty_password(true)
        .interact()?;

    Ok(ConnectionDescriptor {
        host,
        port,
        service,
        username,
        password,
    })
}
