use std::fmt;

/// Connection details collected from the operator at startup.
///
/// Values are passed through uninterpreted; an empty host or service name is
/// handed to the driver as-is and fails there, not here.
#[derive(Clone)]
pub struct ConnectionDescriptor {
    pub host: String,
    pub port: String,
    pub service: String,
    pub username: String,
    pub password: String,
}

impl ConnectionDescriptor {
    /// EZCONNECT descriptor for the target instance.
    pub fn connect_string(&self) -> String {
        format!("//{}:{}/{}", self.host, self.port, self.service)
    }
}

// Manual impl so the password never lands in logs.
impl fmt::Debug for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionDescriptor")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("service", &self.service)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
