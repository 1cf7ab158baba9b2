/// HTTP Basic-Auth credential pair sent with every adapter request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    const PLACEHOLDER: &'static str = "mo";

    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// the fixed username/password pair used when an endpoint is configured
    /// without credentials. this is not a secure default; deployments talking
    /// to a protected server must configure real credentials.
    pub fn placeholder() -> Self {
        Self::new(Self::PLACEHOLDER, Self::PLACEHOLDER)
    }

    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("alice", "hunter2");
        let debug = format!("{creds:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(Credentials::placeholder().is_placeholder());
        assert!(!Credentials::new("mo", "secret").is_placeholder());
    }
}
