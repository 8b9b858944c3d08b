use std::fmt::{Debug, Formatter};

/// Credential that holds the access key and secret key.
#[derive(Default, Clone)]
pub struct Credential {
    /// Access key id.
    pub access_key_id: String,
    /// Secret access key. Sensitive, never logged.
    pub secret_access_key: String,
    /// Session token, present for temporary credentials.
    pub session_token: Option<String>,
}

impl Credential {
    /// Check whether this credential can produce a signature a verifier would
    /// ever accept. Both keys must be non-empty.
    pub fn is_valid(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact(&self.access_key_id))
            .field("secret_access_key", &Redact(&self.secret_access_key))
            .field(
                "session_token",
                &Redact(self.session_token.as_deref().unwrap_or("")),
            )
            .finish()
    }
}

/// Redacts a string, keeping at most the first and last three characters.
///
/// Short values are redacted entirely; longer ones keep just enough to tell
/// two redacted strings apart without leaking key material.
struct Redact<'a>(&'a str);

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let length = self.0.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 {
            f.write_str("***")
        } else {
            f.write_str(&self.0[..3])?;
            f.write_str("***")?;
            f.write_str(&self.0[length - 3..])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        let cred = Credential {
            access_key_id: "access_key_id".to_string(),
            secret_access_key: "secret_access_key".to_string(),
            session_token: None,
        };
        assert!(cred.is_valid());

        let cred = Credential {
            access_key_id: "access_key_id".to_string(),
            ..Default::default()
        };
        assert!(!cred.is_valid());

        let cred = Credential {
            secret_access_key: "secret_access_key".to_string(),
            ..Default::default()
        };
        assert!(!cred.is_valid());

        assert!(!Credential::default().is_valid());
    }

    #[test]
    fn test_debug_redacts_keys() {
        let cred = Credential {
            access_key_id: "AKIDEXAMPLEKEY".to_string(),
            secret_access_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string(),
            session_token: Some("short".to_string()),
        };

        let out = format!("{cred:?}");
        assert!(!out.contains("wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY"));
        assert!(out.contains("AKI***KEY"));
        assert!(out.contains("wJa***KEY"));
    }
}
