//! TLS settings of the server itself.

use crate::core::{Validate, Validator};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Parameters related to the server's TLS configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Security {
    /// Whether or not to enable TLS
    pub tls: bool,
    /// Location of the PEM certificate to use
    pub certificate: String,
    /// Location of the PEM key to use
    pub key: String,
}

impl Default for Security {
    fn default() -> Self {
        Self {
            tls: false,
            certificate: "./certificate.pem".to_string(),
            key: "./key.pem".to_string(),
        }
    }
}

impl Validate for Security {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.is_not_empty_when(
            self.tls,
            &self.certificate,
            "When TLS is active the certificate must not be blank",
        )
        .is_not_empty_when(
            self.tls,
            &self.key,
            "When TLS is active the key must not be blank",
        );
        ValidationError::collect("security", [v.all_valid()])
    }
}
