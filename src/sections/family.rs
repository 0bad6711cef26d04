//! Address family of a network endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transport kind of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    /// The address is a TCP `host` and the endpoint listens on `host:port`.
    Socket,
    /// The address is the path of a local unix-domain socket.
    Unix,
}

impl AddressFamily {
    /// The configuration spelling of the family.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Socket => "socket",
            Self::Unix => "unix",
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "socket" => Ok(Self::Socket),
            "unix" => Ok(Self::Unix),
            other => Err(format!(
                "unknown address family {:?}, expected \"socket\" or \"unix\"",
                other
            )),
        }
    }
}

/// Serde glue for `Option<AddressFamily>` where a blank string means "not set".
pub(crate) mod optional {
    use super::AddressFamily;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub(crate) fn serialize<S: Serializer>(
        family: &Option<AddressFamily>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(family.as_ref().map_or("", AddressFamily::as_str))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<AddressFamily>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some).map_err(de::Error::custom),
        }
    }
}
