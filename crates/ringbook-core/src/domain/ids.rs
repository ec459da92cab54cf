use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("id cannot be empty")]
pub struct EmptyIdError;

/// Mints `{prefix}-{uuid}`. Random v4 uuids keep bulk minting collision-free
/// even when many ids are created within the same clock tick.
pub fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

macro_rules! id_type {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $name {
            pub const PREFIX: &'static str = $prefix;

            pub fn new() -> Self {
                Self(new_id(Self::PREFIX))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = EmptyIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(EmptyIdError);
                }
                Ok(Self(trimmed.to_string()))
            }
        }
    };
}

id_type!(ContactId, "contact");
id_type!(LogId, "log");
id_type!(ListId, "list");

#[cfg(test)]
mod tests {
    use super::{new_id, ContactId, ListId};
    use std::collections::HashSet;

    #[test]
    fn new_id_carries_prefix() {
        let id = new_id("bulk");
        assert!(id.starts_with("bulk-"));
        assert!(id.len() > "bulk-".len());
    }

    #[test]
    fn ids_minted_in_a_tight_loop_are_distinct() {
        let ids: HashSet<ContactId> = (0..10_000).map(|_| ContactId::new()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn parse_keeps_legacy_ids_verbatim() {
        let id: ContactId = "contact-1700000000000".parse().unwrap();
        assert_eq!(id.as_str(), "contact-1700000000000");
    }

    #[test]
    fn parse_rejects_blank() {
        assert!("   ".parse::<ListId>().is_err());
    }
}
