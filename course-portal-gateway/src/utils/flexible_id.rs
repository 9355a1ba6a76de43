//! Identifier deserialization
//!
//! The gateway sends ids as strings or numbers; both become `String`.

use serde::{Deserialize, Deserializer};

/// Deserialize a string or an integer
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        String(String),
        I64(i64),
        U64(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::String(s) => s,
        RawId::I64(n) => n.to_string(),
        RawId::U64(n) => n.to_string(),
    })
}
