mod account;
mod ip_info;
mod node;
mod report;

pub use account::*;
pub use ip_info::*;
pub use node::*;
pub use report::*;

/// Serde adapter for key and signature types that round-trip through their
/// base58 `Display`/`FromStr` form.
pub(crate) mod base58_string {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::fmt::Display;
    use std::str::FromStr;

    pub fn serialize<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
