//! # Private Network Prefix
//!
//! The router's management network is recognised purely by the leading
//! octets of the host's own address. Matching is textual, the same way an
//! operator would eyeball `ip addr` output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const DEFAULT_PREFIX: &str = "10";

/// A dotted leading-octet prefix such as `10` or `10.23`.
///
/// Stored normalised with a trailing dot, so `10` matches `10.0.0.7` but
/// never `100.0.0.7`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressPrefix(String);

impl AddressPrefix {
    pub fn matches(&self, address: &str) -> bool {
        address.starts_with(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AddressPrefix {
    fn default() -> Self {
        Self(format!("{DEFAULT_PREFIX}."))
    }
}

impl FromStr for AddressPrefix {
    type Err = String;

    /// Accepts one to three dotted octets, with or without the trailing dot.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('.');
        if trimmed.is_empty() {
            return Err("address prefix must not be empty".to_string());
        }

        let octets: Vec<&str> = trimmed.split('.').collect();
        if octets.len() > 3 {
            return Err(format!("invalid address prefix: {s} (at most three octets)"));
        }
        for octet in &octets {
            if octet.is_empty() || octet.len() > 3 || !octet.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format!("invalid address prefix: {s}"));
            }
        }

        Ok(Self(format!("{trimmed}.")))
    }
}

impl fmt::Display for AddressPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.trim_end_matches('.'))
    }
}

impl Serialize for AddressPrefix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AddressPrefix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_ten_network_only() {
        let prefix = AddressPrefix::default();
        assert!(prefix.matches("10.23.0.42"));
        assert!(!prefix.matches("100.64.0.1"));
        assert!(!prefix.matches("192.168.5.77"));
    }

    #[test]
    fn parse_normalises_trailing_dot() {
        let with_dot: AddressPrefix = "10.".parse().unwrap();
        let without_dot: AddressPrefix = "10".parse().unwrap();
        assert_eq!(with_dot, without_dot);
        assert_eq!(without_dot.as_str(), "10.");
        assert_eq!(without_dot.to_string(), "10");
    }

    #[test]
    fn parse_accepts_multi_octet_prefix() {
        let prefix: AddressPrefix = "10.23".parse().unwrap();
        assert!(prefix.matches("10.23.0.42"));
        assert!(!prefix.matches("10.230.0.42"));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<AddressPrefix>().is_err());
        assert!(".".parse::<AddressPrefix>().is_err());
        assert!("ten".parse::<AddressPrefix>().is_err());
        assert!("10..1".parse::<AddressPrefix>().is_err());
        assert!("10.0.0.1".parse::<AddressPrefix>().is_err());
    }
}
