// src/wallet.rs
use serde::{Deserialize, Serialize};

/// An account the user can connect with. Key material lives in the
/// wallet-management subsystem; this popup only ever sees the address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletInfo {
    pub name: String,
    pub address: String,
}

impl WalletInfo {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// Compact address form for list rows: first 8 characters, "...",
/// last 6. Addresses short enough to show whole pass through as-is.
pub fn truncate_address(address: &str) -> String {
    if address.chars().count() <= 14 {
        return address.to_string();
    }
    let head: String = address.chars().take(8).collect();
    let tail_start = address.chars().count() - 6;
    let tail: String = address.chars().skip(tail_start).collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_address() {
        assert_eq!(
            truncate_address("0x1234567890abcdef1234567890abcdef12345678"),
            "0x123456...345678"
        );
    }

    #[test]
    fn test_truncate_base58_address() {
        assert_eq!(
            truncate_address("DYw8jCTfwHNRJhhmFcbXvVDTqWMEVFBX6ZKUmG5CNSKK"),
            "DYw8jCTf...5CNSKK"
        );
    }

    #[test]
    fn test_short_address_unchanged() {
        assert_eq!(truncate_address("0x1234abcd"), "0x1234abcd");
        assert_eq!(truncate_address(""), "");
    }
}
