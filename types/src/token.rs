//! Token identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a minted non-fungible token.
///
/// Token ids have the form `<symbol>.<index>`, where `index` is the
/// zero-based position of the token in the mint sequence for a fixed
/// `symbol`. The first token minted under symbol `X` is `X.0`, the next
/// `X.1`, and so on. An id is immutable once assigned and never reused.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenId(String);

impl TokenId {
    /// Build the id of the `index`-th token minted under `symbol`.
    pub fn new(symbol: &str, index: u64) -> Self {
        Self(format!("{symbol}.{index}"))
    }

    /// Return the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TokenId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TokenId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_id_concatenates_symbol_and_index() {
        let id = TokenId::new("DEED", 0);
        assert_eq!(id.as_str(), "DEED.0");
        assert_eq!(TokenId::new("DEED", 41).as_str(), "DEED.41");
    }

    #[test]
    fn token_id_serializes_as_plain_string() {
        let id = TokenId::new("DEED", 7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"DEED.7\"");
        let back: TokenId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
