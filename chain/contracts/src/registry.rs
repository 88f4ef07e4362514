//! Token whitelist — ordered sequence with index-based removal
//!
//! Positions double as removal handles: removing an entry shifts everything
//! after it left by one, preserving the relative order of the remainder.
//! Duplicate entries are allowed; a token is whitelisted while at least one
//! entry matches it. Whitelists are expected to stay small, so membership
//! is a linear scan.

use types::ids::TokenAddress;

use crate::errors::RegistryError;

/// Ordered whitelist of accepted tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    entries: Vec<TokenAddress>,
}

impl TokenRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a token to the whitelist.
    pub fn add(&mut self, token: TokenAddress) {
        self.entries.push(token);
    }

    /// Remove the entry at `index`, compacting the sequence.
    pub fn remove(&mut self, index: usize) -> Result<TokenAddress, RegistryError> {
        if index >= self.entries.len() {
            return Err(RegistryError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Membership scan over the sequence.
    pub fn contains(&self, token: &TokenAddress) -> bool {
        self.entries.iter().any(|entry| entry == token)
    }

    /// Entry at `index`.
    pub fn token_at(&self, index: usize) -> Result<&TokenAddress, RegistryError> {
        self.entries.get(index).ok_or(RegistryError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// All entries in whitelist order.
    pub fn tokens(&self) -> &[TokenAddress] {
        &self.entries
    }

    /// Number of entries (duplicates counted).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the whitelist is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dai() -> TokenAddress {
        TokenAddress::new("0x6B175474E89094C44Da98b954EedeAC495271d0F")
    }

    fn usdc() -> TokenAddress {
        TokenAddress::new("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48")
    }

    #[test]
    fn test_add_and_contains() {
        let mut registry = TokenRegistry::new();
        registry.add(dai());
        assert!(registry.contains(&dai()));
        assert!(!registry.contains(&usdc()));
    }

    #[test]
    fn test_remove_compacts_and_reorders() {
        let mut registry = TokenRegistry::new();
        registry.add(dai());
        registry.add(usdc());

        let removed = registry.remove(0).unwrap();
        assert_eq!(removed, dai());

        // the sequence is compacted: USDC moved into position 0
        assert_eq!(registry.token_at(0).unwrap(), &usdc());
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains(&dai()));
        assert!(registry.contains(&usdc()));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut registry = TokenRegistry::new();
        registry.add(dai());
        let result = registry.remove(1);
        assert_eq!(result, Err(RegistryError::IndexOutOfRange { index: 1, len: 1 }));
    }

    #[test]
    fn test_token_at_out_of_range() {
        let registry = TokenRegistry::new();
        assert!(matches!(
            registry.token_at(0),
            Err(RegistryError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_duplicates_coexist() {
        let mut registry = TokenRegistry::new();
        registry.add(dai());
        registry.add(dai());
        assert_eq!(registry.len(), 2);

        // removing one entry leaves the token whitelisted through the other
        registry.remove(0).unwrap();
        assert!(registry.contains(&dai()));
        registry.remove(0).unwrap();
        assert!(!registry.contains(&dai()));
    }

    #[test]
    fn test_membership_matches_sequence() {
        let mut registry = TokenRegistry::new();
        registry.add(dai());
        registry.add(usdc());
        registry.add(dai());
        registry.remove(2).unwrap();

        for token in registry.tokens().to_vec() {
            assert!(registry.contains(&token));
        }
        assert_eq!(registry.tokens(), &[dai(), usdc()]);
    }
}
