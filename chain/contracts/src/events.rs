//! Contract events
//!
//! Events are immutable records appended by contract operations. The vault
//! keeps them in an append-only log; one record exists per committed state
//! transition.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::condition::ConditionOperator;
use types::ids::{AccountId, FeedId, TokenAddress};

/// Token appended to the whitelist by the owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenWhitelisted {
    pub token: TokenAddress,
}

/// Token removed from the whitelist (sequence compacted)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRemovedFromWhitelist {
    pub token: TokenAddress,
    pub index: usize,
}

/// Plain deposit credited after a confirmed transfer-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositReceived {
    pub account_id: AccountId,
    pub token: TokenAddress,
    pub amount: Decimal,
}

/// Plain balance paid out after a confirmed transfer-out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalPaid {
    pub account_id: AccountId,
    pub token: TokenAddress,
    pub amount: Decimal,
}

/// Condition-locked deposit appended to the caller's sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionLockedDepositCreated {
    pub account_id: AccountId,
    pub token: TokenAddress,
    pub feed: FeedId,
    pub threshold: Decimal,
    pub operator: ConditionOperator,
    pub amount: Decimal,
    pub index: usize,
}

/// Condition-locked deposit released and marked consumed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionLockedDepositWithdrawn {
    pub account_id: AccountId,
    pub token: TokenAddress,
    pub amount: Decimal,
    pub index: usize,
}

/// Enum wrapper for all contract events, enabling uniform handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractEvent {
    TokenWhitelisted(TokenWhitelisted),
    TokenRemovedFromWhitelist(TokenRemovedFromWhitelist),
    DepositReceived(DepositReceived),
    WithdrawalPaid(WithdrawalPaid),
    ConditionLockedDepositCreated(ConditionLockedDepositCreated),
    ConditionLockedDepositWithdrawn(ConditionLockedDepositWithdrawn),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_received_serialization() {
        let event = DepositReceived {
            account_id: AccountId::new(),
            token: TokenAddress::new("DAI"),
            amount: Decimal::from(1000),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deser: DepositReceived = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deser);
    }

    #[test]
    fn test_condition_locked_deposit_created_serialization() {
        let event = ConditionLockedDepositCreated {
            account_id: AccountId::new(),
            token: TokenAddress::new("DAI"),
            feed: FeedId::new("ETH/USD"),
            threshold: Decimal::from(400_000_000i64),
            operator: ConditionOperator::GreaterThan,
            amount: Decimal::from(1000),
            index: 0,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deser: ConditionLockedDepositCreated = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deser);
    }

    #[test]
    fn test_contract_event_enum_variant() {
        let event = ContractEvent::TokenWhitelisted(TokenWhitelisted {
            token: TokenAddress::new("USDC"),
        });
        assert!(matches!(event, ContractEvent::TokenWhitelisted(_)));
    }

    #[test]
    fn test_withdrawn_event_serialization() {
        let event = ContractEvent::ConditionLockedDepositWithdrawn(ConditionLockedDepositWithdrawn {
            account_id: AccountId::new(),
            token: TokenAddress::new("DAI"),
            amount: Decimal::from(1000),
            index: 2,
        });
        let json = serde_json::to_string(&event).unwrap();
        let deser: ContractEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deser);
    }
}
