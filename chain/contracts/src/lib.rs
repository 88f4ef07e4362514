//! Contract Logic for Conditional Custody & Release
//!
//! This crate implements the financial-logic core of the conditional vault:
//! token custody, an owner-controlled whitelist of accepted tokens, per-user
//! locked-deposit records, and the condition-evaluation function gating
//! withdrawal. Token contracts and the price oracle are external
//! collaborators behind the `token` and `oracle` traits.
//!
//! # Modules
//! - `errors`: Contract-specific error types
//! - `events`: Contract events for every state transition
//! - `security`: Shared security primitives (reentrancy guard, owner gate, pause)
//! - `token`: External token capability (transfer/balance interface)
//! - `oracle`: External price-feed capability
//! - `registry`: Ordered token whitelist with index-based removal
//! - `vault`: Custody ledger — balances, condition-locked deposits, admin surface
//! - `condition`: Condition evaluation against the current oracle reading
//! - `withdrawal`: Exactly-once release of condition-locked deposits
//!
//! # Version
//! v0.1.0 — Initial implementation

pub mod condition;
pub mod errors;
pub mod events;
pub mod oracle;
pub mod registry;
pub mod security;
pub mod token;
pub mod vault;
pub mod withdrawal;

/// Contract ABI version — frozen after release
pub const CONTRACT_ABI_VERSION: &str = "1.0.0";
