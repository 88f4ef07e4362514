//! Condition evaluation — the pure decision gating conditional release
//!
//! Loads a condition-locked deposit, reads the current price for its feed,
//! and compares with the stored operator. No side effects: the consumed
//! flag is never touched here, and a consumed entry evaluates the same as
//! a live one.

use types::ids::AccountId;

use crate::errors::ConditionError;
use crate::oracle::PriceOracle;
use crate::vault::Vault;

/// Evaluate the release condition of the deposit at `index`.
///
/// Propagates oracle failure unchanged — without a current reading the
/// condition cannot be evaluated and the calling operation fails.
pub fn condition_satisfied<O: PriceOracle>(
    vault: &Vault,
    oracle: &O,
    account_id: &AccountId,
    index: usize,
) -> Result<bool, ConditionError> {
    let deposit = vault
        .condition_locked_deposit(account_id, index)
        .map_err(|_| ConditionError::IndexOutOfRange { index })?;
    let observed = oracle.current_price(&deposit.feed)?;
    Ok(deposit.operator.compare(observed, deposit.threshold))
}
