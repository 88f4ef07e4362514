//! Conditional withdrawal — the locked → withdrawn transition
//!
//! Drives the single state transition a condition-locked deposit can make:
//! condition check, transfer out, consumed flip. The flip commits only
//! after the transfer is confirmed, so a failed transfer leaves the
//! deposit withdrawable again and a consumed entry can never pay twice.

use types::ids::AccountId;

use crate::condition;
use crate::errors::WithdrawalError;
use crate::events::{ConditionLockedDepositWithdrawn, ContractEvent};
use crate::oracle::PriceOracle;
use crate::token::TokenGateway;
use crate::vault::Vault;

/// Withdraw the caller's condition-locked deposit at `index`.
///
/// All-or-nothing and single-shot per index: there is no partial
/// withdrawal. The consumed check runs before any oracle read, so a
/// consumed entry fails with `AlreadyConsumed` regardless of condition
/// state.
pub fn withdraw_condition_locked_deposit<T: TokenGateway, O: PriceOracle>(
    vault: &mut Vault,
    tokens: &mut T,
    oracle: &O,
    caller: AccountId,
    index: usize,
) -> Result<ContractEvent, WithdrawalError> {
    if vault.is_paused() {
        return Err(WithdrawalError::Paused);
    }
    if !vault.acquire_guard() {
        return Err(WithdrawalError::Reentrancy);
    }

    let (token, amount) = match vault.condition_locked_deposit(&caller, index) {
        Ok(deposit) if deposit.consumed => {
            vault.release_guard();
            return Err(WithdrawalError::AlreadyConsumed { index });
        }
        Ok(deposit) => (deposit.token.clone(), deposit.amount),
        Err(_) => {
            vault.release_guard();
            return Err(WithdrawalError::IndexOutOfRange { index });
        }
    };

    let satisfied = match condition::condition_satisfied(vault, oracle, &caller, index) {
        Ok(satisfied) => satisfied,
        Err(err) => {
            vault.release_guard();
            return Err(err.into());
        }
    };
    if !satisfied {
        vault.release_guard();
        return Err(WithdrawalError::ConditionNotMet { index });
    }

    // Transfer out first; the consumed flip commits only on success so a
    // failed transfer leaves the deposit retryable.
    if !tokens.transfer(&token, &caller, amount) {
        vault.release_guard();
        return Err(WithdrawalError::TransferFailed {
            token: token.to_string(),
        });
    }

    if let Err(err) = vault.mark_consumed(&caller, index) {
        vault.release_guard();
        return Err(err.into());
    }

    let event = ContractEvent::ConditionLockedDepositWithdrawn(ConditionLockedDepositWithdrawn {
        account_id: caller,
        token,
        amount,
        index,
    });
    vault.record_event(event.clone());
    vault.release_guard();
    Ok(event)
}
