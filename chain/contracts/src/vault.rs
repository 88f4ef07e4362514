//! Vault — token custody, balance tracking, condition-locked deposits
//!
//! The custody ledger:
//! - Owner-gated token whitelist (add with validity probe, indexed removal)
//! - Plain deposit/withdraw flow with per-(account, token) balances
//! - Per-account append-only sequences of condition-locked deposits
//! - External transfers ordered strictly before any state commit
//! - Pause modifier, owner gate, reentrancy guard
//!
//! The vault exclusively owns all balance and deposit state; token
//! contracts and the oracle are external capabilities invoked through the
//! `token` and `oracle` traits.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use types::condition::ConditionOperator;
use types::ids::{AccountId, FeedId, TokenAddress};

use crate::errors::VaultError;
use crate::events::{
    ConditionLockedDepositCreated, ContractEvent, DepositReceived, TokenRemovedFromWhitelist,
    TokenWhitelisted, WithdrawalPaid,
};
use crate::registry::TokenRegistry;
use crate::security::{Ownable, PauseGuard, ReentrancyGuard};
use crate::token::TokenGateway;

/// A deposit locked behind a price condition.
///
/// Entries are append-only per account: the index assigned at creation is a
/// stable handle, never reused, and entries are never physically deleted.
/// `consumed` is the only mutable field and makes a single false→true
/// transition when the deposit is withdrawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionLockedDeposit {
    pub token: TokenAddress,
    pub feed: FeedId,
    pub threshold: Decimal,
    pub operator: ConditionOperator,
    pub amount: Decimal,
    pub consumed: bool,
}

/// Core vault managing custody and the condition-locked deposit ledger.
///
/// Balances are stored as `HashMap<AccountId, HashMap<TokenAddress, Decimal>>`.
/// Condition-locked deposits are per-account `Vec`s whose positions are the
/// public deposit indices.
///
/// All state-changing operations check:
/// 1. Pause state
/// 2. Reentrancy guard
/// 3. Owner gate (admin surface) or token whitelist (deposit surface)
///
/// and commit ledger mutations only after the external transfer succeeds.
#[derive(Debug)]
pub struct Vault {
    /// Ordered token whitelist
    registry: TokenRegistry,
    /// Single privileged identity; authorizes whitelist mutation and pause
    ownable: Ownable,
    /// The vault's own custody account — transfer-ins land here
    vault_account: AccountId,
    /// Plain balances: account -> (token -> amount)
    balances: HashMap<AccountId, HashMap<TokenAddress, Decimal>>,
    /// Per-account append-only condition-locked deposit sequences
    locked_deposits: HashMap<AccountId, Vec<ConditionLockedDeposit>>,
    /// Security: reentrancy guard
    reentrancy_guard: ReentrancyGuard,
    /// Security: pause guard
    pause_guard: PauseGuard,
    /// Emitted events log (append-only)
    events: Vec<ContractEvent>,
}

impl Vault {
    /// Create a new vault with an owner identity.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            registry: TokenRegistry::new(),
            ownable: Ownable::new(owner),
            vault_account: AccountId::new(),
            balances: HashMap::new(),
            locked_deposits: HashMap::new(),
            reentrancy_guard: ReentrancyGuard::new(),
            pause_guard: PauseGuard::new(),
            events: Vec::new(),
        }
    }

    /// The vault's own custody account.
    pub fn vault_account(&self) -> &AccountId {
        &self.vault_account
    }

    // ───────────────────────── Token Whitelist ─────────────────────────

    /// Add a token to the whitelist. Owner-only.
    ///
    /// The argument must behave as a token: its balance read is probed with
    /// the vault's own account, and an unresponsive identifier fails with
    /// `InvalidToken`. Duplicate entries are allowed.
    pub fn whitelist_token<T: TokenGateway>(
        &mut self,
        caller: &str,
        token: TokenAddress,
        tokens: &T,
    ) -> Result<(), VaultError> {
        if !self.ownable.is_owner(caller) {
            return Err(VaultError::Unauthorized);
        }
        if tokens.balance_of(&token, &self.vault_account).is_none() {
            return Err(VaultError::InvalidToken {
                token: token.to_string(),
            });
        }
        self.registry.add(token.clone());
        self.events
            .push(ContractEvent::TokenWhitelisted(TokenWhitelisted { token }));
        Ok(())
    }

    /// Remove the whitelist entry at `index`. Owner-only.
    ///
    /// Subsequent entries shift left by one; their relative order is
    /// preserved.
    pub fn remove_from_whitelist(&mut self, caller: &str, index: usize) -> Result<(), VaultError> {
        if !self.ownable.is_owner(caller) {
            return Err(VaultError::Unauthorized);
        }
        let token = self.registry.remove(index)?;
        self.events.push(ContractEvent::TokenRemovedFromWhitelist(
            TokenRemovedFromWhitelist { token, index },
        ));
        Ok(())
    }

    /// Check if a token is whitelisted.
    pub fn is_whitelisted(&self, token: &TokenAddress) -> bool {
        self.registry.contains(token)
    }

    /// Whitelist entry at `index`.
    pub fn whitelisted_token(&self, index: usize) -> Result<&TokenAddress, VaultError> {
        Ok(self.registry.token_at(index)?)
    }

    /// The whitelist sequence in order.
    pub fn whitelist(&self) -> &[TokenAddress] {
        self.registry.tokens()
    }

    // ───────────────────────── Plain Deposits ─────────────────────────

    /// Deposit `amount` of a whitelisted token into the vault.
    ///
    /// Pulls the amount from the caller via the token's transfer. The
    /// credit is ordered strictly after the transfer succeeds: a `false`
    /// return or call failure leaves the ledger untouched.
    pub fn deposit<T: TokenGateway>(
        &mut self,
        account_id: AccountId,
        token: &TokenAddress,
        amount: Decimal,
        tokens: &mut T,
    ) -> Result<ContractEvent, VaultError> {
        self.check_not_paused()?;
        self.check_reentrancy()?;

        if !self.registry.contains(token) {
            self.reentrancy_guard.release();
            return Err(VaultError::TokenNotWhitelisted {
                token: token.to_string(),
            });
        }

        if amount <= Decimal::ZERO {
            self.reentrancy_guard.release();
            return Err(VaultError::InvalidAmount);
        }

        // Overflow is checked before the external call so a failure here
        // can never strand funds already pulled in.
        let new_balance = match self.balance(&account_id, token).checked_add(amount) {
            Some(balance) => balance,
            None => {
                self.reentrancy_guard.release();
                return Err(VaultError::Overflow);
            }
        };

        if !tokens.transfer_from(token, &account_id, &self.vault_account, amount) {
            self.reentrancy_guard.release();
            return Err(VaultError::TransferFailed {
                token: token.to_string(),
            });
        }

        self.balances
            .entry(account_id)
            .or_default()
            .insert(token.clone(), new_balance);

        let event = ContractEvent::DepositReceived(DepositReceived {
            account_id,
            token: token.clone(),
            amount,
        });
        self.events.push(event.clone());
        self.reentrancy_guard.release();
        Ok(event)
    }

    /// Withdraw `amount` of a plain balance back to the caller.
    ///
    /// The debit commits only after the transfer out is confirmed; a failed
    /// transfer leaves the balance untouched.
    pub fn withdraw<T: TokenGateway>(
        &mut self,
        account_id: AccountId,
        token: &TokenAddress,
        amount: Decimal,
        tokens: &mut T,
    ) -> Result<ContractEvent, VaultError> {
        self.check_not_paused()?;
        self.check_reentrancy()?;

        if amount <= Decimal::ZERO {
            self.reentrancy_guard.release();
            return Err(VaultError::InvalidAmount);
        }

        let available = self.balance(&account_id, token);
        if available < amount {
            self.reentrancy_guard.release();
            return Err(VaultError::InsufficientBalance {
                token: token.to_string(),
                required: amount.to_string(),
                available: available.to_string(),
            });
        }

        if !tokens.transfer(token, &account_id, amount) {
            self.reentrancy_guard.release();
            return Err(VaultError::TransferFailed {
                token: token.to_string(),
            });
        }

        // available >= amount was checked above and nothing can interleave
        // while the guard is held
        let new_balance = available - amount;
        self.balances
            .entry(account_id)
            .or_default()
            .insert(token.clone(), new_balance);

        let event = ContractEvent::WithdrawalPaid(WithdrawalPaid {
            account_id,
            token: token.clone(),
            amount,
        });
        self.events.push(event.clone());
        self.reentrancy_guard.release();
        Ok(event)
    }

    // ───────────────────────── Balance Queries ─────────────────────────

    /// Get balance for a specific account and token.
    pub fn balance(&self, account_id: &AccountId, token: &TokenAddress) -> Decimal {
        self.balances
            .get(account_id)
            .and_then(|tokens| tokens.get(token))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Get all balances for an account.
    pub fn account_balances(
        &self,
        account_id: &AccountId,
    ) -> Option<&HashMap<TokenAddress, Decimal>> {
        self.balances.get(account_id)
    }

    // ───────────────────── Condition-Locked Deposits ─────────────────────

    /// Create a condition-locked deposit for the caller.
    ///
    /// Pulls `amount` from the caller via the token's transfer and, only
    /// after it succeeds, appends a new entry to the caller's sequence.
    /// Returns the assigned index — equal to the caller's prior sequence
    /// length, stable and never reused.
    pub fn create_condition_locked_deposit<T: TokenGateway>(
        &mut self,
        account_id: AccountId,
        token: &TokenAddress,
        feed: FeedId,
        threshold: Decimal,
        operator: ConditionOperator,
        amount: Decimal,
        tokens: &mut T,
    ) -> Result<usize, VaultError> {
        self.check_not_paused()?;
        self.check_reentrancy()?;

        if !self.registry.contains(token) {
            self.reentrancy_guard.release();
            return Err(VaultError::TokenNotWhitelisted {
                token: token.to_string(),
            });
        }

        if amount <= Decimal::ZERO {
            self.reentrancy_guard.release();
            return Err(VaultError::InvalidAmount);
        }

        if !tokens.transfer_from(token, &account_id, &self.vault_account, amount) {
            self.reentrancy_guard.release();
            return Err(VaultError::TransferFailed {
                token: token.to_string(),
            });
        }

        let sequence = self.locked_deposits.entry(account_id).or_default();
        let index = sequence.len();
        sequence.push(ConditionLockedDeposit {
            token: token.clone(),
            feed: feed.clone(),
            threshold,
            operator,
            amount,
            consumed: false,
        });

        self.events.push(ContractEvent::ConditionLockedDepositCreated(
            ConditionLockedDepositCreated {
                account_id,
                token: token.clone(),
                feed,
                threshold,
                operator,
                amount,
                index,
            },
        ));
        self.reentrancy_guard.release();
        Ok(index)
    }

    /// Get the condition-locked deposit at `index` for an account.
    pub fn condition_locked_deposit(
        &self,
        account_id: &AccountId,
        index: usize,
    ) -> Result<&ConditionLockedDeposit, VaultError> {
        self.locked_deposits
            .get(account_id)
            .and_then(|sequence| sequence.get(index))
            .ok_or(VaultError::IndexOutOfRange { index })
    }

    /// Number of condition-locked deposits an account has created.
    pub fn condition_locked_deposit_count(&self, account_id: &AccountId) -> usize {
        self.locked_deposits
            .get(account_id)
            .map_or(0, |sequence| sequence.len())
    }

    /// Flip the consumed flag on a deposit. Called by the withdrawal
    /// module only after the transfer out is confirmed.
    pub(crate) fn mark_consumed(
        &mut self,
        account_id: &AccountId,
        index: usize,
    ) -> Result<(), VaultError> {
        let deposit = self
            .locked_deposits
            .get_mut(account_id)
            .and_then(|sequence| sequence.get_mut(index))
            .ok_or(VaultError::IndexOutOfRange { index })?;
        deposit.consumed = true;
        Ok(())
    }

    // ───────────────────────── Pause ─────────────────────────

    /// Pause the vault. Owner-only.
    pub fn pause(&mut self, caller: &str) -> Result<(), VaultError> {
        if !self.ownable.is_owner(caller) {
            return Err(VaultError::Unauthorized);
        }
        self.pause_guard.pause();
        Ok(())
    }

    /// Unpause the vault. Owner-only.
    pub fn unpause(&mut self, caller: &str) -> Result<(), VaultError> {
        if !self.ownable.is_owner(caller) {
            return Err(VaultError::Unauthorized);
        }
        self.pause_guard.unpause();
        Ok(())
    }

    /// Check if the vault is paused.
    pub fn is_paused(&self) -> bool {
        self.pause_guard.is_paused()
    }

    // ───────────────────────── Ownership ─────────────────────────

    /// Transfer ownership to a new identity.
    pub fn transfer_ownership(&mut self, caller: &str, new_owner: &str) -> Result<(), VaultError> {
        if !self.ownable.transfer(caller, new_owner) {
            return Err(VaultError::Unauthorized);
        }
        Ok(())
    }

    /// Get the current owner.
    pub fn owner(&self) -> &str {
        self.ownable.owner()
    }

    // ───────────────────────── Events ─────────────────────────

    /// Get all emitted events.
    pub fn events(&self) -> &[ContractEvent] {
        &self.events
    }

    /// Drain all events (consume and clear).
    pub fn drain_events(&mut self) -> Vec<ContractEvent> {
        std::mem::take(&mut self.events)
    }

    /// Append an event (for the withdrawal module).
    pub(crate) fn record_event(&mut self, event: ContractEvent) {
        self.events.push(event);
    }

    // ───────────────────────── Internal Guards ─────────────────────────

    /// Acquire the reentrancy guard (for the withdrawal module).
    pub(crate) fn acquire_guard(&mut self) -> bool {
        self.reentrancy_guard.acquire()
    }

    /// Release the reentrancy guard (for the withdrawal module).
    pub(crate) fn release_guard(&mut self) {
        self.reentrancy_guard.release()
    }

    fn check_not_paused(&self) -> Result<(), VaultError> {
        if self.pause_guard.is_paused() {
            return Err(VaultError::Paused);
        }
        Ok(())
    }

    fn check_reentrancy(&mut self) -> Result<(), VaultError> {
        if !self.reentrancy_guard.acquire() {
            return Err(VaultError::Reentrancy);
        }
        Ok(())
    }
}
