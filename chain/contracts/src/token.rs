//! External token capability
//!
//! The vault never owns token contracts; it consumes them through this
//! trait. Implementations front the actual token contracts of the host
//! platform. The vault treats a `false` return and a call failure as the
//! same signal: the transfer did not happen.

use rust_decimal::Decimal;
use types::ids::{AccountId, TokenAddress};

/// Transfer/balance interface of an external fungible token.
pub trait TokenGateway {
    /// Pull `amount` of `token` from `from` into `to`'s custody.
    fn transfer_from(
        &mut self,
        token: &TokenAddress,
        from: &AccountId,
        to: &AccountId,
        amount: Decimal,
    ) -> bool;

    /// Push `amount` of `token` out of the vault's own holdings to `to`.
    fn transfer(&mut self, token: &TokenAddress, to: &AccountId, amount: Decimal) -> bool;

    /// Current balance of `account` for `token`.
    ///
    /// Returns `None` when the identifier does not respond to the balance
    /// query — i.e. it does not behave as a token at all. The whitelist
    /// probe relies on this distinction.
    fn balance_of(&self, token: &TokenAddress, account: &AccountId) -> Option<Decimal>;
}
