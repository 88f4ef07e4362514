//! Shared security primitives for contract modules
//!
//! Provides the reentrancy guard, the single-owner gate, and the pause
//! latch used by the vault and withdrawal modules.

/// Reentrancy guard preventing nested calls into protected functions.
///
/// Every operation that performs an external call (token transfer) while
/// holding ledger state acquires the guard first and releases it on every
/// exit path. Any nested call attempt fails. On a serialized host this is
/// the only exclusion discipline needed; a multi-threaded host wraps the
/// vault in its own mutual exclusion on top.
#[derive(Debug, Clone)]
pub struct ReentrancyGuard {
    locked: bool,
}

impl ReentrancyGuard {
    /// Create a new unlocked guard.
    pub fn new() -> Self {
        Self { locked: false }
    }

    /// Acquire the guard. Returns `true` if successfully acquired.
    /// Returns `false` if already locked (reentrancy attempt).
    pub fn acquire(&mut self) -> bool {
        if self.locked {
            return false;
        }
        self.locked = true;
        true
    }

    /// Release the guard.
    pub fn release(&mut self) {
        self.locked = false;
    }

    /// Check if currently locked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl Default for ReentrancyGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-owner gate.
///
/// The owner identity is set once at construction and authorizes the
/// administrative surface (whitelist mutation, pause, ownership transfer).
#[derive(Debug, Clone)]
pub struct Ownable {
    owner: String,
}

impl Ownable {
    /// Create with an initial owner.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
        }
    }

    /// Check if a caller is the owner.
    pub fn is_owner(&self, caller: &str) -> bool {
        self.owner == caller
    }

    /// Transfer ownership to a new identity. Only the current owner can
    /// transfer; returns `false` otherwise.
    pub fn transfer(&mut self, current_owner: &str, new_owner: impl Into<String>) -> bool {
        if !self.is_owner(current_owner) {
            return false;
        }
        self.owner = new_owner.into();
        true
    }

    /// Get the current owner identifier.
    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// Composable pause modifier.
///
/// When paused, state-changing operations must be rejected.
#[derive(Debug, Clone)]
pub struct PauseGuard {
    paused: bool,
}

impl PauseGuard {
    /// Create a new unpaused guard.
    pub fn new() -> Self {
        Self { paused: false }
    }

    /// Pause operations.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Unpause operations.
    pub fn unpause(&mut self) {
        self.paused = false;
    }

    /// Check if currently paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl Default for PauseGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- ReentrancyGuard tests ---

    #[test]
    fn test_reentrancy_guard_acquire_release() {
        let mut guard = ReentrancyGuard::new();
        assert!(!guard.is_locked());
        assert!(guard.acquire());
        assert!(guard.is_locked());
        guard.release();
        assert!(!guard.is_locked());
    }

    #[test]
    fn test_reentrancy_guard_double_acquire_fails() {
        let mut guard = ReentrancyGuard::new();
        assert!(guard.acquire());
        assert!(!guard.acquire(), "Second acquire must fail");
    }

    #[test]
    fn test_reentrancy_guard_reacquire_after_release() {
        let mut guard = ReentrancyGuard::new();
        assert!(guard.acquire());
        guard.release();
        assert!(guard.acquire(), "Should succeed after release");
    }

    // --- Ownable tests ---

    #[test]
    fn test_ownable_owner() {
        let ownable = Ownable::new("alice");
        assert!(ownable.is_owner("alice"));
        assert!(!ownable.is_owner("bob"));
    }

    #[test]
    fn test_ownable_transfer() {
        let mut ownable = Ownable::new("alice");
        assert!(ownable.transfer("alice", "bob"));
        assert!(ownable.is_owner("bob"));
        assert!(!ownable.is_owner("alice"));
        assert_eq!(ownable.owner(), "bob");
    }

    #[test]
    fn test_ownable_transfer_by_non_owner_rejected() {
        let mut ownable = Ownable::new("alice");
        assert!(!ownable.transfer("eve", "eve"));
        assert_eq!(ownable.owner(), "alice");
    }

    // --- PauseGuard tests ---

    #[test]
    fn test_pause_guard() {
        let mut pg = PauseGuard::new();
        assert!(!pg.is_paused());
        pg.pause();
        assert!(pg.is_paused());
        pg.unpause();
        assert!(!pg.is_paused());
    }
}
