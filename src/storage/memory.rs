//! In-memory repository, used by tests and embedders that persist elsewhere

use std::sync::{Mutex, MutexGuard};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Ledger;

use super::LedgerRepository;

#[derive(Debug, Default)]
pub struct MemoryLedgerRepository {
    ledger: Mutex<Ledger>,
}

impl MemoryLedgerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: Mutex::new(ledger),
        }
    }

    fn lock(&self) -> TrackerResult<MutexGuard<'_, Ledger>> {
        self.ledger
            .lock()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire lock: {}", e)))
    }
}

impl LedgerRepository for MemoryLedgerRepository {
    fn load(&self) -> TrackerResult<Ledger> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, ledger: &Ledger) -> TrackerResult<()> {
        *self.lock()? = ledger.clone();
        Ok(())
    }

    fn update(&self, apply: &mut dyn FnMut(&mut Ledger) -> TrackerResult<()>) -> TrackerResult<()> {
        let mut stored = self.lock()?;
        let mut working = stored.clone();
        apply(&mut working)?;
        *stored = working;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_is_all_or_nothing() {
        let repo = MemoryLedgerRepository::new();

        repo.update(&mut |ledger| {
            ledger.ensure_account("Bank")?;
            Ok(())
        })
        .unwrap();

        let result = repo.update(&mut |ledger| {
            ledger.ensure_account("Card")?;
            Err(TrackerError::validation("rejected"))
        });

        assert!(result.is_err());
        let ledger = repo.load().unwrap();
        assert!(ledger.get_account("Bank").is_some());
        assert!(ledger.get_account("Card").is_none());
    }
}
