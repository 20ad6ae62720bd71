//! Import CLI command

use std::path::Path;

use crate::error::{TrackerError, TrackerResult};
use crate::services::TransactionService;
use crate::storage::LedgerRepository;

/// Handle `import <file>`
pub fn handle_import_command(repo: &dyn LedgerRepository, file: &Path) -> TrackerResult<()> {
    if !file.exists() {
        return Err(TrackerError::Import(format!(
            "File not found: {}",
            file.display()
        )));
    }

    let added = TransactionService::new(repo).import_file(file)?;
    if added == 0 {
        println!("No new transactions in {}", file.display());
    } else {
        println!("Imported {} transaction(s) from {}", added, file.display());
    }
    Ok(())
}
