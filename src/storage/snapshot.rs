//! Budget snapshot encoding on top of the persistence gateway

use crate::error::{BudgetError, BudgetResult};
use crate::models::Budget;

use super::gateway::KeyValueStore;

/// Key under which the current budget snapshot is stored
pub const BUDGET_KEY: &str = "budget_data";

/// Read the persisted budget
///
/// `Ok(None)` means nothing has been saved yet. Undecodable bytes are a
/// `Json` error so callers can tell "absent" from "corrupt" when logging.
pub fn read_budget(store: &dyn KeyValueStore) -> BudgetResult<Option<Budget>> {
    let Some(bytes) = store.get(BUDGET_KEY)? else {
        return Ok(None);
    };

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| BudgetError::Json(format!("Corrupt budget snapshot: {}", e)))
}

/// Overwrite the persisted budget
pub fn write_budget(store: &mut dyn KeyValueStore, budget: &Budget) -> BudgetResult<()> {
    let bytes = serde_json::to_vec(budget)?;
    store.set(BUDGET_KEY, &bytes)
}
