//! JSON import/export
//!
//! The export format is the budget itself, pretty-printed with two-space
//! indentation. Imports accept the same shape and are validated
//! structurally before anything is decoded, so a malformed file is
//! rejected with a message naming the offending field.

use std::io::Write;

use serde_json::Value;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Budget;

/// Write the full budget as pretty-printed JSON
pub fn export_budget_json<W: Write>(budget: &Budget, writer: &mut W) -> BudgetResult<()> {
    serde_json::to_writer_pretty(&mut *writer, budget)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

/// Check the top-level shape of an import payload
///
/// `transactions` must be a list and `categories` an object holding
/// `income` and `expense` lists.
pub fn validate_structure(value: &Value) -> Result<(), String> {
    let root = value
        .as_object()
        .ok_or_else(|| "top level must be an object".to_string())?;

    match root.get("transactions") {
        Some(Value::Array(_)) => {}
        Some(_) => return Err("`transactions` must be a list".into()),
        None => return Err("missing `transactions`".into()),
    }

    let categories = match root.get("categories") {
        Some(Value::Object(map)) => map,
        Some(_) => return Err("`categories` must be an object".into()),
        None => return Err("missing `categories`".into()),
    };

    for kind in ["income", "expense"] {
        match categories.get(kind) {
            Some(Value::Array(_)) => {}
            Some(_) => return Err(format!("`categories.{}` must be a list", kind)),
            None => return Err(format!("missing `categories.{}`", kind)),
        }
    }

    Ok(())
}

/// Parse and validate an import payload
pub fn import_budget_json(json_str: &str) -> BudgetResult<Budget> {
    let value: Value = serde_json::from_str(json_str)
        .map_err(|e| BudgetError::Import(format!("not valid JSON: {}", e)))?;

    validate_structure(&value).map_err(BudgetError::Import)?;

    serde_json::from_value(value)
        .map_err(|e| BudgetError::Import(format!("invalid transaction data: {}", e)))
}
