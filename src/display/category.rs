//! Category taxonomy display formatting

use crate::models::{CategoryTaxonomy, TransactionKind};

/// Format the taxonomy as a tree, one branch per transaction kind
pub fn format_category_tree(taxonomy: &CategoryTaxonomy) -> String {
    let mut output = String::new();

    for (i, (title, kind)) in [("Income", TransactionKind::Income), ("Expense", TransactionKind::Expense)]
        .into_iter()
        .enumerate()
    {
        output.push_str(&format!("{}\n", title));

        let names = taxonomy.for_kind(kind);
        if names.is_empty() {
            output.push_str("  (no categories)\n");
        } else {
            for (j, name) in names.iter().enumerate() {
                let prefix = if j == names.len() - 1 { "└── " } else { "├── " };
                output.push_str(&format!("  {}{}\n", prefix, name));
            }
        }

        if i == 0 {
            output.push('\n');
        }
    }

    output
}
