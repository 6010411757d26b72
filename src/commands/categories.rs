use crate::commands::Out;
use crate::model::SUGGESTED_CATEGORIES;
use crate::{Config, Result};

/// Shows the suggested categories. The list is fixed and does not depend on recorded expenses.
pub fn categories(config: &Config) -> Result<Out<Vec<String>>> {
    config.store().ensure_exists()?;
    let mut lines = vec!["Available categories:".to_string()];
    lines.extend(SUGGESTED_CATEGORIES.iter().map(|c| format!(" - {c}")));
    let names = SUGGESTED_CATEGORIES.iter().map(|c| c.to_string()).collect();
    Ok(Out::new(lines.join("\n"), names))
}
