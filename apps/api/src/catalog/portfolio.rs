//! Portfolio Filter — single category selector with the `"all"` sentinel.

use crate::catalog::jobs::ALL;
use crate::models::catalog::PortfolioItem;

/// Returns every item for `"all"` (or an empty selector), otherwise the
/// stable-order subset whose category equals `category` exactly.
pub fn filter_portfolio(items: &[PortfolioItem], category: &str) -> Vec<PortfolioItem> {
    if category.is_empty() || category == ALL {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.category.as_str() == category)
        .cloned()
        .collect()
}
