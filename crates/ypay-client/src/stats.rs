//! Per-category counts and category filtering over fetched records.

use std::collections::HashMap;

use crate::types::MerchantRecord;

/// Selection value meaning "every category".
pub const ALL_CATEGORIES: &str = "전체";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Counts records per category, most frequent first; ties are ordered by
/// category name. Records with no category are counted under
/// [`crate::types::UNCATEGORIZED`].
#[must_use]
pub fn category_counts(records: &[MerchantRecord]) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.category_label()).or_default() += 1;
    }

    let mut out: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    out
}

/// Keeps records whose category label is in `selected`. An empty selection,
/// or one that includes [`ALL_CATEGORIES`], keeps everything.
#[must_use]
pub fn filter_by_categories<'a>(
    records: &'a [MerchantRecord],
    selected: &[String],
) -> Vec<&'a MerchantRecord> {
    if selected.is_empty() || selected.iter().any(|s| s == ALL_CATEGORIES) {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|r| selected.iter().any(|s| s == r.category_label()))
        .collect()
}
