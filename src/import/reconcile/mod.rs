use std::collections::HashSet;

use itertools::Itertools;

use crate::{
    domain::category::CategoryMap,
    store::{CategoryRepository, Result},
};

/// Resolves every name in `names` to a single category, creating the ones the
/// store does not know yet.
///
/// Duplicated names collapse to one category; the first occurrence decides
/// creation order. Empty names are regular titles.
pub async fn reconcile(
    categories: &dyn CategoryRepository,
    names: &[String],
) -> Result<CategoryMap> {
    if names.is_empty() {
        return Ok(CategoryMap::new());
    }

    let wanted: HashSet<String> = names.iter().cloned().collect();
    let mut resolved: CategoryMap = categories
        .find_by_titles(&wanted)
        .await?
        .into_iter()
        .map(|category| (category.title.clone(), category))
        .collect();

    let missing: Vec<String> = names
        .iter()
        .filter(|name| !resolved.contains_key(*name))
        .unique()
        .cloned()
        .collect();

    tracing::info!(
        existing = resolved.len(),
        missing = missing.len(),
        "reconciled categories"
    );

    if missing.is_empty() {
        return Ok(resolved);
    }

    let created = categories.create(missing);
    categories.save(&created).await?;

    resolved.extend(
        created
            .into_iter()
            .map(|category| (category.title.clone(), category)),
    );
    Ok(resolved)
}
