use crate::domain::{
    category::CategoryMap,
    transaction::{NewTransaction, RawRecord},
};

/// Binds each record to its reconciled category, keeping record order.
///
/// A record whose category is missing from `categories` is kept with no
/// category reference.
pub fn materialize(records: Vec<RawRecord>, categories: &CategoryMap) -> Vec<NewTransaction> {
    records
        .into_iter()
        .map(|record| {
            let category = categories.get(&record.category).cloned();
            if category.is_none() {
                tracing::warn!(
                    title = %record.title,
                    category = %record.category,
                    "transaction has no resolved category"
                );
            }

            NewTransaction {
                title: record.title,
                kind: record.kind,
                value: record.value,
                category,
            }
        })
        .collect()
}
