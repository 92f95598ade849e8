use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CategoryRepository, Error, Result, TransactionRepository};
use crate::domain::{category::Category, transaction::Transaction};

/// Process-local store. Category titles are unique.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    categories: RwLock<Vec<Category>>,
    transactions: RwLock<Vec<Transaction>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: RwLock::new(categories.into_iter().collect()),
            ..Self::default()
        }
    }

    pub async fn categories(&self) -> Vec<Category> {
        self.categories.read().await.clone()
    }

    pub async fn transactions(&self) -> Vec<Transaction> {
        self.transactions.read().await.clone()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn find_by_titles(&self, titles: &HashSet<String>) -> Result<Vec<Category>> {
        let categories = self.categories.read().await;

        Ok(categories
            .iter()
            .filter(|category| titles.contains(&category.title))
            .cloned()
            .collect())
    }

    async fn save(&self, categories: &[Category]) -> Result<()> {
        let mut stored = self.categories.write().await;
        let mut titles: HashSet<_> = stored.iter().map(|c| c.title.as_str()).collect();

        // All or nothing: validate the whole batch before writing.
        for category in categories {
            if !titles.insert(category.title.as_str()) {
                return Err(Error::DuplicateCategory {
                    title: category.title.clone(),
                });
            }
        }

        stored.extend_from_slice(categories);
        Ok(())
    }
}

#[async_trait]
impl TransactionRepository for InMemoryStore {
    async fn save(&self, transactions: &[Transaction]) -> Result<()> {
        self.transactions
            .write()
            .await
            .extend_from_slice(transactions);
        Ok(())
    }
}
