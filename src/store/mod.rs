use std::collections::HashSet;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    category::Category,
    transaction::{NewTransaction, Transaction},
};

pub mod memory;

#[derive(Debug, Error)]
pub enum Error {
    #[error("category {title:?} already exists")]
    DuplicateCategory { title: String },
    #[error("storage backend failed: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every stored category whose title is in `titles`, in one lookup.
    async fn find_by_titles(&self, titles: &HashSet<String>) -> Result<Vec<Category>>;

    fn create(&self, titles: Vec<String>) -> Vec<Category> {
        titles.into_iter().map(Category::new).collect()
    }

    async fn save(&self, categories: &[Category]) -> Result<()>;
}

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    fn create(&self, transactions: Vec<NewTransaction>) -> Vec<Transaction> {
        transactions.into_iter().map(Transaction::from).collect()
    }

    async fn save(&self, transactions: &[Transaction]) -> Result<()>;
}
