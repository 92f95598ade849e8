use std::{path::Path, sync::Arc};

use crate::{
    csv,
    domain::transaction::Transaction,
    error::{Error, Result},
    store::{CategoryRepository, TransactionRepository},
};

mod materialize;
mod reconcile;

pub use materialize::materialize;
pub use reconcile::reconcile;

pub struct Importer {
    categories: Arc<dyn CategoryRepository>,
    transactions: Arc<dyn TransactionRepository>,
}

impl Importer {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        transactions: Arc<dyn TransactionRepository>,
    ) -> Self {
        Self {
            categories,
            transactions,
        }
    }

    /// Imports the file at `path` and returns the saved transactions in file
    /// order.
    ///
    /// The file is deleted only once everything was saved. Any earlier error
    /// leaves it in place, along with any categories already saved for it.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn execute(&self, path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
        let path = path.as_ref();

        let file = tokio::fs::File::open(path).await?.into_std().await;
        let records = csv::read(file).drain().await?;
        tracing::info!(records = records.len(), "parsed transactions file");

        let names: Vec<String> = records.iter().map(|r| r.category.clone()).collect();
        let categories = reconcile(self.categories.as_ref(), &names).await?;

        let transactions = self
            .transactions
            .create(materialize(records, &categories));
        self.transactions.save(&transactions).await?;
        tracing::info!(transactions = transactions.len(), "saved transactions");

        tokio::fs::remove_file(path)
            .await
            .map_err(|source| Error::ReleaseError {
                path: path.to_owned(),
                source,
            })?;

        Ok(transactions)
    }
}
