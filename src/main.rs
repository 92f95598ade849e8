use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use txns_import::{csv, store::memory::InMemoryStore, Error, Importer, Result};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args().nth(1).ok_or(Error::MissingPathError)?;

    let store = Arc::new(InMemoryStore::new());
    let transactions = Importer::new(store.clone(), store).execute(path).await?;

    csv::write(&transactions, std::io::stdout().lock())?;
    Ok(())
}
