use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::{
    category::Category,
    error::{Error, Result},
};

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Outcome,
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "income" => Ok(Self::Income),
            "outcome" => Ok(Self::Outcome),
            other => Err(Error::UnknownTransactionType(other.to_owned())),
        }
    }
}

/// One parsed row of an import file. Never persisted directly.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RawRecord {
    pub title: String,
    pub kind: TransactionType,
    pub value: Decimal,
    /// May be empty: an empty category is still a category title.
    pub category: String,
}

impl RawRecord {
    /// Builds a record from already trimmed, non-empty `title`, `kind` and
    /// `value` fields.
    pub fn parse(title: &str, kind: &str, value: &str, category: &str) -> Result<Self> {
        let kind = kind.parse()?;
        let value = Decimal::from_str(value).map_err(|source| Error::InvalidValue {
            value: value.to_owned(),
            source,
        })?;

        Ok(Self {
            title: title.to_owned(),
            kind,
            value,
            category: category.to_owned(),
        })
    }
}

/// A transaction bound to its category but not yet saved.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NewTransaction {
    pub title: String,
    pub kind: TransactionType,
    pub value: Decimal,
    pub category: Option<Category>,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Transaction {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub value: Decimal,
    #[serde(rename = "category")]
    pub category_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<NewTransaction> for Transaction {
    fn from(tx: NewTransaction) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: tx.title,
            kind: tx.kind,
            value: tx.value,
            category_id: tx.category.map(|category| category.id),
            created_at: Utc::now(),
        }
    }
}
