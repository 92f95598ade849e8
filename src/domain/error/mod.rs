use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown transaction type {0:?}, expected `income` or `outcome`")]
    UnknownTransactionType(String),
    #[error("invalid transaction value {value:?}")]
    InvalidValue {
        value: String,
        #[source]
        source: rust_decimal::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
