use std::io::{Read, Write};

use csv::{ReaderBuilder, StringRecord, Trim, Writer};
use tokio::{
    sync::mpsc,
    task::{self, JoinHandle},
};

use crate::{
    domain::transaction::{RawRecord, Transaction},
    error::{Error, Result},
};

const RECORD_BUFFER: usize = 256;

/// Records decoded from an import file, delivered as the reader makes
/// progress.
///
/// The sequence can only be consumed once. [`Records::drain`] is the
/// completion barrier: nothing downstream should treat the batch as final
/// before it returns.
pub struct Records {
    rx: mpsc::Receiver<RawRecord>,
    reader: JoinHandle<Result<()>>,
}

impl Records {
    /// Next decoded record, or `None` once the reader is done.
    pub async fn next(&mut self) -> Option<RawRecord> {
        self.rx.recv().await
    }

    /// Collects every remaining record and waits for the reader to finish,
    /// surfacing any error it hit.
    pub async fn drain(mut self) -> Result<Vec<RawRecord>> {
        let mut records = Vec::new();
        while let Some(record) = self.rx.recv().await {
            records.push(record);
        }

        self.reader.await??;
        Ok(records)
    }
}

/// Parse [`RawRecord`]s from a reader.
///
/// The first row is a header and is always skipped. Fields are trimmed and
/// mapped by position to `title,type,value,category`. Rows missing a title,
/// type or value are dropped; a missing category reads as an empty string.
///
/// Must be called from within a tokio runtime.
pub fn read(reader: impl Read + Send + 'static) -> Records {
    let (tx, rx) = mpsc::channel(RECORD_BUFFER);

    let reader = task::spawn_blocking(move || -> Result<()> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        for row in reader.records() {
            let Some(record) = decode(&row?)? else {
                continue;
            };

            if tx.blocking_send(record).is_err() {
                tracing::debug!("records receiver dropped, stopping reader");
                break;
            }
        }

        Ok(())
    });

    Records { rx, reader }
}

fn decode(row: &StringRecord) -> Result<Option<RawRecord>> {
    let field = |index| row.get(index).unwrap_or_default();
    let line = row.position().map_or(0, |position| position.line());
    let (title, kind, value, category) = (field(0), field(1), field(2), field(3));

    if title.is_empty() || kind.is_empty() || value.is_empty() {
        tracing::debug!(line, "skipping incomplete row");
        return Ok(None);
    }

    RawRecord::parse(title, kind, value, category)
        .map(Some)
        .map_err(|source| Error::RowError { line, source })
}

pub fn write(transactions: &[Transaction], writer: impl Write) -> csv::Result<()> {
    let mut writer = Writer::from_writer(writer);

    for transaction in transactions {
        writer.serialize(transaction)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::transaction::{NewTransaction, TransactionType};

    async fn parse(input: &'static str) -> Result<Vec<RawRecord>> {
        read(Cursor::new(input)).drain().await
    }

    #[tokio::test]
    async fn skips_header_and_trims_fields() {
        let records = parse("title,type,value,category\n  Salary , income ,5000,  Job \n")
            .await
            .unwrap();

        assert_eq!(
            records,
            vec![RawRecord {
                title: "Salary".into(),
                kind: TransactionType::Income,
                value: dec!(5000),
                category: "Job".into(),
            }]
        );
    }

    #[tokio::test]
    async fn drops_incomplete_rows() {
        let records = parse(
            "title,type,value,category\n\
             ,outcome,50,Food\n\
             Lunch,,50,Food\n\
             Dinner,outcome,  ,Food\n\
             Short,outcome\n\
             Groceries,outcome,150,Food\n",
        )
        .await
        .unwrap();

        let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Groceries"]);
    }

    #[tokio::test]
    async fn keeps_empty_category() {
        let records = parse("title,type,value,category\nGift,income,20,\nTip,income,5\n")
            .await
            .unwrap();

        assert!(records.iter().all(|r| r.category.is_empty()));
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn preserves_row_order_and_quoting() {
        let records = parse(
            "title,type,value,category\n\
             A,income,1,X\n\
             \"Rent, May\",outcome,900.75,Home\n\
             C,income,3,X\n",
        )
        .await
        .unwrap();

        let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["A", "Rent, May", "C"]);
        assert_eq!(records[1].value, dec!(900.75));
    }

    #[tokio::test]
    async fn header_only_yields_nothing() {
        assert!(parse("title,type,value,category\n").await.unwrap().is_empty());
        assert!(parse("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_type_fails_with_line() {
        let err = parse("title,type,value,category\nA,income,1,X\nB,expense,2,X\n")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::RowError { line: 3, .. }));
    }

    #[tokio::test]
    async fn delivers_records_incrementally() {
        let mut records = read(Cursor::new(
            "title,type,value,category\nA,income,1,X\nB,outcome,2,Y\n",
        ));

        assert_eq!(records.next().await.map(|r| r.title), Some("A".into()));
        let rest = records.drain().await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].title, "B");
    }

    #[test]
    fn writes_type_in_lowercase() {
        let tx = Transaction::from(NewTransaction {
            title: "Salary".into(),
            kind: TransactionType::Income,
            value: dec!(5000),
            category: None,
        });
        let mut out = Vec::new();

        write(&[tx], &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "id,title,type,value,category,created_at");
        assert!(lines[1].contains(",Salary,income,5000,,"));
    }
}
