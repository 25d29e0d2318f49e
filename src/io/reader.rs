use crate::{common::money::Money, domain::transaction::Transaction};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the import headers.
struct CsvRow {
    id: String,
    #[serde(rename = "type")]
    tx_type: String,
    amount: String,
}

/// Reads transaction rows from a CSV reader.
///
/// Supported headers: `id,type,amount`.
/// The amount must parse and be positive; the type label is passed through
/// untouched so that the transaction log decides whether to accept it.
/// Errors carry the transaction id for context.
///
/// # Examples
///
/// ```
/// use banking_demo::io::reader::read_transactions;
/// use csv::ReaderBuilder;
///
/// let data = "id,type,amount\n\
/// TXN1,Deposit,1.25\n\
/// TXN2,Refund,0.25\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let txs: Vec<_> = read_transactions(&mut rdr).collect();
///
/// let first = txs[0].as_ref().unwrap();
/// assert!(first.is_deposit());
/// assert!(!txs[1].as_ref().unwrap().is_valid_type());
/// ```
pub fn read_transactions<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<Transaction, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let id = row.id.trim();
        let amount = Money::from_str(&row.amount)
            .map_err(|e| format!("invalid amount for tx {id}: {e}"))?;

        Transaction::new(id, amount, row.tx_type.trim())
            .map_err(|e| format!("rejected tx {id}: {e}"))
    })
}
