use std::io::Write;

use crate::domain::transaction::Transaction;

#[derive(serde::Serialize)]
/// Internal CSV output row representation.
///
/// Headers written (in this order): `id,type,amount`.
struct OutputRow<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    tx_type: &'a str,
    amount: String,
}

/// Writes transactions to a CSV writer in the order given.
///
/// The output includes a header row: `id,type,amount`. Amounts are
/// formatted with exactly 4 decimal places using `to_string_4dp()`.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use banking_demo::common::money::Money;
/// use banking_demo::domain::transaction::Transaction;
/// use banking_demo::io::writer::write_transactions;
///
/// let txs = vec![Transaction::new("TXN1", Money::from_units(5), "Deposit").unwrap()];
///
/// let mut out = Vec::new();
/// write_transactions(&mut out, &txs).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "id,type,amount\nTXN1,Deposit,5.0000\n");
/// ```
pub fn write_transactions<W: Write>(
    writer: W,
    transactions: &[Transaction],
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for tx in transactions {
        let row = OutputRow {
            id: tx.transaction_id(),
            tx_type: tx.tx_type(),
            amount: tx.amount().to_string_4dp(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
