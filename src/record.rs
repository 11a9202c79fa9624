//! Record shapes returned by the service.
//!
//! Each collection has its own row shape; there is no shared schema. The
//! shapes are modeled as an explicit sum type and decoding selects the shape
//! by the endpoint that was queried, so a payload from one collection can
//! never masquerade as the other.

use serde::{Deserialize, Serialize};

use crate::endpoint::EndpointKind;
use crate::error::FetchError;

/// A row of the `example` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleRecord {
    pub id: i64,
    pub name: String,
}

/// A row of the transactions collection.
///
/// `date_time` is kept as the opaque token the service sent; it is only used
/// as a list key and is not reliably a parseable timestamp. `amount` keeps
/// the exact JSON numeric representation so the display text matches the
/// wire (integers stay `10`, not `10.0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date_time: String,
    pub amount: serde_json::Number,
}

/// One record from either collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Example(ExampleRecord),
    Transaction(TransactionRecord),
}

/// The two fields a rendered list touches: a stable key and the display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub key: String,
    pub text: String,
}

impl Record {
    /// Project the record onto the fields the list renders.
    pub fn list_item(&self) -> ListItem {
        match self {
            Record::Example(r) => ListItem {
                key: r.id.to_string(),
                text: r.name.clone(),
            },
            Record::Transaction(r) => ListItem {
                key: r.date_time.clone(),
                text: r.amount.to_string(),
            },
        }
    }
}

/// Decode a JSON array body into records of the shape `kind` serves.
///
/// An empty array is a success with zero records. Anything that is not an
/// array of the expected shape is a `Parse` error.
pub fn parse_records(kind: EndpointKind, body: &str) -> Result<Vec<Record>, FetchError> {
    let records = match kind {
        EndpointKind::Examples => serde_json::from_str::<Vec<ExampleRecord>>(body)?
            .into_iter()
            .map(Record::Example)
            .collect(),
        EndpointKind::Transactions => serde_json::from_str::<Vec<TransactionRecord>>(body)?
            .into_iter()
            .map(Record::Transaction)
            .collect(),
    };
    Ok(records)
}
