use serde::{Deserialize, Serialize};

use finapi_core::{CustomerId, Entity};

use crate::operation::{self, Amount, Operation};

/// External tax identifier of a customer (the `cpf` field on the wire).
///
/// Unique across all customers; this is the key callers identify themselves with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxId(String);

impl TaxId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

}

impl core::fmt::Display for TaxId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaxId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TaxId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Outcome of identity resolution: the tax id a request named and the
/// customer it pointed at when it was looked up.
///
/// Ledger operations only act on a customer whose id still matches, so a
/// customer deleted and re-registered under the same tax id in between is
/// never touched by a stale resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCustomer {
    id: CustomerId,
    tax_id: TaxId,
}

impl ResolvedCustomer {
    pub(crate) fn new(id: CustomerId, tax_id: TaxId) -> Self {
        Self { id, tax_id }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn tax_id(&self) -> &TaxId {
        &self.tax_id
    }
}

/// A registered customer and their statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    id: CustomerId,
    cpf: TaxId,
    name: String,
    statement: Vec<Operation>,
    /// Registration order inside the owning collection.
    #[serde(skip)]
    seq: u64,
}

impl Customer {
    pub(crate) fn register(id: CustomerId, cpf: TaxId, name: String, seq: u64) -> Self {
        Self {
            id,
            cpf,
            name,
            statement: Vec::new(),
            seq,
        }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn tax_id(&self) -> &TaxId {
        &self.cpf
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in insertion (chronological) order.
    pub fn statement(&self) -> &[Operation] {
        &self.statement
    }

    pub fn balance(&self) -> Amount {
        operation::balance(&self.statement)
    }

    pub(crate) fn seq(&self) -> u64 {
        self.seq
    }

    pub(crate) fn rename(&mut self, name: String) {
        self.name = name;
    }

    /// Append-only; existing entries are never touched.
    pub(crate) fn push(&mut self, op: Operation) {
        self.statement.push(op);
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
