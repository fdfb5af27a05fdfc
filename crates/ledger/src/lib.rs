//! Account ledger module (customers, statements, balances).
//!
//! This crate contains the ledger's business rules: who the customers are,
//! which credit/debit operations they hold, and how balances are derived.
//! There is no IO, no HTTP and no persistence here; state lives for the
//! lifetime of the owning [`LedgerService`].

pub mod customer;
pub mod operation;
pub mod service;

pub use customer::{Customer, ResolvedCustomer, TaxId};
pub use operation::{
    Amount, Operation, OperationKind, balance, filter_by_date, parse_statement_date,
};
pub use service::LedgerService;
