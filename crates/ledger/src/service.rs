//! The account ledger service: a process-scoped, keyed customer collection.
//!
//! Every operation takes the collection lock once and runs to completion under
//! it, so a withdraw's balance check and its append can never interleave with
//! another request.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, NaiveDate, Utc};

use finapi_core::{CustomerId, DomainError, DomainResult, Entity};

use crate::customer::{Customer, ResolvedCustomer, TaxId};
use crate::operation::{self, Amount, Operation};

#[derive(Debug, Default)]
struct Customers {
    by_tax_id: HashMap<TaxId, Customer>,
    next_seq: u64,
}

impl Customers {
    /// The resolved customer, provided it is still the one registered under its tax id.
    fn get(&self, who: &ResolvedCustomer) -> DomainResult<&Customer> {
        self.by_tax_id
            .get(who.tax_id())
            .filter(|c| c.id_typed() == who.id())
            .ok_or(DomainError::NotFound)
    }

    fn get_mut(&mut self, who: &ResolvedCustomer) -> DomainResult<&mut Customer> {
        self.by_tax_id
            .get_mut(who.tax_id())
            .filter(|c| c.id_typed() == who.id())
            .ok_or(DomainError::NotFound)
    }

    fn snapshot(&self) -> Vec<Customer> {
        let mut all: Vec<Customer> = self.by_tax_id.values().cloned().collect();
        all.sort_by_key(Customer::seq);
        all
    }
}

/// Handle to the in-memory ledger. Clones share the same collection.
///
/// Starts empty; nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct LedgerService {
    inner: Arc<Mutex<Customers>>,
}

impl LedgerService {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, Customers>> {
        self.inner
            .lock()
            .map_err(|_| DomainError::internal("customer collection lock poisoned"))
    }

    /// Register a new customer with an empty statement.
    pub fn create_account(&self, cpf: TaxId, name: impl Into<String>) -> DomainResult<CustomerId> {
        let mut customers = self.lock()?;
        if customers.by_tax_id.contains_key(&cpf) {
            tracing::warn!(cpf = %cpf, "account creation rejected: tax id already registered");
            return Err(DomainError::conflict("Customer already exists!"));
        }

        let id = CustomerId::new();
        let seq = customers.next_seq;
        customers.next_seq += 1;
        customers
            .by_tax_id
            .insert(cpf.clone(), Customer::register(id, cpf, name.into(), seq));

        tracing::info!(customer_id = %id, "account created");
        Ok(id)
    }

    /// Identity resolution: pin the customer currently registered under `cpf`.
    pub fn resolve(&self, cpf: &TaxId) -> DomainResult<ResolvedCustomer> {
        let customers = self.lock()?;
        let customer = customers.by_tax_id.get(cpf).ok_or(DomainError::NotFound)?;
        tracing::debug!(customer_id = %customer.id(), "customer resolved");
        Ok(ResolvedCustomer::new(customer.id_typed(), cpf.clone()))
    }

    pub fn get_account(&self, who: &ResolvedCustomer) -> DomainResult<Customer> {
        let customers = self.lock()?;
        Ok(customers.get(who)?.clone())
    }

    /// Overwrite the display name. Empty names are accepted.
    pub fn update_account(
        &self,
        who: &ResolvedCustomer,
        name: impl Into<String>,
    ) -> DomainResult<Customer> {
        let mut customers = self.lock()?;
        let customer = customers.get_mut(who)?;
        customer.rename(name.into());
        tracing::info!(customer_id = %customer.id(), "account name updated");
        Ok(customer.clone())
    }

    /// Remove the resolved customer and return everyone left, in registration order.
    pub fn delete_account(&self, who: &ResolvedCustomer) -> DomainResult<Vec<Customer>> {
        let mut customers = self.lock()?;
        customers.get(who)?;
        customers.by_tax_id.remove(who.tax_id());
        tracing::info!(customer_id = %who.id(), "account deleted");
        Ok(customers.snapshot())
    }

    pub fn statement(&self, who: &ResolvedCustomer) -> DomainResult<Vec<Operation>> {
        let customers = self.lock()?;
        Ok(customers.get(who)?.statement().to_vec())
    }

    /// Entries created on `date`. A missing date matches nothing.
    pub fn statement_by_date(
        &self,
        who: &ResolvedCustomer,
        date: Option<NaiveDate>,
    ) -> DomainResult<Vec<Operation>> {
        let customers = self.lock()?;
        let statement = customers.get(who)?.statement();
        Ok(match date {
            Some(date) => operation::filter_by_date(statement, date),
            None => Vec::new(),
        })
    }

    /// Append a credit. The amount is not validated.
    pub fn deposit(
        &self,
        who: &ResolvedCustomer,
        amount: Amount,
        description: Option<String>,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<Operation> {
        let mut customers = self.lock()?;
        let customer = customers.get_mut(who)?;
        let op = Operation::credit(amount, description, occurred_at);
        customer.push(op.clone());
        tracing::info!(customer_id = %customer.id(), amount, "deposit recorded");
        Ok(op)
    }

    /// Append a debit if the current balance covers `amount`.
    pub fn withdraw(
        &self,
        who: &ResolvedCustomer,
        amount: Amount,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<Operation> {
        let mut customers = self.lock()?;
        let customer = customers.get_mut(who)?;

        let balance = customer.balance();
        if balance < amount {
            tracing::warn!(
                customer_id = %customer.id(),
                balance,
                requested = amount,
                "withdraw rejected: insufficient funds"
            );
            return Err(DomainError::insufficient_funds(balance, amount));
        }

        let op = Operation::debit(amount, occurred_at);
        customer.push(op.clone());
        tracing::info!(customer_id = %customer.id(), amount, "withdraw recorded");
        Ok(op)
    }

    pub fn balance(&self, who: &ResolvedCustomer) -> DomainResult<Amount> {
        let customers = self.lock()?;
        Ok(customers.get(who)?.balance())
    }
}
