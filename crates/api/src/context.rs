use finapi_ledger::ResolvedCustomer;

/// Customer resolved from the request's identity header.
///
/// Inserted by [`crate::middleware::resolve_customer`]; present on every
/// identity-scoped route. Handlers hand it back to the ledger so they act on
/// exactly the customer that was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerContext {
    customer: ResolvedCustomer,
}

impl CustomerContext {
    pub fn new(customer: ResolvedCustomer) -> Self {
        Self { customer }
    }

    pub fn customer(&self) -> &ResolvedCustomer {
        &self.customer
    }
}
