use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_core::{Entity, Money, OrderId};

/// A payment could not be taken from the customer's funds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("insufficient funds (available: {available}, requested: {requested})")]
pub struct InsufficientFunds {
    pub available: Money,
    pub requested: Money,
}

/// Entity: Customer (identified by name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    address: String,
    order_ids: Vec<OrderId>,
    income: Money,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        order_ids: impl IntoIterator<Item = OrderId>,
        income: Money,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            order_ids: order_ids.into_iter().collect(),
            income,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn order_ids(&self) -> &[OrderId] {
        &self.order_ids
    }

    /// Funds currently available to spend.
    pub fn income(&self) -> Money {
        self.income
    }

    /// Debit `amount` from the customer's income.
    ///
    /// Fails without touching the balance if `amount` is negative or exceeds
    /// the available income. Paying the whole balance is allowed.
    pub fn pay(&mut self, amount: Money) -> Result<(), InsufficientFunds> {
        if amount.is_negative() || amount > self.income {
            return Err(InsufficientFunds {
                available: self.income,
                requested: amount,
            });
        }
        self.income -= amount;
        tracing::debug!(customer = %self.name, %amount, remaining = %self.income, "payment taken");
        Ok(())
    }
}

impl Entity for Customer {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
