use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_core::{Money, OrderId, Report};
use storefront_parties::{Customer, InsufficientFunds};

use crate::order::Order;

/// Why an order submission was turned down.
///
/// A rejected submission has no side effects: the customer is not charged and
/// nothing is recorded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderRejection {
    /// The customer's income does not strictly exceed the order total.
    #[error("insufficient funds (income: {income}, total cost: {total_cost})")]
    InsufficientFunds { income: Money, total_cost: Money },

    /// The product prices add up to more than a [`Money`] can hold.
    #[error("total cost of order {0} is out of range")]
    TotalCostOverflow(OrderId),

    /// An order with this id has already been accepted.
    #[error("order {0} is already recorded")]
    DuplicateOrder(OrderId),

    /// The customer refused the charge.
    #[error("payment failed: {0}")]
    Payment(#[from] InsufficientFunds),
}

/// One accepted order and the customer who placed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub order: Order,
    /// Customer as of acceptance, after the charge was taken.
    pub customer: Customer,
    /// Amount charged.
    pub total_cost: Money,
    pub accepted_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn order_id(&self) -> &OrderId {
        self.order.id_typed()
    }
}

/// Append-only record of accepted orders.
///
/// Entries are kept in acceptance order. There is no way to remove or amend
/// an entry once recorded.
///
/// Charging the customer and recording the entry are two steps. In memory the
/// second cannot fail; a persistent ledger would need both in one transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderLedger {
    entries: Vec<LedgerEntry>,
    /// Order id -> position in `entries`.
    index: BTreeMap<OrderId, usize>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, charge and record `order` for `customer`, stamped with the
    /// current time.
    pub fn submit(&mut self, order: Order, customer: &mut Customer) -> Result<(), OrderRejection> {
        self.submit_at(order, customer, Utc::now())
    }

    /// Like [`OrderLedger::submit`], with an explicit acceptance time.
    ///
    /// 1. Validate: the order id is not yet recorded, the total fits in
    ///    [`Money`], and `customer.income() > total` (strict).
    /// 2. Charge: `customer.pay(total)`.
    /// 3. Record: append the entry.
    pub fn submit_at(
        &mut self,
        order: Order,
        customer: &mut Customer,
        accepted_at: DateTime<Utc>,
    ) -> Result<(), OrderRejection> {
        let total_cost = match self.validate(&order, customer) {
            Ok(total_cost) => total_cost,
            Err(rejection) => {
                tracing::warn!(
                    order_id = %order.id_typed(),
                    customer = customer.name(),
                    reason = %rejection,
                    "order rejected"
                );
                return Err(rejection);
            }
        };

        customer.pay(total_cost)?;

        tracing::info!(
            order_id = %order.id_typed(),
            customer = customer.name(),
            %total_cost,
            remaining_income = %customer.income(),
            "order accepted"
        );

        self.index.insert(order.id_typed().clone(), self.entries.len());
        self.entries.push(LedgerEntry {
            order,
            customer: customer.clone(),
            total_cost,
            accepted_at,
        });
        Ok(())
    }

    /// Returns the order total when the order may be accepted.
    fn validate(&self, order: &Order, customer: &Customer) -> Result<Money, OrderRejection> {
        let order_id = order.id_typed();
        if self.is_recorded(order_id) {
            return Err(OrderRejection::DuplicateOrder(order_id.clone()));
        }
        let total_cost = order
            .total_cost()
            .ok_or_else(|| OrderRejection::TotalCostOverflow(order_id.clone()))?;
        if customer.income() <= total_cost {
            return Err(OrderRejection::InsufficientFunds {
                income: customer.income(),
                total_cost,
            });
        }
        Ok(total_cost)
    }

    pub fn is_recorded(&self, order_id: &OrderId) -> bool {
        self.index.contains_key(order_id)
    }

    pub fn get(&self, order_id: &OrderId) -> Option<&LedgerEntry> {
        self.index.get(order_id).and_then(|&pos| self.entries.get(pos))
    }

    /// Live view of every accepted order, oldest first.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the totals of all accepted orders, clamped at the [`Money`] range.
    pub fn total_revenue(&self) -> Money {
        self.entries
            .iter()
            .fold(Money::zero(), |acc, e| acc.saturating_add(e.total_cost))
    }

    /// `"Sales Report:"` followed by one line per accepted order.
    pub fn report(&self) -> String {
        let mut report = Report::new("Sales");
        for entry in &self.entries {
            report.line(format_args!(
                "Order ID: {}, Customer: {}, Total Cost: {}",
                entry.order_id(),
                entry.customer.name(),
                entry.total_cost
            ));
        }
        report.finish()
    }
}
