use crate::error::{OrderError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an order.
///
/// The backend stores statuses as fixed Portuguese strings; the serde renames below
/// match that wire contract. Transitions only move forward:
/// `PendingPayment -> Paid -> Preparing -> OutForDelivery`. A failed or rejected
/// payment leaves the order in `PendingPayment`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum OrderStatus {
    #[serde(rename = "Pendente Pagamento")]
    PendingPayment,
    #[serde(rename = "Pago Com sucesso")]
    Paid,
    #[serde(rename = "Preparando pedido")]
    Preparing,
    #[serde(rename = "Saiu para entrega")]
    OutForDelivery,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::PendingPayment => "Pendente Pagamento",
            OrderStatus::Paid => "Pago Com sucesso",
            OrderStatus::Preparing => "Preparando pedido",
            OrderStatus::OutForDelivery => "Saiu para entrega",
        }
    }

    /// Whether `next` is a legal successor of `self` in the state machine.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::PendingPayment, OrderStatus::Paid)
                | (OrderStatus::Paid, OrderStatus::Preparing)
                | (OrderStatus::Preparing, OrderStatus::OutForDelivery)
        )
    }

    /// Checks the transition table, failing with `InvalidTransition` on any
    /// regression, skip, or self-transition.
    pub fn validate_transition(&self, next: OrderStatus) -> Result<()> {
        if self.can_transition_to(next) {
            Ok(())
        } else {
            Err(OrderError::InvalidTransition {
                from: *self,
                to: next,
            })
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Pendente Pagamento" => Ok(OrderStatus::PendingPayment),
            "Pago Com sucesso" => Ok(OrderStatus::Paid),
            "Preparando pedido" => Ok(OrderStatus::Preparing),
            "Saiu para entrega" => Ok(OrderStatus::OutForDelivery),
            other => Err(OrderError::InvalidStatusValue(other.to_string())),
        }
    }
}

/// A single priced item on an order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct OrderItem {
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: Decimal,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            unit_price,
        }
    }
}

/// Item selection as it arrives from callers.
///
/// The domain historically produced two payload shapes: a structured item list, and a
/// legacy single free-text item with a `valor` amount. Both deserialize here and are
/// normalized into one canonical item list; anything that fits neither shape is
/// rejected by serde upstream.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum ItemsInput {
    Structured(Vec<OrderItem>),
    Single {
        #[serde(rename = "itemName")]
        item_name: String,
        #[serde(rename = "valor")]
        value: Decimal,
    },
}

impl ItemsInput {
    /// Normalizes either shape into a non-empty list of items with non-negative prices.
    pub fn normalize(self) -> Result<Vec<OrderItem>> {
        let items = match self {
            ItemsInput::Structured(items) => items,
            ItemsInput::Single { item_name, value } => vec![OrderItem::new(item_name, value)],
        };

        if items.is_empty() {
            return Err(OrderError::Validation("item list is empty".to_string()));
        }
        if let Some(item) = items.iter().find(|item| item.unit_price < Decimal::ZERO) {
            return Err(OrderError::Validation(format!(
                "item {:?} has a negative price",
                item.name
            )));
        }

        Ok(items)
    }
}

impl From<Vec<OrderItem>> for ItemsInput {
    fn from(items: Vec<OrderItem>) -> Self {
        ItemsInput::Structured(items)
    }
}

/// Validated input for order creation. The total is computed once here and never
/// recomputed afterwards.
#[derive(Debug, PartialEq, Clone)]
pub struct OrderDraft {
    pub restaurant_id: String,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
}

impl OrderDraft {
    pub fn new(restaurant_id: impl Into<String>, items: ItemsInput) -> Result<Self> {
        let restaurant_id = restaurant_id.into();
        if restaurant_id.trim().is_empty() {
            return Err(OrderError::Validation(
                "restaurant id is required".to_string(),
            ));
        }

        let items = items.normalize()?;
        let total = items
            .iter()
            .map(|item| item.unit_price)
            .sum::<Decimal>()
            .round_dp(2);

        Ok(Self {
            restaurant_id,
            items,
            total,
        })
    }
}

/// An order as reported by the backend's list endpoint. The backend owns this record;
/// the engine never creates or deletes one locally.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Order {
    pub id: u64,
    pub created: String,
    pub status: OrderStatus,
    #[serde(rename = "valor")]
    pub total: Decimal,
}
