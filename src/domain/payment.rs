use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Card-capture fields for the direct-card payment flow.
///
/// These are forwarded to the payment gateway as-is; the engine never inspects or
/// stores them.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub card_number: String,
    pub expiration_month: String,
    pub expiration_year: String,
    pub cardholder_name: String,
    pub cvv: String,
}

/// Payload submitted to obtain a payment link for an order.
#[derive(Debug, PartialEq, Clone)]
pub struct PaymentRequest {
    pub order_id: u64,
    pub title: String,
    /// Charged amount, equal to the order total.
    pub quantity: Decimal,
    /// Where the payment provider sends the user back after checkout.
    pub back_url: String,
    pub card: Option<CardDetails>,
}

impl PaymentRequest {
    pub fn new(order_id: u64, total: Decimal, back_url: impl Into<String>) -> Self {
        Self {
            order_id,
            title: format!("new-order-{order_id}"),
            quantity: total,
            back_url: back_url.into(),
            card: None,
        }
    }

    pub fn with_card(mut self, card: CardDetails) -> Self {
        self.card = Some(card);
        self
    }
}

/// Payment result reported back by the provider through redirect query parameters.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct PaymentOutcome {
    pub status: String,
    #[serde(rename = "collection_status")]
    pub collection_status: String,
    #[serde(rename = "payment_id")]
    pub payment_id: Option<String>,
    #[serde(rename = "merchant_order_id")]
    pub merchant_order_id: Option<String>,
}

/// Interpretation of a `PaymentOutcome`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OutcomeClass {
    Approved,
    Pending,
    Failed,
}

impl PaymentOutcome {
    /// Maps `(status, collection_status)` onto an outcome class. Only a double
    /// `approved` counts as success; a `pending` in either field keeps the order
    /// waiting; everything else is a failure.
    pub fn classify(&self) -> OutcomeClass {
        if self.status == "approved" && self.collection_status == "approved" {
            OutcomeClass::Approved
        } else if self.status == "pending" || self.collection_status == "pending" {
            OutcomeClass::Pending
        } else {
            OutcomeClass::Failed
        }
    }
}

impl OutcomeClass {
    pub fn message(&self) -> &'static str {
        match self {
            OutcomeClass::Approved => {
                "Your order was successfully created and payment was approved!"
            }
            OutcomeClass::Pending => {
                "Your order was created, but the payment is still pending. Please check back later."
            }
            OutcomeClass::Failed => {
                "There was an issue with your order or payment. Please try again or contact support."
            }
        }
    }
}
