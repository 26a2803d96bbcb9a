use super::order::{Order, OrderDraft, OrderStatus};
use super::payment::PaymentRequest;
use super::session::{Credentials, Registration, Session};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A restaurant as listed by the backend directory.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Restaurant {
    pub id: u64,
    pub name: String,
    #[serde(rename = "valor")]
    pub value: Option<Decimal>,
}

/// Port to the backend's order and payment endpoints. The backend owns all durable
/// order state; implementations only move JSON across the wire.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submits a new order and returns the gateway-assigned id.
    async fn create_order(&self, session: &Session, draft: &OrderDraft) -> Result<u64>;

    /// Requests a payment link for an order. Returns `None` when the gateway
    /// responded successfully but included no link.
    async fn request_payment(
        &self,
        session: &Session,
        request: &PaymentRequest,
    ) -> Result<Option<String>>;

    /// Writes a new status for an order. The transition guard lives in the
    /// application layer; by the time a call reaches this port it is legal.
    async fn update_status(
        &self,
        session: &Session,
        order_id: u64,
        status: OrderStatus,
    ) -> Result<()>;

    async fn list_orders(&self, session: &Session) -> Result<Vec<Order>>;
}

/// Port to the backend's auth and directory endpoints.
#[async_trait]
pub trait AccountGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<Session>;

    async fn register(&self, registration: &Registration) -> Result<()>;

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>>;
}

pub type OrderGatewayBox = Box<dyn OrderGateway>;
pub type AccountGatewayBox = Box<dyn AccountGateway>;
