use crate::domain::order::{Order, OrderDraft, OrderStatus};
use crate::domain::payment::PaymentRequest;
use crate::domain::ports::{AccountGateway, OrderGateway, Restaurant};
use crate::domain::session::{Credentials, Registration, Session, User};
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

/// One outbound call as seen by the fake gateway, recorded for test assertions.
#[derive(Debug, Clone)]
pub enum GatewayCall {
    CreateOrder { draft: OrderDraft },
    RequestPayment { request: PaymentRequest },
    UpdateStatus { order_id: u64, status: OrderStatus },
    ListOrders,
}

/// In-memory stand-in for the backend's order and payment endpoints.
///
/// Uses `Arc<RwLock<..>>` so clones share state. Records every call it receives,
/// assigns order ids sequentially, and can be configured to hand out a payment link
/// or to fail status updates. Useful for tests and offline development.
#[derive(Default, Clone)]
pub struct InMemoryGateway {
    orders: Arc<RwLock<BTreeMap<u64, Order>>>,
    calls: Arc<RwLock<Vec<GatewayCall>>>,
    next_order_id: Arc<RwLock<u64>>,
    payment_link: Option<String>,
    update_failure: Option<String>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self {
            next_order_id: Arc::new(RwLock::new(1)),
            ..Self::default()
        }
    }

    /// Sets the id the next created (or seeded) order will receive.
    pub fn with_next_order_id(mut self, id: u64) -> Self {
        self.next_order_id = Arc::new(RwLock::new(id));
        self
    }

    /// Configures the link returned by `request_payment`. Without one, payment
    /// requests succeed with no link in the body.
    pub fn with_payment_link(mut self, link: impl Into<String>) -> Self {
        self.payment_link = Some(link.into());
        self
    }

    /// Makes every `update_status` call fail with a gateway error.
    pub fn with_update_failure(mut self, message: impl Into<String>) -> Self {
        self.update_failure = Some(message.into());
        self
    }

    /// Inserts an order directly, bypassing the create endpoint and the call log.
    pub async fn seed_order(&self, status: OrderStatus, total: Decimal) -> Order {
        let id = self.take_order_id().await;
        let order = Order {
            id,
            created: "2024-06-01T12:00:00Z".to_string(),
            status,
            total,
        };
        self.orders.write().await.insert(id, order.clone());
        order
    }

    /// Everything the gateway has been asked to do, in order.
    pub async fn calls(&self) -> Vec<GatewayCall> {
        self.calls.read().await.clone()
    }

    pub async fn order(&self, id: u64) -> Option<Order> {
        self.orders.read().await.get(&id).cloned()
    }

    async fn take_order_id(&self) -> u64 {
        let mut next = self.next_order_id.write().await;
        let id = *next;
        *next += 1;
        id
    }

    async fn record(&self, call: GatewayCall) {
        self.calls.write().await.push(call);
    }
}

#[async_trait]
impl OrderGateway for InMemoryGateway {
    async fn create_order(&self, _session: &Session, draft: &OrderDraft) -> Result<u64> {
        self.record(GatewayCall::CreateOrder {
            draft: draft.clone(),
        })
        .await;

        let id = self.take_order_id().await;
        let order = Order {
            id,
            created: "2024-06-01T12:00:00Z".to_string(),
            status: OrderStatus::PendingPayment,
            total: draft.total,
        };
        self.orders.write().await.insert(id, order);
        Ok(id)
    }

    async fn request_payment(
        &self,
        _session: &Session,
        request: &PaymentRequest,
    ) -> Result<Option<String>> {
        self.record(GatewayCall::RequestPayment {
            request: request.clone(),
        })
        .await;
        Ok(self.payment_link.clone())
    }

    async fn update_status(
        &self,
        _session: &Session,
        order_id: u64,
        status: OrderStatus,
    ) -> Result<()> {
        self.record(GatewayCall::UpdateStatus { order_id, status }).await;

        if let Some(message) = &self.update_failure {
            return Err(OrderError::Gateway(message.clone()));
        }

        let mut orders = self.orders.write().await;
        match orders.get_mut(&order_id) {
            Some(order) => {
                order.status = status;
                Ok(())
            }
            None => Err(OrderError::Gateway(format!("order {order_id} not found"))),
        }
    }

    async fn list_orders(&self, _session: &Session) -> Result<Vec<Order>> {
        self.record(GatewayCall::ListOrders).await;
        Ok(self.orders.read().await.values().cloned().collect())
    }
}

/// In-memory stand-in for the backend's auth and directory endpoints.
#[derive(Default, Clone)]
pub struct InMemoryAccountGateway {
    users: Arc<RwLock<HashMap<String, (u64, Registration)>>>,
    restaurants: Arc<RwLock<Vec<Restaurant>>>,
}

impl InMemoryAccountGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_restaurant(self, id: u64, name: impl Into<String>) -> Self {
        if let Ok(mut restaurants) = self.restaurants.try_write() {
            restaurants.push(Restaurant {
                id,
                name: name.into(),
                value: None,
            });
        }
        self
    }
}

#[async_trait]
impl AccountGateway for InMemoryAccountGateway {
    async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let users = self.users.read().await;
        match users.get(&credentials.email) {
            Some((id, registration)) if registration.password == credentials.password => {
                Ok(Session {
                    token: format!("token-{id}"),
                    user: User {
                        id: *id,
                        name: registration.name.clone(),
                        email: registration.email.clone(),
                    },
                })
            }
            _ => Err(OrderError::Gateway("Login failed".to_string())),
        }
    }

    async fn register(&self, registration: &Registration) -> Result<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&registration.email) {
            return Err(OrderError::Gateway("Registration failed".to_string()));
        }
        let id = users.len() as u64 + 1;
        users.insert(registration.email.clone(), (id, registration.clone()));
        Ok(())
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>> {
        Ok(self.restaurants.read().await.clone())
    }
}
