use crate::config::GatewayConfig;
use crate::domain::order::{Order, OrderDraft, OrderStatus};
use crate::domain::payment::{CardDetails, PaymentRequest};
use crate::domain::ports::{AccountGateway, OrderGateway, Restaurant};
use crate::domain::session::{Credentials, Registration, Session, User};
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// HTTP implementation of the gateway ports against the real backend API.
///
/// Endpoint paths and JSON field names follow the backend's wire contract
/// (`pedido/criar_pedido`, `link_pagamento`, `valor`, ...). Requests carry the
/// configured timeout; a timed-out or otherwise failed transport surfaces as a
/// retryable gateway error. Dropping an in-flight future aborts the request.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[derive(Serialize)]
struct WireItem<'a> {
    name: &'a str,
    price: Decimal,
}

#[derive(Serialize)]
struct CreateOrderBody<'a> {
    products: Vec<WireItem<'a>>,
    #[serde(rename = "restaurantId")]
    restaurant_id: &'a str,
    #[serde(rename = "valor")]
    total: Decimal,
    status: OrderStatus,
}

#[derive(Deserialize)]
struct CreateOrderResponse {
    id: u64,
}

#[derive(Serialize)]
struct PaymentBody<'a> {
    #[serde(rename = "orderId")]
    order_id: u64,
    title: &'a str,
    quantity: Decimal,
    back_url: &'a str,
    #[serde(flatten)]
    card: &'a Option<CardDetails>,
}

#[derive(Deserialize)]
struct PaymentResponse {
    #[serde(rename = "link_pagamento")]
    payment_link: Option<String>,
}

#[derive(Serialize)]
struct UpdateStatusBody {
    status: OrderStatus,
}

#[derive(Deserialize)]
struct LoginResponse {
    user: User,
    token: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Turns a non-success response into a gateway error, preferring the backend's
/// `message` field and falling back to a per-operation default.
async fn gateway_failure(response: Response, fallback: &str) -> OrderError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| fallback.to_string());
    OrderError::Gateway(format!("{}: {message}", status.as_u16()))
}

/// Decodes a success body; a 2xx response that does not parse is an
/// `UnexpectedResponse`, not a gateway failure.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|err| OrderError::UnexpectedResponse(err.to_string()))
}

#[async_trait]
impl OrderGateway for HttpGateway {
    async fn create_order(&self, session: &Session, draft: &OrderDraft) -> Result<u64> {
        let body = CreateOrderBody {
            products: draft
                .items
                .iter()
                .map(|item| WireItem {
                    name: &item.name,
                    price: item.unit_price,
                })
                .collect(),
            restaurant_id: &draft.restaurant_id,
            total: draft.total,
            status: OrderStatus::PendingPayment,
        };

        let url = self.url("pedido/criar_pedido");
        debug!(%url, "POST create order");
        let response = self
            .client
            .post(&url)
            .header("Authorization", session.bearer())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(gateway_failure(response, "Failed to create order").await);
        }
        let created: CreateOrderResponse = decode(response).await?;
        Ok(created.id)
    }

    async fn request_payment(
        &self,
        session: &Session,
        request: &PaymentRequest,
    ) -> Result<Option<String>> {
        let body = PaymentBody {
            order_id: request.order_id,
            title: &request.title,
            quantity: request.quantity,
            back_url: &request.back_url,
            card: &request.card,
        };

        let url = self.url("pedido/realizar_pagamento");
        debug!(%url, order_id = request.order_id, "POST payment request");
        let response = self
            .client
            .post(&url)
            .header("Authorization", session.bearer())
            .header("Cache-Control", "no-store")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(gateway_failure(response, "Payment failed").await);
        }
        let payment: PaymentResponse = decode(response).await?;
        Ok(payment.payment_link)
    }

    async fn update_status(
        &self,
        session: &Session,
        order_id: u64,
        status: OrderStatus,
    ) -> Result<()> {
        let url = self.url(&format!("pedido/atualizar_pedido/{order_id}"));
        debug!(%url, %status, "PUT status update");
        let response = self
            .client
            .put(&url)
            .header("Authorization", session.bearer())
            .json(&UpdateStatusBody { status })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(gateway_failure(response, "Failed to update order status").await);
        }
        Ok(())
    }

    async fn list_orders(&self, session: &Session) -> Result<Vec<Order>> {
        let url = self.url("pedido/listar_pedidos");
        debug!(%url, "GET orders");
        let response = self
            .client
            .get(&url)
            .header("Authorization", session.bearer())
            .header("Cache-Control", "no-store")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(gateway_failure(response, "Failed to fetch orders").await);
        }
        decode(response).await
    }
}

#[async_trait]
impl AccountGateway for HttpGateway {
    async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let url = self.url("auth/login");
        debug!(%url, "POST login");
        let response = self.client.post(&url).json(credentials).send().await?;

        if !response.status().is_success() {
            return Err(gateway_failure(response, "Login failed").await);
        }
        let login: LoginResponse = decode(response).await?;
        Ok(Session {
            token: login.token,
            user: login.user,
        })
    }

    async fn register(&self, registration: &Registration) -> Result<()> {
        let url = self.url("users");
        debug!(%url, "POST register");
        let response = self.client.post(&url).json(registration).send().await?;

        if !response.status().is_success() {
            return Err(gateway_failure(response, "Registration failed").await);
        }
        Ok(())
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>> {
        let url = self.url("user/users/restaurants");
        debug!(%url, "GET restaurants");
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(gateway_failure(response, "Failed to fetch restaurants").await);
        }
        decode(response).await
    }
}
