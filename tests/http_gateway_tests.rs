//! Wire-contract tests for the reqwest gateway against a mock backend.

use rurafood_orders::config::GatewayConfig;
use rurafood_orders::domain::order::{ItemsInput, OrderDraft, OrderItem, OrderStatus};
use rurafood_orders::domain::payment::PaymentRequest;
use rurafood_orders::domain::ports::{AccountGateway, OrderGateway};
use rurafood_orders::domain::session::{Credentials, Session, User};
use rurafood_orders::error::OrderError;
use rurafood_orders::infrastructure::http::HttpGateway;
use rust_decimal_macros::dec;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session() -> Session {
    Session {
        token: "t0k".to_string(),
        user: User {
            id: 1,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        },
    }
}

async fn gateway(server: &MockServer) -> HttpGateway {
    HttpGateway::new(GatewayConfig::new(server.uri())).unwrap()
}

fn draft() -> OrderDraft {
    OrderDraft::new(
        "3",
        ItemsInput::Structured(vec![
            OrderItem::new("Pizza", dec!(12.99)),
            OrderItem::new("Burger", dec!(8.99)),
        ]),
    )
    .unwrap()
}

#[tokio::test]
async fn test_create_order_posts_wire_body_and_parses_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pedido/criar_pedido"))
        .and(header("Authorization", "Bearer t0k"))
        .and(body_partial_json(json!({
            "products": [
                {"name": "Pizza", "price": "12.99"},
                {"name": "Burger", "price": "8.99"}
            ],
            "restaurantId": "3",
            "valor": "21.98",
            "status": "Pendente Pagamento"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let id = gateway(&server)
        .await
        .create_order(&session(), &draft())
        .await
        .unwrap();
    assert_eq!(id, 42);
}

#[tokio::test]
async fn test_create_order_propagates_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pedido/criar_pedido"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "restaurante fechado"})),
        )
        .mount(&server)
        .await;

    let err = gateway(&server)
        .await
        .create_order(&session(), &draft())
        .await
        .unwrap_err();

    match err {
        OrderError::Gateway(message) => {
            assert!(message.contains("restaurante fechado"));
            assert!(message.contains("400"));
        }
        other => panic!("expected gateway error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_order_failure_without_message_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pedido/criar_pedido"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .await
        .create_order(&session(), &draft())
        .await
        .unwrap_err();

    match err {
        OrderError::Gateway(message) => assert!(message.contains("Failed to create order")),
        other => panic!("expected gateway error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_order_unparsable_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pedido/criar_pedido"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .await
        .create_order(&session(), &draft())
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::UnexpectedResponse(_)));
}

#[tokio::test]
async fn test_payment_link_extracted_from_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pedido/realizar_pagamento"))
        .and(body_partial_json(json!({
            "orderId": 42,
            "title": "new-order-42",
            "quantity": "21.98",
            "back_url": "https://app.example.com/order-status/"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"link_pagamento": "https://pay.example.com/checkout/42"}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let request = PaymentRequest::new(42, dec!(21.98), "https://app.example.com/order-status/");
    let link = gateway(&server)
        .await
        .request_payment(&session(), &request)
        .await
        .unwrap();
    assert_eq!(link.as_deref(), Some("https://pay.example.com/checkout/42"));
}

#[tokio::test]
async fn test_payment_response_without_link_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pedido/realizar_pagamento"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let request = PaymentRequest::new(42, dec!(21.98), "https://app.example.com/order-status/");
    let link = gateway(&server)
        .await
        .request_payment(&session(), &request)
        .await
        .unwrap();
    assert!(link.is_none());
}

#[tokio::test]
async fn test_card_fields_forwarded_opaquely() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pedido/realizar_pagamento"))
        .and(body_partial_json(json!({
            "cardNumber": "5031 4332 1540 6351",
            "cardholderName": "APROV",
            "cvv": "123",
            "expirationMonth": "11",
            "expirationYear": "25"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"link_pagamento": "x"})))
        .expect(1)
        .mount(&server)
        .await;

    let request = PaymentRequest::new(42, dec!(21.98), "https://app.example.com/").with_card(
        rurafood_orders::domain::payment::CardDetails {
            card_number: "5031 4332 1540 6351".to_string(),
            expiration_month: "11".to_string(),
            expiration_year: "25".to_string(),
            cardholder_name: "APROV".to_string(),
            cvv: "123".to_string(),
        },
    );
    gateway(&server)
        .await
        .request_payment(&session(), &request)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_status_puts_wire_string() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/pedido/atualizar_pedido/42"))
        .and(body_partial_json(json!({"status": "Preparando pedido"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Order status updated successfully"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    gateway(&server)
        .await
        .update_status(&session(), 42, OrderStatus::Preparing)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_orders_parses_backend_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pedido/listar_pedidos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "created": "2024-06-01T12:05:00Z", "status": "Pendente Pagamento", "valor": 8.99},
            {"id": 1, "created": "2024-06-01T12:00:00Z", "status": "Pago Com sucesso", "valor": 12.99}
        ])))
        .mount(&server)
        .await;

    let orders = gateway(&server)
        .await
        .list_orders(&session())
        .await
        .unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[1].status, OrderStatus::Paid);
    assert_eq!(orders[1].total, dec!(12.99));
}

#[tokio::test]
async fn test_login_builds_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_partial_json(json!({"email": "ana@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "t0k",
            "user": {"id": 7, "name": "Ana", "email": "ana@example.com"}
        })))
        .mount(&server)
        .await;

    let session = gateway(&server)
        .await
        .login(&Credentials {
            email: "ana@example.com".to_string(),
            password: "s3cret".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(session.token, "t0k");
    assert_eq!(session.user.id, 7);
}

#[tokio::test]
async fn test_timeout_is_retryable_gateway_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pedido/listar_pedidos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = GatewayConfig::new(server.uri()).with_timeout(Duration::from_millis(100));
    let err = HttpGateway::new(config)
        .unwrap()
        .list_orders(&session())
        .await
        .unwrap_err();

    assert!(err.is_retryable());
    assert!(matches!(err, OrderError::Gateway(_)));
}
