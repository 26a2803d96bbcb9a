use crate::domain::payment::PaymentOutcome;
use crate::domain::session::{Session, User};

pub fn test_session() -> Session {
    Session {
        token: "test-token".to_string(),
        user: User {
            id: 1,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        },
    }
}

pub fn outcome(status: &str, collection_status: &str) -> PaymentOutcome {
    PaymentOutcome {
        status: status.to_string(),
        collection_status: collection_status.to_string(),
        payment_id: Some("77".to_string()),
        merchant_order_id: Some("42".to_string()),
    }
}
