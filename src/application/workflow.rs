use crate::domain::order::{ItemsInput, Order, OrderDraft, OrderStatus};
use crate::domain::payment::{CardDetails, OutcomeClass, PaymentOutcome, PaymentRequest};
use crate::domain::ports::OrderGatewayBox;
use crate::domain::session::Session;
use crate::error::{OrderError, Result};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Result of creating an order: the gateway-assigned id and the total computed from
/// the selected items.
#[derive(Debug, PartialEq, Clone)]
pub struct CreatedOrder {
    pub id: u64,
    pub total: Decimal,
}

/// Whether reconciliation persisted the `Paid` status.
#[derive(Debug)]
pub enum WriteBack {
    /// The outcome did not call for an update, or the order had already moved past
    /// `PendingPayment` (a replayed redirect).
    NotAttempted,
    Persisted,
    /// The update call failed; the payment interpretation in the report still stands.
    Failed(OrderError),
}

/// Outcome of reconciling an externally-reported payment result.
///
/// The message is always derived, even when the write-back fails; persistence
/// problems are reported separately in `write_back`.
#[derive(Debug)]
pub struct ReconcileReport {
    pub class: OutcomeClass,
    pub message: &'static str,
    pub write_back: WriteBack,
}

/// Orchestrates the order and payment lifecycle against the backend gateway.
///
/// The workflow holds no state of its own; every operation validates its input,
/// issues the necessary gateway calls sequentially, and returns. The backend remains
/// the source of truth for all order records.
pub struct OrderWorkflow {
    gateway: OrderGatewayBox,
}

impl OrderWorkflow {
    pub fn new(gateway: OrderGatewayBox) -> Self {
        Self { gateway }
    }

    /// Creates an order in `PendingPayment` and returns the gateway-assigned id.
    ///
    /// Accepts either item shape (structured list or legacy single item), normalizes
    /// it, and computes the total as the two-decimal sum of unit prices. Validation
    /// failures never reach the network.
    pub async fn create_order(
        &self,
        session: &Session,
        restaurant_id: &str,
        items: ItemsInput,
    ) -> Result<CreatedOrder> {
        let draft = OrderDraft::new(restaurant_id, items)?;
        debug!(restaurant_id = %draft.restaurant_id, total = %draft.total, "creating order");

        let id = self.gateway.create_order(session, &draft).await?;
        Ok(CreatedOrder {
            id,
            total: draft.total,
        })
    }

    /// Requests a payment link for an existing order.
    ///
    /// Returns the link the caller must redirect the user to; the redirect itself is
    /// the presentation layer's job. This operation never mutates order state — the
    /// order stays in `PendingPayment` until reconciliation runs.
    pub async fn initiate_payment(
        &self,
        session: &Session,
        order_id: u64,
        total: Decimal,
        return_url: &str,
        card: Option<CardDetails>,
    ) -> Result<String> {
        if total <= Decimal::ZERO {
            return Err(OrderError::Validation(format!(
                "payment amount must be positive, got {total}"
            )));
        }

        let mut request = PaymentRequest::new(order_id, total, return_url);
        if let Some(card) = card {
            request = request.with_card(card);
        }

        debug!(order_id, total = %total, "requesting payment link");
        self.gateway
            .request_payment(session, &request)
            .await?
            .ok_or(OrderError::MissingPaymentLink)
    }

    /// Maps an externally-reported payment outcome onto the order's status.
    ///
    /// Only a fully approved outcome triggers the `PendingPayment -> Paid` write-back.
    /// The derived message is returned regardless of whether the write-back succeeds.
    pub async fn reconcile_payment(
        &self,
        session: &Session,
        order: &Order,
        outcome: &PaymentOutcome,
    ) -> ReconcileReport {
        let class = outcome.classify();
        debug!(order_id = order.id, ?class, "reconciling payment outcome");

        let write_back = if class == OutcomeClass::Approved {
            // A replayed redirect can arrive after the order already moved on; skip
            // the write rather than regress the status.
            if order.status.can_transition_to(OrderStatus::Paid) {
                match self
                    .gateway
                    .update_status(session, order.id, OrderStatus::Paid)
                    .await
                {
                    Ok(()) => WriteBack::Persisted,
                    Err(err) => {
                        warn!(order_id = order.id, %err, "failed to persist Paid status");
                        WriteBack::Failed(err)
                    }
                }
            } else {
                WriteBack::NotAttempted
            }
        } else {
            WriteBack::NotAttempted
        };

        ReconcileReport {
            class,
            message: class.message(),
            write_back,
        }
    }

    /// Applies a restaurant-driven status change (e.g. "Preparando pedido").
    ///
    /// The target arrives as a raw string from the caller; it must parse into the
    /// status enumeration and follow from the order's current status, both checked
    /// before any network call.
    pub async fn restaurant_update(
        &self,
        session: &Session,
        order: &Order,
        target_status: &str,
    ) -> Result<()> {
        let target: OrderStatus = target_status.parse()?;
        order.status.validate_transition(target)?;

        debug!(order_id = order.id, from = %order.status, to = %target, "updating order status");
        self.gateway.update_status(session, order.id, target).await
    }

    /// Lists orders sorted ascending by id.
    pub async fn list_orders(&self, session: &Session) -> Result<Vec<Order>> {
        let mut orders = self.gateway.list_orders(session).await?;
        orders.sort_by_key(|order| order.id);
        Ok(orders)
    }

    /// The most recently created order, which the post-redirect status page
    /// reconciles against.
    pub async fn latest_order(&self, session: &Session) -> Result<Option<Order>> {
        Ok(self.list_orders(session).await?.into_iter().next_back())
    }
}
