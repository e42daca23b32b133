//! Delivery order domain types
//!
//! An order is created `Pending` next to the runner closest to the user and
//! then moved through the admin workflow:
//!
//! ```text
//! Pending ──approve──▶ Approved ──assign──▶ Assigned
//!    │                                         │
//!    ├──reject──▶ Rejected                     │
//!    │                                         ▼
//!    └───────────────complete (any state)──▶ Completed
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::GeoPoint;

/// Formats the order identifier for the `sequence`-th order, e.g. `ORD-00001`
pub fn format_order_id(sequence: u64) -> String {
    format!("ORD-{:05}", sequence)
}

/// Delivery order record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub user_position: GeoPoint,
    pub status: OrderStatus,
    /// Copy of the runner taken when the order was created. Never refreshed.
    pub matched_runner: Option<MatchedRunner>,
    pub distance_km: f64,
    pub created_time: DateTime<Utc>,
    pub updated_time: DateTime<Utc>,
}

impl Order {
    /// Applies `action` and stamps `updated_time` on success
    pub fn apply(&mut self, action: OrderAction) -> Result<OrderStatus, TransitionError> {
        let next = self.status.transition(action)?;
        self.status = next;
        self.updated_time = Utc::now();
        Ok(next)
    }
}

/// Runner fields frozen into an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedRunner {
    pub id: u32,
    pub name: String,
    pub position: GeoPoint,
}

/// Order workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Approved,
    Rejected,
    Assigned,
    Completed,
}

impl OrderStatus {
    /// Returns the status reached by applying `action`, or the reason the
    /// transition is not allowed from `self`
    pub fn transition(self, action: OrderAction) -> Result<OrderStatus, TransitionError> {
        use OrderAction::*;
        use OrderStatus::*;

        match (self, action) {
            (Pending, Approve) => Ok(Approved),
            (Pending, Reject) => Ok(Rejected),
            (Approved, Assign) => Ok(Assigned),
            (_, Complete) => Ok(Completed),
            (from, action) => Err(TransitionError { from, action }),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Approved => "approved",
            OrderStatus::Rejected => "rejected",
            OrderStatus::Assigned => "assigned",
            OrderStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// Admin operations on an existing order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    Approve,
    Reject,
    Assign,
    Complete,
}

impl std::fmt::Display for OrderAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderAction::Approve => "approve",
            OrderAction::Reject => "reject",
            OrderAction::Assign => "assign",
            OrderAction::Complete => "complete",
        };
        f.write_str(s)
    }
}

/// Transition rejected by the order state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {action} an order in state {from}")]
pub struct TransitionError {
    pub from: OrderStatus,
    pub action: OrderAction,
}
