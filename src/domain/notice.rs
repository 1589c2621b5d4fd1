use serde::{Deserialize, Serialize};
use std::fmt;

/// Short acknowledgment handed back to the presentation layer after an
/// order operation. The core never displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn order_accepted() -> Self {
        Self::new("Order Status", "Order has been accepted!")
    }

    pub fn order_rejected() -> Self {
        Self::new("Order Status", "Order has been rejected and removed!")
    }

    pub fn order_tracking(id: crate::domain::OrderId) -> Self {
        Self::new("Track Order", format!("You are tracking order #{}", id))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
