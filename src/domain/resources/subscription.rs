//! Subscription view.

use crate::domain::foundation::{f64_field, i64_field, str_field};

resource_view!(
    /// A recurring MemberPress subscription.
    Subscription
);

impl Subscription {
    /// Gateway-assigned subscription identifier.
    pub fn subscr_id(&self) -> Option<&str> {
        str_field(&self.source, "subscr_id")
    }

    /// One of `pending`, `active`, `suspended`, `cancelled`.
    pub fn status(&self) -> Option<&str> {
        str_field(&self.source, "status")
    }

    pub fn gateway(&self) -> Option<&str> {
        str_field(&self.source, "gateway")
    }

    pub fn price(&self) -> Option<f64> {
        f64_field(&self.source, "price")
    }

    pub fn period(&self) -> Option<i64> {
        i64_field(&self.source, "period")
    }

    pub fn period_type(&self) -> Option<&str> {
        str_field(&self.source, "period_type")
    }

    pub fn total(&self) -> Option<f64> {
        f64_field(&self.source, "total")
    }
}
