//! Membership (product) view.

use crate::domain::foundation::{f64_field, i64_field, str_field};

resource_view!(
    /// A MemberPress membership, i.e. the product a member signed up for.
    Membership
);

impl Membership {
    pub fn title(&self) -> Option<&str> {
        str_field(&self.source, "title")
    }

    pub fn price(&self) -> Option<f64> {
        f64_field(&self.source, "price")
    }

    pub fn period(&self) -> Option<i64> {
        i64_field(&self.source, "period")
    }

    /// Billing period unit, e.g. `months`, `years`, `lifetime`.
    pub fn period_type(&self) -> Option<&str> {
        str_field(&self.source, "period_type")
    }

    pub fn trial_days(&self) -> Option<i64> {
        i64_field(&self.source, "trial_days")
    }
}
