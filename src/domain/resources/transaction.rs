//! Transaction view.

use crate::domain::foundation::{f64_field, str_field};

resource_view!(
    /// A single MemberPress payment transaction.
    Transaction
);

impl Transaction {
    /// Gateway-assigned transaction number.
    pub fn trans_num(&self) -> Option<&str> {
        str_field(&self.source, "trans_num")
    }

    pub fn amount(&self) -> f64 {
        f64_field(&self.source, "amount").unwrap_or(0.0)
    }

    pub fn total(&self) -> Option<f64> {
        f64_field(&self.source, "total")
    }

    /// One of `pending`, `complete`, `failed`, `refunded`, `confirmed`.
    pub fn status(&self) -> Option<&str> {
        str_field(&self.source, "status")
    }

    pub fn txn_type(&self) -> Option<&str> {
        str_field(&self.source, "txn_type")
    }

    pub fn gateway(&self) -> Option<&str> {
        str_field(&self.source, "gateway")
    }
}
