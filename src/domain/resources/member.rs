//! Member view.

use crate::domain::foundation::{i64_field, str_field};

resource_view!(
    /// A MemberPress member (WordPress user) as embedded in a webhook.
    Member
);

impl Member {
    pub fn username(&self) -> Option<&str> {
        str_field(&self.source, "username")
    }

    /// Raw email string; format is not checked here.
    pub fn email(&self) -> Option<&str> {
        str_field(&self.source, "email")
    }

    pub fn first_name(&self) -> Option<&str> {
        str_field(&self.source, "first_name")
    }

    pub fn last_name(&self) -> Option<&str> {
        str_field(&self.source, "last_name")
    }

    pub fn display_name(&self) -> Option<&str> {
        str_field(&self.source, "display_name")
    }

    pub fn nicename(&self) -> Option<&str> {
        str_field(&self.source, "nicename")
    }

    /// Raw registration date string as sent.
    pub fn registered_at(&self) -> Option<&str> {
        str_field(&self.source, "registered_at")
    }

    pub fn active_txn_count(&self) -> i64 {
        i64_field(&self.source, "active_txn_count").unwrap_or(0)
    }

    pub fn login_count(&self) -> Option<i64> {
        i64_field(&self.source, "login_count")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_member_fields() {
        let member = Member::from_value(Some(&json!({
            "id": "17",
            "username": "bob",
            "email": "bob@example.com",
            "first_name": "Bob",
            "active_txn_count": "2"
        })));

        assert_eq!(member.id(), Some(17));
        assert_eq!(member.username(), Some("bob"));
        assert_eq!(member.email(), Some("bob@example.com"));
        assert_eq!(member.first_name(), Some("Bob"));
        assert_eq!(member.active_txn_count(), 2);
        assert_eq!(member.login_count(), None);
    }

    #[test]
    fn non_object_source_yields_empty_member() {
        let member = Member::from_value(Some(&json!(42)));
        assert!(member.is_empty());
        assert_eq!(member.username(), None);
        assert_eq!(member.active_txn_count(), 0);
    }
}
