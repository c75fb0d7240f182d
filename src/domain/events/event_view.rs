//! Typed view over a MemberPress webhook payload.
//!
//! An [`EventView`] wraps exactly one payload for its lifetime. Its fixed
//! configuration comes from an [`EventDescriptor`]; everything else is read
//! lazily from the payload through total accessors that never fail.
//!
//! ## Validation
//!
//! [`EventView::validate`] runs these stages, stopping at the first failure:
//! 1. The payload is an object with `event`, `type` and `data` keys
//! 2. The payload's `event` equals the descriptor's name
//! 3. The payload's `type` equals the descriptor's type tag
//! 4. `data` satisfies the descriptor's required keys
//!
//! Failures are logged as warnings and leave the view invalid; they are
//! never returned as errors.
//!
//! ## Sub-resource location
//!
//! The transaction is always inlined in `data`. The member is `data` itself
//! on `member` events and `data["member"]` elsewhere. Membership and
//! subscription are always nested under their own key.

use chrono::{DateTime, Utc};
use once_cell::unsync::OnceCell;
use serde_json::{Map, Value};

use super::category::Category;
use super::descriptor::EventDescriptor;
use super::event_name::EventName;
use super::services::EventServices;
use super::shape::{first_missing, RequiredKey};
use crate::domain::foundation::{
    f64_field, field, flag_value, has_field, i64_field, list_field, object_field, str_field,
};
use crate::domain::resources::{Member, Membership, Subscription, Transaction};

static NO_DATA: Value = Value::Null;

const ENVELOPE_KEYS: [&str; 3] = ["event", "type", "data"];

/// A classified, self-validating webhook event.
#[derive(Debug)]
pub struct EventView {
    descriptor: &'static EventDescriptor,
    payload: Value,
    services: EventServices,
    is_valid: bool,
    member: OnceCell<Member>,
    membership: OnceCell<Membership>,
    transaction: OnceCell<Transaction>,
    subscription: OnceCell<Subscription>,
    recent_subscriptions: OnceCell<Vec<Subscription>>,
    recent_transactions: OnceCell<Vec<Transaction>>,
}

macro_rules! str_accessors {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(&self) -> Option<&str> {
                str_field(self.data(), stringify!($name))
            }
        )+
    };
}

macro_rules! i64_accessors {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(&self) -> Option<i64> {
                i64_field(self.data(), stringify!($name))
            }
        )+
    };
}

macro_rules! f64_accessors {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(&self) -> Option<f64> {
                f64_field(self.data(), stringify!($name))
            }
        )+
    };
}

impl EventView {
    /// Wraps `payload` without validating it.
    ///
    /// Never fails, whatever the payload looks like.
    pub fn new(
        descriptor: &'static EventDescriptor,
        payload: Value,
        services: EventServices,
    ) -> Self {
        Self {
            descriptor,
            payload,
            services,
            is_valid: false,
            member: OnceCell::new(),
            membership: OnceCell::new(),
            transaction: OnceCell::new(),
            subscription: OnceCell::new(),
            recent_subscriptions: OnceCell::new(),
            recent_transactions: OnceCell::new(),
        }
    }

    /// Runs all validation stages and records the outcome.
    ///
    /// Idempotent: the payload is immutable, so every run reaches the same
    /// result.
    pub fn validate(&mut self) -> bool {
        self.is_valid = self.check();
        self.is_valid
    }

    fn check(&self) -> bool {
        let name = self.descriptor.name();

        if !self.payload.is_object() || !ENVELOPE_KEYS.iter().all(|key| has_field(&self.payload, key)) {
            tracing::warn!(event = %name, "received a payload without event, type and data keys");
            return false;
        }

        let received_event = str_field(&self.payload, "event");
        if received_event != Some(name.as_str()) {
            tracing::warn!(
                event = %name,
                received = received_event.unwrap_or("<missing>"),
                "received a payload with inconsistent or missing 'event' key"
            );
            return false;
        }

        let expected_type = self.descriptor.event_type_tag();
        let received_type = str_field(&self.payload, "type");
        if received_type != Some(expected_type) {
            tracing::warn!(
                event = %name,
                expected = expected_type,
                received = received_type.unwrap_or("<missing>"),
                "received a payload with inconsistent or missing 'type' key"
            );
            return false;
        }

        let required = self.descriptor.required_keys();
        if required.is_empty() {
            tracing::warn!(event = %name, "event declares no structure to validate against");
            return false;
        }
        if !self.data().is_object() {
            tracing::warn!(event = %name, "received a payload whose 'data' is not an object");
            return false;
        }
        if let Some(missing) = first_missing(self.data(), required) {
            tracing::warn!(
                event = %name,
                key = %missing.describe(),
                "received a payload whose 'data' is missing a required key"
            );
            return false;
        }

        true
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Fixed Configuration
    // ════════════════════════════════════════════════════════════════════════════

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn event_name(&self) -> EventName {
        self.descriptor.name()
    }

    pub fn event_type(&self) -> Option<Category> {
        self.descriptor.event_type()
    }

    pub fn event_type_tag(&self) -> &'static str {
        self.descriptor.event_type_tag()
    }

    pub fn required_keys(&self) -> &[RequiredKey] {
        self.descriptor.required_keys()
    }

    pub fn descriptor(&self) -> &'static EventDescriptor {
        self.descriptor
    }

    /// The payload exactly as received.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// The payload's `data` object, or `null` when absent.
    pub fn data(&self) -> &Value {
        field(&self.payload, "data").unwrap_or(&NO_DATA)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Category Presence
    // ════════════════════════════════════════════════════════════════════════════

    pub fn has_member(&self) -> bool {
        self.descriptor.declares(Category::Member)
    }

    pub fn has_membership(&self) -> bool {
        self.descriptor.declares(Category::Membership)
    }

    pub fn has_transaction(&self) -> bool {
        self.descriptor.declares(Category::Transaction)
    }

    pub fn has_subscription(&self) -> bool {
        self.descriptor.declares(Category::Subscription)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Category Objects
    // ════════════════════════════════════════════════════════════════════════════

    /// Source object for a category, following the location rule above.
    fn category_source(&self, category: Category) -> Option<&Value> {
        match category {
            Category::Member if self.descriptor.event_type() == Some(Category::Member) => {
                Some(self.data())
            }
            Category::Transaction => Some(self.data()),
            _ => field(self.data(), category.as_str()),
        }
    }

    pub fn member(&self) -> Option<&Member> {
        if !self.has_member() {
            return None;
        }
        Some(
            self.member
                .get_or_init(|| Member::from_value(self.category_source(Category::Member))),
        )
    }

    pub fn membership(&self) -> Option<&Membership> {
        if !self.has_membership() {
            return None;
        }
        Some(self.membership.get_or_init(|| {
            Membership::from_value(self.category_source(Category::Membership))
        }))
    }

    pub fn transaction(&self) -> Option<&Transaction> {
        if !self.has_transaction() {
            return None;
        }
        Some(self.transaction.get_or_init(|| {
            Transaction::from_value(self.category_source(Category::Transaction))
        }))
    }

    pub fn subscription(&self) -> Option<&Subscription> {
        if !self.has_subscription() {
            return None;
        }
        Some(self.subscription.get_or_init(|| {
            Subscription::from_value(self.category_source(Category::Subscription))
        }))
    }

    /// Subscriptions listed in `data`; empty unless the event carries a member.
    pub fn recent_subscriptions(&self) -> &[Subscription] {
        if !self.has_member() {
            return &[];
        }
        self.recent_subscriptions.get_or_init(|| {
            list_field(self.data(), "recent_subscriptions")
                .iter()
                .map(|item| Subscription::from_value(Some(item)))
                .collect()
        })
    }

    /// Transactions listed in `data`; empty unless the event carries a member.
    pub fn recent_transactions(&self) -> &[Transaction] {
        if !self.has_member() {
            return &[];
        }
        self.recent_transactions.get_or_init(|| {
            list_field(self.data(), "recent_transactions")
                .iter()
                .map(|item| Transaction::from_value(Some(item)))
                .collect()
        })
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Envelope Fields
    // ════════════════════════════════════════════════════════════════════════════

    /// Looks in the top-level payload first, then in `data`.
    fn envelope_field(&self, key: &str) -> Option<&Value> {
        field(&self.payload, key).or_else(|| field(self.data(), key))
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.envelope_field("created_at").and_then(Value::as_str);
        self.parse_date("created_at", raw)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.envelope_field("expires_at").and_then(Value::as_str);
        self.parse_date("expires_at", raw)
    }

    pub fn rebill(&self) -> bool {
        flag_value(self.envelope_field("rebill"))
    }

    pub fn limit_cycles(&self) -> bool {
        flag_value(self.envelope_field("limit_cycles"))
    }

    pub fn subscription_payment_index(&self) -> bool {
        flag_value(self.envelope_field("subscription_payment_index"))
    }

    fn parse_date(&self, key: &'static str, raw: Option<&str>) -> Option<DateTime<Utc>> {
        let Some(raw) = raw else {
            tracing::debug!(event = %self.event_name(), key, "date field absent");
            return None;
        };
        match self.services.dates().parse(raw) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!(
                    event = %self.event_name(),
                    key,
                    id = ?self.id(),
                    error = %e,
                    "cannot read date field"
                );
                None
            }
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Member Fields
    // ════════════════════════════════════════════════════════════════════════════

    /// The member's email, if a username is present and the address is
    /// well-formed.
    pub fn email(&self) -> Option<&str> {
        let username = self.username()?;
        let email = self.member()?.email()?;
        if self.services.emails().is_valid_email_format(email) {
            Some(email)
        } else {
            tracing::warn!(event = %self.event_name(), username, "invalid email address");
            None
        }
    }

    /// Registration date; absent unless a username is present.
    pub fn registered_at(&self) -> Option<DateTime<Utc>> {
        self.username()?;
        self.parse_date("registered_at", str_field(self.data(), "registered_at"))
    }

    pub fn active_memberships(&self) -> i64 {
        i64_field(self.data(), "active_memberships").unwrap_or(0)
    }

    pub fn active_txn_count(&self) -> i64 {
        i64_field(self.data(), "active_txn_count").unwrap_or(0)
    }

    pub fn expired_txn_count(&self) -> i64 {
        i64_field(self.data(), "expired_txn_count").unwrap_or(0)
    }

    pub fn address(&self) -> Option<&Map<String, Value>> {
        object_field(self.data(), "address")
    }

    pub fn profile(&self) -> Option<&Map<String, Value>> {
        object_field(self.data(), "profile")
    }

    str_accessors!(
        username,
        first_name,
        last_name,
        display_name,
        nicename,
        url,
        message,
    );

    i64_accessors!(login_count, trial_txn_count, sub_count);

    // ════════════════════════════════════════════════════════════════════════════
    // Transaction and Subscription Fields
    // ════════════════════════════════════════════════════════════════════════════

    pub fn amount(&self) -> f64 {
        f64_field(self.data(), "amount").unwrap_or(0.0)
    }

    /// Last four card digits, kept as text to preserve leading zeros.
    pub fn cc_last4(&self) -> Option<String> {
        match field(self.data(), "cc_last4")? {
            Value::String(digits) => Some(digits.clone()),
            Value::Number(number) => Some(format!("{:0>4}", number.to_string())),
            _ => None,
        }
    }

    /// Coupon id or embedded coupon object.
    pub fn coupon(&self) -> Option<&Value> {
        field(self.data(), "coupon")
    }

    /// Gateway response blob.
    pub fn response(&self) -> Option<&Value> {
        field(self.data(), "response")
    }

    str_accessors!(
        gateway,
        status,
        subscr_id,
        token,
        trans_num,
        txn_type,
        period_type,
        tax_class,
        tax_desc,
        limit_cycles_action,
        limit_cycles_expires_type,
    );

    i64_accessors!(
        /// MemberPress record id of the event's primary object.
        id,
        cc_exp_month,
        cc_exp_year,
        corporate_account_id,
        parent_transaction_id,
        period,
        prorated,
        prorated_trial,
        limit_cycles_expires_after,
        limit_cycles_num,
        tax_compound,
        tax_shipping,
        trial,
        trial_days,
    );

    f64_accessors!(
        price,
        total,
        tax_amount,
        tax_rate,
        trial_amount,
        trial_tax_amount,
        trial_total,
    );
}
