//! Structural validation of webhook `data` objects.
//!
//! A variant declares which keys its `data` must contain as a list of
//! [`RequiredKey`]s. The lists are assembled from a few shared building
//! blocks: a base of nested categories plus one event shape.

use serde_json::Value;

use super::category::Category;
use crate::domain::foundation::has_field;

/// One entry of a variant's structural requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredKey {
    /// The exact key must be present.
    Field(&'static str),

    /// At least one key of the group must be present.
    AnyOf(&'static [&'static str]),

    /// The category is nested under its own key. The `<category>_id`
    /// alias is accepted in place of the nested object.
    Category(Category),

    /// The category's own fields are inlined in the mapping, recognised by
    /// the category's identity key.
    Embedded(Category),
}

impl RequiredKey {
    /// The category this entry declares present, if any.
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::Category(category) | Self::Embedded(category) => Some(*category),
            Self::Field(_) | Self::AnyOf(_) => None,
        }
    }

    /// Returns true if `mapping` satisfies this entry.
    pub fn is_satisfied_by(&self, mapping: &Value) -> bool {
        match self {
            Self::Field(key) => has_field(mapping, key),
            Self::AnyOf(keys) => keys.iter().any(|key| has_field(mapping, key)),
            Self::Category(category) => {
                has_field(mapping, category.as_str()) || has_field(mapping, category.id_alias())
            }
            Self::Embedded(category) => has_field(mapping, category.identity_key()),
        }
    }

    /// Human-readable description used in warnings.
    pub fn describe(&self) -> String {
        match self {
            Self::Field(key) => (*key).to_string(),
            Self::AnyOf(keys) => keys.join("|"),
            Self::Category(category) => category.as_str().to_string(),
            Self::Embedded(category) => format!("{} (inline)", category.as_str()),
        }
    }
}

/// Reports whether `mapping` is an object satisfying every requirement.
///
/// Never panics; a missing key is an ordinary `false`.
pub fn is_valid_shape(mapping: &Value, required: &[RequiredKey]) -> bool {
    mapping.is_object() && first_missing(mapping, required).is_none()
}

/// Returns the first unsatisfied requirement, or `None` when all are met.
///
/// A non-object mapping fails on its first requirement.
pub fn first_missing<'a>(mapping: &Value, required: &'a [RequiredKey]) -> Option<&'a RequiredKey> {
    required.iter().find(|key| !key.is_satisfied_by(mapping))
}

// ════════════════════════════════════════════════════════════════════════════════
// Building Blocks
// ════════════════════════════════════════════════════════════════════════════════

/// Membership and member nested objects.
pub const BASE_MEMBERSHIP_MEMBER: &[RequiredKey] = &[
    RequiredKey::Category(Category::Membership),
    RequiredKey::Category(Category::Member),
];

/// Membership, member and subscription nested objects.
pub const BASE_MEMBERSHIP_MEMBER_SUBSCRIPTION: &[RequiredKey] = &[
    RequiredKey::Category(Category::Membership),
    RequiredKey::Category(Category::Member),
    RequiredKey::Category(Category::Subscription),
];

/// The event shapes a variant can add on top of its base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventShape {
    /// A full subscription inlined in `data`.
    CompleteEvent,
    /// A full transaction inlined in `data`.
    CompleteTransaction,
    /// A subscription change that produced a payment.
    CompleteFinancialSubscription,
    /// A subscription state change without a payment.
    CompleteNonfinancialSubscription,
    /// A member inlined in `data`.
    PartialMember,
}

impl EventShape {
    pub fn keys(&self) -> &'static [RequiredKey] {
        match self {
            Self::CompleteEvent => COMPLETE_EVENT,
            Self::CompleteTransaction => COMPLETE_TRANSACTION,
            Self::CompleteFinancialSubscription => COMPLETE_FINANCIAL_SUBSCRIPTION,
            Self::CompleteNonfinancialSubscription => COMPLETE_NONFINANCIAL_SUBSCRIPTION,
            Self::PartialMember => PARTIAL_MEMBER,
        }
    }
}

const COMPLETE_EVENT: &[RequiredKey] = &[
    RequiredKey::Embedded(Category::Subscription),
    RequiredKey::Field("id"),
    RequiredKey::Field("gateway"),
    RequiredKey::Field("price"),
    RequiredKey::Field("period"),
    RequiredKey::Field("period_type"),
    RequiredKey::Field("status"),
    RequiredKey::Field("created_at"),
];

const COMPLETE_TRANSACTION: &[RequiredKey] = &[
    RequiredKey::Embedded(Category::Transaction),
    RequiredKey::Field("id"),
    RequiredKey::Field("amount"),
    RequiredKey::Field("total"),
    RequiredKey::Field("tax_amount"),
    RequiredKey::Field("tax_rate"),
    RequiredKey::Field("status"),
    RequiredKey::Field("txn_type"),
    RequiredKey::Field("gateway"),
    RequiredKey::Field("created_at"),
    RequiredKey::Field("expires_at"),
];

const COMPLETE_FINANCIAL_SUBSCRIPTION: &[RequiredKey] = &[
    RequiredKey::Embedded(Category::Transaction),
    RequiredKey::Field("id"),
    RequiredKey::Field("amount"),
    RequiredKey::Field("total"),
    RequiredKey::Field("tax_amount"),
    RequiredKey::Field("status"),
    RequiredKey::Field("gateway"),
    RequiredKey::Field("created_at"),
];

const COMPLETE_NONFINANCIAL_SUBSCRIPTION: &[RequiredKey] = &[
    RequiredKey::Embedded(Category::Subscription),
    RequiredKey::Field("id"),
    RequiredKey::Field("gateway"),
    RequiredKey::Field("status"),
    RequiredKey::Field("created_at"),
    RequiredKey::AnyOf(&["period_type", "limit_cycles"]),
];

const PARTIAL_MEMBER: &[RequiredKey] = &[
    RequiredKey::Embedded(Category::Member),
    RequiredKey::Field("id"),
    RequiredKey::Field("email"),
];
