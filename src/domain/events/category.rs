//! Sub-resource categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four kinds of sub-resource an event may carry.
///
/// The same names double as the envelope's `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Member,
    Membership,
    Transaction,
    Subscription,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Member,
        Category::Membership,
        Category::Transaction,
        Category::Subscription,
    ];

    /// Key under which the category nests inside `data`, and its type tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Membership => "membership",
            Self::Transaction => "transaction",
            Self::Subscription => "subscription",
        }
    }

    /// Alternate key accepted in place of the nested object.
    pub fn id_alias(&self) -> &'static str {
        match self {
            Self::Member => "member_id",
            Self::Membership => "membership_id",
            Self::Transaction => "transaction_id",
            Self::Subscription => "subscription_id",
        }
    }

    /// Key that identifies the category when its fields are inlined.
    pub fn identity_key(&self) -> &'static str {
        match self {
            Self::Member => "username",
            Self::Membership => "title",
            Self::Transaction => "trans_num",
            Self::Subscription => "subscr_id",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
