//! Sub-resource views nested inside webhook payloads.
//!
//! Every MemberPress event carries some combination of a member, a
//! membership, a transaction and a subscription. Each view wraps an owned
//! JSON object and exposes typed accessors over it.
//!
//! Construction never fails: anything that is not a JSON object (a bare
//! identifier, `"0"`, `null`) becomes an empty view whose accessors all
//! return their fallbacks.

/// Generates the shared shell of a sub-resource view.
///
/// Produces the struct (holding a JSON object), the infallible constructors
/// and the raw accessors. Resource-specific accessors are added in each
/// module's own `impl` block.
macro_rules! resource_view {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize)]
        #[serde(transparent)]
        pub struct $name {
            source: serde_json::Value,
        }

        impl $name {
            /// Builds the view from an owned JSON object.
            pub fn new(source: serde_json::Map<String, serde_json::Value>) -> Self {
                Self {
                    source: serde_json::Value::Object(source),
                }
            }

            /// Builds the view from any JSON value; non-objects yield an empty view.
            pub fn from_value(value: Option<&serde_json::Value>) -> Self {
                Self::new($crate::domain::foundation::object_or_empty(value))
            }

            /// Returns the underlying JSON object.
            pub fn raw(&self) -> &serde_json::Value {
                &self.source
            }

            /// Looks up an arbitrary key, treating `null` as absent.
            pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
                $crate::domain::foundation::field(&self.source, key)
            }

            /// Returns true if the source object has no keys.
            pub fn is_empty(&self) -> bool {
                self.source.as_object().map_or(true, |object| object.is_empty())
            }

            /// Numeric identifier assigned by MemberPress.
            pub fn id(&self) -> Option<i64> {
                $crate::domain::foundation::i64_field(&self.source, "id")
            }
        }
    };
}

mod member;
mod membership;
mod subscription;
mod transaction;

pub use member::Member;
pub use membership::Membership;
pub use subscription::Subscription;
pub use transaction::Transaction;
