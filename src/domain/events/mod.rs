//! MemberPress webhook events.
//!
//! A payload is classified by its `event` name into one of the catalogue's
//! variants and wrapped in an [`EventView`]. Variants share a single view
//! type and differ only in their [`EventDescriptor`].

mod category;
mod descriptor;
mod errors;
mod event_name;
mod event_view;
mod registry;
mod services;
mod shape;

pub use category::Category;
pub use descriptor::EventDescriptor;
pub use errors::EventError;
pub use event_name::EventName;
pub use event_view::EventView;
pub use registry::{descriptor_for, EventRegistry};
pub use services::EventServices;
pub use shape::{
    first_missing, is_valid_shape, EventShape, RequiredKey, BASE_MEMBERSHIP_MEMBER,
    BASE_MEMBERSHIP_MEMBER_SUBSCRIPTION,
};
