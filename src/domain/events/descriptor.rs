//! Per-variant fixed values.
//!
//! Every MemberPress event shares one view implementation; variants differ
//! only in their name, their `type` tag and the keys their `data` must
//! contain. Those three values live in an [`EventDescriptor`].

use super::category::Category;
use super::event_name::EventName;
use super::shape::{EventShape, RequiredKey, BASE_MEMBERSHIP_MEMBER, BASE_MEMBERSHIP_MEMBER_SUBSCRIPTION};

/// The fixed configuration of one event variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDescriptor {
    name: EventName,
    event_type: Option<Category>,
    required_keys: Vec<RequiredKey>,
}

impl EventDescriptor {
    /// Assembles a descriptor from a base block and an optional shape.
    pub fn new(
        name: EventName,
        event_type: Option<Category>,
        base: &[RequiredKey],
        shape: Option<EventShape>,
    ) -> Self {
        let mut required_keys = base.to_vec();
        if let Some(shape) = shape {
            required_keys.extend_from_slice(shape.keys());
        }
        Self {
            name,
            event_type,
            required_keys,
        }
    }

    /// Looks up the catalogue entry for `name`.
    ///
    /// Every [`EventName`] has exactly one entry.
    pub fn for_event(name: EventName) -> Self {
        use Category::{Member, Subscription, Transaction};
        use EventName::*;
        use EventShape::*;

        match name {
            AfterCcExpiresReminder
            | BeforeCcExpiresReminder
            | BeforeSubTrialEnds
            | SubscriptionCreated
            | SubscriptionDowngradedToRecurring => {
                Self::new(name, Some(Subscription), BASE_MEMBERSHIP_MEMBER, Some(CompleteEvent))
            }

            SubscriptionDowngraded
            | SubscriptionExpired
            | SubscriptionPaused
            | SubscriptionResumed
            | SubscriptionStopped
            | SubscriptionUpgradedToRecurring
            | SubscriptionUpgraded => Self::new(
                name,
                Some(Subscription),
                BASE_MEMBERSHIP_MEMBER,
                Some(CompleteNonfinancialSubscription),
            ),

            SubscriptionDowngradedToOneTime => Self::new(
                name,
                Some(Transaction),
                BASE_MEMBERSHIP_MEMBER_SUBSCRIPTION,
                Some(CompleteFinancialSubscription),
            ),

            AfterMemberSignupReminder
            | AfterSignupAbandonedReminder
            | AfterSubExpiresReminder
            | BeforeSubExpiresReminder
            | BeforeSubRenewsReminder
            | NonRecurringTransactionCompleted
            | NonRecurringTransactionExpired
            | OfflinePaymentComplete
            | OfflinePaymentPending
            | OfflinePaymentRefunded
            | RecurringTransactionCompleted
            | RecurringTransactionExpired
            | RecurringTransactionFailed
            | RenewalTransactionCompleted
            | SubAccountAdded
            | SubAccountRemoved
            | SubscriptionUpgradedToOneTime
            | TransactionCompleted
            | TransactionExpired
            | TransactionFailed
            | TransactionRefunded => Self::new(
                name,
                Some(Transaction),
                BASE_MEMBERSHIP_MEMBER_SUBSCRIPTION,
                Some(CompleteTransaction),
            ),

            Login
            | MemberAccountUpdated
            | MemberAdded
            | MemberDeleted
            | MemberSignupCompleted
            | MpcaCourseCompleted
            | MpcaCourseStarted
            | MpcaLessonCompleted
            | MpcaLessonStarted
            | MpcaQuizAttemptCompleted => Self::new(name, Some(Member), &[], Some(PartialMember)),

            UnidentifiedEvent => Self::new(name, None, &[], None),
        }
    }

    pub fn name(&self) -> EventName {
        self.name
    }

    /// The category the envelope's `type` field must name, if any.
    pub fn event_type(&self) -> Option<Category> {
        self.event_type
    }

    /// The `type` tag as it appears on the wire; empty for the catch-all.
    pub fn event_type_tag(&self) -> &'static str {
        self.event_type.map_or("", |category| category.as_str())
    }

    /// Ordered structural requirements for `data`.
    pub fn required_keys(&self) -> &[RequiredKey] {
        &self.required_keys
    }

    /// Returns true if the requirements declare `category` present.
    pub fn declares(&self, category: Category) -> bool {
        self.required_keys
            .iter()
            .any(|key| key.category() == Some(category))
    }
}
