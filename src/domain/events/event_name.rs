//! MemberPress webhook event names.

use serde::{Serialize, Serializer};
use std::fmt;

macro_rules! event_names {
    ($($(#[$meta:meta])* $variant:ident => $wire:literal,)+) => {
        /// Every event name MemberPress posts to a webhook endpoint.
        ///
        /// `UnidentifiedEvent` stands in for payloads that carry no name at all.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum EventName {
            $($(#[$meta])* $variant,)+
        }

        impl EventName {
            /// All names in catalogue order.
            pub const ALL: &'static [EventName] = &[$(EventName::$variant,)+];

            /// The name as it appears in the payload's `event` field.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Parses a wire name. Returns `None` for names outside the catalogue.
            pub fn from_wire(s: &str) -> Option<Self> {
                match s {
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

event_names! {
    AfterCcExpiresReminder => "after-cc-expires-reminder",
    AfterMemberSignupReminder => "after-member-signup-reminder",
    AfterSignupAbandonedReminder => "after-signup-abandoned-reminder",
    AfterSubExpiresReminder => "after-sub-expires-reminder",
    BeforeCcExpiresReminder => "before-cc-expires-reminder",
    BeforeSubExpiresReminder => "before-sub-expires-reminder",
    BeforeSubRenewsReminder => "before-sub-renews-reminder",
    BeforeSubTrialEnds => "before-sub-trial-ends",
    Login => "login",
    MemberAccountUpdated => "member-account-updated",
    MemberAdded => "member-added",
    MemberDeleted => "member-deleted",
    MemberSignupCompleted => "member-signup-completed",
    /// Courses add-on events.
    MpcaCourseCompleted => "mpca-course-completed",
    MpcaCourseStarted => "mpca-course-started",
    MpcaLessonCompleted => "mpca-lesson-completed",
    MpcaLessonStarted => "mpca-lesson-started",
    MpcaQuizAttemptCompleted => "mpca-quiz-attempt-completed",
    NonRecurringTransactionCompleted => "non-recurring-transaction-completed",
    NonRecurringTransactionExpired => "non-recurring-transaction-expired",
    OfflinePaymentComplete => "offline-payment-complete",
    OfflinePaymentPending => "offline-payment-pending",
    OfflinePaymentRefunded => "offline-payment-refunded",
    RecurringTransactionCompleted => "recurring-transaction-completed",
    RecurringTransactionExpired => "recurring-transaction-expired",
    RecurringTransactionFailed => "recurring-transaction-failed",
    RenewalTransactionCompleted => "renewal-transaction-completed",
    /// Corporate accounts add-on events.
    SubAccountAdded => "sub-account-added",
    SubAccountRemoved => "sub-account-removed",
    SubscriptionCreated => "subscription-created",
    SubscriptionDowngradedToOneTime => "subscription-downgraded-to-one-time",
    SubscriptionDowngradedToRecurring => "subscription-downgraded-to-recurring",
    SubscriptionDowngraded => "subscription-downgraded",
    SubscriptionExpired => "subscription-expired",
    SubscriptionPaused => "subscription-paused",
    SubscriptionResumed => "subscription-resumed",
    SubscriptionStopped => "subscription-stopped",
    SubscriptionUpgradedToOneTime => "subscription-upgraded-to-one-time",
    SubscriptionUpgradedToRecurring => "subscription-upgraded-to-recurring",
    SubscriptionUpgraded => "subscription-upgraded",
    TransactionCompleted => "transaction-completed",
    TransactionExpired => "transaction-expired",
    TransactionFailed => "transaction-failed",
    TransactionRefunded => "transaction-refunded",
    UnidentifiedEvent => "unidentified-event",
}

impl EventName {
    /// Returns true for the catch-all used when a payload names no event.
    pub fn is_unidentified(&self) -> bool {
        *self == Self::UnidentifiedEvent
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
