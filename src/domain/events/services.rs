//! Collaborators an event view delegates to.

use std::fmt;
use std::sync::Arc;

use crate::ports::{DateParser, EmailFormatValidator};

/// Date parsing and email checking used by view accessors.
///
/// Cheap to clone; every view holds its own handle.
#[derive(Clone)]
pub struct EventServices {
    dates: Arc<dyn DateParser>,
    emails: Arc<dyn EmailFormatValidator>,
}

impl EventServices {
    pub fn new(dates: Arc<dyn DateParser>, emails: Arc<dyn EmailFormatValidator>) -> Self {
        Self { dates, emails }
    }

    pub fn dates(&self) -> &dyn DateParser {
        self.dates.as_ref()
    }

    pub fn emails(&self) -> &dyn EmailFormatValidator {
        self.emails.as_ref()
    }
}

impl fmt::Debug for EventServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventServices").finish_non_exhaustive()
    }
}
