//! Error types for the calendar integration.

use thiserror::Error;

/// An error raised while turning cached items into calendar events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The mapper was handed a record kind it has no event shape for.
    ///
    /// This is a contract violation between the coordinator cache and the
    /// calendar layer, not a recoverable runtime condition; it is never
    /// caught inside this crate and aborts the query that hit it.
    #[error("unsupported item type '{kind}' in calendar '{category}'")]
    UnsupportedItem {
        /// The category key of the calendar being queried.
        category: String,
        /// The runtime kind name of the offending record.
        kind: String,
    },
}

/// A specialized Result type for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
