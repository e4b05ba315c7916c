//! Core types: event times, normalized events, tracing setup

pub mod event;
pub mod time;
pub mod tracing;

pub use event::NormalizedEvent;
pub use time::{EventTime, TimeWindow};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
