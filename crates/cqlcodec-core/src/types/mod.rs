//! Native domain types for the temporal, decimal and identifier columns.
//! Integers, floats, text, blobs, varints and plain UUIDs use std and
//! ecosystem types directly.

mod date;
mod decimal;
mod duration;
mod inet;
mod time_of_day;
mod timestamp;
mod timeuuid;

pub use date::{Date, DateParseError};
pub use decimal::{Decimal, DecimalParseError};
pub use duration::{Duration, DurationParseError};
pub use inet::{InetText, parse_inet};
pub use time_of_day::{Time, TimeParseError};
pub use timestamp::{OffsetTimestamp, Timestamp, TimestampParseError};
pub use timeuuid::TimeUuid;
