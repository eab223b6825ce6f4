//! Text and date helpers used by the admin interface.
//!
//! All functions here are pure and reentrant.

pub mod query;
pub mod text;
pub mod time;

pub use query::{get_param, PageLocation};
pub use text::replace_bad_chars;
pub use time::{
    partial_date, partial_date_in, partial_date_record, partial_date_record_in, partial_time,
    partial_time_in, partial_time_record, partial_time_record_in,
};
