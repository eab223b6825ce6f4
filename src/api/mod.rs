//! API clients for ponzu content endpoints.

pub mod contents;

pub use contents::{Completion, ContentsApi, ContentsQuery, Order};
