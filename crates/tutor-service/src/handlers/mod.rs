//! HTTP request handlers.

pub mod content;
pub mod meta;
pub mod quote;
