//! Country Explorer Library
//!
//! This library provides the country list pipeline (filter, group, select,
//! paginate), the GraphQL country source, configuration, and the terminal UI
//! that hosts them.

pub mod cli;
pub mod config;
pub mod constants;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod query;
pub mod tui;
