//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod pacer;
pub mod page_parser;
pub mod page_source;
pub mod progress;
pub mod row_sink;
