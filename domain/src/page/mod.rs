//! Pages of the grammar book and the sections that group them.
//!
//! - [`page_id::PageId`]: slug naming one remote document
//! - [`section::Section`]: top-level table-of-contents grouping

pub mod page_id;
pub mod section;
