//! Building energy datasets and the read-only queries that back the
//! dashboard charts.

pub mod dataset;
pub mod domain;
pub mod queries;

pub use dataset::{Dataset, DateRange};
