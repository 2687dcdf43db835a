pub mod dataset;
pub mod error_utils;
pub mod models;
pub mod query;
pub mod store;
pub mod validation;
