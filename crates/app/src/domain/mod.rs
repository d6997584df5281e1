//! Catalog Domain Concerns

pub mod products;
