//! Mail

mod handlers;

pub(crate) use handlers::*;
