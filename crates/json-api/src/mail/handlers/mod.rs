//! Mail Handlers

pub(crate) mod send;
