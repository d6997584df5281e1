//! Product catalog domain, persistence, mail and background scheduling.

pub mod context;
pub mod database;
pub mod domain;
pub mod ids;
pub mod mail;
pub mod scheduler;

#[cfg(test)]
mod test;
