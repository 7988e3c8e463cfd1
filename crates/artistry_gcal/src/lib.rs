// --- File: crates/artistry_gcal/src/lib.rs ---
pub mod auth;
#[cfg(test)]
mod auth_test;
pub mod doc;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
#[cfg(test)]
mod logic_test;
pub mod routes;
pub mod service;
