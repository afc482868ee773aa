//! Route table and navigation guard for the Campus console.
//!
//! This crate provides:
//! - The static route table of the console's views
//! - `/`-segment path matching with `:param` captures
//! - A guard that blocks protected navigation without a stored token

mod guard;
mod routes;

pub use guard::{Navigation, RouteGuard, LOGIN_ROUTE};
pub use routes::{find, table, RouteEntry, RouteMatch};
