//! Satellite propellant budget engine.
//!
//! The member crates hold the physics, catalogs and solver; this crate
//! re-exports them so front-ends (the CLI today) depend on a single library.

pub use sat_budget as budget;
pub use sat_catalog as catalog;
pub use sat_config as config;
pub use sat_core::{constants, roots, units};
pub use sat_export as export;
pub use sat_propulsion as propulsion;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
