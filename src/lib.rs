//! Ballistic aiming for projectiles under constant gravity.
//!
//! The solver crates are pure and synchronous; this facade re-exports them
//! and adds the scenario layer used by the command-line front-ends.

pub mod scenario;

pub use aim_config as config;
pub use aim_core as primitives;
pub use aim_export as export;
pub use aim_intercept as intercept;
pub use aim_predict as predict;
pub use aim_stationary as stationary;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
