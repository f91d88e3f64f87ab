//! Host environment adapters for ovation
//!
//! The scheduler never talks to the outside world directly; it goes through
//! the contracts defined here:
//! - `EnvironmentProbe`: is this platform one we prompt on?
//! - `ManifestSource`: fetch-and-parse of the application manifest
//! - `ReviewSurface`: deep link to the platform store review page
//!
//! Each contract ships with a real implementation and a mock for tests.

mod manifest;
mod mock;
mod probe;
mod review;
mod traits;

pub use manifest::*;
pub use mock::*;
pub use probe::*;
pub use review::*;
pub use traits::*;
