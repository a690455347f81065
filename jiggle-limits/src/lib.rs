//! Collision limit assets for jiggle-bone physics.
//!
//! An asset keeps editor-authored limit records (spheres, capsules, boxes, planes) together
//! with the runtime limits a solver consumes, and migrates stored data across schema versions.
//! The solver itself lives elsewhere.

#![forbid(unsafe_code)]

mod asset;
mod bone;
mod edit;
mod error;
mod ids;
mod model;
mod version;

#[cfg(feature = "json")]
pub mod json;

pub use asset::*;
pub use bone::*;
pub use edit::*;
pub use error::*;
pub use ids::*;
pub use model::*;
pub use version::*;


#[cfg(test)]
mod asset_tests;


#[cfg(test)]
mod edit_tests;
