//! Domain types for the journey ranker.
//!
//! Journeys and locations as supplied by the upstream route generator.
//! These are input values: ranking strategies fill in scores and usage
//! aggregates, but never change which locations a journey visits.

mod journey;
mod location;

pub use journey::Journey;
pub use location::{Location, LocationId};
