//! Shared library for the drone catalog data generator.
//!
//! The catalog site is served from flat JSON artifacts that are regenerated
//! from scratch on every build: one summary array covering every drone record
//! under `data/drones/`, and one array of category descriptors derived from
//! the categories those drones actually use. This crate holds the record
//! shapes and the aggregation pass; the `generate-data` binary is a thin CLI
//! wrapper around [`aggregate::generate`].

pub mod aggregate;
pub mod record;

pub use aggregate::{Report, generate};
pub use record::{CategoryDescriptor, DroneRecord, DroneSummary, category_display_name};
