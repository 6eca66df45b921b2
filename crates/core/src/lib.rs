//! # Lessonbook Core
//!
//! Domain crate for the music school scheduler: the data model, the fixed seed
//! data, the scheduling store with its reducer, and read-only views built from
//! store snapshots.
//!
//! ## Layout
//!
//! - **models**: time slots, enrollment records and the current student
//! - **store**: the [`SchedulingStore`](store::SchedulingStore) and its pure
//!   [`reduce`](store::reduce) function
//! - **ids**: pluggable generation of session-unique enrollment ids
//! - **seed**: the slots and current student a session starts with
//! - **views**: grid, slot details and student projections

pub mod errors;
pub mod ids;
pub mod models;
pub mod seed;
pub mod store;
pub mod views;
