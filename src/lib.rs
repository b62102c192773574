//! Intersection Simulation Library
//!
//! A four-way signalized intersection simulation that can run headless or
//! with a Bevy UI.

pub mod feed;
pub mod render;
pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
