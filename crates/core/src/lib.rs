//! Core types and pure logic for learning-tracker
//!
//! This crate holds the domain model shared by the other crates together with
//! the side-effect-free pieces: statistics, the streak policy and read views.

pub mod constants;
pub mod dates;
pub mod env_config;

mod activity;
mod error;
mod ids;
mod model;
mod stats;
mod views;

pub use activity::*;
pub use error::*;
pub use ids::*;
pub use model::*;
pub use stats::*;
pub use views::*;
