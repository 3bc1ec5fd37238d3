//! Service layer for learning-tracker
//!
//! Owns the state reducer, the demonstration dataset and the [`Tracker`] that
//! ties the reducer to persistence.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod action;
mod clock;
mod drafts;
mod edits;
mod error;
pub mod parse;
mod reducer;
mod seed;
mod tracker;


pub use action::{Action, SkillToggle};
pub use clock::{Clock, FixedClock, SystemClock};
pub use drafts::{MediaDraft, ProductDraft, ShipDraft, WeekDraft};
pub use edits::{GoalEdit, ProductEdit, WeekEdit, REVIEW_TEMPLATE};
pub use error::ServiceError;
pub use reducer::reduce;
pub use seed::seed_state;
pub use tracker::Tracker;
