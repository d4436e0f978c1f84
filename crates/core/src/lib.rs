// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Core game model for the Linemate roster tool.
//!
//! A [`GameState`] bundles three components:
//!
//! - [`Roster`]: players and the goaltender designation
//! - [`LineAssignment`]: skaters partitioned into lines and a bench
//! - [`GoalLedger`]: the goal log and the two score counters
//!
//! All changes go through [`apply`], which takes a [`Command`] and returns a
//! new state without touching the old one.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod ledger;
mod lines;
mod partition;
mod roster;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use ledger::GoalLedger;
pub use lines::LineAssignment;
pub use partition::validate_partition;
pub use roster::Roster;
pub use state::{Action, GameState, TransitionResult};
