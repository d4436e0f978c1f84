// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for linemate.
//!
//! Framework-agnostic: request DTOs in, response DTOs and the new game
//! out. The HTTP server owns the live game and persistence.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    ApiResult, apply_command, build_state_view, bulk_add_players, export_state, import_state,
};
pub use request_response::{
    BulkAddPlayersRequest, CommandRequest, CommandResponse, ExportResponse, GoalView, LineView,
    PlayerView, SlotView, StateView,
};
