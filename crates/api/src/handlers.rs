// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Each handler translates a request DTO into core types, runs the pure
//! transition, and hands back the new state for the caller to install and
//! persist. Handlers never touch storage themselves.

use linemate::{Command, GameState, GoalLedger, LineAssignment, Roster, TransitionResult, apply};
use linemate_domain::{GoalId, PlayerId, Team, parse_name_list};
use linemate_persistence::{export_file_name, export_snapshot, import_snapshot};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    BulkAddPlayersRequest, CommandRequest, CommandResponse, ExportResponse, GoalView, LineView,
    PlayerView, SlotView, StateView,
};

/// Result of an API operation that produces a new game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The game after the operation.
    pub new_state: GameState,
}

/// Applies one command to the live game.
///
/// # Arguments
///
/// * `state` - The current game
/// * `request` - The command to apply
///
/// # Errors
///
/// Returns an error if:
/// - A team name is not `HOME` or `AWAY`
/// - The requested line capacity is not 3 or 4
/// - A rename supplies a blank name
pub fn apply_command(
    state: &GameState,
    request: CommandRequest,
) -> Result<ApiResult<CommandResponse>, ApiError> {
    let command: Command = translate_command(request)?;
    run_command(state, command)
}

/// Adds players from pasted or uploaded text.
///
/// Names are appended to the existing roster and join the bench.
///
/// # Errors
///
/// Returns an error only if the transition itself fails.
pub fn bulk_add_players(
    state: &GameState,
    request: BulkAddPlayersRequest,
) -> Result<ApiResult<CommandResponse>, ApiError> {
    let names: Vec<String> = parse_name_list(&request.text, request.format);
    debug!(count = names.len(), format = ?request.format, "Parsed bulk name list");
    run_command(state, Command::AddPlayers { names })
}

/// Replaces the live game with an imported snapshot.
///
/// # Errors
///
/// Returns `MalformedImport` if the text is not JSON or has no `players`
/// list. The caller keeps its current game in that case.
pub fn import_state(text: &str) -> Result<ApiResult<StateView>, ApiError> {
    let new_state: GameState = import_snapshot(text).map_err(translate_persistence_error)?;

    info!(
        players = new_state.roster().players().len(),
        lines = new_state.lineup().lines().len(),
        goals = new_state.ledger().events().len(),
        "Imported game"
    );

    Ok(ApiResult {
        response: build_state_view(&new_state),
        new_state,
    })
}

/// Serializes the live game for download.
///
/// # Errors
///
/// Returns an error if serialization or timestamp formatting fails.
pub fn export_state(state: &GameState, now: OffsetDateTime) -> Result<ExportResponse, ApiError> {
    Ok(ExportResponse {
        file_name: export_file_name(now).map_err(translate_persistence_error)?,
        body: export_snapshot(state).map_err(translate_persistence_error)?,
    })
}

/// Builds the read model of the game, names resolved.
#[must_use]
pub fn build_state_view(state: &GameState) -> StateView {
    let roster: &Roster = state.roster();
    let lineup: &LineAssignment = state.lineup();
    let ledger: &GoalLedger = state.ledger();
    let capacity: usize = lineup.capacity().get();

    let slot = |id: &PlayerId| SlotView {
        id: id.value().to_string(),
        name: roster.resolve_name(id).to_string(),
    };

    StateView {
        players: roster
            .players()
            .iter()
            .map(|p| PlayerView {
                id: p.id.value().to_string(),
                name: p.name.clone(),
                role: p.role.as_str().to_string(),
                location: lineup.locate(&p.id),
            })
            .collect(),
        goalie_id: roster.goalie_id().map(|id| id.value().to_string()),
        goalie_name: roster.goalie_name().to_string(),
        line_capacity: lineup.capacity().value(),
        lines: lineup
            .lines()
            .iter()
            .enumerate()
            .map(|(index, line)| LineView {
                index,
                players: line.iter().map(&slot).collect(),
                open_slots: capacity.saturating_sub(line.len()),
            })
            .collect(),
        bench: lineup.bench().iter().map(&slot).collect(),
        player_count: roster.players().len(),
        skater_count: state.skaters().len(),
        goals_for: ledger.goals_for(),
        goals_against: ledger.goals_against(),
        score: ledger.score_line(),
        goals: ledger
            .events()
            .iter()
            .map(|e| GoalView {
                id: e.id.value().to_string(),
                team: e.team.as_str().to_string(),
                scorer_id: e.scorer_id.as_ref().map(|id| id.value().to_string()),
                scorer_name: e.display_scorer().to_string(),
            })
            .collect(),
    }
}

fn run_command(
    state: &GameState,
    command: Command,
) -> Result<ApiResult<CommandResponse>, ApiError> {
    let result: TransitionResult = apply(state, command).map_err(translate_core_error)?;

    if result.changed {
        info!(
            action = %result.action.name,
            details = ?result.action.details,
            "Applied command"
        );
    } else {
        debug!(action = %result.action.name, "Command left the game unchanged");
    }

    let state_view: StateView = build_state_view(&result.new_state);
    Ok(ApiResult {
        response: CommandResponse {
            action: result.action.name,
            details: result.action.details,
            changed: result.changed,
            state: state_view,
        },
        new_state: result.new_state,
    })
}

fn translate_command(request: CommandRequest) -> Result<Command, ApiError> {
    let command: Command = match request {
        CommandRequest::AddPlayers { names } => Command::AddPlayers { names },
        CommandRequest::RemovePlayer { player_id } => Command::RemovePlayer {
            player_id: PlayerId::new(&player_id),
        },
        CommandRequest::RenamePlayer { player_id, name } => Command::RenamePlayer {
            player_id: PlayerId::new(&player_id),
            name,
        },
        CommandRequest::SetGoalie { player_id } => Command::SetGoalie {
            player_id: PlayerId::new(&player_id),
        },
        CommandRequest::ClearRoster => Command::ClearRoster,
        CommandRequest::SetLineCapacity { capacity } => Command::SetLineCapacity { capacity },
        CommandRequest::AutoBalance => Command::AutoBalance,
        CommandRequest::AddLine => Command::AddLine,
        CommandRequest::RemoveLine { line_index } => Command::RemoveLine { line_index },
        CommandRequest::MoveToBench { player_id } => Command::MoveToBench {
            player_id: PlayerId::new(&player_id),
        },
        CommandRequest::MoveToLine {
            line_index,
            player_id,
        } => Command::MoveToLine {
            line_index,
            player_id: PlayerId::new(&player_id),
        },
        CommandRequest::RemoveFromLine {
            line_index,
            player_id,
        } => Command::RemoveFromLine {
            line_index,
            player_id: PlayerId::new(&player_id),
        },
        CommandRequest::DropPlayer {
            player_id,
            source,
            destination,
        } => Command::DropPlayer {
            player_id: PlayerId::new(&player_id),
            source,
            destination,
        },
        CommandRequest::RecordGoal { team, scorer_id } => Command::RecordGoal {
            team: parse_team(&team)?,
            scorer_id: parse_scorer(scorer_id.as_deref()),
        },
        CommandRequest::AdjustScore { team, delta } => Command::AdjustScore {
            team: parse_team(&team)?,
            delta,
        },
        CommandRequest::UpdateScorer { goal_id, scorer_id } => Command::UpdateScorer {
            goal_id: GoalId::new(&goal_id),
            scorer_id: parse_scorer(scorer_id.as_deref()),
        },
        CommandRequest::RemoveGoal { goal_id } => Command::RemoveGoal {
            goal_id: GoalId::new(&goal_id),
        },
        CommandRequest::ResetAll => Command::ResetAll,
    };
    Ok(command)
}

fn parse_scorer(value: Option<&str>) -> Option<PlayerId> {
    value
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(PlayerId::new)
}

fn parse_team(value: &str) -> Result<Team, ApiError> {
    value
        .trim()
        .to_uppercase()
        .parse()
        .map_err(translate_domain_error)
}
