//! Server request machinery
//!
//! Every endpoint call runs as an `AsyncComputeTaskPool` task that drives a
//! blocking `reqwest` client on its own worker thread, and is polled to
//! completion one frame at a time. At most one task of each kind is in
//! flight; inserting a new task resource drops (cancels) the previous one.
//!
//! A monotonic request generation tags each task. A completed task older
//! than the newest issued request is discarded, so overlapping requests
//! resolve last-request-wins instead of completion-order-wins.

use super::board::{BoardState, SquareId};
use super::session::{
    ErrorDialog, LastMoveDisplay, MoveHistory, OpeningDisplay, OpeningsBoard, RecommendationBoard,
    StatusBanner,
};
use crate::api::{ApiClient, BoardGrid, ControlResponse, MoveResponse, OpeningsResponse};
use crate::core::{ApiError, ApiResult, AppState, ServerConfig};
use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, Task};
use futures_lite::future;

/// Monotonic counter tagging every issued request
#[derive(Resource, Debug, Default)]
pub struct RequestGeneration {
    issued: u64,
}

impl RequestGeneration {
    pub fn next(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn latest(&self) -> u64 {
        self.issued
    }
}

/// Which control button issued the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Reset,
    Undo,
    AiMove,
}

/// In-flight `/get_board_state` call
#[derive(Resource)]
pub struct BoardFetchTask {
    task: Task<ApiResult<BoardGrid>>,
    generation: u64,
}

/// In-flight `/move` call, remembering the gesture so the confirmed move
/// can be replayed onto the displayed grid
#[derive(Resource)]
pub struct MoveTask {
    task: Task<ApiResult<MoveResponse>>,
    generation: u64,
    pub from: SquareId,
    pub to: SquareId,
    pub promotion: Option<char>,
}

/// In-flight `/reset`, `/undo` or `/ai_move` call
#[derive(Resource)]
pub struct ControlTask {
    task: Task<ApiResult<ControlResponse>>,
    generation: u64,
    pub action: ControlAction,
}

/// In-flight `/get_possible_openings` call
#[derive(Resource)]
pub struct OpeningsFetchTask {
    task: Task<ApiResult<OpeningsResponse>>,
    generation: u64,
}

// Blocking reqwest must not run on the pool threads themselves, so each
// task parks on a dedicated worker thread and joins it.
fn spawn_api_task<T, F>(base_url: String, call: F) -> Task<ApiResult<T>>
where
    T: Send + 'static,
    F: FnOnce(ApiClient) -> ApiResult<T> + Send + 'static,
{
    AsyncComputeTaskPool::get().spawn(async move {
        std::thread::spawn(move || call(ApiClient::new(base_url)))
            .join()
            .unwrap_or_else(|_| Err(ApiError::WorkerPanicked))
    })
}

pub fn spawn_board_fetch(
    commands: &mut Commands,
    config: &ServerConfig,
    generation: &mut RequestGeneration,
) {
    let task = spawn_api_task(config.base_url.clone(), |client| client.board_state(""));
    commands.insert_resource(BoardFetchTask {
        task,
        generation: generation.next(),
    });
}

pub fn spawn_move_request(
    commands: &mut Commands,
    config: &ServerConfig,
    generation: &mut RequestGeneration,
    from: SquareId,
    to: SquareId,
    promotion: Option<char>,
) {
    let from_name = from.to_algebraic();
    let to_name = to.to_algebraic();
    let promo = promotion.map(String::from).unwrap_or_default();
    info!("[MOVE] submitting {} -> {} ({:?})", from_name, to_name, promotion);

    let task = spawn_api_task(config.base_url.clone(), move |client| {
        client.submit_move(&from_name, &to_name, &promo)
    });
    commands.insert_resource(MoveTask {
        task,
        generation: generation.next(),
        from,
        to,
        promotion,
    });
}

pub fn spawn_control_request(
    commands: &mut Commands,
    config: &ServerConfig,
    generation: &mut RequestGeneration,
    action: ControlAction,
) {
    info!("[CONTROL] issuing {:?}", action);
    let task = spawn_api_task(config.base_url.clone(), move |client| match action {
        ControlAction::Reset => client.reset(),
        ControlAction::Undo => client.undo(),
        ControlAction::AiMove => client.ai_move(),
    });
    commands.insert_resource(ControlTask {
        task,
        generation: generation.next(),
        action,
    });
}

pub fn spawn_openings_fetch(
    commands: &mut Commands,
    config: &ServerConfig,
    generation: &mut RequestGeneration,
    pgn: String,
) {
    let task = spawn_api_task(config.base_url.clone(), move |client| {
        client.possible_openings(&pgn)
    });
    commands.insert_resource(OpeningsFetchTask {
        task,
        generation: generation.next(),
    });
}

/// Kick off the initial board fetch while the app is in `Loading`
pub fn begin_initial_board_fetch(
    mut commands: Commands,
    config: Res<ServerConfig>,
    mut generation: ResMut<RequestGeneration>,
) {
    spawn_board_fetch(&mut commands, &config, &mut generation);
}

/// Populate the openings panel once the board is up
pub fn begin_openings_fetch(
    mut commands: Commands,
    config: Res<ServerConfig>,
    mut generation: ResMut<RequestGeneration>,
    history: Res<MoveHistory>,
) {
    let pgn = history.lines.join("\n");
    spawn_openings_fetch(&mut commands, &config, &mut generation, pgn);
}

/// Apply every display region of a successful `/move` payload in one pass.
///
/// The board is updated by replaying the confirmed gesture locally; all
/// other regions come straight from the response. No follow-up fetch.
#[allow(clippy::too_many_arguments)]
pub fn apply_move_success(
    response: &MoveResponse,
    from: SquareId,
    to: SquareId,
    promotion: Option<char>,
    board: &mut BoardState,
    history: &mut MoveHistory,
    opening: &mut OpeningDisplay,
    last_move: &mut LastMoveDisplay,
    banner: &mut StatusBanner,
    recommendations: &mut RecommendationBoard,
    openings: &mut OpeningsBoard,
) {
    board.apply_move(from, to, promotion);
    history.replace(response.move_stack.clone());
    opening.name = response.opening_name.clone();
    last_move.text = response.last_move.clone();
    banner.set_from_status(response.game_status.as_deref().unwrap_or(""));
    recommendations.replace(response.recommendations.as_deref());
    openings.replace(response.possible_openings.clone().unwrap_or_default());
}

pub fn poll_board_fetch(
    mut commands: Commands,
    task: Option<ResMut<BoardFetchTask>>,
    generation: Res<RequestGeneration>,
    mut board: ResMut<BoardState>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(mut pending) = task else {
        return;
    };
    let Some(result) = future::block_on(future::poll_once(&mut pending.task)) else {
        return;
    };
    commands.remove_resource::<BoardFetchTask>();

    let stale = pending.generation < generation.latest();
    match result {
        Ok(grid) if !stale => board.load_grid(&grid),
        Ok(_) => debug!("[BOARD] discarding stale board fetch"),
        // Board keeps its prior visual state; no retry.
        Err(e) => error!("Error initializing board: {e}"),
    }

    if *state.get() == AppState::Loading {
        next_state.set(AppState::InGame);
    }
}

#[allow(clippy::too_many_arguments)]
pub fn poll_move_task(
    mut commands: Commands,
    task: Option<ResMut<MoveTask>>,
    generation: Res<RequestGeneration>,
    mut board: ResMut<BoardState>,
    mut history: ResMut<MoveHistory>,
    mut opening: ResMut<OpeningDisplay>,
    mut last_move: ResMut<LastMoveDisplay>,
    mut banner: ResMut<StatusBanner>,
    mut recommendations: ResMut<RecommendationBoard>,
    mut openings: ResMut<OpeningsBoard>,
    mut dialog: ResMut<ErrorDialog>,
) {
    let Some(mut pending) = task else {
        return;
    };
    let Some(result) = future::block_on(future::poll_once(&mut pending.task)) else {
        return;
    };
    commands.remove_resource::<MoveTask>();

    if pending.generation < generation.latest() {
        debug!("[MOVE] discarding stale move response");
        return;
    }

    match result {
        Ok(response) if response.is_success() => {
            info!(
                "[MOVE] accepted, opening: {:?}, status: {:?}",
                response.opening_name, response.game_status
            );
            apply_move_success(
                &response,
                pending.from,
                pending.to,
                pending.promotion,
                &mut board,
                &mut history,
                &mut opening,
                &mut last_move,
                &mut banner,
                &mut recommendations,
                &mut openings,
            );
        }
        Ok(response) => {
            let message = response
                .message
                .unwrap_or_else(|| "The move was rejected.".to_string());
            warn!("[MOVE] rejected: {message}");
            dialog.show(format!("Error! {message}"));
        }
        Err(e) => {
            error!("Error during move request: {e}");
            dialog.show("Something went wrong. Please try again later.");
        }
    }
}

pub fn poll_control_task(
    mut commands: Commands,
    task: Option<ResMut<ControlTask>>,
    mut generation: ResMut<RequestGeneration>,
    config: Res<ServerConfig>,
    mut history: ResMut<MoveHistory>,
    mut banner: ResMut<StatusBanner>,
    mut dialog: ResMut<ErrorDialog>,
) {
    let Some(mut pending) = task else {
        return;
    };
    let Some(result) = future::block_on(future::poll_once(&mut pending.task)) else {
        return;
    };
    commands.remove_resource::<ControlTask>();

    if pending.generation < generation.latest() {
        debug!("[CONTROL] discarding stale {:?} response", pending.action);
        return;
    }

    match pending.action {
        ControlAction::Reset => match result {
            Ok(response) if response.is_success() => {
                spawn_board_fetch(&mut commands, &config, &mut generation);
                history.clear();
                banner.text = "Game has been reset".to_string();
            }
            Ok(_) => dialog.show("Failed to reset the board"),
            Err(e) => error!("Error resetting board: {e}"),
        },
        // Undo is always optimistic: the server exposes no success flag,
        // any response re-renders.
        ControlAction::Undo => match result {
            Ok(response) => {
                spawn_board_fetch(&mut commands, &config, &mut generation);
                history.replace(response.move_stack.unwrap_or_default());
            }
            Err(e) => error!("Error undoing move: {e}"),
        },
        ControlAction::AiMove => match result {
            Ok(response) if response.is_success() => {
                spawn_board_fetch(&mut commands, &config, &mut generation);
                history.replace(response.move_stack.unwrap_or_default());
            }
            Ok(_) => dialog.show("AI Move Failed"),
            Err(e) => error!("Error during AI move: {e}"),
        },
    }
}

pub fn poll_openings_fetch(
    mut commands: Commands,
    task: Option<ResMut<OpeningsFetchTask>>,
    generation: Res<RequestGeneration>,
    mut openings: ResMut<OpeningsBoard>,
) {
    let Some(mut pending) = task else {
        return;
    };
    let Some(result) = future::block_on(future::poll_once(&mut pending.task)) else {
        return;
    };
    commands.remove_resource::<OpeningsFetchTask>();

    let stale = pending.generation < generation.latest();
    match result {
        Ok(response) if response.is_success() && !stale => {
            openings.replace(response.possible_openings);
        }
        Ok(response) if !stale => {
            warn!(
                "Error fetching possible openings: {}",
                response.message.as_deref().unwrap_or("unknown")
            );
        }
        Ok(_) => debug!("[OPENINGS] discarding stale openings response"),
        Err(e) => warn!("Error in openings fetch: {e}"),
    }
}
