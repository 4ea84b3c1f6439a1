//! Game plugin - view-model resources and request systems
//!
//! Registers every resource the panels render from, the promotion message,
//! and the request spawn/poll systems. UI systems live in
//! [`crate::ui::UiPlugin`]; both plugins are required.

use super::board::BoardState;
use super::promotion::{apply_promotion_choice, PendingPromotion, PromotionSelected};
use super::requests::{
    begin_initial_board_fetch, begin_openings_fetch, poll_board_fetch, poll_control_task,
    poll_move_task, poll_openings_fetch, RequestGeneration,
};
use super::selection::Selection;
use super::session::{
    ErrorDialog, LastMoveDisplay, MoveHistory, OpeningDisplay, OpeningsBoard, RecommendationBoard,
    StatusBanner,
};
use crate::core::{AppState, ServerConfig};
use bevy::prelude::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ServerConfig>()
            .init_resource::<BoardState>()
            .init_resource::<Selection>()
            .init_resource::<MoveHistory>()
            .init_resource::<OpeningDisplay>()
            .init_resource::<LastMoveDisplay>()
            .init_resource::<StatusBanner>()
            .init_resource::<RecommendationBoard>()
            .init_resource::<OpeningsBoard>()
            .init_resource::<PendingPromotion>()
            .init_resource::<RequestGeneration>()
            .init_resource::<ErrorDialog>();

        app.add_message::<PromotionSelected>();

        app.add_systems(OnEnter(AppState::Loading), begin_initial_board_fetch)
            .add_systems(OnEnter(AppState::InGame), begin_openings_fetch)
            .add_systems(
                Update,
                (
                    poll_board_fetch,
                    poll_move_task,
                    poll_control_task,
                    poll_openings_fetch,
                    apply_promotion_choice,
                ),
            );
    }
}
