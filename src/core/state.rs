use bevy::prelude::*;

/// Top-level application state.
///
/// The app starts in `Loading` while the initial board state is fetched
/// from the server, then moves to `InGame` whether or not that fetch
/// succeeded, so the controls stay usable against a flaky server.
#[derive(Clone, Copy, Resource, PartialEq, Eq, Hash, Debug, Default, States)]
pub enum AppState {
    #[default]
    Loading,
    InGame,
}

#[allow(dead_code)] // Useful for debugging state transitions
pub fn debug_current_appstate(state: Res<State<AppState>>) {
    debug!("current state: {:?}", state.get());
}
