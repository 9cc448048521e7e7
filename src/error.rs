//! Fatal configuration and programming errors
//!
//! The simulation itself never fails: everything here is raised at
//! construction time or when the driver is asked for a state it cannot run.

use thiserror::Error;

use crate::states::StateId;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown state name: {0:?}")]
    UnknownState(String),

    #[error("state {0} is not registered with the game")]
    StateNotRegistered(StateId),

    #[error("state {0} asked to resume but no suspended state is waiting")]
    NothingToResume(StateId),

    #[error("invalid {what} size {width}x{height}")]
    InvalidGeometry {
        what: &'static str,
        width: f32,
        height: f32,
    },

    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    #[error("could not read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse settings: {0}")]
    Json(#[from] serde_json::Error),
}
