use crate::engine::EngineState;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine disabled by configuration")]
    Disabled,
    #[error("reduced motion requested; not animating")]
    ReducedMotion,
    #[error("cannot start from state {0:?}")]
    NotStartable(EngineState),
    #[error("surface: {0}")]
    Surface(#[from] SurfaceError),
    #[error("host: {0}")]
    Host(#[from] HostError),
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("no drawable surface available")]
    Unavailable,
    #[error("surface already hosts a running sky")]
    Occupied,
    #[error("dom call failed: {0}")]
    Dom(String),
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("frame callback not installed")]
    NotReady,
    #[error("{op} failed: {detail}")]
    Call { op: &'static str, detail: String },
}

impl HostError {
    pub fn call(op: &'static str, detail: impl Into<String>) -> Self {
        HostError::Call {
            op,
            detail: detail.into(),
        }
    }
}
