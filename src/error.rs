use thiserror::Error;

pub type MotionResult<T> = Result<T, MotionError>;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("invalid numeric target on {element}: {raw:?}")]
    InvalidTarget { element: String, raw: Option<String> },

    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unknown node id: {0}")]
    UnknownNode(u32),

    #[error("host error: {0}")]
    Host(String),
}
