pub type RollinResult<T> = Result<T, RollinError>;

#[derive(thiserror::Error, Debug)]
pub enum RollinError {
    #[error("invalid argument: {0}")]
    Argument(String),

    #[error("invalid input: {0}")]
    Input(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RollinError {
    pub fn argument(msg: impl Into<String>) -> Self {
        Self::Argument(msg.into())
    }

    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
