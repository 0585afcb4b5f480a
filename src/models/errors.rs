use thiserror::Error;

/// Reasons a torpedo store refuses or fails a fire request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FireError {
    /// Requested zero torpedoes, or more than the store holds.
    #[error("cannot fire {requested} torpedoes, {available} available")]
    InvalidCount { requested: u32, available: u32 },
    /// The launcher jammed; nothing was expended.
    #[error("torpedo launcher jammed")]
    Jammed,
}

/// Configuration errors raised while reading the environment or CLI flags.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}")]
    InvalidNumber { var: String, value: String },
    #[error("failure rate {0} is outside 0.0..=1.0")]
    FailureRateOutOfRange(f64),
}

/// Errors surfaced by the interactive console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Type alias for Results using ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_count_message_names_both_counts() {
        let err = FireError::InvalidCount {
            requested: 3,
            available: 1,
        };
        assert_eq!(err.to_string(), "cannot fire 3 torpedoes, 1 available");
    }

    #[test]
    fn io_error_converts_into_console_error() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: ConsoleError = io.into();
        assert!(matches!(err, ConsoleError::Io(_)));
    }
}
