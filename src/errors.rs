use crate::command::Command;
use crate::controller::SupplyMode;
use thiserror::Error;

/// Failures local to the piece queue.
///
/// Both variants are recoverable and leave the queue untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("piece queue is empty")]
    Empty,

    #[error("piece queue is full (capacity {capacity})")]
    Full { capacity: usize },
}

/// Failures local to the reserve stack.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("reserve stack is empty")]
    Empty,

    #[error("reserve stack is full (capacity {capacity})")]
    Full { capacity: usize },
}

/// Everything a dispatched command can fail with.
///
/// Container errors bubble up via `#[from]`; the controller never terminates
/// on any of these, it reports them and leaves all state unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error(transparent)]
    Stack(#[from] StackError),

    #[error("{command} is not available in {mode} mode")]
    WrongMode { command: Command, mode: SupplyMode },

    #[error("invalid menu choice: {0:?}")]
    InvalidCommand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_errors_convert() {
        let err: ControllerError = QueueError::Empty.into();
        assert_eq!(err, ControllerError::Queue(QueueError::Empty));

        let err: ControllerError = StackError::Full { capacity: 3 }.into();
        assert_eq!(err, ControllerError::Stack(StackError::Full { capacity: 3 }));
    }

    #[test]
    fn test_messages() {
        assert_eq!(QueueError::Empty.to_string(), "piece queue is empty");
        assert_eq!(
            StackError::Full { capacity: 3 }.to_string(),
            "reserve stack is full (capacity 3)"
        );
        assert_eq!(
            ControllerError::InvalidCommand("9".into()).to_string(),
            "invalid menu choice: \"9\""
        );
    }
}
