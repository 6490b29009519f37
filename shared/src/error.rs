use std::fmt;

use crate::constants::{EMPTY_PRIZE_LIST_ERROR, PRIZE_NOT_FOUND_ERROR, SPIN_IN_PROGRESS_ERROR};

/// Everything that can go wrong while building or driving a wheel.
///
/// `EmptyPrizeList`, `DuplicatePrizeId`, `InvalidPrize` and `InvalidConfig`
/// are construction-time failures. `PrizeNotFound` and `InvalidSectorIndex`
/// reject a single spin and leave the wheel untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelError {
    EmptyPrizeList,
    DuplicatePrizeId(String),
    InvalidPrize { id: String, reason: String },
    PrizeNotFound(String),
    InvalidSectorIndex { index: usize, count: usize },
    SpinInProgress,
    InvalidConfig(String),
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelError::EmptyPrizeList => write!(f, "{}", EMPTY_PRIZE_LIST_ERROR),
            WheelError::DuplicatePrizeId(id) => write!(f, "Duplicate prize id: {}", id),
            WheelError::InvalidPrize { id, reason } => {
                write!(f, "Invalid prize '{}': {}", id, reason)
            }
            WheelError::PrizeNotFound(id) => write!(f, "{}: {}", PRIZE_NOT_FOUND_ERROR, id),
            WheelError::InvalidSectorIndex { index, count } => {
                write!(f, "Sector index {} is out of range for {} sectors", index, count)
            }
            WheelError::SpinInProgress => write!(f, "{}", SPIN_IN_PROGRESS_ERROR),
            WheelError::InvalidConfig(reason) => write!(f, "Invalid wheel config: {}", reason),
        }
    }
}

impl std::error::Error for WheelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = WheelError::PrizeNotFound("jackpot".to_string());
        assert_eq!(err.to_string(), "Couldn't find prize id: jackpot");

        let err = WheelError::InvalidSectorIndex { index: 9, count: 8 };
        assert!(err.to_string().contains("9"));
        assert!(err.to_string().contains("8 sectors"));
    }
}
