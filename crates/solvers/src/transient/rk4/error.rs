use std::fmt;

use thiserror::Error;

/// One of the four derivative samples taken during an RK4 step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    K1,
    K2,
    K3,
    K4,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::K1 => "K1",
            Stage::K2 => "K2",
            Stage::K3 => "K3",
            Stage::K4 => "K4",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during RK4 integration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("state vector has length {found}, engine expects {expected}")]
    StateLength { expected: usize, found: usize },

    #[error("derivative sample {stage} has length {found}, engine expects {expected}")]
    DerivativeLength {
        stage: Stage,
        expected: usize,
        found: usize,
    },
}
