use thiserror::Error;

/// Grid axis named in a dimension error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "width"),
            Axis::Y => write!(f, "height"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{axis} must be at least 2 samples, got {value}")]
    InvalidDimension { axis: Axis, value: u32 },

    #[error("cannot allocate an iteration-count field of {cells} cells")]
    AllocationFailure { cells: u128 },

    #[error("invalid region [{xmin}, {xmax}] x [{ymin}, {ymax}]: bounds must be finite and increasing")]
    InvalidRegion {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
