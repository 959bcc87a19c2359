//! Error types for building a simulation.

use core::fmt;

/// Errors reported while constructing or addressing a soft body.
///
/// The step itself never fails; these only guard configuration and checked
/// grid access.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Both subdivision counts must be at least 1.
    InvalidGridDimensions,
    /// Width and height must be positive and finite.
    InvalidExtent,
    /// Mass must be positive and finite.
    InvalidMass,
    /// Spring coefficient and dampening must be non-negative and finite.
    InvalidCoefficient,
    /// Physics step and frame clamp must be positive and finite.
    InvalidTimestep,
    /// Grid cell is out of bounds.
    CellOutOfBounds { row: usize, col: usize, rows: usize, cols: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidGridDimensions => {
                write!(f, "grid needs at least one subdivision on each axis")
            }
            PhysicsError::InvalidExtent => write!(f, "width and height must be positive and finite"),
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidCoefficient => {
                write!(f, "spring coefficient and dampening must be non-negative and finite")
            }
            PhysicsError::InvalidTimestep => {
                write!(f, "physics step and frame clamp must be positive and finite")
            }
            PhysicsError::CellOutOfBounds { row, col, rows, cols } => {
                write!(f, "cell ({}, {}) out of bounds (grid: {}x{})", row, col, rows, cols)
            }
        }
    }
}
