//! Construction-time configuration for the cloth and its driver.

use crate::error::PhysicsError;
use crate::float::Float;

/// Shape and spring parameters of a soft body.
///
/// # Builder Pattern
/// ```
/// use mass_spring::config::SoftBodyConfig;
///
/// let config: SoftBodyConfig<f32> = SoftBodyConfig::new()
///     .with_extent(1.0, 1.0)
///     .with_subdivisions(10, 10)
///     .with_coefficient(25.0)
///     .with_dampening(0.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoftBodyConfig<F: Float> {
    /// World-space extent along X. Default: 1.0.
    pub width: F,
    /// World-space extent along Y. Default: 1.0.
    pub height: F,
    /// Columns of point masses. Default: 10.
    pub subdivisions_x: usize,
    /// Rows of point masses. Default: 10.
    pub subdivisions_y: usize,
    /// Hooke's constant shared by every spring. Default: 25.0.
    pub coefficient: F,
    /// Velocity damping constant shared by every spring. Default: 0.5.
    pub dampening: F,
    /// Mass of each point. Default: 1.0.
    pub body_mass: F,
}

impl<F: Float> SoftBodyConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SoftBodyConfig {
            width: F::one(),
            height: F::one(),
            subdivisions_x: 10,
            subdivisions_y: 10,
            coefficient: F::from_f32(25.0),
            dampening: F::from_f32(0.5),
            body_mass: F::one(),
        }
    }

    pub fn with_extent(mut self, width: F, height: F) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the grid resolution: `x` columns, `y` rows.
    pub fn with_subdivisions(mut self, x: usize, y: usize) -> Self {
        self.subdivisions_x = x;
        self.subdivisions_y = y;
        self
    }

    pub fn with_coefficient(mut self, coefficient: F) -> Self {
        self.coefficient = coefficient;
        self
    }

    pub fn with_dampening(mut self, dampening: F) -> Self {
        self.dampening = dampening;
        self
    }

    pub fn with_body_mass(mut self, mass: F) -> Self {
        self.body_mass = mass;
        self
    }

    /// Check every field; the first problem found is returned.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.subdivisions_x == 0 || self.subdivisions_y == 0 {
            return Err(PhysicsError::InvalidGridDimensions);
        }
        if !self.width.is_positive_finite() || !self.height.is_positive_finite() {
            return Err(PhysicsError::InvalidExtent);
        }
        if !self.body_mass.is_positive_finite() {
            return Err(PhysicsError::InvalidMass);
        }
        let non_negative = |v: F| v.is_finite() && v >= F::zero();
        if !non_negative(self.coefficient) || !non_negative(self.dampening) {
            return Err(PhysicsError::InvalidCoefficient);
        }
        Ok(())
    }
}

impl<F: Float> Default for SoftBodyConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-step driver and input parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig<F: Float> {
    /// Constant dt handed to every physics step. Default: 0.012.
    pub physics_step: F,
    /// Upper bound on the time folded into the accumulator per update. Default: 0.25.
    pub max_frame_time: F,
    /// Magnitude of the drag force applied to the first row. Default: 2.0.
    pub drag_magnitude: F,
}

impl<F: Float> SimulationConfig<F> {
    pub fn new() -> Self {
        SimulationConfig {
            physics_step: F::from_f32(0.012),
            max_frame_time: F::from_f32(0.25),
            drag_magnitude: F::from_f32(2.0),
        }
    }

    pub fn with_physics_step(mut self, dt: F) -> Self {
        self.physics_step = dt;
        self
    }

    pub fn with_max_frame_time(mut self, max: F) -> Self {
        self.max_frame_time = max;
        self
    }

    pub fn with_drag_magnitude(mut self, magnitude: F) -> Self {
        self.drag_magnitude = magnitude;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.physics_step.is_positive_finite() || !self.max_frame_time.is_positive_finite() {
            return Err(PhysicsError::InvalidTimestep);
        }
        Ok(())
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
