//! Mass-spring cloth simulation in 2D.
//!
//! `mass_spring` models a cloth as a grid of point masses joined by
//! structural springs to their horizontal and vertical neighbours. Each step
//! applies Hooke's law plus velocity damping, then advances every mass with
//! explicit second-order integration.
//!
//! # Features
//!
//! - **Two-phase step**: every force is computed from pre-step positions
//!   before any body moves
//! - **Boundary drag**: an external force on the first row, built from
//!   button state by [`DragInput`]
//! - **Fixed timestep**: [`FixedTimestep`] turns frame deltas into a whole
//!   number of constant-size steps, clamped against slow frames
//! - **Display mesh**: [`LatticeMesh`] receives positions row-major next to
//!   a quad index buffer built once
//! - **Observable**: monitor step phases via the [`StepObserver`] trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ```
//! use mass_spring::{DragInput, NoOpStepObserver, Simulation, SimulationConfig, SoftBodyConfig, Vec3};
//!
//! let mut sim: Simulation<Vec3<f32>> =
//!     Simulation::new(&SoftBodyConfig::default(), &SimulationConfig::default()).unwrap();
//! let steps = sim.update(1.0 / 60.0, DragInput::new(true, false, false), &mut NoOpStepObserver);
//! assert_eq!(steps, 1);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod rigid_body;
pub mod spring;
pub mod soft_body;
pub mod mesh;
pub mod input;
pub mod timestep;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Planar, Vec2, Vec3};
pub use rigid_body::RigidBody;
pub use spring::{Axis, SpringParams};
pub use soft_body::SoftBody;
pub use mesh::{LatticeMesh, NoOpSink, PositionSink};
pub use input::DragInput;
pub use timestep::FixedTimestep;
pub use simulation::Simulation;
pub use config::{SimulationConfig, SoftBodyConfig};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
