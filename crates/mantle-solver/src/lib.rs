//! # mantle-solver
//!
//! Per-tick cloth simulation.
//!
//! ## Key Types
//!
//! - [`ClothSimulator`]: Transient borrow of a cloth: force integration
//!   followed by iterative constraint relaxation
//! - [`SimulatorConfig`]: Damping and relaxation pass count
//! - [`TickReport`]: What one tick did
//! - [`WindProperties`]: Derives the horizontal wind force for a frame

pub mod config;
pub mod simulator;
pub mod wind;

pub use config::SimulatorConfig;
pub use simulator::{ClothSimulator, TickReport};
pub use wind::WindProperties;
