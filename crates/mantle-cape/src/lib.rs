//! # mantle-cape
//!
//! A simulated cape attached to a moving character.
//!
//! Ties the cloth, solver, and mesh crates together the way a game
//! drives them: every frame the top row is re-pinned along the anchor
//! curve, wind and gravity are applied, the cloth is relaxed, and the
//! vertex grid is rebuilt from the new corners.
//!
//! ## Key Types
//!
//! - [`CapeModel`]: One cape's cloth, anchor, and renderable grid
//! - [`CapeSlot`]: Per-character equip/rebuild bookkeeping around a model
//! - [`CapeConfig`]: Serializable description of a cape
//! - [`PhysicalProperties`]: Drag, gravity, wind response, stretch slack
//! - [`Environment`]: Ambient wind and visual-effects clock
//! - [`Facing`]: Which way the wearer looks

pub mod config;
pub mod environment;
pub mod facing;
pub mod model;
pub mod slot;
pub mod validator;

pub use config::{CapeConfig, PhysicalProperties};
pub use environment::{Environment, FixedEnvironment};
pub use facing::Facing;
pub use model::CapeModel;
pub use slot::CapeSlot;
pub use validator::validate_config;
