pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{LocalStorage, SeededRng, ThreadRngSource};
pub use crate::config::{CliConfig, Settings, TomlConfig};
pub use crate::core::draw::{run_draw, DrawRunner};
pub use crate::core::engine::AssignmentEngine;
pub use crate::core::pipeline::SantaPipeline;
pub use crate::domain::model::{Assignment, Couple, Pairing, Participant};
pub use crate::utils::error::{Result, SantaError};
