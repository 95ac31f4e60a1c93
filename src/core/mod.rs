pub mod draw;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{Assignment, Couple, Pairing, Participant};
pub use crate::domain::ports::{ConfigProvider, Pipeline, RandomSource, Storage};
pub use crate::utils::error::Result;
