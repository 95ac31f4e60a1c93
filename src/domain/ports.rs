use crate::domain::model::{Assignment, Couple};
use crate::utils::error::Result;

/// Uniform randomness collaborator. Implementations must return an index in
/// `[0, n)` for any `n >= 1`; injectable so tests can script or seed draws.
pub trait RandomSource {
    fn pick_index(&mut self, n: usize) -> usize;
}

/// Byte-level storage port backing file sources and sinks.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn pairs_file(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn max_attempts(&self) -> Option<u64>;
}

/// The three stages of a draw run: read couples, compute the assignment,
/// hand the result to the output collaborator.
pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Couple>>;
    fn draw(&mut self, couples: Vec<Couple>) -> Result<Assignment>;
    fn emit(&self, assignment: &Assignment) -> Result<()>;
}
