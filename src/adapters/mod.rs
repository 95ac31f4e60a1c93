// Adapters layer: concrete implementations for external systems
// (filesystem storage, randomness).

pub mod random;
pub mod storage;

pub use random::{SeededRng, ThreadRngSource};
pub use storage::LocalStorage;
