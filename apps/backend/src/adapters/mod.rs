//! Repository implementations.

pub mod games_memory;

pub use games_memory::InMemoryGameRepo;
