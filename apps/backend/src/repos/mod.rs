//! Repository seams consumed by the services layer.

pub mod games;

pub use games::GameRepo;
