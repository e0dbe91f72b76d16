//! Engine configuration.

pub mod rules;

pub use rules::RulesConfig;
