mod cell;
mod generation;
mod patterns;
mod rules;

pub use cell::Cell;
pub use generation::Generation;
pub use patterns::{Pattern, presets};
pub use rules::{ConwayRule, Rule, default_rule};
