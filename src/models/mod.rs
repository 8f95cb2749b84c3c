//! Core data models for match analysis.

mod analysis;
mod ids;
mod match_list;
mod match_record;
mod player;
mod team;

pub use analysis::*;
pub use ids::*;
pub use match_list::*;
pub use match_record::*;
pub use player::*;
pub use team::*;
