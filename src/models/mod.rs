pub mod player;
pub mod season;
pub mod shot;

pub use player::{Player, Roster};
pub use season::SeasonId;
pub use shot::{CareerRecord, ShotEvent, ShotOutcome};
