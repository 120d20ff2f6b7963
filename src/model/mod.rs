mod ban;
mod common;
mod matches;
mod player;
mod season;
mod team;

pub use ban::*;
pub use common::*;
pub use matches::*;
pub use player::*;
pub use season::*;
pub use team::*;
