//! Resource definitions served by [`crate::gateway::ResourceGateway`]

pub mod players;
pub mod titles;

pub use players::{PlayerCard, Players, PlayersGateway};
pub use titles::{Title, Titles, TitlesGateway};
