//! Game-card catalog: one row per player card

use serde::{Deserialize, Serialize};

use crate::db::JsonRow;
use crate::gateway::{Resource, ResourceGateway};

/// Typed view of a player card, for callers that want one.
///
/// Listings carry the raw rows; decode with [`crate::Listing::typed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCard {
    pub playerid: i64,
    pub playername: String,
    pub rating: i64,
    pub position: Option<String>,
    pub club: Option<String>,
}

/// Player cards, keyed by `playerid`.
pub struct Players;

impl Resource for Players {
    type Row = JsonRow;
    type Key = i64;

    const NAME: &'static str = "players";
    const DEFAULT_TABLE: &'static str = "fifa_players";
    const DEFAULT_KEY_COLUMN: &'static str = "playerid";
}

pub type PlayersGateway = ResourceGateway<Players>;
