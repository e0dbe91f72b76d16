//! Player identity resolution.
//!
//! Registered users and guests are numbered from separate id spaces. Everything
//! downstream of this module works with a single opaque [`PlayerKey`] so the
//! scoring code never has to care which kind of player it is looking at.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    Registered,
    Guest,
}

impl PlayerKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PlayerKind::Registered => "registered",
            PlayerKind::Guest => "guest",
        }
    }
}

/// Reference to a participant as stored by the identity layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerRef {
    Registered { id: i64 },
    Guest { id: i64 },
}

impl PlayerRef {
    pub fn kind(&self) -> PlayerKind {
        match self {
            PlayerRef::Registered { .. } => PlayerKind::Registered,
            PlayerRef::Guest { .. } => PlayerKind::Guest,
        }
    }

    pub fn key(&self) -> PlayerKey {
        match *self {
            PlayerRef::Registered { id } => PlayerKey {
                kind: PlayerKind::Registered,
                id,
            },
            PlayerRef::Guest { id } => PlayerKey {
                kind: PlayerKind::Guest,
                id,
            },
        }
    }

    /// Split into the nullable `(user_id, guest_id)` pair used by stored score rows.
    pub fn to_id_pair(&self) -> (Option<i64>, Option<i64>) {
        match *self {
            PlayerRef::Registered { id } => (Some(id), None),
            PlayerRef::Guest { id } => (None, Some(id)),
        }
    }
}

/// Engine-local player key.
///
/// Ordered Registered before Guest, then by ascending id. Displayed as
/// `registered:<id>` or `guest:<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerKey {
    kind: PlayerKind,
    id: i64,
}

impl PlayerKey {
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }
}

impl From<PlayerRef> for PlayerKey {
    fn from(player: PlayerRef) -> Self {
        player.key()
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePlayerKeyError(String);

impl fmt::Display for ParsePlayerKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid player key: {}", self.0)
    }
}

impl std::error::Error for ParsePlayerKeyError {}

impl FromStr for PlayerKey {
    type Err = ParsePlayerKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, id) = s
            .split_once(':')
            .ok_or_else(|| ParsePlayerKeyError(s.to_string()))?;
        let kind = match kind {
            "registered" => PlayerKind::Registered,
            "guest" => PlayerKind::Guest,
            _ => return Err(ParsePlayerKeyError(s.to_string())),
        };
        let id = id
            .parse::<i64>()
            .map_err(|_| ParsePlayerKeyError(s.to_string()))?;
        Ok(PlayerKey { kind, id })
    }
}

impl TryFrom<String> for PlayerKey {
    type Error = ParsePlayerKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PlayerKey> for String {
    fn from(key: PlayerKey) -> Self {
        key.to_string()
    }
}

/// Participant in a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(flatten)]
    pub player: PlayerRef,
    pub display_name: String,
}

impl Player {
    pub fn registered(id: i64, display_name: impl Into<String>) -> Self {
        Self {
            player: PlayerRef::Registered { id },
            display_name: display_name.into(),
        }
    }

    pub fn guest(id: i64, display_name: impl Into<String>) -> Self {
        Self {
            player: PlayerRef::Guest { id },
            display_name: display_name.into(),
        }
    }

    pub fn key(&self) -> PlayerKey {
        self.player.key()
    }

    pub fn kind(&self) -> PlayerKind {
        self.player.kind()
    }
}

/// Why a stored score row could not be tied to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityAnomaly {
    /// Neither a user id nor a guest id was recorded.
    Unreferenced,
    /// Both ids were recorded, so the row names two different players.
    Ambiguous { user_id: i64, guest_id: i64 },
}

/// Resolve the nullable id pair on a stored score row into a tagged reference.
pub fn resolve_score_ref(
    user_id: Option<i64>,
    guest_id: Option<i64>,
) -> Result<PlayerRef, IdentityAnomaly> {
    match (user_id, guest_id) {
        (Some(id), None) => Ok(PlayerRef::Registered { id }),
        (None, Some(id)) => Ok(PlayerRef::Guest { id }),
        (None, None) => Err(IdentityAnomaly::Unreferenced),
        (Some(user_id), Some(guest_id)) => Err(IdentityAnomaly::Ambiguous { user_id, guest_id }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInfo {
    pub display_name: String,
    pub kind: PlayerKind,
}

/// Resolved `key -> {display_name, kind}` map, in roster order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<(PlayerKey, PlayerInfo)>,
    positions: HashMap<PlayerKey, usize>,
}

impl Roster {
    /// Resolve a game's player list. A player listed twice keeps its first entry.
    pub fn resolve(players: &[Player]) -> Self {
        let mut roster = Roster {
            entries: Vec::with_capacity(players.len()),
            positions: HashMap::with_capacity(players.len()),
        };
        for player in players {
            let key = player.key();
            if roster.positions.contains_key(&key) {
                continue;
            }
            roster.positions.insert(key, roster.entries.len());
            roster.entries.push((
                key,
                PlayerInfo {
                    display_name: player.display_name.clone(),
                    kind: player.kind(),
                },
            ));
        }
        roster
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &PlayerKey) -> bool {
        self.positions.contains_key(key)
    }

    /// Roster position of a player, if known.
    pub fn position(&self, key: &PlayerKey) -> Option<usize> {
        self.positions.get(key).copied()
    }

    pub fn get(&self, key: &PlayerKey) -> Option<&PlayerInfo> {
        self.position(key).map(|idx| &self.entries[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerKey, &PlayerInfo)> {
        self.entries.iter().map(|(key, info)| (key, info))
    }
}
