use std::fmt;

use serde::{Deserialize, Serialize};

/// Anything a caretaker can do to the bunny through `/feed` or `/play`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Carrot,
    Pellet,
    Pat,
    Toy,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Carrot => write!(f, "carrot"),
            Self::Pellet => write!(f, "pellet"),
            Self::Pat => write!(f, "pat"),
            Self::Toy => write!(f, "toy"),
        }
    }
}

impl ActionKind {
    pub const fn as_feed(self) -> Option<FeedKind> {
        match self {
            Self::Carrot => Some(FeedKind::Carrot),
            Self::Pellet => Some(FeedKind::Pellet),
            Self::Pat | Self::Toy => None,
        }
    }

    pub const fn as_play(self) -> Option<PlayKind> {
        match self {
            Self::Pat => Some(PlayKind::Pat),
            Self::Toy => Some(PlayKind::Toy),
            Self::Carrot | Self::Pellet => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Carrot,
    Pellet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayKind {
    Pat,
    Toy,
}

/// Request body for `/feed` and `/play`
///
/// `kind` may be omitted or null; the handler reports that as an invalid
/// kind rather than a malformed request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Action {
    #[serde(default)]
    pub kind: Option<ActionKind>,
}
