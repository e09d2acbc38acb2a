use {
    std::{
        fmt,
        str::FromStr,
    },
    enum_iterator::Sequence,
    serde::{
        Deserialize,
        Serialize,
    },
    serde_plain::{
        derive_deserialize_from_fromstr,
        derive_serialize_from_display,
    },
    crate::item::Item,
};

/// How reachable a location is given the current items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Every required item is held.
    Available,
    /// Reachable, but an item that would make it safe or certain is missing, or the item can only be seen.
    Possible,
    /// A hard requirement is missing.
    Unavailable,
    /// Marked as done by the player. Never returned by a location's own logic.
    Opened,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Possible => "possible",
            Self::Unavailable => "unavailable",
            Self::Opened => "opened",
        }
    }

    /// Shorthand for the common `if cond { Available } else { Possible }` pattern.
    pub fn available_if(cond: bool) -> Self {
        if cond { Self::Available } else { Self::Possible }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// The medallion a dungeon entrance has been observed to require.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
#[repr(u8)]
pub enum Medallion {
    #[default]
    Unknown = 0,
    Bombos = 1,
    Ether = 2,
    Quake = 3,
}

impl Medallion {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Unknown),
            1 => Some(Self::Bombos),
            2 => Some(Self::Ether),
            3 => Some(Self::Quake),
            _ => None,
        }
    }

    pub fn to_u8(&self) -> u8 { *self as u8 }

    /// The next assignment in display order, wrapping from Quake back to unknown.
    pub fn next(&self) -> Self {
        Self::from_u8((self.to_u8() + 1) % 4).expect("medallion values are taken mod 4")
    }

    /// The item the player must hold to open a dungeon assigned this medallion.
    pub fn item(&self) -> Option<Item> {
        match self {
            Self::Unknown => None,
            Self::Bombos => Some(Item::Bombos),
            Self::Ether => Some(Item::Ether),
            Self::Quake => Some(Item::Quake),
        }
    }

    /// The image shown for a medallion assignment slot.
    pub fn asset(&self) -> String {
        format!("medallion{}.png", self.to_u8())
    }
}

impl FromStr for Medallion {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        Ok(match s {
            "unknown" => Self::Unknown,
            "bombos" => Self::Bombos,
            "ether" => Self::Ether,
            "quake" => Self::Quake,
            _ => return Err(()),
        })
    }
}

impl fmt::Display for Medallion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Bombos => write!(f, "bombos"),
            Self::Ether => write!(f, "ether"),
            Self::Quake => write!(f, "quake"),
        }
    }
}

derive_deserialize_from_fromstr!(Medallion, "medallion");
derive_serialize_from_display!(Medallion);

/// What a dungeon's boss drops, as marked by the player. Stored as the level of the dungeon's `reward{n}` item.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
#[repr(u8)]
pub enum DungeonReward {
    #[default]
    Unknown = 0,
    Crystal = 1,
    /// Crystal 5 or 6, the two required for the Pyramid Fairy.
    RedCrystal = 2,
    /// The blue or red pendant.
    Pendant = 3,
    /// The Pendant of Courage, required for Sahasrahla's reward.
    GreenPendant = 4,
}

impl DungeonReward {
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Unknown),
            1 => Some(Self::Crystal),
            2 => Some(Self::RedCrystal),
            3 => Some(Self::Pendant),
            4 => Some(Self::GreenPendant),
            _ => None,
        }
    }

    pub fn is_pendant(&self) -> bool {
        matches!(self, Self::Pendant | Self::GreenPendant)
    }
}
