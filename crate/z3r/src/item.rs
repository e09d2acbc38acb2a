use {
    std::{
        fmt,
        str::FromStr,
    },
    enum_iterator::Sequence,
    serde_plain::{
        derive_deserialize_from_fromstr,
        derive_serialize_from_display,
    },
    crate::dungeon::Dungeon,
};

/// Layout cells holding this key (or the empty string) are placeholders, not items.
pub const BLANK: &str = "blank";

/// An item the tracker knows about. Dungeon-specific families carry their dungeon.
///
/// The string form (`Display`/`FromStr`) is the key used in layouts and image file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum Item {
    Tunic,
    Sword,
    Shield,
    MoonPearl,
    Bow,
    Boomerang,
    Hookshot,
    Mushroom,
    Powder,
    FireRod,
    IceRod,
    Bombos,
    Ether,
    Quake,
    Lantern,
    Hammer,
    Shovel,
    Net,
    Book,
    Bottle,
    Somaria,
    Byrna,
    Cape,
    Mirror,
    Boots,
    Glove,
    Flippers,
    Flute,
    Agahnim,
    /// 1 while the boss is alive, 2 once beaten.
    Boss(Dungeon),
    /// Items still left in the dungeon. Counts down.
    Chest(Dungeon),
    /// A [`DungeonReward`](crate::DungeonReward) level.
    Reward(Dungeon),
    BigKey(Dungeon),
}

/// How an item's value behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Held or not held, stored as 0 or 1.
    Boolean,
    /// A bounded counter with inclusive bounds.
    Level {
        min: u8,
        max: u8,
        /// Counts down when cycled instead of up.
        countdown: bool,
    },
}

impl ItemKind {
    pub fn min(&self) -> u8 {
        match self {
            Self::Boolean => 0,
            Self::Level { min, .. } => *min,
        }
    }

    pub fn max(&self) -> u8 {
        match self {
            Self::Boolean => 1,
            Self::Level { max, .. } => *max,
        }
    }

    pub fn contains(&self, value: u8) -> bool {
        (self.min()..=self.max()).contains(&value)
    }
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        const fn level(min: u8, max: u8) -> ItemKind { ItemKind::Level { min, max, countdown: false } }

        match self {
            Self::Tunic => level(1, 3),
            Self::Sword => level(0, 4),
            Self::Shield => level(0, 3),
            Self::Bow => level(0, 3),
            Self::Boomerang => level(0, 3),
            Self::Glove => level(0, 2),
            Self::Bottle => level(0, 4),
            Self::Boss(_) => level(1, 2),
            Self::Chest(dungeon) => ItemKind::Level { min: 0, max: dungeon.chest_count(), countdown: true },
            Self::Reward(_) => level(0, 4),
            Self::MoonPearl | Self::Hookshot | Self::Mushroom | Self::Powder | Self::FireRod | Self::IceRod
            | Self::Bombos | Self::Ether | Self::Quake | Self::Lantern | Self::Hammer | Self::Shovel | Self::Net
            | Self::Book | Self::Somaria | Self::Byrna | Self::Cape | Self::Mirror | Self::Boots | Self::Flippers
            | Self::Flute | Self::Agahnim | Self::BigKey(_) => ItemKind::Boolean,
        }
    }

    /// The value this item has on a fresh tracker.
    pub fn initial_value(&self) -> u8 {
        match self {
            Self::Chest(dungeon) => dungeon.chest_count(),
            _ => self.kind().min(),
        }
    }

    pub fn is_countdown(&self) -> bool {
        matches!(self.kind(), ItemKind::Level { countdown: true, .. })
    }

    /// The image shown for this item at the given value, or `None` if a boolean item isn't held.
    ///
    /// Level items use `{key}{level}.png`, boolean items `{key}.png`.
    pub fn asset(&self, value: u8) -> Option<String> {
        match self.kind() {
            ItemKind::Boolean => (value > 0).then(|| format!("{}.png", self)),
            ItemKind::Level { .. } => Some(format!("{}{}.png", self, value)),
        }
    }

    /// Parses a layout cell. Empty and [`BLANK`] cells, as well as unknown keys, yield `None`.
    pub fn from_cell(cell: &str) -> Option<Self> {
        if cell.is_empty() || cell == BLANK { return None }
        cell.parse().ok()
    }
}

impl FromStr for Item {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        Ok(match s {
            "tunic" => Self::Tunic,
            "sword" => Self::Sword,
            "shield" => Self::Shield,
            "moonpearl" => Self::MoonPearl,
            "bow" => Self::Bow,
            "boomerang" => Self::Boomerang,
            "hookshot" => Self::Hookshot,
            "mushroom" => Self::Mushroom,
            "powder" => Self::Powder,
            "firerod" => Self::FireRod,
            "icerod" => Self::IceRod,
            "bombos" => Self::Bombos,
            "ether" => Self::Ether,
            "quake" => Self::Quake,
            "lantern" => Self::Lantern,
            "hammer" => Self::Hammer,
            "shovel" => Self::Shovel,
            "net" => Self::Net,
            "book" => Self::Book,
            "bottle" => Self::Bottle,
            "somaria" => Self::Somaria,
            "byrna" => Self::Byrna,
            "cape" => Self::Cape,
            "mirror" => Self::Mirror,
            "boots" => Self::Boots,
            "glove" => Self::Glove,
            "flippers" => Self::Flippers,
            "flute" => Self::Flute,
            "agahnim" => Self::Agahnim,
            _ => {
                let (family, id): (fn(Dungeon) -> Self, _) = if let Some(id) = s.strip_prefix("boss") {
                    (Self::Boss, id)
                } else if let Some(id) = s.strip_prefix("chest") {
                    (Self::Chest, id)
                } else if let Some(id) = s.strip_prefix("reward") {
                    (Self::Reward, id)
                } else if let Some(id) = s.strip_prefix("bigkey") {
                    (Self::BigKey, id)
                } else {
                    return Err(())
                };
                // only a single digit, so that e.g. "boss01" doesn't alias "boss1"
                if id.len() != 1 { return Err(()) }
                family(Dungeon::from_id(id.parse().map_err(|_| ())?).ok_or(())?)
            }
        })
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tunic => write!(f, "tunic"),
            Self::Sword => write!(f, "sword"),
            Self::Shield => write!(f, "shield"),
            Self::MoonPearl => write!(f, "moonpearl"),
            Self::Bow => write!(f, "bow"),
            Self::Boomerang => write!(f, "boomerang"),
            Self::Hookshot => write!(f, "hookshot"),
            Self::Mushroom => write!(f, "mushroom"),
            Self::Powder => write!(f, "powder"),
            Self::FireRod => write!(f, "firerod"),
            Self::IceRod => write!(f, "icerod"),
            Self::Bombos => write!(f, "bombos"),
            Self::Ether => write!(f, "ether"),
            Self::Quake => write!(f, "quake"),
            Self::Lantern => write!(f, "lantern"),
            Self::Hammer => write!(f, "hammer"),
            Self::Shovel => write!(f, "shovel"),
            Self::Net => write!(f, "net"),
            Self::Book => write!(f, "book"),
            Self::Bottle => write!(f, "bottle"),
            Self::Somaria => write!(f, "somaria"),
            Self::Byrna => write!(f, "byrna"),
            Self::Cape => write!(f, "cape"),
            Self::Mirror => write!(f, "mirror"),
            Self::Boots => write!(f, "boots"),
            Self::Glove => write!(f, "glove"),
            Self::Flippers => write!(f, "flippers"),
            Self::Flute => write!(f, "flute"),
            Self::Agahnim => write!(f, "agahnim"),
            Self::Boss(dungeon) => write!(f, "boss{}", dungeon.id()),
            Self::Chest(dungeon) => write!(f, "chest{}", dungeon.id()),
            Self::Reward(dungeon) => write!(f, "reward{}", dungeon.id()),
            Self::BigKey(dungeon) => write!(f, "bigkey{}", dungeon.id()),
        }
    }
}

derive_deserialize_from_fromstr!(Item, "item key");
derive_serialize_from_display!(Item);
