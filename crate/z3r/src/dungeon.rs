use {
    std::{
        fmt,
        ops::{
            Index,
            IndexMut,
        },
    },
    enum_iterator::{
        Sequence,
        all,
    },
    serde::{
        Deserialize,
        Serialize,
    },
};

/// The number of dungeons tracked, i.e. the size of every per-dungeon table.
pub const COUNT: usize = 10;

/// A dungeon with a boss, identified by its stable id 0..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence, Deserialize, Serialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Dungeon {
    EasternPalace = 0,
    DesertPalace = 1,
    TowerOfHera = 2,
    PalaceOfDarkness = 3,
    SwampPalace = 4,
    SkullWoods = 5,
    ThievesTown = 6,
    IcePalace = 7,
    MiseryMire = 8,
    TurtleRock = 9,
}

impl Dungeon {
    pub fn from_id(id: u8) -> Option<Self> {
        all::<Self>().nth(usize::from(id))
    }

    pub fn id(&self) -> u8 { *self as u8 }

    /// Usable as an index into per-dungeon arrays.
    pub fn idx(&self) -> usize { usize::from(self.id()) }

    pub fn name(&self) -> &'static str {
        match self {
            Self::EasternPalace => "Eastern Palace",
            Self::DesertPalace => "Desert Palace",
            Self::TowerOfHera => "Tower of Hera",
            Self::PalaceOfDarkness => "Palace of Darkness",
            Self::SwampPalace => "Swamp Palace",
            Self::SkullWoods => "Skull Woods",
            Self::ThievesTown => "Thieves' Town",
            Self::IcePalace => "Ice Palace",
            Self::MiseryMire => "Misery Mire",
            Self::TurtleRock => "Turtle Rock",
        }
    }

    pub fn boss_name(&self) -> &'static str {
        match self {
            Self::EasternPalace => "Armos Knights",
            Self::DesertPalace => "Lanmolas",
            Self::TowerOfHera => "Moldorm",
            Self::PalaceOfDarkness => "Helmasaur King",
            Self::SwampPalace => "Arrghus",
            Self::SkullWoods => "Mothula",
            Self::ThievesTown => "Blind",
            Self::IcePalace => "Kholdstare",
            Self::MiseryMire => "Vitreous",
            Self::TurtleRock => "Trinexx",
        }
    }

    /// The number of items in this dungeon that are not its own maps, compasses or keys.
    ///
    /// This is the starting (and maximum) value of the dungeon's chest counter.
    pub fn chest_count(&self) -> u8 {
        match self {
            Self::EasternPalace => 3,
            Self::DesertPalace => 2,
            Self::TowerOfHera => 2,
            Self::PalaceOfDarkness => 5,
            Self::SwampPalace => 6,
            Self::SkullWoods => 2,
            Self::ThievesTown => 4,
            Self::IcePalace => 3,
            Self::MiseryMire => 2,
            Self::TurtleRock => 5,
        }
    }

    pub fn small_key_max(&self) -> u8 {
        match self {
            Self::EasternPalace => 1,
            Self::DesertPalace => 1,
            Self::TowerOfHera => 1,
            Self::PalaceOfDarkness => 6,
            Self::SwampPalace => 1,
            Self::SkullWoods => 3,
            Self::ThievesTown => 1,
            Self::IcePalace => 2,
            Self::MiseryMire => 3,
            Self::TurtleRock => 4,
        }
    }

    /// Whether entering this dungeon requires the medallion assigned to it.
    pub fn is_medallion_gated(&self) -> bool {
        matches!(self, Self::MiseryMire | Self::TurtleRock)
    }
}

impl TryFrom<u8> for Dungeon {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, String> {
        Self::from_id(id).ok_or_else(|| format!("no dungeon with id {}", id))
    }
}

impl From<Dungeon> for u8 {
    fn from(dungeon: Dungeon) -> Self { dungeon.id() }
}

impl fmt::Display for Dungeon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

/// A fixed-size table with one entry per dungeon, indexed by [`Dungeon`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct DungeonMap<T>([T; COUNT]);

impl<T> DungeonMap<T> {
    pub fn from_fn(mut f: impl FnMut(Dungeon) -> T) -> Self {
        Self(std::array::from_fn(|idx| f(Dungeon::from_id(idx as u8).expect("dungeon table index out of range"))))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dungeon, &T)> + '_ {
        all::<Dungeon>().zip(&self.0)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.0.iter()
    }
}

impl<T> Index<Dungeon> for DungeonMap<T> {
    type Output = T;

    fn index(&self, dungeon: Dungeon) -> &T { &self.0[dungeon.idx()] }
}

impl<T> IndexMut<Dungeon> for DungeonMap<T> {
    fn index_mut(&mut self, dungeon: Dungeon) -> &mut T { &mut self.0[dungeon.idx()] }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable() {
        for (idx, dungeon) in all::<Dungeon>().enumerate() {
            assert_eq!(usize::from(dungeon.id()), idx);
            assert_eq!(Dungeon::from_id(dungeon.id()), Some(dungeon));
        }
        assert_eq!(Dungeon::from_id(10), None);
    }

    #[test]
    fn small_key_table() {
        let maxima = all::<Dungeon>().map(|dungeon| dungeon.small_key_max()).collect::<Vec<_>>();
        assert_eq!(maxima, [1, 1, 1, 6, 1, 3, 1, 2, 3, 4]);
    }

    #[test]
    fn only_mire_and_turtle_rock_need_medallions() {
        let gated = all::<Dungeon>().filter(Dungeon::is_medallion_gated).map(|dungeon| dungeon.id()).collect::<Vec<_>>();
        assert_eq!(gated, [8, 9]);
    }

    #[test]
    fn map_is_indexed_by_id() {
        let map = DungeonMap::from_fn(|dungeon| dungeon.id() * 2);
        assert_eq!(map[Dungeon::ThievesTown], 12);
        assert_eq!(map.iter().map(|(dungeon, _)| dungeon).last(), Some(Dungeon::TurtleRock));
    }
}
