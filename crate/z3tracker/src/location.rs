//! The fixed set of map locations and the records describing them.

use {
    std::fmt,
    serde::{
        Deserialize,
        Serialize,
    },
    z3r::{
        Classification,
        Dungeon,
        Item,
    },
    crate::state::{
        Items,
        Medallions,
    },
};

pub const CHEST_COUNT: usize = 64;

/// A chest-like location, identified by its stable id 0..64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ChestId(pub(crate) u8);

impl ChestId {
    pub fn new(id: u8) -> Option<Self> {
        (usize::from(id) < CHEST_COUNT).then(|| Self(id))
    }

    pub fn id(&self) -> u8 { self.0 }

    pub fn idx(&self) -> usize { usize::from(self.0) }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..CHEST_COUNT as u8).map(Self)
    }
}

impl TryFrom<u8> for ChestId {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, String> {
        Self::new(id).ok_or_else(|| format!("no chest with id {}", id))
    }
}

impl From<ChestId> for u8 {
    fn from(ChestId(id): ChestId) -> Self { id }
}

impl fmt::Display for ChestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An icon in a location's caption showing what it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementIcon {
    /// An item at the given level. Boolean items use level 1.
    Equipment(Item, u8),
    /// Whichever medallion is assigned to the dungeon.
    MedallionSlot(Dungeon),
}

impl RequirementIcon {
    pub fn asset(&self, medallions: &Medallions) -> String {
        match *self {
            Self::Equipment(item, level) => item.asset(level.max(1)).unwrap_or_else(|| format!("{}.png", item)),
            Self::MedallionSlot(dungeon) => match medallions[dungeon].item() {
                Some(item) => format!("{}.png", item),
                None => medallions[dungeon].asset(),
            },
        }
    }
}

pub(crate) const fn icon(item: Item) -> RequirementIcon { RequirementIcon::Equipment(item, 1) }
pub(crate) const fn level(item: Item, level: u8) -> RequirementIcon { RequirementIcon::Equipment(item, level) }

/// Alternative sets of requirement icons. The location needs every icon of at least one set.
pub type Requirements = &'static [&'static [RequirementIcon]];

pub type ChestLogic = fn(&Items, &Medallions) -> Classification;
pub type DungeonLogic = fn(&DungeonLocation, &Items, &Medallions) -> Classification;

#[derive(Debug)]
pub struct ChestLocation {
    pub id: ChestId,
    pub name: &'static str,
    /// Horizontal position on the combined Light World/Dark World map, in percent.
    pub x: f32,
    /// Vertical position, in percent.
    pub y: f32,
    pub requirements: Requirements,
    pub is_available: ChestLogic,
}

#[derive(Debug)]
pub struct DungeonLocation {
    pub dungeon: Dungeon,
    pub x: f32,
    pub y: f32,
    pub requirements: Requirements,
    /// Whether the boss can be reached and beaten. Does not consider the big key; see [`crate::evaluate::evaluate_dungeon_beatable`].
    pub is_beatable: DungeonLogic,
    /// Whether the next of the dungeon's remaining items can be collected.
    pub can_get_chest: DungeonLogic,
}

impl DungeonLocation {
    pub fn name(&self) -> &'static str { self.dungeon.name() }

    /// The boss portrait, i.e. the asset of the dungeon's boss item in its beaten state.
    pub fn boss_image(&self) -> String {
        format!("{}2.png", Item::Boss(self.dungeon))
    }
}

pub fn chests() -> &'static [ChestLocation; CHEST_COUNT] { &crate::chests::CHESTS }

pub fn chest(id: ChestId) -> &'static ChestLocation { &crate::chests::CHESTS[id.idx()] }

pub fn dungeons() -> &'static [DungeonLocation; z3r::dungeon::COUNT] { &crate::dungeons::DUNGEONS }

pub fn dungeon(dungeon: Dungeon) -> &'static DungeonLocation { &crate::dungeons::DUNGEONS[dungeon.idx()] }

#[cfg(test)]
mod tests {
    use {
        enum_iterator::all,
        itertools::Itertools as _,
        z3r::Medallion,
        super::*,
    };

    #[test]
    fn registry_ids_match_positions() {
        for (idx, chest) in chests().iter().enumerate() {
            assert_eq!(chest.id.idx(), idx, "{}", chest.name);
        }
        for (dungeon, location) in all::<Dungeon>().zip(dungeons()) {
            assert_eq!(location.dungeon, dungeon);
        }
    }

    #[test]
    fn names_are_unique_and_plain() {
        assert!(chests().iter().map(|chest| chest.name).all_unique());
        for chest in chests() {
            assert!(!chest.name.contains('<'), "{}", chest.name);
        }
    }

    #[test]
    fn coordinates_on_map() {
        for chest in chests() {
            assert!((0.0..=100.0).contains(&chest.x) && (0.0..=100.0).contains(&chest.y), "{}", chest.name);
        }
        for location in dungeons() {
            assert!((0.0..=100.0).contains(&location.x) && (0.0..=100.0).contains(&location.y), "{}", location.name());
        }
    }

    #[test]
    fn chest_ids_bounded() {
        assert!(ChestId::new(63).is_some());
        assert!(ChestId::new(64).is_none());
        assert_eq!(ChestId::all().count(), CHEST_COUNT);
    }

    #[test]
    fn medallion_slot_follows_assignment() {
        let mut medallions = Medallions::default();
        let slot = RequirementIcon::MedallionSlot(Dungeon::TurtleRock);
        assert_eq!(slot.asset(&medallions), "medallion0.png");
        medallions[Dungeon::TurtleRock] = Medallion::Quake;
        assert_eq!(slot.asset(&medallions), "quake.png");
        assert_eq!(level(Item::Glove, 2).asset(&medallions), "glove2.png");
        assert_eq!(icon(Item::Hookshot).asset(&medallions), "hookshot.png");
    }

    #[test]
    fn boss_images() {
        assert_eq!(dungeon(Dungeon::EasternPalace).boss_image(), "boss02.png");
    }
}
