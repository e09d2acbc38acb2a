//! The tracker's state, as a plain value that actions replace wholesale.

use {
    enum_iterator::all,
    serde::{
        Deserialize,
        Deserializer,
        Serialize,
    },
    smart_default::SmartDefault,
    z3r::{
        Dungeon,
        DungeonMap,
        DungeonReward,
        Item,
        Medallion,
    },
    crate::{
        layout::Layout,
        location::CHEST_COUNT,
    },
};

pub type Medallions = DungeonMap<Medallion>;

/// Current value of every item in the catalog.
///
/// Level items are `u8` and boolean items `bool`. Code testing whether a level item is held at all must compare with `> 0`.
#[derive(Debug, SmartDefault, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Items {
    #[default(1)]
    pub tunic: u8,
    pub sword: u8,
    pub shield: u8,
    pub moonpearl: bool,
    /// 0: none, 1: silver arrows only, 2: bow, 3: bow and silver arrows.
    pub bow: u8,
    pub boomerang: u8,
    pub hookshot: bool,
    pub mushroom: bool,
    pub powder: bool,
    pub firerod: bool,
    pub icerod: bool,
    pub bombos: bool,
    pub ether: bool,
    pub quake: bool,
    pub lantern: bool,
    pub hammer: bool,
    pub shovel: bool,
    pub net: bool,
    pub book: bool,
    pub bottle: u8,
    pub somaria: bool,
    pub byrna: bool,
    pub cape: bool,
    pub mirror: bool,
    pub boots: bool,
    /// 0: none, 1: Power Glove, 2: Titan's Mitt.
    pub glove: u8,
    pub flippers: bool,
    pub flute: bool,
    pub agahnim: bool,
    #[default(DungeonMap::from_fn(|dungeon| Item::Boss(dungeon).initial_value()))]
    pub bosses: DungeonMap<u8>,
    #[default(DungeonMap::from_fn(|dungeon| Item::Chest(dungeon).initial_value()))]
    pub chests: DungeonMap<u8>,
    pub rewards: DungeonMap<u8>,
    pub big_keys: DungeonMap<bool>,
}

impl Items {
    pub fn get(&self, item: Item) -> u8 {
        match item {
            Item::Tunic => self.tunic,
            Item::Sword => self.sword,
            Item::Shield => self.shield,
            Item::Bow => self.bow,
            Item::Boomerang => self.boomerang,
            Item::Bottle => self.bottle,
            Item::Glove => self.glove,
            Item::Boss(dungeon) => self.bosses[dungeon],
            Item::Chest(dungeon) => self.chests[dungeon],
            Item::Reward(dungeon) => self.rewards[dungeon],
            _ => self.flag(item).map_or(0, |flag| u8::from(*flag)),
        }
    }

    /// Stores a value without checking it against the item's bounds. Boolean items treat any nonzero value as held.
    pub fn set(&mut self, item: Item, value: u8) {
        match item {
            Item::Tunic => self.tunic = value,
            Item::Sword => self.sword = value,
            Item::Shield => self.shield = value,
            Item::Bow => self.bow = value,
            Item::Boomerang => self.boomerang = value,
            Item::Bottle => self.bottle = value,
            Item::Glove => self.glove = value,
            Item::Boss(dungeon) => self.bosses[dungeon] = value,
            Item::Chest(dungeon) => self.chests[dungeon] = value,
            Item::Reward(dungeon) => self.rewards[dungeon] = value,
            _ => if let Some(flag) = self.flag_mut(item) { *flag = value > 0 },
        }
    }

    fn flag(&self, item: Item) -> Option<&bool> {
        Some(match item {
            Item::MoonPearl => &self.moonpearl,
            Item::Hookshot => &self.hookshot,
            Item::Mushroom => &self.mushroom,
            Item::Powder => &self.powder,
            Item::FireRod => &self.firerod,
            Item::IceRod => &self.icerod,
            Item::Bombos => &self.bombos,
            Item::Ether => &self.ether,
            Item::Quake => &self.quake,
            Item::Lantern => &self.lantern,
            Item::Hammer => &self.hammer,
            Item::Shovel => &self.shovel,
            Item::Net => &self.net,
            Item::Book => &self.book,
            Item::Somaria => &self.somaria,
            Item::Byrna => &self.byrna,
            Item::Cape => &self.cape,
            Item::Mirror => &self.mirror,
            Item::Boots => &self.boots,
            Item::Flippers => &self.flippers,
            Item::Flute => &self.flute,
            Item::Agahnim => &self.agahnim,
            Item::BigKey(dungeon) => &self.big_keys[dungeon],
            _ => return None,
        })
    }

    fn flag_mut(&mut self, item: Item) -> Option<&mut bool> {
        Some(match item {
            Item::MoonPearl => &mut self.moonpearl,
            Item::Hookshot => &mut self.hookshot,
            Item::Mushroom => &mut self.mushroom,
            Item::Powder => &mut self.powder,
            Item::FireRod => &mut self.firerod,
            Item::IceRod => &mut self.icerod,
            Item::Bombos => &mut self.bombos,
            Item::Ether => &mut self.ether,
            Item::Quake => &mut self.quake,
            Item::Lantern => &mut self.lantern,
            Item::Hammer => &mut self.hammer,
            Item::Shovel => &mut self.shovel,
            Item::Net => &mut self.net,
            Item::Book => &mut self.book,
            Item::Somaria => &mut self.somaria,
            Item::Byrna => &mut self.byrna,
            Item::Cape => &mut self.cape,
            Item::Mirror => &mut self.mirror,
            Item::Boots => &mut self.boots,
            Item::Flippers => &mut self.flippers,
            Item::Flute => &mut self.flute,
            Item::Agahnim => &mut self.agahnim,
            Item::BigKey(dungeon) => &mut self.big_keys[dungeon],
            _ => return None,
        })
    }

    /// Moves every value outside its item's bounds to the nearest bound.
    pub fn clamp_to_bounds(&mut self) {
        for item in all::<Item>() {
            let kind = item.kind();
            let value = self.get(item);
            if !kind.contains(value) {
                log::warn!("{} was {}, clamping to {}..={}", item, value, kind.min(), kind.max());
                self.set(item, value.clamp(kind.min(), kind.max()));
            }
        }
    }

    pub fn has(&self, item: Item) -> bool { self.get(item) > 0 }

    pub fn boss_beaten(&self, dungeon: Dungeon) -> bool { self.bosses[dungeon] == 2 }

    pub fn reward(&self, dungeon: Dungeon) -> DungeonReward {
        DungeonReward::from_level(self.rewards[dungeon]).unwrap_or_default()
    }

    /// Rewards the player holds, i.e. those of dungeons whose boss has been beaten.
    pub fn held_rewards(&self) -> impl Iterator<Item = DungeonReward> + '_ {
        self.bosses.iter().filter(|&(_, &level)| level == 2).map(move |(dungeon, _)| self.reward(dungeon))
    }
}

/// Everything the tracker knows, as one value. Actions never mutate a snapshot in place; see [`crate::action::reduce`].
#[derive(Debug, SmartDefault, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(deserialize_with = "deserialize_items")]
    pub items: Items,
    pub medallions: Medallions,
    #[serde(deserialize_with = "deserialize_small_keys")]
    pub small_keys: DungeonMap<u8>,
    /// Whether boss logic requires the dungeon's big key (keysanity).
    pub big_key_visible: bool,
    /// Always [`CHEST_COUNT`] long once deserialized; saved lists of another length are padded or truncated.
    #[default(vec![false; CHEST_COUNT])]
    #[serde(deserialize_with = "deserialize_chests_opened")]
    pub chests_opened: Vec<bool>,
    pub bosses_beaten: DungeonMap<bool>,
    pub layout: Layout,
}

impl Snapshot {
    pub fn chest_opened(&self, chest: usize) -> bool {
        self.chests_opened.get(chest).copied().unwrap_or(false)
    }
}

fn deserialize_items<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Items, D::Error> {
    let mut items = Items::deserialize(deserializer)?;
    items.clamp_to_bounds();
    Ok(items)
}

fn deserialize_small_keys<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DungeonMap<u8>, D::Error> {
    let mut small_keys = DungeonMap::<u8>::deserialize(deserializer)?;
    for dungeon in all::<Dungeon>() {
        small_keys[dungeon] = small_keys[dungeon].min(dungeon.small_key_max());
    }
    Ok(small_keys)
}

fn deserialize_chests_opened<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<bool>, D::Error> {
    let mut opened = Vec::<bool>::deserialize(deserializer)?;
    if opened.len() != CHEST_COUNT {
        log::warn!("saved chest list has {} entries, expected {}", opened.len(), CHEST_COUNT);
        opened.resize(CHEST_COUNT, false);
    }
    Ok(opened)
}
