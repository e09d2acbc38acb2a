//! Reachability rules shared by many locations.

use {
    z3r::{
        Classification,
        Dungeon,
        DungeonReward,
        Medallion,
    },
    crate::state::{
        Items,
        Medallions,
    },
};

/// Whether the player can move around the Dark World in human form.
///
/// Needs the Moon Pearl, plus either a way over the Kakariko rocks (Titan's Mitt, or Power Glove and hammer)
/// or the castle portal after Agahnim with the hookshot and a way out of the pyramid area.
pub fn steve(items: &Items) -> bool {
    if !items.moonpearl { return false }
    if items.glove == 2 || items.glove > 0 && items.hammer { return true }
    items.agahnim && items.hookshot && (items.hammer || items.glove > 0 || items.flippers)
}

/// The south half of the Dark World, which is also reachable from the pyramid with the hammer.
pub fn south_dark_world(items: &Items) -> bool {
    steve(items) || items.agahnim && items.moonpearl && items.hammer
}

/// The east half of the Dark World (Palace of Darkness area).
pub fn east_dark_world(items: &Items) -> bool {
    items.moonpearl && (items.agahnim || items.glove > 0 && items.hammer || items.glove == 2 && items.flippers)
}

pub fn death_mountain(items: &Items) -> bool {
    items.flute || items.glove > 0
}

/// Going up Death Mountain on foot means a dark cave, so without the flute it's only safe with the lantern.
pub fn death_mountain_light(items: &Items) -> Classification {
    Classification::available_if(items.flute || items.lantern)
}

pub fn east_death_mountain(items: &Items) -> bool {
    death_mountain(items) && (items.hookshot || items.mirror && items.hammer)
}

pub fn dark_east_death_mountain(items: &Items) -> bool {
    items.moonpearl && items.glove == 2 && east_death_mountain(items)
}

/// Whether lasers in Turtle Rock can be blocked.
pub fn laser_safety(items: &Items) -> bool {
    items.byrna || items.cape || items.shield == 3
}

/// The medallion gate in front of Misery Mire and Turtle Rock.
///
/// Returns `Some` if the gate decides the outcome, `None` if the caller should go on with the rest of the dungeon's logic.
pub fn medallion_check(dungeon: Dungeon, items: &Items, medallions: &Medallions) -> Option<Classification> {
    if !items.bombos && !items.ether && !items.quake { return Some(Classification::Unavailable) }
    match medallions[dungeon] {
        Medallion::Unknown => (!(items.bombos && items.ether && items.quake)).then(|| Classification::Possible),
        Medallion::Bombos if !items.bombos => Some(Classification::Unavailable),
        Medallion::Ether if !items.ether => Some(Classification::Unavailable),
        Medallion::Quake if !items.quake => Some(Classification::Unavailable),
        Medallion::Bombos | Medallion::Ether | Medallion::Quake => None,
    }
}

pub fn pendant_count(items: &Items) -> usize {
    items.held_rewards().filter(DungeonReward::is_pendant).count()
}

pub fn has_green_pendant(items: &Items) -> bool {
    items.held_rewards().any(|reward| reward == DungeonReward::GreenPendant)
}

pub fn red_crystal_count(items: &Items) -> usize {
    items.held_rewards().filter(|&reward| reward == DungeonReward::RedCrystal).count()
}
