//! Static model of A Link to the Past randomizer progression: the item catalog, dungeons, medallions and dungeon rewards.
//!
//! Nothing in this crate holds mutable state. The tracker state and the location logic live in the `z3tracker` crate.

#![deny(rust_2018_idioms, unused, unused_crate_dependencies, unused_import_braces, unused_lifetimes, unused_qualifications, warnings)]
#![forbid(unsafe_code)]

pub mod dungeon;
pub mod item;
pub mod model;

pub use crate::{
    dungeon::{
        Dungeon,
        DungeonMap,
    },
    item::{
        Item,
        ItemKind,
    },
    model::{
        Classification,
        DungeonReward,
        Medallion,
    },
};
