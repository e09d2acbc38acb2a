//! Tracker core for A Link to the Past randomizer runs: which items the player holds, and which locations that makes reachable.
//!
//! A presentation layer owns a [`Store`], forwards clicks to it, and redraws from [`Store::snapshot`] and the
//! classification queries. Saving the item layout goes through [`persistence`].

#![deny(rust_2018_idioms, unused, unused_crate_dependencies, unused_import_braces, unused_qualifications, warnings)]
#![forbid(unsafe_code)]

use semver::Version;
pub use crate::{
    action::{
        Action,
        reduce,
    },
    config::Config,
    evaluate::{
        Summary,
        evaluate_chest,
        evaluate_dungeon_beatable,
        evaluate_dungeon_chest,
    },
    layout::Layout,
    location::ChestId,
    logic::steve,
    state::{
        Items,
        Medallions,
        Snapshot,
    },
    store::{
        DungeonStatus,
        Store,
    },
};

pub mod action;
mod chests;
pub mod config;
mod dungeons;
pub mod evaluate;
pub mod layout;
pub mod location;
pub mod logic;
pub mod persistence;
pub mod rules;
pub mod state;
pub mod store;

pub fn version() -> Version {
    Version::parse(env!("CARGO_PKG_VERSION")).expect("failed to parse current version")
}
