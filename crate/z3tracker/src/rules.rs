//! How a single click changes a value. All of these are total and stay within the value's bounds.

use z3r::{
    Dungeon,
    Item,
    ItemKind,
};

/// One step up, wrapping from `max` to `min`. A value already past `max` also lands on `min`.
pub fn cycle_level(value: u8, min: u8, max: u8) -> u8 {
    value.checked_add(1).filter(|next| (min..=max).contains(next)).unwrap_or(min)
}

/// One step down, wrapping from `min` back to `max`. A value already past `max` also lands on `max`.
///
/// Chest counters use this: clicking an empty dungeon restocks it.
pub fn cycle_countdown(value: u8, min: u8, max: u8) -> u8 {
    value.checked_sub(1).filter(|next| (min..=max).contains(next)).unwrap_or(max)
}

/// The value `item` has after being clicked once at `value`.
pub fn cycle_item(item: Item, value: u8) -> u8 {
    match item.kind() {
        ItemKind::Boolean => u8::from(value == 0),
        ItemKind::Level { min, max, countdown: false } => cycle_level(value, min, max),
        ItemKind::Level { min, max, countdown: true } => cycle_countdown(value, min, max),
    }
}

pub fn cycle_small_key(dungeon: Dungeon, count: u8) -> u8 {
    cycle_level(count, 0, dungeon.small_key_max())
}
