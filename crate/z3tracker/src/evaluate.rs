//! Classifying locations from a snapshot.
//!
//! The `evaluate_*` functions run a location's own logic and nothing else. The `*_status` functions compute that first
//! and then apply the player's manual overrides on top, which is what a map should display.

use {
    std::ops::AddAssign,
    serde::Serialize,
    z3r::{
        Classification,
        Dungeon,
    },
    crate::{
        location::{
            self,
            ChestId,
        },
        state::{
            Items,
            Medallions,
            Snapshot,
        },
    },
};

pub fn evaluate_chest(chest: ChestId, items: &Items, medallions: &Medallions) -> Classification {
    (location::chest(chest).is_available)(items, medallions)
}

/// With `big_key_visible`, the boss additionally needs the dungeon's big key.
pub fn evaluate_dungeon_beatable(dungeon: Dungeon, items: &Items, medallions: &Medallions, big_key_visible: bool) -> Classification {
    if big_key_visible && !items.big_keys[dungeon] { return Classification::Unavailable }
    let location = location::dungeon(dungeon);
    (location.is_beatable)(location, items, medallions)
}

pub fn evaluate_dungeon_chest(dungeon: Dungeon, items: &Items, medallions: &Medallions) -> Classification {
    let location = location::dungeon(dungeon);
    (location.can_get_chest)(location, items, medallions)
}

pub fn chest_status(chest: ChestId, snapshot: &Snapshot) -> Classification {
    let computed = evaluate_chest(chest, &snapshot.items, &snapshot.medallions);
    if snapshot.chest_opened(chest.idx()) { Classification::Opened } else { computed }
}

/// `Opened` once the boss item is at its beaten level or the dungeon is marked as beaten.
pub fn boss_status(dungeon: Dungeon, snapshot: &Snapshot) -> Classification {
    let computed = evaluate_dungeon_beatable(dungeon, &snapshot.items, &snapshot.medallions, snapshot.big_key_visible);
    if snapshot.items.boss_beaten(dungeon) || snapshot.bosses_beaten[dungeon] { Classification::Opened } else { computed }
}

/// `Opened` once the dungeon's chest counter has reached zero.
pub fn dungeon_chest_status(dungeon: Dungeon, snapshot: &Snapshot) -> Classification {
    let computed = evaluate_dungeon_chest(dungeon, &snapshot.items, &snapshot.medallions);
    if snapshot.items.chests[dungeon] == 0 { Classification::Opened } else { computed }
}

/// How many locations are in each classification.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Summary {
    pub available: usize,
    pub possible: usize,
    pub unavailable: usize,
    pub opened: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.available + self.possible + self.unavailable + self.opened
    }
}

impl AddAssign<Classification> for Summary {
    fn add_assign(&mut self, rhs: Classification) {
        match rhs {
            Classification::Available => self.available += 1,
            Classification::Possible => self.possible += 1,
            Classification::Unavailable => self.unavailable += 1,
            Classification::Opened => self.opened += 1,
        }
    }
}

impl FromIterator<Classification> for Summary {
    fn from_iter<I: IntoIterator<Item = Classification>>(iter: I) -> Self {
        let mut summary = Self::default();
        for classification in iter {
            summary += classification;
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use {
        enum_iterator::all,
        super::*,
    };

    #[test]
    fn evaluation_is_pure() {
        let snapshot = Snapshot::default();
        for chest in ChestId::all() {
            assert_eq!(
                evaluate_chest(chest, &snapshot.items, &snapshot.medallions),
                evaluate_chest(chest, &snapshot.items, &snapshot.medallions),
            );
        }
        for dungeon in all::<Dungeon>() {
            for big_key_visible in [false, true] {
                assert_eq!(
                    evaluate_dungeon_beatable(dungeon, &snapshot.items, &snapshot.medallions, big_key_visible),
                    evaluate_dungeon_beatable(dungeon, &snapshot.items, &snapshot.medallions, big_key_visible),
                );
            }
        }
    }

    #[test]
    fn logic_never_reports_opened() {
        let snapshot = Snapshot::default();
        for chest in ChestId::all() {
            assert_ne!(evaluate_chest(chest, &snapshot.items, &snapshot.medallions), Classification::Opened);
        }
    }

    #[test]
    fn big_key_gate() {
        let mut items = Items { bow: 2, lantern: true, ..Items::default() };
        let medallions = Medallions::default();
        assert_eq!(evaluate_dungeon_beatable(Dungeon::EasternPalace, &items, &medallions, false), Classification::Available);
        assert_eq!(evaluate_dungeon_beatable(Dungeon::EasternPalace, &items, &medallions, true), Classification::Unavailable);
        items.big_keys[Dungeon::EasternPalace] = true;
        assert_eq!(evaluate_dungeon_beatable(Dungeon::EasternPalace, &items, &medallions, true), Classification::Available);
    }

    #[test]
    fn boss_item_overrides_logic() {
        let mut snapshot = Snapshot::default();
        assert_eq!(boss_status(Dungeon::TurtleRock, &snapshot), Classification::Unavailable);
        snapshot.items.bosses[Dungeon::TurtleRock] = 2;
        assert_eq!(boss_status(Dungeon::TurtleRock, &snapshot), Classification::Opened);
        snapshot.items.bosses[Dungeon::TurtleRock] = 1;
        snapshot.bosses_beaten[Dungeon::TurtleRock] = true;
        assert_eq!(boss_status(Dungeon::TurtleRock, &snapshot), Classification::Opened);
    }

    #[test]
    fn empty_dungeon_is_opened() {
        let mut snapshot = Snapshot::default();
        snapshot.items.chests[Dungeon::EasternPalace] = 0;
        assert_eq!(dungeon_chest_status(Dungeon::EasternPalace, &snapshot), Classification::Opened);
    }

    #[test]
    fn summary_counts() {
        let summary = [Classification::Available, Classification::Available, Classification::Opened].into_iter().collect::<Summary>();
        assert_eq!(summary, Summary { available: 2, opened: 1, ..Summary::default() });
        assert_eq!(summary.total(), 3);
    }
}
