//! State transitions as a pure `(state, action) → state` function.

use {
    serde::{
        Deserialize,
        Serialize,
    },
    z3r::{
        Dungeon,
        Item,
        Medallion,
    },
    crate::{
        layout::Layout,
        location::{
            CHEST_COUNT,
            ChestId,
        },
        rules,
        state::Snapshot,
    },
};

/// Something the player did.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", content = "args", rename_all = "camelCase")]
pub enum Action {
    /// Click on a layout cell. The key is taken verbatim from the layout and may not name an item.
    CycleItem(String),
    SetMedallion(Dungeon, Medallion),
    CycleSmallKey(Dungeon),
    ToggleChestOpened(ChestId),
    ToggleBossBeaten(Dungeon),
    SetBigKeyVisibility(bool),
    SetLayout(Layout),
    Reset,
}

/// Applies `action` to `state`, returning the next state. `state` itself is left untouched.
pub fn reduce(state: &Snapshot, action: &Action) -> Snapshot {
    let mut next = state.clone();
    match action {
        Action::CycleItem(key) => match Item::from_cell(key) {
            Some(item) => {
                let value = rules::cycle_item(item, next.items.get(item));
                next.items.set(item, value);
            }
            None => log::debug!("ignoring click on non-item cell {:?}", key),
        },
        &Action::SetMedallion(dungeon, medallion) => next.medallions[dungeon] = medallion,
        &Action::CycleSmallKey(dungeon) => next.small_keys[dungeon] = rules::cycle_small_key(dungeon, next.small_keys[dungeon]),
        &Action::ToggleChestOpened(chest) => {
            let mut opened = next.chests_opened.clone();
            opened.resize(opened.len().max(CHEST_COUNT), false);
            opened[chest.idx()] = !opened[chest.idx()];
            next.chests_opened = opened;
        }
        &Action::ToggleBossBeaten(dungeon) => next.bosses_beaten[dungeon] = !next.bosses_beaten[dungeon],
        &Action::SetBigKeyVisibility(enabled) => next.big_key_visible = enabled,
        Action::SetLayout(layout) => next.layout = layout.clone(),
        Action::Reset => next = Snapshot::default(),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_leaves_input_alone() {
        let state = Snapshot::default();
        let next = reduce(&state, &Action::CycleItem(format!("sword")));
        assert_eq!(state, Snapshot::default());
        assert_eq!(next.items.sword, 1);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let state = Snapshot::default();
        for key in ["", "blank", "triforce", "boss10"] {
            assert_eq!(reduce(&state, &Action::CycleItem(key.to_owned())), state);
        }
    }

    #[test]
    fn chest_counter_counts_down() {
        let state = reduce(&Snapshot::default(), &Action::CycleItem(format!("chest0")));
        assert_eq!(state.items.chests[Dungeon::EasternPalace], 2);
    }

    #[test]
    fn toggles_flip_back() {
        let chest = ChestId::new(12).expect("chest id in range");
        let once = reduce(&Snapshot::default(), &Action::ToggleChestOpened(chest));
        assert!(once.chest_opened(12));
        assert_eq!(reduce(&once, &Action::ToggleChestOpened(chest)), Snapshot::default());
    }

    #[test]
    fn toggle_on_saved_short_chest_list() {
        let mut json = serde_json::to_value(Snapshot::default()).unwrap();
        json["chestsOpened"] = serde_json::json!([false, false]);
        let saved = serde_json::from_value::<Snapshot>(json).unwrap();
        let chest = ChestId::new(12).expect("chest id in range");
        assert!(reduce(&saved, &Action::ToggleChestOpened(chest)).chest_opened(12));
        let built = Snapshot { chests_opened: Vec::default(), ..Snapshot::default() };
        let next = reduce(&built, &Action::ToggleChestOpened(chest));
        assert!(next.chest_opened(12));
        assert_eq!(next.chests_opened.len(), CHEST_COUNT);
    }

    #[test]
    fn cycling_an_out_of_range_counter_stays_in_bounds() {
        let mut json = serde_json::to_value(Snapshot::default()).unwrap();
        json["items"]["chests"][0] = serde_json::json!(9);
        let saved = serde_json::from_value::<Snapshot>(json).unwrap();
        assert_eq!(reduce(&saved, &Action::CycleItem(format!("chest0"))).items.chests[Dungeon::EasternPalace], 2);
        let mut built = Snapshot::default();
        built.items.chests[Dungeon::EasternPalace] = 9;
        assert_eq!(reduce(&built, &Action::CycleItem(format!("chest0"))).items.chests[Dungeon::EasternPalace], 3);
    }

    #[test]
    fn reset_restores_default() {
        let mut state = Snapshot::default();
        for action in [
            Action::CycleItem(format!("glove")),
            Action::SetMedallion(Dungeon::MiseryMire, Medallion::Quake),
            Action::CycleSmallKey(Dungeon::SkullWoods),
            Action::SetBigKeyVisibility(true),
            Action::SetLayout(Layout(vec![vec![format!("hammer")]])),
        ] {
            state = reduce(&state, &action);
        }
        assert_ne!(state, Snapshot::default());
        assert_eq!(reduce(&state, &Action::Reset), Snapshot::default());
    }

    #[test]
    fn actions_serialize_tagged() {
        assert_eq!(serde_json::to_string(&Action::CycleSmallKey(Dungeon::TurtleRock)).unwrap(), r#"{"type":"cycleSmallKey","args":9}"#);
        assert_eq!(serde_json::to_string(&Action::Reset).unwrap(), r#"{"type":"reset"}"#);
        let action = serde_json::from_str::<Action>(r#"{"type":"setMedallion","args":[8,"ether"]}"#).unwrap();
        assert_eq!(action, Action::SetMedallion(Dungeon::MiseryMire, Medallion::Ether));
    }
}
