use {
    enum_iterator::all,
    itertools::Itertools as _,
    serde::Serialize,
    z3r::{
        Classification,
        Dungeon,
        Medallion,
    },
    crate::{
        action::{
            Action,
            reduce,
        },
        config::Config,
        evaluate::{
            self,
            Summary,
        },
        layout::Layout,
        location::ChestId,
        persistence::{
            self,
            KeyValueStore,
        },
        state::Snapshot,
    },
};

/// What the map shows for one dungeon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DungeonStatus {
    pub dungeon: Dungeon,
    pub boss: Classification,
    pub chest: Classification,
}

/// Owns the current [`Snapshot`] and applies actions to it one at a time.
///
/// All mutation goes through [`Store::dispatch`], so writes are serialized by the `&mut self` receiver.
#[derive(Debug, Default, Clone)]
pub struct Store {
    state: Snapshot,
    initial: Snapshot,
}

impl Store {
    pub fn new() -> Self { Self::default() }

    /// A store whose initial state (also the state restored by [`Store::reset`]) follows the config.
    pub fn with_config(config: &Config) -> Self {
        let initial = Snapshot { big_key_visible: config.big_key_visible, ..Snapshot::default() };
        Self { state: initial.clone(), initial }
    }

    /// Like [`Store::with_config`], but starting from the layout saved under the config's layout key, if there is one.
    pub fn restore(config: &Config, storage: &impl KeyValueStore) -> Self {
        let mut store = Self::with_config(config);
        if let Some(layout) = persistence::load_layout(storage, &config.layout_key) {
            store.initial.layout = layout.clone();
            store.state.layout = layout;
        }
        store
    }

    /// Saves the current layout under the config's layout key.
    pub fn save_layout(&self, config: &Config, storage: &mut impl KeyValueStore) {
        persistence::save_layout(storage, &config.layout_key, &self.state.layout);
    }

    pub fn snapshot(&self) -> &Snapshot { &self.state }

    pub fn dispatch(&mut self, action: Action) -> &Snapshot {
        log::debug!("applying {:?}", action);
        self.state = match action {
            Action::Reset => self.initial.clone(),
            action => reduce(&self.state, &action),
        };
        &self.state
    }

    /// Clicks an item cell. Empty, placeholder and unknown keys leave the state unchanged.
    pub fn cycle_item(&mut self, key: &str) -> &Snapshot {
        self.dispatch(Action::CycleItem(key.to_owned()))
    }

    pub fn set_medallion(&mut self, dungeon: Dungeon, medallion: Medallion) -> &Snapshot {
        self.dispatch(Action::SetMedallion(dungeon, medallion))
    }

    /// Moves the dungeon's medallion assignment on to the next value.
    pub fn cycle_medallion(&mut self, dungeon: Dungeon) -> &Snapshot {
        let next = self.state.medallions[dungeon].next();
        self.set_medallion(dungeon, next)
    }

    pub fn cycle_small_key(&mut self, dungeon: Dungeon) -> &Snapshot {
        self.dispatch(Action::CycleSmallKey(dungeon))
    }

    pub fn toggle_chest_opened(&mut self, chest: ChestId) {
        self.dispatch(Action::ToggleChestOpened(chest));
    }

    pub fn toggle_boss_beaten(&mut self, dungeon: Dungeon) {
        self.dispatch(Action::ToggleBossBeaten(dungeon));
    }

    pub fn set_big_key_visibility(&mut self, enabled: bool) {
        self.dispatch(Action::SetBigKeyVisibility(enabled));
    }

    pub fn set_layout(&mut self, layout: Layout) -> &Snapshot {
        self.dispatch(Action::SetLayout(layout))
    }

    pub fn reset(&mut self) -> &Snapshot {
        self.dispatch(Action::Reset)
    }

    /// The displayed classification of every chest location, in id order.
    pub fn chest_statuses(&self) -> Vec<Classification> {
        ChestId::all().map(|chest| evaluate::chest_status(chest, &self.state)).collect_vec()
    }

    pub fn dungeon_statuses(&self) -> Vec<DungeonStatus> {
        all::<Dungeon>().map(|dungeon| DungeonStatus {
            dungeon,
            boss: evaluate::boss_status(dungeon, &self.state),
            chest: evaluate::dungeon_chest_status(dungeon, &self.state),
        }).collect_vec()
    }

    /// Counts over all chest locations.
    pub fn summary(&self) -> Summary {
        self.chest_statuses().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opened_chest_stays_opened() {
        let mut store = Store::new();
        let tomb = ChestId::new(0).expect("chest id in range");
        assert_eq!(store.chest_statuses()[0], Classification::Unavailable);
        store.toggle_chest_opened(tomb);
        assert_eq!(store.chest_statuses()[0], Classification::Opened);
        for key in ["boots", "glove", "glove"] {
            store.cycle_item(key);
        }
        assert_eq!(store.chest_statuses()[0], Classification::Opened);
        store.toggle_chest_opened(tomb);
        assert_eq!(store.chest_statuses()[0], Classification::Available);
    }

    #[test]
    fn medallion_cycle() {
        let mut store = Store::new();
        for expected in [Medallion::Bombos, Medallion::Ether, Medallion::Quake, Medallion::Unknown] {
            assert_eq!(store.cycle_medallion(Dungeon::TurtleRock).medallions[Dungeon::TurtleRock], expected);
        }
    }

    #[test]
    fn reset_keeps_configured_mode() {
        let mut store = Store::with_config(&Config { big_key_visible: true, ..Config::default() });
        store.set_big_key_visibility(false);
        store.cycle_item("hammer");
        let state = store.reset();
        assert!(state.big_key_visible);
        assert!(!state.items.hammer);
    }

    #[test]
    fn layout_saved_under_configured_key() {
        let config = Config { layout_key: format!("custom"), ..Config::default() };
        let mut storage = persistence::MemoryStore::default();
        let mut store = Store::restore(&config, &storage);
        assert_eq!(store.snapshot().layout, Layout::default());
        let layout = Layout(vec![vec![format!("hammer")]]);
        store.set_layout(layout.clone());
        store.save_layout(&config, &mut storage);
        assert_eq!(persistence::load_layout(&storage, "custom"), Some(layout.clone()));
        assert_eq!(persistence::load_layout(&storage, "layout"), None);
        let mut restored = Store::restore(&config, &storage);
        assert_eq!(restored.snapshot().layout, layout);
        restored.cycle_item("hammer");
        assert_eq!(restored.reset().layout, layout);
    }

    #[test]
    fn summary_covers_every_chest() {
        let store = Store::new();
        let summary = store.summary();
        assert_eq!(summary.total(), crate::location::CHEST_COUNT);
        assert_eq!(summary.opened, 0);
    }

    #[test]
    fn dungeon_statuses_in_id_order() {
        let mut store = Store::new();
        store.toggle_boss_beaten(Dungeon::IcePalace);
        let statuses = store.dungeon_statuses();
        assert_eq!(statuses.len(), 10);
        assert_eq!(statuses[7], DungeonStatus { dungeon: Dungeon::IcePalace, boss: Classification::Opened, chest: Classification::Unavailable });
    }
}
