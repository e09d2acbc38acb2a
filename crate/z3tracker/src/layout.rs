use {
    derive_more::From,
    serde::{
        Deserialize,
        Serialize,
    },
    z3r::{
        Item,
        item::BLANK,
    },
};

const DEFAULT: [[&str; 5]; 6] = [
    [BLANK, "tunic", "sword", "shield", "moonpearl"],
    ["bow", "boomerang", "hookshot", "mushroom", "powder"],
    ["firerod", "icerod", "bombos", "ether", "quake"],
    ["lantern", "hammer", "shovel", "net", "book"],
    ["bottle", "somaria", "byrna", "cape", "mirror"],
    ["boots", "glove", "flippers", "flute", "agahnim"],
];

/// The item grid as rows of item keys.
///
/// Cells are kept as strings since they come from user-editable data: a cell may be empty, [`BLANK`], or a key this version doesn't know.
#[derive(Debug, From, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Layout(pub Vec<Vec<String>>);

impl Layout {
    pub fn rows(&self) -> &[Vec<String>] { &self.0 }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.0.get(row)?.get(col).map(String::as_str)
    }

    /// The items shown in the grid, in reading order, skipping placeholder and unknown cells.
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.0.iter().flatten().filter_map(|cell| Item::from_cell(cell))
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self(DEFAULT.iter().map(|row| row.iter().map(|&cell| cell.to_owned()).collect()).collect())
    }
}
