use {
    z3r::{
        Classification::{
            self,
            *,
        },
        Dungeon,
        Item::*,
    },
    crate::{
        location::{
            CHEST_COUNT,
            ChestId,
            ChestLocation,
            RequirementIcon::MedallionSlot,
            icon,
            level,
        },
        logic::*,
    },
};

macro_rules! chests {
    ($($id:literal: $name:literal at ($x:literal, $y:literal) $(needs $([$($req:expr),*])|+)? => $logic:expr,)*) => {
        pub(crate) static CHESTS: [ChestLocation; CHEST_COUNT] = [$(
            ChestLocation {
                id: ChestId($id),
                name: $name,
                x: $x,
                y: $y,
                requirements: &[$($(&[$($req),*]),+)?],
                is_available: $logic,
            },
        )*];
    };
}

chests! {
    0: "King's Tomb" at (30.8, 29.6) needs [icon(Boots), level(Glove, 2)] | [icon(Boots), icon(MoonPearl), icon(Mirror)] => |items, _| {
        if !items.boots { return Unavailable }
        if items.glove == 2 || steve(items) && items.mirror { Available } else { Unavailable }
    },
    1: "Light World Swamp" at (23.4, 93.4) => |_, _| Available,
    2: "Link's House" at (27.4, 67.9) => |_, _| Available,
    3: "Spiral Cave" at (39.9, 9.3) needs [icon(Hookshot)] | [icon(Mirror), icon(Hammer)] => |items, _| if east_death_mountain(items) {
        death_mountain_light(items)
    } else {
        Unavailable
    },
    4: "Mimic Cave" at (42.6, 9.3) needs [icon(MoonPearl), level(Glove, 2), icon(Hammer), icon(Mirror), icon(Somaria), MedallionSlot(Dungeon::TurtleRock), icon(FireRod)] => |items, medallions| {
        if !items.moonpearl || !items.hammer || items.glove != 2 || !items.somaria || !items.mirror { return Unavailable }
        if let Some(gate) = medallion_check(Dungeon::TurtleRock, items, medallions) { return gate }
        if items.firerod { death_mountain_light(items) } else { Possible }
    },
    5: "Tavern" at (8.1, 57.8) => |_, _| Available,
    6: "Chicken House" at (4.4, 54.2) => |_, _| Available,
    7: "Brewery" at (55.4, 57.8) needs [icon(MoonPearl), level(Glove, 2)] | [icon(MoonPearl), level(Glove, 1), icon(Hammer)] => |items, _| if steve(items) { Available } else { Unavailable },
    8: "C-Shaped House" at (60.8, 47.9) needs [icon(MoonPearl), level(Glove, 2)] | [icon(MoonPearl), level(Glove, 1), icon(Hammer)] => |items, _| if steve(items) { Available } else { Unavailable },
    9: "Aginah's Cave" at (10.0, 82.6) => |_, _| Available,
    10: "Mire Shed" at (51.7, 79.5) needs [icon(MoonPearl), icon(Flute), level(Glove, 2)] => |items, _| {
        if items.moonpearl && items.flute && items.glove == 2 { Available } else { Unavailable }
    },
    11: "Superbunny Cave" at (92.8, 14.7) needs [icon(MoonPearl), level(Glove, 2)] => |items, _| if dark_east_death_mountain(items) {
        death_mountain_light(items)
    } else {
        Unavailable
    },
    12: "Sahasrahla's Hut" at (40.7, 41.4) => |_, _| Available,
    13: "Spike Cave" at (78.6, 14.9) needs [icon(MoonPearl), level(Glove, 1), icon(Hammer), icon(Byrna)] | [icon(MoonPearl), level(Glove, 1), icon(Hammer), icon(Cape)] => |items, _| {
        if !items.moonpearl || items.glove == 0 || !items.hammer { return Unavailable }
        if !items.byrna && !items.cape { return Unavailable }
        death_mountain_light(items)
    },
    14: "Kakariko Well" at (1.7, 41.0) => |_, _| Available,
    15: "Blind's Hideout" at (6.4, 41.0) => |_, _| Available,
    16: "Hype Cave" at (80.0, 77.1) needs [icon(MoonPearl)] => |items, _| if south_dark_world(items) { Available } else { Unavailable },
    17: "Paradox Cave" at (41.4, 17.1) needs [icon(Hookshot)] | [icon(Mirror), icon(Hammer)] => |items, _| if east_death_mountain(items) {
        death_mountain_light(items)
    } else {
        Unavailable
    },
    18: "Bonk Rocks" at (19.5, 29.3) needs [icon(Boots)] => |items, _| if items.boots { Available } else { Unavailable },
    19: "Mini Moldorm Cave" at (32.6, 93.4) => |_, _| Available,
    20: "Ice Rod Cave" at (44.7, 76.9) => |_, _| Available,
    21: "Hookshot Cave (bottom chest)" at (91.6, 8.6) needs [icon(MoonPearl), level(Glove, 2), icon(Hookshot)] | [icon(MoonPearl), level(Glove, 2), icon(Boots)] => |items, _| {
        if !items.moonpearl || items.glove != 2 || !death_mountain(items) { return Unavailable }
        if items.hookshot || items.mirror && items.hammer && items.boots { death_mountain_light(items) } else { Unavailable }
    },
    22: "Hookshot Cave (three top chests)" at (91.6, 3.4) needs [icon(MoonPearl), level(Glove, 2), icon(Hookshot)] => |items, _| {
        if items.moonpearl && items.glove == 2 && items.hookshot { death_mountain_light(items) } else { Unavailable }
    },
    23: "Treasure Chest Game" at (52.1, 46.4) needs [icon(MoonPearl), level(Glove, 2)] | [icon(MoonPearl), level(Glove, 1), icon(Hammer)] => |items, _| if steve(items) { Available } else { Unavailable },
    24: "Bottle Vendor" at (4.5, 46.5) => |_, _| Available,
    25: "Sahasrahla" at (40.7, 46.7) => |items, _| if has_green_pendant(items) { Available } else { Unavailable },
    26: "Stumpy" at (65.5, 68.6) needs [icon(MoonPearl)] => |items, _| if south_dark_world(items) { Available } else { Unavailable },
    27: "Library" at (7.7, 65.9) needs [icon(Boots)] => |items, _| Classification::available_if(items.boots),
    28: "Lost Woods Mushroom" at (6.2, 8.6) => |_, _| Available,
    29: "Spectacle Rock" at (25.4, 8.5) needs [icon(Mirror)] => |items, _| {
        if !death_mountain(items) { return Unavailable }
        if items.mirror { death_mountain_light(items) } else { Possible }
    },
    30: "Floating Island" at (40.2, 3.0) needs [icon(MoonPearl), level(Glove, 2), icon(Mirror), icon(Hookshot)] | [icon(MoonPearl), level(Glove, 2), icon(Mirror), icon(Hammer)] => |items, _| {
        if !death_mountain(items) { return Unavailable }
        if items.mirror && dark_east_death_mountain(items) { death_mountain_light(items) } else { Possible }
    },
    31: "Race Minigame" at (1.8, 69.8) => |_, _| Available,
    32: "Desert West Ledge" at (1.5, 91.0) needs [icon(Book)] | [icon(Flute), level(Glove, 2), icon(Mirror)] => |items, _| {
        Classification::available_if(items.book || items.flute && items.glove == 2 && items.mirror)
    },
    33: "Lake Hylia Island" at (36.1, 82.9) needs [icon(MoonPearl), icon(Flippers), icon(Mirror)] => |items, _| {
        Classification::available_if(items.flippers && items.moonpearl && items.mirror && (items.agahnim || items.glove == 2 || items.glove > 0 && items.hammer))
    },
    34: "Bumper Cave" at (67.1, 15.2) needs [icon(MoonPearl), level(Glove, 1), icon(Cape)] => |items, _| if steve(items) {
        Classification::available_if(items.cape && items.glove > 0)
    } else {
        Unavailable
    },
    35: "Pyramid" at (79.0, 43.5) => |items, _| {
        if items.agahnim || items.moonpearl && (items.glove > 0 && items.hammer || items.glove == 2 && items.flippers) { Available } else { Unavailable }
    },
    36: "Digging Game" at (52.9, 69.2) needs [icon(MoonPearl), level(Glove, 2)] | [icon(MoonPearl), level(Glove, 1), icon(Hammer)] => |items, _| if steve(items) { Available } else { Unavailable },
    37: "Zora's Ledge" at (47.5, 12.1) needs [icon(Flippers)] => |items, _| {
        if items.flippers { Available } else if items.glove > 0 { Possible } else { Unavailable }
    },
    38: "Haunted Grove" at (14.4, 71.7) needs [icon(Shovel)] => |items, _| if items.shovel { Available } else { Unavailable },
    39: "Sewers" at (26.8, 32.4) => |items, _| {
        if items.glove > 0 { Available } else if items.lantern { Possible } else { Unavailable }
    },
    40: "Link's Uncle and Secret Passage" at (29.1, 41.8) => |_, _| Available,
    41: "Hyrule Castle Dungeon" at (24.9, 44.1) => |_, _| Available,
    42: "Sanctuary" at (23.0, 28.0) => |_, _| Available,
    43: "Mad Batter" at (16.0, 58.0) needs [icon(Hammer), icon(Powder)] | [icon(MoonPearl), level(Glove, 2), icon(Mirror), icon(Powder)] => |items, _| {
        if items.hammer || items.glove == 2 && items.mirror && items.moonpearl { Classification::available_if(items.powder) } else { Unavailable }
    },
    44: "Blacksmith" at (15.2, 51.8) needs [icon(MoonPearl), level(Glove, 2)] => |items, _| {
        if items.moonpearl && items.glove == 2 { Available } else { Unavailable }
    },
    45: "Pyramid Fairy" at (73.5, 48.5) needs [icon(MoonPearl), icon(Agahnim), icon(Hammer)] | [icon(MoonPearl), level(Glove, 2), icon(Mirror)] => |items, _| {
        if red_crystal_count(items) < 2 || !items.moonpearl { return Unavailable }
        if items.hammer && (items.agahnim || items.glove > 0) || items.glove == 2 && items.mirror { Available } else { Unavailable }
    },
    46: "Master Sword Pedestal" at (2.5, 3.2) needs [icon(Book)] => |items, _| {
        if pendant_count(items) >= 3 { Available } else if items.book { Possible } else { Unavailable }
    },
    47: "Waterfall Fairy" at (44.9, 14.7) needs [icon(Flippers)] => |items, _| if items.flippers { Available } else { Unavailable },
    48: "Catfish" at (96.0, 17.2) needs [icon(MoonPearl), level(Glove, 1)] => |items, _| {
        if items.moonpearl && items.glove > 0 && (items.agahnim || items.hammer || items.glove == 2 && items.flippers) { Available } else { Unavailable }
    },
    49: "King Zora" at (47.5, 12.1) needs [icon(Flippers)] | [level(Glove, 1)] => |items, _| {
        if items.flippers || items.glove > 0 { Available } else { Unavailable }
    },
    50: "Old Man" at (20.8, 20.4) needs [icon(Lantern)] => |items, _| if death_mountain(items) {
        Classification::available_if(items.lantern)
    } else {
        Unavailable
    },
    51: "Witch" at (40.8, 32.5) needs [icon(Mushroom)] => |items, _| if items.mushroom { Available } else { Unavailable },
    52: "Forest Hideout" at (9.4, 13.0) => |_, _| Available,
    53: "Lumberjack Tree" at (15.1, 7.6) needs [icon(Agahnim), icon(Boots)] => |items, _| Classification::available_if(items.agahnim && items.boots),
    54: "Spectacle Rock Cave" at (24.3, 14.8) => |items, _| if death_mountain(items) { death_mountain_light(items) } else { Unavailable },
    55: "Cave 45" at (13.8, 80.3) needs [icon(MoonPearl), icon(Mirror)] => |items, _| {
        if south_dark_world(items) && items.mirror { Available } else { Unavailable }
    },
    56: "Graveyard Ledge" at (28.1, 27.0) needs [icon(MoonPearl), icon(Mirror)] => |items, _| {
        if steve(items) && items.mirror { Available } else { Unavailable }
    },
    57: "Checkerboard Cave" at (8.8, 77.3) needs [icon(Flute), level(Glove, 2), icon(Mirror)] => |items, _| {
        if items.flute && items.glove == 2 && items.mirror { Available } else { Unavailable }
    },
    58: "Hammer Pegs" at (65.8, 60.1) needs [icon(MoonPearl), level(Glove, 2), icon(Hammer)] => |items, _| {
        if items.moonpearl && items.glove == 2 && items.hammer { Available } else { Unavailable }
    },
    59: "Purple Chest" at (65.2, 52.2) needs [icon(MoonPearl), level(Glove, 2)] => |items, _| {
        if items.moonpearl && items.glove == 2 { Available } else { Unavailable }
    },
    60: "Hobo" at (35.4, 69.7) needs [icon(Flippers)] => |items, _| if items.flippers { Available } else { Unavailable },
    61: "Sunken Treasure" at (24.4, 93.2) => |_, _| Available,
    62: "Bombos Tablet" at (11.0, 92.2) needs [icon(Book), icon(Mirror), level(Sword, 2)] => |items, _| {
        if !items.book || !items.mirror || !south_dark_world(items) { return Unavailable }
        Classification::available_if(items.sword >= 2)
    },
    63: "Ether Tablet" at (21.0, 3.0) needs [icon(Book), level(Sword, 2)] => |items, _| {
        if !items.book || !death_mountain(items) { return Unavailable }
        if !items.mirror && !(items.hookshot && items.hammer) { return Unavailable }
        if items.sword >= 2 { death_mountain_light(items) } else { Possible }
    },
}
