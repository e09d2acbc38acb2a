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
            DungeonLocation,
            RequirementIcon::MedallionSlot,
            icon,
            level,
        },
        logic::*,
    },
};

pub(crate) static DUNGEONS: [DungeonLocation; z3r::dungeon::COUNT] = [
    DungeonLocation {
        dungeon: Dungeon::EasternPalace,
        x: 46.8,
        y: 38.8,
        requirements: &[&[level(Bow, 2), icon(Lantern)]],
        is_beatable: |_, items, _| if items.bow > 1 {
            Classification::available_if(items.lantern)
        } else {
            Unavailable
        },
        can_get_chest: |_, items, _| {
            let remaining = items.chests[Dungeon::EasternPalace];
            if remaining <= 2 && !items.lantern || remaining == 1 && !(items.bow > 1) {
                Possible
            } else {
                Available
            }
        },
    },
    DungeonLocation {
        dungeon: Dungeon::DesertPalace,
        x: 3.8,
        y: 78.4,
        requirements: &[&[icon(Book), level(Glove, 1)], &[icon(Mirror), icon(Flute), level(Glove, 2)]],
        is_beatable: |_, items, _| {
            if !(items.book && items.glove > 0) && !(items.flute && items.glove == 2 && items.mirror) { return Unavailable }
            if !items.lantern && !items.firerod { return Unavailable }
            Classification::available_if(items.boots)
        },
        can_get_chest: |_, items, _| {
            if !items.book && !(items.flute && items.glove == 2 && items.mirror) { return Unavailable }
            if items.glove > 0 && (items.firerod || items.lantern) && items.boots { return Available }
            Classification::available_if(items.chests[Dungeon::DesertPalace] > 1 && items.boots)
        },
    },
    DungeonLocation {
        dungeon: Dungeon::TowerOfHera,
        x: 31.0,
        y: 5.5,
        requirements: &[&[icon(Mirror)], &[icon(Hookshot), icon(Hammer)]],
        is_beatable: |_, items, _| {
            if !death_mountain(items) { return Unavailable }
            if !items.mirror && !(items.hookshot && items.hammer) { return Unavailable }
            if items.sword == 0 && !items.hammer { return Unavailable }
            if items.firerod || items.lantern { death_mountain_light(items) } else { Possible }
        },
        can_get_chest: |_, items, _| {
            if !death_mountain(items) { return Unavailable }
            if !items.mirror && !(items.hookshot && items.hammer) { return Unavailable }
            if items.firerod || items.lantern { death_mountain_light(items) } else { Possible }
        },
    },
    DungeonLocation {
        dungeon: Dungeon::PalaceOfDarkness,
        x: 97.0,
        y: 40.0,
        requirements: &[&[level(Bow, 2), icon(Hammer), icon(Lantern)]],
        is_beatable: |_, items, _| {
            if !items.moonpearl || !(items.bow > 1) || !items.hammer { return Unavailable }
            if !items.agahnim && items.glove == 0 { return Unavailable }
            Classification::available_if(items.lantern)
        },
        can_get_chest: |_, items, _| {
            if !east_dark_world(items) { return Unavailable }
            if !(items.bow > 1 && items.lantern) || items.chests[Dungeon::PalaceOfDarkness] == 1 && !items.hammer {
                Possible
            } else {
                Available
            }
        },
    },
    DungeonLocation {
        dungeon: Dungeon::SwampPalace,
        x: 73.5,
        y: 91.0,
        requirements: &[&[icon(Mirror), icon(Flippers), icon(Hammer), icon(Hookshot)]],
        is_beatable: |_, items, _| {
            if !items.moonpearl || !items.mirror || !items.flippers { return Unavailable }
            if !items.hammer || !items.hookshot { return Unavailable }
            if !south_dark_world(items) { return Unavailable }
            Available
        },
        can_get_chest: |_, items, _| {
            if !items.moonpearl || !items.mirror || !items.flippers { return Unavailable }
            if !south_dark_world(items) { return Unavailable }
            // the first chest is right at the entrance, everything past it needs the hammer
            match items.chests[Dungeon::SwampPalace] {
                0..=2 => if !items.hammer || !items.hookshot { Unavailable } else { Available },
                3..=4 => if !items.hammer { Unavailable } else if !items.hookshot { Possible } else { Available },
                5 => if !items.hammer { Unavailable } else { Available },
                _ => Classification::available_if(items.hammer),
            }
        },
    },
    DungeonLocation {
        dungeon: Dungeon::SkullWoods,
        x: 53.3,
        y: 5.4,
        requirements: &[&[icon(FireRod)]],
        is_beatable: |_, items, _| {
            if !steve(items) || !items.firerod { return Unavailable }
            if items.sword == 0 { return Unavailable }
            Available
        },
        can_get_chest: |_, items, _| if steve(items) {
            Classification::available_if(items.firerod)
        } else {
            Unavailable
        },
    },
    DungeonLocation {
        dungeon: Dungeon::ThievesTown,
        x: 56.4,
        y: 47.9,
        requirements: &[],
        is_beatable: |_, items, _| if steve(items) { Available } else { Unavailable },
        can_get_chest: |location, items, medallions| match (location.is_beatable)(location, items, medallions) {
            // the big chest needs the hammer
            Available if items.chests[Dungeon::ThievesTown] == 1 && !items.hammer => Possible,
            beatable => beatable,
        },
    },
    DungeonLocation {
        dungeon: Dungeon::IcePalace,
        x: 89.8,
        y: 85.8,
        requirements: &[&[icon(Flippers), level(Glove, 2), icon(Hammer), icon(FireRod)], &[icon(Flippers), level(Glove, 2), icon(Hammer), icon(Bombos)]],
        is_beatable: |_, items, _| {
            if !items.moonpearl || !items.flippers || items.glove != 2 || !items.hammer { return Unavailable }
            if !items.firerod && !(items.bombos && items.sword > 0) { return Unavailable }
            Classification::available_if(items.hookshot || items.somaria)
        },
        can_get_chest: |_, items, _| {
            if !items.moonpearl || !items.flippers || items.glove != 2 { return Unavailable }
            if !items.firerod && !(items.bombos && items.sword > 0) { return Unavailable }
            Classification::available_if(items.hammer)
        },
    },
    DungeonLocation {
        dungeon: Dungeon::MiseryMire,
        x: 55.8,
        y: 82.9,
        requirements: &[&[icon(Flute), level(Glove, 2), MedallionSlot(Dungeon::MiseryMire), icon(Somaria)]],
        is_beatable: |location, items, medallions| {
            if !items.moonpearl || !items.flute || items.glove != 2 || !items.somaria { return Unavailable }
            if !items.boots && !items.hookshot { return Unavailable }
            if let Some(gate) = medallion_check(location.dungeon, items, medallions) { return gate }
            if items.lantern || items.firerod { Classification::available_if(items.lantern) } else { Possible }
        },
        can_get_chest: |location, items, medallions| {
            if !items.moonpearl || !items.flute || items.glove != 2 { return Unavailable }
            if !items.boots && !items.hookshot { return Unavailable }
            if let Some(gate) = medallion_check(location.dungeon, items, medallions) { return gate }
            Classification::available_if(if items.chests[Dungeon::MiseryMire] > 1 {
                items.lantern || items.firerod
            } else {
                items.lantern && items.somaria
            })
        },
    },
    DungeonLocation {
        dungeon: Dungeon::TurtleRock,
        x: 96.9,
        y: 7.0,
        requirements: &[&[level(Glove, 2), icon(Hammer), MedallionSlot(Dungeon::TurtleRock), icon(Somaria), icon(FireRod), icon(IceRod)]],
        is_beatable: |location, items, medallions| {
            if !items.moonpearl || !items.hammer || items.glove != 2 || !items.somaria { return Unavailable }
            if !items.hookshot && !items.mirror { return Unavailable }
            if !items.icerod || !items.firerod { return Unavailable }
            if let Some(gate) = medallion_check(location.dungeon, items, medallions) { return gate }
            if laser_safety(items) { Classification::available_if(items.lantern) } else { Unavailable }
        },
        can_get_chest: |location, items, medallions| {
            if !items.moonpearl || !items.hammer || items.glove != 2 || !items.somaria { return Unavailable }
            if !items.hookshot && !items.mirror { return Unavailable }
            if let Some(gate) = medallion_check(location.dungeon, items, medallions) { return gate }
            let dark_room = Classification::available_if(items.lantern);
            match items.chests[Dungeon::TurtleRock] {
                0..=1 => if !laser_safety(items) { Unavailable } else if items.firerod && items.icerod { dark_room } else { Possible },
                2 => if !laser_safety(items) { Unavailable } else if items.firerod { dark_room } else { Possible },
                3..=4 => Classification::available_if(laser_safety(items) && items.firerod && items.lantern),
                _ => Classification::available_if(items.firerod && items.lantern),
            }
        },
    },
];

#[cfg(test)]
mod tests {
    use {
        z3r::Medallion,
        crate::{
            location::dungeon,
            state::{
                Items,
                Medallions,
            },
        },
        super::*,
    };

    fn beatable(dungeon_: Dungeon, items: &Items, medallions: &Medallions) -> Classification {
        let location = dungeon(dungeon_);
        (location.is_beatable)(location, items, medallions)
    }

    fn chest(dungeon_: Dungeon, items: &Items, medallions: &Medallions) -> Classification {
        let location = dungeon(dungeon_);
        (location.can_get_chest)(location, items, medallions)
    }

    fn mire_items() -> Items {
        Items {
            moonpearl: true,
            flute: true,
            glove: 2,
            somaria: true,
            boots: true,
            lantern: true,
            ether: true,
            quake: true,
            ..Items::default()
        }
    }

    #[test]
    fn nothing_held() {
        let items = Items::default();
        let medallions = Medallions::default();
        assert_eq!(beatable(Dungeon::EasternPalace, &items, &medallions), Unavailable);
        assert_eq!(chest(Dungeon::EasternPalace, &items, &medallions), Available);
        assert_eq!(beatable(Dungeon::TurtleRock, &items, &medallions), Unavailable);
    }

    #[test]
    fn eastern_palace_lantern() {
        let mut items = Items { bow: 2, ..Items::default() };
        assert_eq!(beatable(Dungeon::EasternPalace, &items, &Medallions::default()), Possible);
        items.lantern = true;
        assert_eq!(beatable(Dungeon::EasternPalace, &items, &Medallions::default()), Available);
    }

    #[test]
    fn mire_assigned_medallion_missing() {
        let mut medallions = Medallions::default();
        medallions[Dungeon::MiseryMire] = Medallion::Bombos;
        assert_eq!(beatable(Dungeon::MiseryMire, &mire_items(), &medallions), Unavailable);
        medallions[Dungeon::MiseryMire] = Medallion::Ether;
        assert_eq!(beatable(Dungeon::MiseryMire, &mire_items(), &medallions), Available);
    }

    #[test]
    fn mire_unknown_medallion() {
        let medallions = Medallions::default();
        assert_eq!(beatable(Dungeon::MiseryMire, &mire_items(), &medallions), Possible);
        let all_medallions = Items { bombos: true, ..mire_items() };
        assert_eq!(beatable(Dungeon::MiseryMire, &all_medallions, &medallions), Available);
    }

    #[test]
    fn swamp_palace_depends_on_remaining_chests() {
        let mut items = Items { moonpearl: true, mirror: true, flippers: true, glove: 2, ..Items::default() };
        let medallions = Medallions::default();
        assert_eq!(chest(Dungeon::SwampPalace, &items, &medallions), Possible);
        items.chests[Dungeon::SwampPalace] = 5;
        assert_eq!(chest(Dungeon::SwampPalace, &items, &medallions), Unavailable);
        items.hammer = true;
        assert_eq!(chest(Dungeon::SwampPalace, &items, &medallions), Available);
        items.chests[Dungeon::SwampPalace] = 4;
        assert_eq!(chest(Dungeon::SwampPalace, &items, &medallions), Possible);
        items.chests[Dungeon::SwampPalace] = 2;
        assert_eq!(chest(Dungeon::SwampPalace, &items, &medallions), Unavailable);
        items.hookshot = true;
        assert_eq!(chest(Dungeon::SwampPalace, &items, &medallions), Available);
    }

    #[test]
    fn thieves_town_big_chest() {
        let mut items = Items { moonpearl: true, glove: 2, ..Items::default() };
        let medallions = Medallions::default();
        assert_eq!(chest(Dungeon::ThievesTown, &items, &medallions), Available);
        items.chests[Dungeon::ThievesTown] = 1;
        assert_eq!(chest(Dungeon::ThievesTown, &items, &medallions), Possible);
        items.moonpearl = false;
        assert_eq!(chest(Dungeon::ThievesTown, &items, &medallions), Unavailable);
    }

    #[test]
    fn turtle_rock_lasers() {
        let mut medallions = Medallions::default();
        medallions[Dungeon::TurtleRock] = Medallion::Quake;
        let mut items = Items {
            moonpearl: true,
            hammer: true,
            glove: 2,
            somaria: true,
            hookshot: true,
            firerod: true,
            icerod: true,
            quake: true,
            lantern: true,
            ..Items::default()
        };
        assert_eq!(beatable(Dungeon::TurtleRock, &items, &medallions), Unavailable);
        items.shield = 3;
        assert_eq!(beatable(Dungeon::TurtleRock, &items, &medallions), Available);
    }
}
