mod common;

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use colony_rewards::host::{
    DropQueue, Faction, LetterKind, LetterStack, LordManager, LordStrategy, Map, PawnApparel,
    PawnEquipment, PawnHealth, PawnIdentity, PawnMind, PawnTraits,
};
use colony_rewards::raid::{AUGMENT_COUNT_RANGE, RAID_DROP_DELAY_TICKS};
use colony_rewards::rewards::{EvilRaid, Reward, RewardContext, WEAPON_VALUE_TARGET};
use colony_rewards::DefCatalog;

use common::{colony_world, rng, visiting_world};

fn raiders_by_id(world: &mut World) -> Vec<Entity> {
    let mut out: Vec<(u64, Entity)> = world
        .query::<(Entity, &PawnIdentity)>()
        .iter(world)
        .filter(|(_, identity)| identity.faction == Faction::Raider)
        .map(|(entity, identity)| (identity.id, entity))
        .collect();
    out.sort_by_key(|(id, _)| *id);
    out.into_iter().map(|(_, entity)| entity).collect()
}

#[test]
fn raid_mirrors_the_roster_one_to_one() {
    let mut rng = rng(101);
    let (mut world, colonists) = colony_world(4, &mut rng);
    assert!(EvilRaid::new().try_execute(&mut RewardContext {
        world: &mut world,
        rng: &mut rng,
    }));

    let raiders = raiders_by_id(&mut world);
    assert_eq!(raiders.len(), colonists.len());
    for (&colonist, &raider) in colonists.iter().zip(&raiders) {
        let source = world.get::<PawnIdentity>(colonist).unwrap();
        let target = world.get::<PawnIdentity>(raider).unwrap();
        assert_eq!(source.name, target.name);
        assert_eq!(target.faction, Faction::Raider);
        assert_eq!(
            world.get::<PawnTraits>(colonist).unwrap().traits,
            world.get::<PawnTraits>(raider).unwrap().traits
        );
    }
}

#[test]
fn exactly_one_raider_is_forced_down() {
    let mut rng = rng(103);
    let (mut world, _) = colony_world(5, &mut rng);
    assert!(EvilRaid::new().try_execute(&mut RewardContext {
        world: &mut world,
        rng: &mut rng,
    }));

    let raiders = raiders_by_id(&mut world);
    let incapped = raiders
        .iter()
        .filter(|&&r| world.get::<PawnHealth>(r).unwrap().forced_incap)
        .count();
    assert_eq!(incapped, 1);
    for &raider in &raiders {
        let health = world.get::<PawnHealth>(raider).unwrap();
        let mind = world.get::<PawnMind>(raider).unwrap();
        assert_eq!(mind.can_flee, !health.forced_incap);
    }
}

#[test]
fn every_raider_is_armed_and_augmented() {
    let mut rng = rng(107);
    let (mut world, _) = colony_world(3, &mut rng);
    assert!(EvilRaid::new().try_execute(&mut RewardContext {
        world: &mut world,
        rng: &mut rng,
    }));

    let raiders = raiders_by_id(&mut world);
    let catalog = world.resource::<DefCatalog>().clone();
    for &raider in &raiders {
        let equipment = world.get::<PawnEquipment>(raider).unwrap();
        let weapon = equipment.primary.as_ref().expect("raider is armed");
        let def = catalog.thing(&weapon.def).unwrap();
        assert!(def.player_usable_weapon());
        assert_eq!(weapon.quality.is_some(), def.has_quality);

        if def.ranged {
            let apparel = world.get::<PawnApparel>(raider).unwrap();
            assert!(
                apparel
                    .worn
                    .iter()
                    .all(|item| !catalog.thing(&item.def).unwrap().shield)
            );
        }

        let added = world
            .get::<PawnHealth>(raider)
            .unwrap()
            .added_parts()
            .count();
        assert!(
            AUGMENT_COUNT_RANGE.contains(&(added as u32)),
            "{added} augments"
        );
    }
}

#[test]
fn raid_arrives_by_drop_pod_under_one_lord() {
    let mut rng = rng(109);
    let (mut world, _) = colony_world(2, &mut rng);
    assert!(EvilRaid::new().try_execute(&mut RewardContext {
        world: &mut world,
        rng: &mut rng,
    }));

    let raiders = raiders_by_id(&mut world);

    let drops = &world.resource::<DropQueue>().pending;
    assert_eq!(drops.len(), 1);
    assert_eq!(drops[0].pawns.len(), raiders.len());
    assert_eq!(drops[0].delay_ticks, RAID_DROP_DELAY_TICKS);
    assert!(world.resource::<Map>().home_cells().any(|c| c == drops[0].cell));

    let lords = &world.resource::<LordManager>().lords;
    assert_eq!(lords.len(), 1);
    assert_eq!(lords[0].strategy, LordStrategy::AssaultColony);
    assert_eq!(lords[0].faction, Faction::Raider);
    assert_eq!(lords[0].pawns.len(), raiders.len());

    assert!(
        world
            .resource::<LetterStack>()
            .letters
            .iter()
            .any(|l| l.kind == LetterKind::ThreatBig)
    );
}

#[test]
fn weapon_value_target_is_reachable_in_standard_catalog() {
    let catalog = DefCatalog::standard();
    let max = catalog
        .things()
        .filter(|t| t.player_usable_weapon())
        .map(|t| t.market_value)
        .fold(0.0f32, f32::max);
    assert!(max >= WEAPON_VALUE_TARGET);
}

#[test]
fn raid_refuses_an_empty_colony() {
    let mut rng = rng(113);
    let (mut world, _) = colony_world(0, &mut rng);
    assert!(!EvilRaid::new().try_execute(&mut RewardContext {
        world: &mut world,
        rng: &mut rng,
    }));
    assert!(raiders_by_id(&mut world).is_empty());
    assert!(world.resource::<DropQueue>().pending.is_empty());
    assert!(world.resource::<LetterStack>().letters.is_empty());
}

#[test]
fn raid_refuses_a_dead_colony() {
    let mut rng = rng(127);
    let (mut world, colonists) = colony_world(2, &mut rng);
    for &pawn in &colonists {
        world.get_mut::<PawnIdentity>(pawn).unwrap().dead = true;
    }
    assert!(!EvilRaid::new().try_execute(&mut RewardContext {
        world: &mut world,
        rng: &mut rng,
    }));
    assert!(raiders_by_id(&mut world).is_empty());
}

#[test]
fn raid_refuses_non_home_maps() {
    let mut rng = rng(131);
    let mut world = visiting_world(&mut rng);
    let raid = EvilRaid::new();
    assert_eq!(
        raid.disabled(&RewardContext {
            world: &mut world,
            rng: &mut rng,
        })
        .as_deref(),
        Some("no valid target map")
    );
    assert!(!raid.try_execute(&mut RewardContext {
        world: &mut world,
        rng: &mut rng,
    }));
}
