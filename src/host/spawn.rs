use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use rand::{Rng, RngCore};

use crate::defs::{DefCatalog, DefError};
use crate::host::components::{
    ApparelItem, BodyType, Faction, Passion, Pawn, PawnAge, PawnApparel, PawnBody, PawnEquipment,
    PawnHealth, PawnIdentity, PawnMind, PawnMood, PawnPosition, PawnRecords, PawnSkills,
    PawnStory, PawnTraining, PawnTraits, Skill,
};
use crate::host::map::Cell;
use crate::host::names::generate_pawn_name;
use crate::host::quality::Quality;
use crate::host::resources::PawnIds;

/// Marker for every spawned thing entity.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ThingMarker;

/// Full state of a thing on the map, one component per thing entity.
#[derive(Component, Debug, Clone)]
pub struct ThingState {
    pub def: String,
    pub stuff: Option<String>,
    pub quality: Option<Quality>,
    pub cell: Cell,
    pub faction: Option<Faction>,
}

pub fn spawn_thing(world: &mut World, state: ThingState) -> Entity {
    world.spawn((ThingMarker, state)).id()
}

const SKILL_NAMES: &[&str] = &[
    "shooting",
    "melee",
    "construction",
    "mining",
    "cooking",
    "plants",
    "animals",
    "crafting",
    "medicine",
    "social",
    "intellectual",
    "artistic",
];

const TRAIT_POOL: &[&str] = &[
    "bloodlust",
    "kind",
    "tough",
    "abrasive",
    "optimist",
    "volatile",
    "ascetic",
    "greedy",
    "nimble",
    "brawler",
];

const CHILDHOODS: &[&str] = &[
    "urbworld urchin",
    "farm kid",
    "vatgrown soldier",
    "tribal child",
    "caravan hand",
];

const ADULTHOODS: &[&str] = &[
    "mercenary",
    "colony settler",
    "deep space pilot",
    "bounty hunter",
    "machinist",
];

const HAIRS: &[&str] = &["shaved", "mop", "braids", "topknot", "curly"];

fn random_skills(rng: &mut dyn RngCore) -> PawnSkills {
    let skills = SKILL_NAMES
        .iter()
        .map(|name| {
            let passion_roll: f64 = rng.random();
            Skill {
                name: name.to_string(),
                level: rng.random_range(0..=12),
                passion: if passion_roll < 0.7 {
                    Passion::None
                } else if passion_roll < 0.9 {
                    Passion::Minor
                } else {
                    Passion::Major
                },
            }
        })
        .collect();
    PawnSkills { skills }
}

fn random_traits(rng: &mut dyn RngCore) -> PawnTraits {
    let count = rng.random_range(1..=3);
    let mut traits: Vec<(String, i8)> = Vec::with_capacity(count);
    while traits.len() < count {
        let name = TRAIT_POOL[rng.random_range(0..TRAIT_POOL.len())];
        if traits.iter().any(|(n, _)| n == name) {
            continue;
        }
        traits.push((name.to_string(), 0));
    }
    PawnTraits { traits }
}

fn random_body(rng: &mut dyn RngCore) -> PawnBody {
    let body_type = match rng.random_range(0..4) {
        0 => BodyType::Thin,
        1 => BodyType::Standard,
        2 => BodyType::Hulk,
        _ => BodyType::Fat,
    };
    PawnBody {
        body_type,
        head_path: format!("heads/average_{}", rng.random_range(1..=4)),
        hair: HAIRS[rng.random_range(0..HAIRS.len())].to_string(),
        skin_tone: rng.random_range(0..=5),
    }
}

fn starting_apparel(catalog: &DefCatalog, rng: &mut dyn RngCore) -> Vec<ApparelItem> {
    // Cheap clothing only: new pawns arrive in basics, not shield belts.
    let basics: Vec<&str> = catalog
        .things()
        .filter(|t| t.is_apparel() && !t.shield && t.market_value < 250.0)
        .map(|t| t.name.as_str())
        .collect();
    if basics.is_empty() {
        return Vec::new();
    }
    let count = rng.random_range(1..=2.min(basics.len()));
    let mut worn = Vec::with_capacity(count);
    while worn.len() < count {
        let def = basics[rng.random_range(0..basics.len())];
        if worn.iter().any(|a: &ApparelItem| a.def == def) {
            continue;
        }
        worn.push(ApparelItem {
            def: def.to_string(),
            quality: Some(Quality::Normal),
        });
    }
    worn
}

/// Create a fresh pawn of the given kind. The pawn exists in the world but
/// has no map position until the host places it (or a drop group delivers
/// it).
pub fn generate_pawn(
    world: &mut World,
    kind_name: &str,
    faction: Faction,
    rng: &mut dyn RngCore,
) -> Result<Entity, DefError> {
    let catalog = world.resource::<DefCatalog>();
    let kind = catalog
        .pawn_kind(kind_name)
        .ok_or_else(|| DefError::Unknown {
            kind: "pawn_kind",
            name: kind_name.to_string(),
        })?
        .clone();
    let apparel = if kind.humanlike {
        starting_apparel(catalog, rng)
    } else {
        Vec::new()
    };

    let id = world.resource_mut::<PawnIds>().next_id();
    let identity = PawnIdentity {
        id,
        name: generate_pawn_name(rng),
        kind: kind.name.clone(),
        faction,
        dead: false,
    };
    let age = PawnAge::from_years(rng.random_range(18..=60));
    let story = if kind.humanlike {
        PawnStory {
            childhood: CHILDHOODS[rng.random_range(0..CHILDHOODS.len())].to_string(),
            adulthood: Some(ADULTHOODS[rng.random_range(0..ADULTHOODS.len())].to_string()),
        }
    } else {
        PawnStory::default()
    };

    let entity = world
        .spawn((
            Pawn,
            identity,
            random_skills(rng),
            random_traits(rng),
            story,
            random_body(rng),
            age,
            PawnHealth::humanlike(),
            PawnMind::default(),
            PawnMood::default(),
            PawnApparel { worn: apparel },
            PawnEquipment::default(),
            PawnRecords::default(),
            PawnTraining::default(),
            PawnPosition::default(),
        ))
        .id();
    Ok(entity)
}
