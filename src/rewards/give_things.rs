use rand::{Rng, RngCore};

use crate::defs::DefCatalog;
use crate::host::{
    Faction, LetterKind, LetterStack, Map, Quality, ThingState, roll_quality, spawn_thing,
};

use super::{Reward, RewardContext, home_map_ready, map_disabled};

/// A thing chosen by a supplier, waiting to be spawned.
#[derive(Debug, Clone)]
pub struct PendingThing {
    pub def: String,
    pub stuff: Option<String>,
    pub quality: Option<Quality>,
    pub faction: Option<Faction>,
}

pub(crate) fn random_stuff(catalog: &DefCatalog, rng: &mut dyn RngCore) -> Option<String> {
    let stuffs: Vec<&str> = catalog
        .things()
        .filter(|t| t.stuff)
        .map(|t| t.name.as_str())
        .collect();
    if stuffs.is_empty() {
        return None;
    }
    Some(stuffs[rng.random_range(0..stuffs.len())].to_string())
}

/// Spawn up to `count` supplied things near a random standable home cell:
/// the first lands on the anchor, the rest on adjacent cells. Returns false
/// without mutating anything when there is no standable home cell or the
/// supplier produces nothing at all.
pub fn drop_things_near_home<F>(ctx: &mut RewardContext, count: usize, mut supply: F) -> bool
where
    F: FnMut(&DefCatalog, &mut dyn RngCore) -> Option<PendingThing>,
{
    let Some(anchor) = ctx
        .world
        .resource::<Map>()
        .random_standable_home_cell(ctx.rng)
    else {
        return false;
    };

    let mut spawned = 0usize;
    let mut cell = anchor;
    for i in 0..count {
        let Some(pending) = supply(ctx.world.resource::<DefCatalog>(), ctx.rng) else {
            continue;
        };
        if i > 0 {
            cell = ctx.world.resource::<Map>().random_adjacent8(cell, ctx.rng);
        }
        spawn_thing(
            ctx.world,
            ThingState {
                def: pending.def,
                stuff: pending.stuff,
                quality: pending.quality,
                cell,
                faction: pending.faction,
            },
        );
        spawned += 1;
    }
    spawned > 0
}

/// Drops one random colonist-usable weapon in the home area.
pub struct GiveWeapon;

impl Reward for GiveWeapon {
    fn name(&self) -> &str {
        "give_weapon"
    }

    fn disabled(&self, ctx: &RewardContext) -> Option<String> {
        map_disabled(ctx)
    }

    fn try_execute(&self, ctx: &mut RewardContext) -> bool {
        if !home_map_ready(ctx) {
            return false;
        }
        let delivered = drop_things_near_home(ctx, 1, |catalog, rng| {
            let pool: Vec<_> = catalog
                .things()
                .filter(|t| t.player_usable_weapon())
                .collect();
            if pool.is_empty() {
                return None;
            }
            let def = pool[rng.random_range(0..pool.len())];
            Some(PendingThing {
                def: def.name.clone(),
                stuff: def.made_from_stuff.then(|| random_stuff(catalog, rng)).flatten(),
                quality: def.has_quality.then(|| roll_quality(rng)),
                faction: None,
            })
        });
        if delivered {
            ctx.world.resource_mut::<LetterStack>().post(
                "Weapon delivery",
                "A weapon has been delivered to the colony.",
                LetterKind::Positive,
            );
        }
        delivered
    }
}

/// Drops five random apparel items around a home cell.
pub struct GiveApparel;

impl Reward for GiveApparel {
    fn name(&self) -> &str {
        "give_apparel"
    }

    fn disabled(&self, ctx: &RewardContext) -> Option<String> {
        map_disabled(ctx)
    }

    fn try_execute(&self, ctx: &mut RewardContext) -> bool {
        if !home_map_ready(ctx) {
            return false;
        }
        let delivered = drop_things_near_home(ctx, 5, |catalog, rng| {
            let pool: Vec<_> = catalog.things().filter(|t| t.is_apparel()).collect();
            if pool.is_empty() {
                return None;
            }
            let def = pool[rng.random_range(0..pool.len())];
            Some(PendingThing {
                def: def.name.clone(),
                stuff: def.made_from_stuff.then(|| random_stuff(catalog, rng)).flatten(),
                quality: def.has_quality.then(|| roll_quality(rng)),
                faction: None,
            })
        });
        if delivered {
            ctx.world.resource_mut::<LetterStack>().post(
                "Apparel delivery",
                "A bundle of apparel has been delivered to the colony.",
                LetterKind::Positive,
            );
        }
        delivered
    }
}

/// Drops one random art piece, owned by the player faction.
pub struct GiveArt;

impl Reward for GiveArt {
    fn name(&self) -> &str {
        "give_art"
    }

    fn disabled(&self, ctx: &RewardContext) -> Option<String> {
        map_disabled(ctx)
    }

    fn try_execute(&self, ctx: &mut RewardContext) -> bool {
        if !home_map_ready(ctx) {
            return false;
        }
        let delivered = drop_things_near_home(ctx, 1, |catalog, rng| {
            let pool: Vec<_> = catalog.things().filter(|t| t.art).collect();
            if pool.is_empty() {
                return None;
            }
            let def = pool[rng.random_range(0..pool.len())];
            Some(PendingThing {
                def: def.name.clone(),
                stuff: def.made_from_stuff.then(|| random_stuff(catalog, rng)).flatten(),
                quality: def.has_quality.then(|| roll_quality(rng)),
                faction: Some(Faction::Player),
            })
        });
        if delivered {
            ctx.world.resource_mut::<LetterStack>().post(
                "Art delivery",
                "A work of art has been delivered to the colony.",
                LetterKind::Positive,
            );
        }
        delivered
    }
}
