use bevy_ecs::entity::Entity;
use bevy_ecs::prelude::With;
use bevy_ecs::world::World;

use crate::host::{Faction, Pawn, PawnIdentity};

/// Snapshot of the living player roster in display order (ascending pawn
/// id). Pure read; an empty result means no reward that consumes the roster
/// can proceed.
pub fn living_colonists(world: &mut World) -> Vec<Entity> {
    let mut query = world.query_filtered::<(Entity, &PawnIdentity), With<Pawn>>();
    let mut roster: Vec<(u64, Entity)> = query
        .iter(world)
        .filter(|(_, id)| id.faction == Faction::Player && id.is_alive())
        .map(|(entity, id)| (id.id, entity))
        .collect();
    roster.sort_by_key(|(id, _)| *id);
    roster.into_iter().map(|(_, entity)| entity).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use crate::defs::DefCatalog;
    use crate::host::{PawnIds, generate_pawn};

    fn test_world() -> (World, SmallRng) {
        let mut world = World::new();
        world.insert_resource(DefCatalog::standard());
        world.insert_resource(PawnIds::default());
        (world, SmallRng::seed_from_u64(42))
    }

    #[test]
    fn orders_by_pawn_id() {
        let (mut world, mut rng) = test_world();
        let a = generate_pawn(&mut world, "colonist", Faction::Player, &mut rng).unwrap();
        let b = generate_pawn(&mut world, "colonist", Faction::Player, &mut rng).unwrap();
        let c = generate_pawn(&mut world, "colonist", Faction::Player, &mut rng).unwrap();
        assert_eq!(living_colonists(&mut world), vec![a, b, c]);
    }

    #[test]
    fn skips_dead_and_non_player() {
        let (mut world, mut rng) = test_world();
        let a = generate_pawn(&mut world, "colonist", Faction::Player, &mut rng).unwrap();
        let dead = generate_pawn(&mut world, "colonist", Faction::Player, &mut rng).unwrap();
        world.get_mut::<PawnIdentity>(dead).unwrap().dead = true;
        generate_pawn(&mut world, "ancient_soldier", Faction::Raider, &mut rng).unwrap();
        generate_pawn(&mut world, "timber_wolf", Faction::Wild, &mut rng).unwrap();
        assert_eq!(living_colonists(&mut world), vec![a]);
    }

    #[test]
    fn empty_world_empty_roster() {
        let (mut world, _) = test_world();
        assert!(living_colonists(&mut world).is_empty());
    }
}
