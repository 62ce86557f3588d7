use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use colony_rewards::defs::DefCatalog;
use colony_rewards::host::{
    Cell, DropQueue, Faction, IncidentFlags, LetterStack, LordManager, Map, PawnIds, generate_pawn,
};

pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// A player home map with all host subsystems registered and `colonists`
/// living player pawns.
pub fn colony_world(colonists: usize, rng: &mut dyn RngCore) -> (World, Vec<Entity>) {
    let mut world = World::new();
    world.insert_resource(DefCatalog::standard());

    let mut map = Map::new(20, 20);
    map.player_home = true;
    map.add_home_rect(Cell::new(5, 5), Cell::new(10, 10));
    world.insert_resource(map);

    world.insert_resource(PawnIds::default());
    world.insert_resource(LetterStack::default());
    world.insert_resource(DropQueue::default());
    world.insert_resource(LordManager::default());
    world.insert_resource(IncidentFlags::default());

    let mut pawns = Vec::new();
    for _ in 0..colonists {
        let pawn = generate_pawn(&mut world, "colonist", Faction::Player, rng)
            .expect("standard catalog has colonist kind");
        pawns.push(pawn);
    }
    (world, pawns)
}

/// Same world, but on a map that is not a player home.
pub fn visiting_world(rng: &mut dyn RngCore) -> World {
    let (mut world, _) = colony_world(0, rng);
    world.resource_mut::<Map>().player_home = false;
    world
}
