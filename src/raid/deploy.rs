use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use rand::RngCore;

use crate::host::{
    Cell, DropGroup, DropQueue, Faction, LetterKind, LetterStack, Lord, LordManager,
    LordStrategy, Map,
};

use super::RaidError;

/// Ticks between the raid letter and pod touchdown.
pub const RAID_DROP_DELAY_TICKS: u32 = 120;

/// Hand the finished roster to the host: pick a drop point in the colony's
/// home area, enqueue the pods with a touchdown delay, put the group under
/// an assault lord, and post the raid letter.
pub fn deploy_raid(
    world: &mut World,
    pawns: &[Entity],
    rng: &mut dyn RngCore,
) -> Result<Cell, RaidError> {
    let drop_cell = world
        .resource::<Map>()
        .random_standable_home_cell(rng)
        .ok_or(RaidError::NoDropCell)?;

    world.resource_mut::<DropQueue>().enqueue(DropGroup {
        pawns: pawns.to_vec(),
        cell: drop_cell,
        delay_ticks: RAID_DROP_DELAY_TICKS,
    });
    world.resource_mut::<LordManager>().register(Lord {
        strategy: LordStrategy::AssaultColony,
        faction: Faction::Raider,
        pawns: pawns.to_vec(),
    });
    world.resource_mut::<LetterStack>().post(
        "Mirrored assault",
        "A hostile force is dropping on the colony. They look disturbingly familiar.",
        LetterKind::ThreatBig,
    );
    Ok(drop_cell)
}
