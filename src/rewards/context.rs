use bevy_ecs::world::World;
use rand::RngCore;

/// Context passed to every reward invocation.
///
/// Bundles the host world and the caller's RNG so handlers never reach for
/// ambient state; the framework builds one per trigger.
pub struct RewardContext<'a> {
    pub world: &'a mut World,
    pub rng: &'a mut dyn RngCore,
}
