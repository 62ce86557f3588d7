use tracing::warn;

use crate::defs::DefCatalog;
use crate::host::{Faction, PawnIdentity};
use crate::raid::{
    AssaultComposer, GroupComposer, GroupParms, RaidError, apply_augments, deploy_raid,
    equip_raider, living_colonists, mirror_roster,
};

use super::{Reward, RewardContext, home_map_ready, map_disabled};

/// Kind of every generated raider.
pub const RAIDER_KIND: &str = "ancient_soldier";
/// Market value the weighted weapon pick aims for.
pub const WEAPON_VALUE_TARGET: f32 = 400.0;

/// Drops a mirrored copy of the colony on its own doorstep.
///
/// One raider per living colonist, each cloned from its counterpart by
/// roster index, then armed and augmented before the drop pods launch.
pub struct EvilRaid {
    composer: Box<dyn GroupComposer + Send + Sync>,
}

impl EvilRaid {
    pub fn new() -> Self {
        Self {
            composer: Box::new(AssaultComposer),
        }
    }

    fn run(&self, ctx: &mut RewardContext) -> Result<(), RaidError> {
        let colonists = living_colonists(ctx.world);
        if colonists.is_empty() {
            return Err(RaidError::EmptyRoster);
        }

        let catalog = ctx.world.resource::<DefCatalog>();
        let raider_power = catalog
            .pawn_kind(RAIDER_KIND)
            .ok_or_else(|| crate::defs::DefError::Unknown {
                kind: "pawn_kind",
                name: RAIDER_KIND.to_string(),
            })?
            .combat_power;
        let mut colonist_power = 0.0f32;
        for &pawn in &colonists {
            if let Some(identity) = ctx.world.get::<PawnIdentity>(pawn)
                && let Some(kind) = catalog.pawn_kind(&identity.kind)
            {
                colonist_power += kind.combat_power;
            }
        }
        // Budget covers the colony's own strength, but the roster mirror
        // needs exactly one raider per colonist: cap the count and raise the
        // budget so the cap is what stops generation.
        let points = colonist_power.max(raider_power * colonists.len() as f32);

        let raiders = self.composer.compose(
            ctx.world,
            ctx.rng,
            &GroupParms {
                kind: RAIDER_KIND.to_string(),
                faction: Faction::Raider,
                points,
                max_count: Some(colonists.len()),
                force_one_incap: true,
            },
        )?;

        mirror_roster(ctx.world, &colonists, &raiders)?;
        for &raider in &raiders {
            equip_raider(ctx.world, raider, WEAPON_VALUE_TARGET, ctx.rng)?;
            apply_augments(ctx.world, raider, ctx.rng)?;
        }
        deploy_raid(ctx.world, &raiders, ctx.rng)?;
        Ok(())
    }
}

impl Default for EvilRaid {
    fn default() -> Self {
        Self::new()
    }
}

impl Reward for EvilRaid {
    fn name(&self) -> &str {
        "evil_raid"
    }

    fn disabled(&self, ctx: &RewardContext) -> Option<String> {
        map_disabled(ctx)
    }

    fn try_execute(&self, ctx: &mut RewardContext) -> bool {
        if !home_map_ready(ctx) {
            return false;
        }
        match self.run(ctx) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "mirrored raid aborted");
                false
            }
        }
    }
}
