use rand::{Rng, RngCore};

use crate::host::{
    Faction, Job, LetterKind, LetterStack, Map, PawnIdentity, PawnMind, PawnPosition,
    PawnTraining, generate_pawn,
};

use super::{Reward, RewardContext, home_map_ready, map_disabled};
use crate::defs::DefCatalog;

/// Successful steps to learn one lesson.
const TRAIN_STEPS: u32 = 5;
/// Per-step success chance.
const TRAIN_CHANCE: f64 = 0.75;
/// Attempt cap per lesson; hitting it means training failed outright.
const TRAIN_ATTEMPT_LIMIT: u32 = 100;

fn train_fully(training: &mut PawnTraining, lessons: &[String], rng: &mut dyn RngCore) -> bool {
    for lesson in lessons {
        let steps = training.steps.entry(lesson.clone()).or_insert(0);
        let mut attempts = 0;
        while *steps < TRAIN_STEPS {
            if attempts >= TRAIN_ATTEMPT_LIMIT {
                return false;
            }
            attempts += 1;
            if rng.random_bool(TRAIN_CHANCE) {
                *steps += 1;
            }
        }
    }
    true
}

/// A tame, fully trained animal walks in from the map edge and wanders the
/// home area.
pub struct GiveAnimal;

impl Reward for GiveAnimal {
    fn name(&self) -> &str {
        "give_animal"
    }

    fn disabled(&self, ctx: &RewardContext) -> Option<String> {
        map_disabled(ctx)
    }

    fn try_execute(&self, ctx: &mut RewardContext) -> bool {
        if !home_map_ready(ctx) {
            return false;
        }

        let kinds: Vec<String> = ctx
            .world
            .resource::<DefCatalog>()
            .pawn_kinds()
            .filter(|k| k.animal)
            .map(|k| k.name.clone())
            .collect();
        if kinds.is_empty() {
            return false;
        }
        let kind_name = kinds[ctx.rng.random_range(0..kinds.len())].clone();
        let lessons = ctx
            .world
            .resource::<DefCatalog>()
            .pawn_kind(&kind_name)
            .map(|k| k.trainables.clone())
            .unwrap_or_default();

        let Some(entry) = ctx.world.resource::<Map>().random_edge_entry_cell(ctx.rng) else {
            return false;
        };
        let Some(cell) = ctx
            .world
            .resource::<Map>()
            .random_cell_near(entry, 10, ctx.rng)
        else {
            return false;
        };

        let Ok(animal) = generate_pawn(ctx.world, &kind_name, Faction::Wild, ctx.rng) else {
            return false;
        };
        ctx.world.get_mut::<PawnIdentity>(animal).unwrap().faction = Faction::Player;
        ctx.world.get_mut::<PawnPosition>(animal).unwrap().cell = Some(cell);

        let mut training = ctx.world.get_mut::<PawnTraining>(animal).unwrap();
        if !train_fully(&mut training, &lessons, ctx.rng) {
            tracing::warn!("training stalled for {kind_name}, releasing it anyway");
        }

        if let Some(wander) = ctx
            .world
            .resource::<Map>()
            .random_standable_home_cell(ctx.rng)
        {
            ctx.world.get_mut::<PawnMind>(animal).unwrap().job = Some(Job::GotoWander(wander));
        }

        ctx.world.resource_mut::<LetterStack>().post(
            "Animal joins",
            "A trained animal has joined the colony.",
            LetterKind::Positive,
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn train_fully_completes_all_lessons() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut training = PawnTraining::default();
        let lessons = vec!["tameness".to_string(), "obedience".to_string()];
        assert!(train_fully(&mut training, &lessons, &mut rng));
        for lesson in &lessons {
            assert_eq!(training.steps[lesson], TRAIN_STEPS);
        }
    }

    #[test]
    fn no_lessons_is_trivially_trained() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut training = PawnTraining::default();
        assert!(train_fully(&mut training, &[], &mut rng));
        assert!(training.steps.is_empty());
    }
}
