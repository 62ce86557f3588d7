use serde::{Deserialize, Serialize};

use super::body::BodyPart;

/// Ingredient tag that marks a surgery as an augmentation rather than
/// ordinary medical care.
pub const ADVANCED_INGREDIENT_TAG: &str = "advanced";

/// A surgery recipe definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDef {
    pub name: String,
    pub label: String,
    /// Body parts this recipe may target. Empty means whole-body.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fixed_parts: Vec<BodyPart>,
    /// Tags on the required ingredients.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredient_tags: Vec<String>,
    /// Label of the added-part record left on the pawn after surgery.
    pub added_part_label: String,
}

impl RecipeDef {
    /// Augmentations target a fixed part set and consume at least one
    /// advanced-tagged ingredient.
    pub fn is_augmentation(&self) -> bool {
        !self.fixed_parts.is_empty()
            && self
                .ingredient_tags
                .iter()
                .any(|t| t == ADVANCED_INGREDIENT_TAG)
    }

    pub fn targets(&self, part: BodyPart) -> bool {
        self.fixed_parts.contains(&part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(fixed: Vec<BodyPart>, tags: &[&str]) -> RecipeDef {
        RecipeDef {
            name: "install_bionic_eye".to_string(),
            label: "install bionic eye".to_string(),
            fixed_parts: fixed,
            ingredient_tags: tags.iter().map(|s| s.to_string()).collect(),
            added_part_label: "bionic eye".to_string(),
        }
    }

    #[test]
    fn augmentation_needs_fixed_parts_and_advanced_tag() {
        assert!(recipe(vec![BodyPart::Eye], &["advanced"]).is_augmentation());
        assert!(!recipe(vec![], &["advanced"]).is_augmentation());
        assert!(!recipe(vec![BodyPart::Eye], &["medical"]).is_augmentation());
    }

    #[test]
    fn targets_checks_fixed_set() {
        let r = recipe(vec![BodyPart::Eye, BodyPart::Ear], &["advanced"]);
        assert!(r.targets(BodyPart::Eye));
        assert!(!r.targets(BodyPart::Leg));
    }
}
