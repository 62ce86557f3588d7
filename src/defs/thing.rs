use serde::{Deserialize, Serialize};

/// Where an item sits when carried by a pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    #[default]
    None,
    Primary,
    Apparel,
}

/// A spawnable item definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThingDef {
    pub name: String,
    pub label: String,
    pub market_value: f32,
    #[serde(default)]
    pub slot: EquipmentSlot,
    /// Ranged weapon; mutually exclusive with shield apparel on a pawn.
    #[serde(default)]
    pub ranged: bool,
    /// Shield-type apparel.
    #[serde(default)]
    pub shield: bool,
    /// Decorative art building.
    #[serde(default)]
    pub art: bool,
    /// Usable as crafting stuff for made-from-stuff things.
    #[serde(default)]
    pub stuff: bool,
    #[serde(default)]
    pub made_from_stuff: bool,
    /// Carries a quality tier when generated.
    #[serde(default)]
    pub has_quality: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weapon_tags: Vec<String>,
}

impl ThingDef {
    pub fn is_weapon(&self) -> bool {
        self.slot == EquipmentSlot::Primary
    }

    pub fn is_apparel(&self) -> bool {
        self.slot == EquipmentSlot::Apparel
    }

    /// A primary weapon a colonist (or mirrored raider) could plausibly hold.
    /// Excludes defs whose every tag marks them as mechanoid/turret/artillery
    /// hardware; an untagged weapon is always eligible.
    pub fn player_usable_weapon(&self) -> bool {
        if !self.is_weapon() {
            return false;
        }
        let all_restricted = !self.weapon_tags.is_empty()
            && self.weapon_tags.iter().all(|t| {
                t.contains("Mechanoid") || t.contains("Turret") || t.contains("Artillery")
            });
        !all_restricted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weapon(tags: &[&str]) -> ThingDef {
        ThingDef {
            name: "test_gun".to_string(),
            label: "test gun".to_string(),
            market_value: 300.0,
            slot: EquipmentSlot::Primary,
            ranged: true,
            shield: false,
            art: false,
            stuff: false,
            made_from_stuff: false,
            has_quality: true,
            weapon_tags: tags.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn untagged_weapon_is_usable() {
        assert!(weapon(&[]).player_usable_weapon());
    }

    #[test]
    fn mechanoid_only_tags_excluded() {
        assert!(!weapon(&["MechanoidGunHeavy"]).player_usable_weapon());
        assert!(!weapon(&["Turret", "Artillery"]).player_usable_weapon());
    }

    #[test]
    fn mixed_tags_included() {
        assert!(weapon(&["MechanoidGunHeavy", "IndustrialGunAdvanced"]).player_usable_weapon());
    }

    #[test]
    fn apparel_is_not_a_weapon() {
        let mut def = weapon(&[]);
        def.slot = EquipmentSlot::Apparel;
        assert!(!def.player_usable_weapon());
        assert!(def.is_apparel());
    }

    #[test]
    fn slot_defaults_to_none_in_json() {
        let def: ThingDef = serde_json::from_str(
            r#"{"name":"granite_block","label":"granite blocks","market_value":1.8}"#,
        )
        .unwrap();
        assert_eq!(def.slot, EquipmentSlot::None);
        assert!(!def.has_quality);
    }
}
