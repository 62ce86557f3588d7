use std::collections::BTreeMap;
use std::path::Path;

use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

use super::body::BodyPart;
use super::pawn_kind::PawnKindDef;
use super::recipe::RecipeDef;
use super::thing::{EquipmentSlot, ThingDef};

#[derive(Debug, thiserror::Error)]
pub enum DefError {
    #[error("duplicate {kind} def: {name}")]
    Duplicate { kind: &'static str, name: String },
    #[error("unknown {kind} def: {name}")]
    Unknown { kind: &'static str, name: String },
    #[error("unreadable def file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed def file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk shape of a def content file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    things: Vec<ThingDef>,
    #[serde(default)]
    pawn_kinds: Vec<PawnKindDef>,
    #[serde(default)]
    recipes: Vec<RecipeDef>,
}

/// Typed def lookup, keyed by def name. Names are unique per def kind.
#[derive(Resource, Debug, Clone, Default)]
pub struct DefCatalog {
    things: BTreeMap<String, ThingDef>,
    pawn_kinds: BTreeMap<String, PawnKindDef>,
    recipes: BTreeMap<String, RecipeDef>,
}

impl DefCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_thing(&mut self, def: ThingDef) -> Result<(), DefError> {
        if self.things.contains_key(&def.name) {
            return Err(DefError::Duplicate {
                kind: "thing",
                name: def.name,
            });
        }
        self.things.insert(def.name.clone(), def);
        Ok(())
    }

    pub fn add_pawn_kind(&mut self, def: PawnKindDef) -> Result<(), DefError> {
        if self.pawn_kinds.contains_key(&def.name) {
            return Err(DefError::Duplicate {
                kind: "pawn_kind",
                name: def.name,
            });
        }
        self.pawn_kinds.insert(def.name.clone(), def);
        Ok(())
    }

    pub fn add_recipe(&mut self, def: RecipeDef) -> Result<(), DefError> {
        if self.recipes.contains_key(&def.name) {
            return Err(DefError::Duplicate {
                kind: "recipe",
                name: def.name,
            });
        }
        self.recipes.insert(def.name.clone(), def);
        Ok(())
    }

    pub fn thing(&self, name: &str) -> Option<&ThingDef> {
        self.things.get(name)
    }

    pub fn pawn_kind(&self, name: &str) -> Option<&PawnKindDef> {
        self.pawn_kinds.get(name)
    }

    pub fn recipe(&self, name: &str) -> Option<&RecipeDef> {
        self.recipes.get(name)
    }

    pub fn things(&self) -> impl Iterator<Item = &ThingDef> {
        self.things.values()
    }

    pub fn pawn_kinds(&self) -> impl Iterator<Item = &PawnKindDef> {
        self.pawn_kinds.values()
    }

    pub fn recipes(&self) -> impl Iterator<Item = &RecipeDef> {
        self.recipes.values()
    }

    pub fn from_json(json: &str) -> Result<Self, DefError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for def in file.things {
            catalog.add_thing(def)?;
        }
        for def in file.pawn_kinds {
            catalog.add_pawn_kind(def)?;
        }
        for def in file.recipes {
            catalog.add_recipe(def)?;
        }
        Ok(catalog)
    }

    pub fn load_file(path: &Path) -> Result<Self, DefError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, DefError> {
        let file = CatalogFile {
            things: self.things.values().cloned().collect(),
            pawn_kinds: self.pawn_kinds.values().cloned().collect(),
            recipes: self.recipes.values().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// The content set shipped with the addon. External content files can
    /// extend or replace it via `from_json`/`load_file`.
    pub fn standard() -> Self {
        let mut c = Self::new();
        for def in standard_things() {
            c.add_thing(def).expect("standard things are unique");
        }
        for def in standard_pawn_kinds() {
            c.add_pawn_kind(def).expect("standard pawn kinds are unique");
        }
        for def in standard_recipes() {
            c.add_recipe(def).expect("standard recipes are unique");
        }
        c
    }
}

fn thing(name: &str, label: &str, value: f32) -> ThingDef {
    ThingDef {
        name: name.to_string(),
        label: label.to_string(),
        market_value: value,
        slot: EquipmentSlot::None,
        ranged: false,
        shield: false,
        art: false,
        stuff: false,
        made_from_stuff: false,
        has_quality: false,
        weapon_tags: Vec::new(),
    }
}

fn weapon(name: &str, label: &str, value: f32, ranged: bool, tags: &[&str]) -> ThingDef {
    ThingDef {
        slot: EquipmentSlot::Primary,
        ranged,
        has_quality: true,
        weapon_tags: tags.iter().map(|s| s.to_string()).collect(),
        ..thing(name, label, value)
    }
}

fn apparel(name: &str, label: &str, value: f32, shield: bool) -> ThingDef {
    ThingDef {
        slot: EquipmentSlot::Apparel,
        shield,
        has_quality: true,
        made_from_stuff: !shield,
        ..thing(name, label, value)
    }
}

fn standard_things() -> Vec<ThingDef> {
    vec![
        // Stuff
        ThingDef {
            stuff: true,
            ..thing("steel", "steel", 1.9)
        },
        ThingDef {
            stuff: true,
            ..thing("plasteel", "plasteel", 9.0)
        },
        ThingDef {
            stuff: true,
            ..thing("oak_wood", "oak wood", 1.2)
        },
        // Melee weapons
        ThingDef {
            made_from_stuff: true,
            ..weapon("gladius", "gladius", 190.0, false, &["MedievalMeleeDecent"])
        },
        ThingDef {
            made_from_stuff: true,
            ..weapon("longsword", "longsword", 385.0, false, &["MedievalMeleeAdvanced"])
        },
        // Ranged weapons
        weapon("revolver", "revolver", 140.0, true, &["SimpleGun"]),
        weapon("bolt_rifle", "bolt-action rifle", 255.0, true, &["SimpleGun"]),
        weapon("pump_shotgun", "pump shotgun", 290.0, true, &["IndustrialGunAdvanced"]),
        weapon("assault_rifle", "assault rifle", 520.0, true, &["IndustrialGunAdvanced"]),
        weapon("charge_rifle", "charge rifle", 1035.0, true, &["SpacerGun"]),
        // Hardware the reward pool must never hand out
        weapon("inferno_cannon", "inferno cannon", 900.0, true, &["MechanoidGunHeavy"]),
        weapon("mortar_shell_launcher", "mortar", 600.0, true, &["Artillery", "Turret"]),
        // Apparel
        apparel("duster", "duster", 210.0, false),
        apparel("button_shirt", "button-down shirt", 110.0, false),
        apparel("flak_vest", "flak vest", 285.0, false),
        apparel("cowboy_hat", "cowboy hat", 80.0, false),
        apparel("shield_belt", "shield belt", 420.0, true),
        // Art
        ThingDef {
            art: true,
            made_from_stuff: true,
            has_quality: true,
            ..thing("grand_sculpture", "grand sculpture", 565.0)
        },
        ThingDef {
            art: true,
            made_from_stuff: true,
            has_quality: true,
            ..thing("small_sculpture", "small sculpture", 180.0)
        },
    ]
}

fn standard_pawn_kinds() -> Vec<PawnKindDef> {
    vec![
        PawnKindDef {
            name: "colonist".to_string(),
            label: "colonist".to_string(),
            combat_power: 100.0,
            animal: false,
            humanlike: true,
            trainables: Vec::new(),
        },
        PawnKindDef {
            name: "ancient_soldier".to_string(),
            label: "ancient soldier".to_string(),
            combat_power: 100.0,
            animal: false,
            humanlike: true,
            trainables: Vec::new(),
        },
        PawnKindDef {
            name: "timber_wolf".to_string(),
            label: "timber wolf".to_string(),
            combat_power: 55.0,
            animal: true,
            humanlike: false,
            trainables: vec![
                "tameness".to_string(),
                "obedience".to_string(),
                "release".to_string(),
                "rescue".to_string(),
                "haul".to_string(),
            ],
        },
        PawnKindDef {
            name: "muffalo".to_string(),
            label: "muffalo".to_string(),
            combat_power: 75.0,
            animal: true,
            humanlike: false,
            trainables: vec!["tameness".to_string(), "haul".to_string()],
        },
    ]
}

fn standard_recipes() -> Vec<RecipeDef> {
    let aug = |name: &str, label: &str, parts: Vec<BodyPart>, added: &str| RecipeDef {
        name: name.to_string(),
        label: label.to_string(),
        fixed_parts: parts,
        ingredient_tags: vec!["advanced".to_string()],
        added_part_label: added.to_string(),
    };
    vec![
        aug(
            "install_bionic_eye",
            "install bionic eye",
            vec![BodyPart::Eye],
            "bionic eye",
        ),
        aug(
            "install_bionic_arm",
            "install bionic arm",
            vec![BodyPart::Shoulder, BodyPart::Arm],
            "bionic arm",
        ),
        aug(
            "install_bionic_leg",
            "install bionic leg",
            vec![BodyPart::Leg],
            "bionic leg",
        ),
        aug(
            "install_bionic_spine",
            "install bionic spine",
            vec![BodyPart::Spine],
            "bionic spine",
        ),
        aug(
            "install_bionic_heart",
            "install bionic heart",
            vec![BodyPart::Heart],
            "bionic heart",
        ),
        // Ordinary surgery, never picked by the augmentation pass
        RecipeDef {
            name: "excise_carcinoma".to_string(),
            label: "excise carcinoma".to_string(),
            fixed_parts: Vec::new(),
            ingredient_tags: vec!["medical".to_string()],
            added_part_label: String::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_is_consistent() {
        let c = DefCatalog::standard();
        assert!(c.things().any(|t| t.player_usable_weapon()));
        assert!(c.things().any(|t| t.is_apparel() && t.shield));
        assert!(c.things().any(|t| t.art));
        assert!(c.things().any(|t| t.stuff));
        assert!(c.pawn_kinds().any(|k| k.animal));
        assert!(c.pawn_kinds().any(|k| k.humanlike));
        assert!(c.recipes().any(|r| r.is_augmentation()));
    }

    #[test]
    fn duplicate_thing_rejected() {
        let mut c = DefCatalog::new();
        c.add_thing(thing("steel", "steel", 1.9)).unwrap();
        let err = c.add_thing(thing("steel", "steel again", 2.0)).unwrap_err();
        assert!(matches!(err, DefError::Duplicate { kind: "thing", .. }));
    }

    #[test]
    fn json_round_trip_preserves_defs() {
        let c = DefCatalog::standard();
        let json = c.to_json().unwrap();
        let back = DefCatalog::from_json(&json).unwrap();
        assert_eq!(c.things().count(), back.things().count());
        assert_eq!(c.pawn_kinds().count(), back.pawn_kinds().count());
        assert_eq!(c.recipes().count(), back.recipes().count());
        assert_eq!(back.thing("revolver"), c.thing("revolver"));
    }

    #[test]
    fn from_json_rejects_duplicates() {
        let json = r#"{"things":[
            {"name":"steel","label":"steel","market_value":1.9},
            {"name":"steel","label":"steel","market_value":1.9}
        ]}"#;
        assert!(matches!(
            DefCatalog::from_json(json),
            Err(DefError::Duplicate { .. })
        ));
    }

    #[test]
    fn load_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("defs.json");
        std::fs::write(&path, DefCatalog::standard().to_json().unwrap()).unwrap();
        let back = DefCatalog::load_file(&path).unwrap();
        assert_eq!(back.things().count(), DefCatalog::standard().things().count());
    }

    #[test]
    fn missing_sections_default_empty() {
        let c = DefCatalog::from_json(r#"{}"#).unwrap();
        assert_eq!(c.things().count(), 0);
        assert_eq!(c.recipes().count(), 0);
    }
}
