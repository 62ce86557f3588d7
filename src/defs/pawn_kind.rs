use serde::{Deserialize, Serialize};

/// A generatable pawn kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PawnKindDef {
    pub name: String,
    pub label: String,
    /// Per-unit contribution toward a group's power budget.
    pub combat_power: f32,
    #[serde(default)]
    pub animal: bool,
    #[serde(default)]
    pub humanlike: bool,
    /// Trainable lessons in teaching order, empty for untrainable kinds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trainables: Vec<String>,
}
