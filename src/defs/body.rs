use serde::{Deserialize, Serialize};

/// Body parts referenced by surgery recipes and health records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    Head,
    Skull,
    Eye,
    Ear,
    Nose,
    Jaw,
    Neck,
    Torso,
    Spine,
    Heart,
    Lung,
    Kidney,
    Stomach,
    Shoulder,
    Arm,
    Hand,
    Leg,
    Foot,
}

impl BodyPart {
    /// The full humanlike part list, paired parts listed twice.
    /// Order matches the host's body def, outermost first.
    pub fn humanlike_set() -> Vec<BodyPart> {
        use BodyPart::*;
        vec![
            Head, Skull, Eye, Eye, Ear, Ear, Nose, Jaw, Neck, Torso, Spine, Heart, Lung, Lung,
            Kidney, Kidney, Stomach, Shoulder, Shoulder, Arm, Arm, Hand, Hand, Leg, Leg, Foot,
            Foot,
        ]
    }
}
