//! Equipment slots
//!
//! Slot codes arrive as upper-case strings (`FINGER_1`, `MAIN_HAND`, ...).
//! Only the sixteen slots below carry gear statistics; anything else in a
//! snapshot (shirt, tabard) has no in-game summary slot.

use std::fmt;

/// Equippable slot with a usage histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentSlot {
    Head,
    Neck,
    Shoulder,
    Chest,
    Waist,
    Legs,
    Feet,
    Wrist,
    Hands,
    Finger1,
    Finger2,
    Trinket1,
    Trinket2,
    Back,
    MainHand,
    OffHand,
}

/// Virtual slot reported for a pair of interchangeable physical slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecompiledSlot {
    Finger,
    Trinket,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 16] = [
        EquipmentSlot::Head,
        EquipmentSlot::Neck,
        EquipmentSlot::Shoulder,
        EquipmentSlot::Chest,
        EquipmentSlot::Waist,
        EquipmentSlot::Legs,
        EquipmentSlot::Feet,
        EquipmentSlot::Wrist,
        EquipmentSlot::Hands,
        EquipmentSlot::Finger1,
        EquipmentSlot::Finger2,
        EquipmentSlot::Trinket1,
        EquipmentSlot::Trinket2,
        EquipmentSlot::Back,
        EquipmentSlot::MainHand,
        EquipmentSlot::OffHand,
    ];

    /// Parse an upstream slot code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.code() == code)
    }

    /// Upstream slot code
    pub fn code(self) -> &'static str {
        match self {
            EquipmentSlot::Head => "HEAD",
            EquipmentSlot::Neck => "NECK",
            EquipmentSlot::Shoulder => "SHOULDER",
            EquipmentSlot::Chest => "CHEST",
            EquipmentSlot::Waist => "WAIST",
            EquipmentSlot::Legs => "LEGS",
            EquipmentSlot::Feet => "FEET",
            EquipmentSlot::Wrist => "WRIST",
            EquipmentSlot::Hands => "HANDS",
            EquipmentSlot::Finger1 => "FINGER_1",
            EquipmentSlot::Finger2 => "FINGER_2",
            EquipmentSlot::Trinket1 => "TRINKET_1",
            EquipmentSlot::Trinket2 => "TRINKET_2",
            EquipmentSlot::Back => "BACK",
            EquipmentSlot::MainHand => "MAIN_HAND",
            EquipmentSlot::OffHand => "OFF_HAND",
        }
    }

    /// In-game inventory slot id used by the addon's summary tooltips
    ///
    /// Slot 4 (shirt) is not tracked, so the numbering skips it.
    pub fn summary_slot_id(self) -> u8 {
        match self {
            EquipmentSlot::Head => 1,
            EquipmentSlot::Neck => 2,
            EquipmentSlot::Shoulder => 3,
            EquipmentSlot::Chest => 5,
            EquipmentSlot::Waist => 6,
            EquipmentSlot::Legs => 7,
            EquipmentSlot::Feet => 8,
            EquipmentSlot::Wrist => 9,
            EquipmentSlot::Hands => 10,
            EquipmentSlot::Finger1 => 11,
            EquipmentSlot::Finger2 => 12,
            EquipmentSlot::Trinket1 => 13,
            EquipmentSlot::Trinket2 => 14,
            EquipmentSlot::Back => 15,
            EquipmentSlot::MainHand => 16,
            EquipmentSlot::OffHand => 17,
        }
    }

    /// Virtual slot this physical slot is reported under, if any
    pub fn recompiled(self) -> Option<RecompiledSlot> {
        match self {
            EquipmentSlot::Finger1 | EquipmentSlot::Finger2 => Some(RecompiledSlot::Finger),
            EquipmentSlot::Trinket1 | EquipmentSlot::Trinket2 => Some(RecompiledSlot::Trinket),
            _ => None,
        }
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
