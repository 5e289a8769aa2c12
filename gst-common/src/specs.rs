//! Specialization to class mapping

/// Class id for a specialization id; unknown specs map to 0
pub fn class_id_for_spec(spec_id: &str) -> u32 {
    match spec_id {
        // Warrior: Arms, Fury, Protection
        "71" | "72" | "73" => 1,
        // Paladin: Holy, Protection, Retribution
        "65" | "66" | "70" => 2,
        // Hunter: Beast Mastery, Marksmanship, Survival
        "253" | "254" | "255" => 3,
        // Rogue: Assassination, Outlaw, Subtlety
        "259" | "260" | "261" => 4,
        // Priest: Discipline, Holy, Shadow
        "256" | "257" | "258" => 5,
        // Death Knight: Blood, Frost, Unholy
        "250" | "251" | "252" => 6,
        // Shaman: Elemental, Enhancement, Restoration
        "262" | "263" | "264" => 7,
        // Mage: Arcane, Fire, Frost
        "62" | "63" | "64" => 8,
        // Warlock: Affliction, Demonology, Destruction
        "265" | "266" | "267" => 9,
        // Monk: Brewmaster, Windwalker, Mistweaver
        "268" | "269" | "270" => 10,
        // Druid: Balance, Feral, Guardian, Restoration
        "102" | "103" | "104" | "105" => 11,
        // Demon Hunter: Havoc, Vengeance
        "577" | "581" => 12,
        // Evoker: Devastation, Preservation, Augmentation
        "1467" | "1468" | "1473" => 13,
        _ => 0,
    }
}

/// Integer value of the leading decimal digits of an upstream id, 0 if none
///
/// Digit runs beyond the `i64` range saturate.
pub fn leading_int(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10)
                .saturating_add(sign * i64::from(d - b'0'))
        })
}
