//! Competitive brackets
//!
//! Each bracket has its own snapshot in the store and its own gear table.
//! Solo shuffle is ranked per specialization, so every spec gets a bracket.

use std::fmt;

/// Solo shuffle leaderboards, in snapshot fetch order
pub const SHUFFLE_LEADERBOARDS: [&str; 39] = [
    "shuffle-warrior-fury",
    "shuffle-demonhunter-vengeance",
    "shuffle-monk-brewmaster",
    "shuffle-paladin-protection",
    "shuffle-shaman-restoration",
    "shuffle-evoker-devastation",
    "shuffle-evoker-augmentation",
    "shuffle-monk-mistweaver",
    "shuffle-deathknight-frost",
    "shuffle-warlock-affliction",
    "shuffle-paladin-holy",
    "shuffle-warlock-demonology",
    "shuffle-priest-discipline",
    "shuffle-druid-guardian",
    "shuffle-hunter-survival",
    "shuffle-demonhunter-havoc",
    "shuffle-warlock-destruction",
    "shuffle-monk-windwalker",
    "shuffle-warrior-arms",
    "shuffle-mage-frost",
    "shuffle-priest-holy",
    "shuffle-deathknight-blood",
    "shuffle-mage-fire",
    "shuffle-rogue-subtlety",
    "shuffle-shaman-enhancement",
    "shuffle-druid-balance",
    "shuffle-hunter-beastmastery",
    "shuffle-paladin-retribution",
    "shuffle-hunter-marksmanship",
    "shuffle-rogue-outlaw",
    "shuffle-priest-shadow",
    "shuffle-evoker-preservation",
    "shuffle-rogue-assassination",
    "shuffle-deathknight-unholy",
    "shuffle-druid-feral",
    "shuffle-druid-restoration",
    "shuffle-shaman-elemental",
    "shuffle-mage-arcane",
    "shuffle-warrior-protection",
];

/// A competitive context that partitions snapshots
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Bracket {
    Pve,
    TwoVsTwo,
    ThreeVsThree,
    /// Solo shuffle leaderboard, e.g. `shuffle-mage-frost`
    Shuffle(String),
}

impl Bracket {
    /// All brackets of a full build: pve, 2v2, 3v3, then every shuffle spec
    pub fn all() -> Vec<Bracket> {
        let mut brackets = vec![Bracket::Pve, Bracket::TwoVsTwo, Bracket::ThreeVsThree];
        brackets.extend(
            SHUFFLE_LEADERBOARDS
                .iter()
                .map(|name| Bracket::Shuffle(name.to_string())),
        );
        brackets
    }

    /// Name used in the snapshot store (`composed_<source_name>_LATEST.json`)
    pub fn source_name(&self) -> &str {
        match self {
            Bracket::Pve => "pve",
            Bracket::TwoVsTwo => "2v2",
            Bracket::ThreeVsThree => "3v3",
            Bracket::Shuffle(name) => name,
        }
    }

    /// Name used inside the generated tables; shuffle hyphens become underscores
    pub fn table_name(&self) -> String {
        self.source_name().replace('-', "_")
    }

    /// Snapshot file name in the store
    pub fn snapshot_file(&self) -> String {
        format!("composed_{}_LATEST.json", self.source_name())
    }

    /// Global variable name of the per-bracket gear table
    pub fn usage_db_name(&self) -> String {
        match self {
            Bracket::Pve => "usageDbPvE".to_string(),
            _ => format!("usageDb{}", self.table_name()),
        }
    }

    /// Output file name of the per-bracket gear table
    pub fn gearing_file(&self) -> String {
        match self {
            Bracket::Pve => "GearingPvE.lua".to_string(),
            _ => format!("Gearing{}.lua", self.table_name()),
        }
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source_name())
    }
}
