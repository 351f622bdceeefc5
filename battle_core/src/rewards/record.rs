//! RewardRecord - What a finished battle pays out

use serde::{Deserialize, Serialize};

/// Bonus that fired during reward computation, for narration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusTag {
    /// Won within 5 rounds
    FastClear,
    /// Won with at least 80% health
    StrongFinish,
    /// Won without losing any health
    Flawless,
    /// Avatar bond of 80 or more
    BondBonus,
    /// Lucky rare material drop
    BonusMaterial,
    /// Beat a master-tier opponent
    LegendaryOpponent,
}

impl BonusTag {
    pub fn label(self) -> &'static str {
        match self {
            BonusTag::FastClear => "Fast clear!",
            BonusTag::StrongFinish => "Strong finish!",
            BonusTag::Flawless => "Flawless victory! No damage taken",
            BonusTag::BondBonus => "Bond bonus!",
            BonusTag::BonusMaterial => "Found an extra rare material!",
            BonusTag::LegendaryOpponent => "Defeated a legendary opponent!",
        }
    }
}

/// Deltas the caller applies to the avatar and player account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardRecord {
    pub victory: bool,
    pub xp: u32,
    pub currency: u32,
    pub rare_material: u32,
    pub fatigue_delta: u32,
    pub bonus_tags: Vec<BonusTag>,
}

impl RewardRecord {
    pub fn has_tag(&self, tag: BonusTag) -> bool {
        self.bonus_tags.contains(&tag)
    }

    /// Multi-line summary for the post-battle screen
    pub fn summary(&self) -> String {
        let mut lines = vec!["BATTLE REWARDS".to_string(), "-".repeat(26)];

        if !self.victory {
            lines.push("Defeat... but your avatar gained experience!".to_string());
        }

        if self.xp > 0 {
            lines.push(format!("XP gained: +{}", self.xp));
        }

        if self.currency > 0 {
            lines.push(format!("Currency: +{}", self.currency));
        }

        if self.rare_material > 0 {
            lines.push(format!("Rare materials: +{}", self.rare_material));
        }

        if self.fatigue_delta > 0 {
            lines.push(format!("Fatigue: +{}", self.fatigue_delta));
        }

        if !self.bonus_tags.is_empty() {
            lines.push(String::new());
            lines.push("BONUSES:".to_string());
            for tag in &self.bonus_tags {
                lines.push(format!("  * {}", tag.label()));
            }
        }

        lines.join("\n")
    }
}
