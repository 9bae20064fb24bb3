use std::fmt;

use crate::data::model::Record;

// ---------------------------------------------------------------------------
// Strength scores
// ---------------------------------------------------------------------------

/// Sum of the six battle stats. Independent of the file's `total_points`.
pub fn total_strength(r: &Record) -> f64 {
    r.hp + r.attack + r.defense + r.sp_attack + r.sp_defense + r.speed
}

pub fn offensive_strength(r: &Record) -> f64 {
    r.attack + r.sp_attack + r.speed
}

pub fn defensive_strength(r: &Record) -> f64 {
    r.hp + r.defense + r.sp_defense
}

/// Which score the top-N ranking uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StrengthMode {
    #[default]
    Offensive,
    Defensive,
}

impl StrengthMode {
    pub fn score(self, r: &Record) -> f64 {
        match self {
            StrengthMode::Offensive => offensive_strength(r),
            StrengthMode::Defensive => defensive_strength(r),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthMode::Offensive => "Força Ofensiva",
            StrengthMode::Defensive => "Força Defensiva",
        }
    }
}

// ---------------------------------------------------------------------------
// Rarity category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Normal,
    SubLegendary,
    Legendary,
    Mythical,
}

impl Category {
    /// Display order used by the category comparison chart.
    pub const ALL: [Category; 4] = [
        Category::Normal,
        Category::SubLegendary,
        Category::Legendary,
        Category::Mythical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Normal => "Normal",
            Category::SubLegendary => "Sub-Lendário",
            Category::Legendary => "Lendário",
            Category::Mythical => "Mítico",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a raw status string.
///
/// The checks run in a fixed order: "Legendary" first, then
/// "Sub-Legendary", then "Mythical". Any status containing "Legendary" is
/// therefore `Legendary`, including "Sub Legendary".
pub fn categorize_status(status: &str) -> Category {
    if status.contains("Legendary") {
        Category::Legendary
    } else if status.contains("Sub-Legendary") {
        Category::SubLegendary
    } else if status.contains("Mythical") {
        Category::Mythical
    } else {
        Category::Normal
    }
}

pub fn categorize(r: &Record) -> Category {
    categorize_status(&r.status)
}
