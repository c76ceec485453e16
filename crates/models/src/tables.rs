//! Static coefficient tables shared by the models.
//!
//! All tables are indexed by the closed enums below (`as usize`), so a new
//! sector or task category is a compile error until every table covers it.

use serde::{Deserialize, Serialize};

/// Task categories in the task-based (Acemoglu–Restrepo style) framework.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    RoutineCognitive,
    RoutineManual,
    NonRoutineAnalytical,
    NonRoutineInterpersonal,
    NonRoutineManual,
    Creative,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 6] = [
        TaskCategory::RoutineCognitive,
        TaskCategory::RoutineManual,
        TaskCategory::NonRoutineAnalytical,
        TaskCategory::NonRoutineInterpersonal,
        TaskCategory::NonRoutineManual,
        TaskCategory::Creative,
    ];

    /// Share of the task that current AI systems can technically perform.
    pub fn ai_exposure(self) -> f64 {
        match self {
            TaskCategory::RoutineCognitive => 0.85,
            TaskCategory::RoutineManual => 0.70,
            TaskCategory::NonRoutineAnalytical => 0.45,
            TaskCategory::NonRoutineInterpersonal => 0.20,
            TaskCategory::NonRoutineManual => 0.25,
            TaskCategory::Creative => 0.15,
        }
    }

    pub fn is_routine(self) -> bool {
        matches!(self, TaskCategory::RoutineCognitive | TaskCategory::RoutineManual)
    }

    pub fn id(self) -> &'static str {
        match self {
            TaskCategory::RoutineCognitive => "routine_cognitive",
            TaskCategory::RoutineManual => "routine_manual",
            TaskCategory::NonRoutineAnalytical => "non_routine_analytical",
            TaskCategory::NonRoutineInterpersonal => "non_routine_interpersonal",
            TaskCategory::NonRoutineManual => "non_routine_manual",
            TaskCategory::Creative => "creative",
        }
    }
}

/// Sectors with a known task composition and input-output row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Manufacturing,
    Retail,
    Healthcare,
    Finance,
    Technology,
    Education,
    Construction,
    Transportation,
}

impl Sector {
    pub const ALL: [Sector; 8] = [
        Sector::Manufacturing,
        Sector::Retail,
        Sector::Healthcare,
        Sector::Finance,
        Sector::Technology,
        Sector::Education,
        Sector::Construction,
        Sector::Transportation,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Sector::Manufacturing => "manufacturing",
            Sector::Retail => "retail",
            Sector::Healthcare => "healthcare",
            Sector::Finance => "finance",
            Sector::Technology => "technology",
            Sector::Education => "education",
            Sector::Construction => "construction",
            Sector::Transportation => "transportation",
        }
    }

    pub fn from_id(id: &str) -> Option<Sector> {
        Sector::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Task composition, indexed by `TaskCategory as usize`. Rows sum to 1.
    pub fn task_shares(self) -> [f64; 6] {
        match self {
            Sector::Manufacturing => [0.15, 0.40, 0.10, 0.05, 0.25, 0.05],
            Sector::Retail => [0.30, 0.25, 0.05, 0.30, 0.05, 0.05],
            Sector::Healthcare => [0.15, 0.10, 0.20, 0.35, 0.15, 0.05],
            Sector::Finance => [0.45, 0.02, 0.30, 0.15, 0.03, 0.05],
            Sector::Technology => [0.20, 0.02, 0.40, 0.10, 0.03, 0.25],
            Sector::Education => [0.10, 0.05, 0.20, 0.45, 0.05, 0.15],
            Sector::Construction => [0.08, 0.30, 0.07, 0.10, 0.40, 0.05],
            Sector::Transportation => [0.15, 0.45, 0.05, 0.10, 0.22, 0.03],
        }
    }

    /// Aggregate ripple multiplier applied to a sector's total shock.
    pub fn ripple_multiplier(self) -> f64 {
        match self {
            Sector::Manufacturing => 1.8,
            Sector::Retail => 1.3,
            Sector::Healthcare => 1.4,
            Sector::Finance => 1.6,
            Sector::Technology => 1.7,
            Sector::Education => 1.2,
            Sector::Construction => 1.5,
            Sector::Transportation => 1.4,
        }
    }

    /// Jobs supported per $1M of sector output.
    pub fn employment_intensity(self) -> f64 {
        match self {
            Sector::Manufacturing => 4.5,
            Sector::Retail => 11.0,
            Sector::Healthcare => 9.5,
            Sector::Finance => 3.0,
            Sector::Technology => 3.5,
            Sector::Education => 12.0,
            Sector::Construction => 7.5,
            Sector::Transportation => 6.5,
        }
    }
}

/// Task profile for an arbitrary sector id; unknown sectors use retail's.
pub fn task_shares_for(sector_id: &str) -> [f64; 6] {
    Sector::from_id(sector_id).unwrap_or(Sector::Retail).task_shares()
}

/// Input-output coefficients: `INPUT_OUTPUT[row][col]` is the share of the
/// row sector's purchases bought from the column sector.
pub const INPUT_OUTPUT: [[f64; 8]; 8] = [
    [0.30, 0.02, 0.01, 0.05, 0.06, 0.01, 0.02, 0.08],
    [0.20, 0.05, 0.01, 0.06, 0.05, 0.01, 0.03, 0.12],
    [0.15, 0.03, 0.10, 0.05, 0.06, 0.03, 0.02, 0.03],
    [0.02, 0.02, 0.01, 0.25, 0.12, 0.02, 0.03, 0.01],
    [0.12, 0.02, 0.01, 0.06, 0.22, 0.03, 0.01, 0.02],
    [0.04, 0.03, 0.03, 0.04, 0.07, 0.05, 0.04, 0.02],
    [0.35, 0.06, 0.01, 0.05, 0.03, 0.01, 0.08, 0.06],
    [0.18, 0.03, 0.01, 0.06, 0.04, 0.01, 0.05, 0.15],
];

/// Skill tiers of the workforce.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTier {
    High,
    Mid,
    Low,
}

impl SkillTier {
    pub const ALL: [SkillTier; 3] = [SkillTier::High, SkillTier::Mid, SkillTier::Low];

    pub fn profile(self) -> SkillTierProfile {
        match self {
            SkillTier::High => SkillTierProfile {
                workforce_share: 0.35,
                avg_wage: 95_000.0,
                ai_complementarity: 0.8,
                ai_substitutability: 0.1,
                wage_elasticity: 0.6,
                substitution_decay: 0.5,
                employment_sensitivity: 0.02,
            },
            SkillTier::Mid => SkillTierProfile {
                workforce_share: 0.40,
                avg_wage: 52_000.0,
                ai_complementarity: 0.3,
                ai_substitutability: 0.6,
                wage_elasticity: 0.8,
                substitution_decay: 1.0,
                employment_sensitivity: -0.03,
            },
            SkillTier::Low => SkillTierProfile {
                workforce_share: 0.25,
                avg_wage: 32_000.0,
                ai_complementarity: 0.2,
                ai_substitutability: 0.4,
                wage_elasticity: 1.0,
                substitution_decay: 0.8,
                employment_sensitivity: -0.01,
            },
        }
    }
}

/// Static coefficients of one skill tier.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SkillTierProfile {
    pub workforce_share: f64,
    /// Average annual wage (USD).
    pub avg_wage: f64,
    pub ai_complementarity: f64,
    pub ai_substitutability: f64,
    pub wage_elasticity: f64,
    pub substitution_decay: f64,
    /// Employment change per unit of adoption factor (fixed, not derived
    /// from the wage effect).
    pub employment_sensitivity: f64,
}

/// Census-style regions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Northeast,
    South,
    Midwest,
    West,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Northeast, Region::South, Region::Midwest, Region::West];

    pub fn id(self) -> &'static str {
        match self {
            Region::Northeast => "northeast",
            Region::South => "south",
            Region::Midwest => "midwest",
            Region::West => "west",
        }
    }

    pub fn profile(self) -> RegionProfile {
        match self {
            Region::Northeast => RegionProfile {
                population: 57_000_000.0,
                employment_share: 0.17,
                wage_multiplier: 1.15,
                cost_of_living: 1.20,
                tech_concentration: 0.30,
                adoption_speed: 1.10,
                sector_concentration: [0.8, 1.0, 1.1, 1.4, 1.1, 1.2, 0.9, 0.9],
            },
            Region::South => RegionProfile {
                population: 128_000_000.0,
                employment_share: 0.38,
                wage_multiplier: 0.92,
                cost_of_living: 0.93,
                tech_concentration: 0.20,
                adoption_speed: 0.95,
                sector_concentration: [1.1, 1.05, 1.0, 0.9, 0.85, 0.95, 1.15, 1.1],
            },
            Region::Midwest => RegionProfile {
                population: 69_000_000.0,
                employment_share: 0.21,
                wage_multiplier: 0.95,
                cost_of_living: 0.92,
                tech_concentration: 0.15,
                adoption_speed: 0.90,
                sector_concentration: [1.4, 1.0, 1.0, 0.9, 0.8, 1.0, 0.95, 1.1],
            },
            Region::West => RegionProfile {
                population: 79_000_000.0,
                employment_share: 0.24,
                wage_multiplier: 1.12,
                cost_of_living: 1.18,
                tech_concentration: 0.40,
                adoption_speed: 1.20,
                sector_concentration: [0.8, 0.95, 0.95, 1.0, 1.5, 0.9, 1.0, 0.95],
            },
        }
    }
}

/// Static description of a region.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RegionProfile {
    pub population: f64,
    /// Share of national employment located in the region.
    pub employment_share: f64,
    pub wage_multiplier: f64,
    pub cost_of_living: f64,
    pub tech_concentration: f64,
    /// Relative speed of AI diffusion (1.0 = national pace).
    pub adoption_speed: f64,
    /// Location quotient per sector, indexed by `Sector as usize`.
    pub sector_concentration: [f64; 8],
}

impl RegionProfile {
    /// Concentration for a sector id; sectors without a row count as 1.0.
    pub fn concentration(&self, sector_id: &str) -> f64 {
        Sector::from_id(sector_id)
            .map(|s| self.sector_concentration[s as usize])
            .unwrap_or(1.0)
    }

    /// Wage adjusted for cost of living.
    pub fn real_wage_index(&self) -> f64 {
        if self.cost_of_living <= 0.0 {
            return 0.0;
        }
        self.wage_multiplier / self.cost_of_living
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_compositions_sum_to_one() {
        for sector in Sector::ALL {
            let sum: f64 = sector.task_shares().iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "{sector:?} sums to {sum}");
        }
    }

    #[test]
    fn unknown_sectors_fall_back_to_retail() {
        assert_eq!(task_shares_for("agriculture"), Sector::Retail.task_shares());
        assert_eq!(task_shares_for("finance"), Sector::Finance.task_shares());
    }

    #[test]
    fn input_output_rows_leave_room_for_value_added() {
        for row in INPUT_OUTPUT {
            let purchases: f64 = row.iter().sum();
            assert!(purchases > 0.0 && purchases < 1.0);
        }
    }

    #[test]
    fn workforce_and_employment_shares_are_partitions() {
        let skills: f64 = SkillTier::ALL.iter().map(|t| t.profile().workforce_share).sum();
        assert!((skills - 1.0).abs() < 1e-9);

        let regions: f64 = Region::ALL.iter().map(|r| r.profile().employment_share).sum();
        assert!((regions - 1.0).abs() < 1e-9);
    }
}
