#![allow(dead_code)]

//! Role criteria — target levels per tier (the documented role baseline) and
//! the weighted requirement lists actually consumed by the seniority scorer.

use crate::analysis::seniority::SeniorityTier;
use crate::analysis::skills::{SkillCategory, SkillCategory as C, SkillLevel, SkillLevel as L};

/// Role selector for the classifier. Unknown strings fall back to consultant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Consultant,
    Developer,
}

impl Role {
    pub fn parse(s: &str) -> Role {
        match s {
            "developer" => Role::Developer,
            _ => Role::Consultant,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Consultant => "consultant",
            Role::Developer => "developer",
        }
    }
}

/// Requirement lists for one tier. Each listed skill contributes its list
/// weight × 4.0 to the possible score.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelRequirements {
    pub required_basic: &'static [SkillCategory],
    pub required_advanced: &'static [SkillCategory],
    pub required_expert: &'static [SkillCategory],
}

pub const BASIC_WEIGHT: f64 = 1.0;
pub const ADVANCED_WEIGHT: f64 = 2.0;
pub const EXPERT_WEIGHT: f64 = 3.0;

/// Percentage thresholds, checked highest tier first.
pub const PRINCIPAL_THRESHOLD: f64 = 65.0;
pub const SENIOR_THRESHOLD: f64 = 55.0;
pub const PROFESSIONAL_THRESHOLD: f64 = 45.0;

/// Requirements consumed by the weighted scorer.
pub fn level_requirements(role: Role, tier: SeniorityTier) -> LevelRequirements {
    match role {
        Role::Consultant => consultant_requirements(tier),
        Role::Developer => developer_requirements(tier),
    }
}

fn consultant_requirements(tier: SeniorityTier) -> LevelRequirements {
    match tier {
        SeniorityTier::Principal => LevelRequirements {
            required_expert: &[C::RequirementsEngineering],
            required_advanced: &[
                C::ProcessModeling,
                C::EccSystems,
                C::S4Systems,
                C::ProjectManagement,
                C::EnergyIndustryGeneral,
                C::EnergyIndustryMsb,
            ],
            ..Default::default()
        },
        SeniorityTier::Senior => LevelRequirements {
            required_advanced: &[
                C::ProcessModeling,
                C::EccSystems,
                C::S4Systems,
                C::SapTechnology,
                C::Modeling,
                C::ProcessManagement,
                C::RequirementsEngineering,
            ],
            required_basic: &[
                C::EnergyIndustryGeneral,
                C::EnergyIndustryNetwork,
                C::EnergyIndustrySupply,
                C::EnergyIndustryMsb,
            ],
            ..Default::default()
        },
        SeniorityTier::Professional => LevelRequirements {
            required_basic: &[
                C::SapCore,
                C::EccSystems,
                C::S4Systems,
                C::ProcessManagement,
                C::RequirementsEngineering,
                C::ProjectManagement,
                C::EnergyIndustryGeneral,
            ],
            ..Default::default()
        },
        SeniorityTier::Junior => LevelRequirements {
            required_basic: &[C::MsOffice, C::ProcessModeling, C::SapTechnology],
            ..Default::default()
        },
        SeniorityTier::NotEligible => LevelRequirements::default(),
    }
}

fn developer_requirements(tier: SeniorityTier) -> LevelRequirements {
    match tier {
        SeniorityTier::Principal => LevelRequirements {
            required_expert: &[
                C::ProcessModeling,
                C::S4Systems,
                C::SapTechnology,
                C::RequirementsEngineering,
                C::NonSap,
            ],
            required_advanced: &[
                C::ProjectManagement,
                C::ProcessManagement,
                C::EnergyIndustryGeneral,
            ],
            required_basic: &[
                C::EccSystems,
                C::EnergyIndustryNetwork,
                C::EnergyIndustrySupply,
                C::EnergyIndustryMsb,
            ],
        },
        SeniorityTier::Senior => LevelRequirements {
            required_advanced: &[
                C::ProcessModeling,
                C::S4Systems,
                C::SapTechnology,
                C::NonSap,
                C::Modeling,
                C::ProcessManagement,
                C::RequirementsEngineering,
            ],
            required_basic: &[
                C::EnergyIndustryGeneral,
                C::EnergyIndustryNetwork,
                C::EnergyIndustrySupply,
                C::EnergyIndustryMsb,
            ],
            ..Default::default()
        },
        SeniorityTier::Professional => LevelRequirements {
            required_advanced: &[C::MsOffice, C::RequirementsEngineering, C::ProjectManagement],
            required_basic: &[
                C::ProcessModeling,
                C::SapCore,
                C::S4Systems,
                C::EccS4Processes,
                C::SapTechnology,
                C::NonSap,
                C::Modeling,
                C::ProcessManagement,
                C::EnergyIndustryGeneral,
            ],
            ..Default::default()
        },
        SeniorityTier::Junior => LevelRequirements {
            required_basic: &[C::MsOffice, C::SapTechnology, C::NonSap, C::Modeling],
            ..Default::default()
        },
        SeniorityTier::NotEligible => LevelRequirements::default(),
    }
}

/// Target level per tier ([Junior, Professional, Senior, Principal]) for
/// each category in the consultant profile. Documented baseline only — the
/// scorer consumes `level_requirements`.
pub const CONSULTANT_TARGETS: &[(SkillCategory, [SkillLevel; 4])] = &[
    (C::ProcessModeling, [L::Basic, L::Basic, L::Advanced, L::Expert]),
    (C::SapCore, [L::None, L::Basic, L::Basic, L::Basic]),
    (C::EccSystems, [L::None, L::Basic, L::Advanced, L::Expert]),
    (C::S4Systems, [L::None, L::Basic, L::Advanced, L::Expert]),
    (C::EccS4Processes, [L::None, L::Basic, L::Advanced, L::Advanced]),
    (C::SapTechnology, [L::Basic, L::Basic, L::Advanced, L::Advanced]),
    (C::NonSap, [L::Basic, L::Advanced, L::Advanced, L::Advanced]),
    (C::Modeling, [L::Basic, L::Basic, L::Advanced, L::Expert]),
    (C::ProcessManagement, [L::None, L::Basic, L::Advanced, L::Advanced]),
    (C::RequirementsEngineering, [L::None, L::Basic, L::Advanced, L::Expert]),
    (C::ProjectManagement, [L::None, L::Basic, L::Advanced, L::Expert]),
    (C::EnergyIndustryGeneral, [L::Basic, L::Basic, L::Advanced, L::Advanced]),
    (C::EnergyIndustryNetwork, [L::None, L::None, L::Basic, L::Basic]),
    (C::EnergyIndustrySupply, [L::None, L::None, L::Basic, L::Basic]),
    (C::EnergyIndustryMsb, [L::None, L::None, L::Basic, L::Advanced]),
    (C::LanguageSkills, [L::None, L::Basic, L::Advanced, L::Expert]),
];

/// Developer counterpart of `CONSULTANT_TARGETS`.
pub const DEVELOPER_TARGETS: &[(SkillCategory, [SkillLevel; 4])] = &[
    (C::ProcessModeling, [L::None, L::Basic, L::Advanced, L::Expert]),
    (C::SapCore, [L::None, L::Basic, L::Basic, L::Basic]),
    (C::EccSystems, [L::None, L::None, L::None, L::Basic]),
    (C::S4Systems, [L::Basic, L::Basic, L::Advanced, L::Expert]),
    (C::EccS4Processes, [L::None, L::Basic, L::Basic, L::Basic]),
    (C::SapTechnology, [L::Basic, L::Basic, L::Advanced, L::Expert]),
    (C::NonSap, [L::Basic, L::Basic, L::Advanced, L::Expert]),
    (C::Modeling, [L::Basic, L::Basic, L::Advanced, L::Expert]),
    (C::ProcessManagement, [L::Basic, L::Basic, L::Advanced, L::Expert]),
    (C::RequirementsEngineering, [L::None, L::Advanced, L::Advanced, L::Expert]),
    (C::EnergyIndustryGeneral, [L::Basic, L::Basic, L::Advanced, L::Advanced]),
    (C::EnergyIndustryNetwork, [L::None, L::None, L::Basic, L::Basic]),
    (C::EnergyIndustrySupply, [L::None, L::None, L::Basic, L::Basic]),
    (C::EnergyIndustryMsb, [L::None, L::None, L::Basic, L::Basic]),
    (C::LanguageSkills, [L::None, L::Basic, L::Advanced, L::Expert]),
];

/// Target level for `category` at `tier` per the role baseline. `None` for
/// categories outside the role's table.
pub fn target_level(
    role: Role,
    category: SkillCategory,
    tier: SeniorityTier,
) -> Option<SkillLevel> {
    let table = match role {
        Role::Consultant => CONSULTANT_TARGETS,
        Role::Developer => DEVELOPER_TARGETS,
    };
    let idx = match tier {
        SeniorityTier::Junior => 0,
        SeniorityTier::Professional => 1,
        SeniorityTier::Senior => 2,
        SeniorityTier::Principal => 3,
        SeniorityTier::NotEligible => return None,
    };
    table
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, levels)| levels[idx])
}
