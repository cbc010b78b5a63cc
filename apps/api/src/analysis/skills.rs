//! Skill extraction — maps lower-cased CV text to a complete skill profile.
//!
//! Each category applies an ordered decision ladder (highest tier checked
//! first, first match wins). Anything unmatched stays `None`; extraction
//! cannot fail, including on empty input.

use std::collections::BTreeMap;
use std::fmt;

use crate::analysis::keywords;

/// Ordinal skill level. Totally ordered: None < Basic < Advanced < Expert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum SkillLevel {
    #[default]
    None,
    Basic,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Non-linear numeric weighting used by the seniority scorer. Advanced
    /// and Expert are over-weighted relative to Basic to reward depth.
    pub fn score(self) -> f64 {
        match self {
            SkillLevel::None => 0.0,
            SkillLevel::Basic => 1.0,
            SkillLevel::Advanced => 2.5,
            SkillLevel::Expert => 4.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::None => "None",
            SkillLevel::Basic => "Basic",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of profile dimensions. Every profile carries exactly one
/// level per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillCategory {
    ProcessModeling,
    SapCore,
    EccSystems,
    S4Systems,
    EccS4Processes,
    SapTechnology,
    NonSap,
    Modeling,
    ProcessManagement,
    RequirementsEngineering,
    ProjectManagement,
    EnergyIndustryGeneral,
    EnergyIndustryNetwork,
    EnergyIndustrySupply,
    EnergyIndustryMsb,
    LanguageSkills,
    SimilarCompanyExperience,
    Location,
    Education,
    SoftSkills,
    MsOffice,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 21] = [
        SkillCategory::ProcessModeling,
        SkillCategory::SapCore,
        SkillCategory::EccSystems,
        SkillCategory::S4Systems,
        SkillCategory::EccS4Processes,
        SkillCategory::SapTechnology,
        SkillCategory::NonSap,
        SkillCategory::Modeling,
        SkillCategory::ProcessManagement,
        SkillCategory::RequirementsEngineering,
        SkillCategory::ProjectManagement,
        SkillCategory::EnergyIndustryGeneral,
        SkillCategory::EnergyIndustryNetwork,
        SkillCategory::EnergyIndustrySupply,
        SkillCategory::EnergyIndustryMsb,
        SkillCategory::LanguageSkills,
        SkillCategory::SimilarCompanyExperience,
        SkillCategory::Location,
        SkillCategory::Education,
        SkillCategory::SoftSkills,
        SkillCategory::MsOffice,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SkillCategory::ProcessModeling => "process_modeling",
            SkillCategory::SapCore => "sap_core",
            SkillCategory::EccSystems => "ecc_systems",
            SkillCategory::S4Systems => "s4_systems",
            SkillCategory::EccS4Processes => "ecc_s4_processes",
            SkillCategory::SapTechnology => "sap_technology",
            SkillCategory::NonSap => "non_sap",
            SkillCategory::Modeling => "modeling",
            SkillCategory::ProcessManagement => "process_management",
            SkillCategory::RequirementsEngineering => "requirements_engineering",
            SkillCategory::ProjectManagement => "project_management",
            SkillCategory::EnergyIndustryGeneral => "energy_industry_general",
            SkillCategory::EnergyIndustryNetwork => "energy_industry_network",
            SkillCategory::EnergyIndustrySupply => "energy_industry_supply",
            SkillCategory::EnergyIndustryMsb => "energy_industry_msb",
            SkillCategory::LanguageSkills => "language_skills",
            SkillCategory::SimilarCompanyExperience => "similar_company_experience",
            SkillCategory::Location => "location",
            SkillCategory::Education => "education",
            SkillCategory::SoftSkills => "soft_skills",
            SkillCategory::MsOffice => "ms_office",
        }
    }
}

/// Complete mapping from category to level, built fresh per request and
/// immutable once extraction finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillProfile {
    levels: BTreeMap<SkillCategory, SkillLevel>,
}

impl SkillProfile {
    pub(crate) fn new() -> Self {
        let levels = SkillCategory::ALL
            .iter()
            .map(|&category| (category, SkillLevel::None))
            .collect();
        Self { levels }
    }

    pub(crate) fn set(&mut self, category: SkillCategory, level: SkillLevel) {
        self.levels.insert(category, level);
    }

    pub fn level(&self, category: SkillCategory) -> SkillLevel {
        self.levels
            .get(&category)
            .copied()
            .unwrap_or(SkillLevel::None)
    }

    pub fn language_skills(&self) -> SkillLevel {
        self.level(SkillCategory::LanguageSkills)
    }

    /// Lower-cased textual rendering consumed by the classifier's experience
    /// scan. Deterministic: categories appear in declaration order.
    pub fn to_scan_string(&self) -> String {
        let pairs: Vec<String> = SkillCategory::ALL
            .iter()
            .map(|&category| format!("'{}': '{}'", category.as_str(), self.level(category)))
            .collect();
        format!("{{{}}}", pairs.join(", ")).to_lowercase()
    }
}

/// Number of keywords from `list` that occur in `text` (each counted once).
pub fn count_matches(text: &str, list: &[&str]) -> usize {
    list.iter().filter(|kw| text.contains(*kw)).count()
}

fn contains_any(text: &str, list: &[&str]) -> bool {
    list.iter().any(|kw| text.contains(*kw))
}

/// Derived expert-level signal: three or more leadership markers in the text.
fn is_expert_level(text: &str) -> bool {
    count_matches(text, keywords::EXPERT_INDICATORS) >= 3
}

/// Three-tier keyword ladder, first matching tier wins.
fn ladder(
    text: &str,
    expert: &[&str],
    advanced: &[&str],
    basic: &[&str],
) -> Option<SkillLevel> {
    if contains_any(text, expert) {
        Some(SkillLevel::Expert)
    } else if contains_any(text, advanced) {
        Some(SkillLevel::Advanced)
    } else if contains_any(text, basic) {
        Some(SkillLevel::Basic)
    } else {
        None
    }
}

/// Ladder whose Expert rung additionally requires the expert-level signal.
/// An ungated expert hit falls through to the advanced and basic rungs.
fn gated_ladder(
    text: &str,
    expert: &[&str],
    advanced: &[&str],
    basic: &[&str],
    expert_level: bool,
) -> Option<SkillLevel> {
    if expert_level && contains_any(text, expert) {
        Some(SkillLevel::Expert)
    } else if contains_any(text, advanced) {
        Some(SkillLevel::Advanced)
    } else if contains_any(text, basic) {
        Some(SkillLevel::Basic)
    } else {
        None
    }
}

/// Builds the complete skill profile for lower-cased CV text.
pub fn extract_skill_profile(text: &str) -> SkillProfile {
    let mut profile = SkillProfile::new();

    // Language proficiency. The advanced tier is checked before the expert
    // tier (kept from the established ruleset), and a resolved Basic is
    // downgraded to None so only C1-equivalent or native text survives.
    let language = if contains_any(text, keywords::LANGUAGE_ADVANCED) {
        SkillLevel::Advanced
    } else if contains_any(text, keywords::LANGUAGE_EXPERT) {
        SkillLevel::Expert
    } else if contains_any(text, keywords::LANGUAGE_BASIC) {
        SkillLevel::Basic
    } else {
        SkillLevel::None
    };
    let language = if language == SkillLevel::Basic {
        SkillLevel::None
    } else {
        language
    };
    profile.set(SkillCategory::LanguageSkills, language);

    let expert_level = is_expert_level(text);

    // Similar employers: more than one named company reads as deep exposure.
    let company_matches = count_matches(text, keywords::SIMILAR_COMPANIES);
    let company_level = if company_matches > 1 {
        SkillLevel::Expert
    } else if company_matches > 0 {
        SkillLevel::Advanced
    } else {
        SkillLevel::Basic
    };
    profile.set(SkillCategory::SimilarCompanyExperience, company_level);

    // Location: any named region counts.
    let location_matches: usize = keywords::LOCATION_GROUPS
        .iter()
        .map(|(_, group)| count_matches(text, group))
        .sum();
    profile.set(
        SkillCategory::Location,
        if location_matches > 0 {
            SkillLevel::Advanced
        } else {
            SkillLevel::Basic
        },
    );

    if let Some(level) = ladder(
        text,
        keywords::EDUCATION_EXPERT,
        keywords::EDUCATION_ADVANCED,
        keywords::EDUCATION_BASIC,
    ) {
        profile.set(SkillCategory::Education, level);
    }

    if let Some(level) = ladder(
        text,
        keywords::SOFT_SKILLS_EXPERT,
        keywords::SOFT_SKILLS_ADVANCED,
        keywords::SOFT_SKILLS_BASIC,
    ) {
        profile.set(SkillCategory::SoftSkills, level);
    }

    // MS Office is only assessed when named explicitly.
    if text.contains("ms office") || text.contains("microsoft office") {
        let level = if text.contains("expert") || text.contains("sehr gut") {
            SkillLevel::Expert
        } else if text.contains("fortgeschritten") || text.contains("advanced") {
            SkillLevel::Advanced
        } else {
            SkillLevel::Basic
        };
        profile.set(SkillCategory::MsOffice, level);
    }

    if contains_any(text, keywords::PROCESS_MODELING_TOOLS) {
        let level = if expert_level || text.contains("prozessoptimierung") {
            SkillLevel::Expert
        } else if text.contains("fortgeschritten") || text.contains("advanced") {
            SkillLevel::Advanced
        } else {
            SkillLevel::Basic
        };
        profile.set(SkillCategory::ProcessModeling, level);
    }

    // SAP core floors at Advanced once "sap" appears anywhere; ECC systems
    // are only assessed for SAP candidates.
    if text.contains("sap") {
        profile.set(
            SkillCategory::SapCore,
            if expert_level {
                SkillLevel::Expert
            } else {
                SkillLevel::Advanced
            },
        );

        let ecc_matches = count_matches(text, keywords::ECC_KEYWORDS);
        if ecc_matches >= 2 && expert_level {
            profile.set(SkillCategory::EccSystems, SkillLevel::Expert);
        } else if ecc_matches >= 1 {
            profile.set(SkillCategory::EccSystems, SkillLevel::Advanced);
        } else if text.contains("ecc") {
            profile.set(SkillCategory::EccSystems, SkillLevel::Basic);
        }
    }

    let s4_matches = count_matches(text, keywords::S4_KEYWORDS);
    if s4_matches >= 3 && expert_level {
        profile.set(SkillCategory::S4Systems, SkillLevel::Expert);
    } else if s4_matches >= 2 {
        profile.set(SkillCategory::S4Systems, SkillLevel::Advanced);
    } else if s4_matches >= 1 {
        profile.set(SkillCategory::S4Systems, SkillLevel::Basic);
    }

    let process_matches = count_matches(text, keywords::ECC_S4_PROCESS_KEYWORDS);
    if process_matches >= 5 && expert_level {
        profile.set(SkillCategory::EccS4Processes, SkillLevel::Expert);
    } else if process_matches >= 3 {
        profile.set(SkillCategory::EccS4Processes, SkillLevel::Advanced);
    } else if process_matches >= 1 {
        profile.set(SkillCategory::EccS4Processes, SkillLevel::Basic);
    }

    let tech_matches: usize = keywords::SAP_TECHNOLOGY_GROUPS
        .iter()
        .map(|(_, group)| count_matches(text, group))
        .sum();
    if tech_matches >= 5 && expert_level {
        profile.set(SkillCategory::SapTechnology, SkillLevel::Expert);
    } else if tech_matches >= 3 {
        profile.set(SkillCategory::SapTechnology, SkillLevel::Advanced);
    } else if tech_matches >= 1 {
        profile.set(SkillCategory::SapTechnology, SkillLevel::Basic);
    }

    let nonsap_matches: usize = keywords::NON_SAP_GROUPS
        .iter()
        .map(|(_, group)| count_matches(text, group))
        .sum();
    if nonsap_matches >= 8 && expert_level {
        profile.set(SkillCategory::NonSap, SkillLevel::Expert);
    } else if nonsap_matches >= 5 {
        profile.set(SkillCategory::NonSap, SkillLevel::Advanced);
    } else if nonsap_matches >= 2 {
        profile.set(SkillCategory::NonSap, SkillLevel::Basic);
    }

    let modeling_matches = count_matches(text, keywords::MODELING_KEYWORDS);
    if modeling_matches >= 2 && expert_level {
        profile.set(SkillCategory::Modeling, SkillLevel::Expert);
    } else if modeling_matches >= 1 {
        profile.set(SkillCategory::Modeling, SkillLevel::Advanced);
    } else if text.contains("modellierung") {
        profile.set(SkillCategory::Modeling, SkillLevel::Basic);
    }

    if let Some(level) = gated_ladder(
        text,
        keywords::PROCESS_MGMT_EXPERT,
        keywords::PROCESS_MGMT_ADVANCED,
        keywords::PROCESS_MGMT_BASIC,
        expert_level,
    ) {
        profile.set(SkillCategory::ProcessManagement, level);
    }

    if let Some(level) = gated_ladder(
        text,
        keywords::REQ_ENG_EXPERT,
        keywords::REQ_ENG_ADVANCED,
        keywords::REQ_ENG_BASIC,
        expert_level,
    ) {
        profile.set(SkillCategory::RequirementsEngineering, level);
    }

    if let Some(level) = gated_ladder(
        text,
        keywords::PROJECT_MGMT_EXPERT,
        keywords::PROJECT_MGMT_ADVANCED,
        keywords::PROJECT_MGMT_BASIC,
        expert_level,
    ) {
        profile.set(SkillCategory::ProjectManagement, level);
    }

    if let Some(level) = gated_ladder(
        text,
        keywords::ENERGY_GENERAL_EXPERT,
        keywords::ENERGY_GENERAL_ADVANCED,
        keywords::ENERGY_GENERAL_BASIC,
        expert_level,
    ) {
        profile.set(SkillCategory::EnergyIndustryGeneral, level);
    }

    // Network and supply have no Basic rung: no match leaves them at None.
    if contains_any(text, keywords::ENERGY_NETWORK_KEYWORDS) {
        profile.set(
            SkillCategory::EnergyIndustryNetwork,
            if expert_level {
                SkillLevel::Expert
            } else {
                SkillLevel::Advanced
            },
        );
    }

    if contains_any(text, keywords::ENERGY_SUPPLY_KEYWORDS) {
        profile.set(
            SkillCategory::EnergyIndustrySupply,
            if expert_level {
                SkillLevel::Expert
            } else {
                SkillLevel::Advanced
            },
        );
    }

    if let Some(level) = gated_ladder(
        text,
        keywords::ENERGY_MSB_EXPERT,
        keywords::ENERGY_MSB_ADVANCED,
        keywords::ENERGY_MSB_BASIC,
        expert_level,
    ) {
        profile.set(SkillCategory::EnergyIndustryMsb, level);
    }

    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_complete_for_empty_input() {
        let profile = extract_skill_profile("");
        for category in SkillCategory::ALL {
            // Location and company experience floor at Basic; everything
            // else defaults to None.
            let level = profile.level(category);
            match category {
                SkillCategory::Location | SkillCategory::SimilarCompanyExperience => {
                    assert_eq!(level, SkillLevel::Basic, "{category:?}");
                }
                _ => assert_eq!(level, SkillLevel::None, "{category:?}"),
            }
        }
    }

    #[test]
    fn test_profile_always_covers_every_category() {
        let texts = [
            "",
            "sap berater mit fließend deutsch",
            "java python sql html css rest nosql",
            "völlig irrelevanter text ohne schlüsselwörter",
        ];
        for text in texts {
            let profile = extract_skill_profile(text);
            for category in SkillCategory::ALL {
                // level() falls back to None, so probe the rendering too.
                assert!(profile.to_scan_string().contains(category.as_str()));
            }
        }
    }

    #[test]
    fn test_language_skills_never_basic() {
        // "gut" and "b1" are basic-tier hits and must be downgraded.
        for text in ["deutsch gut", "b1", "englisch a2", "fließend", "muttersprachler"] {
            let level = extract_skill_profile(text).language_skills();
            assert_ne!(level, SkillLevel::Basic, "input {text:?}");
        }
    }

    #[test]
    fn test_language_advanced_checked_before_expert() {
        // Both tiers present: the advanced rung wins. Kept from the
        // established ruleset.
        let profile = extract_skill_profile("fließend, muttersprachler");
        assert_eq!(profile.language_skills(), SkillLevel::Advanced);
    }

    #[test]
    fn test_language_expert_only_without_advanced_terms() {
        let profile = extract_skill_profile("deutsch: muttersprachler");
        assert_eq!(profile.language_skills(), SkillLevel::Expert);
    }

    #[test]
    fn test_sap_core_floors_at_advanced() {
        let profile = extract_skill_profile("sap");
        assert_eq!(profile.level(SkillCategory::SapCore), SkillLevel::Advanced);
    }

    #[test]
    fn test_sap_core_expert_with_leadership_markers() {
        let profile =
            extract_skill_profile("sap teamleiter, projektleiter und solution architect");
        assert_eq!(profile.level(SkillCategory::SapCore), SkillLevel::Expert);
    }

    #[test]
    fn test_ecc_requires_sap_context() {
        // "is-u" outside any SAP mention never assigns ecc_systems.
        let profile = extract_skill_profile("is-u und idex erfahrung");
        assert_eq!(profile.level(SkillCategory::EccSystems), SkillLevel::None);

        let profile = extract_skill_profile("sap is-u erfahrung");
        assert_eq!(profile.level(SkillCategory::EccSystems), SkillLevel::Advanced);
    }

    #[test]
    fn test_ms_office_tiers() {
        assert_eq!(
            extract_skill_profile("ms office").level(SkillCategory::MsOffice),
            SkillLevel::Basic
        );
        assert_eq!(
            extract_skill_profile("microsoft office fortgeschritten")
                .level(SkillCategory::MsOffice),
            SkillLevel::Advanced
        );
        assert_eq!(
            extract_skill_profile("ms office sehr gut").level(SkillCategory::MsOffice),
            SkillLevel::Expert
        );
        assert_eq!(
            extract_skill_profile("excel und word").level(SkillCategory::MsOffice),
            SkillLevel::None
        );
    }

    #[test]
    fn test_sap_technology_thresholds() {
        // Three distinct stack keywords reach Advanced without leadership
        // markers.
        let profile = extract_skill_profile("abap, fiori und btp");
        assert_eq!(
            profile.level(SkillCategory::SapTechnology),
            SkillLevel::Advanced
        );

        let profile = extract_skill_profile("abap");
        assert_eq!(
            profile.level(SkillCategory::SapTechnology),
            SkillLevel::Basic
        );
    }

    #[test]
    fn test_gated_expert_rung_falls_through_without_markers() {
        // Expert keyword without the leadership signal drops to the advanced
        // rung check, not to an automatic Advanced.
        let profile = extract_skill_profile("prozessoptimierung");
        assert_eq!(
            profile.level(SkillCategory::ProcessManagement),
            SkillLevel::None
        );

        let profile = extract_skill_profile("prozessoptimierung prozessanalyse");
        assert_eq!(
            profile.level(SkillCategory::ProcessManagement),
            SkillLevel::Advanced
        );
    }

    #[test]
    fn test_similar_company_tiers() {
        assert_eq!(
            extract_skill_profile("convista und cronos")
                .level(SkillCategory::SimilarCompanyExperience),
            SkillLevel::Expert
        );
        assert_eq!(
            extract_skill_profile("bei convista beschäftigt")
                .level(SkillCategory::SimilarCompanyExperience),
            SkillLevel::Advanced
        );
    }

    #[test]
    fn test_expert_scenario_native_speaker_with_sap() {
        let text = "muttersprachler, teamleiter und projektleiter, solution architect, sap";
        let profile = extract_skill_profile(text);
        assert_eq!(profile.language_skills(), SkillLevel::Expert);
        assert_eq!(profile.level(SkillCategory::SapCore), SkillLevel::Expert);
    }

    #[test]
    fn test_scan_string_is_lowercase_and_deterministic() {
        let profile = extract_skill_profile("sap fließend");
        let rendered = profile.to_scan_string();
        assert_eq!(rendered, rendered.to_lowercase());
        assert!(rendered.contains("'sap_core': 'advanced'"));
        assert!(rendered.contains("'language_skills': 'advanced'"));
        assert_eq!(rendered, extract_skill_profile("sap fließend").to_scan_string());
    }
}
