//! Narrative report boundary — response types, the eligibility sentinel,
//! deterministic post-adjustment of collaborator scores, and the
//! `NarrativeReporter` trait with its LLM-backed implementation.
//!
//! The collaborator is advisory only: the eligibility gate and the tier
//! multiplier are applied locally and always win over whatever the model
//! returns.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::analysis::criteria::Role;
use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::analysis::seniority::{determine_seniority, SeniorityTier};
use crate::analysis::skills::{extract_skill_profile, SkillLevel, SkillProfile};
use crate::llm_client::LlmClient;

/// Maximum characters kept in any free-text field of the report.
const MAX_TEXT_LEN: usize = 500;
/// Maximum entries kept in the list fields of the report.
const MAX_LIST_LEN: usize = 5;

const NOT_ELIGIBLE_SUMMARY: &str = "Der Kandidat verfügt nicht über die erforderlichen Deutschkenntnisse (mindestens C1) und ist daher nicht für die Position geeignet.";
const LANGUAGE_IMPROVEMENT_NOTE: &str =
    "Deutschkenntnisse verbessern (mindestens C1 erforderlich)";

/// Raw collaborator output, before post-adjustment. Requirement matches stay
/// untyped here: malformed entries are dropped individually during cleaning
/// instead of failing the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NarrativeAssessment {
    pub overall_score: f64,
    #[serde(default)]
    pub seniority_level: String,
    #[serde(default)]
    pub requirement_matches: Vec<Value>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub key_strengths: Vec<String>,
    #[serde(default)]
    pub improvement_areas: Vec<String>,
}

/// A single requirement evaluated against the CV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementMatch {
    pub requirement: String,
    pub match_percentage: u32,
    pub explanation: String,
}

/// Final analysis payload returned by `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall_score: u32,
    pub seniority_level: String,
    pub requirement_matches: Vec<RequirementMatch>,
    pub summary: String,
    pub key_strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
}

/// The narrative collaborator seam. The production implementation calls the
/// LLM; tests substitute stubs. Any failure downgrades to the deterministic
/// fallback at the pipeline level.
#[async_trait]
pub trait NarrativeReporter: Send + Sync {
    async fn assess(
        &self,
        cv_text: &str,
        requirements_text: &str,
        role: Role,
        tier: SeniorityTier,
    ) -> anyhow::Result<NarrativeAssessment>;
}

/// LLM-backed narrative reporter.
pub struct LlmNarrativeReporter {
    llm: LlmClient,
}

impl LlmNarrativeReporter {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl NarrativeReporter for LlmNarrativeReporter {
    async fn assess(
        &self,
        cv_text: &str,
        requirements_text: &str,
        role: Role,
        tier: SeniorityTier,
    ) -> anyhow::Result<NarrativeAssessment> {
        let prompt = build_analysis_prompt(cv_text, requirements_text, role, tier);
        let assessment = self
            .llm
            .call_json::<NarrativeAssessment>(&prompt, ANALYSIS_SYSTEM)
            .await?;
        Ok(assessment)
    }
}

/// Hard precondition: proficiency below the C1-equivalent threshold
/// disqualifies the candidate outright.
pub fn is_eligible(profile: &SkillProfile) -> bool {
    profile.language_skills() > SkillLevel::Basic
}

/// The gate's terminal result: zero score, no matches, a single language
/// improvement note.
pub fn not_eligible_report() -> AnalysisReport {
    AnalysisReport {
        overall_score: 0,
        seniority_level: SeniorityTier::NotEligible.label().to_string(),
        requirement_matches: Vec::new(),
        summary: NOT_ELIGIBLE_SUMMARY.to_string(),
        key_strengths: Vec::new(),
        improvement_areas: vec![LANGUAGE_IMPROVEMENT_NOTE.to_string()],
    }
}

/// Deterministic fallback when the collaborator response cannot be used.
/// The tier label is forced to Junior; NotEligible stays reserved for the
/// gate.
fn fallback_report() -> AnalysisReport {
    AnalysisReport {
        overall_score: 0,
        seniority_level: SeniorityTier::Junior.label().to_string(),
        requirement_matches: Vec::new(),
        summary: String::new(),
        key_strengths: Vec::new(),
        improvement_areas: Vec::new(),
    }
}

/// Full analysis pipeline: eligibility gate → seniority classification →
/// narrative assessment → deterministic post-adjustment.
///
/// Always returns a well-shaped report; collaborator failures degrade to the
/// fallback instead of propagating.
pub async fn analyze_cv(
    reporter: &dyn NarrativeReporter,
    cv_text: &str,
    requirements: &[String],
    role: Role,
) -> AnalysisReport {
    let profile = extract_skill_profile(cv_text);
    debug!("skill profile: {}", profile.to_scan_string());

    // Gate check one: below C1 terminates the pipeline before any
    // collaborator call.
    if !is_eligible(&profile) {
        debug!("language proficiency below C1, enforcing 0% match");
        return not_eligible_report();
    }

    let tier = determine_seniority(&profile, role);
    debug!("seniority tier: {}", tier.label());

    let requirements_text = format_requirements(requirements);

    let assessment = match reporter.assess(cv_text, &requirements_text, role, tier).await {
        Ok(assessment) => assessment,
        Err(e) => {
            warn!("narrative collaborator failed, using fallback: {e:#}");
            return gated(&profile, fallback_report());
        }
    };

    // Gate check two: re-verify after the collaborator round trip. The gate
    // wins over any fabricated score.
    if !is_eligible(&profile) {
        return not_eligible_report();
    }

    let report = adjust_assessment(assessment, tier);

    // Gate check three: authoritative last word before returning.
    gated(&profile, report)
}

/// Applies the eligibility gate to a finished report.
fn gated(profile: &SkillProfile, report: AnalysisReport) -> AnalysisReport {
    if is_eligible(profile) {
        report
    } else {
        not_eligible_report()
    }
}

/// Applies the tier multiplier to the collaborator's scores, clamps and
/// rounds them, and trims list and text fields to their limits.
fn adjust_assessment(assessment: NarrativeAssessment, tier: SeniorityTier) -> AnalysisReport {
    let multiplier = tier.score_multiplier();

    if !assessment.seniority_level.is_empty() && assessment.seniority_level != tier.label() {
        debug!(
            "collaborator echoed tier {:?}, keeping {}",
            assessment.seniority_level,
            tier.label()
        );
    }

    let requirement_matches = assessment
        .requirement_matches
        .iter()
        .take(MAX_LIST_LEN)
        .filter_map(|value| clean_match(value, multiplier))
        .collect();

    AnalysisReport {
        overall_score: adjust_score(assessment.overall_score, multiplier),
        seniority_level: tier.label().to_string(),
        requirement_matches,
        summary: truncate(&assessment.summary, MAX_TEXT_LEN),
        key_strengths: trim_list(assessment.key_strengths),
        improvement_areas: trim_list(assessment.improvement_areas),
    }
}

/// score × multiplier, clamped to [0, 100] and rounded to the nearest
/// integer.
fn adjust_score(base: f64, multiplier: f64) -> u32 {
    (base * multiplier).clamp(0.0, 100.0).round() as u32
}

/// One collaborator match entry → cleaned report entry. Entries without a
/// numeric match_percentage are dropped.
fn clean_match(value: &Value, multiplier: f64) -> Option<RequirementMatch> {
    let obj = value.as_object()?;
    let base = obj.get("match_percentage")?.as_f64()?;

    Some(RequirementMatch {
        requirement: truncate(text_field(obj, "requirement"), MAX_TEXT_LEN),
        match_percentage: adjust_score(base, multiplier),
        explanation: truncate(text_field(obj, "explanation"), MAX_TEXT_LEN),
    })
}

fn text_field<'a>(obj: &'a Map<String, Value>, key: &str) -> &'a str {
    obj.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

/// Truncates on a char boundary to at most `max` characters.
fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn trim_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .take(MAX_LIST_LEN)
        .map(|item| truncate(&item, MAX_TEXT_LEN))
        .collect()
}

/// Builds the analysis prompt from the template. Requirement lines carry
/// escaped double quotes so they cannot break the JSON example block.
fn build_analysis_prompt(
    cv_text: &str,
    requirements_text: &str,
    role: Role,
    tier: SeniorityTier,
) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{role}", role.as_str())
        .replace("{cv_text}", cv_text)
        .replace("{requirements}", requirements_text)
        .replace("{seniority_level}", tier.label())
}

/// Newline-joined `- requirement` list with double quotes escaped.
pub fn format_requirements(requirements: &[String]) -> String {
    requirements
        .iter()
        .map(|req| format!("- {}", req.replace('"', "\\\"")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Stub collaborator returning a fixed assessment.
    struct StubReporter(NarrativeAssessment);

    #[async_trait]
    impl NarrativeReporter for StubReporter {
        async fn assess(
            &self,
            _cv_text: &str,
            _requirements_text: &str,
            _role: Role,
            _tier: SeniorityTier,
        ) -> anyhow::Result<NarrativeAssessment> {
            Ok(self.0.clone())
        }
    }

    /// Stub collaborator that always fails.
    struct FailingReporter;

    #[async_trait]
    impl NarrativeReporter for FailingReporter {
        async fn assess(
            &self,
            _cv_text: &str,
            _requirements_text: &str,
            _role: Role,
            _tier: SeniorityTier,
        ) -> anyhow::Result<NarrativeAssessment> {
            anyhow::bail!("collaborator unavailable")
        }
    }

    fn high_score_assessment() -> NarrativeAssessment {
        NarrativeAssessment {
            overall_score: 95.0,
            seniority_level: "Principal".to_string(),
            requirement_matches: vec![json!({
                "requirement": "SAP IS-U Kenntnisse",
                "match_percentage": 90,
                "explanation": "Langjährige IS-U Projekte"
            })],
            summary: "Sehr starker Kandidat".to_string(),
            key_strengths: vec!["SAP".to_string()],
            improvement_areas: vec![],
        }
    }

    #[test]
    fn test_adjust_score_junior_boundaries() {
        let junior = SeniorityTier::Junior.score_multiplier();
        assert_eq!(adjust_score(80.0, junior), 100); // clamped
        assert_eq!(adjust_score(50.0, junior), 65);
        assert_eq!(adjust_score(0.0, junior), 0);
    }

    #[test]
    fn test_adjust_score_multipliers_per_tier() {
        assert_eq!(adjust_score(80.0, SeniorityTier::Professional.score_multiplier()), 92);
        assert_eq!(adjust_score(80.0, SeniorityTier::Senior.score_multiplier()), 84);
        assert_eq!(adjust_score(80.0, SeniorityTier::Principal.score_multiplier()), 80);
    }

    #[test]
    fn test_clean_match_drops_non_numeric_percentage() {
        let junk = json!({"requirement": "x", "match_percentage": "hoch"});
        assert!(clean_match(&junk, 1.0).is_none());

        let ok = json!({"requirement": "x", "match_percentage": 40, "explanation": "y"});
        let cleaned = clean_match(&ok, 1.3).unwrap();
        assert_eq!(cleaned.match_percentage, 52);
        assert_eq!(cleaned.requirement, "x");
    }

    #[test]
    fn test_adjust_assessment_caps_matches_at_five() {
        let matches: Vec<_> = (0..8)
            .map(|i| json!({"requirement": format!("req {i}"), "match_percentage": 50}))
            .collect();
        let assessment = NarrativeAssessment {
            overall_score: 50.0,
            requirement_matches: matches,
            ..Default::default()
        };
        let report = adjust_assessment(assessment, SeniorityTier::Senior);
        assert_eq!(report.requirement_matches.len(), 5);
        assert_eq!(report.seniority_level, "Senior");
    }

    #[test]
    fn test_adjust_assessment_truncates_long_text() {
        let assessment = NarrativeAssessment {
            overall_score: 10.0,
            summary: "x".repeat(900),
            key_strengths: vec!["y".repeat(900)],
            ..Default::default()
        };
        let report = adjust_assessment(assessment, SeniorityTier::Principal);
        assert_eq!(report.summary.chars().count(), 500);
        assert_eq!(report.key_strengths[0].chars().count(), 500);
    }

    #[tokio::test]
    async fn test_gate_wins_over_high_scoring_collaborator() {
        // "b1" resolves to a Basic language hit, downgraded to None — the
        // sentinel must come back even though the stub reports 95.
        let reporter = StubReporter(high_score_assessment());
        let report = analyze_cv(&reporter, "deutsch b1", &[], Role::Consultant).await;

        assert_eq!(report.overall_score, 0);
        assert_eq!(report.seniority_level, "Nicht geeignet");
        assert!(report.requirement_matches.is_empty());
        assert!(report.key_strengths.is_empty());
        assert_eq!(
            report.improvement_areas,
            vec![LANGUAGE_IMPROVEMENT_NOTE.to_string()]
        );
    }

    #[tokio::test]
    async fn test_collaborator_failure_degrades_to_fallback() {
        let report = analyze_cv(&FailingReporter, "deutsch fließend", &[], Role::Consultant).await;

        assert_eq!(report.overall_score, 0);
        assert_eq!(report.seniority_level, "Junior");
        assert!(report.requirement_matches.is_empty());
    }

    #[tokio::test]
    async fn test_eligible_candidate_gets_adjusted_scores() {
        // Native speaker with leadership markers and SAP: passes the gate,
        // and the stub's scores come back adjusted by the tier multiplier.
        let text = "muttersprachler, teamleiter und projektleiter, solution architect, sap";
        let reporter = StubReporter(high_score_assessment());
        let report = analyze_cv(&reporter, text, &[], Role::Consultant).await;

        assert!(report.overall_score > 0);
        assert!(report.overall_score <= 100);
        assert_ne!(report.seniority_level, "Nicht geeignet");
        assert_eq!(report.requirement_matches.len(), 1);
        assert!(report.requirement_matches[0].match_percentage >= 90);
    }

    #[tokio::test]
    async fn test_report_tier_label_is_the_classifier_tier() {
        // The stub echoes "Principal"; the report carries the classifier's
        // own tier for the profile instead.
        let text = "deutsch fließend, ms office";
        let reporter = StubReporter(high_score_assessment());
        let report = analyze_cv(&reporter, text, &[], Role::Consultant).await;

        assert_eq!(report.seniority_level, "Junior");
    }

    #[test]
    fn test_format_requirements_escapes_quotes() {
        let reqs = vec!["Kenntnisse in \"IS-U\"".to_string(), "ABAP".to_string()];
        let formatted = format_requirements(&reqs);
        assert_eq!(formatted, "- Kenntnisse in \\\"IS-U\\\"\n- ABAP");
    }

    #[test]
    fn test_not_eligible_report_shape() {
        let report = not_eligible_report();
        assert_eq!(report.overall_score, 0);
        assert_eq!(report.seniority_level, "Nicht geeignet");
        assert!(report.requirement_matches.is_empty());
        assert!(report.key_strengths.is_empty());
        assert_eq!(report.improvement_areas.len(), 1);
    }
}
