//! Keyword tables for the skill extractor.
//!
//! These lists are data, not logic: they encode the screening team's German
//! energy-sector vocabulary. All matching is lower-case substring containment.

/// Language proficiency tiers. The advanced tier marks C1-equivalent text,
/// the expert tier native-speaker text.
pub const LANGUAGE_EXPERT: &[&str] = &["muttersprachler", "native", "c2", "verhandlungssicher"];
pub const LANGUAGE_ADVANCED: &[&str] = &["deutsch c1", "fließend", "sehr gut", "business fluent"];
pub const LANGUAGE_BASIC: &[&str] = &["gut", "b2", "b1", "a2", "a1"];

/// Seniority/leadership markers. Three or more hits flag the candidate as
/// expert-level for several category ladders.
pub const EXPERT_INDICATORS: &[&str] = &[
    "expert",
    "lead",
    "leitung",
    "führung",
    "architect",
    "principal",
    "senior",
    "mehrjährige erfahrung",
    "langjährige erfahrung",
    "umfangreiche erfahrung",
    "extensive experience",
    "projektleiter",
    "teamleiter",
    "chief",
    "head of",
    "leiter",
    "manager",
    "berater",
    "solution architect",
    "enterprise architect",
    "technical lead",
    "fachexperte",
    "specialist",
    "spezialist",
    "strategisch",
];

/// Shorter marker list used by the seniority classifier's experience scan.
pub const CLASSIFIER_EXPERT_INDICATORS: &[&str] = &[
    "expert",
    "lead",
    "leitung",
    "führung",
    "architect",
    "principal",
    "senior",
    "mehrjährige erfahrung",
    "langjährige erfahrung",
    "umfangreiche erfahrung",
    "extensive experience",
];

/// Employers whose alumni tend to carry directly relevant project history.
pub const SIMILAR_COMPANIES: &[&str] = &[
    "convista",
    "koenig.solutions",
    "incept4",
    "cronos",
    "intense ag",
    "hochfrequenz",
    "dsc unternehmensberatung",
    "power reply",
    "nea gruppe",
    "cerebricks",
    "energy4u",
    "nexus nova",
    "demando",
    "adesso orange",
];

/// Regions within commuting distance of the office locations.
pub const LOCATION_GROUPS: &[(&str, &[&str])] = &[
    ("mannheim", &["mannheim", "ludwigshafen", "heidelberg"]),
    ("rhein_neckar", &["rhein-neckar", "rhein neckar", "metropolregion"]),
    ("frankfurt", &["frankfurt", "main-taunus", "rhein-main"]),
    ("nrw", &["düsseldorf", "wuppertal", "nrw", "nordrhein-westfalen"]),
    ("thueringen", &["thüringen", "erfurt", "jena", "gera"]),
];

pub const EDUCATION_EXPERT: &[&str] = &["promotion", "doktor", "dr.", "phd", "master", "diplom"];
pub const EDUCATION_ADVANCED: &[&str] = &["hochschulabschluss", "universität", "studium", "bachelor"];
pub const EDUCATION_BASIC: &[&str] = &["ausbildung", "berufsausbildung", "fachhochschule"];

pub const SOFT_SKILLS_EXPERT: &[&str] = &[
    "führungserfahrung",
    "personalverantwortung",
    "teamleitung",
    "mentoring",
];
pub const SOFT_SKILLS_ADVANCED: &[&str] =
    &["projektleitung", "kundenberatung", "verhandlung", "präsentation"];
pub const SOFT_SKILLS_BASIC: &[&str] = &["teamfähigkeit", "engagement", "kundenorientierung"];

pub const PROCESS_MODELING_TOOLS: &[&str] =
    &["camunda", "signavio", "bpmn", "prozessmodellierung", "aris"];

pub const ECC_KEYWORDS: &[&str] = &["is-u", "idex", "im4g", "sap ecc"];

pub const S4_KEYWORDS: &[&str] = &["s/4", "s4", "s4hana", "s/4 hana", "utilities", "maco", "ucom"];

pub const ECC_S4_PROCESS_KEYWORDS: &[&str] = &[
    "stammdaten",
    "datenmodelle",
    "messkonzepte",
    "geräteverwaltung",
    "edm",
    "abrechnung",
    "fakturierung",
    "fi-ca",
    "mos-billing",
    "memi",
    "eeg billing",
];

/// SAP technology stack, grouped by platform area; group totals feed a single
/// combined count.
pub const SAP_TECHNOLOGY_GROUPS: &[(&str, &[&str])] = &[
    ("transport", &["transportverwaltung", "transport management"]),
    ("rap", &["rap", "rest application programming"]),
    ("cap", &["cap", "cloud application programming"]),
    ("btp", &["btp", "business technology platform"]),
    ("fiori", &["fiori", "cds", "core data services"]),
    ("abap", &["abap", "abap oo"]),
    ("integration", &["integration platform", "cpi"]),
];

pub const NON_SAP_GROUPS: &[(&str, &[&str])] = &[
    (
        "programming",
        &["java", "javascript", "nodejs", "python", "flask", "django"],
    ),
    ("web", &["html", "css", "soap", "rest", "odata", "soa"]),
    (
        "architecture",
        &["solution design", "software-architektur", "software-lifecycle"],
    ),
    (
        "devops",
        &["ci/cd", "unit tests", "integration tests", "testdriven development"],
    ),
    ("database", &["nosql", "sql"]),
];

pub const MODELING_KEYWORDS: &[&str] = &["bpmn", "uml", "enterprise architecture"];

pub const PROCESS_MGMT_EXPERT: &[&str] =
    &["prozessoptimierung", "change management", "transformation"];
pub const PROCESS_MGMT_ADVANCED: &[&str] = &["prozessanalyse", "prozessbeschreibung"];
pub const PROCESS_MGMT_BASIC: &[&str] = &["testfälle", "testkoordination", "testen"];

pub const REQ_ENG_EXPERT: &[&str] = &[
    "anforderungsmanagement",
    "requirements engineering",
    "spezifikation",
];
pub const REQ_ENG_ADVANCED: &[&str] =
    &["fachkonzept", "technisches konzept", "anforderungsdefinition"];
pub const REQ_ENG_BASIC: &[&str] = &["lastenheft", "pflichtenheft"];

pub const PROJECT_MGMT_EXPERT: &[&str] =
    &["portfoliomanagement", "programm management", "multi-project"];
pub const PROJECT_MGMT_ADVANCED: &[&str] = &["projektleitung", "scrum master", "agile coach"];
pub const PROJECT_MGMT_BASIC: &[&str] = &["scrum", "kanban", "wasserfall", "projektplanung"];

pub const ENERGY_GENERAL_EXPERT: &[&str] = &["energiemarkt", "energiewende", "regulierung"];
pub const ENERGY_GENERAL_ADVANCED: &[&str] =
    &["kundenservice", "messdatenmanagement", "marktkommunikation"];
pub const ENERGY_GENERAL_BASIC: &[&str] =
    &["messkonzepte", "wechselprozesse", "gpke", "geli", "wim"];

pub const ENERGY_NETWORK_KEYWORDS: &[&str] =
    &["netzabrechnung", "einspeiserabrechnung", "netznutzung"];

pub const ENERGY_SUPPLY_KEYWORDS: &[&str] =
    &["crm", "rechnungseingangsprüfung", "endkundenabrechnung"];

pub const ENERGY_MSB_EXPERT: &[&str] = &["smart meter strategie", "msb transformation"];
pub const ENERGY_MSB_ADVANCED: &[&str] = &["smart meter rollout", "gateway administration"];
pub const ENERGY_MSB_BASIC: &[&str] = &["gdew", "msbg", "gateway", "mdm"];
