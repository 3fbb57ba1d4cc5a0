//! Hiring context detection: the coarser industry / company / role labels that
//! frame the fit-scoring prompts. Same count-and-argmax procedure as the job classifier.

use serde::{Deserialize, Serialize};

use crate::analysis::job_analyzer::{classify_by_keywords, contains_any};

const INDUSTRY_PATTERNS: &[(&str, &[&str])] = &[
    (
        "Tech",
        &["software", "ai", "ml", "saas", "startup", "tech", "developer", "engineer", "data", "cloud"],
    ),
    (
        "Healthcare",
        &["hospital", "medical", "nurse", "doctor", "clinical", "patient", "healthcare", "pharma"],
    ),
    (
        "Finance",
        &["finance", "investment", "banking", "trading", "fintech", "accounting", "cpa", "tax"],
    ),
    (
        "Legal",
        &["law", "attorney", "lawyer", "legal", "litigation", "compliance", "paralegal"],
    ),
    (
        "Retail",
        &["retail", "ecommerce", "consumer", "merchandising", "store", "sales"],
    ),
    (
        "Education",
        &["education", "teacher", "professor", "university", "school", "academic"],
    ),
    (
        "Government",
        &["government", "public sector", "federal", "state", "municipal", "agency"],
    ),
];

const COMPANY_TYPES: &[(&str, &[&str])] = &[
    (
        "VC-backed Startup",
        &["startup", "series a", "series b", "series c", "vc", "venture", "funding", "round"],
    ),
    (
        "Enterprise",
        &["enterprise", "fortune 500", "large company", "corporation", "multinational"],
    ),
    (
        "Hospital Group",
        &["hospital", "health system", "medical center", "clinic"],
    ),
    (
        "Public Sector",
        &["government", "public", "federal", "state", "city", "municipal"],
    ),
];

const ROLE_TYPES: &[(&str, &[&str])] = &[
    ("Software Engineer", &["software engineer", "developer", "programmer", "swe"]),
    (
        "DevOps Engineer",
        &["devops", "infrastructure", "site reliability", "platform engineer"],
    ),
    (
        "Data Scientist",
        &["data scientist", "ml engineer", "ai engineer", "machine learning"],
    ),
    ("Product Manager", &["product manager", "pm", "product owner"]),
    ("Designer", &["designer", "ux", "ui", "creative director"]),
    ("Sales", &["sales", "account manager", "business development", "revenue"]),
    ("Marketing", &["marketing", "growth", "content", "brand"]),
    ("Finance", &["finance", "accounting", "controller", "cfo", "analyst"]),
    ("Legal", &["lawyer", "attorney", "counsel", "legal"]),
    ("Operations", &["operations", "project manager", "program manager"]),
];

/// Subtypes are checked in order and the first hit wins.
const ROLE_SUBTYPES: &[(&str, &[(&str, &[&str])])] = &[
    (
        "Software Engineer",
        &[
            ("Frontend", &["frontend", "react", "angular", "vue", "ui"]),
            ("Backend", &["backend", "api", "server", "database"]),
            ("Full-stack", &["full-stack", "fullstack"]),
            ("Mobile", &["mobile", "ios", "android", "react native"]),
        ],
    ),
    (
        "DevOps Engineer",
        &[
            ("Cloud Infrastructure", &["cloud", "aws", "azure", "gcp"]),
            ("CI/CD", &["ci/cd", "jenkins", "pipeline"]),
            ("Security", &["security", "compliance", "devsecops"]),
        ],
    ),
    (
        "Data Scientist",
        &[
            ("ML Engineer", &["ml engineer", "machine learning"]),
            ("Data Analyst", &["data analyst", "analytics"]),
            ("AI Researcher", &["ai research", "nlp", "computer vision"]),
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiringContext {
    pub industry: String,
    pub company_type: String,
    pub role_type: String,
    pub role_subtype: String,
}

pub fn detect_context(job_description: &str) -> HiringContext {
    let text = job_description.to_lowercase();

    let industry = classify_by_keywords(&text, INDUSTRY_PATTERNS, "Tech");
    let company_type = classify_by_keywords(&text, COMPANY_TYPES, "Enterprise");
    let role_type = classify_by_keywords(&text, ROLE_TYPES, "Software Engineer");
    let role_subtype = detect_role_subtype(&text, role_type);

    HiringContext {
        industry: industry.to_string(),
        company_type: company_type.to_string(),
        role_type: role_type.to_string(),
        role_subtype: role_subtype.to_string(),
    }
}

fn detect_role_subtype(text: &str, role_type: &str) -> &'static str {
    ROLE_SUBTYPES
        .iter()
        .find(|(role, _)| *role == role_type)
        .and_then(|(_, subtypes)| {
            subtypes
                .iter()
                .find(|(_, keywords)| contains_any(text, keywords))
                .map(|(subtype, _)| *subtype)
        })
        .unwrap_or("General")
}
