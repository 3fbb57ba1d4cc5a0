// Static keyword tables for the job classifier.
// Table order matters: when two categories score the same, the one declared first wins.

use super::{Industry, JobFamily, Seniority, SkillCategory};

pub const JOB_FAMILIES: &[(JobFamily, &[&str])] = &[
    (
        JobFamily::Engineering,
        &[
            "engineer",
            "developer",
            "programmer",
            "swe",
            "devops",
            "infrastructure",
            "backend",
            "frontend",
            "fullstack",
            "mobile",
            "platform",
            "site reliability",
            "sre",
        ],
    ),
    (
        JobFamily::Data,
        &[
            "data scientist",
            "ml engineer",
            "ai engineer",
            "data engineer",
            "analyst",
            "machine learning",
            "artificial intelligence",
            "data analyst",
        ],
    ),
    (
        JobFamily::Product,
        &[
            "product manager",
            "pm",
            "product owner",
            "product lead",
            "chief product officer",
            "cpo",
        ],
    ),
    (
        JobFamily::Design,
        &[
            "designer",
            "ux",
            "ui",
            "creative",
            "design lead",
            "art director",
            "visual designer",
        ],
    ),
    (
        JobFamily::Sales,
        &[
            "sales",
            "account executive",
            "account manager",
            "sales rep",
            "business development",
            "bdr",
            "sdr",
        ],
    ),
    (
        JobFamily::Marketing,
        &[
            "marketing",
            "growth",
            "content",
            "brand",
            "digital marketing",
            "social media",
            "seo",
            "sem",
        ],
    ),
    (
        JobFamily::Finance,
        &[
            "finance",
            "accounting",
            "controller",
            "cfo",
            "analyst",
            "fp&a",
            "tax",
            "audit",
            "cpa",
        ],
    ),
    (
        JobFamily::Legal,
        &["lawyer", "attorney", "counsel", "legal", "paralegal", "compliance"],
    ),
    (
        JobFamily::Operations,
        &[
            "operations",
            "project manager",
            "program manager",
            "business analyst",
            "consultant",
        ],
    ),
    (
        JobFamily::Hr,
        &[
            "hr",
            "human resources",
            "recruiter",
            "talent",
            "people operations",
            "chief people officer",
        ],
    ),
    (
        JobFamily::Executive,
        &[
            "ceo",
            "cfo",
            "cto",
            "coo",
            "chief",
            "vp",
            "vice president",
            "director",
            "head of",
        ],
    ),
];

pub const SENIORITY_LEVELS: &[(Seniority, &[&str])] = &[
    (
        Seniority::Entry,
        &[
            "junior",
            "entry",
            "associate",
            "intern",
            "new grad",
            "recent graduate",
            "1-2 years",
        ],
    ),
    (
        Seniority::Mid,
        &["mid", "2-5 years", "3-6 years", "intermediate"],
    ),
    (
        Seniority::Senior,
        &[
            "senior",
            "sr",
            "5+ years",
            "6+ years",
            "lead",
            "principal",
            "staff",
        ],
    ),
    (
        Seniority::Executive,
        &[
            "director",
            "vp",
            "vice president",
            "chief",
            "ceo",
            "cfo",
            "cto",
            "coo",
            "head of",
        ],
    ),
];

pub const INDUSTRIES: &[(Industry, &[&str])] = &[
    (
        Industry::Tech,
        &[
            "tech",
            "software",
            "saas",
            "platform",
            "ai",
            "ml",
            "startup",
            "fintech",
            "edtech",
            "healthtech",
        ],
    ),
    (
        Industry::Finance,
        &[
            "finance",
            "banking",
            "investment",
            "trading",
            "insurance",
            "fintech",
            "hedge fund",
            "private equity",
        ],
    ),
    (
        Industry::Healthcare,
        &[
            "healthcare",
            "medical",
            "hospital",
            "pharma",
            "biotech",
            "health tech",
            "clinical",
        ],
    ),
    (
        Industry::Consulting,
        &[
            "consulting",
            "mckinsey",
            "bain",
            "bcg",
            "deloitte",
            "pwc",
            "accenture",
        ],
    ),
    (
        Industry::Retail,
        &["retail", "ecommerce", "consumer", "fashion", "cpg", "fmcg"],
    ),
];

/// One alternation per skill category; compiled once in `job_analyzer`.
pub const SKILL_PATTERNS: &[(SkillCategory, &str)] = &[
    (
        SkillCategory::Programming,
        r"\b(python|javascript|java|c\+\+|golang|rust|typescript|ruby|php|scala|kotlin|swift|objective-c|c#|r|matlab)\b",
    ),
    (
        SkillCategory::Cloud,
        r"\b(aws|azure|gcp|google cloud|amazon web services|docker|kubernetes|terraform|pulumi|cloudformation|helm|istio)\b",
    ),
    (
        SkillCategory::Databases,
        r"\b(postgresql|mysql|mongodb|redis|elasticsearch|dynamodb|cassandra|snowflake|bigquery|databricks)\b",
    ),
    (
        SkillCategory::Devops,
        r"\b(jenkins|gitlab ci|github actions|ansible|chef|puppet|docker|kubernetes|prometheus|grafana|datadog|splunk)\b",
    ),
    (
        SkillCategory::Frontend,
        r"\b(react|angular|vue|svelte|next\.js|nuxt|webpack|vite|sass|less|tailwind|bootstrap)\b",
    ),
    (
        SkillCategory::Backend,
        r"\b(node\.js|express|django|flask|spring|rails|laravel|fastapi|graphql|rest api|microservices)\b",
    ),
    (
        SkillCategory::MlAi,
        r"\b(tensorflow|pytorch|scikit-learn|pandas|numpy|jupyter|mlflow|kubeflow|langchain|openai|hugging face|transformers)\b",
    ),
    (
        SkillCategory::Finance,
        r"\b(gaap|ifrs|sox|cpa|cfa|frm|quickbooks|sap|oracle financials|hyperion|cognos|tableau|power bi)\b",
    ),
    (
        SkillCategory::Legal,
        r"\b(westlaw|lexisnexis|clio|contracts|litigation|ip|patent|trademark|compliance|gdpr|ccpa)\b",
    ),
];

/// City-state patterns are matched against the original casing; only the allowlist
/// carries `(?i)`. Case-insensitive city-state patterns would also accept any
/// `word, xx` pair, such as `python, go` in a skills list.
pub const LOCATION_PATTERNS: &[&str] = &[
    r"\b([A-Z][a-z]+ [A-Z][a-z]+, [A-Z]{2})\b",
    r"\b([A-Z][a-z]+, [A-Z]{2})\b",
    r"(?i)\b(New York|San Francisco|Los Angeles|Chicago|Boston|Seattle|Austin|Denver|Atlanta|Miami|remote)\b",
];

pub const LEADERSHIP_TERMS: &[&str] = &["lead", "manager", "director", "head"];

pub const REMOTE_TERMS: &[&str] = &["remote", "distributed", "work from home", "wfh"];
