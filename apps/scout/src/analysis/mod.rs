//! Job Classifier: keyword tables and regexes that turn a raw job description
//! into a `JobAnalysis`. No network calls, no failure modes: absence of matches
//! degrades to the default categories.

pub mod context;
pub mod job_analyzer;
pub mod tables;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

pub use context::{detect_context, HiringContext};
pub use job_analyzer::analyze_job;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobFamily {
    Engineering,
    Data,
    Product,
    Design,
    Sales,
    Marketing,
    Finance,
    Legal,
    Operations,
    Hr,
    Executive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    Entry,
    Mid,
    Senior,
    Executive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Tech,
    Finance,
    Healthcare,
    Consulting,
    Retail,
}

/// Skill buckets. `Ord` follows declaration order so skill maps iterate stably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    Cloud,
    Databases,
    Devops,
    Frontend,
    Backend,
    MlAi,
    Finance,
    Legal,
}

/// Everything the classifier derives from one job description.
/// Produced once per description and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAnalysis {
    pub job_family: JobFamily,
    pub seniority: Seniority,
    pub industry: Industry,
    /// Every category is present; unmatched categories map to an empty set.
    pub skills: BTreeMap<SkillCategory, BTreeSet<String>>,
    pub locations: BTreeSet<String>,
    pub is_technical: bool,
    pub is_leadership: bool,
    pub remote_eligible: bool,
    pub total_skills: usize,
}

impl JobAnalysis {
    pub fn skills_in(&self, category: SkillCategory) -> impl Iterator<Item = &str> {
        self.skills
            .get(&category)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }
}
