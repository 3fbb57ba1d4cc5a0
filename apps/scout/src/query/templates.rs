// X-Ray query templates, one family per role key.
// `{name}` placeholders are filled by `query::placeholders::resolve`.

use serde::{Deserialize, Serialize};

use crate::analysis::JobFamily;

/// Template family selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKey {
    DevopsEngineer,
    MlEngineer,
    SoftwareEngineer,
    TaxDirector,
}

#[derive(Debug, Clone, Copy)]
pub struct QueryTemplate {
    pub key: &'static str,
    pub template: &'static str,
}

const DEVOPS_ENGINEER: [QueryTemplate; 3] = [
    QueryTemplate {
        key: "primary",
        template: r#"site:linkedin.com/in/ ("DevOps Engineer" OR "Site Reliability Engineer" OR "Infrastructure Engineer") {location} {experience} {tech_stack}"#,
    },
    QueryTemplate {
        key: "specialized",
        template: r#"site:linkedin.com/in/ "DevOps Engineer" {company_context} ({cloud_platforms}) {iac_tools}"#,
    },
    QueryTemplate {
        key: "industry_specific",
        template: r#"site:linkedin.com/in/ ("DevOps Engineer" OR "Infrastructure Engineer") {industry_context} {certification}"#,
    },
];

const ML_ENGINEER: [QueryTemplate; 3] = [
    QueryTemplate {
        key: "primary",
        template: r#"site:linkedin.com/in/ ("ML Engineer" OR "Machine Learning Engineer" OR "AI Engineer") {location} {experience} {ml_frameworks}"#,
    },
    QueryTemplate {
        key: "specialized",
        template: r#"site:linkedin.com/in/ "ML Engineer" {company_context} ({production_ml}) {ai_domains}"#,
    },
    QueryTemplate {
        key: "research_focused",
        template: r#"site:linkedin.com/in/ ("ML Engineer" OR "Research Engineer") {research_context} {academic_background}"#,
    },
];

const SOFTWARE_ENGINEER: [QueryTemplate; 3] = [
    QueryTemplate {
        key: "primary",
        template: r#"site:linkedin.com/in/ ("Software Engineer" OR "Software Developer") {location} {experience} {programming_languages}"#,
    },
    QueryTemplate {
        key: "specialized",
        template: r#"site:linkedin.com/in/ "Software Engineer" {company_context} {tech_stack} {specialization}"#,
    },
    QueryTemplate {
        key: "fullstack",
        template: r#"site:linkedin.com/in/ ("Full Stack Engineer" OR "Full Stack Developer") {frontend_backend} {modern_stack}"#,
    },
];

const TAX_DIRECTOR: [QueryTemplate; 3] = [
    QueryTemplate {
        key: "primary",
        template: r#"site:linkedin.com/in/ ("Tax Director" OR "Tax Manager" OR "Senior Tax Manager") {location} {experience} {tax_credentials}"#,
    },
    QueryTemplate {
        key: "specialized",
        template: r#"site:linkedin.com/in/ "Tax Director" {company_size} {tax_specialization} {cpa_requirement}"#,
    },
    QueryTemplate {
        key: "industry_specific",
        template: r#"site:linkedin.com/in/ ("Tax Director" OR "Tax Manager") {industry_focus} {compliance_experience}"#,
    },
];

impl RoleKey {
    /// Picks a template family by re-reading the raw text under the classified job family.
    pub fn select(job_family: JobFamily, job_description: &str) -> Self {
        let text = job_description.to_lowercase();
        let mentions = |terms: &[&str]| terms.iter().any(|t| text.contains(t));

        match job_family {
            JobFamily::Engineering
                if mentions(&["devops", "infrastructure", "site reliability", "platform"]) =>
            {
                RoleKey::DevopsEngineer
            }
            JobFamily::Data if mentions(&["ml engineer", "machine learning", "ai engineer"]) => {
                RoleKey::MlEngineer
            }
            JobFamily::Finance if mentions(&["tax director", "tax manager", "tax"]) => {
                RoleKey::TaxDirector
            }
            _ => RoleKey::SoftwareEngineer,
        }
    }

    pub fn templates(self) -> &'static [QueryTemplate; 3] {
        match self {
            RoleKey::DevopsEngineer => &DEVOPS_ENGINEER,
            RoleKey::MlEngineer => &ML_ENGINEER,
            RoleKey::SoftwareEngineer => &SOFTWARE_ENGINEER,
            RoleKey::TaxDirector => &TAX_DIRECTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engineering_with_devops_terms_selects_devops() {
        let key = RoleKey::select(JobFamily::Engineering, "Platform team, Kubernetes");
        assert_eq!(key, RoleKey::DevopsEngineer);
    }

    #[test]
    fn test_plain_engineering_selects_software() {
        let key = RoleKey::select(JobFamily::Engineering, "Backend engineer, Go and Postgres");
        assert_eq!(key, RoleKey::SoftwareEngineer);
    }

    #[test]
    fn test_data_family_ml_terms() {
        assert_eq!(
            RoleKey::select(JobFamily::Data, "Machine Learning Engineer"),
            RoleKey::MlEngineer
        );
        assert_eq!(
            RoleKey::select(JobFamily::Data, "Data analyst, SQL dashboards"),
            RoleKey::SoftwareEngineer
        );
    }

    #[test]
    fn test_finance_tax_selects_tax_director() {
        assert_eq!(
            RoleKey::select(JobFamily::Finance, "Tax Director, CPA"),
            RoleKey::TaxDirector
        );
        assert_eq!(
            RoleKey::select(JobFamily::Finance, "Financial controller"),
            RoleKey::SoftwareEngineer
        );
    }

    #[test]
    fn test_unmapped_family_falls_back_to_software() {
        assert_eq!(
            RoleKey::select(JobFamily::Sales, "devops tax machine learning"),
            RoleKey::SoftwareEngineer
        );
    }

    #[test]
    fn test_every_family_starts_with_primary_and_specialized() {
        for key in [
            RoleKey::DevopsEngineer,
            RoleKey::MlEngineer,
            RoleKey::SoftwareEngineer,
            RoleKey::TaxDirector,
        ] {
            let templates = key.templates();
            assert_eq!(templates[0].key, "primary");
            assert_eq!(templates[1].key, "specialized");
            assert!(templates.iter().all(|t| t.template.starts_with("site:linkedin.com/in/")));
        }
    }
}
