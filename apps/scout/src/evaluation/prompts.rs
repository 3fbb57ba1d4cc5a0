// All LLM prompt constants for the Fit Scoring module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Criteria prompt template.
/// Replace: {industry}, {company_type}, {role_type}, {role_subtype}, {job_description}
pub const CRITERIA_PROMPT_TEMPLATE: &str = r#"Generate elite hiring criteria for this role.

Industry: {industry}
Company Type: {company_type}
Role Type: {role_type}
Role Subtype: {role_subtype}

Job Description:
{job_description}

Create criteria for top 1-2% performers who can thrive in elite environments like:
- Tech: Stripe, Anthropic, OpenAI, Databricks, Google, Apple
- Finance: Goldman Sachs, Blackstone, Jane Street, McKinsey
- Healthcare: Mayo Clinic, Johns Hopkins, Cleveland Clinic

Return a JSON object with this EXACT schema:
{
  "education_requirements": "Elite university requirements or equivalent excellence",
  "core_skills": ["4-6 mission-critical skills - what they must DO, not just know"],
  "domain_expertise": ["4-6 technical/domain specific capabilities"],
  "experience_markers": ["3-4 indicators of high performance and ownership"],
  "company_preferences": ["Preferred company types, stages, or caliber"],
  "red_flags": ["3-4 disqualifying factors or concerning patterns"],
  "bonus_signals": ["3-4 exceptional indicators like OSS, publications, awards"]
}

Be demanding - these are elite hiring standards for top 1-2% performers."#;

/// Evaluation prompt template.
/// Replace: {industry}, {company_type}, {role_type}, {role_subtype}, {criteria},
///          {candidate}, {conservative_scoring}
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"Evaluate this candidate on a 0-10 scale.

CONTEXT:
Industry: {industry}
Company Type: {company_type}
Role: {role_type} - {role_subtype}

ELITE HIRING CRITERIA:
{criteria}

CANDIDATE PROFILE:
{candidate}

Score each category (8+ only for exceptional candidates):

1. Education (0-10): Elite institutions, degrees, certifications
2. Career Trajectory (0-10): Growth, ownership, increasing responsibility
3. Company Relevance (0-10): High-caliber organizations, industry fit
4. Tenure & Stability (0-10): 1.5-3 year averages, justified moves
5. Core Skills (0-10): Mastery of mission-critical capabilities
6. Bonus Signals (0-5): Exceptional achievements, publications, OSS
7. Red Flags (-5 to 0): Dealbreakers, concerning patterns

Calculate final weighted score:
- Education: 20%
- Career Trajectory: 20%
- Company Relevance: 15%
- Tenure & Stability: 15%
- Core Skills: 20%
- Bonus Signals: 5%
- Red Flags: -15%

Return JSON:
{
  "scores": {
    "education": 0-10,
    "career_trajectory": 0-10,
    "company_relevance": 0-10,
    "tenure_stability": 0-10,
    "core_skills": 0-10,
    "bonus_signals": 0-5,
    "red_flags": -5 to 0
  },
  "final_score": "calculated weighted score 0-10",
  "strengths": ["2-3 key strengths"],
  "weaknesses": ["2-3 key concerns or gaps"],
  "rationale": "2-3 sentence assessment of overall fit",
  "override_signal": "true if extraordinary signal despite lower score"
}

{conservative_scoring}"#;

/// Free-text rubric prompt. Replace: {job_description}, {candidate}
pub const RUBRIC_PROMPT_TEMPLATE: &str = r#"You are an elite candidate evaluator. Use the following job description and candidate profile to score the candidate.

Job Description:
{job_description}

Candidate Profile:
{candidate}

Step 1: Extract context (Industry, Company Type, Role Type, Role Subtype).
Step 2: Generate elite hiring criteria for this context.
Step 3: Score the candidate using the following rubric (100 -> 10.0 scale):
- Education (20%)
- Career Trajectory (20%)
- Company Relevance (15%)
- Tenure & Stability (15%)
- Most Important Skills (20%)
- Bonus Signals (5%)
- Red Flags (-15%)

Output format:
Final Fit Score: X.X / 10.0
Breakdown:
* Education: x/10
* Career trajectory: x/10
* Company relevance: x/10
* Tenure & stability: x/10
* Most important skills: x/10
* Bonus signals: x/5
* Red flags: -x
Summary (3-5 lines):
Strengths: ...
Weaknesses: ...
Rationale: ...
Override Signal: [yes/no, with reason if yes]"#;
