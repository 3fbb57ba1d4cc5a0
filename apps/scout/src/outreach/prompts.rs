// Prompt constants for outreach drafting.

pub const OUTREACH_SYSTEM: &str = "You are an assistant that drafts personalized LinkedIn \
    connection messages from a recruiter to a candidate. The message should be brief, polite, \
    and reference the candidate's background and the job opportunity.";

/// Replace: {role}, {organization}, {description}, {name}, {current_role},
///          {experience}, {commonalities}
pub const OUTREACH_PROMPT_TEMPLATE: &str = r#"Draft a personalized LinkedIn connection message for the following scenario:
- Job Title: {role} at {organization} ({description})
- Candidate: {name}, {current_role} ({experience})
- Commonalities: {commonalities}
The message should mention one of their skills and invite them to chat about the role. Be brief, polite, and reference the candidate's background and the job opportunity."#;

/// Sent when drafting fails. Replace: {name}, {role}, {organization}
pub const FALLBACK_MESSAGE_TEMPLATE: &str = "Hi {name},\n\n\
    Your background caught my eye and I think you could be a strong fit for the {role} role \
    at {organization}. Would you be open to a quick chat this week?\n\nBest regards";
