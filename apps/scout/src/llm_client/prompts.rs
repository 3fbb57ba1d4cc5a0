// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to every scoring prompt. Conservatism lives in the prompt only; nothing in code enforces it.
pub const CONSERVATIVE_SCORING: &str = "Be conservative in scoring - these are elite standards. \
    Reserve 8+ for exceptional candidates only.";

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").expect("valid regex"));

/// Fills `{name}` placeholders in a single pass. Inserted values are never
/// scanned again, and names missing from `values` are left as written.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| {
            values
                .iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
