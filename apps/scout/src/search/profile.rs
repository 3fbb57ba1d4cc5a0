//! Best-effort field extraction from a profile search hit. Titles usually look
//! like `Name - Headline - Company | LinkedIn` and snippets like
//! `Location · Headline · Company`; anything else degrades to empty fields.

use crate::search::{CandidateProfile, SearchItem, PROFILE_SOURCE};

pub fn parse_profile(item: &SearchItem) -> CandidateProfile {
    let title = strip_site_suffix(&item.title);
    let mut parts = title.split(" - ").map(str::trim);

    let name = parts.next().unwrap_or_default().to_string();
    let mut headline = parts.next().unwrap_or_default().to_string();
    let mut company = parts.next().unwrap_or_default().to_string();

    if company.is_empty() {
        if let Some((role, employer)) = headline.split_once(" at ") {
            company = employer.trim().to_string();
            headline = role.trim().to_string();
        }
    }

    CandidateProfile {
        title: item.title.clone(),
        snippet: item.snippet.clone(),
        link: item.link.clone(),
        source: PROFILE_SOURCE.to_string(),
        name,
        headline,
        company,
        location: snippet_location(&item.snippet),
    }
}

fn strip_site_suffix(title: &str) -> &str {
    title
        .rsplit_once('|')
        .map(|(head, _)| head)
        .unwrap_or(title)
        .trim()
}

fn snippet_location(snippet: &str) -> String {
    snippet
        .split_once(" · ")
        .map(|(location, _)| location.trim().to_string())
        .unwrap_or_default()
}
