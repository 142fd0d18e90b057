//! Profile page parsing
//!
//! Reads the fields the dashboard needs out of a profile page's HTML:
//!
//! - the name label and the text nodes that follow it (roll number,
//!   college, year)
//! - the department label
//! - every statistic's value/label pair

use regex::Regex;
use std::sync::OnceLock;

use crate::metrics::LANGUAGES;
use crate::profile::{fields, RawProfile, NOT_FOUND};

fn name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?s)<div[^>]*class="ui big label black"[^>]*>(.*?)</div>"#)
            .expect("valid name pattern")
    })
}

fn department_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?s)<div[^>]*class="ui large label"[^>]*>(.*?)</div>"#)
            .expect("valid department pattern")
    })
}

fn div_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<div\b[^>]*?\sclass\s*=\s*"([^"]*)"[^>]*>"#).expect("valid div pattern")
    })
}

fn tag_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9]*)[^>]*?(/?)>").expect("valid tag pattern"))
}

const VOID_ELEMENTS: [&str; 8] = ["br", "hr", "img", "input", "meta", "link", "wbr", "source"];

/// Extract a profile from page HTML
///
/// Fields the page does not contain are absent from the result; callers
/// fill defaults.
pub fn parse_profile_page(html: &str) -> RawProfile {
    let mut profile = RawProfile::new();

    match name_pattern().captures(html) {
        Some(caps) => {
            let name = text_content(&caps[1]);
            tracing::debug!(name = %name, "Found name");
            profile.insert(fields::NAME, name);

            let after = caps.get(0).map(|m| m.end()).unwrap_or(html.len());
            let texts = sibling_texts(&html[after..], 4);
            if texts.len() >= 3 {
                profile.insert(fields::ROLL_NUMBER, texts[0].clone());
                profile.insert(fields::COLLEGE, texts[1].clone());
                profile.insert(fields::YEAR, texts[2].clone());
            }
        }
        None => {
            tracing::warn!("Name not found");
            profile.insert(fields::NAME, NOT_FOUND);
        }
    }

    for key in [fields::ROLL_NUMBER, fields::COLLEGE, fields::YEAR] {
        if !profile.contains(key) {
            profile.insert(key, NOT_FOUND);
        }
    }

    let department = department_pattern()
        .captures(html)
        .map(|caps| text_content(&caps[1]))
        .unwrap_or_else(|| NOT_FOUND.to_string());
    profile.insert(fields::DEPARTMENT, department);

    let mut found = 0;
    for caps in div_pattern().captures_iter(html) {
        let Some(open) = caps.get(0) else { continue };
        if !has_class(&caps[1], "statistic") {
            continue;
        }

        let block = element_inner(&html[open.end()..]);
        let (Some(value), Some(label)) = (
            find_div_with_class(block, "value"),
            find_div_with_class(block, "label"),
        ) else {
            continue;
        };
        let value = text_content(value);
        let label = text_content(label);

        // multi-part values keep their last token
        let Some(value) = value.split_whitespace().last() else {
            continue;
        };
        if label.is_empty() {
            continue;
        }

        let key = statistic_key(&label);
        tracing::debug!(label = %key, value = %value, "Extracted statistic");
        profile.insert(key, value);
        found += 1;
    }
    tracing::info!(statistics = found, "Parsed profile page");

    profile
}

/// Field name for a statistic label
///
/// Labels are upper-cased, except tracked languages which keep the casing
/// the dashboard looks them up by.
fn statistic_key(label: &str) -> String {
    LANGUAGES
        .iter()
        .find(|language| language.eq_ignore_ascii_case(label))
        .map(|language| language.to_string())
        .unwrap_or_else(|| label.to_uppercase())
}

fn has_class(classes: &str, token: &str) -> bool {
    classes.split_whitespace().any(|class| class == token)
}

/// Inner HTML of the first `<div>` in `fragment` carrying class `token`
fn find_div_with_class<'a>(fragment: &'a str, token: &str) -> Option<&'a str> {
    div_pattern()
        .captures_iter(fragment)
        .find(|caps| has_class(&caps[1], token))
        .and_then(|caps| caps.get(0))
        .map(|open| element_inner(&fragment[open.end()..]))
}

/// Content of an element whose opening tag ends right before `rest`,
/// up to its matching close tag
fn element_inner(rest: &str) -> &str {
    let mut depth: i32 = 0;

    for tag in tag_pattern().captures_iter(rest) {
        let Some(whole) = tag.get(0) else { continue };

        let closing = !tag[1].is_empty();
        let self_closing = !tag[3].is_empty();
        let name = tag[2].to_ascii_lowercase();

        if closing {
            if depth == 0 {
                return &rest[..whole.start()];
            }
            depth -= 1;
        } else if !self_closing && !VOID_ELEMENTS.contains(&name.as_str()) {
            depth += 1;
        }
    }

    rest
}

/// Non-empty text nodes that are siblings of the element just closed,
/// stopping when the parent closes or `limit` texts were collected
fn sibling_texts(rest: &str, limit: usize) -> Vec<String> {
    let mut texts = Vec::new();
    let mut depth: i32 = 0;
    let mut cursor = 0;

    for tag in tag_pattern().captures_iter(rest) {
        let Some(whole) = tag.get(0) else { continue };

        if depth == 0 {
            let text = decode_entities(rest[cursor..whole.start()].trim());
            if !text.is_empty() {
                texts.push(text);
                if texts.len() >= limit {
                    return texts;
                }
            }
        }
        cursor = whole.end();

        let closing = !tag[1].is_empty();
        let self_closing = !tag[3].is_empty();
        let name = tag[2].to_ascii_lowercase();

        if closing {
            depth -= 1;
            if depth < 0 {
                return texts;
            }
        } else if !self_closing && !VOID_ELEMENTS.contains(&name.as_str()) {
            depth += 1;
        }
    }

    if depth == 0 {
        let text = decode_entities(rest[cursor..].trim());
        if !text.is_empty() && texts.len() < limit {
            texts.push(text);
        }
    }

    texts
}

/// Text inside an HTML fragment, tags removed and whitespace trimmed
fn text_content(fragment: &str) -> String {
    let stripped = tag_pattern().replace_all(fragment, " ");
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    decode_entities(&collapsed)
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}
