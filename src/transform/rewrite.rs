/// `job` values arrive dotted and hyphenated ("admin.", "blue-collar").
/// Strip the dots and turn hyphens into underscores.
pub fn scrub_job(raw: &str) -> String {
    raw.replace('.', "").replace('-', "_")
}

/// `education` keeps its dots as underscores ("basic.4y" → "basic_4y").
/// The literal `unknown` level, checked after the substitution, becomes
/// absent.
pub fn scrub_education(raw: &str) -> Option<String> {
    let rewritten = raw.replace('.', "_");
    if rewritten == "unknown" {
        None
    } else {
        Some(rewritten)
    }
}

/// Binarize against a single positive value: exact match → "1", anything
/// else — absent cells included — → "0".
pub fn binarize(value: Option<&str>, positive: &str) -> &'static str {
    if value == Some(positive) {
        "1"
    } else {
        "0"
    }
}
