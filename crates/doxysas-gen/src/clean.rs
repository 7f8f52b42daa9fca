use std::sync::LazyLock;

use regex::Regex;

static RE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```[a-zA-Z0-9]*\n?").unwrap());

static RE_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*\*.*?\*/").unwrap());

pub struct CleanedDoc {
    pub full_doc: String,
    pub header: String,
}

/// Strip markdown code fences (with or without a language tag) and isolate
/// the first `/** ... */` block as the header. Malformed model output passes
/// through as-is; the header is empty when no block exists.
pub fn clean_response(raw: &str) -> CleanedDoc {
    let full_doc = RE_FENCE.replace_all(raw, "").trim().to_string();
    let header = RE_HEADER
        .find(&full_doc)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    CleanedDoc { full_doc, header }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "/**\n@file foo.sas\n@brief Does things.\n*/";

    #[test]
    fn strips_fence_with_language_tag() {
        let fenced = format!("```sas\n{}\n```", HEADER);
        let doc = clean_response(&fenced);
        assert_eq!(doc.full_doc, HEADER);
        assert_eq!(doc.header, HEADER);
    }

    #[test]
    fn strips_bare_fence() {
        let fenced = format!("```\n{}\n```\n", HEADER);
        assert_eq!(clean_response(&fenced).full_doc, HEADER);
    }

    #[test]
    fn fenced_and_unfenced_clean_identically() {
        let fenced = format!("```cpp\n{}\n```", HEADER);
        assert_eq!(clean_response(&fenced).full_doc, clean_response(HEADER).full_doc);
    }

    #[test]
    fn missing_header_is_empty_but_doc_survives() {
        let doc = clean_response("  The model rambled instead of answering.  \n");
        assert_eq!(doc.header, "");
        assert_eq!(doc.full_doc, "The model rambled instead of answering.");
    }

    #[test]
    fn first_header_is_isolated_non_greedily() {
        let raw = "preamble /** first */ middle /** second */ tail";
        let doc = clean_response(raw);
        assert_eq!(doc.header, "/** first */");
        assert_eq!(doc.full_doc, raw);
    }
}
