//! Anchor search and section extraction
//!
//! A section is the body of the first `code {` block that follows an
//! `object "<name>" {` declaration. The generated verifier has the shape
//!
//! ```text
//! object "plonk_verifier" {
//!     code { ...creation code... }
//!     object "Runtime" {
//!         code { ...runtime code... }
//!     }
//! }
//! ```
//!
//! The runtime anchor is only searched for after the creation section has
//! been closed, so nothing inside the creation code can be mistaken for it.

use crate::braces::{find_matching_brace, is_balanced};
use crate::error::Mismatch;
use tracing::debug;

/// Object names and code keyword that delimit the two sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchors {
    pub creation_object: String,
    pub runtime_object: String,
    pub code_keyword: String,
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            creation_object: "plonk_verifier".to_string(),
            runtime_object: "Runtime".to_string(),
            code_keyword: "code".to_string(),
        }
    }
}

/// `object "<name>" {`
pub fn object_marker(name: &str) -> String {
    format!("object \"{}\" {{", name)
}

/// `<keyword> {`
pub fn keyword_marker(keyword: &str) -> String {
    format!("{} {{", keyword)
}

/// A brace-delimited block extracted from the input
///
/// `start` is the offset just past the opening brace and `end` the offset of
/// the matching closing brace, so `start..end` is the raw block content.
/// `body` is that content with surrounding whitespace trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub start: usize,
    pub end: usize,
    pub body: &'a str,
}

/// Creation and runtime sections of one verifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSections<'a> {
    pub creation: Section<'a>,
    pub runtime: Section<'a>,
}

/// Locate the code block of `object "<object_name>"`, searching from `from`.
pub fn locate_section<'a>(
    text: &'a str,
    object_name: &str,
    keyword: &str,
    from: usize,
) -> Result<Section<'a>, Mismatch> {
    let object = object_marker(object_name);
    let anchor = find_from(text, &object, from).ok_or_else(|| Mismatch::MissingAnchor {
        anchor: object.clone(),
        from,
    })?;

    let code = keyword_marker(keyword);
    let code_at = find_from(text, &code, anchor).ok_or_else(|| Mismatch::MissingAnchor {
        anchor: code.clone(),
        from: anchor,
    })?;

    // The marker ends with the opening brace.
    let open = code_at + code.len() - 1;
    let close = find_matching_brace(text, open).ok_or_else(|| Mismatch::UnclosedBrace {
        anchor: code.clone(),
        open,
    })?;

    debug!(object = %object_name, anchor, open, close, "located section");

    let start = open + 1;
    let body = text[start..close].trim();
    // A matched block cannot close more than it opens.
    debug_assert!(is_balanced(body));
    Ok(Section {
        start,
        end: close,
        body,
    })
}

/// Locate the creation section and then the runtime section after it.
pub fn locate_sections<'a>(
    text: &'a str,
    anchors: &Anchors,
) -> Result<SplitSections<'a>, Mismatch> {
    let creation = locate_section(text, &anchors.creation_object, &anchors.code_keyword, 0)?;
    let runtime = locate_section(
        text,
        &anchors.runtime_object,
        &anchors.code_keyword,
        creation.end,
    )?;
    Ok(SplitSections { creation, runtime })
}

fn find_from(text: &str, needle: &str, from: usize) -> Option<usize> {
    text.get(from..)?.find(needle).map(|offset| offset + from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::braces::strategies::balanced_strategy;
    use proptest::prelude::*;
    use rstest::rstest;

    const FLAT: &str =
        r#"object "plonk_verifier" { code { MSTORE(0,1) } } object "Runtime" { code { RETURN(0,0) } }"#;

    const GENERATED: &str = r#"object "plonk_verifier" {
    code {
        function allocate(size) -> ptr {
            ptr := mload(0x40)
            if eq(ptr, 0) { ptr := 0x60 }
            mstore(0x40, add(ptr, size))
        }
        let size := datasize("Runtime")
        codecopy(0, dataoffset("Runtime"), size)
        return(0, size)
    }
    object "Runtime" {
        code {
            let success:bool := true
            let f_p := 0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47
            {
                let x := calldataload(0x00)
                success := and(success, lt(x, f_p))
            }
            if not(success) { revert(0, 0) }
            return(0, 0)
        }
    }
}
"#;

    #[test]
    fn extracts_flat_sections() {
        let sections = locate_sections(FLAT, &Anchors::default()).unwrap();
        assert_eq!(sections.creation.body, "MSTORE(0,1)");
        assert_eq!(sections.runtime.body, "RETURN(0,0)");
    }

    #[test]
    fn section_offsets_bound_the_raw_block() {
        let sections = locate_sections(FLAT, &Anchors::default()).unwrap();
        let creation = sections.creation;
        assert_eq!(&FLAT[creation.start - 1..creation.start], "{");
        assert_eq!(&FLAT[creation.end..=creation.end], "}");
        assert_eq!(&FLAT[creation.start..creation.end], " MSTORE(0,1) ");
        assert!(sections.runtime.start > creation.end);
    }

    #[test]
    fn nested_braces_match_the_outer_code_block() {
        let text = r#"object "plonk_verifier" { code { if eq(x,1) { sstore(0,1) } } } object "Runtime" { code { stop() } }"#;
        let sections = locate_sections(text, &Anchors::default()).unwrap();
        assert_eq!(sections.creation.body, "if eq(x,1) { sstore(0,1) }");
        assert_eq!(sections.runtime.body, "stop()");
    }

    #[test]
    fn extracts_generated_verifier_layout() {
        let sections = locate_sections(GENERATED, &Anchors::default()).unwrap();
        assert!(sections.creation.body.starts_with("function allocate(size) -> ptr {"));
        assert!(sections.creation.body.ends_with("return(0, size)"));
        assert!(sections.runtime.body.starts_with("let success:bool := true"));
        assert!(sections.runtime.body.ends_with("return(0, 0)"));
        assert!(is_balanced(sections.creation.body));
        assert!(is_balanced(sections.runtime.body));
    }

    #[test]
    fn runtime_mentions_inside_creation_code_are_skipped() {
        // `object "Runtime" {` appears in a comment inside the creation block.
        let text = r#"object "plonk_verifier" { code { /* object "Runtime" { code { bogus } } */ a() } object "Runtime" { code { b() } } }"#;
        let sections = locate_sections(text, &Anchors::default()).unwrap();
        assert_eq!(
            sections.creation.body,
            r#"/* object "Runtime" { code { bogus } } */ a()"#
        );
        assert_eq!(sections.runtime.body, "b()");
    }

    #[test]
    fn custom_anchors() {
        let anchors = Anchors {
            creation_object: "Verifier".to_string(),
            runtime_object: "Verifier_deployed".to_string(),
            code_keyword: "code".to_string(),
        };
        let text = r#"object "Verifier" { code { x() } object "Verifier_deployed" { code { y() } } }"#;
        let sections = locate_sections(text, &anchors).unwrap();
        assert_eq!(sections.creation.body, "x()");
        assert_eq!(sections.runtime.body, "y()");
    }

    #[test]
    fn empty_code_blocks_give_empty_bodies() {
        let text = r#"object "plonk_verifier" { code { } object "Runtime" { code {} } }"#;
        let sections = locate_sections(text, &Anchors::default()).unwrap();
        assert_eq!(sections.creation.body, "");
        assert_eq!(sections.runtime.body, "");
    }

    #[rstest]
    #[case::no_creation_object(
        r#"object "Other" { code { a() } }"#,
        Mismatch::MissingAnchor { anchor: r#"object "plonk_verifier" {"#.to_string(), from: 0 }
    )]
    #[case::no_creation_code(
        r#"object "plonk_verifier" { data "x" hex"00" }"#,
        Mismatch::MissingAnchor { anchor: "code {".to_string(), from: 0 }
    )]
    #[case::creation_truncated(
        r#"object "plonk_verifier" { code { MSTORE(0,1)"#,
        Mismatch::UnclosedBrace { anchor: "code {".to_string(), open: 31 }
    )]
    #[case::no_runtime_object(
        r#"object "plonk_verifier" { code { MSTORE(0,1) } }"#,
        Mismatch::MissingAnchor { anchor: r#"object "Runtime" {"#.to_string(), from: 45 }
    )]
    #[case::runtime_only_before_creation_end(
        r#"object "plonk_verifier" { code { object "Runtime" { code { a() } } } }"#,
        Mismatch::MissingAnchor { anchor: r#"object "Runtime" {"#.to_string(), from: 67 }
    )]
    #[case::no_runtime_code(
        r#"object "plonk_verifier" { code { a() } object "Runtime" { } }"#,
        Mismatch::MissingAnchor { anchor: "code {".to_string(), from: 39 }
    )]
    #[case::runtime_truncated(
        r#"object "plonk_verifier" { code { a() } object "Runtime" { code { b()"#,
        Mismatch::UnclosedBrace { anchor: "code {".to_string(), open: 63 }
    )]
    fn reports_missing_structure(#[case] text: &str, #[case] expected: Mismatch) {
        assert_eq!(locate_sections(text, &Anchors::default()), Err(expected));
    }

    #[test]
    fn search_offset_past_the_end_is_a_missing_anchor() {
        let result = locate_section("object", "plonk_verifier", "code", 100);
        assert!(matches!(result, Err(Mismatch::MissingAnchor { from: 100, .. })));
    }

    proptest! {
        #[test]
        fn generated_bodies_come_back_balanced(
            creation in balanced_strategy(),
            runtime in balanced_strategy(),
        ) {
            let text = format!(
                "object \"plonk_verifier\" {{\n    code {{{}}}\n    object \"Runtime\" {{\n        code {{{}}}\n    }}\n}}\n",
                creation, runtime
            );

            let sections = locate_sections(&text, &Anchors::default()).unwrap();

            prop_assert_eq!(&text[sections.creation.start..sections.creation.end], creation.as_str());
            prop_assert_eq!(&text[sections.runtime.start..sections.runtime.end], runtime.as_str());
            prop_assert_eq!(sections.creation.body, creation.trim());
            prop_assert_eq!(sections.runtime.body, runtime.trim());
            prop_assert!(is_balanced(sections.creation.body));
            prop_assert!(is_balanced(sections.runtime.body));
        }
    }
}
