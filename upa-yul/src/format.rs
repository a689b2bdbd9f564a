//! Re-wrapping extracted sections into standalone Yul objects
//!
//! Each section is put back into an `object` / `code` wrapper so the output
//! can be fed to a Yul compiler on its own. When `trailing_brace` is set, one
//! more `}` is appended after the wrapper. Downstream tooling has always
//! received that extra brace, so it stays the default.

use crate::locator::{Anchors, SplitSections};

/// Wrap `body` as the code block of `object "<object_name>"`.
pub fn wrap_section(object_name: &str, keyword: &str, body: &str, trailing_brace: bool) -> String {
    let mut out = format!(
        "object \"{}\" {{\n    {} {{{}\n    }}\n}}",
        object_name, keyword, body
    );
    if trailing_brace {
        out.push_str("\n}");
    }
    out
}

/// File contents for the creation and runtime outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutputs {
    pub creation: String,
    pub runtime: String,
}

pub fn render_outputs(
    sections: &SplitSections<'_>,
    anchors: &Anchors,
    trailing_brace: bool,
) -> RenderedOutputs {
    RenderedOutputs {
        creation: wrap_section(
            &anchors.creation_object,
            &anchors.code_keyword,
            sections.creation.body,
            trailing_brace,
        ),
        runtime: wrap_section(
            &anchors.runtime_object,
            &anchors.code_keyword,
            sections.runtime.body,
            trailing_brace,
        ),
    }
}
