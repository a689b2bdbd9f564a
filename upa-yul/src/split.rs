//! File level entry point
//!
//! The input is read completely, both sections are located and rendered, and
//! only then are the two outputs written. A structural mismatch therefore
//! never leaves an output file behind.

use crate::error::SplitError;
use crate::format::{render_outputs, RenderedOutputs};
use crate::locator::{locate_sections, Anchors, Section};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Knobs for a split run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    pub anchors: Anchors,
    /// Append the extra closing brace after each wrapped object
    pub trailing_brace: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            anchors: Anchors::default(),
            trailing_brace: true,
        }
    }
}

/// Byte range of a section body in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionSpan {
    pub start: usize,
    pub end: usize,
}

impl From<&Section<'_>> for SectionSpan {
    fn from(section: &Section<'_>) -> Self {
        Self {
            start: section.start,
            end: section.end,
        }
    }
}

/// Summary of a successful split
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    pub input: PathBuf,
    pub creation_output: PathBuf,
    pub runtime_output: PathBuf,
    pub creation: SectionSpan,
    pub runtime: SectionSpan,
}

/// Rendered outputs plus the input spans their bodies were taken from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutput {
    pub outputs: RenderedOutputs,
    pub creation: SectionSpan,
    pub runtime: SectionSpan,
}

/// Split Yul source text into the rendered creation and runtime objects.
pub fn split_yul_source(source: &str, options: &SplitOptions) -> Result<SplitOutput, SplitError> {
    let sections = locate_sections(source, &options.anchors)?;
    Ok(SplitOutput {
        outputs: render_outputs(&sections, &options.anchors, options.trailing_brace),
        creation: SectionSpan::from(&sections.creation),
        runtime: SectionSpan::from(&sections.runtime),
    })
}

/// Split the Yul file at `input` into `creation_output` and `runtime_output`.
pub fn split_yul_file(
    input: impl AsRef<Path>,
    creation_output: impl AsRef<Path>,
    runtime_output: impl AsRef<Path>,
    options: &SplitOptions,
) -> Result<SplitReport, SplitError> {
    let input = input.as_ref();
    let creation_output = creation_output.as_ref();
    let runtime_output = runtime_output.as_ref();

    info!(path = %input.display(), "reading yul code");
    let source = fs::read_to_string(input).map_err(|source| SplitError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let split = split_yul_source(&source, options).map_err(|err| {
        if let SplitError::StructuralMismatch(mismatch) = &err {
            warn!(path = %input.display(), %mismatch, "unexpected yul structure");
        }
        err
    })?;

    write_output(creation_output, &split.outputs.creation)?;
    write_output(runtime_output, &split.outputs.runtime)?;

    Ok(SplitReport {
        input: input.to_path_buf(),
        creation_output: creation_output.to_path_buf(),
        runtime_output: runtime_output.to_path_buf(),
        creation: split.creation,
        runtime: split.runtime,
    })
}

fn write_output(path: &Path, contents: &str) -> Result<(), SplitError> {
    info!(path = %path.display(), bytes = contents.len(), "writing yul code");
    fs::write(path, contents).map_err(|source| SplitError::Write {
        path: path.to_path_buf(),
        source,
    })
}
