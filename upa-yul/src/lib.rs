//! # upa-yul
//!
//! Splits the Yul verifier produced by the outer circuit's EVM verifier
//! generator into its two code sections: the contract creation code of the
//! `plonk_verifier` object and the code of its nested `Runtime` object.
//!
//! The splitter does not parse Yul. It locates fixed textual anchors and
//! matches braces with a running depth counter, so braces inside Yul string
//! literals or comments are counted like any other brace. The generated
//! verifier never contains such braces.
//!
//! Layout
//!
//!   braces   Brace matching over raw text
//!   locator  Anchor search and section extraction
//!   format   Re-wrapping extracted sections into standalone objects
//!   split    File level entry point (read, locate, render, write)

pub mod braces;
pub mod error;
pub mod format;
pub mod locator;
pub mod split;

pub use error::{Mismatch, SplitError};
pub use format::{render_outputs, wrap_section, RenderedOutputs};
pub use locator::{locate_section, locate_sections, Anchors, Section, SplitSections};
pub use split::{
    split_yul_file, split_yul_source, SectionSpan, SplitOptions, SplitOutput, SplitReport,
};
