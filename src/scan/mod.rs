//! Scanners — best-effort pattern extraction over unlexed source text.
//!
//! Each scanner takes one file's full text plus its source path and returns
//! whatever matched. Absence of matches is an empty collection, never an
//! error; a declaration that fails to balance or terminate is skipped.

pub mod brace;
pub mod clojure;
pub mod stylesheet;
pub mod typescript;
