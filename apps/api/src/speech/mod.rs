// Voice practice analysis.
// Implements: transcript metrics, filler lexicon, coaching feedback, the
// pluggable coach seam, and session persistence. The analyzer itself is
// pure; handlers own all I/O.

pub mod analyzer;
pub mod coach;
pub mod feedback;
pub mod handlers;
pub mod lexicon;
pub mod sessions;
