//! Vietnamese-first text normalization and tokenization.
//!
//! The building blocks live in [`analyzer`]; [`charset`] holds the code
//! point classification they share. [`hash`] and [`random`] are small
//! standalone utilities, and [`html`] is the seam to an external DOM engine.

pub mod analyzer;
pub mod charset;
pub mod hash;
pub mod html;
pub mod random;

pub use analyzer::{
    Analyzer, DiacriticFolder, NGramBuilder, NGramCounts, NGramExtractor, SpaceCollapser,
    TextNormalizer, Tokenizer,
};
pub use charset::CharClassTable;
pub use hash::fingerprint;
pub use html::{DocumentTree, NodeKind};
pub use random::{SharedWordGenerator, WordGenerator};
pub use vntext_types;
