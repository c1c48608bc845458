//! Trie Index Module
//!
//! The inverted index itself: a prefix tree mapping each normalized token
//! to the set of documents containing it. Exclusively owned and mutated by
//! the build coordinator during construction, read-only ever after.

pub mod trie;
