//! Network Transport Module
//!
//! Thin TCP boundary around the query evaluator: accept an opaque query
//! line, hand back an opaque text block. No framing beyond lines and a
//! blank-line terminator, no session state.

pub mod server;
