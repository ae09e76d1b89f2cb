//! Provide the canonical language vocabulary for the Quay front end.
//!
//! This crate is intentionally small and dependency-free. It contains the registry of reserved
//! keywords and the diagnostic-scope vocabularies that the scanner and the parsing support layer
//! share, so that spellings are never duplicated as string literals across the front end.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no syntax-tree types.
//! - The scanner and parser remain the source of truth for syntactic legality; this crate only
//!   provides spellings and metadata (diagnostics, docs, tooling).

pub mod lang;
