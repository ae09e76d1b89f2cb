//! Define the diagnostic scopes and their vocabularies.
//!
//! A *scope* is the grammar construct surrounding a parse failure (a port declaration, an import
//! statement, ...). Scope-aware diagnostics restrict their "did you mean" vocabulary to the terms
//! that are actually legal inside the enclosing construct, instead of the whole language.
//!
//! ## Notes
//! - Vocabularies are spellings, not [`super::keywords::KeywordId`]s, because the consumer
//!   (fuzzy matching and help-text rendering) works on text. A guardrail test keeps every entry
//!   in sync with the keyword registry.
//!
//! ## Examples
//! ```rust
//! use quay_core::lang::scopes::{self, DeclScope};
//!
//! assert!(scopes::keywords_for_scope(DeclScope::Execution).contains(&"concurrent"));
//! ```

/// The grammar construct enclosing a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclScope {
    /// Inside an `inputPort`/`outputPort` declaration block.
    InputPort,
    /// Inside an `execution` modality declaration.
    Execution,
    /// Inside a `service` declaration body.
    Service,
    /// Inside an `import`/`from` statement.
    Import,
    /// Inside an `interface` declaration body.
    Interface,
    /// At the top level of a module, outside any declaration.
    Outer,
}

const INPUT_PORT_TERMS: &[&str] = &["location", "protocol", "interfaces", "aggregates", "redirects"];
const EXECUTION_TERMS: &[&str] = &["concurrent", "sequential", "single"];
const SERVICE_TERMS: &[&str] = &["execution", "embed", "inputPort", "outputPort", "main", "init", "define"];
const IMPORT_TERMS: &[&str] = &["import", "from", "as"];
const INTERFACE_TERMS: &[&str] = &["oneWay", "requestResponse"];
const OUTER_TERMS: &[&str] = &["service", "interface", "type", "constants", "import", "from", "define"];

/// The terms that are legal at the start of an item inside `scope`.
pub fn keywords_for_scope(scope: DeclScope) -> &'static [&'static str] {
    match scope {
        DeclScope::InputPort => INPUT_PORT_TERMS,
        DeclScope::Execution => EXECUTION_TERMS,
        DeclScope::Service => SERVICE_TERMS,
        DeclScope::Import => IMPORT_TERMS,
        DeclScope::Interface => INTERFACE_TERMS,
        DeclScope::Outer => OUTER_TERMS,
    }
}

/// All scopes, for exhaustive iteration in tooling and tests.
pub const ALL_SCOPES: &[DeclScope] = &[
    DeclScope::InputPort,
    DeclScope::Execution,
    DeclScope::Service,
    DeclScope::Import,
    DeclScope::Interface,
    DeclScope::Outer,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scope_has_a_vocabulary() {
        for &scope in ALL_SCOPES {
            assert!(!keywords_for_scope(scope).is_empty(), "{scope:?} has no vocabulary");
        }
    }
}
