//! Define the reserved keyword vocabulary for the Quay language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings,
//! categories, and one-line descriptions.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and matches whole spellings only; the scanner
//!   resolves an identifier against this table exactly once, at the identifier boundary.
//! - This registry is intentionally **pure** (no token types, no IO, no side effects).
//!
//! ## Examples
//! ```rust
//! use quay_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("inputPort"), Some(KeywordId::InputPort));
//! assert_eq!(keywords::from_str("inputport"), None);
//! assert_eq!(keywords::as_str(KeywordId::OneWay), "oneWay");
//! ```

/// Stable identifier for every reserved keyword.
///
/// ## Notes
/// - The canonical spelling is accessible via [`as_str`].
/// - Every Quay keyword is identifier-shaped (`[a-zA-Z][a-zA-Z0-9_]*`), so keyword tokens can
///   still be accepted where the grammar wants a plain name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Top-level declarations
    Service,
    Interface,
    InputPort,
    OutputPort,
    Type,
    Constants,
    Define,
    Main,
    Init,
    Embed,
    Execution,

    // Port declaration fields
    Location,
    Protocol,
    Interfaces,
    Aggregates,
    Redirects,

    // Execution modalities
    Concurrent,
    Sequential,
    Single,

    // Operation kinds
    OneWay,
    RequestResponse,

    // Imports / modules
    Import,
    From,
    As,

    // Statements
    If,
    Else,
    While,
    Throw,
    Scope,
    NullProcess,

    // Session state
    Persistent,

    // Literals
    True,
    False,

    // Word operators
    And,
    Or,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    PortField,
    ExecutionMode,
    Operation,
    Module,
    Statement,
    State,
    Literal,
    Operator,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is the only accepted spelling; Quay keywords have no aliases.
/// - `description` is a one-liner intended for generated documentation and diagnostics tooling.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub description: &'static str,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Top-level declarations
    info(
        KeywordId::Service,
        "service",
        KeywordCategory::Declaration,
        "Declare a service: the unit of deployment and behaviour.",
    ),
    info(
        KeywordId::Interface,
        "interface",
        KeywordCategory::Declaration,
        "Declare an interface: a named set of operations.",
    ),
    info(
        KeywordId::InputPort,
        "inputPort",
        KeywordCategory::Declaration,
        "Declare a communication port the service listens on.",
    ),
    info(
        KeywordId::OutputPort,
        "outputPort",
        KeywordCategory::Declaration,
        "Declare a communication port the service invokes through.",
    ),
    info(
        KeywordId::Type,
        "type",
        KeywordCategory::Declaration,
        "Declare a message type.",
    ),
    info(
        KeywordId::Constants,
        "constants",
        KeywordCategory::Declaration,
        "Declare a block of named constants.",
    ),
    info(
        KeywordId::Define,
        "define",
        KeywordCategory::Declaration,
        "Define a reusable behaviour procedure.",
    ),
    info(
        KeywordId::Main,
        "main",
        KeywordCategory::Declaration,
        "The main behaviour block of a service.",
    ),
    info(
        KeywordId::Init,
        "init",
        KeywordCategory::Declaration,
        "The initialisation block of a service, run before main.",
    ),
    info(
        KeywordId::Embed,
        "embed",
        KeywordCategory::Declaration,
        "Embed another service inside this one.",
    ),
    info(
        KeywordId::Execution,
        "execution",
        KeywordCategory::Declaration,
        "Declare the execution modality of a service.",
    ),
    // Port declaration fields
    info(
        KeywordId::Location,
        "location",
        KeywordCategory::PortField,
        "The address a port binds to or targets.",
    ),
    info(
        KeywordId::Protocol,
        "protocol",
        KeywordCategory::PortField,
        "The transport protocol a port speaks.",
    ),
    info(
        KeywordId::Interfaces,
        "interfaces",
        KeywordCategory::PortField,
        "The interfaces a port exposes or expects.",
    ),
    info(
        KeywordId::Aggregates,
        "aggregates",
        KeywordCategory::PortField,
        "Output ports whose interfaces this input port re-exposes.",
    ),
    info(
        KeywordId::Redirects,
        "redirects",
        KeywordCategory::PortField,
        "Resource-name redirections to other output ports.",
    ),
    // Execution modalities
    info(
        KeywordId::Concurrent,
        "concurrent",
        KeywordCategory::ExecutionMode,
        "Run a new session per incoming message, concurrently.",
    ),
    info(
        KeywordId::Sequential,
        "sequential",
        KeywordCategory::ExecutionMode,
        "Run sessions one at a time, in arrival order.",
    ),
    info(
        KeywordId::Single,
        "single",
        KeywordCategory::ExecutionMode,
        "Run the behaviour exactly once, then terminate.",
    ),
    // Operation kinds
    info(
        KeywordId::OneWay,
        "oneWay",
        KeywordCategory::Operation,
        "A fire-and-forget operation.",
    ),
    info(
        KeywordId::RequestResponse,
        "requestResponse",
        KeywordCategory::Operation,
        "An operation that returns a response to the caller.",
    ),
    // Imports / modules
    info(
        KeywordId::Import,
        "import",
        KeywordCategory::Module,
        "Import symbols from another module.",
    ),
    info(
        KeywordId::From,
        "from",
        KeywordCategory::Module,
        "Name the module an import reads from.",
    ),
    info(
        KeywordId::As,
        "as",
        KeywordCategory::Module,
        "Rebind an imported symbol under a new name.",
    ),
    // Statements
    info(
        KeywordId::If,
        "if",
        KeywordCategory::Statement,
        "Conditional behaviour.",
    ),
    info(
        KeywordId::Else,
        "else",
        KeywordCategory::Statement,
        "Alternative branch of a conditional.",
    ),
    info(
        KeywordId::While,
        "while",
        KeywordCategory::Statement,
        "Loop while a condition holds.",
    ),
    info(
        KeywordId::Throw,
        "throw",
        KeywordCategory::Statement,
        "Raise a fault towards the enclosing scope.",
    ),
    info(
        KeywordId::Scope,
        "scope",
        KeywordCategory::Statement,
        "Delimit a fault-handling scope.",
    ),
    info(
        KeywordId::NullProcess,
        "nullProcess",
        KeywordCategory::Statement,
        "The behaviour that does nothing.",
    ),
    // Session state
    info(
        KeywordId::Persistent,
        "persistent",
        KeywordCategory::State,
        "Keep session state across executions.",
    ),
    // Literals
    info(
        KeywordId::True,
        "true",
        KeywordCategory::Literal,
        "Boolean truth.",
    ),
    info(
        KeywordId::False,
        "false",
        KeywordCategory::Literal,
        "Boolean falsehood.",
    ),
    // Word operators
    info(
        KeywordId::And,
        "and",
        KeywordCategory::Operator,
        "Logical conjunction.",
    ),
    info(
        KeywordId::Or,
        "or",
        KeywordCategory::Operator,
        "Logical disjunction.",
    ),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is exactly a canonical keyword spelling.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    description: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trips_every_keyword() {
        for k in KEYWORDS {
            assert_eq!(from_str(k.canonical), Some(k.id), "spelling {:?}", k.canonical);
            assert_eq!(as_str(k.id), k.canonical);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("service"), Some(KeywordId::Service));
        assert_eq!(from_str("Service"), None);
        assert_eq!(from_str("INPUTPORT"), None);
    }

    #[test]
    fn test_non_keywords_miss() {
        assert_eq!(from_str(""), None);
        assert_eq!(from_str("persistent1"), None);
        assert_eq!(from_str("services"), None);
    }

    #[test]
    fn test_no_duplicate_spellings() {
        for (i, a) in KEYWORDS.iter().enumerate() {
            for b in &KEYWORDS[i + 1..] {
                assert_ne!(a.canonical, b.canonical, "duplicate spelling {:?}", a.canonical);
                assert_ne!(a.id, b.id, "duplicate id {:?}", a.id);
            }
        }
    }
}
