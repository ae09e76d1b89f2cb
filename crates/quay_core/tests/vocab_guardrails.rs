//! Guardrails keeping the scope vocabularies in sync with the keyword registry.
//!
//! The scope vocabularies are spelled out as string tables for the diagnostics layer; if a
//! keyword spelling ever changes in the registry, these tests catch the drift.

use quay_core::lang::keywords;
use quay_core::lang::scopes::{self, ALL_SCOPES};

#[test]
fn scope_vocabulary_entries_are_canonical_keyword_spellings() {
    for &scope in ALL_SCOPES {
        for term in scopes::keywords_for_scope(scope) {
            let id = keywords::from_str(term);
            assert!(
                id.is_some(),
                "scope {scope:?} lists {term:?}, which is not a registered keyword"
            );
            let id = id.expect("checked above");
            assert_eq!(
                keywords::as_str(id),
                *term,
                "scope {scope:?} lists a non-canonical spelling for {id:?}"
            );
        }
    }
}

#[test]
fn scope_vocabularies_have_no_duplicates() {
    for &scope in ALL_SCOPES {
        let terms = scopes::keywords_for_scope(scope);
        for (i, a) in terms.iter().enumerate() {
            assert!(
                !terms[i + 1..].contains(a),
                "scope {scope:?} lists {a:?} twice"
            );
        }
    }
}
