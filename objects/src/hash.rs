//! Order-sensitive hash fold shared by every object representation.
//!
//! Graph-bound and standalone objects hash through the same functions, so an
//! object and its detached copy agree by construction.

use ontograph_graph::{BlankId, Literal};

use crate::kind::{EntityKind, ObjectKind};

const SEED_MULTIPLIER: i64 = 1_000_003;

/// `hash' = hash * 31 + item`, wrapping.
#[must_use]
pub const fn combine(hash: i64, item: i64) -> i64 {
    hash.wrapping_mul(31).wrapping_add(item)
}

/// Hash seed for a kind.
#[must_use]
pub fn seed(kind: ObjectKind) -> i64 {
    (i64::from(kind.ordinal()) + 1).wrapping_mul(SEED_MULTIPLIER)
}

/// Folds `items` into `seed`, in order.
pub fn fold(seed: i64, items: impl IntoIterator<Item = i64>) -> i64 {
    items.into_iter().fold(seed, combine)
}

/// Deterministic string hash (byte fold).
#[must_use]
pub fn str_hash(s: &str) -> i64 {
    s.bytes().fold(0, |h, b| combine(h, i64::from(b)))
}

/// Hash of a bare IRI component.
#[must_use]
pub fn iri_hash(iri: &str) -> i64 {
    str_hash(iri)
}

/// Hash of a named entity.
#[must_use]
pub fn entity_hash(kind: EntityKind, iri: &str) -> i64 {
    fold(seed(kind.object_kind()), [str_hash(iri)])
}

/// Hash of an anonymous individual.
#[must_use]
pub fn anonymous_hash(id: &BlankId) -> i64 {
    fold(seed(ObjectKind::AnonymousIndividual), [str_hash(id.as_str())])
}

/// Hash of a literal.
#[must_use]
pub fn literal_hash(literal: &Literal) -> i64 {
    fold(
        seed(ObjectKind::Literal),
        [
            str_hash(literal.lexical()),
            str_hash(literal.datatype()),
            literal.lang().map_or(0, str_hash),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_is_order_sensitive() {
        let s = seed(ObjectKind::ObjectUnionOf);
        assert_ne!(fold(s, [1, 2]), fold(s, [2, 1]));
        assert_eq!(fold(s, [1, 2]), combine(combine(s, 1), 2));
    }

    #[test]
    fn seeds_differ_per_kind() {
        assert_ne!(seed(ObjectKind::Class), seed(ObjectKind::Datatype));
        assert_ne!(
            entity_hash(EntityKind::Class, "http://example.org/A"),
            entity_hash(EntityKind::NamedIndividual, "http://example.org/A")
        );
    }

    #[test]
    fn literal_hash_covers_language() {
        assert_ne!(
            literal_hash(&Literal::lang_string("x", "en")),
            literal_hash(&Literal::lang_string("x", "fr"))
        );
    }
}
