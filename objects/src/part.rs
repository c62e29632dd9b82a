//! Representation-independent component view.
//!
//! Every object, graph-bound or standalone, exposes its components as a
//! list of [`Part`]s. Hashing, cross-representation equality and the
//! canonical order are all defined over parts, so two representations of
//! the same logical object agree without knowing about each other.

use std::cmp::Ordering;
use std::fmt;

use ontograph_graph::{BlankId, Literal};

use crate::equality::objects_equal;
use crate::error::Result;
use crate::hash;
use crate::kind::{EntityKind, ObjectKind};
use crate::object::OntObject;

/// One component of an object.
///
/// Named entities, anonymous individuals and literals are always surfaced
/// as their primitive variant; [`Part::Object`] only ever holds a
/// non-primitive object.
#[derive(Clone, Copy, Debug)]
pub enum Part<'a> {
    /// A bare IRI (annotation subjects and values, built-in IRIs).
    Iri(&'a str),
    /// A named entity.
    Entity(EntityKind, &'a str),
    /// An anonymous individual.
    Anonymous(&'a BlankId),
    /// A literal.
    Literal(&'a Literal),
    /// A nested non-primitive object.
    Object(&'a dyn OwlObject),
}

impl<'a> Part<'a> {
    /// Wraps an object, collapsing primitives to their primitive part.
    #[must_use]
    pub fn object(object: &'a dyn OwlObject) -> Self {
        object.primitive_part().unwrap_or(Part::Object(object))
    }

    fn rank(&self) -> u8 {
        match self {
            Part::Iri(_) => 0,
            Part::Entity(..) => 1,
            Part::Anonymous(_) => 2,
            Part::Literal(_) => 3,
            Part::Object(_) => 4,
        }
    }

    /// Hash of this part.
    ///
    /// # Errors
    ///
    /// Propagates content materialization failures of a nested object.
    pub fn hash_code(&self) -> Result<i64> {
        Ok(match self {
            Part::Iri(iri) => hash::iri_hash(iri),
            Part::Entity(kind, iri) => hash::entity_hash(*kind, iri),
            Part::Anonymous(id) => hash::anonymous_hash(id),
            Part::Literal(literal) => hash::literal_hash(literal),
            Part::Object(object) => object.hash_code()?,
        })
    }

    /// Structural equality of two parts.
    ///
    /// # Errors
    ///
    /// Propagates content materialization failures of nested objects.
    pub fn structural_eq(&self, other: &Part<'_>) -> Result<bool> {
        Ok(match (self, other) {
            (Part::Iri(a), Part::Iri(b)) => a == b,
            (Part::Entity(ka, a), Part::Entity(kb, b)) => ka == kb && a == b,
            (Part::Anonymous(a), Part::Anonymous(b)) => a == b,
            (Part::Literal(a), Part::Literal(b)) => a == b,
            (Part::Object(a), Part::Object(b)) => objects_equal(*a, *b)?,
            _ => false,
        })
    }

    /// Canonical order of two parts: variant, then payload.
    ///
    /// # Errors
    ///
    /// Propagates content materialization failures of nested objects.
    pub fn canonical_cmp(&self, other: &Part<'_>) -> Result<Ordering> {
        Ok(match (self, other) {
            (Part::Iri(a), Part::Iri(b)) => a.cmp(b),
            (Part::Entity(ka, a), Part::Entity(kb, b)) => ka.cmp(kb).then_with(|| a.cmp(b)),
            (Part::Anonymous(a), Part::Anonymous(b)) => a.cmp(b),
            (Part::Literal(a), Part::Literal(b)) => a.cmp(b),
            (Part::Object(a), Part::Object(b)) => canonical_cmp(*a, *b)?,
            _ => self.rank().cmp(&other.rank()),
        })
    }
}

impl fmt::Display for Part<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Iri(iri) => write!(f, "<{iri}>"),
            Part::Entity(kind, iri) => write!(f, "{kind}(<{iri}>)"),
            Part::Anonymous(id) => write!(f, "{id}"),
            Part::Literal(literal) => write!(f, "{literal}"),
            Part::Object(object) => write!(f, "{}(..)", object.kind()),
        }
    }
}

/// The object model contract shared by graph-bound and standalone objects.
pub trait OwlObject: fmt::Debug + Send + Sync {
    /// Structural type discriminator.
    fn kind(&self) -> ObjectKind;

    /// Hash code. Stable for the lifetime of the object once computed.
    ///
    /// # Errors
    ///
    /// Graph-bound objects fail if their content cannot be materialized.
    fn hash_code(&self) -> Result<i64>;

    /// Public component stream, in canonical content order.
    ///
    /// # Errors
    ///
    /// Graph-bound objects fail if their content cannot be materialized.
    fn parts(&self) -> Result<Vec<Part<'_>>>;

    /// The primitive part of a primitive object (entity, anonymous
    /// individual, literal); `None` for every other kind.
    fn primitive_part(&self) -> Option<Part<'_>>;

    /// Downcast to a graph-bound wrapper.
    fn as_ont_object(&self) -> Option<&OntObject> {
        None
    }
}

/// Canonical total order over objects: kind, then parts lexicographically.
///
/// # Errors
///
/// Propagates content materialization failures.
pub fn canonical_cmp(a: &dyn OwlObject, b: &dyn OwlObject) -> Result<Ordering> {
    let by_kind = a.kind().cmp(&b.kind());
    if by_kind != Ordering::Equal {
        return Ok(by_kind);
    }
    let (pa, pb) = (a.parts()?, b.parts()?);
    for (x, y) in pa.iter().zip(pb.iter()) {
        let ord = x.canonical_cmp(y)?;
        if ord != Ordering::Equal {
            return Ok(ord);
        }
    }
    Ok(pa.len().cmp(&pb.len()))
}

/// Sorts with a fallible comparator; the first error wins and the order of
/// `items` is then unspecified.
pub(crate) fn try_sort_by<T>(
    items: &mut [T],
    mut cmp: impl FnMut(&T, &T) -> Result<Ordering>,
) -> Result<()> {
    let mut error = None;
    items.sort_by(|a, b| match cmp(a, b) {
        Ok(ord) => ord,
        Err(e) => {
            error.get_or_insert(e);
            Ordering::Equal
        }
    });
    error.map_or(Ok(()), Err)
}

/// Removes consecutive equal items from a sorted list, keeping the first
/// of each run.
pub(crate) fn try_dedup_by<T>(
    items: Vec<T>,
    mut same: impl FnMut(&T, &T) -> Result<bool>,
) -> Result<Vec<T>> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        match out.last() {
            Some(last) if same(last, &item)? => {}
            _ => out.push(item),
        }
    }
    Ok(out)
}
