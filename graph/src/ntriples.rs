//! N-Triples serializer.
//!
//! One triple per line, absolute IRIs, lines sorted so that two graphs with
//! the same triples serialize to the same bytes. Used to diff the triples
//! emitted by an object against its source graph.

use crate::triple::Triple;

/// Serializes triples to a sorted, de-duplicated N-Triples document.
#[must_use]
pub fn to_ntriples<'a, I>(triples: I) -> String
where
    I: IntoIterator<Item = &'a Triple>,
{
    let mut lines: Vec<String> = triples.into_iter().map(ToString::to_string).collect();
    lines.sort();
    lines.dedup();
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
