//! Turtle fixture graphs for the conformance validators.
//!
//! Each constant holds a Turtle 1.1 document. Fixtures that are applied as
//! updates to an already loaded model carry their own prefix declarations.

mod annotated_label;
mod copies;
mod ontology;

pub use annotated_label::{LABEL_COMMENT, PLAIN_LABEL, SECOND_LABEL_COMMENT};
pub use copies::{COMMENT_COPIES, COPY_SUB_ANNOTATION};
pub use ontology::ONTOLOGY;
