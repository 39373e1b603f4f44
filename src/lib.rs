//! Generator for the `MANGROVE_CHILD*` preprocessor macros used by the
//! mangrove query builder to name nested fields, e.g.
//! `MANGROVE_CHILD(Person, address, city)`.

pub use crate::child::{ChildMacro, REFERENCE_CHILD3};
pub use crate::counting::CountingMacros;
pub use crate::depth::{Depth, MAX_BSON_DEPTH};
pub use crate::document::{generate, Document, GeneratorConfig};
pub use crate::error::{MacrogenError, Result};

pub mod child;
pub mod cli;
pub mod counting;
pub mod depth;
pub mod document;
pub mod error;
pub mod sink;
