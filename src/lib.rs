#![forbid(unsafe_code)]

//! Batch-assign unique `name` attributes to XML elements.
//!
//! The library parses XML into an arena-backed tree, runs a per-document
//! naming pass over elements whose tag is in a configured allow-list, and
//! serializes the result. The [`run`] driver processes a whole list of
//! files into an output directory.

mod document;
mod encoding;
mod entity;
mod error;
mod idmap;
mod name;
mod namer;
mod parse;
mod run;
mod serialize;
mod xmlvalue;

pub use document::{Declaration, Document, Node};
pub use error::Error;
pub use name::NameId;
pub use namer::Namer;
pub use run::{run, Config};
pub use xmlvalue::{Comment, Element, ProcessingInstruction, Text, Value, ValueType};
