//! The in-memory model of algebraic type definitions.
//!
//! The model is produced by a front end (see [`crate::frontend`]) and consumed
//! read-only by validation and code generation. Nothing in the engine mutates it.

mod collection;
mod definition;
mod deriving;
mod types;

pub use collection::DefinitionCollection;
pub use definition::{Argument, Condition, Constructor, ConstructorKind, Definition, SCALAR_FIELD};
pub use deriving::Deriving;
pub use types::{qualify, split_qualified, Primitive, TypeRef, NAMESPACE_SEPARATOR};
