//! # mapper_gen
//!
//! An annotation-driven structural-mapping code generator. Structs carrying a
//! `#[mapping(SourceType)]` directive are checked field-for-field against the
//! named source type; fully compatible pairs get generated mapping functions,
//! incompatible ones get structured diagnostics instead of code.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mapper_gen::prelude::*;
//!
//! let unit = CompilationUnit::parse_sources([
//!     ("entities", "pub struct Person { pub id: u64, pub name: String }"),
//!     ("models", "#[mapping(Person)] \
//!                 pub struct PersonViewModel { pub id: u64, pub name: String }"),
//! ])?;
//!
//! let output = Generator::new().run(&unit);
//! assert!(output.diagnostics.is_empty());
//! let mapper = output.artifact("generated_mapper").unwrap();
//! // mapper.contents holds `map_to_person_view_model` and the
//! // `ToPersonViewModel` extension trait.
//! ```
//!
//! One pass is synchronous and self-contained: catalog the unit's types,
//! resolve directives, match each directive independently, emit code for the
//! accepted ones and diagnostics for the rest. A failing directive never
//! affects any other directive and never aborts the pass.

pub mod catalog;
pub mod diagnostics;
pub mod directives;
pub mod emit;
pub mod errors;
pub mod generator;
pub mod matcher;
pub mod prelude;
pub mod resolve;
pub mod unit;

pub use generator::{GenerationOutput, Generator, GeneratorOptions};
/// The inert marker attribute, re-exported so annotated host code compiles.
pub use mapper_gen_macros::mapping;
