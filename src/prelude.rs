//! Convenience re-exports for hosts embedding the generator.

pub use crate::catalog::{LookupError, PropertyDecl, TypeCatalog, TypeDecl};
pub use crate::diagnostics::{Diagnostic, DiagnosticCode, Severity, Subject};
pub use crate::directives::MappingDirective;
pub use crate::emit::GeneratedArtifact;
pub use crate::errors::{GeneratorError, GeneratorResult};
pub use crate::generator::{GenerationOutput, Generator, GeneratorOptions};
pub use crate::matcher::MatchVerdict;
pub use crate::resolve::MarkerIdentity;
pub use crate::unit::{CompilationUnit, SourceModule};
pub use mapper_gen_macros::mapping;
