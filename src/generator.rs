//! The generation pass facade.
//!
//! One `run` processes one complete compilation unit and returns one complete
//! output. No state survives between runs; every pass starts from an empty
//! catalog and an empty diagnostic collector.

use log::debug;
use typed_builder::TypedBuilder;

use crate::catalog::TypeCatalog;
use crate::diagnostics::{Diagnostic, DiagnosticCollector};
use crate::directives::resolve_directives;
use crate::emit::{CodeEmitter, GeneratedArtifact};
use crate::matcher::match_directive;
use crate::resolve::{MarkerIdentity, Resolver};
use crate::unit::CompilationUnit;

#[derive(Debug, Clone, TypedBuilder)]
pub struct GeneratorOptions {
    /// Which attribute counts as the mapping directive.
    #[builder(default)]
    pub marker: MarkerIdentity,

    /// Logical name of the marker-declaration artifact.
    #[builder(default = "mapping_attribute".to_string())]
    pub marker_artifact_name: String,

    /// Logical name of the mapper-module artifact.
    #[builder(default = "generated_mapper".to_string())]
    pub mapper_artifact_name: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Everything one pass produces: the generated artifacts and the ordered
/// diagnostic sequence.
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    pub artifacts: Vec<GeneratedArtifact>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationOutput {
    pub fn artifact(&self, name: &str) -> Option<&GeneratedArtifact> {
        self.artifacts.iter().find(|artifact| artifact.name == name)
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Run one generation pass over a compilation unit.
    ///
    /// Directives are processed in discovery order and independently: a
    /// rejected or malformed directive is reported through diagnostics and
    /// suppressed from emission, and every other directive proceeds
    /// unaffected. Identical input yields identical output.
    pub fn run(&self, unit: &CompilationUnit) -> GenerationOutput {
        let resolver = Resolver;
        let mut diagnostics = DiagnosticCollector::default();

        let catalog = TypeCatalog::build(unit, &resolver);
        let directives = resolve_directives(
            unit,
            &catalog,
            &self.options.marker,
            &resolver,
            &mut diagnostics,
        );

        let mut verdicts = Vec::with_capacity(directives.len());
        for directive in directives {
            // Lookup failures were already reported during directive
            // resolution; such directives never reach this point.
            let Ok(verdict) = match_directive(&catalog, directive) else {
                continue;
            };
            if !verdict.accepted() {
                diagnostics.report(&verdict);
            }
            verdicts.push(verdict);
        }

        let emitter = CodeEmitter::new(
            self.options.marker.marker(),
            &self.options.marker_artifact_name,
            &self.options.mapper_artifact_name,
        );
        let artifacts = emitter.emit(&verdicts);
        debug!(
            "pass complete: {} artifact(s), {} diagnostic(s)",
            artifacts.len(),
            diagnostics.len()
        );

        GenerationOutput {
            artifacts,
            diagnostics: diagnostics.into_diagnostics(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_use_the_mapping_marker() {
        let options = GeneratorOptions::default();
        assert_eq!(options.marker.marker(), "mapping");
        assert_eq!(options.marker_artifact_name, "mapping_attribute");
        assert_eq!(options.mapper_artifact_name, "generated_mapper");
    }

    #[test]
    fn custom_marker_identity_is_honored() {
        let options = GeneratorOptions::builder()
            .marker(MarkerIdentity::new("my_crate", "map_from"))
            .build();
        let generator = Generator::with_options(options);
        let unit = CompilationUnit::parse_sources([
            ("entities", "pub struct Person { pub id: u64 }"),
            (
                "models",
                "#[map_from(Person)] pub struct PersonViewModel { pub id: u64 }",
            ),
        ])
        .unwrap();
        let output = generator.run(&unit);
        assert!(!output.has_errors());
        let mapper = output.artifact("generated_mapper").unwrap();
        assert!(mapper.contents.contains("map_to_person_view_model"));
    }

    #[test]
    fn empty_unit_still_produces_both_artifacts() {
        let output = Generator::new().run(&CompilationUnit::new());
        assert_eq!(output.artifacts.len(), 2);
        assert!(!output.has_errors());
    }
}
