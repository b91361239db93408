//! Structured diagnostics surfaced to the host's diagnostic sink.
//!
//! No source spans are tracked; a diagnostic describes its subject by name
//! only. The collector is append-only and one pass starts from an empty one.

use serde::{Deserialize, Serialize};

use crate::matcher::MatchVerdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum DiagnosticCode {
    /// A target property has no name-and-type-identical source counterpart.
    #[strum(serialize = "MPERR001")]
    PropertyMappingMismatch,
    /// A directive is missing its source-type argument, or the argument does
    /// not resolve to a mappable type.
    #[strum(serialize = "MPERR002")]
    MalformedDirective,
    /// The named source type exists more than once by simple name.
    #[strum(serialize = "MPERR003")]
    AmbiguousTypeName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Severity {
    Error,
}

/// What a diagnostic is about: a target type, optionally narrowed to one of
/// its properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub type_name: String,
    pub property: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub message: String,
    pub subject: Subject,
}

impl Diagnostic {
    pub fn property_mismatch(target: &str, property: &str, source: &str) -> Self {
        Self {
            code: DiagnosticCode::PropertyMappingMismatch,
            severity: Severity::Error,
            message: format!(
                "{target}.{property} couldn't match to {source}, \
                 please check if the name and type of properties are the same."
            ),
            subject: Subject {
                type_name: target.to_string(),
                property: Some(property.to_string()),
            },
        }
    }

    pub fn malformed_directive(target: &str, detail: impl std::fmt::Display) -> Self {
        Self {
            code: DiagnosticCode::MalformedDirective,
            severity: Severity::Error,
            message: format!("Mapping directive on {target} is malformed: {detail}"),
            subject: Subject {
                type_name: target.to_string(),
                property: None,
            },
        }
    }

    pub fn ambiguous_type_name(target: &str, source_name: &str) -> Self {
        Self {
            code: DiagnosticCode::AmbiguousTypeName,
            severity: Severity::Error,
            message: format!(
                "Mapping directive on {target} names {source_name}, \
                 which matches more than one type in the compilation unit."
            ),
            subject: Subject {
                type_name: target.to_string(),
                property: None,
            },
        }
    }
}

/// Append-only diagnostic accumulator for one generation pass.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    entries: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// One MPERR001 per unmatched property of a rejected verdict. Accepted
    /// verdicts produce nothing.
    pub fn report(&mut self, verdict: &MatchVerdict) {
        for property in &verdict.unmatched {
            self.push(Diagnostic::property_mismatch(
                &verdict.directive.target.simple_name,
                property,
                &verdict.source.simple_name,
            ));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_render_in_the_mperr_series() {
        assert_eq!(DiagnosticCode::PropertyMappingMismatch.to_string(), "MPERR001");
        assert_eq!(DiagnosticCode::MalformedDirective.to_string(), "MPERR002");
        assert_eq!(DiagnosticCode::AmbiguousTypeName.to_string(), "MPERR003");
    }

    #[test]
    fn property_mismatch_names_all_three_parties() {
        let diagnostic = Diagnostic::property_mismatch("PersonViewModel", "Sn", "Person");
        assert_eq!(diagnostic.severity, Severity::Error);
        assert!(diagnostic.message.contains("PersonViewModel.Sn"));
        assert!(diagnostic.message.contains("Person"));
        assert_eq!(diagnostic.subject.property.as_deref(), Some("Sn"));
    }

    #[test]
    fn diagnostics_serialize_for_host_sinks() {
        let diagnostic = Diagnostic::property_mismatch("PersonViewModel", "Sn", "Person");
        let json = serde_json::to_string(&diagnostic).unwrap();
        assert!(json.contains("PropertyMappingMismatch"));
        assert!(json.contains("\"Sn\""));
    }
}
