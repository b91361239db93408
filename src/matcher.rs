//! Property matching: decide, per directive, whether the target's properties
//! are fully covered by the source type.
//!
//! Each directive is matched on its own. Verdicts carry every unmatched
//! property, not just the first, and one directive's outcome never changes
//! another's.

use log::{debug, trace};

use crate::catalog::{LookupError, TypeCatalog, TypeDecl};
use crate::directives::MappingDirective;

/// The outcome of matching one directive.
#[derive(Debug, Clone)]
pub struct MatchVerdict {
    pub directive: MappingDirective,
    pub source: TypeDecl,
    /// Target properties with no name-and-type-identical source counterpart,
    /// in the target's declared order.
    pub unmatched: Vec<String>,
}

impl MatchVerdict {
    pub fn accepted(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Match a directive's target properties against its source type.
///
/// A target property matches iff the source has a property with an identical
/// name and a structurally identical type. No coercion, no assignability, no
/// case folding. Type identity is the structural equality of the resolved
/// `syn::Type`, so formatting differences never cause mismatches.
pub fn match_directive(
    catalog: &TypeCatalog,
    directive: MappingDirective,
) -> Result<MatchVerdict, LookupError> {
    let source = catalog.lookup(&directive.source_name)?.clone();
    let unmatched: Vec<String> = directive
        .target
        .properties
        .iter()
        .filter(|target_property| {
            let matched = source.properties.iter().any(|source_property| {
                source_property.name == target_property.name
                    && source_property.ty == target_property.ty
            });
            trace!(
                "{}.{} against {}: {}",
                directive.target.simple_name,
                target_property.name,
                source.simple_name,
                if matched { "matched" } else { "unmatched" }
            );
            !matched
        })
        .map(|property| property.name.clone())
        .collect();

    debug!(
        "directive {} <- {}: {}",
        directive.target.simple_name,
        source.simple_name,
        if unmatched.is_empty() {
            "accepted".to_string()
        } else {
            format!("rejected ({} unmatched)", unmatched.len())
        }
    );
    Ok(MatchVerdict {
        directive,
        source,
        unmatched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticCollector;
    use crate::resolve::{MarkerIdentity, Resolver};
    use crate::unit::CompilationUnit;

    fn verdicts_of(sources: &[(&str, &str)]) -> Vec<MatchVerdict> {
        let unit = CompilationUnit::parse_sources(sources.iter().copied()).unwrap();
        let resolver = Resolver;
        let catalog = TypeCatalog::build(&unit, &resolver);
        let mut diagnostics = DiagnosticCollector::default();
        let directives = crate::directives::resolve_directives(
            &unit,
            &catalog,
            &MarkerIdentity::default(),
            &resolver,
            &mut diagnostics,
        );
        directives
            .into_iter()
            .map(|directive| match_directive(&catalog, directive).unwrap())
            .collect()
    }

    #[test]
    fn identical_properties_are_accepted() {
        let verdicts = verdicts_of(&[
            ("entities", "pub struct Person { pub id: u64, pub name: String }"),
            (
                "models",
                "#[mapping(Person)] pub struct PersonViewModel { pub id: u64, pub name: String }",
            ),
        ]);
        assert_eq!(verdicts.len(), 1);
        assert!(verdicts[0].accepted());
    }

    #[test]
    fn renamed_property_is_enumerated() {
        let verdicts = verdicts_of(&[
            ("entities", "pub struct Person { pub id: u64, pub name: String }"),
            (
                "models",
                "#[mapping(Person)] pub struct PersonViewModel { pub sn: u64, pub name: String }",
            ),
        ]);
        assert_eq!(verdicts[0].unmatched, ["sn"]);
    }

    #[test]
    fn type_difference_is_a_mismatch() {
        let verdicts = verdicts_of(&[
            ("entities", "pub struct Person { pub id: u64 }"),
            (
                "models",
                "#[mapping(Person)] pub struct PersonViewModel { pub id: u32 }",
            ),
        ]);
        assert_eq!(verdicts[0].unmatched, ["id"]);
    }

    #[test]
    fn every_unmatched_property_is_listed_in_declared_order() {
        let verdicts = verdicts_of(&[
            ("entities", "pub struct Person { pub name: String }"),
            (
                "models",
                "#[mapping(Person)] pub struct PersonViewModel { pub a: u64, pub name: String, pub b: u64 }",
            ),
        ]);
        assert_eq!(verdicts[0].unmatched, ["a", "b"]);
    }

    #[test]
    fn formatting_differences_do_not_mismatch() {
        let verdicts = verdicts_of(&[
            ("entities", "pub struct Person { pub tags: Vec<String> }"),
            (
                "models",
                "#[mapping(Person)] pub struct PersonViewModel { pub tags: Vec< String > }",
            ),
        ]);
        assert!(verdicts[0].accepted());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let verdicts = verdicts_of(&[
            ("entities", "pub struct Person { pub name: String }"),
            (
                "models",
                "#[mapping(Person)] pub struct PersonViewModel { pub Name: String }",
            ),
        ]);
        assert_eq!(verdicts[0].unmatched, ["Name"]);
    }

    #[test]
    fn extra_source_properties_are_ignored() {
        let verdicts = verdicts_of(&[
            (
                "entities",
                "pub struct Person { pub id: u64, pub name: String, pub age: u8 }",
            ),
            (
                "models",
                "#[mapping(Person)] pub struct PersonViewModel { pub id: u64 }",
            ),
        ]);
        assert!(verdicts[0].accepted());
    }

    #[test]
    fn empty_target_is_trivially_accepted() {
        let verdicts = verdicts_of(&[
            ("entities", "pub struct Person { pub id: u64 }"),
            ("models", "#[mapping(Person)] pub struct PersonViewModel {}"),
        ]);
        assert!(verdicts[0].accepted());
    }
}
