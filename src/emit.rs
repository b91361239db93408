//! Code emission for accepted directives.
//!
//! Two artifacts per pass: the inert marker-attribute declaration and the
//! mapper module with one function pair per accepted directive, in directive
//! order. Code is built as token streams and rendered to text.
//!
//! Emitted functions construct the target with `Default::default()` and copy
//! each target field from the same-named source field with a shallow
//! `.clone()`. The target type must implement `Default` and source field
//! types must implement `Clone`; the engine does not check either.
//!
//! # Example output
//!
//! For `#[mapping(Person)] struct PersonViewModel { id: u64, name: String }`:
//!
//! ```rust,ignore
//! pub fn map_to_person_view_model(source: &Person) -> PersonViewModel {
//!     let mut target = PersonViewModel::default();
//!     target.id = source.id.clone();
//!     target.name = source.name.clone();
//!     target
//! }
//!
//! pub trait ToPersonViewModel {
//!     fn to_person_view_model(&self) -> PersonViewModel;
//! }
//!
//! impl ToPersonViewModel for Person { ... }
//! ```

use heck::ToSnakeCase;
use log::debug;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use serde::{Deserialize, Serialize};

use crate::matcher::MatchVerdict;

const GENERATED_HEADER: &str = "// <auto-generated by mapper_gen, do not edit>";

/// A named generated-source payload. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    pub name: String,
    pub contents: String,
}

impl GeneratedArtifact {
    fn render(name: &str, tokens: TokenStream) -> Self {
        Self {
            name: name.to_string(),
            contents: format!("{GENERATED_HEADER}\n{tokens}\n"),
        }
    }
}

pub struct CodeEmitter<'a> {
    marker_name: &'a str,
    marker_artifact_name: &'a str,
    mapper_artifact_name: &'a str,
}

impl<'a> CodeEmitter<'a> {
    pub fn new(
        marker_name: &'a str,
        marker_artifact_name: &'a str,
        mapper_artifact_name: &'a str,
    ) -> Self {
        Self {
            marker_name,
            marker_artifact_name,
            mapper_artifact_name,
        }
    }

    /// Emit both artifacts. Rejected verdicts contribute nothing to the
    /// mapper artifact; the marker declaration is emitted unconditionally.
    pub fn emit(&self, verdicts: &[MatchVerdict]) -> Vec<GeneratedArtifact> {
        let accepted = verdicts.iter().filter(|v| v.accepted()).count();
        debug!(
            "emitting {} mapping function pair(s) out of {} verdict(s)",
            accepted,
            verdicts.len()
        );
        vec![self.marker_artifact(), self.mapper_artifact(verdicts)]
    }

    /// The marker attribute's own declaration: a pass-through attribute
    /// macro, annotatable but never invoked at runtime.
    fn marker_artifact(&self) -> GeneratedArtifact {
        let marker = format_ident!("{}", self.marker_name);
        let tokens = quote! {
            use proc_macro::TokenStream;

            #[proc_macro_attribute]
            pub fn #marker(source: TokenStream, item: TokenStream) -> TokenStream {
                let _ = source;
                item
            }
        };
        GeneratedArtifact::render(self.marker_artifact_name, tokens)
    }

    fn mapper_artifact(&self, verdicts: &[MatchVerdict]) -> GeneratedArtifact {
        let functions = verdicts
            .iter()
            .filter(|verdict| verdict.accepted())
            .map(|verdict| self.mapping_functions(verdict));
        let tokens = quote! { #(#functions)* };
        GeneratedArtifact::render(self.mapper_artifact_name, tokens)
    }

    /// One function pair for an accepted verdict: the plain form and the
    /// method-call form, with identical bodies.
    fn mapping_functions(&self, verdict: &MatchVerdict) -> TokenStream {
        let target = &verdict.directive.target;
        let source = &verdict.source;
        let target_path = &target.path;
        let source_path = &source.path;

        let fn_name = format_ident!("map_to_{}", target.simple_name.to_snake_case());
        let trait_name = format_ident!("To{}", target.ident);
        let method_name = format_ident!("to_{}", target.simple_name.to_snake_case());

        let assignments: Vec<TokenStream> = target
            .properties
            .iter()
            .map(|property| {
                let field = &property.ident;
                quote! { target.#field = source.#field.clone(); }
            })
            .collect();

        quote! {
            pub fn #fn_name(source: &#source_path) -> #target_path {
                let mut target = #target_path::default();
                #(#assignments)*
                target
            }

            pub trait #trait_name {
                fn #method_name(&self) -> #target_path;
            }

            impl #trait_name for #source_path {
                fn #method_name(&self) -> #target_path {
                    let source = self;
                    let mut target = #target_path::default();
                    #(#assignments)*
                    target
                }
            }
        }
    }
}
