//! The semantic-resolution seam.
//!
//! Everything the engine knows about a property or a type name goes through
//! [`Resolver`], so no stage ever re-derives information from raw text. Marker
//! recognition lives here too: an attribute is a mapping directive when its
//! path denotes the marker identity, not when its spelling equals a hardcoded
//! string.

use quote::ToTokens;
use syn::{Field, Ident};

use crate::catalog::PropertyDecl;

/// Identity of the directive attribute.
///
/// Accepts the bare form (`#[mapping(..)]`) and the crate-qualified form
/// (`#[mapper_gen::mapping(..)]`); anything else, including a `mapping`
/// attribute qualified with a foreign crate name, is not the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerIdentity {
    crate_name: String,
    marker: String,
}

impl Default for MarkerIdentity {
    fn default() -> Self {
        Self {
            crate_name: "mapper_gen".to_string(),
            marker: "mapping".to_string(),
        }
    }
}

impl MarkerIdentity {
    pub fn new(crate_name: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            crate_name: crate_name.into(),
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn crate_name(&self) -> &str {
        &self.crate_name
    }

    /// Whether an attribute path denotes this marker.
    pub fn matches(&self, path: &syn::Path) -> bool {
        let Some(last) = path.segments.last() else {
            return false;
        };
        if last.ident != self.marker {
            return false;
        }
        match path.segments.len() {
            1 => true,
            2 => path.segments[0].ident == self.crate_name,
            _ => false,
        }
    }
}

/// Stateless resolution capability backed by syn.
#[derive(Debug, Clone, Default)]
pub struct Resolver;

impl Resolver {
    /// Resolve a struct field to a property declaration. Unnamed fields are
    /// not properties.
    pub fn resolve_property(&self, field: &Field) -> Option<PropertyDecl> {
        let ident = field.ident.clone()?;
        Some(PropertyDecl {
            name: ident.to_string(),
            ident,
            canonical_type: self.canonical_type(&field.ty),
            ty: field.ty.clone(),
        })
    }

    /// Canonical token rendering of a type. Whitespace and formatting in the
    /// input never survive into this form, so two spellings of the same type
    /// render identically.
    pub fn canonical_type(&self, ty: &syn::Type) -> String {
        ty.to_token_stream().to_string()
    }

    /// Module-qualified name of a declaration, e.g. `entities::Person`.
    pub fn qualified_name(&self, module_path: &[Ident], ident: &Ident) -> String {
        let mut segments: Vec<String> = module_path.iter().map(Ident::to_string).collect();
        segments.push(ident.to_string());
        segments.join("::")
    }

    /// Module-qualified path of a declaration, for use in emitted code.
    pub fn type_path(&self, module_path: &[Ident], ident: &Ident) -> syn::Path {
        let mut segments = syn::punctuated::Punctuated::new();
        for segment in module_path {
            segments.push(syn::PathSegment::from(segment.clone()));
        }
        segments.push(syn::PathSegment::from(ident.clone()));
        syn::Path {
            leading_colon: None,
            segments,
        }
    }
}
