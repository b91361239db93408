//! Type catalog: every struct with named fields found anywhere in the
//! compilation unit, keyed by simple name.
//!
//! Building never fails. Duplicate simple names are recorded at build time and
//! surfaced as an explicit lookup error instead of being resolved to an
//! arbitrary entry.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use syn::visit::{self, Visit};
use syn::{Ident, ItemStruct};
use thiserror::Error;

use crate::resolve::Resolver;
use crate::unit::CompilationUnit;

/// One property of a catalogued type.
#[derive(Debug, Clone)]
pub struct PropertyDecl {
    pub name: String,
    pub ident: Ident,
    /// Normalized token rendering of `ty`, used in messages.
    pub canonical_type: String,
    /// Resolved type, used for structural identity comparison.
    pub ty: syn::Type,
}

/// One class-like declaration of the compilation unit.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub qualified_name: String,
    pub simple_name: String,
    pub ident: Ident,
    /// Module-qualified path used when emitted code references this type.
    pub path: syn::Path,
    /// Declared field order is preserved.
    pub properties: Vec<PropertyDecl>,
}

impl TypeDecl {
    /// Build a declaration from a struct item at the given module path.
    /// Returns `None` for structs without named fields.
    pub fn from_struct(
        resolver: &Resolver,
        module_path: &[Ident],
        item: &ItemStruct,
    ) -> Option<Self> {
        let syn::Fields::Named(fields) = &item.fields else {
            return None;
        };
        let properties = fields
            .named
            .iter()
            .filter_map(|field| resolver.resolve_property(field))
            .collect();
        Some(Self {
            qualified_name: resolver.qualified_name(module_path, &item.ident),
            simple_name: item.ident.to_string(),
            ident: item.ident.clone(),
            path: resolver.type_path(module_path, &item.ident),
            properties,
        })
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("No type named '{0}' exists in the compilation unit")]
    Missing(String),

    #[error("Type name '{0}' is ambiguous in the compilation unit")]
    Ambiguous(String),
}

/// Lookup from simple type name to declaration, for one generation pass.
#[derive(Debug, Default)]
pub struct TypeCatalog {
    entries: BTreeMap<String, TypeDecl>,
    ambiguous: BTreeSet<String>,
}

impl TypeCatalog {
    /// Walk every module of the unit and record every struct with named
    /// fields. Properties are resolved once per field, here and nowhere else.
    pub fn build(unit: &CompilationUnit, resolver: &Resolver) -> Self {
        let mut catalog = Self::default();
        for module in unit.modules() {
            let mut visitor = CatalogVisitor {
                resolver,
                catalog: &mut catalog,
                module_path: Vec::new(),
            };
            visitor.visit_file(module.ast());
        }
        debug!(
            "catalog built: {} types, {} ambiguous names",
            catalog.entries.len(),
            catalog.ambiguous.len()
        );
        catalog
    }

    fn insert(&mut self, decl: TypeDecl) {
        let key = decl.simple_name.clone();
        if self.entries.contains_key(&key) {
            self.ambiguous.insert(key);
        } else {
            self.entries.insert(key, decl);
        }
    }

    /// Resolve a simple name to its single declaration.
    pub fn lookup(&self, simple_name: &str) -> Result<&TypeDecl, LookupError> {
        if self.ambiguous.contains(simple_name) {
            return Err(LookupError::Ambiguous(simple_name.to_string()));
        }
        self.entries
            .get(simple_name)
            .ok_or_else(|| LookupError::Missing(simple_name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct CatalogVisitor<'a> {
    resolver: &'a Resolver,
    catalog: &'a mut TypeCatalog,
    module_path: Vec<Ident>,
}

impl<'ast> Visit<'ast> for CatalogVisitor<'_> {
    fn visit_item_mod(&mut self, i: &'ast syn::ItemMod) {
        self.module_path.push(i.ident.clone());
        visit::visit_item_mod(self, i);
        self.module_path.pop();
    }

    fn visit_item_struct(&mut self, i: &'ast ItemStruct) {
        if let Some(decl) = TypeDecl::from_struct(self.resolver, &self.module_path, i) {
            self.catalog.insert(decl);
        }
        visit::visit_item_struct(self, i);
    }
}
