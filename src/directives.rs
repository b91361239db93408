//! Directive discovery: find every marker usage in the unit and turn each one
//! into a `MappingDirective`, or into a diagnostic when it cannot be.
//!
//! Failures here are local to the usage that caused them. A malformed or
//! unresolvable directive is skipped and reported; it never aborts the pass or
//! affects any other directive.

use log::debug;
use syn::punctuated::Punctuated;
use syn::visit::{self, Visit};
use syn::{Attribute, Ident, ItemStruct, Token};

use crate::catalog::{LookupError, TypeCatalog, TypeDecl};
use crate::diagnostics::{Diagnostic, DiagnosticCollector};
use crate::resolve::{MarkerIdentity, Resolver};
use crate::unit::CompilationUnit;

/// One instruction to populate `target` from the type named `source_name`.
#[derive(Debug, Clone)]
pub struct MappingDirective {
    pub target: TypeDecl,
    pub source_name: String,
}

/// A raw marker usage before resolution. `target` is `None` when the host
/// item is not a mappable type (no named fields).
struct MarkerUsage {
    host_name: String,
    target: Option<TypeDecl>,
    attr: Attribute,
}

/// Scan the unit for marker usages and resolve them against the catalog, in
/// source-discovery order. Exactly one directive per well-formed usage.
pub fn resolve_directives(
    unit: &CompilationUnit,
    catalog: &TypeCatalog,
    marker: &MarkerIdentity,
    resolver: &Resolver,
    diagnostics: &mut DiagnosticCollector,
) -> Vec<MappingDirective> {
    let mut usages = Vec::new();
    for module in unit.modules() {
        let mut visitor = DirectiveVisitor {
            marker,
            resolver,
            module_path: Vec::new(),
            usages: &mut usages,
        };
        visitor.visit_file(module.ast());
    }

    let mut directives = Vec::new();
    for usage in usages {
        match resolve_usage(usage, catalog, diagnostics) {
            Some(directive) => directives.push(directive),
            None => continue,
        }
    }
    debug!("resolved {} mapping directive(s)", directives.len());
    directives
}

fn resolve_usage(
    usage: MarkerUsage,
    catalog: &TypeCatalog,
    diagnostics: &mut DiagnosticCollector,
) -> Option<MappingDirective> {
    let Some(target) = usage.target else {
        diagnostics.push(Diagnostic::malformed_directive(
            &usage.host_name,
            "the annotated item is not a struct with named fields",
        ));
        return None;
    };

    let args = match usage
        .attr
        .parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
    {
        Ok(args) => args,
        Err(err) => {
            diagnostics.push(Diagnostic::malformed_directive(
                &target.simple_name,
                format_args!("expected a source type argument ({err})"),
            ));
            return None;
        }
    };
    // The first argument names the source; trailing arguments are tolerated.
    let Some(source_path) = args.into_iter().next() else {
        diagnostics.push(Diagnostic::malformed_directive(
            &target.simple_name,
            "expected a source type argument",
        ));
        return None;
    };
    // Directive arguments may qualify the source; resolution is by the name
    // the path denotes.
    let source_name = source_path.segments.last()?.ident.to_string();

    match catalog.lookup(&source_name) {
        Ok(_) => Some(MappingDirective {
            target,
            source_name,
        }),
        Err(LookupError::Missing(name)) => {
            diagnostics.push(Diagnostic::malformed_directive(
                &target.simple_name,
                format_args!("source type '{name}' does not resolve in the compilation unit"),
            ));
            None
        }
        Err(LookupError::Ambiguous(name)) => {
            diagnostics.push(Diagnostic::ambiguous_type_name(&target.simple_name, &name));
            None
        }
    }
}

struct DirectiveVisitor<'a> {
    marker: &'a MarkerIdentity,
    resolver: &'a Resolver,
    module_path: Vec<Ident>,
    usages: &'a mut Vec<MarkerUsage>,
}

impl DirectiveVisitor<'_> {
    /// Record marker usages on an item that can never be a mapping target.
    /// They resolve to the malformed-directive diagnostic later.
    fn record_unmappable(&mut self, ident: &Ident, attrs: &[Attribute]) {
        for attr in attrs {
            if self.marker.matches(attr.path()) {
                self.usages.push(MarkerUsage {
                    host_name: ident.to_string(),
                    target: None,
                    attr: attr.clone(),
                });
            }
        }
    }
}

impl<'ast> Visit<'ast> for DirectiveVisitor<'_> {
    fn visit_item_mod(&mut self, i: &'ast syn::ItemMod) {
        self.module_path.push(i.ident.clone());
        visit::visit_item_mod(self, i);
        self.module_path.pop();
    }

    fn visit_item_struct(&mut self, i: &'ast ItemStruct) {
        for attr in &i.attrs {
            if self.marker.matches(attr.path()) {
                self.usages.push(MarkerUsage {
                    host_name: i.ident.to_string(),
                    target: TypeDecl::from_struct(self.resolver, &self.module_path, i),
                    attr: attr.clone(),
                });
            }
        }
        visit::visit_item_struct(self, i);
    }

    fn visit_item_enum(&mut self, i: &'ast syn::ItemEnum) {
        self.record_unmappable(&i.ident, &i.attrs);
        visit::visit_item_enum(self, i);
    }

    fn visit_item_union(&mut self, i: &'ast syn::ItemUnion) {
        self.record_unmappable(&i.ident, &i.attrs);
        visit::visit_item_union(self, i);
    }

    fn visit_item_type(&mut self, i: &'ast syn::ItemType) {
        self.record_unmappable(&i.ident, &i.attrs);
        visit::visit_item_type(self, i);
    }
}
