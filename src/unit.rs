//! Compilation-unit input: the set of parsed modules one generation pass
//! operates on.
//!
//! Parsing is delegated to syn; the engine itself never touches raw source
//! text after this point.

use std::path::Path;

use crate::errors::{GeneratorError, GeneratorResult};

/// One parsed source module, tagged with a logical name.
#[derive(Debug, Clone)]
pub struct SourceModule {
    name: String,
    ast: syn::File,
}

impl SourceModule {
    /// Parse a module from source text.
    pub fn parse(name: impl Into<String>, source: &str) -> GeneratorResult<Self> {
        let name = name.into();
        let ast = syn::parse_file(source).map_err(|source| GeneratorError::ModuleParse {
            module: name.clone(),
            source,
        })?;
        Ok(Self { name, ast })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ast(&self) -> &syn::File {
        &self.ast
    }
}

/// All modules belonging to one generation pass.
///
/// Module order is preserved; everything downstream (catalog iteration,
/// directive discovery, emission) follows it, which is what makes a pass
/// deterministic for deterministic input order.
#[derive(Debug, Clone, Default)]
pub struct CompilationUnit {
    modules: Vec<SourceModule>,
}

impl CompilationUnit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, module: SourceModule) {
        self.modules.push(module);
    }

    /// Build a unit from `(name, source)` pairs.
    pub fn parse_sources<'a>(
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> GeneratorResult<Self> {
        let mut unit = Self::new();
        for (name, source) in sources {
            unit.push(SourceModule::parse(name, source)?);
        }
        Ok(unit)
    }

    /// Build a unit from files on disk. Module names are the file stems.
    pub fn from_paths(paths: impl IntoIterator<Item = impl AsRef<Path>>) -> GeneratorResult<Self> {
        let mut unit = Self::new();
        for path in paths {
            let path = path.as_ref();
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| GeneratorError::ModuleName(path.to_path_buf()))?
                .to_string();
            let source =
                std::fs::read_to_string(path).map_err(|source| GeneratorError::ModuleRead {
                    path: path.to_path_buf(),
                    source,
                })?;
            unit.push(SourceModule::parse(name, &source)?);
        }
        Ok(unit)
    }

    pub fn modules(&self) -> &[SourceModule] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
