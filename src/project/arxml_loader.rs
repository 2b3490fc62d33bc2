use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::detect::detect_version;
use crate::base::{RefPath, SchemaVersion};
use crate::error::{ParseError, Result};
use crate::parser::{ComponentTypeParser, Diagnostic, Dispatch, ParsedElement, ParserOptions};
use crate::workspace::{EntityId, Workspace};
use crate::xml::{XmlDocument, XmlElement};

/// File extension of the documents picked up by [`ArxmlLoader::load_directory`].
pub const ARXML_EXTENSION: &str = "arxml";

/// Loads ARXML documents into a [`Workspace`].
///
/// Every package is walked in document order and each element the
/// dispatcher handles is registered as soon as it is built, so an
/// implementation finds components declared earlier in the same document
/// or in previously loaded ones.
#[derive(Debug, Default)]
pub struct ArxmlLoader {
    version: Option<SchemaVersion>,
    record_reference_hints: Option<bool>,
    workspace: Workspace,
    diagnostics: Vec<Diagnostic>,
}

impl ArxmlLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every document as `version` instead of detecting it.
    pub fn with_version(mut self, version: SchemaVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_reference_hints(mut self, enabled: bool) -> Self {
        self.record_reference_hints = Some(enabled);
        self
    }

    /// Load a single file.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Vec<EntityId>> {
        let path = path.as_ref();
        debug!("Loading {}", path.display());
        let bytes = std::fs::read(path)?;
        self.load_bytes(&bytes)
    }

    /// Load every `.arxml` file under `dir`, in file-name order.
    pub fn load_directory<P: AsRef<Path>>(&mut self, dir: P) -> Result<Vec<EntityId>> {
        let mut ids = Vec::new();
        for path in collect_arxml_paths(dir.as_ref())? {
            ids.extend(self.load_file(&path)?);
        }
        Ok(ids)
    }

    pub fn load_str(&mut self, text: &str) -> Result<Vec<EntityId>> {
        self.load_bytes(text.as_bytes())
    }

    /// Load a document and return the handles it registered, in order.
    ///
    /// Loading is not transactional. On a fatal error the elements built
    /// before it stay registered in the workspace (and implementations stay
    /// linked), their handles are not returned, and the diagnostics
    /// gathered so far are kept. Callers that need all-or-nothing loading
    /// should load into a fresh loader and discard it on error.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<Vec<EntityId>> {
        let document = XmlDocument::parse(bytes)?;
        let root = document.root();
        let version = match self.version {
            Some(version) => version,
            None => detect_version(root).ok_or_else(|| {
                ParseError::UnsupportedVersion(format!(
                    "cannot detect schema version of <{}> document",
                    root.tag()
                ))
            })?,
        };
        if !version.is_v3() && !version.is_v4() {
            return Err(ParseError::UnsupportedVersion(format!(
                "schema {version} predates 3.0"
            )));
        }

        let mut options = ParserOptions::for_version(version);
        if let Some(enabled) = self.record_reference_hints {
            options.record_reference_hints = enabled;
        }
        let mut parser = ComponentTypeParser::with_options(options);

        let mut ids = Vec::new();
        let result = self.walk_packages(&mut parser, root, &RefPath::root(), &mut ids);
        self.diagnostics.extend(parser.take_diagnostics());
        result.map(|()| ids)
    }

    fn walk_packages(
        &mut self,
        parser: &mut ComponentTypeParser,
        container: &XmlElement,
        parent: &RefPath,
        ids: &mut Vec<EntityId>,
    ) -> Result<()> {
        for group in container.children() {
            if !is_package_group(group.tag()) {
                continue;
            }
            for package in group.children_named("AR-PACKAGE") {
                let Some(name) = package.text_at("SHORT-NAME") else {
                    debug!("Skipping AR-PACKAGE without SHORT-NAME under {parent}");
                    continue;
                };
                let path = parent.join(name);
                debug!("Walking package {path}");

                for elements in package.children_named("ELEMENTS") {
                    for elem in elements.children() {
                        self.load_element(parser, elem, &path, ids)?;
                    }
                }
                self.walk_packages(parser, package, &path, ids)?;
            }
        }
        Ok(())
    }

    fn load_element(
        &mut self,
        parser: &mut ComponentTypeParser,
        elem: &XmlElement,
        package: &RefPath,
        ids: &mut Vec<EntityId>,
    ) -> Result<()> {
        match parser.parse_element(elem, Some(package), Some(&mut self.workspace))? {
            Dispatch::Handled(ParsedElement::Component(component)) => {
                ids.push(self.workspace.register(component));
            }
            Dispatch::Handled(ParsedElement::Implementation(implementation)) => {
                ids.push(self.workspace.register(implementation));
            }
            Dispatch::NotSupported => {
                debug!("Skipping <{}> in {package}", elem.tag());
            }
        }
        Ok(())
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn workspace_mut(&mut self) -> &mut Workspace {
        &mut self.workspace
    }

    pub fn into_workspace(self) -> Workspace {
        self.workspace
    }

    /// Diagnostics from every document loaded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

/// Package containers: `AR-PACKAGES` (4.x, also nested), `TOP-LEVEL-PACKAGES`
/// and `SUB-PACKAGES` (3.x).
fn is_package_group(tag: &str) -> bool {
    matches!(tag, "AR-PACKAGES" | "TOP-LEVEL-PACKAGES" | "SUB-PACKAGES")
}

/// All `.arxml` files under `dir`, sorted by path.
pub fn collect_arxml_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            ParseError::Io(e.into_io_error().unwrap_or_else(|| {
                std::io::Error::other(format!("failed to walk {}", dir.display()))
            }))
        })?;
        let path = entry.path();
        let is_arxml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(ARXML_EXTENSION));
        if entry.file_type().is_file() && is_arxml {
            paths.push(path.to_path_buf());
        }
    }
    Ok(paths)
}
