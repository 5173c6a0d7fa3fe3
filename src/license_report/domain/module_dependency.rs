/// Hosting location of a Go module, derived from its module path prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleHost {
    /// `github.com/...` - the module path is the repository URL
    GitHub,
    /// `gopkg.in/...` - the repository is linked from the gopkg.in landing page
    Gopkg,
    /// Any other host; no license source is known for it
    Unsupported,
}

/// One `(module path, version)` pair from a module listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDependency {
    path: String,
    version: String,
}

impl ModuleDependency {
    pub fn new(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn host(&self) -> ModuleHost {
        if self.path.starts_with("github.") {
            ModuleHost::GitHub
        } else if self.path.starts_with("gopkg.") {
            ModuleHost::Gopkg
        } else {
            ModuleHost::Unsupported
        }
    }

    /// The module path as an https URL
    pub fn https_url(&self) -> String {
        format!("https://{}", self.path)
    }

    /// Report heading: module path followed by its version
    pub fn heading(&self) -> String {
        format!("{} {}", self.path, self.version)
    }
}
