//! [`TestWorkspace`] builder for refsync test scenarios.

use std::fs;
use std::path::Path;

use async_trait::async_trait;
use refsync_fs::NormalizedPath;
use refsync_workspace::{Result, WorkspaceGraph, WorkspacePackage, WorkspaceProvider};
use tempfile::TempDir;

/// A temporary yarn-style workspace with helper methods for test setup
/// and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use refsync_test_utils::TestWorkspace;
///
/// let mut ws = TestWorkspace::new();
/// ws.add_package("a", "packages/a", &[]);
/// ws.write_tsconfig("packages/a", "{}\n");
/// ws.assert_file_exists("packages/a/tsconfig.json");
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
    packages: Vec<WorkspacePackage>,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create a workspace directory with a root `package.json`.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("package.json"),
            "{\n  \"name\": \"fixture\",\n  \"private\": true,\n  \"workspaces\": [\"packages/*\"]\n}\n",
        )
        .unwrap();
        Self {
            temp_dir,
            packages: Vec::new(),
        }
    }

    /// Root of the workspace as a native path.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root of the workspace as a normalized path.
    pub fn normalized_root(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    /// Create a package directory and register it in the graph.
    pub fn add_package(&mut self, name: &str, location: &str, dependencies: &[&str]) {
        fs::create_dir_all(self.root().join(location)).unwrap();
        self.packages
            .push(WorkspacePackage::new(name, location, dependencies));
    }

    /// Write a package's `tsconfig.json`.
    pub fn write_tsconfig(&self, location: &str, content: &str) {
        let dir = self.root().join(location);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("tsconfig.json"), content).unwrap();
    }

    /// Write the root `tsconfig.json`.
    pub fn write_root_tsconfig(&self, content: &str) {
        fs::write(self.root().join("tsconfig.json"), content).unwrap();
    }

    /// Write an arbitrary file relative to the root.
    pub fn write_file(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// The registered packages as a graph, in registration order.
    pub fn graph(&self) -> WorkspaceGraph {
        WorkspaceGraph::from_packages(self.packages.clone())
    }

    /// A provider serving the registered packages without yarn.
    pub fn provider(&self) -> StaticProvider {
        StaticProvider::new(self.graph())
    }

    /// Read a file relative to the root.
    ///
    /// # Panics
    /// Panics with a descriptive message if the file cannot be read.
    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.root().join(path))
            .unwrap_or_else(|_| panic!("Could not read file: {}", path))
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to the root) contains
    /// `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "Expected {} to contain {:?}, got:\n{}",
            path,
            content,
            file_content
        );
    }
}

/// Provider returning a fixed in-memory graph, bypassing yarn entirely.
pub struct StaticProvider {
    graph: WorkspaceGraph,
}

impl StaticProvider {
    pub fn new(graph: WorkspaceGraph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl WorkspaceProvider for StaticProvider {
    fn id(&self) -> &str {
        "static"
    }

    async fn query(&self, _root: &NormalizedPath) -> Result<WorkspaceGraph> {
        Ok(self.graph.clone())
    }
}
