//! SyncEngine implementation
//!
//! Converges each tsconfig toward the canonical form derived from the
//! workspace graph: read, overlay the reference list, render, compare
//! bytes. Package configs run as joined concurrent tasks; the root config
//! runs strictly after them and additionally gets its file list cleared.

use refsync_fs::{NormalizedPath, WorkspaceFile, io, relative};
use refsync_tsconfig::{ProjectReference, StyleOptions, TsConfig, canonical_string, diff, style};
use refsync_workspace::WorkspaceProvider;
use tokio::task::JoinSet;

use crate::error::{Error, Result};
use crate::locate::locate;
use crate::references;

use super::report::{DriftEntry, FileOutcome, Mode, RunReport, summarize};

/// Engine for one sync run over a workspace.
#[derive(Debug, Clone)]
pub struct SyncEngine {
    /// Canonical workspace root
    root: NormalizedPath,
    /// Check or write
    mode: Mode,
}

impl SyncEngine {
    pub fn new(root: NormalizedPath, mode: Mode) -> Self {
        Self { root, mode }
    }

    /// Run the full pipeline: query, locate, sync every config, summarize.
    pub async fn run(&self, provider: &dyn WorkspaceProvider) -> Result<RunReport> {
        tracing::debug!(
            provider = provider.id(),
            root = %self.root,
            mode = ?self.mode,
            "Starting sync run"
        );
        let graph = provider.query(&self.root).await?;
        let index = locate(&graph, &self.root).await?;

        let mut tasks = JoinSet::new();
        for package in graph.packages() {
            let Some(config_path) = index.config_path(&package.name) else {
                continue;
            };
            let config_path = config_path.clone();
            let config_dir = self.root.join(&package.location);
            let refs = references::package_references(package, &index, &config_dir);
            let file = relative(&self.root, &config_path);
            let engine = self.clone();
            tasks.spawn(async move {
                let (outcome, diff) = engine.sync_file(&config_path, &refs, false).await?;
                Ok::<_, Error>((file, outcome, diff))
            });
        }

        let mut drifted = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            let (file, outcome, diff) = joined??;
            if outcome.out_of_sync {
                drifted.push(DriftEntry {
                    file: file.as_str().to_string(),
                    diff,
                });
            }
        }
        // Task completion order is nondeterministic
        drifted.sort_by(|a, b| a.file.cmp(&b.file));

        // The root config references every package config, so it runs
        // only after all package tasks have completed.
        let root_config = self.root.join(WorkspaceFile::TsConfig.as_str());
        let root_refs = references::root_references(&graph, &index, &self.root);
        let (outcome, diff) = self.sync_file(&root_config, &root_refs, true).await?;
        if outcome.out_of_sync {
            drifted.push(DriftEntry {
                file: WorkspaceFile::TsConfig.as_str().to_string(),
                diff,
            });
        }

        Ok(summarize(self.mode, drifted))
    }

    /// Converge a single config file.
    ///
    /// Returns the outcome plus a unified diff when the file drifted in
    /// check mode.
    async fn sync_file(
        &self,
        path: &NormalizedPath,
        references: &[ProjectReference],
        clear_files: bool,
    ) -> Result<(FileOutcome, Option<String>)> {
        let current = io::read_text(path).await?;
        let config = TsConfig::parse(&current).map_err(|source| Error::Config {
            path: path.to_native(),
            source,
        })?;

        let mut updated = config.with_references(references);
        if clear_files {
            updated = updated.with_files_cleared();
        }

        let style = self.resolve_style(path)?;
        let rendered = canonical_string(&updated.to_value(), &style);

        if current == rendered {
            return Ok((FileOutcome::default(), None));
        }

        match self.mode {
            Mode::Check => {
                let outcome = FileOutcome {
                    out_of_sync: true,
                    written: false,
                };
                Ok((outcome, Some(diff::unified(&current, &rendered))))
            }
            Mode::Write => {
                io::write_atomic(path, &rendered).await?;
                tracing::info!(file = %path, "Rewrote project references");
                let outcome = FileOutcome {
                    out_of_sync: true,
                    written: true,
                };
                Ok((outcome, None))
            }
        }
    }

    /// Style for a config file: nearest style file between the config's
    /// directory and the workspace root, otherwise defaults.
    fn resolve_style(&self, config_path: &NormalizedPath) -> Result<StyleOptions> {
        let dir = match config_path.parent() {
            Some(parent) => parent,
            None => self.root.clone(),
        };
        let found = style::discover(&dir.to_native(), &self.root.to_native())?;
        Ok(found.unwrap_or_default())
    }
}

/// Run a sync over the workspace at `root`.
pub async fn run(
    root: &NormalizedPath,
    mode: Mode,
    provider: &dyn WorkspaceProvider,
) -> Result<RunReport> {
    SyncEngine::new(root.clone(), mode).run(provider).await
}
