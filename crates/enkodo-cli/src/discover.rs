//! Source discovery. Walks the input path respecting `.gitignore` and friends, and keeps Rust
//! sources that are not themselves generated artifacts.

use std::path::{
    Path,
    PathBuf,
};

use anyhow::Context;
use ignore::WalkBuilder;

/// Every `.rs` file under `root` in a stable, path-sorted order. A file `root` is returned as is.
pub fn discover_sources(root: &Path, suffix: &str) -> anyhow::Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        anyhow::bail!("{} does not exist", root.display());
    }

    let mut walker_builder = WalkBuilder::new(root);
    walker_builder
        .hidden(true)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut sources = vec![];
    for entry in walker_builder.build() {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        let path = entry.path();
        if entry.file_type().is_some_and(|ty| ty.is_file()) && is_source(path, suffix) {
            sources.push(path.to_path_buf());
        }
    }

    tracing::debug!(root = %root.display(), count = sources.len(), "discovered sources");
    Ok(sources)
}

fn is_source(path: &Path, suffix: &str) -> bool {
    let is_rust = path.extension().is_some_and(|ext| ext == "rs");
    let is_artifact = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with(suffix));

    is_rust && !is_artifact
}
