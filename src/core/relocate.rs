//! Bundle relocation
//!
//! Moves the bundler's output triple (CommonJS, UMD, minified UMD) from the
//! temporary dist directory into the package directory tree, renaming the
//! files and rewriting each bundle's trailing source-map comment so it keeps
//! naming the map file that actually sits next to it.
//!
//! The plan is pure path arithmetic, computed in full before anything is
//! executed, so it can be printed and unit-tested without touching disk.

use crate::{
    config::Config,
    error::{PackagerError, Result},
    utils::fs::FileSystemUtils,
};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// One distribution format emitted by the bundler.
///
/// The bundler writes `<name>.<kind>.js`; the packaged file drops the kind,
/// keeping only a trailing modifier (`umd.min` becomes `index.min.js`). The
/// destination folder is the kind's leading segment unless overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleFormat {
    /// Format kind as it appears in the bundler's output file name
    pub kind: &'static str,
    /// Destination subfolder override
    dest_override: Option<&'static str>,
}

/// The fixed set of formats every build emits
pub const BUNDLE_FORMATS: [BundleFormat; 3] = [
    BundleFormat {
        kind: "common",
        dest_override: Some("cjs"),
    },
    BundleFormat {
        kind: "umd",
        dest_override: None,
    },
    BundleFormat {
        kind: "umd.min",
        dest_override: None,
    },
];

impl BundleFormat {
    fn base(&self) -> &'static str {
        match self.kind.split_once('.') {
            Some((base, _)) => base,
            None => self.kind,
        }
    }

    fn modifier(&self) -> Option<&'static str> {
        self.kind.split_once('.').map(|(_, modifier)| modifier)
    }

    /// File name the bundler writes for this format
    pub fn source_file(&self, bundle_name: &str) -> String {
        format!("{bundle_name}.{}.js", self.kind)
    }

    /// Package subfolder this format lands in
    pub fn dest_folder(&self) -> &'static str {
        self.dest_override.unwrap_or_else(|| self.base())
    }

    /// File name this format is packaged under
    pub fn dest_file(&self, bundle_name: &str) -> String {
        match self.modifier() {
            Some(modifier) => format!("{bundle_name}.{modifier}.js"),
            None => format!("{bundle_name}.js"),
        }
    }
}

/// One bundle move: the bundle file, its map, and both destinations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocationStep {
    /// Bundle file as the bundler wrote it
    pub bundle_src: PathBuf,
    /// Bundle file's packaged location
    pub bundle_dest: PathBuf,
    /// Source map as the bundler wrote it
    pub map_src: PathBuf,
    /// Source map's packaged location
    pub map_dest: PathBuf,
}

impl RelocationStep {
    fn basename(path: &Path) -> &str {
        path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
    }

    /// Map basename the relocated bundle still references
    pub fn old_map_name(&self) -> &str {
        Self::basename(&self.map_src)
    }

    /// Map basename the relocated bundle must reference
    pub fn new_map_name(&self) -> &str {
        Self::basename(&self.map_dest)
    }
}

impl fmt::Display for RelocationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "move {} -> {}",
            self.bundle_src.display(),
            self.bundle_dest.display()
        )
    }
}

/// Complete relocation plan for one package
#[derive(Debug, Clone)]
pub struct RelocationPlan {
    /// Package directory every step lands in
    pub package_dir: PathBuf,
    /// One step per bundle format
    pub steps: Vec<RelocationStep>,
}

impl RelocationPlan {
    /// Compute the plan for the main package (`component` is `None`) or a
    /// component package. Pure path arithmetic; nothing is touched on disk.
    pub fn for_package(config: &Config, component: Option<&str>) -> Self {
        let dist_dir = config.dist_dir(component);
        let package_dir = config.package_dir(component);
        let bundle_name = &config.bundler.bundle_name;

        let steps = BUNDLE_FORMATS
            .iter()
            .map(|format| {
                let bundle_src = dist_dir.join(format.source_file(bundle_name));
                let bundle_dest = package_dir
                    .join(format.dest_folder())
                    .join(format.dest_file(bundle_name));
                let map_src = append_map_extension(&bundle_src);
                let map_dest = append_map_extension(&bundle_dest);
                RelocationStep {
                    bundle_src,
                    bundle_dest,
                    map_src,
                    map_dest,
                }
            })
            .collect();

        Self { package_dir, steps }
    }

    /// Execute the plan: verify every expected bundler output exists, then
    /// move bundles and maps and rewrite each bundle's map reference.
    ///
    /// The existence check runs over all steps before the first move, so a
    /// bundler that emitted only part of the expected formats aborts with one
    /// error naming every missing file instead of dying mid-move with a
    /// half-relocated package.
    #[instrument(skip(self, fs))]
    pub fn execute(&self, fs: &FileSystemUtils) -> Result<usize> {
        let missing: Vec<&PathBuf> = self
            .steps
            .iter()
            .flat_map(|step| [&step.bundle_src, &step.map_src])
            .filter(|path| !path.exists())
            .collect();

        if let Some(first) = missing.first() {
            let listing = missing
                .iter()
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(PackagerError::relocate(
                format!("Bundler output is incomplete; missing: {listing}"),
                first.as_path(),
            ));
        }

        for step in &self.steps {
            debug!("{step}");

            fs.move_file(&step.bundle_src, &step.bundle_dest)
                .map_err(|e| PackagerError::file_system("move", step.bundle_src.clone(), e))?;
            fs.move_file(&step.map_src, &step.map_dest)
                .map_err(|e| PackagerError::file_system("move", step.map_src.clone(), e))?;

            let content = fs
                .read_file_to_string(&step.bundle_dest)
                .map_err(|e| PackagerError::file_system("read", step.bundle_dest.clone(), e))?;
            let rewritten =
                rewrite_map_reference(&content, step.old_map_name(), step.new_map_name());
            fs.write_file(&step.bundle_dest, rewritten)
                .map_err(|e| PackagerError::file_system("write", step.bundle_dest.clone(), e))?;
        }

        Ok(self.steps.len())
    }
}

fn append_map_extension(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".map");
    path.with_file_name(name)
}

/// Replace the first occurrence of the old map basename with the new one.
///
/// The bundler writes the reference once, in the trailing
/// `//# sourceMappingURL=` comment.
pub fn rewrite_map_reference(content: &str, old_name: &str, new_name: &str) -> String {
    content.replacen(old_name, new_name, 1)
}
