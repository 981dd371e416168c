//! Whole-pipeline conversion: load, render, copy assets, write the artifact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Error, Result, Warning};
use crate::parser::{PackageLoader, ParseOptions};
use crate::render::{to_html, RenderOptions};

/// Options for a full conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Package loading options
    pub parse: ParseOptions,

    /// Artifact rendering options
    pub render: RenderOptions,
}

impl ConvertOptions {
    /// Create new convert options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the artifact title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render = self.render.with_title(title);
        self
    }

    /// Disable parallel slide parsing.
    pub fn sequential(mut self) -> Self {
        self.parse = self.parse.sequential();
        self
    }
}

/// Outcome of a conversion run.
#[derive(Debug)]
pub struct ConvertSummary {
    /// Path of the written artifact
    pub output_file: PathBuf,

    /// Number of slide layers rendered
    pub slides_rendered: usize,

    /// Diagnostics collected while building the model
    pub warnings: Vec<Warning>,
}

/// Convert an extracted package directory into a browsable artifact.
///
/// The artifact is assembled fully in memory and written in one operation,
/// so a failure mid-pipeline never leaves a truncated output file. The
/// `Resources` directory is copied verbatim next to the artifact, skipped
/// when source and output are the same directory.
pub fn convert_dir(
    source: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<ConvertSummary> {
    let source = source.as_ref();
    let output = output.as_ref();

    let loader = PackageLoader::with_options(source, options.parse.clone())?;
    let package = loader.load()?;
    let html = to_html(&package, &options.render);

    fs::create_dir_all(output).map_err(|e| output_error(output, e))?;
    copy_resources(source, output)?;

    let output_file = output.join("index.html");
    fs::write(&output_file, html).map_err(|e| output_error(&output_file, e))?;
    info!("wrote artifact to {}", output_file.display());

    Ok(ConvertSummary {
        output_file,
        slides_rendered: package.ordered_slides().count(),
        warnings: package.warnings,
    })
}

/// Copy the package's `Resources` directory verbatim into the output
/// location, replacing any previous copy.
pub fn copy_resources(source: &Path, output: &Path) -> Result<()> {
    if same_directory(source, output) {
        debug!("source and output are the same directory, skipping resource copy");
        return Ok(());
    }

    let from = source.join("Resources");
    if !from.is_dir() {
        debug!("no Resources directory to copy");
        return Ok(());
    }

    let to = output.join("Resources");
    if to.exists() {
        fs::remove_dir_all(&to).map_err(|e| output_error(&to, e))?;
    }
    copy_dir_recursive(&from, &to).map_err(|e| output_error(&to, e))
}

fn same_directory(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn copy_dir_recursive(from: &Path, to: &Path) -> io::Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

fn output_error(path: &Path, source: io::Error) -> Error {
    Error::OutputLocation {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn package(dir: &Path) {
        write(dir, "Document.xml", "<Document><Name>Demo</Name></Document>");
        write(
            dir,
            "Board.xml",
            "<Board><SlideWidth>1280</SlideWidth><SlideHeight>720</SlideHeight>\
             <Slides><Item>s1</Item></Slides></Board>",
        );
        write(
            dir,
            "Reference.xml",
            "<Reference><Relationships>\
             <Relationship><Id>r1</Id><Target>Resources/a.png</Target></Relationship>\
             </Relationships></Reference>",
        );
        write(dir, "Slides/0001.xml", "<Slide><Id>s1</Id></Slide>");
        write(dir, "Resources/a.png", "not really a png");
        write(dir, "Resources/sub/b.png", "nested");
    }

    #[test]
    fn test_convert_writes_artifact_and_copies_resources() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        package(src.path());

        let summary = convert_dir(src.path(), dst.path(), &ConvertOptions::new()).unwrap();
        assert_eq!(summary.slides_rendered, 1);
        assert!(summary.output_file.ends_with("index.html"));
        assert!(summary.output_file.is_file());
        assert!(dst.path().join("Resources/a.png").is_file());
        assert!(dst.path().join("Resources/sub/b.png").is_file());
    }

    #[test]
    fn test_in_place_conversion_skips_resource_copy() {
        let src = TempDir::new().unwrap();
        package(src.path());

        convert_dir(src.path(), src.path(), &ConvertOptions::new()).unwrap();
        assert!(src.path().join("index.html").is_file());
        // The original asset tree is untouched.
        assert!(src.path().join("Resources/a.png").is_file());
    }

    #[test]
    fn test_stale_resource_copy_is_replaced() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        package(src.path());
        write(dst.path(), "Resources/stale.bin", "old");

        convert_dir(src.path(), dst.path(), &ConvertOptions::new()).unwrap();
        assert!(!dst.path().join("Resources/stale.bin").exists());
        assert!(dst.path().join("Resources/a.png").is_file());
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let dst = TempDir::new().unwrap();
        let result = convert_dir(dst.path().join("nope"), dst.path(), &ConvertOptions::new());
        assert!(matches!(result, Err(Error::PackageNotFound(_))));
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let src = TempDir::new().unwrap();
        let out_a = TempDir::new().unwrap();
        let out_b = TempDir::new().unwrap();
        package(src.path());

        convert_dir(src.path(), out_a.path(), &ConvertOptions::new()).unwrap();
        convert_dir(src.path(), out_b.path(), &ConvertOptions::new()).unwrap();

        let a = fs::read(out_a.path().join("index.html")).unwrap();
        let b = fs::read(out_b.path().join("index.html")).unwrap();
        assert_eq!(a, b);
    }
}
