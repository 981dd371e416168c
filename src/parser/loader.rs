//! Package loading: top-level documents and the slide directory scan.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use rayon::prelude::*;

use super::slide::parse_slide;
use super::xml::XmlNode;
use crate::error::{Error, Result, Warning};
use crate::model::{Board, Metadata, Package, ResourceRegistry, Slide, UNKNOWN};

/// Options for loading packages.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Parse independent slide files in parallel. The slide store is the
    /// single synchronization point: rendering never observes a partially
    /// built model.
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel slide parsing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel slide parsing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Loads an extracted package directory into a [`Package`].
///
/// Missing optional top-level documents yield component-level defaults; a
/// malformed individual unit is dropped with a warning. Nothing escapes the
/// model-building stage as an unhandled failure.
pub struct PackageLoader {
    root: PathBuf,
    options: ParseOptions,
}

impl PackageLoader {
    /// Open a package directory with default options.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        Self::with_options(root, ParseOptions::default())
    }

    /// Open a package directory with custom options.
    pub fn with_options(root: impl AsRef<Path>, options: ParseOptions) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(Error::PackageNotFound(root));
        }
        Ok(Self { root, options })
    }

    /// Load the full package model in one pass.
    pub fn load(&self) -> Result<Package> {
        let mut warnings = Vec::new();

        let metadata = self.parse_metadata(&mut warnings);
        let board = self.parse_board(&mut warnings);
        let registry = self.parse_references(&mut warnings);
        let slides = self.scan_slides(&mut warnings);

        for id in &board.slide_order {
            if !slides.contains_key(id) {
                note(&mut warnings, Warning::UnknownSlideId(id.clone()));
            }
        }

        debug!(
            "loaded package: {} slides in order, {} slide files, {} resources",
            board.slide_count(),
            slides.len(),
            registry.len()
        );

        Ok(Package {
            metadata,
            board,
            registry,
            slides,
            warnings,
        })
    }

    /// Read and parse one top-level XML document; absence and parse
    /// failures both degrade to `None` with a warning.
    fn read_document(&self, name: &str, warnings: &mut Vec<Warning>) -> Option<XmlNode> {
        let path = self.root.join(name);
        if !path.is_file() {
            note(warnings, Warning::MissingFile(name.to_string()));
            return None;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                note(warnings, malformed(name, e));
                return None;
            }
        };

        match XmlNode::parse(&content) {
            Ok(root) => Some(root),
            Err(e) => {
                note(warnings, malformed(name, e));
                None
            }
        }
    }

    /// `Document.xml`: every absent field defaults to the `"Unknown"`
    /// sentinel.
    fn parse_metadata(&self, warnings: &mut Vec<Warning>) -> Metadata {
        let Some(root) = self.read_document("Document.xml", warnings) else {
            return Metadata::default();
        };

        let field = |name: &str| root.child_text(name).unwrap_or(UNKNOWN).to_string();
        Metadata {
            name: field("Name"),
            creator: field("Creator"),
            created: field("CreatedDateTime"),
            modified: field("ModifiedDateTime"),
        }
    }

    /// `Board.xml`: canvas dimensions plus the ordered slide-id list.
    fn parse_board(&self, warnings: &mut Vec<Warning>) -> Board {
        let Some(root) = self.read_document("Board.xml", warnings) else {
            return Board::default();
        };

        let slide_order = root
            .child("Slides")
            .map(|slides| {
                slides
                    .children_named("Item")
                    .filter_map(XmlNode::value)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Board {
            width: root.child_float("SlideWidth"),
            height: root.child_float("SlideHeight"),
            slide_order,
        }
    }

    /// `Reference.xml`: relationship entries into the resource registry.
    fn parse_references(&self, warnings: &mut Vec<Warning>) -> ResourceRegistry {
        let mut registry = ResourceRegistry::new();
        let Some(root) = self.read_document("Reference.xml", warnings) else {
            return registry;
        };

        if let Some(relationships) = root.child("Relationships") {
            for rel in relationships.children_named("Relationship") {
                if let (Some(id), Some(target)) = (rel.child_text("Id"), rel.child_text("Target")) {
                    registry.insert(id, target);
                }
            }
        }
        registry
    }

    /// Scan every file under `Slides/`, keyed by each slide's self-declared
    /// id.
    ///
    /// Files are visited in sorted filename order so the store is
    /// deterministic across platforms; on duplicate ids the later file wins
    /// and a warning is recorded.
    fn scan_slides(&self, warnings: &mut Vec<Warning>) -> BTreeMap<String, Slide> {
        let slides_dir = self.root.join("Slides");
        if !slides_dir.is_dir() {
            note(warnings, Warning::MissingFile("Slides".to_string()));
            return BTreeMap::new();
        }

        let mut paths: Vec<PathBuf> = match fs::read_dir(&slides_dir) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| {
                    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
                })
                .collect(),
            Err(e) => {
                note(warnings, malformed("Slides", e));
                return BTreeMap::new();
            }
        };
        paths.sort();

        let parse_one = |path: &PathBuf| -> (String, Result<Slide>) {
            let file = file_name(path);
            let slide = fs::read_to_string(path)
                .map_err(Error::from)
                .and_then(|content| parse_slide(&content));
            (file, slide)
        };

        let parsed: Vec<(String, Result<Slide>)> = if self.options.parallel {
            paths.par_iter().map(parse_one).collect()
        } else {
            paths.iter().map(parse_one).collect()
        };

        let mut store: BTreeMap<String, Slide> = BTreeMap::new();
        let mut declared_in: BTreeMap<String, String> = BTreeMap::new();
        for (file, result) in parsed {
            match result {
                Ok(slide) => {
                    if let Some(previous) = declared_in.insert(slide.id.clone(), file.clone()) {
                        note(
                            warnings,
                            Warning::DuplicateSlideId {
                                id: slide.id.clone(),
                                kept: file,
                                dropped: previous,
                            },
                        );
                    }
                    store.insert(slide.id.clone(), slide);
                }
                Err(e) => note(warnings, malformed(&file, e)),
            }
        }
        store
    }
}

/// Record a warning for the caller and surface it to the operator.
fn note(warnings: &mut Vec<Warning>, warning: Warning) {
    warn!("{warning}");
    warnings.push(warning);
}

fn malformed(file: &str, reason: impl std::fmt::Display) -> Warning {
    Warning::MalformedDocument {
        file: file.to_string(),
        reason: reason.to_string(),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
