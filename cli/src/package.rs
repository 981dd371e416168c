//! Input preparation: archive extraction and output-path derivation.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::info;
use zip::ZipArchive;

/// A resolved conversion request.
pub struct PreparedInput {
    /// Extracted package directory the loader reads from
    pub source: PathBuf,

    /// Output directory the artifact is written to
    pub output: PathBuf,

    /// Title derived from the input's base name
    pub title: String,
}

/// Resolve the input path into an extracted package directory and an
/// output location.
///
/// A `.enbx` file is a zip archive: it is extracted into the output
/// directory, which then doubles as the package source (the artifact lands
/// next to the extracted assets). A plain directory is used as-is. Without
/// an explicit output, the directory name derives from the input's base
/// name as `{name}_html`, beside the input.
pub fn prepare(
    input: &Path,
    output: Option<&Path>,
) -> Result<PreparedInput, Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("input not found: {}", input.display()).into());
    }

    let is_archive = input.is_file()
        && input
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("enbx"));

    let base = if is_archive {
        input.file_stem()
    } else {
        input.file_name()
    };
    let base = base
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "package".to_string());

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(format!("{base}_html")),
    };

    let source = if is_archive {
        fs::create_dir_all(&output)?;
        info!("extracting {} to {}", input.display(), output.display());
        let mut archive = ZipArchive::new(File::open(input)?)?;
        archive.extract(&output)?;
        output.clone()
    } else {
        input.to_path_buf()
    };

    Ok(PreparedInput {
        source,
        output,
        title: base,
    })
}
