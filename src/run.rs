use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::document::Document;
use crate::error::Error;
use crate::namer::Namer;

/// Configuration for a whole run.
///
/// This deserializes from the TOML configuration file the command line
/// tool takes, but can just as well be built in code.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Input files, processed in listed order.
    pub files: Vec<PathBuf>,
    /// Directory the converted files are written to. Created if absent,
    /// parents included.
    pub output_dir: PathBuf,
    /// Tags eligible for naming.
    pub tags_to_treat: Vec<String>,
    /// Also name matching elements that have no `name` attribute yet.
    #[serde(default)]
    pub treat_tags_without_name_attribute: bool,
    /// Initial counter value.
    #[serde(default = "default_start_counting_from")]
    pub start_counting_from: i64,
}

fn default_start_counting_from() -> i64 {
    1
}

/// Process all configured files into the output directory.
///
/// Files are handled strictly in order; the first failure aborts the
/// whole run with an [`Error::File`] identifying the failing path.
/// Input files are never modified, outputs overwrite any existing file
/// with the same base name.
pub fn run(config: &Config) -> Result<(), Error> {
    fs::create_dir_all(&config.output_dir)
        .map_err(|e| Error::from(e).in_file(&config.output_dir))?;
    let namer = Namer::new(
        config.tags_to_treat.iter().cloned(),
        config.treat_tags_without_name_attribute,
        config.start_counting_from,
    );
    for path in &config.files {
        process_file(path, &config.output_dir, &namer).map_err(|e| e.in_file(path))?;
    }
    Ok(())
}

fn process_file(path: &Path, output_dir: &Path, namer: &Namer) -> Result<(), Error> {
    log::info!("processing {}", path.display());
    let file_name = path
        .file_name()
        .ok_or_else(|| Error::MissingFileName(path.to_path_buf()))?;
    let data = fs::read(path)?;
    let mut document = Document::parse_bytes(&data)?;
    let assigned = namer.assign(&mut document);
    log::debug!("assigned {} name attributes", assigned);
    let mut buf = Vec::new();
    document.serialize(&mut buf)?;
    let output_path = output_dir.join(file_name);
    fs::write(&output_path, buf)?;
    log::info!("saved {}", output_path.display());
    Ok(())
}
