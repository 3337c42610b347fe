//! Character exporters and the file writer used by the export binary.

pub mod fantasy_grounds;
pub mod json_exporter;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cosmere_domain::CharacterRecord;

use crate::infrastructure::ports::{ClockPort, ExportError};

pub use fantasy_grounds::FantasyGroundsExporter;
pub use json_exporter::{CharacterSnapshot, JsonExporter};

pub const JSON_FILE_NAME: &str = "character.json";
pub const XML_FILE_NAME: &str = "character.xml";

/// Files produced by [`write_exports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub json: PathBuf,
    pub xml: PathBuf,
}

/// Write both exports into `dir`, creating it if needed.
pub fn write_exports(
    record: &CharacterRecord,
    clock: Arc<dyn ClockPort>,
    dir: &Path,
) -> Result<ExportPaths, ExportError> {
    fs::create_dir_all(dir).map_err(|e| ExportError::io(dir, e))?;

    let paths = ExportPaths {
        json: dir.join(JSON_FILE_NAME),
        xml: dir.join(XML_FILE_NAME),
    };

    let json = JsonExporter::new(clock).export(record)?;
    fs::write(&paths.json, json).map_err(|e| ExportError::io(&paths.json, e))?;

    let xml = FantasyGroundsExporter::new().export(record);
    fs::write(&paths.xml, xml).map_err(|e| ExportError::io(&paths.xml, e))?;

    tracing::info!(json = ?paths.json, xml = ?paths.xml, "Character exported");
    Ok(paths)
}
