use std::fs;
use std::path::PathBuf;

use lid_core::domain::ExportDocument;
use lid_core::error::{ExtractError, Result};
use lid_core::ports::ExportWriter;

/// Where the export lands, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "lid_data.json";

/// JSON file implementation of the ExportWriter trait.
///
/// Writes the document as pretty-printed JSON, replacing any existing file
/// at the path in full. The write is not crash-atomic.
pub struct JsonWriterAdapter {
    output_path: PathBuf,
}

impl JsonWriterAdapter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }
}

impl ExportWriter for JsonWriterAdapter {
    fn write(&self, document: &ExportDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(document)
            .map_err(|e| ExtractError::io(e.to_string()))?;
        fs::write(&self.output_path, json).map_err(|e| ExtractError::io(e.to_string()))?;
        Ok(())
    }
}
