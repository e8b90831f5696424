use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{ARTIFACT_EXTENSION, Sheet, SheetWriter};

/// Write a sheet as CSV, one record per row.
pub fn write_sheet_csv<W: Write>(writer: W, sheet: &Sheet) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in sheet.render() {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes sheets to CSV files.
///
/// The first sheet goes to the output path itself; every later sheet is
/// written next to it as `<stem>_<sheet stem>.csv` so one run with several
/// resource files never overwrites its own output.
pub struct CsvSheetWriter {
    output: PathBuf,
    written: usize,
}

impl CsvSheetWriter {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            written: 0,
        }
    }

    fn path_for(&self, sheet: &Sheet) -> PathBuf {
        if self.written == 0 {
            return self.output.clone();
        }
        let stem = self
            .output
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let sheet_stem = Path::new(&sheet.name)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| sheet.name.clone());
        self.output
            .with_file_name(format!("{}_{}.{}", stem, sheet_stem, ARTIFACT_EXTENSION))
    }
}

impl SheetWriter for CsvSheetWriter {
    fn write_sheet(&mut self, sheet: &Sheet) -> Result<PathBuf> {
        let path = self.path_for(sheet);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let file = File::create(&path)
            .with_context(|| format!("Cannot create file: {}", path.display()))?;
        write_sheet_csv(file, sheet)
            .with_context(|| format!("Failed to write sheet '{}' to {}", sheet.name, path.display()))?;
        self.written += 1;
        Ok(path)
    }
}
