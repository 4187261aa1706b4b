//! Flat-file export of a generated dataset.
//!
//! One CSV per record family with a header row of field names, plus a JSON
//! metadata file. Each file is written to a temporary sibling first and
//! renamed into place, so a failed run never leaves a half-written file
//! under the final name.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use error_common::{SynthError, SynthResult};

use crate::orchestrator::{Dataset, GenerationMetadata};

pub const ICD10_FILE: &str = "raw_icd10.csv";
pub const CPT_FILE: &str = "raw_cpt.csv";
pub const PATIENTS_FILE: &str = "raw_patients.csv";
pub const PROVIDERS_FILE: &str = "raw_providers.csv";
pub const CLAIMS_FILE: &str = "raw_claims.csv";
pub const NOTES_FILE: &str = "raw_notes.csv";
pub const METADATA_FILE: &str = "generation_metadata.json";

/// Write every record family and the metadata under `output_dir`.
/// Returns the written paths in export order.
pub fn export_dataset(
    output_dir: &Path,
    dataset: &Dataset,
    metadata: &GenerationMetadata,
) -> SynthResult<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).map_err(|e| {
        SynthError::Export(format!("creating {}: {}", output_dir.display(), e))
    })?;

    let written = vec![
        write_csv(&output_dir.join(ICD10_FILE), &dataset.diagnosis_codes)?,
        write_csv(&output_dir.join(CPT_FILE), &dataset.procedure_codes)?,
        write_csv(&output_dir.join(PATIENTS_FILE), &dataset.patients)?,
        write_csv(&output_dir.join(PROVIDERS_FILE), &dataset.providers)?,
        write_csv(&output_dir.join(CLAIMS_FILE), &dataset.claims)?,
        write_csv(&output_dir.join(NOTES_FILE), &dataset.notes)?,
        write_metadata(&output_dir.join(METADATA_FILE), metadata)?,
    ];

    info!(
        output_dir = %output_dir.display(),
        files = written.len(),
        "Dataset exported"
    );
    Ok(written)
}

pub fn write_csv<T: Serialize>(path: &Path, records: &[T]) -> SynthResult<PathBuf> {
    let tmp_path = temp_sibling(path);
    commit(&tmp_path, path, write_csv_rows(&tmp_path, records))?;
    debug!(path = %path.display(), rows = records.len(), "Wrote CSV");
    Ok(path.to_path_buf())
}

pub fn write_metadata(path: &Path, metadata: &GenerationMetadata) -> SynthResult<PathBuf> {
    let tmp_path = temp_sibling(path);
    commit(&tmp_path, path, write_json(&tmp_path, metadata))?;
    debug!(path = %path.display(), "Wrote generation metadata");
    Ok(path.to_path_buf())
}

fn write_csv_rows<T: Serialize>(tmp_path: &Path, records: &[T]) -> SynthResult<()> {
    let mut writer = csv::Writer::from_path(tmp_path).map_err(|e| export_error(tmp_path, e))?;
    for record in records {
        writer.serialize(record).map_err(|e| export_error(tmp_path, e))?;
    }
    writer.flush().map_err(|e| export_error(tmp_path, e))
}

fn write_json(tmp_path: &Path, metadata: &GenerationMetadata) -> SynthResult<()> {
    let file = File::create(tmp_path).map_err(|e| export_error(tmp_path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, metadata).map_err(|e| export_error(tmp_path, e))?;
    writer.flush().map_err(|e| export_error(tmp_path, e))
}

/// Rename a finished temporary file into place; on any failure the
/// temporary file is removed so only complete files remain.
fn commit(tmp_path: &Path, path: &Path, written: SynthResult<()>) -> SynthResult<()> {
    let result = written
        .and_then(|()| fs::rename(tmp_path, path).map_err(|e| export_error(path, e)));
    if result.is_err() {
        discard_temp(tmp_path);
    }
    result
}

fn discard_temp(tmp_path: &Path) {
    match fs::remove_file(tmp_path) {
        Ok(()) => debug!(path = %tmp_path.display(), "Removed partial export"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(path = %tmp_path.display(), error = %e, "Could not remove partial export"),
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("export");
    path.with_file_name(format!("{}.tmp", file_name))
}

fn export_error(path: &Path, error: impl std::fmt::Display) -> SynthError {
    SynthError::Export(format!("{}: {}", path.display(), error))
}
