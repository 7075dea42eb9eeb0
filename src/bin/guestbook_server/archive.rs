use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;

use super::*;

/// Zip the given `(entry name, path)` pairs in memory.
pub(super) fn zip_files(files: &[(String, PathBuf)]) -> Result<Vec<u8>> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, path) in files {
        let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
        writer
            .start_file(name.as_str(), options)
            .with_context(|| format!("add {} to archive", name))?;
        writer
            .write_all(&bytes)
            .with_context(|| format!("write {} to archive", name))?;
    }
    let cursor = writer.finish().context("finish archive")?;
    Ok(cursor.into_inner())
}

pub(super) fn attachment(bytes: Vec<u8>, download_name: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", download_name),
            ),
        ],
        axum::body::Bytes::from(bytes),
    )
        .into_response()
}
