//! Persistence for batch results: JSON or bincode, optionally gzipped.
//!
//! Writes go through a temporary file and an atomic rename so an
//! interrupted save never truncates an existing snapshot. Loads sniff the
//! gzip magic bytes and fall back across formats.

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use std::io::{BufWriter, Cursor, Read, Write};
use std::path::Path;

use crate::profile_scope;
use crate::simulation::BatchResult;

/// On-disk encoding for a saved batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveFormat {
    Json,
    Binary,
}

pub fn save_results<P: AsRef<Path>>(
    path: P,
    result: &BatchResult,
    format: SaveFormat,
    compress: bool,
) -> std::io::Result<()> {
    profile_scope!("save_results");
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension({
        let mut os = path.extension().map(|e| e.to_os_string()).unwrap_or_default();
        os.push(".tmp");
        os
    });
    {
        let file = std::fs::File::create(&tmp_path)?;
        let writer = BufWriter::new(file);
        match (format, compress) {
            (SaveFormat::Json, false) => {
                serde_json::to_writer(writer, result)
                    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            }
            (SaveFormat::Json, true) => {
                let mut encoder = GzEncoder::new(writer, Compression::fast());
                serde_json::to_writer(&mut encoder, result)
                    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
                let mut writer = encoder.finish()?;
                writer.flush()?;
            }
            (SaveFormat::Binary, false) => {
                bincode::serialize_into(writer, result)
                    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            }
            (SaveFormat::Binary, true) => {
                let mut encoder = GzEncoder::new(writer, Compression::fast());
                bincode::serialize_into(&mut encoder, result)
                    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
                let mut writer = encoder.finish()?;
                writer.flush()?;
            }
        }
    }
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

pub fn load_results<P: AsRef<Path>>(path: P) -> std::io::Result<BatchResult> {
    profile_scope!("load_results");
    let data = std::fs::read(path.as_ref())?;
    if let Some(decoded) = maybe_decompress_gzip(&data)? {
        parse_result_bytes(&decoded)
    } else {
        parse_result_bytes(&data)
    }
}

fn parse_result_bytes(bytes: &[u8]) -> std::io::Result<BatchResult> {
    if let Ok(result) = serde_json::from_slice::<BatchResult>(bytes) {
        return Ok(result);
    }
    if let Ok(result) = bincode::deserialize::<BatchResult>(bytes) {
        return Ok(result);
    }
    Err(std::io::Error::new(
        std::io::ErrorKind::Other,
        "failed to parse batch result: not valid JSON or binary format",
    ))
}

fn maybe_decompress_gzip(data: &[u8]) -> std::io::Result<Option<Vec<u8>>> {
    if data.len() < 2 || data[0] != 0x1f || data[1] != 0x8b {
        return Ok(None);
    }

    let mut decoder = GzDecoder::new(Cursor::new(data));
    let mut decoded = Vec::new();
    decoder.read_to_end(&mut decoded)?;
    Ok(Some(decoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhysicalParameters;
    use crate::simulation::BatchRunner;

    fn small_batch() -> BatchResult {
        BatchRunner::new(PhysicalParameters::default(), 5, 17).run()
    }

    #[test]
    fn json_round_trip() {
        let dir = std::env::temp_dir().join("scatter_sim_io_json");
        let path = dir.join("batch.json");
        let result = small_batch();
        save_results(&path, &result, SaveFormat::Json, false).unwrap();
        let loaded = load_results(&path).unwrap();
        assert_eq!(loaded, result);
    }

    #[test]
    fn compressed_binary_round_trip() {
        let dir = std::env::temp_dir().join("scatter_sim_io_bin");
        let path = dir.join("batch.bin.gz");
        let result = small_batch();
        save_results(&path, &result, SaveFormat::Binary, true).unwrap();
        let loaded = load_results(&path).unwrap();
        assert_eq!(loaded, result);
    }

    #[test]
    fn garbage_input_is_an_error() {
        let err = parse_result_bytes(b"not a batch").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::Other);
    }
}
