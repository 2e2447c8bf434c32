// crates/isocodes-core/src/loader/common_io.rs
use crate::common::IsoCode;
use crate::error::{IsoError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a catalog document for reading.
///
/// With the `compact` feature, files ending in `.gz` are decompressed on
/// the fly; the caller only ever sees JSON bytes.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        IsoError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if is_gzip(path) {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

#[cfg_attr(not(feature = "compact"), allow(dead_code))]
fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Candidate files for `code` inside `dir`, in preference order.
pub fn candidate_paths(dir: &Path, code: IsoCode) -> Vec<PathBuf> {
    let plain = dir.join(code.file_name());
    let mut out = vec![plain.clone()];
    if cfg!(feature = "compact") {
        let mut gz = plain.into_os_string();
        gz.push(".gz");
        out.push(PathBuf::from(gz));
    }
    out
}

/// First existing candidate for `code` in `dir`.
pub fn dataset_path(dir: &Path, code: IsoCode) -> Result<PathBuf> {
    candidate_paths(dir, code)
        .into_iter()
        .find(|p| p.is_file())
        .ok_or_else(|| {
            IsoError::NotFound(format!(
                "no {} document in {}",
                code.file_name(),
                dir.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_json_comes_first() {
        let paths = candidate_paths(Path::new("/data"), IsoCode::I4217);
        assert_eq!(paths[0], PathBuf::from("/data/iso4217.json"));
        #[cfg(feature = "compact")]
        assert_eq!(paths[1], PathBuf::from("/data/iso4217.json.gz"));
    }

    #[test]
    fn missing_directory_is_not_found() {
        let err = dataset_path(Path::new("/definitely/not/here"), IsoCode::I3166_1).unwrap_err();
        assert!(matches!(err, IsoError::NotFound(_)));
    }

    #[test]
    fn gzip_detection_uses_extension() {
        assert!(is_gzip(Path::new("iso4217.json.gz")));
        assert!(is_gzip(Path::new("iso4217.json.GZ")));
        assert!(!is_gzip(Path::new("iso4217.json")));
    }
}
