//! Archive extraction
//!
//! Unpacks the downloaded tar.bz2 source archive in place.

use bzip2::read::BzDecoder;
use std::fs::File;
use std::path::Path;

use crate::error::FetchError;

/// Extract a tar.bz2 archive into `dest`.
pub fn untar_bz2(archive: &Path, dest: &Path) -> Result<(), FetchError> {
    let to_err = |e: std::io::Error| FetchError::Extract {
        archive: archive.to_path_buf(),
        error: e.to_string(),
    };

    let file = File::open(archive).map_err(to_err)?;
    let decoder = BzDecoder::new(file);
    let mut tar = tar::Archive::new(decoder);
    tar.unpack(dest).map_err(to_err)?;
    Ok(())
}
