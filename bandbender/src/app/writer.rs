//! Writes a `ProfileResult` to disk for an external plotting tool

use crate::error::as_f64;
use crate::profile::{Level, ProfileResult};
use nalgebra::RealField;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The file a profile of the device described at `device_path` is written to
///
/// The name is the device file stripped of its extension, placed in `directory`.
pub(crate) fn output_path(directory: &Path, device_path: &Path) -> PathBuf {
    let stem = device_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "profile".into());
    directory.join(format!("{stem}.csv"))
}

/// Writes one row per sample, `position,conduction,valence,fermi,vacuum`
pub(crate) fn write_profile<T: Copy + RealField>(
    profile: &ProfileResult<T>,
    path: &Path,
) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        // If the write directory does not exist then create it
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);

    let header = std::iter::once("position")
        .chain(Level::ALL.iter().map(Level::name))
        .collect::<Vec<_>>()
        .join(",");
    writeln!(file, "{header}")?;

    for sample in profile.samples() {
        write!(file, "{}", as_f64(sample.position))?;
        for level in Level::ALL {
            write!(file, ",{}", as_f64(sample.levels.get(level)))?;
        }
        writeln!(file)?;
    }
    file.flush()
}
