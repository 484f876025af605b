use crate::error::Result;
use crate::icondir::serialize;
use crate::payload::{build_payload, ImagePayload};
use crate::resample::resample;
use crate::size::TargetSize;
use crate::source::SourceImage;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::ffi::{OsStr, OsString};
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};

//===========================================================================//

/// Converts a source image into the bytes of an ICO file holding one entry
/// for each size in [`TargetSize::ALL`].
pub fn convert(source: &SourceImage) -> Result<Vec<u8>> {
    let payloads = render_payloads(source)?;
    let num_entries = payloads.len();
    let output = serialize(payloads)?;
    log::info!(
        "converted {}x{} image into {}-entry ICO ({} bytes)",
        source.width(),
        source.height(),
        num_entries,
        output.len()
    );
    Ok(output)
}

/// Decodes a PNG or JPEG file held in memory and converts it.
pub fn convert_bytes(bytes: &[u8]) -> Result<Vec<u8>> {
    convert(&SourceImage::decode(bytes)?)
}

/// Reads a PNG or JPEG file from disk and converts it.
pub fn convert_path<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    convert(&SourceImage::open(path)?)
}

/// Converts the image at `source_path` and writes the ICO file to
/// `dest_path`.  The destination's directory must already exist.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    source_path: P,
    dest_path: Q,
) -> Result<()> {
    let output = convert_path(source_path)?;
    write_icon_file(dest_path, &output)
}

/// Resamples and encodes the source once per catalog size.  The result is
/// always in catalog order, even when the sizes are rendered in parallel.
pub fn render_payloads(
    source: &SourceImage,
) -> Result<Vec<(TargetSize, ImagePayload)>> {
    #[cfg(feature = "parallel")]
    let payloads = TargetSize::ALL[..]
        .par_iter()
        .map(|&size| render_one(source, size))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let payloads =
        TargetSize::ALL.iter().map(|&size| render_one(source, size)).collect();
    payloads
}

fn render_one(
    source: &SourceImage,
    size: TargetSize,
) -> Result<(TargetSize, ImagePayload)> {
    let image = resample(source, size);
    let payload = build_payload(&image)?;
    Ok((size, payload))
}

//===========================================================================//

/// Returns where an ICO made from `source_path` goes by default: a file with
/// the same stem and an `.ico` extension, in an `icon` directory next to the
/// source.  The `icon` directory is not created.
pub fn default_output_path<P: AsRef<Path>>(source_path: P) -> PathBuf {
    let source_path = source_path.as_ref();
    let dir = source_path.parent().unwrap_or_else(|| Path::new(""));
    let stem = source_path.file_stem().unwrap_or_else(|| OsStr::new("icon"));
    let mut file_name = stem.to_os_string();
    file_name.push(".ico");
    dir.join("icon").join(file_name)
}

/// Writes `bytes` to `path`, replacing any existing file.  The data is
/// written to a temporary file in the same directory and renamed into place
/// once it has been flushed, so `path` never holds a partial ICO file.
pub fn write_icon_file<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let mut temp = TempFile { path: temp_path_for(path), persisted: false };
    let file =
        OpenOptions::new().write(true).create_new(true).open(&temp.path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    let file = writer.into_inner().map_err(|error| error.into_error())?;
    file.sync_all()?;
    drop(file);
    fs::rename(&temp.path, path)?;
    temp.persisted = true;
    log::info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Returns a hidden sibling of `path` that no other write in this process,
/// or in any other live process, will pick.
fn temp_path_for(path: &Path) -> PathBuf {
    static NEXT_ID: AtomicUsize = AtomicUsize::new(0);
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let mut file_name = OsString::from(".");
    file_name.push(path.file_name().unwrap_or_else(|| OsStr::new("icon.ico")));
    file_name.push(format!(".{}.{}.tmp", process::id(), id));
    path.with_file_name(file_name)
}

/// Removes the file at `path` when dropped, unless it has been persisted.
struct TempFile {
    path: PathBuf,
    persisted: bool,
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if self.persisted {
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(ref error) if error.kind() == io::ErrorKind::NotFound => {}
            Err(error) => log::warn!(
                "failed to remove temporary file {}: {}",
                self.path.display(),
                error
            ),
        }
    }
}

//===========================================================================//


//===========================================================================//
