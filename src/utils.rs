use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::fs::{self, File};

use failure::Error;

use crate::error::IoFailure;

#[inline]
pub fn read_to_string(path: &Path) -> Result<String, IoFailure> {
    fs::read_to_string(path).map_err(|cause| IoFailure::reading(path, cause))
}

/// Render a single output file.
///
/// The parent directories are created first.
/// The writer is always flushed and closed before we return,
/// whether or not the renderer succeeded.
pub fn write_file<F>(path: &Path, render: F) -> Result<(), Error>
    where F: FnOnce(&mut BufWriter<File>) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|cause| IoFailure::writing(path, cause))?;
    }
    let file = File::create(path).map_err(|cause| IoFailure::writing(path, cause))?;
    let mut writer = BufWriter::new(file);
    let rendered = render(&mut writer);
    let flushed = writer.flush();
    drop(writer);
    rendered.and(flushed).map_err(|cause| IoFailure::writing(path, cause))?;
    Ok(())
}
