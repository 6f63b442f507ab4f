//! Atomic file write operations.
//!
//! Problem files are written to a hidden temporary file in the target
//! directory and then renamed into place, so a planner watching the output
//! directory never picks up a half-written problem.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::error::OutputError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Writes `contents` to the file `path` inside `dir` atomically.
///
/// `path` must be a bare file name. `display_path` is only used in error
/// reports.
///
/// # Errors
///
/// Returns [`OutputError::WriteError`] if the file cannot be written.
pub(crate) fn write_atomic(
    dir: &Dir,
    path: &Utf8Path,
    display_path: &Utf8Path,
    contents: &str,
) -> Result<(), OutputError> {
    let mut components = path.components();
    let (Some(Utf8Component::Normal(file_name)), None) = (components.next(), components.next())
    else {
        return Err(OutputError::WriteError {
            path: display_path.to_path_buf(),
            message: "problem path must be a file name".to_owned(),
        });
    };
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let tmp_name = format!(".{file_name}.tmp.{}.{counter}", std::process::id());

    let write_error = |err: io::Error| OutputError::WriteError {
        path: display_path.to_path_buf(),
        message: err.to_string(),
    };

    if let Err(err) = write_to_temp_file(dir, &tmp_name, contents) {
        drop(dir.remove_file(&tmp_name));
        return Err(write_error(err));
    }
    if let Err(err) = dir.rename(&tmp_name, dir, file_name) {
        drop(dir.remove_file(&tmp_name));
        return Err(write_error(err));
    }
    sync_directory(dir);

    Ok(())
}

fn write_to_temp_file(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

fn sync_directory(dir: &Dir) {
    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        // Ignore sync failures; the rename already happened.
    }
}
