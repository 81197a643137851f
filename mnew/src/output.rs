use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use snafu::ResultExt;

use crate::{Result, error};

/// Creates (or truncates) `path` and writes `contents` to it.
///
/// The file is flushed and closed before returning, so a failed flush is
/// reported as a write error rather than lost on drop.
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<()> {
    let file = File::create(path).context(error::OpenFileSnafu { path })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .context(error::WriteFileSnafu { path })?;
    writer.flush().context(error::WriteFileSnafu { path })?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote file");

    Ok(())
}
