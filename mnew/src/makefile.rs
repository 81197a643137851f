use std::path::Path;

use crate::{Result, output::write_file};

pub const MAKEFILE_NAME: &str = "Makefile";

/// Renders a Makefile that builds `module` with `mmc --make`.
pub fn render_makefile(module: &str) -> String {
    format!(
        "MC = mmc\n\
         MLFLAGS =\n\
         \n\
         ALL: {module}\n\
         \n\
         {module}: {module}.m\n\
         \t$(MC) --make $(MLFLAGS) {module}\n\
         \n\
         clean:\n\
         \t$(MC) --make clean\n\
         \n\
         .PHONY: ALL clean\n"
    )
}

/// Writes `Makefile` into the current directory.
pub fn emit_makefile(module: &str) -> Result<()> {
    emit_makefile_in(Path::new("."), module)
}

/// Writes `Makefile` into `dir`, replacing any existing file.
pub fn emit_makefile_in(dir: &Path, module: &str) -> Result<()> {
    let path = dir.join(MAKEFILE_NAME);
    tracing::debug!(module, path = %path.display(), "emitting makefile");

    write_file(&path, &render_makefile(module))
}
