//! Boilerplate generator for Mercury modules.
//!
//! Renders a skeleton `<module>.m` source file and an optional `Makefile`
//! that builds it with `mmc --make`.

mod clock;
mod env;
mod makefile;
mod output;
mod template;

pub use clock::{asctime, current_date_string};
pub use env::{AUTHOR_VARIABLE, author_name};
pub use makefile::{MAKEFILE_NAME, emit_makefile, emit_makefile_in, render_makefile};
pub use template::{emit_template, emit_template_in, render_template, template_file_name};

#[derive(Debug, snafu::Snafu)]
pub struct Error(error::Error);
pub type Result<T> = std::result::Result<T, Error>;

mod error {
    use std::path::PathBuf;

    use snafu::Snafu;

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub(crate)))]
    pub(crate) enum Error {
        #[snafu(display("Couldn't open file for writing: {source}"))]
        OpenFile {
            path: PathBuf,
            source: std::io::Error,
        },

        #[snafu(display("Couldn't write to file {}: {source}", path.display()))]
        WriteFile {
            path: PathBuf,
            source: std::io::Error,
        },
    }
}
