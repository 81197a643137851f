use std::path::{Path, PathBuf};

use crate::{Result, output::write_file};

const RULE: &str =
    "%-----------------------------------------------------------------------------%";

/// Name of the source file generated for `module`.
pub fn template_file_name(module: &str) -> PathBuf {
    PathBuf::from(format!("{module}.m"))
}

/// Renders the skeleton Mercury module.
///
/// `date` is spliced in verbatim after `Date: ` and is expected to carry
/// its own trailing newline, as [`crate::asctime`] output does.
pub fn render_template(module: &str, author: &str, date: &str) -> String {
    format!(
        r#"{RULE}
% File: {module}.m
% Author: {author}
% Date: {date}% Purpose:
{RULE}

:- module {module}.

:- interface.

:- import_module io.

:- pred main(io::di, io::uo) is det.

{RULE}

:- implementation.

main(!IO) :-
    % Your code here.
    usage(!IO).

:- pred usage(io::di, io::uo) is erroneous.

usage(!IO) :-
    Message = "Usage: " ++ "{module}" ++ " <args>",
    die(Message, !IO).

:- pred die(string::in, io::di, io::uo) is erroneous.

die(Message, !IO) :-
    io.stderr_stream(Stderr, !IO),
    io.write_string(Stderr, Message, !IO),
    die.

:- pred die is erroneous.

:- pragma foreign_proc("C",
    die,
    [will_not_call_mercury, promise_pure],
"
    exit(1);
").

{RULE}
:- end_module {module}.
{RULE}
"#
    )
}

/// Writes `<module>.m` into the current directory.
pub fn emit_template(module: &str, author: &str, date: &str) -> Result<()> {
    emit_template_in(Path::new("."), module, author, date)
}

/// Writes `<module>.m` into `dir`, replacing any existing file.
pub fn emit_template_in(dir: &Path, module: &str, author: &str, date: &str) -> Result<()> {
    let path = dir.join(template_file_name(module));
    tracing::debug!(module, path = %path.display(), "emitting template");

    write_file(&path, &render_template(module, author, date))
}
