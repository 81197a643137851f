use std::io::Write;

/// Help text naming both flags.
pub fn usage_text(program: &str) -> String {
    format!(
        "Usage: {program} [-mh] <module_name>\n  \
         -h, --help      Display this help message\n  \
         -m, --makefile  Also generate a Makefile\n"
    )
}

/// Prints the usage text to standard error and exits with status 1.
pub fn usage(program: &str) -> ! {
    die(&usage_text(program))
}

/// Prints `message` verbatim to standard error and exits with status 1.
pub fn die(message: &str) -> ! {
    let mut stderr = std::io::stderr().lock();
    let _ = stderr.write_all(message.as_bytes());
    let _ = stderr.flush();

    std::process::exit(1)
}
