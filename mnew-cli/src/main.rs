mod cli;
mod usage;

use cli::Action;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::ERROR)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args_os();
    let program = cli::program_name(args.next());

    let parsed = match cli::parse(args) {
        Ok(parsed) => parsed,
        Err(reason) => {
            eprintln!("{program}: {reason}");
            usage::usage(&program)
        }
    };
    tracing::debug!(?parsed, "parsed arguments");

    match parsed.action() {
        Action::Usage => usage::usage(&program),
        Action::Generate { module, makefile } => generate(&module, makefile),
    }
}

/// Emits the module template and optionally the Makefile.
///
/// Emission failures are reported on standard output and do not stop the
/// remaining steps.
fn generate(module: &str, makefile: bool) {
    let date = mnew::current_date_string();
    let author = mnew::author_name();
    tracing::debug!(module, author = %author, "generating module");

    if let Err(err) = mnew::emit_template(module, &author, &date) {
        tracing::warn!(module, "template not written");
        println!("{err}");
    }

    if makefile {
        if let Err(err) = mnew::emit_makefile(module) {
            tracing::warn!(module, "makefile not written");
            println!("{err}");
        }
    }
}
