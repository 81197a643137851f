use std::{ffi::OsString, path::Path};

use clap::{ArgAction, Parser, error::ContextKind, error::ContextValue, error::ErrorKind};

pub const DEFAULT_PROGRAM_NAME: &str = "mnew";

#[derive(Parser, Debug)]
#[command(
    name = DEFAULT_PROGRAM_NAME,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
struct Cli {
    #[arg(short, long, action = ArgAction::SetTrue)]
    help: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    makefile: bool,

    positionals: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub makefile: bool,
    pub help: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedArguments {
    pub options: Options,
    pub positionals: Vec<String>,
}

/// What the program should do after a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Usage,
    Generate { module: String, makefile: bool },
}

impl ParsedArguments {
    pub fn action(self) -> Action {
        if self.options.help {
            return Action::Usage;
        }

        match <[String; 1]>::try_from(self.positionals) {
            Ok([module]) => Action::Generate {
                module,
                makefile: self.options.makefile,
            },
            Err(_) => Action::Usage,
        }
    }
}

/// Parses the command line, program name excluded.
pub fn parse<I, T>(args: I) -> Result<ParsedArguments, String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv = std::iter::once(OsString::from(DEFAULT_PROGRAM_NAME))
        .chain(args.into_iter().map(Into::into));

    let cli = Cli::try_parse_from(argv).map_err(|err| reason(&err))?;

    Ok(ParsedArguments {
        options: Options {
            makefile: cli.makefile,
            help: cli.help,
        },
        positionals: cli.positionals,
    })
}

fn reason(err: &clap::Error) -> String {
    if err.kind() == ErrorKind::UnknownArgument {
        if let Some(ContextValue::String(token)) = err.get(ContextKind::InvalidArg) {
            return format!("unrecognized option: {token}");
        }
    }

    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

/// File name of `argv[0]`, falling back to the default name.
pub fn program_name(arg0: Option<OsString>) -> String {
    arg0.as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(module: &str, makefile: bool) -> Action {
        Action::Generate {
            module: module.to_string(),
            makefile,
        }
    }

    #[test]
    fn test_parse() {
        struct TestCase {
            name: &'static str,
            args: &'static [&'static str],
            expected: Result<ParsedArguments, &'static str>,
        }

        fn parsed(makefile: bool, help: bool, positionals: &[&str]) -> ParsedArguments {
            ParsedArguments {
                options: Options { makefile, help },
                positionals: positionals.iter().map(|s| s.to_string()).collect(),
            }
        }

        let test_cases = [
            TestCase {
                name: "no arguments",
                args: &[],
                expected: Ok(parsed(false, false, &[])),
            },
            TestCase {
                name: "single positional",
                args: &["hello"],
                expected: Ok(parsed(false, false, &["hello"])),
            },
            TestCase {
                name: "short makefile flag",
                args: &["-m", "hello"],
                expected: Ok(parsed(true, false, &["hello"])),
            },
            TestCase {
                name: "long makefile flag after positional",
                args: &["hello", "--makefile"],
                expected: Ok(parsed(true, false, &["hello"])),
            },
            TestCase {
                name: "short help flag",
                args: &["-h"],
                expected: Ok(parsed(false, true, &[])),
            },
            TestCase {
                name: "long help flag",
                args: &["--help", "hello"],
                expected: Ok(parsed(false, true, &["hello"])),
            },
            TestCase {
                name: "clustered flags",
                args: &["-mh", "hello"],
                expected: Ok(parsed(true, true, &["hello"])),
            },
            TestCase {
                name: "repeated flag",
                args: &["-m", "-m", "hello"],
                expected: Ok(parsed(true, false, &["hello"])),
            },
            TestCase {
                name: "positionals keep their order",
                args: &["foo", "-m", "bar", "baz"],
                expected: Ok(parsed(true, false, &["foo", "bar", "baz"])),
            },
            TestCase {
                name: "double dash ends options",
                args: &["--", "-m"],
                expected: Ok(parsed(false, false, &["-m"])),
            },
            TestCase {
                name: "unknown short flag",
                args: &["-x", "hello"],
                expected: Err("unrecognized option: -x"),
            },
            TestCase {
                name: "unknown long flag",
                args: &["--bogus", "hello"],
                expected: Err("unrecognized option: --bogus"),
            },
            TestCase {
                name: "version flag is not built in",
                args: &["--version"],
                expected: Err("unrecognized option: --version"),
            },
        ];

        for case in &test_cases {
            let result = parse(case.args.iter().copied());
            let expected = case.expected.clone().map_err(str::to_string);

            assert_eq!(result, expected, "Test '{}' failed", case.name);
        }
    }

    #[test]
    fn test_action() {
        struct TestCase {
            name: &'static str,
            args: &'static [&'static str],
            expected: Action,
        }

        let test_cases = [
            TestCase {
                name: "one module",
                args: &["hello"],
                expected: generate("hello", false),
            },
            TestCase {
                name: "one module with makefile",
                args: &["--makefile", "hello"],
                expected: generate("hello", true),
            },
            TestCase {
                name: "help wins over module",
                args: &["-m", "-h", "hello"],
                expected: Action::Usage,
            },
            TestCase {
                name: "missing module",
                args: &["-m"],
                expected: Action::Usage,
            },
            TestCase {
                name: "too many modules",
                args: &["foo", "bar"],
                expected: Action::Usage,
            },
        ];

        for case in &test_cases {
            let action = parse(case.args.iter().copied()).unwrap().action();

            assert_eq!(action, case.expected, "Test '{}' failed", case.name);
        }
    }

    #[test]
    fn test_program_name() {
        assert_eq!(program_name(Some("/usr/local/bin/mnew".into())), "mnew");
        assert_eq!(program_name(Some("gen".into())), "gen");
        assert_eq!(program_name(Some("".into())), DEFAULT_PROGRAM_NAME);
        assert_eq!(program_name(None), DEFAULT_PROGRAM_NAME);
    }
}
