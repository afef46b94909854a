//! Command-line definition for `todocolor`.

use log::LevelFilter;
use std::path::{Path, PathBuf};
use todocolor_core::{
    parse_verbosity, resolve_todo_path, Options, OptionsResult, ReadMode, DEFAULT_VERBOSITY,
};

/// Print a todo.txt file with highlighted @context and +project tags.
#[derive(clap::Parser, Debug)]
#[command(name = "todocolor")]
#[command(version)]
#[command(about = "Print a todo.txt file with highlighted @context and +project tags")]
#[command(after_help = "\
ENVIRONMENT:
  TODO_FILE   Todo file to read when --file is not given
  TERM=dumb   Disable color escapes
  NO_COLOR    Disable color escapes")]
pub struct Cli {
    /// Silence all log output on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Stderr log level: off|error|warn|info|debug|trace, or -9..9
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        value_parser = parse_verbosity,
        allow_negative_numbers = true
    )]
    pub verbosity: Option<LevelFilter>,

    /// Read the file line by line, keeping blank lines
    #[arg(short, long)]
    pub getline: bool,

    /// Todo file (default: ~/Dropbox/todo/todo.txt)
    #[arg(short, long, env = "TODO_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Resolves run options; `home` backs the default todo path.
    pub fn into_options(self, home: Option<&Path>) -> OptionsResult<Options> {
        let file = resolve_todo_path(self.file, home)?;
        Ok(Options {
            file,
            quiet: self.quiet,
            verbosity: self.verbosity.unwrap_or(DEFAULT_VERBOSITY),
            read_mode: if self.getline {
                ReadMode::Lines
            } else {
                ReadMode::Contents
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};
    use log::LevelFilter;
    use std::path::{Path, PathBuf};
    use todocolor_core::{OptionsError, ReadMode};

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_map_onto_options() {
        let cli = Cli::try_parse_from([
            "todocolor",
            "-q",
            "-v",
            "debug",
            "-g",
            "-f",
            "/tmp/list.txt",
        ])
        .unwrap();
        let options = cli.into_options(None).unwrap();

        assert!(options.quiet);
        assert_eq!(options.verbosity, LevelFilter::Debug);
        assert_eq!(options.read_mode, ReadMode::Lines);
        assert_eq!(options.file, PathBuf::from("/tmp/list.txt"));
        assert_eq!(options.log_level(), LevelFilter::Off);
    }

    #[test]
    fn negative_numeric_verbosity_is_accepted() {
        let cli = Cli::try_parse_from(["todocolor", "-v", "-1", "-f", "t.txt"]).unwrap();
        assert_eq!(cli.verbosity, Some(LevelFilter::Warn));
    }

    #[test]
    fn unknown_verbosity_is_a_parse_error() {
        assert!(Cli::try_parse_from(["todocolor", "--verbosity", "shout"]).is_err());
    }

    #[test]
    fn defaults_fall_back_to_home_todo() {
        let cli = Cli {
            quiet: false,
            verbosity: None,
            getline: false,
            file: None,
        };
        let options = cli.into_options(Some(Path::new("/home/u"))).unwrap();

        assert_eq!(options.file, PathBuf::from("/home/u/Dropbox/todo/todo.txt"));
        assert_eq!(options.verbosity, LevelFilter::Error);
        assert_eq!(options.read_mode, ReadMode::Contents);
    }

    #[test]
    fn missing_home_and_file_is_reported() {
        let cli = Cli {
            quiet: false,
            verbosity: None,
            getline: false,
            file: None,
        };
        assert_eq!(cli.into_options(None), Err(OptionsError::MissingHome));
    }
}
