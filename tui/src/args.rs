//! Parsing command-line arguments.

use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, Command,
    Error,
};
use std::{path::PathBuf, time::Duration};

/// The starting grid of the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Pattern {
    Empty,
    Glider,
    Random,
}

/// A struct to store the parse results.
#[derive(Clone, Debug)]
pub(crate) struct Args {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) pattern: Pattern,
    pub(crate) density: f64,
    pub(crate) refresh_rate: Duration,
    pub(crate) configs: Option<PathBuf>,
    pub(crate) load: Option<String>,
    pub(crate) save: PathBuf,
    pub(crate) max_gen: Option<u64>,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

impl Args {
    fn command() -> Command {
        let command = Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
            .long_about(
                "Conway's Game of Life on a grid whose edges wrap around\n\
                 \n\
                 Configurations can be imported from a JSON, YAML or TOML file \
                 (chosen by extension), as a list of records\n\
                 `{title, contents}` where `contents` lists the living cells \
                 as `[row, column]` pairs.\n\
                 TOML files put the records in an array of tables named `configuration`.\n\
                 \n\
                 The grid is displayed in a Plaintext-like format.\n\
                 * Living cells are represented by `*`;\n\
                 * Other cells are represented by `.`.\n",
            )
            .arg(
                Arg::new("ROWS")
                    .help("Number of rows")
                    .index(1)
                    .default_value("20")
                    .value_parser(value_parser!(u32).range(1..)),
            )
            .arg(
                Arg::new("COLS")
                    .help("Number of columns")
                    .index(2)
                    .default_value("20")
                    .value_parser(value_parser!(u32).range(1..)),
            )
            .arg(
                Arg::new("PATTERN")
                    .help("Starting pattern")
                    .short('p')
                    .long("pattern")
                    .value_parser(["empty", "glider", "random", "e", "g", "r"])
                    .default_value("glider"),
            )
            .arg(
                Arg::new("DENSITY")
                    .help("Probability for a cell to be alive in a random pattern")
                    .short('d')
                    .long("density")
                    .default_value("0.3")
                    .value_parser(value_parser!(f64)),
            )
            .arg(
                Arg::new("RATE")
                    .help("Milliseconds between two generations")
                    .long_help(
                        "Milliseconds between two generations\n\
                         If this value is set to 0, the simulation starts paused.\n",
                    )
                    .short('r')
                    .long("rate")
                    .default_value("200")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("CONFIGS")
                    .help("File of configurations to import")
                    .short('c')
                    .long("configs")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("LOAD")
                    .help("Title of the configuration to start with")
                    .short('l')
                    .long("load"),
            )
            .arg(
                Arg::new("SAVE")
                    .help("File where named grids are saved")
                    .long_help(
                        "File where named grids are saved\n\
                         Grids saved there earlier are loaded as configurations.\n",
                    )
                    .short('s')
                    .long("save")
                    .default_value("saved.json")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("MAX")
                    .help("Maximal number of generations to print")
                    .long_help(
                        "Maximal number of generations to print\n\
                         Printing always stops when a generation repeats.\n\
                         If this value is set to 0, it means there is no limitation.\n",
                    )
                    .short('m')
                    .long("max")
                    .default_value("0")
                    .value_parser(value_parser!(u64)),
            );

        #[cfg(feature = "tui")]
        let command = command.arg(
            Arg::new("NOTUI")
                .help("Prints the generations instead of entering the TUI")
                .short('n')
                .long("no-tui")
                .action(clap::ArgAction::SetTrue),
        );

        command
    }

    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        let matches = Args::command().try_get_matches()?;

        let rows = matches.get_one::<u32>("ROWS").copied().unwrap_or(20) as usize;
        let cols = matches.get_one::<u32>("COLS").copied().unwrap_or(20) as usize;
        let pattern = match matches.get_one::<String>("PATTERN").map(String::as_str) {
            Some("empty" | "e") => Pattern::Empty,
            Some("random" | "r") => Pattern::Random,
            _ => Pattern::Glider,
        };
        let density = matches.get_one::<f64>("DENSITY").copied().unwrap_or(0.3);
        let refresh_rate =
            Duration::from_millis(matches.get_one::<u64>("RATE").copied().unwrap_or(200));
        let configs = matches.get_one::<PathBuf>("CONFIGS").cloned();
        let load = matches.get_one::<String>("LOAD").cloned();
        let save = matches
            .get_one::<PathBuf>("SAVE")
            .cloned()
            .unwrap_or_else(|| PathBuf::from("saved.json"));
        let max_gen = match matches.get_one::<u64>("MAX").copied() {
            None | Some(0) => None,
            i => i,
        };

        Ok(Args {
            rows,
            cols,
            pattern,
            density,
            refresh_rate,
            configs,
            load,
            save,
            max_gen,
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
        })
    }
}
