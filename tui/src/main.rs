mod args;
mod file;
#[cfg(feature = "tui")]
mod tui;

use args::{Args, Pattern};
use env_logger::Env;
use log::{info, warn};
use rlifesim_lib::{Grid, ImportRecord, Session};
use std::{error::Error, process};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Builds the session described by the arguments.
fn session(args: &Args) -> Result<Session, Box<dyn Error>> {
    let mut session = Session::new(args.rows, args.cols);

    let grid = match args.pattern {
        Pattern::Empty => Grid::empty(args.rows, args.cols),
        Pattern::Glider => Grid::glider(args.rows, args.cols),
        Pattern::Random => {
            Grid::random(args.rows, args.cols, args.density, &mut rand::thread_rng())
        }
    };
    session.simulation().set_grid(grid);

    let records: Vec<ImportRecord> = match &args.configs {
        Some(path) => file::read_records(path)?,
        None => Vec::new(),
    };
    session.import(records);

    for saved in file::read_saved(&args.save)? {
        match saved.restore() {
            Ok(grid) => {
                session.registry_mut().append(saved.title, grid);
            }
            Err(e) => warn!("Skipping saved grid {}: {}", saved.title, e),
        }
    }

    if let Some(title) = &args.load {
        let index = session
            .registry()
            .position(title)
            .ok_or_else(|| format!("no configuration titled {:?}", title))?;
        session.load(index)?;
    }

    Ok(session)
}

/// Prints the generations until one repeats.
fn print_generations(session: &Session, max_gen: Option<u64>) {
    let grid = session.simulation().grid();
    println!("Generation 0:");
    print!("{}", grid);

    let mut generations = grid.generations();
    let mut gen = 0;
    while max_gen.map_or(true, |max| gen < max) {
        match generations.next() {
            Some(grid) => {
                gen += 1;
                println!("Generation {}:", gen);
                print!("{}", grid);
            }
            None => {
                println!("Generation {} repeats an earlier one.", gen + 1);
                return;
            }
        }
    }
    info!("Stopped after {} generations.", gen);
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let session = session(args)?;

    #[cfg(feature = "tui")]
    if !args.no_tui {
        return tui::run(session, args);
    }

    print_generations(&session, args.max_gen);
    Ok(())
}
