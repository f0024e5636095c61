//! The text-based user interface.

use crate::{args::Args, file};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{style, Color, PrintStyledContent, Stylize},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use rlifesim_lib::{CellState, Coord, Session};
use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

/// The fastest automatic stepping allowed by `+`.
const MIN_RATE: Duration = Duration::from_millis(10);

/// The slowest automatic stepping allowed by `-`.
const MAX_RATE: Duration = Duration::from_secs(10);

/// Used by `space` when the simulation started paused.
const DEFAULT_RATE: Duration = Duration::from_millis(200);

/// How long to wait for a key before checking the grid again.
const POLL: Duration = Duration::from_millis(20);

const HELP: &str = "[space] run/pause  [n] step  [+/-] speed  [ [ ] ] configs  \
                    [arrows] move  [x] toggle  [s] save  [r] reset  [q] quit";

struct App {
    session: Session,

    /// Interval to use when stepping automatically.
    rate: Duration,

    /// Index of the configuration last loaded from the registry.
    selected: Option<usize>,

    /// The cell edited by `x`.
    cursor: Coord,

    /// File of saved grids.
    save: PathBuf,

    /// Number of untitled grids saved so far.
    untitled: usize,

    /// Set by a listener whenever the grid changes.
    dirty: Arc<AtomicBool>,

    /// Shown in the bottom bar until the next key.
    message: Option<String>,
}

impl App {
    fn new(mut session: Session, args: &Args) -> Self {
        let dirty = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&dirty);
        session
            .simulation()
            .engine()
            .subscribe(move |_| flag.store(true, Ordering::Relaxed));

        let rate = if args.refresh_rate.is_zero() {
            DEFAULT_RATE
        } else {
            args.refresh_rate.clamp(MIN_RATE, MAX_RATE)
        };
        if !args.refresh_rate.is_zero() {
            session.simulation_mut().set_refresh_rate(rate);
        }

        let selected = args
            .load
            .as_deref()
            .and_then(|title| session.registry().position(title));

        App {
            session,
            rate,
            selected,
            cursor: (0, 0),
            save: args.save.clone(),
            untitled: 0,
            dirty,
            message: None,
        }
    }

    fn toggle_running(&mut self) {
        let simulation = self.session.simulation_mut();
        if simulation.is_running() {
            simulation.stop();
        } else {
            simulation.set_refresh_rate(self.rate);
        }
    }

    fn change_rate(&mut self, faster: bool) {
        self.rate = if faster {
            (self.rate / 2).max(MIN_RATE)
        } else {
            (self.rate * 2).min(MAX_RATE)
        };
        let simulation = self.session.simulation_mut();
        if simulation.is_running() {
            simulation.set_refresh_rate(self.rate);
        }
        self.message = Some(format!("Stepping every {:?}.", self.rate));
    }

    /// Loads the configuration `offset` places after the selected one.
    fn select(&mut self, offset: isize) {
        let len = self.session.registry().len();
        if len == 0 {
            self.message = Some(String::from("No configurations."));
            return;
        }
        let index = match self.selected {
            Some(i) => (i as isize + offset).rem_euclid(len as isize) as usize,
            None if offset < 0 => len - 1,
            None => 0,
        };
        match self.session.load(index) {
            Ok(()) => {
                self.selected = Some(index);
                self.cursor = (0, 0);
                self.message = self
                    .session
                    .registry()
                    .title(index)
                    .map(|title| format!("Loaded {} ({}/{}).", title, index + 1, len));
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn save(&mut self) {
        let name = self.session.simulation().engine().name().map(String::from);
        let title = name.unwrap_or_else(|| {
            self.untitled += 1;
            format!("Untitled {}", self.untitled)
        });
        let saved = self.session.save_current(title.clone());
        self.selected = Some(0);
        self.message = Some(match file::write_saved(&self.save, saved) {
            Ok(()) => format!("Saved {} to {}.", title, self.save.display()),
            Err(e) => format!("Failed to save {}: {}", title, e),
        });
    }

    fn reset(&mut self) {
        self.session.reset();
        self.selected = None;
        self.cursor = (0, 0);
    }

    fn move_cursor(&mut self, (dr, dc): Coord) {
        let (rows, cols) = self.session.simulation().engine().grid().size();
        if rows == 0 || cols == 0 {
            return;
        }
        let (row, col) = self.cursor;
        self.cursor = (
            (row + dr).rem_euclid(rows as i32),
            (col + dc).rem_euclid(cols as i32),
        );
    }

    /// Returns `true` when the user wants to quit.
    fn handle(&mut self, key: KeyEvent) -> bool {
        self.message = None;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char(' ') => self.toggle_running(),
            KeyCode::Char('n') => {
                self.session.simulation().step();
            }
            KeyCode::Char('+' | '=') => self.change_rate(true),
            KeyCode::Char('-') => self.change_rate(false),
            KeyCode::Char(']') => self.select(1),
            KeyCode::Char('[') => self.select(-1),
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('x') | KeyCode::Enter => {
                self.session.simulation().toggle_cell(self.cursor);
            }
            KeyCode::Up => self.move_cursor((-1, 0)),
            KeyCode::Down => self.move_cursor((1, 0)),
            KeyCode::Left => self.move_cursor((0, -1)),
            KeyCode::Right => self.move_cursor((0, 1)),
            _ => {}
        }
        false
    }

    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        let (width, height) = (width as usize, height as usize);
        let running = self.session.simulation().is_running();

        let mut engine = self.session.simulation().engine();
        let counts = engine.update_cell_status_counts();
        let grid = engine.grid();

        let top = format!(
            "Gen: {}  Size: {}x{}  Cells: {}  Born: {}  Died: {}  {}",
            engine.generation(),
            grid.rows(),
            grid.cols(),
            counts.living(),
            counts.born,
            counts.died,
            engine.name().unwrap_or("(untitled)"),
        );
        queue!(
            out,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            PrintStyledContent(style(fit(&top, width)).reverse())
        )?;

        for row in 0..grid.rows().min(height.saturating_sub(2)) {
            queue!(out, cursor::MoveTo(0, row as u16 + 1))?;
            for col in 0..grid.cols().min(width) {
                let coord = (row as i32, col as i32);
                let state = grid[coord];
                let mut content = match state {
                    CellState::Born => style(state).with(Color::Green),
                    CellState::Died => style(state).with(Color::Red),
                    _ => style(state),
                };
                if coord == self.cursor {
                    content = content.reverse();
                }
                queue!(out, PrintStyledContent(content))?;
            }
        }

        let bottom = match &self.message {
            Some(message) => message.clone(),
            None if running => format!("Running every {:?}.  {}", self.rate, HELP),
            None => format!("Paused.  {}", HELP),
        };
        queue!(
            out,
            cursor::MoveTo(0, height.saturating_sub(1) as u16),
            PrintStyledContent(style(fit(&bottom, width)).reverse())
        )?;
        out.flush()
    }

    fn main_loop(&mut self, out: &mut impl Write) -> io::Result<()> {
        let mut redraw = true;
        loop {
            if self.dirty.swap(false, Ordering::Relaxed) || redraw {
                self.draw(out)?;
                redraw = false;
            }
            if event::poll(POLL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle(key) {
                            return Ok(());
                        }
                        redraw = true;
                    }
                    Event::Resize(..) => redraw = true,
                    _ => {}
                }
            }
        }
    }
}

/// Cuts or pads a line to the width of the terminal.
fn fit(s: &str, width: usize) -> String {
    format!("{:width$}", s.chars().take(width).collect::<String>())
}

/// Runs the simulation in the terminal, then prints the last grid.
pub(crate) fn run(session: Session, args: &Args) -> Result<(), Box<dyn Error>> {
    let mut app = App::new(session, args);
    let mut stdout = io::stdout();

    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    let result = app.main_loop(&mut stdout);
    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result?;

    app.session.simulation_mut().stop();
    let engine = app.session.simulation().engine();
    debug!("Quit at generation {}.", engine.generation());
    println!("Generation {}:", engine.generation());
    print!("{}", engine.grid());
    Ok(())
}
