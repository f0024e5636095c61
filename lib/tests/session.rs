use rlifesim_lib::{CellState, Error, Grid, ImportRecord, Session, DEFAULT_SIZE};

fn session() -> Session {
    let mut session = Session::new(10, 10);
    session.import(vec![
        ImportRecord::new("Blinker", [(2, 1), (2, 2), (2, 3)]),
        ImportRecord::new("Too large", [(200, 200)]),
        ImportRecord::new("Glider", [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]),
    ]);
    session
}

#[test]
fn import_skips_bad_records() {
    let mut session = Session::default();
    let count = session.import(vec![
        ImportRecord::new("Blinker", [(2, 1), (2, 2), (2, 3)]),
        ImportRecord::new("Too large", [(200, 200)]),
        ImportRecord {
            title: String::from("Broken"),
            contents: vec![vec![1, 2, 3]],
        },
        ImportRecord::new("Glider", [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]),
    ]);
    assert_eq!(count, 2);
    assert!(session.registry().titles().eq(["Blinker", "Glider"]));
}

#[test]
fn load() -> Result<(), Error> {
    let session = session();
    session.load(1)?;
    let engine = session.simulation().engine();
    assert_eq!(engine.name(), Some("Glider"));
    assert_eq!(engine.grid().size(), (20, 20));
    assert_eq!(engine.grid().population(), 5);
    Ok(())
}

#[test]
fn load_out_of_range() {
    let session = session();
    assert_eq!(
        session.load(2),
        Err(Error::IndexOutOfRange { index: 2, len: 2 })
    );
}

#[test]
fn save_current() -> Result<(), Error> {
    let mut session = session();
    session.load(0)?;
    session.simulation().step();
    let saved = session.save_current("Vertical blinker");
    assert_eq!(saved.title, "Vertical blinker");
    assert_eq!(saved.grid.living, vec![(1, 2), (2, 2), (3, 2)]);
    assert_eq!(session.registry().len(), 3);
    assert_eq!(session.registry().title(0), Some("Vertical blinker"));
    assert_eq!(
        session.registry().grid(0),
        Some(&session.simulation().grid())
    );
    assert_eq!(
        session.simulation().engine().name(),
        Some("Vertical blinker")
    );
    Ok(())
}

#[test]
fn edit_and_commit() -> Result<(), Error> {
    let mut session = session();
    session.edit(0)?;
    assert_eq!(session.editor().name(), Some("Blinker"));
    session.editor_mut().toggle_cell((2, 1));
    session.editor_mut().toggle_cell((0, 0));
    let index = session.commit_edit("Edited", Some(0))?;
    assert_eq!(index, 0);
    assert_eq!(session.registry().len(), 2);
    assert_eq!(session.registry().title(0), Some("Edited"));
    let grid = session.registry().grid(0).cloned().unwrap_or_else(|| Grid::empty(0, 0));
    assert_eq!(grid.living_positions(), vec![(0, 0), (2, 2), (2, 3)]);
    assert_eq!(session.simulation().grid(), grid);
    assert_eq!(session.simulation().engine().name(), Some("Edited"));
    Ok(())
}

#[test]
fn commit_new() -> Result<(), Error> {
    let mut session = session();
    session.edit_new(6, 6);
    session.editor_mut().set_cell((3, 3), CellState::Alive);
    let index = session.commit_edit("Dot", None)?;
    assert_eq!(index, 2);
    assert_eq!(session.registry().title(2), Some("Dot"));
    assert_eq!(session.simulation().grid().size(), (6, 6));
    assert_eq!(
        session.commit_edit("Nowhere", Some(9)),
        Err(Error::IndexOutOfRange { index: 9, len: 3 })
    );
    Ok(())
}

#[test]
fn reset() -> Result<(), Error> {
    let session = session();
    session.load(1)?;
    session.reset();
    let grid = session.simulation().grid();
    assert_eq!(grid.size(), (DEFAULT_SIZE, DEFAULT_SIZE));
    assert_eq!(grid.population(), 0);
    Ok(())
}
