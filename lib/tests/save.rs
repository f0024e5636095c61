use rlifesim_lib::{CellState, Error, Grid, GridSer, SavedGrid};
#[cfg(feature = "serde")]
use serde_json::json;

#[test]
fn transitional_states_are_saved_as_living() -> Result<(), Error> {
    let grid = Grid::from_living(5, 5, [(2, 1), (2, 2), (2, 3)]).next();
    assert_eq!(grid.get((1, 2)), CellState::Born);
    let restored = grid.ser().grid()?;
    assert_eq!(restored.living_positions(), grid.living_positions());
    assert_eq!(restored.get((1, 2)), CellState::Alive);
    assert_eq!(restored.get((2, 1)), CellState::Empty);
    Ok(())
}

#[test]
fn cells_outside_are_rejected() {
    let ser = GridSer {
        rows: 5,
        cols: 5,
        living: vec![(1, 1), (5, 0)],
    };
    assert_eq!(ser.grid(), Err(Error::CellOutOfBounds((5, 0), 5, 5)));
    let ser = GridSer {
        rows: 5,
        cols: 5,
        living: vec![(0, -1)],
    };
    assert_eq!(ser.grid(), Err(Error::CellOutOfBounds((0, -1), 5, 5)));
}

#[cfg(feature = "serde")]
#[test]
fn json_format() -> Result<(), Box<dyn std::error::Error>> {
    let saved = SavedGrid::new("Glider", &Grid::glider(4, 5));
    assert_eq!(
        serde_json::to_value(&saved)?,
        json!({
            "title": "Glider",
            "grid": {
                "rows": 4,
                "cols": 5,
                "living": [[0, 1], [1, 2], [2, 0], [2, 1], [2, 2]]
            }
        })
    );
    let parsed: SavedGrid = serde_json::from_value(serde_json::to_value(&saved)?)?;
    assert_eq!(parsed.restore()?, Grid::glider(4, 5));
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn cell_state_names() -> Result<(), serde_json::Error> {
    assert_eq!(serde_json::to_string(&CellState::Born)?, "\"born\"");
    assert_eq!(serde_json::from_str::<CellState>("\"died\"")?, CellState::Died);
    Ok(())
}
