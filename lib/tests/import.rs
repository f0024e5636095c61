use rlifesim_lib::{CellState, Error, ImportPolicy, ImportRecord};

fn record(living: &[(i32, i32)]) -> ImportRecord {
    ImportRecord::new("Test", living.iter().copied())
}

#[test]
fn small_records_get_double_size() -> Result<(), Error> {
    let grid = record(&[(1, 2), (3, 4)]).grid()?;
    assert_eq!(grid.size(), (20, 20));
    assert_eq!(grid.living_positions(), vec![(1, 2), (3, 4)]);

    let grid = record(&[(0, 60)]).grid()?;
    assert_eq!(grid.size(), (120, 120));

    let grid = record(&[(43, 5)]).grid()?;
    assert_eq!(grid.size(), (100, 100));
    Ok(())
}

#[test]
fn large_records_get_about_their_size() -> Result<(), Error> {
    assert_eq!(record(&[(75, 0)]).grid()?.size(), (80, 80));
    assert_eq!(record(&[(3, 118)]).grid()?.size(), (120, 120));
    assert_eq!(record(&[(150, 150)]).grid()?.size(), (150, 150));
    Ok(())
}

#[test]
fn empty_record() -> Result<(), Error> {
    let grid = record(&[]).grid()?;
    assert_eq!(grid.size(), (20, 20));
    assert_eq!(grid.population(), 0);
    Ok(())
}

#[test]
fn too_large() {
    assert_eq!(
        record(&[(151, 0)]).grid(),
        Err(Error::GridTooLarge {
            title: String::from("Test"),
            size: 320,
            max: 150,
        })
    );
}

#[test]
fn malformed() {
    let record = ImportRecord {
        title: String::from("Broken"),
        contents: vec![vec![1, 2], vec![3]],
    };
    assert_eq!(
        record.grid(),
        Err(Error::MalformedCoord {
            title: String::from("Broken"),
            coord: vec![3],
        })
    );
}

#[test]
fn custom_policy() -> Result<(), Error> {
    let policy = ImportPolicy::default()
        .set_min_size(5)
        .set_large_band(20, 40)
        .set_max_size(40);
    assert_eq!(policy.grid_size(&[(1, 1)]), 20);
    assert_eq!(policy.grid_size(&[(25, 1)]), 30);
    let grid = policy.grid(&record(&[(25, 1)]))?;
    assert_eq!(grid.get((25, 1)), CellState::Alive);
    assert!(policy.grid(&record(&[(41, 1)])).is_err());
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn parse_json() -> Result<(), Box<dyn std::error::Error>> {
    let json = r#"[
        {"title": "Blinker", "contents": [[1, 1], [1, 2], [1, 3]]},
        {"title": "Block", "contents": [[0, 0], [0, 1], [1, 0], [1, 1]]}
    ]"#;
    let records: Vec<ImportRecord> = serde_json::from_str(json)?;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Blinker");
    assert_eq!(records[0].living()?, vec![(1, 1), (1, 2), (1, 3)]);
    assert_eq!(records[1].grid()?.population(), 4);
    Ok(())
}
