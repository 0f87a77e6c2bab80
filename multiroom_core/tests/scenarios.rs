use multiroom_core::{
    Capabilities, Cell, DoorColor, DoorPolicy, LayoutConfig, LayoutError, Level, generate_layout,
    seeded_rng,
    spawn::place_agent,
};

#[test]
fn two_four_by_four_rooms_with_one_door() {
    let config = LayoutConfig::new(2, 2, 4);
    let layout = generate_layout(&config, DoorPolicy::default(), &mut seeded_rng(42)).unwrap();

    assert_eq!(layout.rooms.len(), 2);
    assert_eq!(layout.door_count, 1);
    for room in &layout.rooms {
        assert_eq!((room.size().width, room.size().height), (4, 4));
        assert!(room.rect.fits_within(25, 25));
    }
    let door = layout.rooms[1].entry_door;
    assert_eq!(
        layout.grid[door],
        Cell::Door {
            color: DoorColor::canonical()
        }
    );
}

#[test]
fn agents_seated_twice_get_distinct_cells() {
    let config = LayoutConfig::new(2, 2, 4);
    let mut rng = seeded_rng(42);
    let mut layout = generate_layout(&config, DoorPolicy::default(), &mut rng).unwrap();
    let first = layout.rooms[0].clone();

    let (a, _) = place_agent(&mut layout.grid, &first, 0, &mut rng, 1_000).unwrap();
    let (b, _) = place_agent(&mut layout.grid, &first, 1, &mut rng, 1_000).unwrap();
    assert_ne!(a, b);
}

#[test]
fn undersized_grid_is_reported_instead_of_looping() {
    for (width, height) in [(7, 25), (25, 7), (7, 7)] {
        let config = LayoutConfig::new(2, 2, 4).with_grid(width, height);
        let result = generate_layout(&config, DoorPolicy::default(), &mut seeded_rng(42));
        assert!(
            matches!(result, Err(LayoutError::ConfigurationImpossible { .. })),
            "{width}x{height}: {result:?}"
        );
    }
}

#[test]
fn level_errors_surface_at_construction() {
    let config = LayoutConfig::new(3, 3, 4).with_grid(10, 10);
    let result = Level::generate(&config, Capabilities::default(), &mut seeded_rng(3));
    assert!(matches!(
        result,
        Err(LayoutError::ConfigurationImpossible { min_rooms: 3, .. })
    ));
}

#[test]
fn six_large_rooms_fit_the_default_grid() {
    let config = LayoutConfig::new(6, 6, 10);
    let level = Level::generate(&config, Capabilities::default(), &mut seeded_rng(2024)).unwrap();
    assert!(level.rooms().len() >= 6);
    assert_eq!(level.door_count(), level.rooms().len() - 1);
}
