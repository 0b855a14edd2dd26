mod common;

use common::{visitor, SystemBuilder, BLUE, FRAME, GREEN, RED};

#[test]
fn test_red_then_blue_spawns_one_dance() {
    let mut system = SystemBuilder::new()
        .with_structure(100.0, 100.0, 50.0, RED)
        .with_structure(400.0, 100.0, 50.0, BLUE)
        .build();

    let snapshot = system.update(&[visitor(0, 100.0, 100.0)], FRAME);
    assert_carrying!(system, 0, RED);
    let aura = system.visitor(0).unwrap().aura.clone();
    assert_dances!(system, 0);
    assert!(snapshot.dances.is_empty());
    assert_eq!(snapshot.auras[0].unwrap().color, RED);

    // Collected this very frame, then decayed by one 60 Hz step.
    assert!((aura.intensity() - 0.998).abs() < 1e-9);

    let snapshot = system.update(&[visitor(0, 400.0, 100.0)], FRAME);
    assert_dances!(system, 1);
    let dance = &snapshot.dances[0];
    assert_eq!(dance.visitor_color, RED);
    assert_eq!(dance.structure_color, BLUE);
    assert_eq!((dance.x, dance.y), (400.0, 100.0));
    assert_carrying!(system, 0, BLUE);
}

#[test]
fn test_collection_resets_intensity_to_full() {
    let mut system = SystemBuilder::new()
        .with_structure(100.0, 100.0, 50.0, RED)
        .with_structure(400.0, 100.0, 50.0, BLUE)
        .build();

    system.update(&[visitor(0, 100.0, 100.0)], FRAME);
    for _ in 0..600 {
        system.update(&[visitor(0, 250.0, 300.0)], FRAME);
    }
    let faded = system.visitor(0).unwrap().aura.intensity();
    assert!(faded < 0.5);

    // Dt of zero isolates the reset from the frame's own decay.
    system.update(&[visitor(0, 400.0, 100.0)], Some(0.0));
    let aura = &system.visitor(0).unwrap().aura;
    assert_eq!(aura.intensity(), 1.0);
    assert_eq!(aura.color(), Some(BLUE));
}

#[test]
fn test_faded_color_does_not_pollinate() {
    let mut system = SystemBuilder::new()
        .with_structure(100.0, 100.0, 50.0, RED)
        .with_structure(400.0, 100.0, 50.0, BLUE)
        .build();

    system.update(&[visitor(0, 100.0, 100.0)], FRAME);
    // ~25 s to fall under the minimum intensity
    for _ in 0..(60 * 30) {
        system.update(&[visitor(0, 250.0, 300.0)], FRAME);
    }
    assert!(!system.visitor(0).unwrap().aura.has_color());

    system.update(&[visitor(0, 400.0, 100.0)], FRAME);
    assert_dances!(system, 0);
    assert_carrying!(system, 0, BLUE);
}

#[test]
fn test_overlapping_structures_resolve_in_order() {
    let mut system = SystemBuilder::new()
        .with_structure(100.0, 100.0, 60.0, RED)
        .with_structure(130.0, 100.0, 60.0, BLUE)
        .with_structure(400.0, 400.0, 50.0, GREEN)
        .build();

    system.update(&[visitor(0, 400.0, 400.0)], FRAME);
    assert_carrying!(system, 0, GREEN);

    // Inside both red and blue: green->red dances, then red->blue dances.
    system.update(&[visitor(0, 115.0, 100.0)], FRAME);
    assert_dances!(system, 2);
    let colors: Vec<_> = system.dances().iter().map(|d| d.colors()).collect();
    assert_eq!(colors, vec![(GREEN, RED), (RED, BLUE)]);
    assert_carrying!(system, 0, BLUE);
}

#[test]
fn test_dance_expires_after_duration() {
    let mut system = SystemBuilder::new()
        .with_structure(100.0, 100.0, 50.0, RED)
        .with_structure(400.0, 100.0, 50.0, BLUE)
        .build();

    system.update(&[visitor(0, 100.0, 100.0)], FRAME);
    system.update(&[visitor(0, 400.0, 100.0)], FRAME);
    assert_dances!(system, 1);

    // Visitor dances advance on the frame they spawn: 1 + 148 frames alive.
    for _ in 0..148 {
        system.update(&[visitor(0, 250.0, 300.0)], FRAME);
        assert_dances!(system, 1);
    }
    system.update(&[visitor(0, 250.0, 300.0)], FRAME);
    assert_dances!(system, 0);
}

#[test]
fn test_trail_renders_behind_colored_visitor() {
    let mut system = SystemBuilder::new()
        .with_structure(100.0, 100.0, 50.0, RED)
        .build();

    let mut snapshot = system.update(&[visitor(0, 100.0, 100.0)], FRAME);
    for step in 1..=20 {
        snapshot = system.update(&[visitor(0, 100.0 + step as f64 * 10.0, 100.0)], FRAME);
    }
    let trail = &snapshot.trails[0];
    assert!(!trail.is_empty());
    assert!(trail.iter().all(|p| p.color == RED));
    assert!(trail.iter().all(|p| p.alpha > 0.0 && p.alpha <= 1.0));
    assert!(trail.iter().all(|p| p.size > 3.0 && p.size <= 6.0));
}
