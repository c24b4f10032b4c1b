//! Integration test: drive a full construction race for the Eiffel Tower
//! through the engine and verify floor counts, progress, readouts, and
//! scheduling at each checkpoint, then switch buildings mid-run.

use std::time::{Duration, Instant};

use flashblocks_core::views::comparison::render_comparison;
use flashblocks_core::{BuildingId, ConstructionEngine, Track};
use flashblocks_protocol::{RenderCommand, Viewport};

fn building_group_rects(commands: &[RenderCommand]) -> usize {
    // Rects inside a building group: one ground strip plus one facade rect
    // per finished floor.
    let mut depth_in_building = 0;
    let mut count = 0;
    for cmd in commands {
        match cmd {
            RenderCommand::BeginGroup { id, .. } if id == "eiffel" || id == "burj" => {
                depth_in_building += 1;
            }
            RenderCommand::EndGroup if depth_in_building > 0 => depth_in_building -= 1,
            RenderCommand::DrawRect { .. } if depth_in_building > 0 => count += 1,
            _ => {}
        }
    }
    count
}

#[test]
fn eiffel_tower_race_end_to_end() {
    let mut engine = ConstructionEngine::new(BuildingId::EiffelTower);
    // Re-anchor the run so the checkpoints below land just past each
    // floor boundary rather than just before it.
    engine.start();
    let base = Instant::now();

    // Freshly started: both tracks at zero, animating.
    assert_eq!(engine.floors(Track::Fast), 0);
    assert_eq!(engine.floors(Track::Slow), 0);
    assert!(engine.is_animating());

    // t = 200ms: the fast track tops its first floor, the slow track none.
    engine.step_at(base + Duration::from_millis(200));
    assert_eq!(engine.floors(Track::Fast), 1);
    assert_eq!(engine.floors(Track::Slow), 0);
    assert_eq!(engine.elapsed_label(Track::Fast), "0.2s");

    // t = 6s: fast track saturated at 30 floors, slow track at 3.
    engine.step_at(base + Duration::from_millis(6000));
    assert_eq!(engine.floors(Track::Fast), 30);
    assert_eq!(engine.floors(Track::Slow), 3);
    assert_eq!(engine.progress_percent(Track::Fast), 100.0);
    assert_eq!(engine.progress_percent(Track::Slow), 10.0);
    assert!(engine.is_animating(), "slow track still has floors to build");

    // A frame renders 30 + 3 facade rects plus the two ground strips.
    let vp = Viewport::new(120.0, 40.0);
    let cmds = render_comparison(&engine, &vp);
    assert_eq!(building_group_rects(&cmds), 35);

    // t = 60s: both tracks saturated, scheduling stopped.
    engine.step_at(base + Duration::from_millis(60_000));
    assert_eq!(engine.floors(Track::Fast), 30);
    assert_eq!(engine.floors(Track::Slow), 30);
    assert_eq!(engine.elapsed_label(Track::Fast), "6.0s");
    assert_eq!(engine.elapsed_label(Track::Slow), "60.0s");
    assert!(!engine.is_animating());

    // Selecting another building resets instantly and starts a new run.
    engine.select(BuildingId::BurjKhalifa);
    assert_eq!(engine.building(), BuildingId::BurjKhalifa);
    assert_eq!(engine.floors(Track::Fast), 0);
    assert_eq!(engine.floors(Track::Slow), 0);
    assert!(engine.is_animating());

    // A later step belongs to the new run and respects the new total.
    engine.step();
    assert!(engine.floors(Track::Fast) <= 40);
    assert!(engine.floors(Track::Slow) <= engine.floors(Track::Fast));

    engine.dispose();
    assert!(!engine.is_animating());
}
