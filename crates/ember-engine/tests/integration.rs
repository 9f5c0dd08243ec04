//! Integration tests for the full world surface.
//!
//! These tests drive `LifeWorld` the way an embedding driver would —
//! edits, steps, resizes, and per-frame fade updates — rather than
//! exercising the rule or tracker in isolation.

use ember_core::{AliveSet, GenerationId, Position, Rgb};
use ember_engine::{Edit, LifeWorld, WorldConfig};

fn world(width: u32, height: u32) -> LifeWorld {
    LifeWorld::new(WorldConfig {
        width,
        height,
        fade_duration: 1.0,
        fade_enabled: true,
    })
    .unwrap()
}

fn cells(coords: &[(i32, i32)]) -> Vec<Position> {
    coords.iter().map(|&(col, row)| Position::new(col, row)).collect()
}

#[test]
fn glider_crosses_the_board() {
    let mut w = world(20, 20);
    let glider = cells(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
    w.load_pattern(glider.clone());

    for _ in 0..4 {
        w.step();
    }

    let expected: AliveSet = glider.iter().map(|p| p.offset(1, 1)).collect();
    assert_eq!(w.grid().cells(), &expected);
    assert_eq!(w.generation(), GenerationId(4));
}

#[test]
fn long_run_stays_in_bounds() {
    // Births only ever target in-bounds candidates, so after the first
    // step every alive cell is inside the grid — and stays there.
    let mut w = world(48, 48);
    w.seed_random(0.3, 20_240_817);

    for _ in 0..1000 {
        w.step();
    }

    let dims = w.grid().dims();
    for pos in w.grid().cells() {
        assert!(dims.contains(*pos));
    }
    assert_eq!(w.last_metrics().alive, w.grid().len());
}

#[test]
fn determinism_same_seed_same_run() {
    let run = |seed: u64| {
        let mut w = world(32, 32);
        w.seed_random(0.35, seed);
        for _ in 0..50 {
            w.step();
        }
        w.grid().cells().clone()
    };

    assert_eq!(run(42), run(42));
}

#[test]
fn shrink_strands_cells_which_vanish_after_one_step() {
    let mut w = world(10, 10);
    // A block in the far corner survives on its own...
    w.load_pattern(cells(&[(8, 8), (8, 9), (9, 8), (9, 9)]));
    w.step();
    assert_eq!(w.grid().len(), 4);

    // ...until a shrink leaves it entirely outside the grid. The
    // stranded cells are not clipped by the resize itself,
    w.resize(5, 5);
    assert_eq!(w.grid().len(), 4);

    // but the next generation cannot count them as candidates.
    w.step();
    assert!(w.grid().is_empty());
}

#[test]
fn stranded_column_fertilizes_the_border_once() {
    let mut w = world(5, 5);
    w.load_pattern(cells(&[(-1, 1), (-1, 2), (-1, 3)]));
    w.step();
    // One in-bounds birth from the out-of-bounds projections; the
    // stranded cells themselves are gone.
    assert_eq!(w.grid().len(), 1);
    assert!(w.contains(Position::new(0, 2)));
}

#[test]
fn queued_pattern_load_lands_in_the_generation_it_precedes() {
    let mut w = world(8, 8);
    w.add(Position::new(0, 0));
    w.queue_edit(Edit::Clear);
    w.queue_edit(Edit::Load(cells(&[(2, 1), (2, 2), (2, 3)])));
    w.step();

    // The queued load replaced the lone corner cell before stepping,
    // so the result is the flipped blinker, not an empty board.
    assert!(w.contains(Position::new(1, 2)));
    assert!(w.contains(Position::new(3, 2)));
    assert_eq!(w.grid().len(), 3);
}

#[test]
fn afterglow_blends_toward_the_background() {
    let live = Rgb::new(250, 230, 60);
    let background = Rgb::new(20, 20, 28);

    let mut w = world(8, 8);
    w.load_pattern(cells(&[(2, 1), (2, 2), (2, 3)]));
    w.update_fade(0.0);
    w.step();

    // Frame 1 after the flip: the dead tip has cooled for half the
    // duration.
    w.update_fade(0.5);
    let tip = Position::new(2, 1);
    let shade = live.blend(background, w.cell_alpha(tip));
    assert_ne!(shade, live);
    assert_ne!(shade, background);

    // Once the duration fully elapses the tip renders as background.
    w.update_fade(0.6);
    assert_eq!(live.blend(background, w.cell_alpha(tip)), background);
}

#[test]
fn toggling_fade_off_mid_run_drops_all_glow() {
    let mut w = world(8, 8);
    w.load_pattern(cells(&[(2, 1), (2, 2), (2, 3)]));
    w.update_fade(0.0);
    w.step();
    w.update_fade(0.25);
    assert!(w.cell_alpha(Position::new(2, 1)) > 0.0);

    w.set_fade_enabled(false);
    assert_eq!(w.cell_alpha(Position::new(2, 1)), 0.0);
    // Alive cells still render at full opacity without fade state.
    assert_eq!(w.cell_alpha(Position::new(2, 2)), 1.0);
}
