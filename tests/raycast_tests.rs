//! Ray casting tests against whole maps

use std::f32::consts::{FRAC_PI_2, PI};

use tui_maze::core::{
    column_span, CasterKind, FixedStepMarcher, GridMap, GridTraversal, RayCaster, WallShade,
    WorldConfig,
};
use tui_maze::types::{DEPTH, RAY_STEP, SCREEN_HEIGHT};

/// 16x16 map, open everywhere inside the border except a wall row at y = 13.
fn corridor_map() -> GridMap {
    let mut rows = Vec::new();
    for y in 0..16 {
        let row: String = (0..16)
            .map(|x| {
                if x == 0 || x == 15 || y == 0 || y == 15 || y == 13 {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        rows.push(row);
    }
    GridMap::parse(&rows.join("\n")).unwrap()
}

fn casters() -> Vec<Box<dyn RayCaster>> {
    let config = WorldConfig::default();
    vec![
        CasterKind::FixedStep.build(&config),
        CasterKind::GridTraversal.build(&config),
    ]
}

#[test]
fn test_center_ray_down_corridor_hits_at_five() {
    let map = corridor_map();
    let marcher = FixedStepMarcher::from_config(&WorldConfig::default());

    let hit = marcher.cast(&map, 8.0, 8.0, 0.0);
    assert_eq!(hit.cell, Some((8, 13)));
    assert!((hit.distance - 5.0).abs() <= RAY_STEP + 1e-4, "distance {}", hit.distance);
    assert_eq!(WallShade::for_distance(hit.distance, DEPTH), WallShade::Close);
}

#[test]
fn test_grid_traversal_agrees_with_marcher_on_corridor() {
    let map = corridor_map();
    let grid = GridTraversal::from_config(&WorldConfig::default());
    let hit = grid.cast(&map, 8.0, 8.0, 0.0);
    assert_eq!(hit.cell, Some((8, 13)));
    assert!((hit.distance - 5.0).abs() < 1e-5);
}

#[test]
fn test_hits_are_finite_and_within_depth_for_all_directions() {
    let map = GridMap::default();
    for caster in casters() {
        for i in 0..360 {
            let angle = (i as f32).to_radians();
            let hit = caster.cast(&map, 8.5, 8.5, angle);
            assert!(hit.distance.is_finite());
            assert!(hit.distance > 0.0);
            assert!(hit.distance <= caster.depth());
            // The default map is closed so every ray ends on a wall.
            let (cx, cy) = hit.cell.expect("closed map");
            assert_eq!(map.cell(cx, cy), Some(tui_maze::types::Cell::Wall));
        }
    }
}

#[test]
fn test_hit_cell_is_first_wall_on_the_ray() {
    // Two wall rows; the nearer one must win.
    let map = GridMap::parse(
        "#######\n\
         #.....#\n\
         #.....#\n\
         #######\n\
         #.....#\n\
         #######",
    )
    .unwrap();
    for caster in casters() {
        let hit = caster.cast(&map, 3.5, 1.5, 0.0);
        assert_eq!(hit.cell, Some((3, 3)));
        assert!(hit.distance < 2.5);
    }
}

#[test]
fn test_ray_leaving_open_map_reports_exact_depth() {
    let map = GridMap::parse(
        "....\n\
         ....\n\
         ....\n\
         ....",
    )
    .unwrap();
    for caster in casters() {
        for angle in [0.0_f32, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
            let hit = caster.cast(&map, 2.0, 2.0, angle);
            assert_eq!(hit.distance, caster.depth());
            assert_eq!(hit.cell, None);
            assert!(!hit.boundary);
        }
    }
}

#[test]
fn test_ray_exiting_through_gap_in_border_reports_depth() {
    let map = GridMap::parse(
        "###.###\n\
         #.....#\n\
         #.....#\n\
         #######",
    )
    .unwrap();
    assert!(!map.has_solid_border());
    // Straight up (-y) through the gap at x = 3.
    for caster in casters() {
        let hit = caster.cast(&map, 3.5, 2.5, std::f32::consts::PI);
        assert_eq!(hit.distance, DEPTH);
        assert!(!hit.is_wall());
    }
}

#[test]
fn test_rays_from_grid_line_origins_stay_in_range() {
    let map = GridMap::default();
    let h = i32::from(SCREEN_HEIGHT);
    // Integer coordinates sit on grid lines; several are flush against a wall.
    let origins = [(1.0_f32, 8.5_f32), (1.0, 1.0), (14.0, 14.0), (8.0, 8.0), (15.0, 8.5)];
    for caster in casters() {
        for &(x, y) in &origins {
            for angle in [0.0_f32, FRAC_PI_2, PI, -FRAC_PI_2] {
                let hit = caster.cast(&map, x, y, angle);
                assert!(hit.distance.is_finite(), "({x}, {y}) at {angle}");
                assert!(hit.distance >= 0.0, "({x}, {y}) at {angle}");
                assert!(hit.distance <= DEPTH, "({x}, {y}) at {angle}");

                let (ceiling, floor) = column_span(hit.distance, SCREEN_HEIGHT);
                assert!((0..=h / 2).contains(&ceiling), "({x}, {y}) at {angle}");
                assert!((h / 2..=h).contains(&floor), "({x}, {y}) at {angle}");
            }
        }
    }
}

#[test]
fn test_grid_traversal_flush_against_wall_hits_at_zero() {
    let hit = GridTraversal::from_config(&WorldConfig::default()).cast(
        &GridMap::default(),
        1.0,
        8.5,
        -FRAC_PI_2,
    );
    assert_eq!(hit.cell, Some((0, 8)));
    assert_eq!(hit.distance, 0.0);
    assert_eq!(column_span(hit.distance, SCREEN_HEIGHT), (0, i32::from(SCREEN_HEIGHT)));
    assert_eq!(WallShade::for_distance(hit.distance, DEPTH), WallShade::Near);
}
