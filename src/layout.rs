use itertools::Itertools;

use crate::basic::Point;
use crate::hexagon::Hexagon;

pub const HEXAGON_SIZE: f32 = 80.;
pub const INNER_HEX_SIZE: f32 = 40.;

/// Room reserved for the fixed header bar, added to every y.
pub const TOP_OFFSET: f32 = 20.;

/// How a slot's x coordinate is anchored: at a fixed offset from the
/// left edge or at a fraction of the viewport width.
#[derive(Copy, Clone, Debug)]
enum Anchor {
    Fixed(f32),
    Fraction(f32),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cluster {
    Primary,
    Midground,
    Background,
}

#[derive(Copy, Clone, Debug)]
struct Slot {
    x: Anchor,
    y: f32,
    scale: f32,
    cluster: Cluster,
}

const fn fixed(x: f32, y: f32, scale: f32) -> Slot {
    Slot {
        x: Anchor::Fixed(x),
        y,
        scale,
        cluster: Cluster::Primary,
    }
}

const fn fraction(x: f32, y: f32, scale: f32, cluster: Cluster) -> Slot {
    Slot { x: Anchor::Fraction(x), y, scale, cluster }
}

// The slot coordinates encode a specific visual design, they are not
// derived from anything. Treat them as opaque.
#[rustfmt::skip]
const SLOTS: [Slot; 17] = [
    // primary cluster, anchored to the left edge
    fixed(150., 230., 1.),
    fixed(300., 160., 1.),
    fixed(450., 230., 1.),
    fixed(150., 400., 1.),
    fixed(300., 320., 1.),
    fixed(450., 400., 1.),
    fixed(300., 480., 1.),
    fixed(650., 500., 1.),
    fixed(600., 320., 1.),
    fixed(500., 600., 0.8),
    // midground cluster, faded, follows the viewport width
    fraction(0.60, 120., 0.7, Cluster::Midground),
    fraction(0.70, 260., 0.7, Cluster::Midground),
    fraction(0.57, 420., 0.7, Cluster::Midground),
    fraction(0.70, 550., 0.7, Cluster::Midground),
    // background cluster, full size on the right
    fraction(0.85, 150., 1., Cluster::Background),
    fraction(0.93, 350., 1., Cluster::Background),
    fraction(0.83, 550., 1., Cluster::Background),
];

/// A request to place one hexagon on the drawing surface. Sequence
/// order within a layout is z-order, later placements draw on top.
/// Overlaps are part of the design, there is no collision avoidance.
#[derive(Copy, Clone, Debug)]
pub struct Placement {
    pub hexagon: Hexagon,
    pub cluster: Cluster,
}

/// Pure function of the viewport size. `height` is unused by the
/// current placement scheme but kept for schemes that need it.
pub fn generate_layout(width: f32, _height: f32) -> Vec<Placement> {
    SLOTS
        .iter()
        .map(|slot| {
            let x = match slot.x {
                Anchor::Fixed(x) => x,
                Anchor::Fraction(f) => width * f,
            };
            Placement {
                hexagon: Hexagon {
                    center: Point { x, y: TOP_OFFSET + slot.y },
                    outer_size: HEXAGON_SIZE * slot.scale,
                    inner_size: INNER_HEX_SIZE * slot.scale,
                    include_lines: true,
                },
                cluster: slot.cluster,
            }
        })
        .collect_vec()
}

#[test]
fn test_layout_cluster_counts() {
    let placements = generate_layout(1000., 800.);
    assert_eq!(placements.len(), 17);

    let count = |cluster| {
        placements
            .iter()
            .filter(|placement| placement.cluster == cluster)
            .count()
    };
    assert_eq!(count(Cluster::Primary), 10);
    assert_eq!(count(Cluster::Midground), 4);
    assert_eq!(count(Cluster::Background), 3);
}

#[test]
fn test_layout_viewport_fractions() {
    use approx::assert_abs_diff_eq;
    use itertools::Itertools;

    let placements = generate_layout(1000., 800.);

    let xs = |cluster: Cluster| {
        placements
            .iter()
            .filter(|placement| placement.cluster == cluster)
            .map(|placement| placement.hexagon.center.x)
            .collect_vec()
    };

    for (x, expected) in xs(Cluster::Midground).into_iter().zip([600., 700., 570., 700.]) {
        assert_abs_diff_eq!(x, expected, epsilon = 1e-2);
    }
    for (x, expected) in xs(Cluster::Background).into_iter().zip([850., 930., 830.]) {
        assert_abs_diff_eq!(x, expected, epsilon = 1e-2);
    }
}

#[test]
fn test_layout_top_offset_and_scales() {
    use approx::assert_abs_diff_eq;

    let placements = generate_layout(1000., 800.);

    // every y is relative to the header offset
    assert_eq!(placements[0].hexagon.center.y, TOP_OFFSET + 230.);

    // all hexagons keep the 2:1 outer:inner convention
    for placement in &placements {
        assert_abs_diff_eq!(
            placement.hexagon.outer_size,
            2. * placement.hexagon.inner_size,
            epsilon = 1e-3
        );
        assert!(placement.hexagon.include_lines);
    }

    // last of the primary cluster is scaled down
    assert_abs_diff_eq!(placements[9].hexagon.outer_size, 64., epsilon = 1e-3);
    // midground cluster is scaled to 0.7
    assert_abs_diff_eq!(placements[10].hexagon.outer_size, 56., epsilon = 1e-3);
}

#[test]
fn test_layout_ignores_height() {
    let a = generate_layout(1000., 800.);
    let b = generate_layout(1000., 100.);
    for (pa, pb) in a.iter().zip(&b) {
        assert_eq!(pa.hexagon.center.y, pb.hexagon.center.y);
        assert_eq!(pa.hexagon.center.x, pb.hexagon.center.x);
    }
}
