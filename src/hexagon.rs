use std::f32::consts::FRAC_PI_3;

use crate::basic::Point;

/// Vertex i sits at angle i·60° from the positive x axis, so vertex 0
/// is directly to the right of the center and the order proceeds
/// clockwise in screen coordinates (y down). `size` is the radius of
/// the circumscribed circle; size 0 collapses to the center repeated
/// 6 times.
pub fn hexagon_vertices(center: Point, size: f32) -> [Point; 6] {
    let mut vertices = [center; 6];
    for (i, vertex) in vertices.iter_mut().enumerate() {
        let (sin, cos) = (i as f32 * FRAC_PI_3).sin_cos();
        *vertex += size * Point { x: cos, y: sin };
    }
    vertices
}

/// Which of the palette's two stroke styles a primitive is drawn with.
/// The outer outline uses `Outer`, everything else (inner outline,
/// spokes, diameters) uses `Inner`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Stroke {
    Outer,
    Inner,
}

#[derive(Copy, Clone, Debug)]
pub enum Primitive {
    Polygon { vertices: [Point; 6], stroke: Stroke },
    Line { from: Point, to: Point, stroke: Stroke },
}

/// Parameters for one backdrop hexagon. Sizes are radii of the
/// circumscribed circles, conventionally `inner_size` is half of
/// `outer_size`. No validation is performed, degenerate sizes produce
/// degenerate but well-defined shapes.
#[derive(Copy, Clone, Debug)]
pub struct Hexagon {
    pub center: Point,
    pub outer_size: f32,
    pub inner_size: f32,
    pub include_lines: bool,
}

impl Hexagon {
    /// With lines: outer outline, inner outline, 6 spokes from the
    /// center to each outer vertex, and 3 diameters joining opposite
    /// outer vertices (each pair once). Without: outer outline only.
    pub fn build(self) -> HexagonGroup {
        let outer = hexagon_vertices(self.center, self.outer_size);

        let mut primitives = Vec::with_capacity(if self.include_lines { 11 } else { 1 });
        primitives.push(Primitive::Polygon { vertices: outer, stroke: Stroke::Outer });

        if self.include_lines {
            primitives.push(Primitive::Polygon {
                vertices: hexagon_vertices(self.center, self.inner_size),
                stroke: Stroke::Inner,
            });

            for vertex in outer {
                primitives.push(Primitive::Line {
                    from: self.center,
                    to: vertex,
                    stroke: Stroke::Inner,
                });
            }

            for i in 0..3 {
                primitives.push(Primitive::Line {
                    from: outer[i],
                    to: outer[i + 3],
                    stroke: Stroke::Inner,
                });
            }
        }

        HexagonGroup { primitives }
    }
}

/// One hexagon's worth of drawable primitives, styled and discarded as
/// a unit. Groups are immutable once built and are regenerated
/// wholesale on any layout change, they carry no identity of their own.
#[derive(Clone, Debug)]
pub struct HexagonGroup {
    primitives: Vec<Primitive>,
}

impl HexagonGroup {
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    pub fn num_polygons(&self) -> usize {
        self.primitives
            .iter()
            .filter(|primitive| matches!(primitive, Primitive::Polygon { .. }))
            .count()
    }

    pub fn num_lines(&self) -> usize {
        self.primitives
            .iter()
            .filter(|primitive| matches!(primitive, Primitive::Line { .. }))
            .count()
    }
}

#[test]
fn test_vertices_lie_on_circle() {
    use approx::assert_abs_diff_eq;

    let center = Point { x: 17., y: -4. };
    for &size in &[0., 1., 40., 80., 123.45] {
        let vertices = hexagon_vertices(center, size);
        for vertex in vertices {
            assert_abs_diff_eq!((vertex - center).magnitude(), size, epsilon = 1e-3);
        }
    }
}

#[test]
fn test_vertex_angle_step() {
    use approx::assert_abs_diff_eq;
    use itertools::Itertools;
    use std::f32::consts::TAU;

    let vertices = hexagon_vertices(Point { x: 0., y: 0. }, 10.);
    for (a, b) in vertices.iter().tuple_windows() {
        let step = (b.y.atan2(b.x) - a.y.atan2(a.x)).rem_euclid(TAU);
        assert_abs_diff_eq!(step, FRAC_PI_3, epsilon = 1e-4);
    }
}

#[test]
fn test_group_with_lines() {
    let group = Hexagon {
        center: Point { x: 5., y: 5. },
        outer_size: 10.,
        inner_size: 5.,
        include_lines: true,
    }
    .build();
    assert_eq!(group.num_polygons(), 2);
    assert_eq!(group.num_lines(), 9);
}

#[test]
fn test_group_without_lines() {
    let group = Hexagon {
        center: Point { x: 5., y: 5. },
        outer_size: 10.,
        inner_size: 5.,
        include_lines: false,
    }
    .build();
    assert_eq!(group.num_polygons(), 1);
    assert_eq!(group.num_lines(), 0);
}

#[test]
fn test_degenerate_size_still_builds() {
    let group = Hexagon {
        center: Point { x: -3., y: 8. },
        outer_size: 0.,
        inner_size: 0.,
        include_lines: true,
    }
    .build();
    assert_eq!(group.num_polygons() + group.num_lines(), 11);
}

#[test]
fn test_diameters_pass_through_center() {
    use approx::assert_abs_diff_eq;

    let center = Point { x: 30., y: 40. };
    let group = Hexagon {
        center,
        outer_size: 12.,
        inner_size: 6.,
        include_lines: true,
    }
    .build();

    // diameters are the lines that don't start at the center
    let mut diameters = 0;
    for primitive in group.primitives() {
        if let Primitive::Line { from, to, .. } = *primitive {
            if (from - center).magnitude() > 1e-3 {
                let midpoint = 0.5 * (from + to);
                assert_abs_diff_eq!(midpoint.x, center.x, epsilon = 1e-3);
                assert_abs_diff_eq!(midpoint.y, center.y, epsilon = 1e-3);
                diameters += 1;
            }
        }
    }
    assert_eq!(diameters, 3);
}
