use ggez::graphics::{DrawMode, Mesh, MeshBuilder};
use ggez::Context;

use crate::error::{ErrorConversion, Result};
use crate::hexagon::{HexagonGroup, Primitive};
use crate::layout::Cluster;
use crate::palette::Palette;

/// Translates the built hexagon groups into a single stroked mesh.
/// This is the only layer that talks to the graphics backend, all
/// geometry is decided before it gets here.
pub fn hexagon_mesh(
    groups: &[(Cluster, HexagonGroup)],
    palette: &Palette,
    ctx: &mut Context,
) -> Result<Mesh> {
    let mut builder = MeshBuilder::new();

    let res: Result<Mesh> = (|| {
        for (cluster, group) in groups {
            for primitive in group.primitives() {
                match *primitive {
                    Primitive::Polygon { vertices, stroke } => {
                        builder.polygon(
                            DrawMode::stroke(palette.thickness(stroke)),
                            &vertices,
                            palette.color(stroke, *cluster),
                        )?;
                    }
                    Primitive::Line { from, to, stroke } => {
                        builder.line(
                            &[from, to],
                            palette.thickness(stroke),
                            palette.color(stroke, *cluster),
                        )?;
                    }
                }
            }
        }
        Ok(Mesh::from_data(ctx, builder.build()))
    })();
    res.with_trace_step("hexagon_mesh")
}
