use ggez::graphics::Color;

use crate::hexagon::Stroke;
use crate::layout::Cluster;

lazy_static! {
    static ref DEFAULT_BACKGROUND_COLOR: Color = Color::from_rgb(8, 12, 24);
    static ref DEFAULT_OUTER_COLOR: Color = Color::from_rgb(74, 222, 128);
    static ref DEFAULT_INNER_COLOR: Color = Color::from_rgba(74, 222, 128, 110);
}

pub struct Palette {
    pub background_color: Color,

    pub outer_color: Color,
    pub outer_thickness: f32,
    pub inner_color: Color,
    pub inner_thickness: f32,

    /// The midground cluster is drawn faded
    pub midground_alpha: f32,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background_color: *DEFAULT_BACKGROUND_COLOR,
            outer_color: *DEFAULT_OUTER_COLOR,
            outer_thickness: 2.,
            inner_color: *DEFAULT_INNER_COLOR,
            inner_thickness: 1.,
            midground_alpha: 0.4,
        }
    }

    pub fn color(&self, stroke: Stroke, cluster: Cluster) -> Color {
        let mut color = match stroke {
            Stroke::Outer => self.outer_color,
            Stroke::Inner => self.inner_color,
        };
        if cluster == Cluster::Midground {
            color.a *= self.midground_alpha;
        }
        color
    }

    pub fn thickness(&self, stroke: Stroke) -> f32 {
        match stroke {
            Stroke::Outer => self.outer_thickness,
            Stroke::Inner => self.inner_thickness,
        }
    }
}
