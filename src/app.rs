use std::time::Instant;

use ggez::conf::WindowMode;
use ggez::event::EventHandler;
use ggez::graphics::{Canvas, DrawParam, Mesh};
use ggez::Context;

use crate::error::{Error, ErrorConversion, Result};
use crate::grid::GridController;
use crate::palette::Palette;
use crate::rendering;

pub struct App {
    controller: GridController,
    palette: Palette,

    /// Cached between frames, recalculated only after the controller
    /// has rebuilt the groups
    hex_mesh: Option<Mesh>,
}

impl App {
    pub fn new(wm: WindowMode) -> Self {
        Self {
            controller: GridController::new(wm.width, wm.height),
            palette: Palette::dark(),
            hex_mesh: None,
        }
    }
}

impl EventHandler<Error> for App {
    fn update(&mut self, _ctx: &mut Context) -> Result {
        if self.controller.poll(Instant::now()) {
            self.hex_mesh = None;
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        if self.hex_mesh.is_none() {
            self.hex_mesh = Some(rendering::hexagon_mesh(
                self.controller.groups(),
                &self.palette,
                ctx,
            )?);
        }

        let mut canvas = Canvas::from_frame(ctx, self.palette.background_color);
        canvas.draw(self.hex_mesh.as_ref().unwrap(), DrawParam::default());
        canvas.finish(ctx).map_err(Error::from).with_trace_step("draw")
    }

    fn resize_event(&mut self, _ctx: &mut Context, width: f32, height: f32) -> Result {
        self.controller.schedule_rebuild(width, height, Instant::now());
        Ok(())
    }
}
