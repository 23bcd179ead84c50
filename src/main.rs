#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate lazy_static;

use ggez::conf::{WindowMode, WindowSetup};
use ggez::event;
use ggez::ContextBuilder;

use crate::app::App;
use crate::error::Result;

mod app;
mod basic;
mod error;
mod grid;
mod hexagon;
mod layout;
mod palette;
mod rendering;

fn main() -> Result {
    let wm = WindowMode::default()
        .dimensions(1000., 800.)
        .resizable(true);

    let ws = WindowSetup::default()
        .title("Hex Backdrop")
        .vsync(true);

    let (ctx, event_loop) = ContextBuilder::new("hex_backdrop", "hex_backdrop")
        .window_mode(wm)
        .window_setup(ws)
        .build()?;

    let app = App::new(wm);
    event::run(ctx, event_loop, app)
}
