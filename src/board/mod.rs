pub use canvas::{Canvas, PixelCanvas, Rect};
pub use renderer::{cell_rect, render, CELL_INSET_RATIO};

mod canvas;
mod renderer;
