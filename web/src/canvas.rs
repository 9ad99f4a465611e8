use snake_core::{Cell, Grid, Paint, Renderer};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::NodeRef;

/// Edge of a grid cell in canvas pixels.
pub(crate) const TILE: f64 = 20.0;

pub(crate) const fn color(paint: Paint) -> &'static str {
    use Paint::*;
    match paint {
        Background => "#0b6623",
        Food => "#ffe347",
        SnakeHead => "#3d0a0a",
        SnakeBody => "#a4e936",
    }
}

/// `(x, y, width, height)` of a painted cell, snake segments are inset by a pixel.
pub(crate) fn cell_rect(cell: Cell, paint: Paint) -> (f64, f64, f64, f64) {
    let x = f64::from(cell.x) * TILE;
    let y = f64::from(cell.y) * TILE;
    match paint {
        Paint::SnakeHead | Paint::SnakeBody => (x + 1.0, y + 1.0, TILE - 2.0, TILE - 2.0),
        Paint::Background | Paint::Food => (x, y, TILE, TILE),
    }
}

/// Offset of a pointer position (canvas pixels) from the centre of `head`.
pub(crate) fn pointer_delta(head: Cell, x: f64, y: f64) -> (f64, f64) {
    let head_x = f64::from(head.x) * TILE + TILE / 2.0;
    let head_y = f64::from(head.y) * TILE + TILE / 2.0;
    (x - head_x, y - head_y)
}

pub(crate) const fn canvas_size(grid: Grid) -> (u32, u32) {
    (grid.cols as u32 * TILE as u32, grid.rows as u32 * TILE as u32)
}

/// Draws onto the `<canvas>` behind `node`, once it is mounted.
#[derive(Debug)]
pub(crate) struct CanvasRenderer {
    grid: Grid,
    node: NodeRef,
    ctx: Option<CanvasRenderingContext2d>,
}

impl CanvasRenderer {
    pub(crate) fn new(grid: Grid) -> Self {
        Self {
            grid,
            node: NodeRef::default(),
            ctx: None,
        }
    }

    pub(crate) fn node_ref(&self) -> NodeRef {
        self.node.clone()
    }

    fn context(&mut self) -> Option<&CanvasRenderingContext2d> {
        if self.ctx.is_none() {
            self.ctx = match acquire_context(&self.node) {
                Ok(ctx) => ctx,
                Err(err) => {
                    log::error!("failed to get 2d context: {:?}", err);
                    None
                }
            };
        }
        self.ctx.as_ref()
    }
}

fn acquire_context(node: &NodeRef) -> Result<Option<CanvasRenderingContext2d>, JsValue> {
    let Some(canvas) = node.cast::<HtmlCanvasElement>() else {
        return Ok(None);
    };
    let Some(ctx) = canvas.get_context("2d")? else {
        return Ok(None);
    };
    Ok(Some(ctx.dyn_into::<CanvasRenderingContext2d>()?))
}

impl Renderer for CanvasRenderer {
    fn clear(&mut self, paint: Paint) {
        let (width, height) = canvas_size(self.grid);
        if let Some(ctx) = self.context() {
            ctx.set_fill_style_str(color(paint));
            ctx.fill_rect(0.0, 0.0, f64::from(width), f64::from(height));
        }
    }

    fn draw_cell(&mut self, cell: Cell, paint: Paint) {
        if let Some(ctx) = self.context() {
            let (x, y, width, height) = cell_rect(cell, paint);
            ctx.set_fill_style_str(color(paint));
            ctx.fill_rect(x, y, width, height);
        }
    }
}
