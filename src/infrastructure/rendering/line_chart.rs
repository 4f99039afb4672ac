use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::chart::ChartSeries;
use crate::domain::errors::DashboardError;
use crate::domain::logging::{LogComponent, get_logger};

const BACKGROUND: &str = "#1a1a1a";
const GRID_COLOR: &str = "#2c3e50";
const LINE_COLOR: &str = "#72c685";
const TEXT_COLOR: &str = "#a0a0a0";
const PADDING: f64 = 10.0;
const PRICE_SCALE_SPACE: f64 = 64.0;
const TIME_SCALE_SPACE: f64 = 22.0;

/// Canvas 2D line chart - the dashboard's price chart widget.
///
/// Owns the paired label/price sequences and repaints synchronously on every
/// mutation - no animation frames, no interpolation.
pub struct LineChart {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    series: ChartSeries,
}

impl LineChart {
    /// Bind to an existing `<canvas>` element by id.
    pub fn new(canvas_id: &str, width: u32, height: u32) -> Result<Self, DashboardError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| DashboardError::Dom("Document not available".to_string()))?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| DashboardError::Dom(format!("Canvas '{canvas_id}' not found")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| DashboardError::Dom(format!("'{canvas_id}' is not a canvas")))?;

        canvas.set_width(width);
        canvas.set_height(height);

        let context = canvas
            .get_context("2d")
            .map_err(|_| DashboardError::Chart("Failed to get 2D context".to_string()))?
            .ok_or_else(|| DashboardError::Chart("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| DashboardError::Chart("Failed to cast to 2D context".to_string()))?;

        get_logger().info(
            LogComponent::Infrastructure("LineChart"),
            &format!("✅ Chart bound to #{canvas_id} ({width}x{height})"),
        );

        Ok(Self { context, width: width as f64, height: height as f64, series: ChartSeries::new() })
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    /// Wholesale reload of both sequences, then immediate repaint.
    pub fn replace_series(&mut self, points: Vec<(String, f64)>) {
        self.series.replace(points);
        self.redraw();
    }

    /// Append one live point (paired eviction above the cap), then repaint.
    pub fn append_point(&mut self, label: String, price: f64) {
        self.series.push_point(label, price);
        self.redraw();
    }

    /// Single synchronous repaint of the whole widget.
    pub fn redraw(&self) {
        let ctx = &self.context;

        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        ctx.set_fill_style(&JsValue::from(BACKGROUND));
        ctx.fill_rect(0.0, 0.0, self.width, self.height);

        if self.series.is_empty() {
            self.draw_no_data_message();
            return;
        }

        let (min, max) = match self.series.price_range() {
            Some(range) => range,
            None => return,
        };
        // Flat series still needs a non-zero vertical span
        let (min, max) = if (max - min).abs() < f64::EPSILON {
            (min - 1.0, max + 1.0)
        } else {
            (min, max)
        };

        let plot_width = self.width - PADDING * 2.0 - PRICE_SCALE_SPACE;
        let plot_height = self.height - PADDING * 2.0 - TIME_SCALE_SPACE;
        let prices = self.series.prices();
        let step = plot_width / (prices.len().max(2) - 1) as f64;

        let y_of = |price: f64| {
            PADDING + plot_height - ((price - min) / (max - min)) * plot_height
        };

        self.draw_grid(min, max, plot_width, &y_of);

        // Price polyline
        ctx.set_stroke_style(&JsValue::from(LINE_COLOR));
        ctx.set_line_width(1.5);
        ctx.begin_path();
        for (i, &price) in prices.iter().enumerate() {
            let x = PADDING + step * i as f64;
            if i == 0 {
                ctx.move_to(x, y_of(price));
            } else {
                ctx.line_to(x, y_of(price));
            }
        }
        ctx.stroke();

        self.draw_time_labels(step);
    }

    fn draw_grid(
        &self,
        min: f64,
        max: f64,
        plot_width: f64,
        y_of: &impl Fn(f64) -> f64,
    ) {
        let ctx = &self.context;
        ctx.set_stroke_style(&JsValue::from(GRID_COLOR));
        ctx.set_fill_style(&JsValue::from(TEXT_COLOR));
        ctx.set_font("10px monospace");
        ctx.set_line_width(0.5);

        let rows = 4;
        for row in 0..=rows {
            let price = min + (max - min) * row as f64 / rows as f64;
            let y = y_of(price);
            ctx.begin_path();
            ctx.move_to(PADDING, y);
            ctx.line_to(PADDING + plot_width, y);
            ctx.stroke();
            let _ = ctx.fill_text(
                &format!("{:.2}", price),
                PADDING + plot_width + 4.0,
                y + 3.0,
            );
        }
    }

    fn draw_time_labels(&self, step: f64) {
        let ctx = &self.context;
        let labels = self.series.labels();
        if labels.is_empty() {
            return;
        }

        ctx.set_fill_style(&JsValue::from(TEXT_COLOR));
        ctx.set_font("10px monospace");

        let y = self.height - PADDING;
        let picks = [0, labels.len() / 2, labels.len() - 1];
        for &i in &picks {
            let x = PADDING + step * i as f64;
            let _ = ctx.fill_text(&labels[i], x, y);
        }
    }

    fn draw_no_data_message(&self) {
        let ctx = &self.context;
        ctx.set_fill_style(&JsValue::from(TEXT_COLOR));
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No chart data", self.width / 2.0 - 44.0, self.height / 2.0);
    }
}
