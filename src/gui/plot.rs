// src/gui/plot.rs
//
// Static charts painted straight onto an egui Painter. Axis math comes
// from `crate::chart`; this file only maps it to screen space.

use eframe::egui::{
    self, Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2,
    epaint::TextShape, pos2, vec2,
};

use crate::chart::{BarChart, LineChart, Range, format_tick, nice_ticks, tick_step};

const BAR_FILL: Color32 = Color32::from_rgb(76, 114, 176);
const LINE_COLOR: Color32 = Color32::from_rgb(31, 119, 180);

// Category labels read bottom-left to top-right
const LABEL_ANGLE: f32 = -std::f32::consts::FRAC_PI_4;

const TITLE_H: f32 = 28.0;
const Y_AXIS_W: f32 = 72.0;
const RIGHT_PAD: f32 = 16.0;
const X_TITLE_H: f32 = 22.0;
const TICK_LEN: f32 = 4.0;
const Y_TICKS: usize = 6;
const X_TICKS: usize = 10;

/// Data range ↔ screen rect mapping for one chart.
struct Frame {
    plot: Rect,
    x: Range,
    y: Range,
}

impl Frame {
    fn to_screen(&self, x: f64, y: f64) -> Pos2 {
        pos2(
            self.plot.left() + self.x.fraction(x) as f32 * self.plot.width(),
            self.plot.bottom() - self.y.fraction(y) as f32 * self.plot.height(),
        )
    }

    fn y_to_screen(&self, y: f64) -> f32 {
        self.plot.bottom() - self.y.fraction(y) as f32 * self.plot.height()
    }
}

struct Palette {
    text: Color32,
    axis: Color32,
    grid: Color32,
}

impl Palette {
    fn of(ui: &Ui) -> Self {
        let v = ui.visuals();
        Self {
            text: v.text_color(),
            axis: v.weak_text_color(),
            grid: v.widgets.noninteractive.bg_stroke.color,
        }
    }
}

/// Bar chart filling the available space, category labels rotated 45°.
pub fn bar_chart(ui: &mut Ui, chart: &BarChart) {
    let palette = Palette::of(ui);
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let full = response.rect;
    let label_font = FontId::proportional(12.0);

    // Room below the axis for the longest rotated label
    let longest = chart
        .bars
        .iter()
        .map(|b| painter.layout_no_wrap(b.label.clone(), label_font.clone(), palette.text).size().x)
        .fold(0.0_f32, f32::max);
    let label_h = longest * LABEL_ANGLE.cos().abs() + 16.0;

    let plot = Rect::from_min_max(
        pos2(full.left() + Y_AXIS_W, full.top() + TITLE_H),
        pos2(full.right() - RIGHT_PAD, full.bottom() - label_h - X_TITLE_H),
    );
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        return;
    }

    let n = chart.bars.len().max(1);
    let frame = Frame { plot, x: Range { min: 0.0, max: n as f64 }, y: chart.value_range() };

    title(&painter, full, &chart.title, palette.text);
    y_axis(&painter, &frame, &palette, Y_TICKS);

    let slot = plot.width() / n as f32;
    let baseline = frame.y_to_screen(0.0);
    for (i, bar) in chart.bars.iter().enumerate() {
        let cx = plot.left() + slot * (i as f32 + 0.5);
        let top = frame.y_to_screen(bar.value);
        let rect = Rect::from_min_max(
            pos2(cx - slot * 0.4, top.min(baseline)),
            pos2(cx + slot * 0.4, top.max(baseline)),
        );
        painter.rect_filled(rect, 0.0, BAR_FILL);

        let tick_top = pos2(cx, plot.bottom());
        painter.line_segment([tick_top, tick_top + vec2(0.0, TICK_LEN)], Stroke::new(1.0, palette.axis));
        rotated_label(&painter, &bar.label, tick_top + vec2(0.0, TICK_LEN + 2.0), &label_font, palette.text);
    }

    painter.line_segment([pos2(plot.left(), baseline), pos2(plot.right(), baseline)], Stroke::new(1.0, palette.axis));
    painter.text(
        pos2(plot.center().x, full.bottom() - X_TITLE_H * 0.5),
        Align2::CENTER_CENTER,
        &chart.category_label,
        FontId::proportional(13.0),
        palette.text,
    );
    y_title(&painter, full, plot, &chart.value_label, palette.text);

    // Hover readout
    if let Some(pointer) = response.hover_pos().filter(|p| plot.contains(*p)) {
        let i = (((pointer.x - plot.left()) / slot) as usize).min(n - 1);
        if let Some(bar) = chart.bars.get(i) {
            let step = tick_step(frame.y, Y_TICKS);
            painter.text(
                pointer + vec2(10.0, -10.0),
                Align2::LEFT_BOTTOM,
                format!("{}: {}", bar.label, format_tick(bar.value, step / 100.0)),
                FontId::proportional(13.0),
                palette.text,
            );
        }
    }
}

/// One time series in a `size` box, x and y ticks, title on top.
pub fn line_chart(ui: &mut Ui, chart: &LineChart<'_>, size: Vec2) {
    let palette = Palette::of(ui);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let full = response.rect;

    let plot = Rect::from_min_max(
        pos2(full.left() + Y_AXIS_W, full.top() + TITLE_H),
        pos2(full.right() - RIGHT_PAD, full.bottom() - 20.0 - X_TITLE_H),
    );
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        return;
    }
    let frame = Frame { plot, x: chart.x_range(), y: chart.y_range() };

    title(&painter, full, chart.title, palette.text);
    y_axis(&painter, &frame, &palette, Y_TICKS);
    x_axis(&painter, &frame, &palette, X_TICKS);

    let points: Vec<Pos2> = chart.finite_points().map(|(x, y)| frame.to_screen(x, y)).collect();
    if points.len() >= 2 {
        painter.add(Shape::line(points, Stroke::new(1.2, LINE_COLOR)));
    }

    painter.rect_stroke(plot, 0.0, Stroke::new(1.0, palette.axis), egui::StrokeKind::Inside);
    painter.text(
        pos2(plot.center().x, full.bottom() - X_TITLE_H * 0.5),
        Align2::CENTER_CENTER,
        chart.x_label,
        FontId::proportional(13.0),
        palette.text,
    );
    y_title(&painter, full, plot, chart.y_label, palette.text);
}

/* ---------- pieces ---------- */

fn title(painter: &Painter, full: Rect, text: &str, color: Color32) {
    painter.text(
        pos2(full.center().x, full.top() + TITLE_H * 0.5),
        Align2::CENTER_CENTER,
        text,
        FontId::proportional(15.0),
        color,
    );
}

fn y_axis(painter: &Painter, frame: &Frame, palette: &Palette, target: usize) {
    let step = tick_step(frame.y, target);
    for v in nice_ticks(frame.y, target) {
        let y = frame.y_to_screen(v);
        painter.line_segment([pos2(frame.plot.left(), y), pos2(frame.plot.right(), y)], Stroke::new(0.5, palette.grid));
        painter.line_segment(
            [pos2(frame.plot.left() - TICK_LEN, y), pos2(frame.plot.left(), y)],
            Stroke::new(1.0, palette.axis),
        );
        painter.text(
            pos2(frame.plot.left() - TICK_LEN - 3.0, y),
            Align2::RIGHT_CENTER,
            format_tick(v, step),
            FontId::proportional(11.0),
            palette.text,
        );
    }
    painter.line_segment(
        [pos2(frame.plot.left(), frame.plot.top()), pos2(frame.plot.left(), frame.plot.bottom())],
        Stroke::new(1.0, palette.axis),
    );
}

fn x_axis(painter: &Painter, frame: &Frame, palette: &Palette, target: usize) {
    let step = tick_step(frame.x, target);
    for v in nice_ticks(frame.x, target) {
        let x = frame.to_screen(v, frame.y.min).x;
        let bottom = frame.plot.bottom();
        painter.line_segment([pos2(x, bottom), pos2(x, bottom + TICK_LEN)], Stroke::new(1.0, palette.axis));
        painter.text(
            pos2(x, bottom + TICK_LEN + 2.0),
            Align2::CENTER_TOP,
            format_tick(v, step),
            FontId::proportional(11.0),
            palette.text,
        );
    }
}

/// Value-axis title, rotated to read bottom to top.
fn y_title(painter: &Painter, full: Rect, plot: Rect, text: &str, color: Color32) {
    let galley = painter.layout_no_wrap(text.to_owned(), FontId::proportional(13.0), color);
    let size = galley.size();
    // After a -90° turn the galley's width runs upward from `pos`
    let pos = pos2(full.left() + 4.0, plot.center().y + size.x * 0.5);
    painter.add(TextShape::new(pos, galley, color).with_angle(-std::f32::consts::FRAC_PI_2));
}

/// Label whose right end sits on `anchor`, turned by `LABEL_ANGLE`.
fn rotated_label(painter: &Painter, text: &str, anchor: Pos2, font: &FontId, color: Color32) {
    let galley = painter.layout_no_wrap(text.to_owned(), font.clone(), color);
    let size = galley.size();
    let along = vec2(LABEL_ANGLE.cos(), LABEL_ANGLE.sin());
    let down = vec2(-LABEL_ANGLE.sin(), LABEL_ANGLE.cos());
    let pos = anchor - along * size.x - down * (size.y * 0.5);
    painter.add(TextShape::new(pos, galley, color).with_angle(LABEL_ANGLE));
}
