// src/visualizer.rs
use crate::signal::{StemFigure, TimeAxis};
use eframe::egui;
use egui::{Color32, RichText, Vec2};
use egui_plot::{
    GridInput, GridMark, Line, MarkerShape, Plot, PlotBounds, PlotPoints, PlotResponse, Points,
};
const PLOT_HEIGHT: f32 = 200.0;
pub fn figure_color(figure: &StemFigure) -> Color32 {
    let (r, g, b) = figure.color.rgb();
    Color32::from_rgb(r, g, b)
}
// One grid mark per integer tick; nothing between them.
fn tick_spacer(axis: &TimeAxis) -> impl Fn(GridInput) -> Vec<GridMark> + 'static {
    let ticks = axis.ticks();
    move |_input| {
        ticks
            .clone()
            .map(|n| GridMark {
                value: n as f64,
                step_size: 1.0,
            })
            .collect()
    }
}
/// Stem plot with fixed x-limits, integer ticks and the session's y maximum.
///
/// Bounds are pinned every frame, so samples above `y_max` are clipped rather than
/// stretching the axis.
pub fn draw_stem_plot(
    ui: &mut egui::Ui,
    id: impl std::hash::Hash,
    figure: &StemFigure,
) -> PlotResponse<()> {
    let color = figure_color(figure);
    if let Some(title) = &figure.title {
        ui.label(RichText::new(title).strong());
    }
    if let Some(caption) = &figure.caption {
        ui.label(RichText::new(caption).monospace().color(color));
    }
    let (x_lo, x_hi) = figure.axis.xlim;
    let mut plot = Plot::new(id)
        .height(PLOT_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .set_margin_fraction(Vec2::ZERO)
        .x_grid_spacer(tick_spacer(&figure.axis));
    if figure.title.is_some() {
        plot = plot.x_axis_label("n");
    }
    let bounds = PlotBounds::from_min_max(
        [x_lo as f64, figure.y_floor()],
        [x_hi as f64, figure.y_max],
    );
    plot.show(ui, |plot_ui| {
        plot_ui.set_plot_bounds(bounds);
        for &(n, v) in &figure.points {
            let x = n as f64;
            plot_ui.line(
                Line::new(PlotPoints::new(vec![[x, 0.0], [x, v]]))
                    .color(color)
                    .width(2.0),
            );
        }
        let markers: Vec<[f64; 2]> = figure.points.iter().map(|&(n, v)| [n as f64, v]).collect();
        plot_ui.points(
            Points::new(PlotPoints::new(markers))
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(4.0)
                .color(color),
        );
    })
}
