use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::coord::types::{RangedCoordf64, RangedCoordi64};
use plotters::prelude::*;
use crate::signal::error::SignalError;
use crate::signal::figure::StemFigure;
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    /// Captions, tick labels and axis descriptions. Needs a system font.
    pub draw_text: bool,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
            background: WHITE,
            draw_text: true,
        }
    }
}
/// Draw one stem plot into an in-memory bitmap and encode it as PNG.
///
/// The drawing area and its borrow of the pixel buffer are dropped before encoding.
pub fn render_stem_png(figure: &StemFigure, style: &PlotStyle) -> Result<Vec<u8>, SignalError> {
    if figure.points.is_empty() {
        return Err(SignalError::Plot("figure has no samples".into()));
    }
    let (r, g, b) = figure.color.rgb();
    let color = RGBColor(r, g, b);
    let (x_lo, x_hi) = figure.axis.xlim;
    let y_range = figure.y_floor()..figure.y_max;
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;
        let mut builder = ChartBuilder::on(&root);
        builder.margin(10);
        if style.draw_text {
            if let Some(title) = &figure.title {
                builder.caption(title, ("sans-serif", 20).into_font().color(&BLACK));
            }
            builder
                .set_label_area_size(LabelAreaPosition::Left, 40)
                .set_label_area_size(LabelAreaPosition::Bottom, 35);
        }
        let mut chart = builder.build_cartesian_2d(x_lo..x_hi, y_range)?;
        if style.draw_text {
            let ticks = figure.axis.clone();
            let label_ticks = move |n: &i64| {
                if ticks.contains(*n) {
                    n.to_string()
                } else {
                    String::new()
                }
            };
            let mut mesh = chart.configure_mesh();
            mesh.x_labels((x_hi - x_lo + 1) as usize)
                .x_label_formatter(&label_ticks)
                .light_line_style(&BLACK.mix(0.05));
            if !figure.grid {
                mesh.disable_mesh();
            }
            if figure.title.is_some() {
                mesh.x_desc("n");
            }
            mesh.draw()?;
        } else if figure.grid {
            draw_plain_grid(&mut chart, figure)?;
        }
        chart.draw_series(figure.points.iter().map(|&(n, v)| {
            PathElement::new(vec![(n, 0.0), (n, v)], color.stroke_width(2))
        }))?;
        chart.draw_series(
            figure
                .points
                .iter()
                .map(|&(n, v)| Circle::new((n, v), 4, color.filled())),
        )?;
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
type StemChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordi64, RangedCoordf64>>;
// Text-free mesh: one vertical line per tick and four horizontal bands.
fn draw_plain_grid(chart: &mut StemChart<'_, '_>, figure: &StemFigure) -> Result<(), SignalError> {
    let style = BLACK.mix(0.1).stroke_width(1);
    let (x_lo, x_hi) = figure.axis.xlim;
    let (y_lo, y_hi) = (figure.y_floor(), figure.y_max);
    chart.draw_series(
        figure
            .axis
            .ticks()
            .map(|n| PathElement::new(vec![(n, y_lo), (n, y_hi)], style)),
    )?;
    let step = (y_hi - y_lo) / 4.0;
    chart.draw_series((0..=4).map(|k| {
        let y = y_lo + step * k as f64;
        PathElement::new(vec![(x_lo, y), (x_hi, y)], style)
    }))?;
    Ok(())
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, SignalError> {
    let mut output = Vec::new();
    PngEncoder::new(&mut output).write_image(buffer, width, height, ExtendedColorType::Rgb8)?;
    Ok(output)
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{ConvolutionScene, Signal};
    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    fn headless() -> PlotStyle {
        PlotStyle {
            width: 200,
            height: 120,
            draw_text: false,
            ..PlotStyle::default()
        }
    }
    #[test]
    fn every_scene_figure_renders_to_png() {
        let x = Signal::new(vec![1.0, -2.0, 1.0], -1).unwrap();
        let h = Signal::new(vec![1.0, 1.0], 2).unwrap();
        let scene = ConvolutionScene::from_signals(x, h);
        for figure in scene.figures(10.0) {
            let png = render_stem_png(&figure, &headless()).unwrap();
            assert_eq!(&png[..8], &PNG_MAGIC);
        }
    }
    #[test]
    fn headless_grid_is_drawn() {
        let x = Signal::new(vec![2.0, 1.0], -1).unwrap();
        let h = Signal::new(vec![1.0, 1.0, 1.0], 0).unwrap();
        let scene = ConvolutionScene::from_signals(x, h);
        let impulse = scene.input_column(10.0).remove(1);
        assert!(impulse.grid);
        let with_grid = render_stem_png(&impulse, &headless()).unwrap();
        let bare = render_stem_png(
            &StemFigure {
                grid: false,
                ..impulse.clone()
            },
            &headless(),
        )
        .unwrap();
        assert_ne!(with_grid, bare);
    }
    #[test]
    fn png_has_requested_size() {
        let x = Signal::new(vec![1.0, 3.0], 0).unwrap();
        let scene = ConvolutionScene::from_signals(x.clone(), x);
        let figure = scene.response_column(10.0).remove(1);
        let png = render_stem_png(&figure, &headless()).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (200, 120));
    }
    #[test]
    fn empty_figure_is_rejected() {
        let x = Signal::new(vec![1.0], 0).unwrap();
        let scene = ConvolutionScene::from_signals(x.clone(), x);
        let mut figure = scene.figures(10.0).remove(0);
        figure.points.clear();
        assert!(matches!(
            render_stem_png(&figure, &headless()),
            Err(SignalError::Plot(_))
        ));
    }
}
