use crate::signal::TimeAxis;
/// Matplotlib-style color cycle slots used by the plot families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorTag {
    C0,
    C1,
    C3,
}
impl ColorTag {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorTag::C0 => (0x1f, 0x77, 0xb4),
            ColorTag::C1 => (0xff, 0x7f, 0x0e),
            ColorTag::C3 => (0xd6, 0x27, 0x28),
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FigureKind {
    Signal,
    Impulse,
    Response,
    Result,
}
impl FigureKind {
    /// Heading and explanation shown before the first figure of a section.
    pub fn section(self) -> Option<(&'static str, &'static str)> {
        match self {
            FigureKind::Signal => None,
            FigureKind::Impulse => Some((
                "Signal Decomposition",
                "Breaking down x(n) into scaled and shifted unit impulses:",
            )),
            FigureKind::Response => Some((
                "Convolution Steps",
                "Each component of x(n) produces a shifted and scaled version of h(n):",
            )),
            FigureKind::Result => Some((
                "Convolution Result",
                "The output y(n) is the sum of all shifted impulse responses:",
            )),
        }
    }
}
/// Everything a renderer needs to draw one stem plot.
#[derive(Clone, Debug, PartialEq)]
pub struct StemFigure {
    /// File-name friendly identifier, e.g. `impulse_m1`.
    pub name: String,
    pub kind: FigureKind,
    pub title: Option<String>,
    /// Formula shown above the plot, e.g. `x(1)·δ(n - 1)`.
    pub caption: Option<String>,
    pub points: Vec<(i64, f64)>,
    pub axis: TimeAxis,
    pub y_max: f64,
    pub color: ColorTag,
    pub grid: bool,
}
impl StemFigure {
    /// Lower y-limit: zero, or a little under the most negative sample.
    pub fn y_floor(&self) -> f64 {
        let lowest = self
            .points
            .iter()
            .map(|&(_, v)| v)
            .fold(0.0f64, f64::min);
        if lowest < 0.0 {
            lowest - 0.05 * (self.y_max - lowest)
        } else {
            0.0
        }
    }
}
/// `-3` becomes `m3` so indices can live in file names.
pub fn index_slug(n: i64) -> String {
    if n < 0 {
        format!("m{}", -n)
    } else {
        n.to_string()
    }
}
