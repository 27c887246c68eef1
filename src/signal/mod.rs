// src/signal/mod.rs
pub mod axis;
pub mod error;
pub mod figure;
pub mod parse;
pub mod pipeline;
pub mod plot;
pub mod sequence;
pub mod stepper;
pub use axis::{AxisPlanner, TimeAxis};
pub use error::SignalError;
pub use figure::{FigureKind, StemFigure};
pub use pipeline::ConvolutionScene;
pub use plot::{render_stem_png, PlotStyle};
pub use sequence::Signal;
