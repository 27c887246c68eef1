use log::debug;
use crate::signal::figure::{index_slug, ColorTag, FigureKind, StemFigure};
use crate::signal::parse::parse_signal;
use crate::signal::stepper::ConvolutionStepper;
use crate::signal::{AxisPlanner, Signal, SignalError, TimeAxis};
use crate::types::SignalInput;
/// One full recomputation from the two user inputs: parsed signals, their axes and y.
///
/// Built from scratch on every interaction; nothing is carried over between passes.
#[derive(Clone, Debug)]
pub struct ConvolutionScene {
    pub x: Signal,
    pub h: Signal,
    pub x_axis: TimeAxis,
    pub h_axis: TimeAxis,
    pub global_axis: TimeAxis,
    pub output: Signal,
}
impl ConvolutionScene {
    /// Parses both inputs. Fails as a whole if either one is rejected.
    pub fn build(x: &SignalInput, h: &SignalInput) -> Result<Self, SignalError> {
        let x = parse_signal(&x.text, x.start).map_err(|e| SignalError::for_input("x(n)", e))?;
        let h = parse_signal(&h.text, h.start).map_err(|e| SignalError::for_input("h(n)", e))?;
        Ok(Self::from_signals(x, h))
    }
    pub fn from_signals(x: Signal, h: Signal) -> Self {
        let planner = AxisPlanner::default();
        let x_axis = planner.single(&x);
        let h_axis = planner.single(&h);
        let global_axis = planner.global(&x, &h);
        let output = ConvolutionStepper::new(&x, &h).convolve();
        debug!(
            "scene: x {}@{} h {}@{} -> y {}@{}, global ticks {:?}",
            x.len(),
            x.start(),
            h.len(),
            h.start(),
            output.len(),
            output.start(),
            global_axis.ticks()
        );
        Self {
            x,
            h,
            x_axis,
            h_axis,
            global_axis,
            output,
        }
    }
    pub fn stepper(&self) -> ConvolutionStepper<'_> {
        ConvolutionStepper::new(&self.x, &self.h)
    }
    /// x(n) followed by one impulse plot per sample, all on x's own axis.
    pub fn input_column(&self, y_max: f64) -> Vec<StemFigure> {
        let mut figures = vec![StemFigure {
            name: "x".into(),
            kind: FigureKind::Signal,
            title: Some("x(n)".into()),
            caption: None,
            points: self.x.points().collect(),
            axis: self.x_axis.clone(),
            y_max,
            color: ColorTag::C0,
            grid: false,
        }];
        figures.extend(self.stepper().decompose().map(|component| StemFigure {
            name: format!("impulse_{}", index_slug(component.index)),
            kind: FigureKind::Impulse,
            title: None,
            caption: Some(component.impulse_label()),
            points: vec![(component.index, component.value)],
            axis: self.x_axis.clone(),
            y_max,
            color: ColorTag::C0,
            grid: true,
        }));
        figures
    }
    /// h(n), the shifted responses on the global axis, then y(n).
    pub fn response_column(&self, y_max: f64) -> Vec<StemFigure> {
        let mut figures = vec![StemFigure {
            name: "h".into(),
            kind: FigureKind::Signal,
            title: Some("h(n)".into()),
            caption: None,
            points: self.h.points().collect(),
            axis: self.h_axis.clone(),
            y_max,
            color: ColorTag::C1,
            grid: false,
        }];
        figures.extend(self.stepper().steps().map(|step| StemFigure {
            name: format!("response_{}", index_slug(step.component.index)),
            kind: FigureKind::Response,
            title: None,
            caption: Some(step.component.response_label()),
            points: step.signal.points().collect(),
            axis: self.global_axis.clone(),
            y_max,
            color: ColorTag::C1,
            grid: true,
        }));
        figures.push(StemFigure {
            name: "y".into(),
            kind: FigureKind::Result,
            title: Some("y(n) = x(n) * h(n)".into()),
            caption: None,
            points: self.output.points().collect(),
            axis: self.global_axis.clone(),
            y_max,
            color: ColorTag::C3,
            grid: false,
        });
        figures
    }
    /// Every figure of the pass in display order, left column first.
    pub fn figures(&self, y_max: f64) -> Vec<StemFigure> {
        let mut all = self.input_column(y_max);
        all.extend(self.response_column(y_max));
        all
    }
}
