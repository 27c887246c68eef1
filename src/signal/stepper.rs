use crate::signal::axis::convolution_span;
use crate::signal::Signal;
/// One term `x(i)·δ(n - i)` of the impulse decomposition of x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpulseComponent {
    pub index: i64,
    pub value: f64,
}
impl ImpulseComponent {
    pub fn impulse_label(&self) -> String {
        term_label("δ", self.index)
    }
    pub fn response_label(&self) -> String {
        term_label("h", self.index)
    }
}
// x(2)·δ(n - 2), x(-1)·δ(n + 1)
fn term_label(symbol: &str, index: i64) -> String {
    if index >= 0 {
        format!("x({index})·{symbol}(n - {index})")
    } else {
        format!("x({index})·{symbol}(n + {})", -index)
    }
}
/// Lazy walk over the samples of a signal, one unit impulse per sample.
#[derive(Clone, Debug)]
pub struct Decomposition<'a> {
    signal: &'a Signal,
    next: usize,
}
impl Iterator for Decomposition<'_> {
    type Item = ImpulseComponent;
    fn next(&mut self) -> Option<Self::Item> {
        let value = *self.signal.samples().get(self.next)?;
        let component = ImpulseComponent {
            index: self.signal.start() + self.next as i64,
            value,
        };
        self.next += 1;
        Some(component)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.signal.len() - self.next;
        (left, Some(left))
    }
}
impl ExactSizeIterator for Decomposition<'_> {}
/// `x(i)·h(n - i)` for one impulse of x.
#[derive(Clone, Debug, PartialEq)]
pub struct ShiftedResponse {
    pub component: ImpulseComponent,
    pub signal: Signal,
}
/// Produces the impulse decomposition of x, the shifted copies of h and their sum y.
#[derive(Clone, Copy, Debug)]
pub struct ConvolutionStepper<'a> {
    x: &'a Signal,
    h: &'a Signal,
}
impl<'a> ConvolutionStepper<'a> {
    pub fn new(x: &'a Signal, h: &'a Signal) -> Self {
        Self { x, h }
    }
    pub fn decompose(&self) -> Decomposition<'a> {
        Decomposition {
            signal: self.x,
            next: 0,
        }
    }
    /// h delayed by the impulse index and scaled by its weight; starts at `start_h + i`.
    pub fn shift_and_scale(&self, component: ImpulseComponent) -> ShiftedResponse {
        ShiftedResponse {
            component,
            signal: self.h.scaled_shifted(component.index, component.value),
        }
    }
    /// One shifted response per impulse, in increasing impulse index order.
    pub fn steps(&self) -> impl Iterator<Item = ShiftedResponse> + Clone + 'a {
        let stepper = *self;
        self.decompose()
            .map(move |component| stepper.shift_and_scale(component))
    }
    /// Full linear convolution, starting at `start_x + start_h`.
    pub fn convolve(&self) -> Signal {
        let (start, _) = convolution_span(self.x, self.h);
        let mut samples = vec![0.0; self.x.len() + self.h.len() - 1];
        // ascending k for every output sample
        for (k, &xk) in self.x.samples().iter().enumerate() {
            for (j, &hj) in self.h.samples().iter().enumerate() {
                samples[k + j] += xk * hj;
            }
        }
        Signal::from_nonempty(samples, start)
    }
}
