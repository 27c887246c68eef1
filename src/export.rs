use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use crate::signal::{render_stem_png, ConvolutionScene, PlotStyle, Signal, TimeAxis};
/// Summary written next to the PNGs.
#[derive(Serialize)]
struct SceneReport<'a> {
    x: &'a Signal,
    h: &'a Signal,
    global_axis: &'a TimeAxis,
    /// Each `x(i)·h(n - i)` laid onto the global axis; columns sum to `y`.
    steps: Vec<StepReport>,
    y: &'a Signal,
    y_max: f64,
}
#[derive(Serialize)]
struct StepReport {
    index: i64,
    weight: f64,
    on_global_axis: Vec<f64>,
}
/// Writes every figure of the pass as `NN_name.png` plus `scene.json` into `dir`.
pub fn export_scene(
    scene: &ConvolutionScene,
    y_max: f64,
    dir: &Path,
    style: &PlotStyle,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("cannot create export directory {}", dir.display()))?;
    let mut written = Vec::new();
    for (idx, figure) in scene.figures(y_max).iter().enumerate() {
        let png = render_stem_png(figure, style)
            .with_context(|| format!("rendering {}", figure.name))?;
        let path = dir.join(format!("{:02}_{}.png", idx + 1, figure.name));
        fs::write(&path, png).with_context(|| format!("writing {}", path.display()))?;
        written.push(path);
    }
    let steps = scene
        .stepper()
        .steps()
        .map(|step| StepReport {
            index: step.component.index,
            weight: step.component.value,
            on_global_axis: step.signal.zero_padded(scene.global_axis.ticks()),
        })
        .collect();
    let report = SceneReport {
        x: &scene.x,
        h: &scene.h,
        global_axis: &scene.global_axis,
        steps,
        y: &scene.output,
        y_max,
    };
    let path = dir.join("scene.json");
    let json = serde_json::to_string_pretty(&report)?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    written.push(path);
    info!("exported {} files to {}", written.len(), dir.display());
    Ok(written)
}
