// src/gui.rs
use eframe::egui;
use egui::{Color32, RichText};
use crate::config::{AppConfig, YAxisMax, Y_MAX_RANGE};
use crate::export;
use crate::signal::{ConvolutionScene, FigureKind, PlotStyle, SignalError, StemFigure};
use crate::types::SignalInput;
use crate::visualizer;

pub struct SignalLabApp {
    // 输入
    x_input: SignalInput,
    h_input: SignalInput,
    y_max: f64,

    // 导出
    export_dir: String,

    // 界面日志
    log_messages: Vec<String>,
}

impl SignalLabApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            x_input: config.x,
            h_input: config.h,
            y_max: config.y_max.get(),
            export_dir: config.export_dir.display().to_string(),
            log_messages: vec!["SignalLab ready.".to_owned()],
        }
    }

    fn log(&mut self, msg: &str) {
        self.log_messages.push(format!("> {}", msg));
        if self.log_messages.len() > 8 { self.log_messages.remove(0); }
    }

    fn export(&mut self, scene: &ConvolutionScene) {
        let dir = std::path::PathBuf::from(self.export_dir.trim());
        match export::export_scene(scene, self.y_max, &dir, &PlotStyle::default()) {
            Ok(files) => self.log(&format!("Exported {} files to {}", files.len(), dir.display())),
            Err(e) => {
                log::error!("export failed: {e:#}");
                self.log(&format!("Export failed: {e:#}"));
            }
        }
    }
}

// 输入控件：文本 + 起始索引
fn signal_inputs(ui: &mut egui::Ui, label: &str, input: &mut SignalInput) -> bool {
    let mut changed = false;
    ui.label(format!("{label} values (comma-separated, e.g., 1,2,1)"));
    changed |= ui.text_edit_singleline(&mut input.text).changed();
    ui.horizontal(|ui| {
        ui.label(format!("Starting index for {label}"));
        changed |= ui.add(egui::DragValue::new(&mut input.start).speed(1.0)).changed();
    });
    changed
}

fn draw_column(ui: &mut egui::Ui, column: &str, figures: &[StemFigure]) {
    let mut section = FigureKind::Signal;
    for (idx, figure) in figures.iter().enumerate() {
        if figure.kind != section {
            section = figure.kind;
            if let Some((heading, blurb)) = section.section() {
                ui.add_space(10.0);
                ui.heading(heading);
                ui.label(blurb);
            }
        }
        ui.push_id((column, idx), |ui| {
            visualizer::draw_stem_plot(ui, (column, idx, "plot"), figure);
        });
    }
}

fn draw_error(ui: &mut egui::Ui, err: &SignalError) {
    ui.label(RichText::new(format!("⚠ {err}")).color(Color32::RED));
}

impl eframe::App for SignalLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. 每次交互都从头计算
        let scene = ConvolutionScene::build(&self.x_input, &self.h_input);
        let y_max = YAxisMax::new(self.y_max).get();

        // 2. 侧边栏：配置与导出
        egui::SidePanel::left("config").min_width(240.0).show(ctx, |ui| {
            ui.add_space(10.0);
            ui.heading("SignalLab");
            ui.label("Discrete-time convolution");
            ui.separator();

            ui.label("Plot Configuration");
            ui.horizontal(|ui| {
                ui.label("Y-axis maximum value");
                ui.add(
                    egui::DragValue::new(&mut self.y_max)
                        .speed(1.0)
                        .clamp_range(Y_MAX_RANGE),
                ).on_hover_text("Set the maximum value for the y-axis in all plots");
            });

            ui.add_space(20.0);
            ui.separator();
            ui.label("EXPORT");
            ui.text_edit_singleline(&mut self.export_dir);
            let exportable = scene.as_ref().ok();
            if ui.add_enabled(exportable.is_some(), egui::Button::new("Export PNG")).clicked() {
                if let Some(scene) = exportable { self.export(scene); }
            }

            ui.add_space(10.0);
            egui::ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
                for m in &self.log_messages { ui.monospace(m); }
            });
        });

        // 3. 两栏：左 x(n) 与分解，右 h(n)、卷积步骤与结果
        let mut changed = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.columns(2, |cols| {
                    cols[0].heading("Input Signal x(n)");
                    changed |= signal_inputs(&mut cols[0], "x(n)", &mut self.x_input);
                    cols[1].heading("Impulse Response h(n)");
                    changed |= signal_inputs(&mut cols[1], "h(n)", &mut self.h_input);

                    match &scene {
                        Ok(scene) => {
                            draw_column(&mut cols[0], "left", &scene.input_column(y_max));
                            draw_column(&mut cols[1], "right", &scene.response_column(y_max));
                        }
                        Err(err) => {
                            let col = if err.input_name() == Some("h(n)") { 1 } else { 0 };
                            draw_error(&mut cols[col], err);
                        }
                    }
                });
            });
        });
        if changed { ctx.request_repaint(); }
    }
}
