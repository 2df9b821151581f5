// src/gui.rs
use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, RichText};

use ecg_strip::signal::{StripPipeline, SyntheticEcgSource};
use ecg_strip::{CurveStats, EguiSurface, GapPolicy, Strip, StripConfig, StripError};

pub struct EcgStripApp {
    config: StripConfig,
    strip: Strip<EguiSurface>,
    pipeline: StripPipeline<SyntheticEcgSource>,

    // playback
    is_streaming: bool,
    last_tick: Instant,
    pending_samples: f64,
    last_stats: CurveStats,

    // signal controls
    heart_rate: f64,
    noise: f64,
    dropout: f64,

    log_messages: Vec<String>,
}

impl EcgStripApp {
    pub fn new(config: StripConfig) -> Result<Self, StripError> {
        let strip = build_strip(&config)?;
        let baseline = f64::from(config.height) * 0.4;
        let gain = f64::from(config.height) * 0.45;
        let source = SyntheticEcgSource::new(config.sampling_rate, baseline, gain);
        let heart_rate = source.heart_rate();
        let pipeline = StripPipeline::new(source, &config)?;
        let geometry = strip.geometry();
        let mut app = Self {
            config,
            strip,
            pipeline,
            is_streaming: true,
            last_tick: Instant::now(),
            pending_samples: 0.0,
            last_stats: CurveStats::default(),
            heart_rate,
            noise: 0.0,
            dropout: 0.0,
            log_messages: Vec::new(),
        };
        app.log(&format!(
            "{} cells, {} samples per period ({:.2} s)",
            geometry.cells_per_period(),
            geometry.samples_per_period(),
            geometry.period_seconds()
        ));
        Ok(app)
    }

    fn log(&mut self, msg: &str) {
        log::info!("{msg}");
        self.log_messages.push(format!("> {msg}"));
        if self.log_messages.len() > 8 {
            self.log_messages.remove(0);
        }
    }

    /// Moves the synthetic stream forward by the wall time since the last tick.
    fn advance(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick).as_secs_f64();
        self.last_tick = now;
        if !self.is_streaming {
            return;
        }
        self.pending_samples += elapsed * self.config.sampling_rate;
        let due = self.pending_samples.floor() as usize;
        if due == 0 {
            return;
        }
        match self.pipeline.pump_samples(due) {
            Ok(taken) => self.pending_samples -= taken as f64,
            Err(err) => {
                self.is_streaming = false;
                self.log(&format!("stream stopped: {err}"));
            }
        }
    }

    fn set_gap_policy(&mut self, policy: GapPolicy) {
        if self.config.gap_policy == policy {
            return;
        }
        // configuration is fixed per strip
        let config = StripConfig {
            gap_policy: policy,
            ..self.config.clone()
        };
        match build_strip(&config) {
            Ok(strip) => {
                self.strip = strip;
                self.config = config;
                self.log(&format!("gap policy: {policy:?}"));
            }
            Err(err) => self.log(&format!("rebuild failed: {err}")),
        }
    }
}

fn build_strip(config: &StripConfig) -> Result<Strip<EguiSurface>, StripError> {
    let background = config.background;
    Strip::create(config.clone(), |width, height| {
        EguiSurface::new(width, height, background)
    })
}

impl eframe::App for EcgStripApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance();
        let frame = self.pipeline.latest_frame();
        self.last_stats = self.strip.draw_curve(&frame);

        egui::SidePanel::left("controls").min_width(260.0).show(ctx, |ui| {
            ui.add_space(10.0);
            ui.heading("ECG strip");
            ui.separator();

            let stream_btn = if self.is_streaming { "PAUSE" } else { "RESUME" };
            if ui.button(stream_btn).clicked() {
                self.is_streaming = !self.is_streaming;
                self.last_tick = Instant::now();
            }

            ui.add_space(10.0);
            ui.label("SIGNAL");
            if ui
                .add(egui::Slider::new(&mut self.heart_rate, 30.0..=200.0).text("bpm"))
                .changed()
            {
                self.pipeline.source_mut().set_heart_rate(self.heart_rate);
            }
            if ui
                .add(egui::Slider::new(&mut self.noise, 0.0..=10.0).text("noise px"))
                .changed()
            {
                self.pipeline.source_mut().set_noise(self.noise);
            }
            if ui
                .add(egui::Slider::new(&mut self.dropout, 0.0..=0.2).text("dropout"))
                .changed()
            {
                self.pipeline.source_mut().set_dropout(self.dropout);
            }

            ui.add_space(10.0);
            ui.label("GAPS");
            let mut policy = self.config.gap_policy;
            ui.horizontal(|ui| {
                ui.selectable_value(&mut policy, GapPolicy::Break, "BREAK");
                ui.selectable_value(&mut policy, GapPolicy::ZeroFill, "ZERO");
            });
            self.set_gap_policy(policy);

            ui.add_space(10.0);
            ui.separator();
            let geometry = self.strip.geometry();
            ui.monospace(format!(
                "cell {} px / block {} px",
                geometry.cell_size(),
                geometry.block_size()
            ));
            ui.monospace(format!(
                "{:.0} Hz, {:.1} samples/cell",
                geometry.sampling_rate(),
                geometry.samples_per_cell()
            ));
            ui.monospace(format!("period {:.2} s", geometry.period_seconds()));
            ui.monospace(format!(
                "window {}/{}",
                self.pipeline.window().len(),
                self.pipeline.window().capacity()
            ));
            ui.monospace(format!("segments {}", self.last_stats.segments));

            ui.add_space(10.0);
            egui::ScrollArea::vertical().max_height(120.0).show(ui, |ui| {
                for m in &self.log_messages {
                    ui.monospace(m);
                }
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::from_gray(24)))
            .show(ctx, |ui| {
                let surface = self.strip.surface();
                let (response, painter) =
                    ui.allocate_painter(surface.size(), egui::Sense::hover());
                surface.paint(&painter, response.rect.min);
                if !self.is_streaming {
                    ui.label(RichText::new("paused").color(Color32::YELLOW));
                }
            });

        if self.is_streaming {
            let interval = Duration::from_secs_f64(1.0 / self.config.refresh_hz);
            ctx.request_repaint_after(interval);
        }
    }
}
