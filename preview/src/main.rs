//! Desktop preview app for myrtio-eyes
//!
//! Renders the eyes on a simulated 128x64 monochrome display with
//! interactive controls. All state changes go through the control channel.

mod demo;

use std::time::{Instant as StdInstant, SystemTime, UNIX_EPOCH};

use eframe::egui::{self};
use myrtio_eyes::{
    Canvas, ControlChannel, EyesConfig, EyesRemote, FrameScheduler, Instant, Mood, Position,
    Renderer,
};

use demo::DemoSequence;

const SCREEN_WIDTH: usize = 128;
const SCREEN_HEIGHT: usize = 64;

/// Default size of each display pixel in window points
const PIXEL_SIZE: f32 = 6.0;

/// Static control channel for communication between UI and renderer
static CONTROL_CHANNEL: ControlChannel = ControlChannel::new();

type Display = Canvas<SCREEN_WIDTH, SCREEN_HEIGHT>;

/// Position buttons laid out as on screen
const POSITION_GRID: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::Top, Position::TopRight],
    [Position::Left, Position::Center, Position::Right],
    [Position::BottomLeft, Position::Bottom, Position::BottomRight],
];

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Eyes Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-eyes-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// Renderer and simulated display
    scheduler: FrameScheduler<'static, Display>,
    /// Remote for UI changes
    remote: EyesRemote<'static>,

    // UI state (tracked to detect changes and send intents)
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Synthetic time of the next frame
    next_frame_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Display pixel size in window points
    pixel_size: f32,
    open: bool,
    idle: bool,
    mood: Mood,
    /// Scripted demo, when enabled
    demo: Option<DemoSequence>,
}

impl PreviewApp {
    fn new() -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(0);
        let renderer = Renderer::new(CONTROL_CHANNEL.receiver(), &EyesConfig::DEFAULT, seed);
        let scheduler = FrameScheduler::new(renderer, Display::new());

        Self {
            scheduler,
            remote: CONTROL_CHANNEL.remote(),
            t_ms: 0,
            next_frame_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            pixel_size: PIXEL_SIZE,
            open: false,
            idle: false,
            mood: Mood::Neutral,
            demo: None,
        }
    }

    fn toggle_demo(&mut self, enabled: bool) {
        if !enabled {
            self.demo = None;
            return;
        }
        self.open = true;
        self.demo = Some(DemoSequence::start(&self.remote, self.t_ms));
    }

    /// Reset time to zero
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.next_frame_ms = 0;
        self.last_frame = StdInstant::now();
        if self.demo.is_some() {
            self.toggle_demo(true);
        }
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Run every frame that is due at the current synthetic time
    fn step_frames(&mut self) {
        if let Some(demo) = self.demo.as_mut() {
            demo.update(&self.remote, self.t_ms);
        }

        while self.next_frame_ms <= self.t_ms {
            let Ok(result) = self.scheduler.tick(Instant::from_millis(self.t_ms));
            self.next_frame_ms = result.next_deadline.as_millis();
        }
    }

    fn playback_controls(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                if ui.button("⏮ Reset").clicked() {
                    self.reset_time();
                }
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }
            });

            ui.add_space(4.0);

            let secs = self.t_ms / 1000;
            let ms = self.t_ms % 1000;
            ui.label(format!("Time: {secs}.{ms:03}s"));

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
            });

            ui.horizontal(|ui| {
                ui.label("Pixel size:");
                ui.add(egui::Slider::new(&mut self.pixel_size, 2.0..=12.0));
            });
        });
    }

    fn eye_controls(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            let old_open = self.open;
            ui.checkbox(&mut self.open, "Open");
            if self.open != old_open {
                self.remote.set_open(self.open);
            }

            let old_idle = self.idle;
            ui.checkbox(&mut self.idle, "Idle");
            if self.idle != old_idle {
                self.remote.set_idle(self.idle);
            }

            let mut demo_enabled = self.demo.is_some();
            ui.checkbox(&mut demo_enabled, "Demo");
            if demo_enabled != self.demo.is_some() {
                self.toggle_demo(demo_enabled);
            }
            if let Some(demo) = &self.demo {
                ui.label(format!("Step: {}", demo.current_label()));
            }

            ui.horizontal(|ui| {
                ui.label("Mood:");
                let mut selected_mood = self.mood;
                egui::ComboBox::from_id_salt("mood_selector")
                    .selected_text(self.mood.as_str())
                    .show_ui(ui, |ui| {
                        for mood in Mood::ALL {
                            ui.selectable_value(&mut selected_mood, mood, mood.as_str());
                        }
                    });
                if selected_mood != self.mood {
                    self.mood = selected_mood;
                    self.remote.set_mood(selected_mood);
                }
            });
        });
    }

    fn position_controls(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("position_grid").show(ui, |ui| {
            for row in POSITION_GRID {
                for position in row {
                    if ui.button(position.as_str()).clicked() {
                        self.remote.set_position(position);
                    }
                }
                ui.end_row();
            }
        });
    }

    fn paint_display(&self, ui: &mut egui::Ui) {
        let display = self.scheduler.display();
        #[allow(clippy::cast_precision_loss)]
        let size = egui::vec2(
            display.width() as f32 * self.pixel_size,
            display.height() as f32 * self.pixel_size,
        );
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let origin = response.rect.min;
        painter.rect_filled(response.rect, 0.0, egui::Color32::BLACK);

        let lit = egui::Color32::from_rgb(170, 220, 255);
        #[allow(clippy::cast_precision_loss)]
        for (y, row) in display.rows().iter().enumerate() {
            for (x, pixel) in row.iter().enumerate() {
                if !*pixel {
                    continue;
                }
                let rect = egui::Rect::from_min_size(
                    egui::pos2(
                        origin.x + x as f32 * self.pixel_size,
                        origin.y + y as f32 * self.pixel_size,
                    ),
                    egui::vec2(self.pixel_size, self.pixel_size),
                );
                painter.rect_filled(rect, 0.0, lit);
            }
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.step_frames();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.playback_controls(ui);
                ui.add_space(16.0);
                self.eye_controls(ui);
                ui.add_space(16.0);
                self.position_controls(ui);
            });

            ui.add_space(16.0);

            self.paint_display(ui);
        });
    }
}
