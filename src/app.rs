use crate::constants::*;
use crate::error::DecodeError;
use crate::fonts;
use crate::params::PathParameters;
use crate::render;
use crate::session::Session;
use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, info, warn};

// ── App ─────────────────────────────────────────────────────────────────────

pub struct NomoguideApp {
    session: Session,
    texture: Option<egui::TextureHandle>,
    /// Chart generation and parameters behind `texture`.
    rendered: Option<(u64, PathParameters)>,
    error: Option<String>,
}

impl NomoguideApp {
    pub fn new(cc: &eframe::CreationContext<'_>, initial: Option<PathBuf>) -> Self {
        fonts::install_thai_fallback(&cc.egui_ctx);

        let mut app = Self {
            session: Session::default(),
            texture: None,
            rendered: None,
            error: None,
        };
        if let Some(path) = initial {
            let result = app.session.load_path(&path);
            app.report(result);
        }
        app
    }

    fn report(&mut self, result: Result<(), DecodeError>) {
        self.error = result.err().map(|e| e.to_string());
    }

    fn pick_file(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("PNG / JPEG", &["png", "jpg", "jpeg"])
            .pick_file();
        if let Some(path) = picked {
            let result = self.session.load_path(&path);
            self.report(result);
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        // One chart at a time; extra files in the same drop are ignored.
        let Some(file) = dropped.into_iter().next() else {
            return;
        };
        let result = match (&file.bytes, &file.path) {
            (Some(bytes), _) => self.session.load_bytes(&file.name, bytes),
            (None, Some(path)) => self.session.load_path(path),
            (None, None) => return,
        };
        self.report(result);
    }

    fn refresh_texture(&mut self, ctx: &egui::Context) {
        let (Some(source), Some(params)) = (self.session.source(), self.session.params) else {
            self.texture = None;
            self.rendered = None;
            return;
        };
        let key = (self.session.generation(), params);
        if self.texture.is_some() && self.rendered == Some(key) {
            return;
        }

        debug!(?params, "Rendering guide");
        let annotated = render::render(source, &params);
        let size = [annotated.width() as usize, annotated.height() as usize];
        let color_image = egui::ColorImage::from_rgb(size, annotated.as_raw());
        match &mut self.texture {
            Some(texture) => texture.set(color_image, egui::TextureOptions::LINEAR),
            None => {
                self.texture =
                    Some(ctx.load_texture("annotated", color_image, egui::TextureOptions::LINEAR));
            }
        }
        self.rendered = Some(key);
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let Some(source) = self.session.source() else {
            return;
        };
        let (width, height) = (source.width(), source.height());
        let Some(params) = self.session.params.as_mut() else {
            return;
        };

        ui.heading("เส้นทางการอ่านค่า");
        ui.add_space(4.0);
        for (value, max, label) in [
            (&mut params.start_x, width, LABEL_START_X),
            (&mut params.top_y, height, LABEL_TOP_Y),
            (&mut params.mid_x, width, LABEL_MID_X),
            (&mut params.turn_y, height, LABEL_TURN_Y),
            (&mut params.end_x, width, LABEL_END_X),
            (&mut params.base_y, height, LABEL_BASE_Y),
        ] {
            ui.label(label);
            ui.add(egui::Slider::new(value, 0..=max));
            ui.add_space(2.0);
        }
        *params = params.clamped_to(width, height);

        ui.separator();
        let (x, y) = params.terminal();
        ui.label(format!("ปลายลูกศร: ({x}, {y})"));

        let params = *params;
        ui.horizontal(|ui| {
            if ui.button("Reset").clicked() {
                self.session.reset_params();
            }
            if ui.button("Copy coordinates").clicked() {
                match params.to_json() {
                    Ok(json) => {
                        ui.ctx().copy_text(json);
                        info!("Coordinates copied to clipboard");
                    }
                    Err(e) => warn!(error = %e, "Could not serialize coordinates"),
                }
            }
        });
    }

    fn chart_view(&mut self, ui: &mut egui::Ui) {
        ui.heading(APP_TITLE);
        ui.horizontal(|ui| {
            if ui.button(UPLOAD_LABEL).clicked() {
                self.pick_file();
            }
            ui.weak(DROP_HINT);
        });
        if let Some(err) = &self.error {
            let color = ui.visuals().error_fg_color;
            ui.colored_label(color, format!("⚠ {err}"));
        }
        ui.separator();

        let (Some(texture), Some(source)) = (&self.texture, self.session.source()) else {
            ui.label(EMPTY_HINT);
            return;
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            let [tw, th] = texture.size();
            let display_width = ui.available_width();
            let display_size =
                egui::vec2(display_width, th as f32 * display_width / tw as f32);
            ui.add(
                egui::Image::from_texture(egui::load::SizedTexture::new(
                    texture.id(),
                    display_size,
                ))
                .fit_to_exact_size(display_size),
            );
            ui.label(format!("{CAPTION} ({})", source.name()));
            ui.add_space(6.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(format!("ℹ {INSTRUCTIONS}"));
            });
        });
    }
}

// ── eframe App impl ────────────────────────────────────────────────────────

impl eframe::App for NomoguideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        if self.session.source().is_some() {
            egui::SidePanel::left("controls")
                .default_width(SIDE_PANEL_WIDTH)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| self.controls(ui));
                });
        }

        self.refresh_texture(ctx);

        egui::CentralPanel::default().show(ctx, |ui| self.chart_view(ui));
    }
}
