// DeedFinder - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the UI panels and runs submissions.

use crate::app::state::AppState;
use crate::ui;
use std::path::Path;

/// The DeedFinder application.
pub struct DeedFinderApp {
    pub state: AppState,
}

impl DeedFinderApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn export(&mut self, format: ExportFormat) {
        let (filter, ext) = match format {
            ExportFormat::Csv => ("CSV", "csv"),
            ExportFormat::Json => ("JSON", "json"),
        };
        let Some(dest) = rfd::FileDialog::new()
            .add_filter(filter, &[ext])
            .set_file_name(format!("results.{ext}"))
            .save_file()
        else {
            return;
        };
        self.state.status_message = match self.write_export(format, &dest) {
            Ok(n) => {
                tracing::info!(rows = n, file = %dest.display(), "Results exported");
                format!("Exported {n} rows to {filter}.")
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                format!("{filter} export failed: {e}")
            }
        };
    }

    fn write_export(
        &self,
        format: ExportFormat,
        dest: &Path,
    ) -> crate::util::error::Result<usize> {
        match format {
            ExportFormat::Csv => self.state.export_csv_to(dest),
            ExportFormat::Json => self.state.export_json_to(dest),
        }
    }
}

#[derive(Clone, Copy)]
enum ExportFormat {
    Csv,
    Json,
}

impl eframe::App for DeedFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // pending_submit: the form requested a run last frame. The run blocks
        // this frame until complete.
        if self.state.pending_submit {
            self.state.pending_submit = false;
            self.state.submit();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Browse\u{2026}").clicked() {
                        ui::panels::search_form::browse_folder(&mut self.state);
                        ui.close_menu();
                    }
                    ui.separator();
                    let has_results = self.state.result().is_some();
                    ui.add_enabled_ui(has_results, |ui| {
                        ui.menu_button("Export", |ui| {
                            if ui.button("Export CSV...").clicked() {
                                self.export(ExportFormat::Csv);
                                ui.close_menu();
                            }
                            if ui.button("Export JSON...").clicked() {
                                self.export(ExportFormat::Json);
                                ui.close_menu();
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui.button("Search Summary").clicked() {
                        self.state.show_summary = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar")
            .frame(egui::Frame::default().fill(ui::theme::STATUS_BG).inner_margin(4.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(ui::theme::STATUS_TEXT, &self.state.status_message);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.state.debug_mode {
                            ui.colored_label(ui::theme::STATUS_TEXT, "debug");
                        }
                        if let Some(result) = self.state.result() {
                            ui.colored_label(
                                ui::theme::STATUS_TEXT,
                                format!("{} rows", result.len()),
                            );
                        }
                    });
                });
            });

        // Central panel: form, diagnostics, results
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::search_form::render(ui, &mut self.state);
            ui.add_space(8.0);
            ui.separator();
            ui::panels::diagnostics::render(ui, &self.state);
            ui::panels::results::render(ui, &self.state);
        });

        ui::panels::summary::render(ctx, &mut self.state);

        if self.state.pending_submit {
            self.state.status_message = "Searching\u{2026}".to_string();
            ctx.request_repaint();
        }
    }
}

/// Apply the page visuals and configured body font size.
pub fn configure_style(ctx: &egui::Context, font_size: f32) {
    ctx.set_visuals(ui::theme::visuals());
    ctx.style_mut(|style| {
        for (text_style, font) in style.text_styles.iter_mut() {
            match text_style {
                egui::TextStyle::Body | egui::TextStyle::Button | egui::TextStyle::Monospace => {
                    font.size = font_size;
                }
                egui::TextStyle::Small => font.size = font_size * 0.75,
                _ => {}
            }
        }
    });
}
