// DeedFinder - ui/panels/summary.rs
//
// Search summary window: counts and timing for the last submission.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the search summary dialog (if state.show_summary is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_summary {
        return;
    }

    let mut open = true;
    egui::Window::new("Search Summary")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(ref outcome) = state.outcome {
                let summary = &outcome.summary;
                egui::Grid::new("summary_overview")
                    .num_columns(2)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        if let Some(ref criterion) = state.last_criterion {
                            ui.label("Column:");
                            ui.label(&criterion.column);
                            ui.end_row();
                        }

                        ui.label("Spreadsheets found:");
                        ui.label(summary.candidates.to_string());
                        ui.end_row();

                        ui.label("Tables loaded:");
                        ui.label(summary.tables_loaded.to_string());
                        ui.end_row();

                        ui.label("Files skipped:");
                        if summary.files_skipped > 0 {
                            ui.colored_label(
                                theme::WARNING_TEXT,
                                summary.files_skipped.to_string(),
                            );
                        } else {
                            ui.label("0");
                        }
                        ui.end_row();

                        ui.label("Tables searched:");
                        ui.label(summary.tables_searched.to_string());
                        ui.end_row();

                        ui.label("Rows matched:");
                        ui.label(summary.rows_matched.to_string());
                        ui.end_row();

                        ui.label("Diagnostics:");
                        ui.label(outcome.diagnostics.len().to_string());
                        ui.end_row();

                        ui.label("Duration:");
                        ui.label(format!("{:.2}s", summary.duration.as_secs_f64()));
                        ui.end_row();
                    });
            } else {
                ui.label("No search has been completed yet.");
            }

            ui.add_space(8.0);
            ui.separator();
            if ui.button("Close").clicked() {
                state.show_summary = false;
            }
        });

    if !open {
        state.show_summary = false;
    }
}
