// DeedFinder - ui/panels/results.rs
//
// Results area: fatal error, caption, and the result grid.
//
// The grid is rendered with `ScrollArea::show_rows`, so only rows in the
// viewport are laid out; the header is drawn once above the scroll area.

use crate::app::state::AppState;
use crate::core::model::AggregatedResult;
use crate::ui::theme;

const INDEX_COL_WIDTH: f32 = 56.0;
const CELL_COL_WIDTH: f32 = 150.0;

/// Render the results for the most recent submission.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    if let Some(ref error) = state.fatal_error {
        ui.colored_label(theme::ERROR_TEXT, error);
        return;
    }

    let Some(caption) = state.result_caption() else {
        return;
    };
    ui.label(egui::RichText::new(caption).strong());
    ui.add_space(4.0);

    if let Some(result) = state.result() {
        render_grid(ui, result);
    }
}

fn render_grid(ui: &mut egui::Ui, result: &AggregatedResult) {
    egui::ScrollArea::horizontal()
        .id_salt("results_h")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    header_cell(ui, "", INDEX_COL_WIDTH);
                    for column in &result.columns {
                        header_cell(ui, column, CELL_COL_WIDTH);
                    }
                });
                ui.separator();

                egui::ScrollArea::vertical()
                    .id_salt("results_v")
                    .auto_shrink([false; 2])
                    .show_rows(ui, theme::ROW_HEIGHT, result.len(), |ui, row_range| {
                        for row in &result.rows[row_range] {
                            ui.horizontal(|ui| {
                                fixed_cell(
                                    ui,
                                    egui::RichText::new(row.index.to_string()).monospace(),
                                    INDEX_COL_WIDTH,
                                );
                                for cell in &row.cells {
                                    fixed_cell(
                                        ui,
                                        egui::RichText::new(cell.to_string()),
                                        CELL_COL_WIDTH,
                                    )
                                    .on_hover_text(row.source.display().to_string());
                                }
                            });
                        }
                    });
            });
        });
}

fn header_cell(ui: &mut egui::Ui, text: &str, width: f32) {
    fixed_cell(ui, egui::RichText::new(text).strong(), width);
}

fn fixed_cell(ui: &mut egui::Ui, text: egui::RichText, width: f32) -> egui::Response {
    ui.add_sized(
        [width, theme::ROW_HEIGHT],
        egui::Label::new(text).truncate(),
    )
}
