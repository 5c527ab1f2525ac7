// DeedFinder - ui/panels/search_form.rs
//
// The search form: title, folder path with Browse, column selector,
// search value, and Submit.
//
// Writes `state.pending_submit`; gui.rs consumes it after the frame's
// panels have rendered.

use crate::app::state::AppState;
use crate::core::model::SearchColumn;
use crate::ui::theme;
use crate::util::constants;

/// Render the search form.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(6.0);
    ui.label(
        egui::RichText::new(constants::FORM_TITLE)
            .size(theme::TITLE_SIZE)
            .strong()
            .color(theme::TITLE_TEXT),
    );
    ui.add_space(10.0);

    egui::Grid::new("search_form")
        .num_columns(2)
        .min_col_width(theme::FORM_LABEL_WIDTH)
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            ui.label("Folder Path:");
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.folder_path)
                        .desired_width(theme::FOLDER_FIELD_WIDTH)
                        .hint_text("Folder containing .xls / .xlsx files"),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    state.pending_submit = true;
                }
                if ui
                    .button("Browse\u{2026}")
                    .on_hover_text("Pick the folder to search")
                    .clicked()
                {
                    browse_folder(state);
                }
            });
            ui.end_row();

            ui.label("Select Column to Search:");
            egui::ComboBox::from_id_salt("search_column")
                .selected_text(state.column.label())
                .width(theme::FOLDER_FIELD_WIDTH / 2.0)
                .show_ui(ui, |ui| {
                    for column in SearchColumn::all() {
                        ui.selectable_value(&mut state.column, *column, column.label());
                    }
                });
            ui.end_row();

            ui.label("Enter Search Value:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.term)
                    .desired_width(theme::FOLDER_FIELD_WIDTH),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                state.pending_submit = true;
            }
            ui.end_row();
        });

    ui.add_space(8.0);
    if ui.button("Submit").clicked() {
        state.pending_submit = true;
    }
}

/// Open the native folder picker and copy the choice into the form.
pub fn browse_folder(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new();
    let current = std::path::Path::new(state.folder_path.trim());
    if current.is_dir() {
        dialog = dialog.set_directory(current);
    }
    if let Some(path) = dialog.pick_folder() {
        state.folder_path = path.display().to_string();
    }
}
