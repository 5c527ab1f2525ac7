// DeedFinder - ui/panels/diagnostics.rs
//
// Diagnostics list under the form: config warnings from startup, then one
// line per skipped file or table from the last submission, in order.

use crate::app::state::AppState;
use crate::ui::theme;

pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let run_diagnostics = state
        .outcome
        .as_ref()
        .map(|o| o.diagnostics.as_slice())
        .unwrap_or_default();

    if state.startup_warnings.is_empty() && run_diagnostics.is_empty() {
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("diagnostics")
        .max_height(theme::DIAGNOSTICS_MAX_HEIGHT)
        .show(ui, |ui| {
            for warning in &state.startup_warnings {
                warning_line(ui, warning);
            }
            for diagnostic in run_diagnostics {
                warning_line(ui, &diagnostic.to_string());
            }
        });
    ui.separator();
}

fn warning_line(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(format!("\u{26a0} {text}")).color(theme::WARNING_TEXT));
}
