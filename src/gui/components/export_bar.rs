// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{config::options::ExportFormat, file, gui::app::App};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { Csv, Tsv }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Format ---
    {
        let export = &mut app.state.options.export;
        let prev_fmt = match export.format {
            ExportFormat::Csv => UiFormat::Csv,
            ExportFormat::Tsv => UiFormat::Tsv,
        };
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");

            ui.separator();
            ui.checkbox(&mut app.state.gui.show_description, "Show description");
        });

        if fmt != prev_fmt {
            export.set_format(match fmt {
                UiFormat::Csv => ExportFormat::Csv,
                UiFormat::Tsv => ExportFormat::Tsv,
            });
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions (Copy / Export) ---
    ui.horizontal(|ui| {
        let busy = app.running();

        if ui.add_enabled(!busy, egui::Button::new("Copy")).clicked() {
            if app.data.rows.is_empty() {
                app.status("Nothing to copy");
                logd!("Copy: Clicked, but there's nothing to copy");
            } else {
                match file::to_export_string(&app.data, app.state.options.export.format) {
                    Ok(txt) => {
                        logf!("Copy: rows={}, headers={}", app.data.row_count(), app.data.header_count());
                        ui.ctx().copy_text(txt);
                        app.status("Copied to clipboard");
                    }
                    Err(e) => {
                        loge!("Copy: Error: {e}");
                        app.status(format!("Copy error: {e}"));
                    }
                }
            }
        }

        if ui.add_enabled(!busy, egui::Button::new("Export")).clicked() {
            app.commit_out_path();
            match file::write_export(&app.state.options.export, &app.data) {
                Ok(path) => app.status(format!("Exported {} row(s) → {}", app.data.row_count(), path.display())),
                Err(e) => {
                    loge!("Export: Error: {e}");
                    app.status(format!("Export error: {e}"));
                }
            }
        }

        let status = crate::gui::app::read_status(&app.status);
        ui.label(format!("Status: {status}"));
    });
}
