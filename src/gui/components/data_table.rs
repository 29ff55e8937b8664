// src/gui/components/data_table.rs
//
// Draws the live table. Purely a view over App::data.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, table};

const DESCRIPTION: &str = "Description";

fn preferred_width(header: &str) -> f32 {
    match header {
        "Job Title" => 220.0,
        "Company Name" => 160.0,
        DESCRIPTION => 360.0,
        "Location" => 140.0,
        h if h.starts_with(crate::config::consts::SKILL_PREFIX) => 90.0,
        _ => 110.0,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let headers: Vec<String> = app
        .data
        .headers
        .clone()
        .unwrap_or_else(|| table::headers(app.state.options.scrape.fields, 0));

    // Visible source columns (Description can be hidden)
    let visible: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| app.state.gui.show_description || h.as_str() != DESCRIPTION)
        .map(|(i, _)| i)
        .collect();

    if app.data.rows.is_empty() {
        ui.label(egui::RichText::new("No jobs yet. Enter a search and press SCRAPE.").weak());
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("job_table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut tb = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("job_table", visible.len()));
            for &ci in &visible {
                let w = preferred_width(&headers[ci]);
                tb = tb.column(Column::initial(w).at_least(40.0).resizable(true).clip(true));
            }

            tb.header(20.0, |mut header| {
                for &ci in &visible {
                    header.col(|ui| {
                        ui.strong(&headers[ci]);
                    });
                }
            })
            .body(|body| {
                let rows = &app.data.rows;
                body.rows(18.0, rows.len(), |mut row| {
                    let Some(data) = rows.get(row.index()) else { return };
                    for &ci in &visible {
                        let cell = data.get(ci).map(String::as_str).unwrap_or("");
                        row.col(|ui| {
                            ui.add(egui::Label::new(cell).truncate()).on_hover_text(cell);
                        });
                    }
                });
            });
        });
}
