//! View Faculty and View Students tabs.
//!
//! Both render a snapshot taken on refresh; they do not follow registry
//! changes until refreshed again.

use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular::ARROWS_CLOCKWISE;

use super::components::{panel_header, styled_button_with_icon};
use super::forms::ListSnapshot;
use crate::registry::{self, Registry};

/// Which collection a list tab shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Faculty,
    Students,
}

impl ListKind {
    fn title(&self) -> &'static str {
        match self {
            ListKind::Faculty => "Faculty List",
            ListKind::Students => "Student List",
        }
    }

    /// Current summary lines from the registry.
    pub fn summaries(&self, reg: &Registry) -> Vec<String> {
        match self {
            ListKind::Faculty => registry::faculty::list_summaries(reg),
            ListKind::Students => registry::student::list_summaries(reg),
        }
    }
}

pub fn show(ui: &mut Ui, kind: ListKind, snapshot: &mut ListSnapshot, reg: &Registry) {
    panel_header(ui, kind.title());

    ui.horizontal(|ui| {
        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            snapshot.refresh(kind.summaries(reg));
        }
        if let Some(lines) = &snapshot.lines {
            ui.label(format!("{} entries", lines.len()));
        }
    });

    ui.add_space(10.0);

    let Some(lines) = &snapshot.lines else {
        ui.label(RichText::new("Press Refresh to load the list.").weak());
        return;
    };

    TableBuilder::new(ui)
        .id_salt(kind.title())
        .striped(true)
        .column(Column::exact(40.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong("Entry");
            });
        })
        .body(|body| {
            body.rows(18.0, lines.len(), |mut row| {
                let i = row.index();
                row.col(|ui| {
                    ui.label((i + 1).to_string());
                });
                row.col(|ui| {
                    ui.label(lines[i].as_str());
                });
            });
        });
}
