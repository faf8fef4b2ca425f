//! Assignment dashboard: filter, validation banner and one card per assignment

use crate::core::{
    error_banner, primary_button, secondary_button, Card, Colors, Spacing, StyledInput, Styles,
    Typography,
};
use assignment_board_core::{
    Assignment, AssignmentBoard, AssignmentId, Filter, Submission, SubmissionKind,
};
use egui::{ComboBox, Hyperlink, RichText, ScrollArea, Ui, Widget};

pub struct BoardView {
    pub course_title: String,
    /// Mirrors the draft link so the text field has something to edit
    link_buffer: String,
}

impl BoardView {
    pub fn new(course_title: impl Into<String>) -> Self {
        Self {
            course_title: course_title.into(),
            link_buffer: String::new(),
        }
    }

    pub fn show(&mut self, ui: &mut Ui, board: &AssignmentBoard) -> BoardAction {
        let mut action = BoardAction::None;

        if self.link_buffer != board.draft().link() {
            self.link_buffer = board.draft().link().to_string();
        }

        ui.vertical(|ui| {
            ui.add_space(Spacing::MD);
            ui.label(
                RichText::new(&self.course_title)
                    .size(Typography::FONT_TITLE)
                    .strong()
                    .color(Colors::TEXT_PRIMARY),
            );
            ui.add_space(Spacing::SM);

            ui.horizontal(|ui| {
                ui.label("Filter Assignments:");
                let mut filter = board.filter();
                ComboBox::from_id_source("assignment_filter")
                    .selected_text(filter.label())
                    .show_ui(ui, |ui| {
                        for option in Filter::ALL {
                            ui.selectable_value(&mut filter, option, option.label());
                        }
                    });
                if filter != board.filter() {
                    action = BoardAction::SetFilter(filter);
                }
            });

            if let Some(message) = board.error_message() {
                error_banner(ui, message);
            }

            ui.add_space(Spacing::SM);
            ui.heading(board.filter().heading());

            let visible: Vec<&Assignment> = board.visible_assignments().collect();
            if visible.is_empty() {
                ui.label(RichText::new(board.filter().empty_message()).color(Colors::TEXT_SECONDARY));
                return;
            }

            ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for assignment in visible {
                        self.render_card(ui, board, assignment, &mut action);
                    }
                });
            });
        });

        action
    }

    fn render_card(
        &mut self,
        ui: &mut Ui,
        board: &AssignmentBoard,
        assignment: &Assignment,
        action: &mut BoardAction,
    ) {
        Card::new().width(Styles::CARD_WIDTH).show(ui, |ui| {
            ui.label(
                RichText::new(assignment.title())
                    .size(Typography::FONT_HEADING)
                    .strong(),
            );
            field_row(ui, "Deadline:", &assignment.deadline().format("%Y-%m-%d").to_string());

            ui.horizontal(|ui| {
                ui.label(RichText::new("Status:").strong());
                let color = if assignment.is_submitted() {
                    Colors::SUBMITTED
                } else {
                    Colors::PENDING
                };
                ui.colored_label(color, assignment.status_label());
            });

            if assignment.is_submitted() {
                field_row(ui, "Grade:", &assignment.grade_label());
            } else {
                self.render_submit_section(ui, board, assignment.id(), action);
            }

            ui.separator();

            match download_area(assignment) {
                DownloadArea::File(_) => {
                    if secondary_button("Download").ui(ui).clicked() {
                        *action = BoardAction::Download(assignment.id());
                    }
                }
                DownloadArea::Link(url) => {
                    ui.add(Hyperlink::from_label_and_url("View Link", url).open_in_new_tab(true));
                }
                DownloadArea::NotAvailable => {
                    ui.label(RichText::new("Not Available").color(Colors::TEXT_SECONDARY));
                }
            }
        });
    }

    fn render_submit_section(
        &mut self,
        ui: &mut Ui,
        board: &AssignmentBoard,
        id: AssignmentId,
        action: &mut BoardAction,
    ) {
        ui.horizontal(|ui| {
            ui.label("Submit as:");
            let mut kind = board.submission_kind();
            ComboBox::from_id_source(("submission_kind", id))
                .selected_text(kind.label())
                .show_ui(ui, |ui| {
                    for option in SubmissionKind::ALL {
                        ui.selectable_value(&mut kind, option, option.label());
                    }
                });
            if kind != board.submission_kind() {
                *action = BoardAction::SetKind(kind);
            }
        });

        match board.submission_kind() {
            SubmissionKind::File => {
                ui.horizontal(|ui| {
                    if secondary_button("Choose file…").ui(ui).clicked() {
                        *action = BoardAction::PickFile;
                    }
                    let chosen = board
                        .draft()
                        .file()
                        .map(|f| f.name())
                        .unwrap_or("No file chosen");
                    ui.label(RichText::new(chosen).color(Colors::TEXT_SECONDARY));
                });
            }
            SubmissionKind::Link => {
                let response = StyledInput::new(&mut self.link_buffer)
                    .hint_text("Enter assignment link")
                    .show(ui);
                if response.changed() {
                    *action = BoardAction::EditLink(self.link_buffer.clone());
                }
            }
        }

        if primary_button("Submit")
            .enabled(board.can_submit())
            .ui(ui)
            .clicked()
        {
            *action = BoardAction::Submit(id);
        }
    }
}

fn field_row(ui: &mut Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).strong());
        ui.label(value);
    });
}

/// What the bottom of a card offers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadArea<'a> {
    /// Save the submitted file
    File(&'a str),
    /// Open the submitted URL externally
    Link(&'a str),
    NotAvailable,
}

pub fn download_area(assignment: &Assignment) -> DownloadArea<'_> {
    match assignment.submission() {
        Some(Submission::File(file)) => DownloadArea::File(file.name()),
        Some(Submission::Link(url)) => DownloadArea::Link(url),
        None => DownloadArea::NotAvailable,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BoardAction {
    None,
    SetFilter(Filter),
    SetKind(SubmissionKind),
    PickFile,
    EditLink(String),
    Submit(AssignmentId),
    Download(AssignmentId),
}
