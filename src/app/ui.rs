use super::{DirectoryUploader, Message};
use crate::upload::{SelectedFile, ACCEPTED_EXTENSIONS, MAX_FILE_SIZE_MB};
use crate::utils::color::{self, BRAND, DANGER, INFO, MUTED};
use crate::utils::file_size::format_kilobytes;
use crate::utils::timestamp::format_upload_date;
use eframe::egui::{self, Align, Color32, RichText};
use rfd::FileDialog;

const REQUIREMENTS: [&str; 9] = [
    "Excel (.xlsx, .xls, .xlsm) or CSV format",
    "Required Columns: COMPANY, EMAIL, PHONE NUMBER, CONTACT, CATEGORY",
    "Optional Columns: WEBSITE, SUB-CATEGORY2, IMAGE, LINK, SOCIAL MEDIA, USER",
    "IMAGE: Full URLs to images (only shown for premium users)",
    "LINK: Social media URLs",
    "SOCIAL MEDIA: Platform name (facebook, twitter, linkedin, instagram, etc.)",
    "USER: Package type (free, pro, premium) - affects display styling",
    "First row should contain headers",
    "Maximum file size: 10MB",
];

const HOW_IT_WORKS: [&str; 7] = [
    "Upload your Excel/CSV file with directory listings",
    "The system will process each row and create directory entries",
    "Valid entries will be added to the database",
    "Any errors will be reported back to you",
    "All listings will appear on the Services page automatically",
    "You can upload new files without deleting old data",
    "Use the delete button to clear all data when needed",
];

fn panel() -> egui::Frame {
    egui::Frame::none()
        .fill(color::PANEL)
        .stroke(egui::Stroke::new(1.0, color::PANEL_BORDER))
        .rounding(8.0)
        .inner_margin(16.0)
}

fn wide_button(text: &str, fill: Color32, height: f32, width: f32) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text.to_string()).color(Color32::WHITE).strong())
        .fill(fill)
        .min_size(egui::vec2(width, height))
}

impl DirectoryUploader {
    pub fn render(&mut self, ctx: &egui::Context) {
        let mut messages = Vec::new();
        let mut import_session = false;
        let modal_open = self.state.modal_open();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.set_enabled(!modal_open);
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Admin: Bulk Upload Directory Listings");
                });
                ui.add_space(20.0);

                self.render_requirements(ui);
                ui.add_space(16.0);
                self.render_status(ui, &mut messages);
                self.render_progress(ui);
                self.render_drop_zone(ui, &mut messages);
                self.render_preview(ui);
                self.render_actions(ui, &mut messages);
                ui.add_space(24.0);
                self.render_history(ui, &mut messages);
                ui.add_space(24.0);
                import_session = self.render_session(ui);
                ui.add_space(24.0);
                self.render_how_it_works(ui);
                ui.add_space(20.0);
            });
        });

        self.render_modals(ctx, &mut messages);

        for msg in messages {
            self.dispatch(msg);
        }
        if import_session {
            self.import_session();
        }
    }

    fn render_requirements(&self, ui: &mut egui::Ui) {
        panel().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("📋 File Requirements:").strong());
            ui.add_space(8.0);
            for line in REQUIREMENTS {
                ui.label(RichText::new(format!("• {}", line)).color(MUTED));
            }
        });
    }

    fn render_status(&self, ui: &mut egui::Ui, messages: &mut Vec<Message>) {
        let Some(status) = &self.state.status else {
            return;
        };

        let (fill, text) = color::banner(status.severity);
        egui::Frame::none()
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, text.gamma_multiply(0.3)))
            .rounding(8.0)
            .inner_margin(egui::Margin::symmetric(20.0, 12.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(&status.text).color(text));
                    ui.add_space(8.0);
                    if ui.small_button("Clear Message").clicked() {
                        messages.push(Message::DismissStatus);
                    }
                });
            });
        ui.add_space(20.0);
    }

    fn render_progress(&self, ui: &mut egui::Ui) {
        if !self.state.is_uploading {
            return;
        }

        ui.horizontal(|ui| {
            ui.label("Uploading...");
            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                ui.label(format!("{}%", self.state.progress));
            });
        });
        ui.add(egui::ProgressBar::new(self.state.progress as f32 / 100.0).fill(BRAND));
        ui.add_space(20.0);
    }

    fn render_drop_zone(&self, ui: &mut egui::Ui, messages: &mut Vec<Message>) {
        let (fill, border) = if self.state.drag_hover {
            (color::DROP_HOVER_FILL, BRAND)
        } else {
            (Color32::WHITE, color::DROP_BORDER)
        };

        let response = egui::Frame::none()
            .fill(fill)
            .stroke(egui::Stroke::new(2.0, border))
            .rounding(8.0)
            .inner_margin(40.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| match &self.state.selected_file {
                    None => {
                        ui.label(RichText::new("📁").size(48.0));
                        ui.add_space(16.0);
                        ui.label(RichText::new("Drop your file here or click to browse").strong());
                        ui.label(
                            RichText::new("Supports Excel (.xlsx, .xls, .xlsm) and CSV files")
                                .color(MUTED),
                        );
                    }
                    Some(file) => {
                        ui.label(RichText::new("✅").size(48.0));
                        ui.add_space(16.0);
                        ui.label(
                            RichText::new(format!("File Selected: {}", file.name))
                                .strong()
                                .color(color::SELECTED_TEXT),
                        );
                        ui.label(
                            RichText::new("Click to change file or drag & drop a new one")
                                .color(MUTED),
                        );
                    }
                });
            })
            .response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if response.clicked() {
            let picked = FileDialog::new()
                .add_filter("Spreadsheets", &ACCEPTED_EXTENSIONS[..])
                .pick_file();
            if let Some(path) = picked {
                messages.push(Message::FileChosen(SelectedFile::from_path(&path)));
            }
        }
        ui.add_space(24.0);
    }

    fn render_preview(&self, ui: &mut egui::Ui) {
        let Some(preview) = &self.state.preview else {
            return;
        };

        ui.label(RichText::new("File Preview:").strong());
        ui.add_space(8.0);
        panel().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("File:").strong());
                ui.label(format!("{} ({})", preview.file_name, preview.file_size));
            });
            ui.label(RichText::new(&preview.file_type).small().color(MUTED));
        });
        ui.add_space(24.0);
    }

    fn render_actions(&self, ui: &mut egui::Ui, messages: &mut Vec<Message>) {
        let width = ui.available_width();

        let test_label = if self.state.is_parsing {
            "Parsing..."
        } else {
            "Test File Parse (Debug)"
        };
        let test_fill = if self.state.can_test_parse() { INFO } else { MUTED };
        if ui
            .add_enabled(
                self.state.can_test_parse(),
                wide_button(test_label, test_fill, 36.0, width),
            )
            .clicked()
        {
            messages.push(Message::SubmitTestParse);
        }

        ui.add_space(16.0);

        let upload_label = if self.state.is_uploading {
            "Uploading..."
        } else {
            "Upload Directory Listings"
        };
        let upload_fill = if self.state.can_upload() { BRAND } else { MUTED };
        if ui
            .add_enabled(
                self.state.can_upload(),
                wide_button(upload_label, upload_fill, 44.0, width),
            )
            .on_hover_text(format!("Maximum file size: {}MB", MAX_FILE_SIZE_MB))
            .clicked()
        {
            messages.push(Message::SubmitUpload);
        }
    }

    fn render_history(&self, ui: &mut egui::Ui, messages: &mut Vec<Message>) {
        panel().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("📊 Upload History").strong());
                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    if ui.add(wide_button("🗑 Delete All Data", DANGER, 28.0, 0.0)).clicked() {
                        messages.push(Message::RequestDeleteAll);
                    }
                    if ui.add(wide_button("🔄 Refresh", INFO, 28.0, 0.0)).clicked() {
                        messages.push(Message::RefreshHistory);
                    }
                });
            });
            ui.add_space(16.0);

            if self.state.is_loading_history() {
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Loading upload history...").color(MUTED));
                });
            } else if self.state.history.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("No uploads yet").color(MUTED));
                });
            } else {
                egui::ScrollArea::vertical()
                    .id_source("upload_history")
                    .max_height(300.0)
                    .show(ui, |ui| {
                        for entry in &self.state.history {
                            egui::Frame::none()
                                .fill(Color32::WHITE)
                                .stroke(egui::Stroke::new(1.0, color::PANEL_BORDER))
                                .rounding(6.0)
                                .inner_margin(12.0)
                                .show(ui, |ui| {
                                    ui.set_width(ui.available_width());
                                    ui.horizontal(|ui| {
                                        ui.vertical(|ui| {
                                            ui.label(RichText::new(&entry.original_name).strong());
                                            ui.label(
                                                RichText::new(format!(
                                                    "{} • {} • {}",
                                                    format_upload_date(&entry.upload_date),
                                                    entry.file_type.to_uppercase(),
                                                    format_kilobytes(entry.file_size_bytes(), 1)
                                                ))
                                                .small()
                                                .color(MUTED),
                                            );
                                        });
                                        ui.with_layout(
                                            egui::Layout::top_down(Align::Max),
                                            |ui| {
                                                let (fill, text) =
                                                    color::status_badge(&entry.status_kind());
                                                egui::Frame::none()
                                                    .fill(fill)
                                                    .rounding(4.0)
                                                    .inner_margin(egui::Margin::symmetric(8.0, 4.0))
                                                    .show(ui, |ui| {
                                                        ui.label(
                                                            RichText::new(
                                                                entry.status.to_uppercase(),
                                                            )
                                                            .small()
                                                            .strong()
                                                            .color(text),
                                                        );
                                                    });
                                                ui.label(
                                                    RichText::new(entry.rows_label())
                                                        .small()
                                                        .color(MUTED),
                                                );
                                            },
                                        );
                                    });
                                });
                            ui.add_space(8.0);
                        }
                    });
            }
        });
    }

    /// Returns true when the operator asked to import the pasted session.
    fn render_session(&mut self, ui: &mut egui::Ui) -> bool {
        let mut import = false;
        egui::CollapsingHeader::new("🔑 Admin Session")
            .default_open(false)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!("Backend: {}", self.client.base_url()));
                    ui.label("ℹ").on_hover_text_at_pointer(
                        "To reuse your browser session:\n\
                        1. Log in to the admin site\n\
                        2. Open Developer Tools (F12), Network tab\n\
                        3. Refresh the upload history\n\
                        4. Right-click the 'upload-history' request\n\
                        5. Copy as cURL and paste it below",
                    );
                });
                ui.add_space(8.0);
                ui.add(
                    egui::TextEdit::multiline(&mut self.session_text)
                        .desired_width(ui.available_width())
                        .desired_rows(4)
                        .font(egui::TextStyle::Monospace)
                        .hint_text("curl 'https://<host>/api/directory/upload-history' -H 'cookie: ...'"),
                );
                ui.add_space(8.0);
                ui.add_enabled_ui(!self.session_text.trim().is_empty(), |ui| {
                    if ui.button("Import Session").clicked() {
                        import = true;
                    }
                });
            });
        import
    }

    fn render_how_it_works(&self, ui: &mut egui::Ui) {
        panel().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("ℹ How it works:").strong());
            ui.add_space(8.0);
            for (idx, step) in HOW_IT_WORKS.iter().enumerate() {
                ui.label(RichText::new(format!("{}. {}", idx + 1, step)).color(MUTED));
            }
            ui.add_space(8.0);
            if ui
                .add(
                    egui::Label::new(RichText::new("Open the Services page").color(BRAND))
                        .sense(egui::Sense::click()),
                )
                .on_hover_cursor(egui::CursorIcon::PointingHand)
                .clicked()
            {
                let url = format!("{}/services", self.client.base_url());
                if let Err(e) = open::that(&url) {
                    tracing::warn!(%url, error = %e, "failed to open browser");
                }
            }
        });
    }

    fn render_modals(&self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        if let Some(alert) = self.state.current_alert() {
            egui::Window::new(alert.title.as_str())
                .collapsible(false)
                .resizable(true)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .max_height(400.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(&alert.body).monospace());
                        });
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        if ui.button("OK").clicked() {
                            messages.push(Message::DismissAlert);
                        }
                    });
                });
        }

        if self.state.confirm_delete_all {
            egui::Window::new("Delete All Data")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(
                        "Are you sure you want to delete ALL uploaded data? This action cannot be undone.",
                    );
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        if ui.add(wide_button("Delete", DANGER, 28.0, 0.0)).clicked() {
                            messages.push(Message::ConfirmDeleteAll);
                        }
                        if ui.button("Cancel").clicked() {
                            messages.push(Message::CancelDeleteAll);
                        }
                    });
                });
        }
    }
}
