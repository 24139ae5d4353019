// ui.rs - Drawing, mouse painting and hotkeys

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Align2, Color32, Key, Sense, Stroke};

use crate::{
    app::{GameOfLife, PromptKind},
    palette::Rgb,
};
use conway::patterns;

struct Hotkeys {
    quit: bool,
    toggle: bool,
    clear: bool,
    step: bool,
    random: bool,
    save: bool,
    open: bool,
}

impl Hotkeys {
    fn read(ctx: &egui::Context) -> Self {
        ctx.input(|i| Self {
            quit: i.key_pressed(Key::Q) || i.key_pressed(Key::Escape),
            toggle: i.key_pressed(Key::Space),
            clear: i.key_pressed(Key::C),
            step: i.key_pressed(Key::N),
            random: i.key_pressed(Key::R),
            save: i.key_pressed(Key::S),
            open: i.key_pressed(Key::O),
        })
    }
}

fn color_button(ui: &mut egui::Ui, label: &str, color: &mut Rgb) {
    ui.label(label);
    let mut c32 = Color32::from(*color);
    if ui.color_edit_button_srgba(&mut c32).changed() {
        *color = c32.into();
    }
}

impl GameOfLife {
    fn handle_keys(&mut self, ctx: &egui::Context) {
        // The filename prompt owns the keyboard while it is open.
        if self.prompt.is_some() || ctx.wants_keyboard_input() {
            return;
        }
        let keys = Hotkeys::read(ctx);
        if keys.quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }
        if keys.toggle {
            self.toggle_running(Instant::now());
        }
        if keys.clear {
            self.clear();
        }
        if keys.step {
            self.step_once();
        }
        if keys.random {
            self.randomize();
        }
        if keys.save {
            self.begin_prompt(PromptKind::Save);
        } else if keys.open {
            self.begin_prompt(PromptKind::Open);
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.toggle_running(Instant::now());
            }

            ui.add_enabled_ui(!self.is_running, |ui| {
                if ui.button("⏭ Step").clicked() {
                    self.step_once();
                }
                if ui.button("⏹ Clear").clicked() {
                    self.clear();
                }
                if ui.button("🎲 Random").clicked() {
                    self.randomize();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(
                        patterns::PATTERNS
                            .get(self.selected_pattern)
                            .map_or("", |p| p.name),
                    )
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });
                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }

                ui.separator();

                if ui.button("💾 Save").clicked() {
                    self.begin_prompt(PromptKind::Save);
                }
                if ui.button("📂 Open").clicked() {
                    self.begin_prompt(PromptKind::Open);
                }
            });
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = 1.0 / self.interval().as_secs_f32();
            if ui
                .add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec"))
                .changed()
            {
                self.set_interval(Duration::from_secs_f32(1.0 / speed));
            }

            ui.separator();

            color_button(ui, "Live:", &mut self.live_color);
            color_button(ui, "Dead:", &mut self.dead_color);
            color_button(ui, "Lines:", &mut self.grid_color);
        });
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", self.generation()));
            ui.separator();
            ui.label(format!("Live cells: {}", self.grid().population()));
            ui.separator();
            ui.label(if self.is_running { "Running" } else { "Paused" });
            ui.separator();
            ui.label(format!("Engine: {}", self.engine()));
            if !self.status.is_empty() {
                ui.separator();
                ui.label(self.status.as_str());
            }
        });
    }

    fn board(&mut self, ui: &mut egui::Ui) {
        let layout = self.layout;
        let (response, painter) = ui.allocate_painter(layout.size(), Sense::click_and_drag());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::from(self.dead_color));
        let live = Color32::from(self.live_color);
        for (x, y) in self.grid().live_cells() {
            painter.rect_filled(layout.cell_rect(origin, x, y), 0.0, live);
        }
        let stroke = Stroke::new(1.0, Color32::from(self.grid_color));
        for line in layout.grid_lines(origin) {
            painter.line_segment(line, stroke);
        }

        // Painting: left sets cells alive, right sets them dead.
        if self.prompt.is_some() {
            return;
        }
        if response.hovered() || response.dragged() {
            let (pos, primary, secondary) = ui.input(|i| {
                (
                    i.pointer.interact_pos(),
                    i.pointer.primary_down(),
                    i.pointer.secondary_down(),
                )
            });
            if let Some((x, y)) = pos.and_then(|p| layout.cell_at(origin, p)) {
                if primary {
                    self.paint(x, y, true);
                } else if secondary {
                    self.paint(x, y, false);
                }
            }
        }
    }

    fn prompt_window(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        let (mut confirm, mut cancel) = (false, false);
        egui::Window::new(prompt.kind.title())
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("File name:");
                let edit = ui.text_edit_singleline(&mut prompt.filename);
                if !prompt.focused {
                    edit.request_focus();
                    prompt.focused = true;
                }
                if edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    confirm = true;
                }
                if ui.input(|i| i.key_pressed(Key::Escape)) {
                    cancel = true;
                }
                ui.horizontal(|ui| {
                    confirm |= ui.button("OK").clicked();
                    cancel |= ui.button("Cancel").clicked();
                });
            });
        if confirm {
            self.confirm_prompt();
        } else if cancel {
            self.prompt = None;
        }
    }
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        if self.tick(Instant::now()) {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.status_bar(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.board(ui));
        self.prompt_window(ctx);

        // Sleep until the next generation is due instead of spinning.
        if let Some(wait) = self.until_next_tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
