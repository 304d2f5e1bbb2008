use super::App;
use crate::{Config, Traversal};
use eframe::egui::{
    load::SizedTexture, Button, Checkbox, ColorImage, DragValue, Image, RichText, Slider, Stroke,
    TextureOptions, Ui, Vec2,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.toggle_pause();
        }

        if ui
            .add_enabled(self.is_paused, Self::new_button("Next step"))
            .clicked()
        {
            self.do_one_step = true;
        }

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Generations per second: "));
            let mut ticks_per_second = self.ticks_per_second;
            let response = ui.add(
                Slider::new(&mut ticks_per_second, 0.5..=Config::MAX_TICKS_PER_SECOND)
                    .logarithmic(true),
            );
            if response.changed() {
                self.set_ticks_per_second(ticks_per_second);
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Traversal: "));
            ui.radio_value(
                &mut self.traversal,
                Traversal::Sequential,
                Self::new_text("Sequential"),
            );
            ui.radio_value(
                &mut self.traversal,
                Traversal::Parallel,
                Self::new_text("Parallel"),
            );
        });
    }

    fn draw_field_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(Self::new_text("Rows: "));
            ui.add(DragValue::new(&mut self.rows).clamp_range(1..=Config::MAX_SIDE));
            ui.label(Self::new_text(" columns: "));
            ui.add(DragValue::new(&mut self.columns).clamp_range(1..=Config::MAX_SIDE));
        });

        ui.horizontal(|ui| {
            ui.add(Checkbox::new(&mut self.use_seed, Self::new_text("Seed: ")));
            ui.add_enabled(self.use_seed, DragValue::new(&mut self.seed));
        });

        if ui.add(Self::new_button("Reset field")).clicked() {
            self.reset_field();
        }
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&self.grid.statistics()));

        ui.label(Self::new_text(&format!(
            "Last field update: {:.3} ms",
            self.last_update_duration * 1e3
        )));

        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_simulation_controls(ui);
                });
            });

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_field_controls(ui);
                });
            });

            ui.add_space(Config::GAP_ABOVE_STATS);

            self.draw_stats(ui);
        });
    }

    /// Uploads the current generation as a texture, one pixel per cell.
    fn draw_gol_field(&mut self, ui: &mut Ui, area: Vec2) {
        let (rows, columns) = (self.grid.rows(), self.grid.columns());
        self.field_buf.clear();
        self.field_buf.extend(self.grid.cells().map(|(_, _, alive)| {
            if alive {
                Config::ALIVE_SHADE
            } else {
                Config::DEAD_SHADE
            }
        }));
        let ci = ColorImage::from_gray([columns, rows], &self.field_buf);
        self.texture.set(ci, TextureOptions::NEAREST);

        // square cells as large as fit into the area
        let cell_px = (area.x / columns as f32).min(area.y / rows as f32).max(0.);
        let size = Vec2::new(cell_px * columns as f32, cell_px * rows as f32);
        let source = SizedTexture::new(self.texture.id(), size);
        ui.add(Image::from_texture(source));
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();
        let field_area = Vec2::new(
            area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN,
            area.y,
        );

        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(Config::FRAME_MARGIN);

            ui.vertical_centered(|ui| {
                self.draw_gol_field(ui, field_area);
            });
        });
    }
}
