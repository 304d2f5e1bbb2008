use crate::{Config, FpsLimiter, Grid, TickTimer, Traversal};
use anyhow::Result;
use eframe::egui::{CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, TextureHandle};
use log::{error, info};
use std::time::Instant;

pub struct App {
    pub(super) grid: Grid,                // Conway's GoL field.
    pub(super) traversal: Traversal,      // How the next generation is computed.
    pub(super) is_paused: bool,           // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,         // Do one step and pause.
    pub(super) ticks_per_second: f64,     // Generations per second while running.
    pub(super) last_update_duration: f64, // Duration of the last field update in seconds.
    pub(super) rows: usize,               // Size of the field created by the next reset.
    pub(super) columns: usize,
    pub(super) use_seed: bool, // Whether the next reset is reproducible.
    pub(super) seed: u64,
    pub(super) field_buf: Vec<u8>,
    pub(super) texture: TextureHandle, // Texture handle of Conway's GoL field.
    pub(super) fps_limiter: FpsLimiter, // Limits the frame rate to a certain value.
    pub(super) tick_timer: TickTimer,   // Paces generations independently of frames.
}

impl App {
    pub fn new(ctx: &Context) -> Result<Self> {
        let (rows, columns, ticks_per_second, seed) = {
            let config = Config::get();
            (
                config.rows,
                config.columns,
                config.ticks_per_second,
                config.seed,
            )
        };
        let grid = Grid::random(rows, columns, seed)?;
        info!("Starting with a {}x{} field", rows, columns);
        Ok(Self {
            grid,
            traversal: Traversal::Sequential,
            is_paused: false,
            do_one_step: false,
            ticks_per_second,
            last_update_duration: 0.,
            rows,
            columns,
            use_seed: seed.is_some(),
            seed: seed.unwrap_or_default(),
            field_buf: vec![],
            texture: ctx.load_texture(
                "Conway's GoL field",
                ColorImage::default(),
                Default::default(),
            ),
            fps_limiter: FpsLimiter::new(Config::MAX_FPS),
            tick_timer: TickTimer::default(),
        })
    }

    /// Replaces the field with a random one built from the current settings.
    pub fn reset_field(&mut self) {
        let seed = self.use_seed.then_some(self.seed);
        {
            let mut config = Config::get();
            config.rows = self.rows;
            config.columns = self.columns;
            config.seed = seed;
        }
        match Grid::random(self.rows, self.columns, seed) {
            Ok(grid) => {
                info!(
                    "Field reset to {}x{} (seed {:?})",
                    self.rows, self.columns, seed
                );
                self.grid = grid;
                self.last_update_duration = 0.;
                self.tick_timer.reset();
            }
            Err(e) => error!("Failed to reset the field: {:#}", e),
        }
    }

    pub fn set_ticks_per_second(&mut self, ticks_per_second: f64) {
        self.ticks_per_second = ticks_per_second;
        Config::get().ticks_per_second = ticks_per_second;
    }

    pub fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
        info!(
            "Simulation {} at generation {}",
            if self.is_paused { "paused" } else { "resumed" },
            self.grid.generation()
        );
        self.tick_timer.reset();
    }

    fn update_engine(&mut self) {
        let tick_due = !self.is_paused && self.tick_timer.is_due(self.ticks_per_second);
        if !tick_due && !self.do_one_step {
            return;
        }

        let timer = Instant::now();
        self.grid.update(1, self.traversal);
        self.last_update_duration = timer.elapsed().as_secs_f64();

        self.do_one_step = false;
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let (step, toggle) = ctx.input(|input| {
            (
                input.key_pressed(Key::Space),
                input.key_pressed(Key::E) && !input.modifiers.ctrl,
            )
        });
        if step {
            self.do_one_step = true;
        }
        if toggle {
            self.toggle_pause();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_keys(ctx);

                self.update_engine();

                self.draw(ui);
            });

        self.fps_limiter.delay();
    }
}
