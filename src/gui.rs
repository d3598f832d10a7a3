// src/gui.rs
use std::time::Instant;

use eframe::egui;
use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use log::{debug, error};

use crate::context::AppContext;
use crate::controller::WindowController;
use crate::scheduler::TickScheduler;
use crate::types::UiEvent;

// seaborn "deep" palette
const PALETTE: [Color32; 5] = [
    Color32::from_rgb(76, 114, 176),
    Color32::from_rgb(221, 132, 82),
    Color32::from_rgb(85, 168, 104),
    Color32::from_rgb(196, 78, 82),
    Color32::from_rgb(129, 114, 179),
];

pub struct ChartApp {
    ctx: AppContext,
    controller: WindowController,
    scheduler: Box<dyn TickScheduler>,
    visible: Vec<usize>,
}

impl ChartApp {
    pub fn new(ctx: AppContext, scheduler: Box<dyn TickScheduler>) -> Self {
        let controller = WindowController::new(ctx.chart.series_count());
        let visible = ctx.chart.visible_indices();
        let mut app = Self {
            ctx,
            controller,
            scheduler,
            visible,
        };
        app.controller.log("Ready.");
        app
    }

    /// Route one widget event through the controller into the context.
    pub fn handle(&mut self, event: UiEvent) {
        for cmd in self.controller.dispatch(event) {
            match self.ctx.apply(cmd) {
                Ok(Some(msg)) => self.controller.log(&msg),
                Ok(None) => {}
                Err(err) => {
                    error!("{cmd:?} failed: {err}");
                    self.controller.log(&format!("Error: {err}"));
                }
            }
        }
        self.visible = self.ctx.chart.visible_indices();
    }

    /// Run whatever ticks the scheduler says are due. Returns how many ran.
    pub fn step(&mut self, now: Instant) -> u32 {
        let due = self.scheduler.poll(now);
        for _ in 0..due {
            self.visible = self.ctx.chart.tick();
        }
        due
    }

    /// Consumes the chart's redraw flags. While stopped with nothing
    /// flagged, the window stops scheduling timed repaints.
    pub fn needs_repaint(&mut self) -> bool {
        let redrawn = self.ctx.chart.take_redraw();
        self.ctx.chart.is_running() || !redrawn.is_empty()
    }

    #[cfg(test)]
    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    #[cfg(test)]
    pub fn controller(&self) -> &WindowController {
        &self.controller
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            let face = self.controller.face();
            let toggle = egui::Button::new(face.text()).selected(self.controller.is_toggle_checked());
            if ui.add(toggle).clicked() {
                events.push(UiEvent::ToggleClicked);
            }
            for index in 0..self.controller.checkbox_count() {
                let mut checked = self.controller.checkbox(index).unwrap_or(true);
                if ui.checkbox(&mut checked, format!("show line{index}")).changed() {
                    events.push(UiEvent::CheckboxToggled { index, checked });
                }
            }
            ui.separator();
            if ui.button("💾 Save").clicked() {
                events.push(UiEvent::SaveSnapshot);
            }
        });
        for event in events {
            debug!("ui event {event:?}");
            self.handle(event);
        }
    }

    fn chart(&mut self, ui: &mut egui::Ui) {
        let chart = &self.ctx.chart;
        let x_axis = chart.x_axis();
        let lines: Vec<_> = self
            .visible
            .iter()
            .filter_map(|&idx| chart.series(idx).map(|s| (idx, s)))
            .map(|(idx, series)| {
                Line::new(PlotPoints::new(series.points(x_axis)))
                    .name(series.label())
                    .color(PALETTE[idx % PALETTE.len()])
            })
            .collect();
        let x_max = chart.sample_count().saturating_sub(1) as f64;
        Plot::new("live_chart")
            .legend(Legend::default())
            .include_x(0.0)
            .include_x(x_max)
            .include_y(0.0)
            .include_y(1.0)
            .show(ui, |plot_ui| {
                for line in lines {
                    plot_ui.line(line);
                }
            });
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.step(Instant::now());

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            self.controls(ui);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(100.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for line in self.controller.status() {
                        ui.monospace(line);
                    }
                });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart(ui);
        });

        if self.needs_repaint() {
            ctx.request_repaint_after(self.scheduler.interval());
        }
    }
}
