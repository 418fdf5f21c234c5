use std::time::Instant;

use egui::Sense;
use osc_app::{AppContext, ControlFlow, InputEvent};
use osc_core::Vec2d;
use tracing::error;

use crate::canvas::EguiCanvas;
use crate::config::UiConfig;
use crate::input::translate_events;
use crate::pacing::FramePacer;
use crate::views::InspectView;

pub struct OscillatorApp {
    context: AppContext,
    pacer: FramePacer,
    /// Input received since the last paced frame.
    pending: Vec<InputEvent>,
    inspect_view: InspectView,
}

impl OscillatorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: UiConfig) -> Self {
        Self {
            context: AppContext::new(Vec2d::new(config.width as f64, config.height as f64)),
            pacer: FramePacer::new(config.fps),
            pending: Vec::new(),
            inspect_view: InspectView,
        }
    }
}

impl eframe::App for OscillatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("inspector")
            .default_width(260.0)
            .show(ctx, |ui| {
                self.inspect_view
                    .show(ui, &self.context, self.pacer.measured_fps());
            });

        let mut flow = ControlFlow::Continue;
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
                let rect = response.rect;
                self.context
                    .resize(Vec2d::new(rect.width() as f64, rect.height() as f64));

                let events = ctx.input(|i| translate_events(&i.events, rect));
                self.pending.extend(events);

                let mut canvas = EguiCanvas::new(&painter, rect.min);
                let now = Instant::now();
                if self.pacer.is_due(now) {
                    self.pacer.mark(now);
                    match self.context.frame(&mut canvas, self.pending.drain(..)) {
                        Ok(next) => flow = next,
                        Err(err) => error!(%err, "frame failed"),
                    }
                } else {
                    self.context.redraw(&mut canvas);
                }
            });

        if flow == ControlFlow::Exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        ctx.request_repaint_after(self.pacer.time_until_due(Instant::now()));
    }
}
