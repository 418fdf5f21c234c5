use egui_plot::{Line, Plot, PlotPoints};
use osc_app::{AppContext, Entity, Scene};
use osc_core::EntityId;

/// Read-only side panel describing the running scene.
#[derive(Default)]
pub struct InspectView;

impl InspectView {
    pub fn show(&self, ui: &mut egui::Ui, app: &AppContext, measured_fps: Option<f64>) {
        ui.heading("Scene");
        egui::Grid::new("scene_stats").num_columns(2).show(ui, |ui| {
            ui.label("Mode");
            ui.label(format!("{:?}", app.controller.mode()));
            ui.end_row();

            ui.label("Frame");
            ui.label(app.frame_count().to_string());
            ui.end_row();

            ui.label("FPS");
            ui.label(measured_fps.map_or_else(|| "-".to_owned(), |fps| format!("{fps:.1}")));
            ui.end_row();

            ui.label("Entities");
            ui.label(app.scene.len().to_string());
            ui.end_row();
        });

        ui.separator();

        let Some((id, entity)) = app
            .controller
            .selected()
            .and_then(|id| app.scene.get(id).map(|e| (id, e)))
        else {
            ui.label("Click an oscillator or plot to select it.");
            return;
        };

        ui.heading(entity.label());
        ui.label(format!("{:?} {id}", entity.kind()));

        egui::Grid::new("selected_params")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                for name in entity.param_names() {
                    ui.label(name);
                    match entity.param(name) {
                        Some(value) => ui.monospace(format!("{value:.5}")),
                        None => ui.monospace("-"),
                    };
                    ui.end_row();
                }
            });

        let points = trace_points(&app.scene, id);
        if !points.is_empty() {
            ui.separator();
            let label = entity.label().to_owned();
            Plot::new("trace_preview")
                .height(160.0)
                .x_axis_label("Age (px)")
                .y_axis_label("Deflection")
                .show(ui, |plot_ui| {
                    let plot_points: PlotPoints = points.into();
                    plot_ui.line(Line::new(plot_points).name(label));
                });
        }
    }
}

/// Samples behind the selection: the plot itself, or the first plot of an
/// oscillator. Newest sample sits at x = 0.
fn trace_points(scene: &Scene, id: EntityId) -> Vec<[f64; 2]> {
    let plot_id = match scene.get(id) {
        Some(Entity::Plot(_)) => Some(id),
        Some(_) => scene.plots_of(id).first().copied(),
        None => None,
    };

    plot_id
        .and_then(|pid| scene.get(pid))
        .and_then(Entity::as_plot)
        .map(|plot| {
            plot.samples()
                .filter(|s| s.offset.is_finite() && s.deflection.is_finite())
                .map(|s| [-s.offset, s.deflection])
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use osc_app::{SpawnKind, Spawner};
    use osc_sim::DrawList;

    #[test]
    fn trace_follows_oscillator_to_its_plot() {
        let mut scene = Scene::new();
        let (spring, plot) = Spawner::new().spawn(&mut scene, SpawnKind::Spring).unwrap();
        let mut canvas = DrawList::new();
        scene.step_all(&mut canvas);
        scene.step_all(&mut canvas);

        let from_spring = trace_points(&scene, spring);
        assert_eq!(from_spring.len(), 2);
        assert_eq!(from_spring, trace_points(&scene, plot));
        assert_eq!(from_spring[1][0], 0.0);
    }

    #[test]
    fn unknown_selection_has_no_trace() {
        let scene = Scene::new();
        assert!(trace_points(&scene, EntityId::from_index(3)).is_empty());
    }
}
