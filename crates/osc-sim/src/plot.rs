//! Scrolling time-series trace of an oscillator's deflection.

use std::collections::VecDeque;

use osc_core::{BoundingBox, EntityId, Real, Vec2d};
use tracing::warn;

use crate::canvas::{Anchor, Canvas, palette};
use crate::params::{ParamSpec, Tunable};

const LABEL_INSET: Real = 30.0;

/// Tunable parameters of a [`Plot`].
///
/// `time_speed` must be positive; with `time_speed <= 0` samples never age
/// out and the buffer grows without bound. This is not guarded.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotParams {
    /// Visible horizontal extent in pixels.
    pub width: Real,
    pub height: Real,
    /// Horizontal pixels each sample moves per frame.
    pub time_speed: Real,
    pub thickness: Real,
}

impl Default for PlotParams {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 200.0,
            time_speed: 2.0,
            thickness: 2.0,
        }
    }
}

/// One recorded value and how far it has scrolled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub offset: Real,
    pub deflection: Real,
}

/// Sliding window of recent deflections from one source oscillator.
///
/// The plot never reads the oscillator itself; the scene feeds it through
/// [`Plot::record`] after resolving `source`.
#[derive(Clone, Debug)]
pub struct Plot {
    source: EntityId,
    label: String,
    origin: Vec2d,
    /// Oldest sample at the front, newest (offset 0) at the back.
    samples: VecDeque<Sample>,
    reported_non_finite: bool,
    pub params: PlotParams,
}

impl Plot {
    pub fn new(source: EntityId, label: impl Into<String>, origin: Vec2d, width: Real) -> Self {
        Self::with_params(
            source,
            label,
            origin,
            PlotParams {
                width,
                ..PlotParams::default()
            },
        )
    }

    pub fn with_params(
        source: EntityId,
        label: impl Into<String>,
        origin: Vec2d,
        params: PlotParams,
    ) -> Self {
        Self {
            source,
            label: label.into(),
            origin,
            samples: VecDeque::new(),
            reported_non_finite: false,
            params,
        }
    }

    /// Oscillator this plot samples.
    pub fn source(&self) -> EntityId {
        self.source
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_origin_size(self.origin, self.params.width, self.params.height)
    }

    pub fn translate(&mut self, delta: Vec2d) {
        self.origin += delta;
    }

    /// Plots have no click behaviour.
    pub fn clicked(&mut self, _local: Vec2d) {}

    pub fn samples(&self) -> impl DoubleEndedIterator<Item = &Sample> + ExactSizeIterator {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Age every retained sample by `time_speed`, evict those past `width`,
    /// then append `deflection` at offset 0.
    ///
    /// In steady state this retains `floor(width / time_speed) + 1` samples.
    pub fn record(&mut self, deflection: Real) {
        let PlotParams {
            width, time_speed, ..
        } = self.params;

        for sample in &mut self.samples {
            sample.offset += time_speed;
        }
        // Offsets grow with age, so everything past the window sits at the front.
        while self.samples.front().is_some_and(|s| s.offset > width) {
            self.samples.pop_front();
        }

        if deflection.is_finite() {
            self.reported_non_finite = false;
        } else if !self.reported_non_finite {
            warn!(plot = %self.label, deflection, "non-finite deflection, trace will have a gap");
            self.reported_non_finite = true;
        }

        self.samples.push_back(Sample {
            offset: 0.0,
            deflection,
        });
    }

    fn to_canvas(&self, sample: &Sample) -> Vec2d {
        self.origin
            + Vec2d::new(
                sample.offset,
                sample.deflection + self.params.height / 2.0,
            )
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let PlotParams {
            width,
            height,
            thickness,
            ..
        } = self.params;

        // Time axis through the vertical centre, value axis on the left edge.
        canvas.line(
            self.origin + Vec2d::new(0.0, height / 2.0),
            self.origin + Vec2d::new(width, height / 2.0),
            palette::WHITE,
            2.0,
        );
        canvas.line(
            self.origin,
            self.origin + Vec2d::new(0.0, height),
            palette::WHITE,
            2.0,
        );

        let mut prev: Option<Vec2d> = None;
        for sample in &self.samples {
            let p = self.to_canvas(sample);
            if !p.is_finite() {
                prev = None;
                continue;
            }
            if let Some(q) = prev {
                canvas.line(q, p, palette::WHITE, thickness);
            }
            prev = Some(p);
        }

        canvas.text(
            self.origin + Vec2d::new(LABEL_INSET, 0.0),
            &self.label,
            palette::GREEN,
            Anchor::TopLeft,
        );
    }
}

const PLOT_PARAMS: &[ParamSpec<Plot>] = &[
    ParamSpec {
        name: "width",
        get: |p| p.params.width,
        set: |p, v| p.params.width = v,
    },
    ParamSpec {
        name: "time_speed",
        get: |p| p.params.time_speed,
        set: |p, v| p.params.time_speed = v,
    },
    ParamSpec {
        name: "thickness",
        get: |p| p.params.thickness,
        set: |p, v| p.params.thickness = v,
    },
];

impl Tunable for Plot {
    fn params() -> &'static [ParamSpec<Self>] {
        PLOT_PARAMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawList;

    fn plot(width: Real) -> Plot {
        Plot::new(EntityId::from_index(0), "Spring #1", Vec2d::new(0.0, 500.0), width)
    }

    #[test]
    fn newest_sample_sits_at_offset_zero() {
        let mut p = plot(300.0);
        p.record(1.0);
        p.record(2.0);
        p.record(3.0);

        let offsets: Vec<_> = p.samples().map(|s| s.offset).collect();
        let values: Vec<_> = p.samples().map(|s| s.deflection).collect();
        assert_eq!(offsets, vec![4.0, 2.0, 0.0]);
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn constant_feed_is_bounded() {
        let mut p = plot(300.0);
        for _ in 0..200 {
            p.record(5.0);
            assert!(p.len() <= 151);
        }
        assert_eq!(p.len(), 151);
        assert_eq!(p.samples().next().map(|s| s.offset), Some(300.0));
    }

    #[test]
    fn shrinking_width_evicts_on_next_record() {
        let mut p = plot(300.0);
        for _ in 0..200 {
            p.record(0.0);
        }
        p.params.width = 100.0;
        p.record(0.0);
        assert_eq!(p.len(), 51);
    }

    #[test]
    fn draw_connects_consecutive_samples() {
        let mut p = plot(300.0);
        for v in [1.0, 2.0, 3.0, 4.0] {
            p.record(v);
        }
        let mut list = DrawList::new();
        p.draw(&mut list);

        // Two axes plus three trace segments.
        assert_eq!(list.lines().count(), 5);
        let first_segment = list.lines().nth(2).unwrap();
        assert_eq!(first_segment.0, Vec2d::new(6.0, 601.0));
        assert_eq!(first_segment.1, Vec2d::new(4.0, 602.0));
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["Spring #1"]);
    }

    #[test]
    fn non_finite_samples_leave_a_gap() {
        let mut p = plot(300.0);
        for v in [1.0, 2.0, Real::NAN, 3.0, 4.0] {
            p.record(v);
        }
        assert_eq!(p.len(), 5);

        let mut list = DrawList::new();
        p.draw(&mut list);
        // Axes, then 1-2 and 3-4; nothing touches the NaN sample.
        assert_eq!(list.lines().count(), 4);
        assert!(list.lines().all(|(a, b)| a.is_finite() && b.is_finite()));
    }

    #[test]
    fn click_is_a_no_op() {
        let mut p = plot(300.0);
        p.record(1.0);
        p.clicked(Vec2d::new(10.0, 10.0));
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn bounds_follow_width_parameter() {
        let mut p = plot(500.0);
        assert_eq!(p.bounds(), BoundingBox::new(0.0, 500.0, 500.0, 200.0));
        p.set_param("width", 250.0);
        assert_eq!(p.bounds().width, 250.0);
    }
}
