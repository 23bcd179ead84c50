use std::time::{Duration, Instant};

use itertools::Itertools;

use crate::basic::Point;
use crate::hexagon::HexagonGroup;
use crate::layout::{self, Cluster};

/// Quiet interval a resize burst has to hold before the grid is
/// regenerated.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// A regeneration waiting for the resize burst to quiet down. There is
/// only ever one, a newer schedule supersedes an older one.
#[derive(Copy, Clone, Debug)]
struct PendingRebuild {
    deadline: Instant,
    width: f32,
    height: f32,
}

/// Owns the built hexagon groups and the debounce state for
/// resize-triggered regeneration. Groups are discarded and rebuilt
/// wholesale, there is no diffing between layouts.
pub struct GridController {
    groups: Vec<(Cluster, HexagonGroup)>,
    window_dim: Point,
    pending: Option<PendingRebuild>,
}

impl GridController {
    pub fn new(width: f32, height: f32) -> Self {
        let mut controller = Self {
            groups: vec![],
            window_dim: Point { x: width, y: height },
            pending: None,
        };
        controller.rebuild(width, height);
        controller
    }

    /// Discard all groups and regenerate them for the given viewport.
    pub fn rebuild(&mut self, width: f32, height: f32) {
        self.pending = None;
        self.window_dim = Point { x: width, y: height };
        self.groups = layout::generate_layout(width, height)
            .into_iter()
            .map(|placement| (placement.cluster, placement.hexagon.build()))
            .collect_vec();
    }

    /// Schedule a rebuild for when resize events have quiesced for
    /// [`DEBOUNCE`]. Supersedes any rebuild scheduled earlier.
    pub fn schedule_rebuild(&mut self, width: f32, height: f32, now: Instant) {
        self.pending = Some(PendingRebuild {
            deadline: now + DEBOUNCE,
            width,
            height,
        });
    }

    /// Fire the pending rebuild if its deadline has passed. Returns
    /// whether the groups were regenerated so that cached meshes can
    /// be dropped.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(PendingRebuild { deadline, width, height }) if now >= deadline => {
                self.rebuild(width, height);
                true
            }
            _ => false,
        }
    }

    pub fn groups(&self) -> &[(Cluster, HexagonGroup)] {
        &self.groups
    }

    /// Viewport the current groups were built for.
    pub fn window_dim(&self) -> Point {
        self.window_dim
    }

    /// Explicit teardown: drops all groups and any pending rebuild.
    pub fn reset(&mut self) {
        self.groups.clear();
        self.pending = None;
    }
}

#[test]
fn test_initial_rebuild() {
    let controller = GridController::new(1000., 800.);
    assert_eq!(controller.groups().len(), 17);
    for (_, group) in controller.groups() {
        assert_eq!(group.num_polygons(), 2);
        assert_eq!(group.num_lines(), 9);
    }
}

#[test]
fn test_debounce_supersession() {
    let mut controller = GridController::new(1000., 800.);
    let start = Instant::now();

    controller.schedule_rebuild(500., 400., start);
    controller.schedule_rebuild(1200., 900., start + Duration::from_millis(100));

    // the first schedule's deadline has passed but it was superseded
    assert!(!controller.poll(start + Duration::from_millis(350)));
    assert_eq!(controller.window_dim().x, 1000.);

    // the second schedule fires exactly once
    assert!(controller.poll(start + Duration::from_millis(400)));
    assert_eq!(controller.window_dim().x, 1200.);
    assert_eq!(controller.window_dim().y, 900.);
    assert_eq!(controller.groups().len(), 17);

    assert!(!controller.poll(start + Duration::from_millis(800)));
}

#[test]
fn test_poll_before_deadline_is_noop() {
    let mut controller = GridController::new(1000., 800.);
    let start = Instant::now();

    controller.schedule_rebuild(640., 480., start);
    assert!(!controller.poll(start + Duration::from_millis(299)));
    assert_eq!(controller.window_dim().x, 1000.);
    assert!(controller.poll(start + DEBOUNCE));
    assert_eq!(controller.window_dim().x, 640.);
}

#[test]
fn test_reset() {
    let mut controller = GridController::new(1000., 800.);
    let start = Instant::now();
    controller.schedule_rebuild(500., 400., start);

    controller.reset();
    assert!(controller.groups().is_empty());
    assert!(!controller.poll(start + Duration::from_millis(400)));
}
