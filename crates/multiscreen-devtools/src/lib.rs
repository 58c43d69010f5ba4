use web_time::{Duration, Instant};

use multiscreen_core::{Frame, SceneNode};

#[derive(Clone, Debug, Default)]
pub struct Metrics {
    pub build_ms: f32,
    pub scene_nodes: usize,
    pub hit_regions: usize,
}

/// Frame counter and per-frame build metrics, reported through `log`.
pub struct Inspector {
    frame_count: u64,
    started: Option<Instant>,
    last: Option<Metrics>,
    total_build: Duration,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            started: None,
            last: None,
            total_build: Duration::ZERO,
        }
    }

    /// Call right before composing a frame.
    pub fn begin_frame(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Call with the finished frame.
    pub fn end_frame(&mut self, frame: &Frame) {
        self.frame_count += 1;
        let elapsed = self
            .started
            .take()
            .map(|t| t.elapsed())
            .unwrap_or_default();
        self.total_build += elapsed;
        let texts = frame
            .scene
            .nodes
            .iter()
            .filter(|n| matches!(n, SceneNode::Text { .. }))
            .count();
        let metrics = Metrics {
            build_ms: elapsed.as_secs_f32() * 1000.0,
            scene_nodes: frame.scene.nodes.len(),
            hit_regions: frame.hit_regions.len(),
        };
        log::debug!(
            "frame {}: build {:.2} ms, {} nodes ({} text), {} hit regions",
            frame.number,
            metrics.build_ms,
            metrics.scene_nodes,
            texts,
            metrics.hit_regions
        );
        self.last = Some(metrics);
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn last_metrics(&self) -> Option<&Metrics> {
        self.last.as_ref()
    }

    pub fn average_build_ms(&self) -> f32 {
        if self.frame_count == 0 {
            return 0.0;
        }
        self.total_build.as_secs_f32() * 1000.0 / self.frame_count as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiscreen_core::{Color, Scene};

    #[test]
    fn test_counts_frames_and_nodes() {
        let mut insp = Inspector::new();
        let frame = Frame {
            number: 1,
            scene: Scene {
                clear_color: Color::WHITE,
                nodes: vec![SceneNode::Text {
                    depth: 0,
                    text: "hi".into(),
                    color: Color::BLACK,
                    size: 16.0,
                    clickable: false,
                }],
            },
            hit_regions: Vec::new(),
        };
        insp.begin_frame();
        insp.end_frame(&frame);
        insp.end_frame(&frame);
        assert_eq!(insp.frame_count(), 2);
        assert_eq!(insp.last_metrics().map(|m| m.scene_nodes), Some(1));
        assert!(insp.average_build_ms() >= 0.0);
    }
}
