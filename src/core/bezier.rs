//! Scroll-driven background: an "Adam optimizer" ball descending a loss landscape
//!
//! The path is a chain of cubic Bézier segments through fixed waypoints in a
//! 100x100 viewBox. Control points sit 40% of the way in from each end of a
//! segment, so the curve passes through every waypoint.

use serde::Serialize;

use crate::models::Point;
use crate::utils::constants::REDUCED_MOTION_OPACITY;

/// Waypoint of the optimization path
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimizationPoint {
    pub x: f64,
    pub y: f64,
    pub momentum: f64,
    pub velocity: f64,
}

const fn waypoint(x: f64, y: f64, momentum: f64, velocity: f64) -> OptimizationPoint {
    OptimizationPoint {
        x,
        y,
        momentum,
        velocity,
    }
}

/// Pulsing radial highlight behind the path
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LearningRateRegion {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub intensity: f64,
}

/// Top of the page to the global minimum at the bottom
pub const OPTIMIZATION_PATH: [OptimizationPoint; 15] = [
    waypoint(20.0, 5.0, 0.1, 0.1),
    waypoint(25.0, 12.0, 0.15, 0.2),
    waypoint(35.0, 18.0, 0.2, 0.25),
    waypoint(30.0, 25.0, 0.25, 0.3),
    waypoint(45.0, 32.0, 0.3, 0.35),
    waypoint(40.0, 40.0, 0.35, 0.4),
    waypoint(55.0, 47.0, 0.4, 0.45),
    waypoint(60.0, 55.0, 0.45, 0.5),
    waypoint(70.0, 62.0, 0.5, 0.55),
    waypoint(75.0, 70.0, 0.55, 0.6),
    waypoint(80.0, 77.0, 0.6, 0.65),
    waypoint(85.0, 83.0, 0.7, 0.75),
    waypoint(88.0, 88.0, 0.8, 0.85),
    waypoint(90.0, 92.0, 0.9, 0.95),
    waypoint(92.0, 95.0, 0.95, 0.98),
];

pub const LEARNING_RATE_REGIONS: [LearningRateRegion; 5] = [
    LearningRateRegion { cx: 25.0, cy: 15.0, r: 20.0, intensity: 0.4 },
    LearningRateRegion { cx: 45.0, cy: 35.0, r: 25.0, intensity: 0.5 },
    LearningRateRegion { cx: 65.0, cy: 55.0, r: 22.0, intensity: 0.6 },
    LearningRateRegion { cx: 85.0, cy: 80.0, r: 18.0, intensity: 0.7 },
    LearningRateRegion { cx: 90.0, cy: 93.0, r: 15.0, intensity: 0.8 },
];

const CONTROL_RATIO: f64 = 0.4;

/// Control points of the segment `from -> to`
fn control_points(from: &OptimizationPoint, to: &OptimizationPoint) -> (Point, Point) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    (
        Point::new(from.x + dx * CONTROL_RATIO, from.y + dy * CONTROL_RATIO),
        Point::new(to.x - dx * CONTROL_RATIO, to.y - dy * CONTROL_RATIO),
    )
}

/// SVG `d` attribute for the whole path
pub fn svg_path() -> String {
    let first = &OPTIMIZATION_PATH[0];
    let mut path = format!("M {} {}", first.x, first.y);

    for pair in OPTIMIZATION_PATH.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        let (cp1, cp2) = control_points(prev, curr);
        path.push_str(&format!(
            " C {} {}, {} {}, {} {}",
            cp1.x, cp1.y, cp2.x, cp2.y, curr.x, curr.y
        ));
    }

    path
}

/// Closed-form cubic Bézier at `t` in [0, 1]
pub fn cubic_bezier(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;

    Point::new(
        mt3 * p0.x + 3.0 * mt2 * t * p1.x + 3.0 * mt * t2 * p2.x + t3 * p3.x,
        mt3 * p0.y + 3.0 * mt2 * t * p1.y + 3.0 * mt * t2 * p2.y + t3 * p3.y,
    )
}

/// Position on the path for a scroll progress. Out-of-range input is clamped.
pub fn point_on_path(progress: f64) -> Point {
    let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    let last = OPTIMIZATION_PATH.len() - 1;

    if progress == 0.0 {
        let p = &OPTIMIZATION_PATH[0];
        return Point::new(p.x, p.y);
    }
    if progress == 1.0 {
        let p = &OPTIMIZATION_PATH[last];
        return Point::new(p.x, p.y);
    }

    let segment_progress = progress * last as f64;
    let index = (segment_progress.floor() as usize).min(last - 1);
    let local = segment_progress - index as f64;

    let current = &OPTIMIZATION_PATH[index];
    let next = &OPTIMIZATION_PATH[index + 1];
    let (cp1, cp2) = control_points(current, next);

    cubic_bezier(
        Point::new(current.x, current.y),
        cp1,
        cp2,
        Point::new(next.x, next.y),
        local,
    )
}

/// Everything the page needs to draw the background at one scroll position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BackgroundFrame {
    pub ball: Point,
    pub ball_scale: f64,
    /// Waypoint particles revealed so far
    pub active_particles: usize,
    pub landscape_opacity: f64,
    /// Opacity of the whole background container
    pub container_opacity: f64,
}

impl BackgroundFrame {
    pub fn at(progress: f64) -> Self {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };

        let ball_scale = if progress > 0.8 {
            1.0 + (progress - 0.8) * 1.5
        } else {
            1.0
        };

        Self {
            ball: point_on_path(progress),
            ball_scale,
            active_particles: (progress * OPTIMIZATION_PATH.len() as f64).floor() as usize,
            landscape_opacity: 0.15 + progress * 0.1,
            container_opacity: 1.0,
        }
    }

    /// Static, faint background for clients that prefer reduced motion
    pub fn reduced_motion() -> Self {
        Self {
            container_opacity: REDUCED_MOTION_OPACITY,
            ..Self::at(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(point_on_path(0.0), Point::new(20.0, 5.0));
        assert_eq!(point_on_path(1.0), Point::new(92.0, 95.0));
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(point_on_path(-3.0), point_on_path(0.0));
        assert_eq!(point_on_path(7.5), point_on_path(1.0));
        assert_eq!(point_on_path(f64::NAN), point_on_path(0.0));
    }

    #[test]
    fn test_segment_boundaries_hit_waypoints() {
        let segments = (OPTIMIZATION_PATH.len() - 1) as f64;
        for (i, wp) in OPTIMIZATION_PATH.iter().enumerate().skip(1).take(13) {
            let p = point_on_path(i as f64 / segments);
            assert!(close(p.x, wp.x) && close(p.y, wp.y), "waypoint {} missed: {:?}", i, p);
        }
    }

    #[test]
    fn test_segment_midpoint() {
        // first segment (20,5) -> (25,12) at t = 0.5 is the chord midpoint
        let p = point_on_path(0.5 / 14.0);
        assert!(close(p.x, 22.5));
        assert!(close(p.y, 8.5));
    }

    #[test]
    fn test_svg_path_shape() {
        let d = svg_path();
        assert!(d.starts_with("M 20 5 C 22 7.8"));
        assert!(d.ends_with("92 95"));
        assert_eq!(d.matches(" C ").count(), 14);
    }

    #[test]
    fn test_frame_scaling() {
        let start = BackgroundFrame::at(0.0);
        assert_eq!(start.ball_scale, 1.0);
        assert_eq!(start.active_particles, 0);
        assert!(close(start.landscape_opacity, 0.15));

        let end = BackgroundFrame::at(1.0);
        assert!(close(end.ball_scale, 1.3));
        assert_eq!(end.active_particles, 15);
        assert!(close(end.landscape_opacity, 0.25));
    }

    #[test]
    fn test_reduced_motion_is_static_and_faint() {
        let frame = BackgroundFrame::reduced_motion();
        assert_eq!(frame.ball, point_on_path(0.0));
        assert!(close(frame.container_opacity, 0.1));
    }
}
