//! Chained curve paths over a shared set of control points.

use std::cell::OnceCell;

use arcway_core::traits::{Bounded, Validate};
use arcway_core::{ArcwayError, Result, Tolerance};
use arcway_math::{Aabb3, Point3, Vector3};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::arclen::ArcLengthTable;
use crate::sample;
use crate::segment::{CurveKind, CurveSegment};
use crate::Curve;

/// Construction settings for a [`CurvePath`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathConfig {
    pub kind: CurveKind,
    /// Close the path into a loop. Not supported for Bezier.
    pub cyclic: bool,
    /// Sample count for the arc-length table; must be at least 2.
    pub resolution: u32,
}

impl PathConfig {
    pub fn new(kind: CurveKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.resolution < 2 {
            return Err(ArcwayError::Config(format!(
                "arc-length resolution must be at least 2, got {}",
                self.resolution
            )));
        }
        Ok(())
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            kind: CurveKind::Bezier,
            cyclic: false,
            resolution: 20,
        }
    }
}

/// One or more chained [`CurveSegment`]s over four shared control points.
///
/// The global parameter `u` selects a segment with its integer part and a
/// local position with its fraction, so the path spans `[0, segment_count]`.
/// The cumulative arc-length table is built lazily on the first length query
/// and dropped whenever points or configuration change; the cache cell makes
/// a path intentionally not `Sync`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurvePath {
    control_points: [Point3; 4],
    config: PathConfig,
    segments: Vec<CurveSegment>,
    #[serde(skip)]
    table: OnceCell<ArcLengthTable>,
}

impl CurvePath {
    /// Build a path from four control points.
    ///
    /// A cyclic Bezier configuration is reported with a warning and produces
    /// a path with no segments; check [`CurvePath::is_empty`] before
    /// evaluating.
    pub fn new(control_points: [Point3; 4], config: PathConfig) -> Result<Self> {
        config.validate()?;
        let segments = build_segments(&control_points, config)?;
        Ok(Self {
            control_points,
            config,
            segments,
            table: OnceCell::new(),
        })
    }

    /// Replace the control points and rebuild every segment.
    pub fn set_control_points(&mut self, control_points: [Point3; 4]) -> Result<()> {
        self.segments = build_segments(&control_points, self.config)?;
        self.control_points = control_points;
        self.table.take();
        Ok(())
    }

    /// Replace the configuration and rebuild every segment.
    pub fn set_config(&mut self, config: PathConfig) -> Result<()> {
        config.validate()?;
        self.segments = build_segments(&self.control_points, config)?;
        self.config = config;
        self.table.take();
        Ok(())
    }

    pub fn control_points(&self) -> &[Point3; 4] {
        &self.control_points
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    pub fn segments(&self) -> &[CurveSegment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// `true` when construction produced no traversable segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment index and local parameter for a global parameter.
    ///
    /// Parameters past the end clamp to `t = 1` on the last segment;
    /// negative parameters extrapolate backwards on the first.
    fn locate(&self, u: f64) -> (usize, f64) {
        debug_assert!(
            !self.segments.is_empty(),
            "evaluation on a path with no segments"
        );
        let count = self.segments.len();
        if u < 0.0 {
            return (0, u);
        }
        let index = u.floor() as usize;
        if index >= count {
            (count.saturating_sub(1), 1.0)
        } else {
            (index, u - index as f64)
        }
    }

    fn table(&self) -> &ArcLengthTable {
        self.table.get_or_init(|| {
            ArcLengthTable::build(
                self.config.resolution,
                self.segments.len() as f64,
                |u| self.point_at(u),
            )
        })
    }

    /// Total path length through the arc-length table samples.
    ///
    /// Panics when the path has no segments.
    pub fn total_length(&self) -> f64 {
        self.table().total()
    }

    /// Global parameter reaching `distance` of travel from the path start.
    ///
    /// Distances at or below zero map to 0; distances at or beyond
    /// [`CurvePath::total_length`] map to the end of the domain. Cyclic
    /// callers wrap their distance before the lookup. Panics when the path
    /// has no segments.
    pub fn param_at_length(&self, distance: f64) -> f64 {
        self.table().param_at_length(distance)
    }

    /// Guide lines between the control points, for debug display.
    ///
    /// Hermite paths get anchor-to-tip tangent handles; other kinds get the
    /// chain `p1 -> p2 -> p3 -> p4`.
    pub fn control_polygon(&self) -> Vec<(Point3, Point3)> {
        let [p1, p2, p3, p4] = self.control_points;
        match self.config.kind {
            CurveKind::Hermite => vec![(p1, p1 + p2), (p3, p3 + p4)],
            _ => vec![(p1, p2), (p2, p3), (p3, p4)],
        }
    }
}

impl Curve for CurvePath {
    fn point_at(&self, u: f64) -> Point3 {
        let (index, t) = self.locate(u);
        self.segments[index].point_at(t)
    }

    fn velocity_at(&self, u: f64) -> Vector3 {
        let (index, t) = self.locate(u);
        self.segments[index].velocity_at(t)
    }

    fn acceleration_at(&self, u: f64) -> Vector3 {
        let (index, t) = self.locate(u);
        self.segments[index].acceleration_at(t)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, self.segments.len() as f64)
    }

    fn is_closed(&self) -> bool {
        self.config.cyclic && !self.segments.is_empty()
    }
}

impl Bounded for CurvePath {
    type Bounds = Aabb3;

    /// Bounds of the sampled polyline, not of the exact curve extrema.
    fn bounds(&self) -> Option<Aabb3> {
        if self.is_empty() {
            return None;
        }
        Aabb3::from_points(&sample::curve_polyline(self, self.config.resolution as usize))
    }
}

impl Validate for CurvePath {
    /// Checks that consecutive segments join without positional gaps.
    fn validate(&self) -> Result<()> {
        if self.segments.is_empty() {
            return Err(ArcwayError::Path("path has no segments".into()));
        }
        let tolerance = Tolerance::default_precision();
        let count = self.segments.len();
        let joins = if self.is_closed() { count } else { count - 1 };
        for i in 0..joins {
            let next = (i + 1) % count;
            let gap = self.segments[i]
                .point_at(1.0)
                .distance(self.segments[next].point_at(0.0));
            if !tolerance.is_zero(gap) {
                return Err(ArcwayError::Tolerance(format!(
                    "gap of {gap} between segments {i} and {next}"
                )));
            }
        }
        Ok(())
    }
}

fn build_segments(points: &[Point3; 4], config: PathConfig) -> Result<Vec<CurveSegment>> {
    let [p1, p2, p3, p4] = *points;
    let kind = config.kind;

    if !config.cyclic {
        return Ok(vec![CurveSegment::new([p1, p2, p3, p4], kind)?]);
    }

    match kind {
        // One segment per rotation of the four points
        CurveKind::CatmullRom | CurveKind::BSpline => Ok(vec![
            CurveSegment::new([p1, p2, p3, p4], kind)?,
            CurveSegment::new([p2, p3, p4, p1], kind)?,
            CurveSegment::new([p3, p4, p1, p2], kind)?,
            CurveSegment::new([p4, p1, p2, p3], kind)?,
        ]),
        // Two anchor/tangent pairs, there and back
        CurveKind::Hermite => Ok(vec![
            CurveSegment::new([p1, p2, p3, p4], kind)?,
            CurveSegment::new([p3, p4, p1, p2], kind)?,
        ]),
        CurveKind::Bezier => {
            warn!("Bezier paths cannot be cyclic; building an empty path");
            Ok(Vec::new())
        }
    }
}
