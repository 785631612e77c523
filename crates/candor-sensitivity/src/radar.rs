//! Radar (polar) chart geometry for a score report.
//!
//! One axis per report entry, evenly spaced around the circle in report
//! order. The polygon repeats its first point at the end so renderers can
//! draw a closed shape without special-casing.

use std::f64::consts::TAU;

use serde::Serialize;

use candor_core::constants::SCORE_CEILING;
use candor_core::{OutcomeProbability, ScoreReport};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    pub label: String,
    /// Radians, starting at 0.
    pub angle: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub title: String,
    pub axes: Vec<RadarAxis>,
    /// `(angle, score)` pairs, closed.
    pub polygon: Vec<(f64, f64)>,
    /// Radial extent of the chart.
    pub max_radius: f64,
}

impl RadarChart {
    pub fn from_report(report: &ScoreReport, probability: OutcomeProbability) -> Self {
        let n = report.len();
        let axes: Vec<RadarAxis> = report
            .iter()
            .enumerate()
            .map(|(i, entry)| RadarAxis {
                label: entry.label.clone(),
                angle: i as f64 / n as f64 * TAU,
            })
            .collect();

        let mut polygon: Vec<(f64, f64)> = axes
            .iter()
            .zip(report.iter())
            .map(|(axis, entry)| (axis.angle, entry.score))
            .collect();
        if let Some(first) = polygon.first().copied() {
            polygon.push(first);
        }

        Self {
            title: format!("Candidate profile\nChance: {probability}"),
            axes,
            polygon,
            max_radius: SCORE_CEILING,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Polygon in cartesian coordinates scaled so a full score reaches
    /// `radius`. Angle 0 points up; angles grow clockwise.
    pub fn vertices(&self, radius: f64) -> Vec<(f64, f64)> {
        self.polygon
            .iter()
            .map(|&(angle, score)| {
                let r = score / self.max_radius * radius;
                (r * angle.sin(), r * angle.cos())
            })
            .collect()
    }
}
