//! Drives the ring phases and collects the diagram handed to a renderer.

use tracing::{debug, info};

use crate::{
    config::Config,
    error::ConfigError,
    label::FractionLabel,
    phases::{self, LabelParams},
    point::Point,
    types::LayerValue,
    vector::Vector,
};

/// Ring boundary points with their fraction labels, index-aligned.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundaryPoints {
    pub points: Vec<Point>,
    pub fraction_labels: Vec<FractionLabel>,
}

impl BoundaryPoints {
    pub fn push(&mut self, point: Point, label: FractionLabel) {
        self.points.push(point);
        self.fraction_labels.push(label);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates `(point, label)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Point, &FractionLabel)> {
        self.points.iter().zip(&self.fraction_labels)
    }
}

/// Interior subdivision points with fraction and value labels, index-aligned.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteriorPoints {
    pub points: Vec<Point>,
    pub fraction_labels: Vec<FractionLabel>,
    pub value_labels: Vec<String>,
}

impl InteriorPoints {
    pub fn push(&mut self, point: Point, fraction: FractionLabel, value: String) {
        self.points.push(point);
        self.fraction_labels.push(fraction);
        self.value_labels.push(value);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates `(point, fraction, value)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (&Point, &FractionLabel, &str)> {
        self.points
            .iter()
            .zip(&self.fraction_labels)
            .zip(&self.value_labels)
            .map(|((p, f), v)| (p, f, v.as_str()))
    }
}

/// Everything a renderer needs to draw one diagram.
///
/// ### Fields
/// - `base` - Ring boundary points, origin first, then ring by ring.
/// - `middle` - Interior subdivision points, ring by ring, pair by pair.
/// - `circle_arcs` - Chords between neighbouring same-ring points; empty
///   unless arcs were requested.
/// - `circle_lines` - Final-ring seed vectors used as spokes; empty unless
///   lines were requested.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagram {
    pub base: BoundaryPoints,
    pub middle: InteriorPoints,
    pub circle_arcs: Vec<Vector>,
    pub circle_lines: Vec<Vector>,
}

/// One generation run over a validated configuration.
///
/// The engine owns its copy of the seed vectors and grows them ring by
/// ring, so [`LayerEngine::run`] consumes it. Build a new engine for each
/// run.
#[derive(Clone, Debug)]
pub struct LayerEngine {
    vectors: Vec<Vector>,
    number_of_circles: usize,
    increment: f64,
    labels: LabelParams,
    draw_circle_arcs: bool,
    draw_circle_lines: bool,
}

impl LayerEngine {
    /// Validates `cfg` and captures the seed fan.
    ///
    /// ### Returns
    /// - `Ok` with an engine whose run cannot fail.
    /// - `Err` if [`Config::validate`] rejects the configuration.
    pub fn new(cfg: &Config) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            vectors: cfg.seed_vectors(),
            number_of_circles: cfg.number_of_circles,
            increment: cfg.length_increment_per_circle,
            labels: LabelParams {
                seed_numerator: cfg.base_seed_numerator,
                step: cfg.base_seed_denominator,
                precision: cfg.rounding_precision,
            },
            draw_circle_arcs: cfg.draw_circle_arcs,
            draw_circle_lines: cfg.draw_circle_lines,
        })
    }

    /// Computes every ring.
    ///
    /// The layer counter starts at the base seed denominator and grows by
    /// it once before the seed ring and once before every growth ring.
    pub fn run(mut self) -> Diagram {
        let mut diagram = Diagram::default();
        let mut arcs = self.draw_circle_arcs.then(Vec::new);
        let step = self.labels.step;

        let mut layer: LayerValue = step;
        phases::origin_ring(&mut diagram.base, &self.labels);

        layer += step;
        phases::seed_ring(
            &self.vectors,
            layer,
            &self.labels,
            &mut diagram.base,
            arcs.as_mut(),
        );

        for circle_index in 1..self.number_of_circles {
            let inner_layer = layer;
            layer += step;

            phases::growth_ring(
                &mut self.vectors,
                self.increment,
                layer,
                &self.labels,
                &mut diagram.base,
            );
            phases::subdivide_ring(
                &self.vectors,
                circle_index,
                inner_layer,
                &self.labels,
                &mut diagram.middle,
                arcs.as_mut(),
            );

            debug!(
                circle_index,
                layer,
                inner_layer,
                boundary = diagram.base.len(),
                interior = diagram.middle.len(),
                "ring generated"
            );
        }

        diagram.circle_arcs = arcs.unwrap_or_default();
        if self.draw_circle_lines {
            diagram.circle_lines = self.vectors;
        }

        info!(
            circles = self.number_of_circles,
            boundary = diagram.base.len(),
            interior = diagram.middle.len(),
            arcs = diagram.circle_arcs.len(),
            lines = diagram.circle_lines.len(),
            "diagram generated"
        );
        diagram
    }
}

/// Validates `cfg` and runs a fresh [`LayerEngine`] over it.
pub fn generate(cfg: &Config) -> Result<Diagram, ConfigError> {
    Ok(LayerEngine::new(cfg)?.run())
}
