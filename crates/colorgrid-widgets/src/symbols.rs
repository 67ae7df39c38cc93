//! Symbol catalog: maps symbol identifiers to painted vector shapes.
//!
//! Identifiers follow the [`IconSet`] naming convention: `name` is the outline
//! and `name.fill` is the solid shape. Outlines are built as [`kurbo::BezPath`]s
//! in a unit box and flattened to polylines when painted.

use std::f64::consts::{PI, TAU};

use egui::{Color32, Mesh, Painter, Pos2, Rect, Stroke};
use kurbo::{BezPath, Circle, PathEl, Point, RoundedRect, Shape as _};

use crate::icon::{IconSet, FILL_SUFFIX};
use crate::sizing;

/// Flattening tolerance in unit-box coordinates.
const TOLERANCE: f64 = 0.002;

/// Lookup from symbol identifiers to renderable shapes.
///
/// A picker only ever asks for the identifiers produced by
/// [`IconSet::filled`] and [`IconSet::stroke`], but a catalog may know more.
pub trait SymbolCatalog {
    /// Whether `name` resolves to a symbol.
    fn contains(&self, name: &str) -> bool;

    /// Paint `name` fitted and centered in `rect`, tinted with `tint`.
    ///
    /// Returns `false` and paints nothing when the name is unknown.
    fn paint(&self, painter: &Painter, name: &str, rect: Rect, tint: Color32) -> bool;
}

/// The built-in catalog with a filled and a stroke symbol for every [`IconSet`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeCatalog;

impl ShapeCatalog {
    /// Resolve an identifier to its icon and whether it is the filled variant.
    fn lookup(name: &str) -> Option<(IconSet, bool)> {
        let (base, filled) = match name.strip_suffix(FILL_SUFFIX) {
            Some(base) => (base, true),
            None => (name, false),
        };
        IconSet::ALL
            .into_iter()
            .find(|icon| icon.name() == base)
            .map(|icon| (icon, filled))
    }

    /// Outline of `icon` in the unit box, flattened to a closed polyline.
    pub fn outline(icon: IconSet) -> Vec<Point> {
        let mut points = Vec::new();
        kurbo::flatten(symbol_path(icon), TOLERANCE, |el| match el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => points.push(p),
            _ => {}
        });
        // Drop the duplicate closing point
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        points
    }
}

impl SymbolCatalog for ShapeCatalog {
    fn contains(&self, name: &str) -> bool {
        Self::lookup(name).is_some()
    }

    fn paint(&self, painter: &Painter, name: &str, rect: Rect, tint: Color32) -> bool {
        let Some((icon, filled)) = Self::lookup(name) else {
            log::debug!("Unknown symbol '{}', skipping", name);
            return false;
        };

        let outline = Self::outline(icon);
        if filled {
            let points = fit_points(&outline, rect);
            if is_convex(icon) {
                painter.add(egui::Shape::convex_polygon(points, tint, Stroke::NONE));
            } else {
                painter.add(egui::Shape::mesh(fan_mesh(rect.center(), &points, tint)));
            }
        } else {
            // Inset by half the stroke so the line stays inside the rect
            let inset = rect.shrink(sizing::STROKE_WIDTH / 2.0);
            let points = fit_points(&outline, inset);
            painter.add(egui::Shape::closed_line(
                points,
                Stroke::new(sizing::STROKE_WIDTH, tint),
            ));
        }
        true
    }
}

fn is_convex(icon: IconSet) -> bool {
    !matches!(icon, IconSet::Seal)
}

/// Build the unit-box path for an icon.
fn symbol_path(icon: IconSet) -> BezPath {
    let center = Point::new(0.5, 0.5);
    match icon {
        IconSet::Circle => Circle::new(center, 0.5).to_path(TOLERANCE),
        IconSet::Square => RoundedRect::new(0.05, 0.05, 0.95, 0.95, 0.18).to_path(TOLERANCE),
        IconSet::Diamond => polygon(center, 0.5, 4, -PI / 2.0),
        // Flat top and bottom edges
        IconSet::Octagon => polygon(center, 0.5, 8, -PI / 2.0 + PI / 8.0),
        // Pointy top, vertical sides
        IconSet::Hexagon => polygon(center, 0.5, 6, -PI / 2.0),
        IconSet::Seal => seal(center, 0.5, 0.43, 12),
    }
}

/// Regular polygon with `sides` vertices on a circle of `radius`.
fn polygon(center: Point, radius: f64, sides: usize, start_angle: f64) -> BezPath {
    let mut path = BezPath::new();
    for i in 0..sides {
        let angle = start_angle + TAU * i as f64 / sides as f64;
        let p = center + kurbo::Vec2::from_angle(angle) * radius;
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

/// Scalloped badge: `bumps` arcs bulging out from an inner circle.
fn seal(center: Point, outer: f64, inner: f64, bumps: usize) -> BezPath {
    let step = TAU / bumps as f64;
    let at = |angle: f64, radius: f64| center + kurbo::Vec2::from_angle(angle) * radius;

    let mut path = BezPath::new();
    path.move_to(at(0.0, inner));
    for i in 0..bumps {
        let a0 = i as f64 * step;
        // Quad control point sits beyond the outer radius so the curve peaks near it
        let control = at(a0 + step / 2.0, 2.0 * outer - inner);
        path.quad_to(control, at(a0 + step, inner));
    }
    path.close_path();
    path
}

/// Map unit-box points into the largest square centered in `rect`.
fn fit_points(points: &[Point], rect: Rect) -> Vec<Pos2> {
    let side = rect.width().min(rect.height());
    let origin = rect.center() - egui::vec2(side, side) / 2.0;
    points
        .iter()
        .map(|p| origin + egui::vec2(p.x as f32, p.y as f32) * side)
        .collect()
}

/// Triangle fan around `center`; correct for any outline that is star-shaped about it.
fn fan_mesh(center: Pos2, points: &[Pos2], tint: Color32) -> Mesh {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, tint);
    for &p in points {
        mesh.colored_vertex(p, tint);
    }
    let n = points.len() as u32;
    for i in 0..n {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
    }
    mesh
}
