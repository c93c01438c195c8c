use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::shape::Shape;

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointEntry {
    pub name: String,
    pub rotation: f64,
    pub position: Position,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleEntry {
    pub name: String,
    pub rotation: f64,
    pub position: Position,
    pub width: f64,
    pub height: f64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonEntry {
    pub name: String,
    pub rotation: f64,
    pub closed: bool,
    pub vertices: Vec<Position>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub name: String,
    pub image: String,
    pub position: Position,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<JsonValue>,
}

/// Flattened output document. Every list keeps input scan order.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub points: Vec<PointEntry>,
    pub rectangles: Vec<RectangleEntry>,
    pub polygons: Vec<PolygonEntry>,
    pub images: Vec<ImageEntry>,
}

impl Summary {
    pub fn push_shape(&mut self, shape: Shape) {
        match shape {
            Shape::Point(point) => self.points.push(point),
            Shape::Rectangle(rectangle) => self.rectangles.push(rectangle),
            Shape::Polygon(polygon) => self.polygons.push(polygon),
        }
    }

    pub fn push_image(&mut self, image: ImageEntry) {
        self.images.push(image);
    }

    /// Total number of entries across all four lists.
    pub fn len(&self) -> usize {
        self.points.len() + self.rectangles.len() + self.polygons.len() + self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Summary of a single layer, produced when splitting output per layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSummary {
    pub name: String,
    pub summary: Summary,
}
