use log::debug;

use crate::{
    model::RawObject,
    summary::{PointEntry, PolygonEntry, Position, RectangleEntry},
};

/// Output shape of a single object-group object.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(PointEntry),
    Rectangle(RectangleEntry),
    Polygon(PolygonEntry),
}

impl Shape {
    /// Classify an object, first match wins:
    ///
    /// 1. `point` flag set: point at the object's position.
    /// 2. non-empty vertex list: polygon in world space, dropped below 2 vertices.
    /// 3. non-zero width or height: rectangle.
    /// 4. anything else is dropped.
    pub fn classify(object: &RawObject) -> Option<Self> {
        let position = object.position();

        if object.point {
            return Some(Shape::Point(PointEntry {
                name: object.name.clone(),
                rotation: object.rotation,
                position,
            }));
        }

        if let Some((local, closed)) = object.vertex_list() {
            if local.len() < 2 {
                debug!(
                    "dropping object {:?}: polygon needs at least 2 vertices, got {}",
                    object.name,
                    local.len()
                );
                return None;
            }
            let vertices = local
                .iter()
                .map(|vertex| Position {
                    x: position.x + vertex.x,
                    y: position.y + vertex.y,
                })
                .collect();
            return Some(Shape::Polygon(PolygonEntry {
                name: object.name.clone(),
                rotation: object.rotation,
                closed,
                vertices,
            }));
        }

        if object.width != 0.0 || object.height != 0.0 {
            return Some(Shape::Rectangle(RectangleEntry {
                name: object.name.clone(),
                rotation: object.rotation,
                position,
                width: object.width,
                height: object.height,
            }));
        }

        debug!("dropping object {:?}: zero-size, no point flag, no vertices", object.name);
        None
    }
}
