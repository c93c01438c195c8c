use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::summary::Position;

pub const OBJECT_GROUP: &str = "objectgroup";
pub const IMAGE_LAYER: &str = "imagelayer";

/// A `layers[]` entry the flattener knows how to read.
#[derive(Clone, Debug, PartialEq)]
pub enum RawLayer {
    ObjectGroup(ObjectGroupLayer),
    Image(ImageLayer),
}

impl RawLayer {
    /// Parse one entry of the `layers` array.
    ///
    /// Returns `Ok(None)` for entries that are not JSON objects and for layer
    /// types other than object groups and image layers. Those entries are never
    /// deserialized, so their contents cannot fail the conversion.
    pub fn from_value(value: &JsonValue) -> Result<Option<Self>, serde_json::Error> {
        let Some(fields) = value.as_object() else {
            return Ok(None);
        };
        let layer = match fields.get("type").and_then(JsonValue::as_str) {
            Some(OBJECT_GROUP) => RawLayer::ObjectGroup(ObjectGroupLayer::deserialize(value)?),
            Some(IMAGE_LAYER) => RawLayer::Image(ImageLayer::deserialize(value)?),
            _ => return Ok(None),
        };
        Ok(Some(layer))
    }

    pub fn name(&self) -> &str {
        match self {
            RawLayer::ObjectGroup(ObjectGroupLayer { name, .. })
            | RawLayer::Image(ImageLayer { name, .. }) => name,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ObjectGroupLayer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub objects: Vec<RawObject>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ImageLayer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub offsetx: Option<f64>,
    #[serde(default)]
    pub offsety: Option<f64>,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub imagewidth: Option<f64>,
    #[serde(default)]
    pub imageheight: Option<f64>,
    #[serde(default)]
    pub properties: Vec<RawProperty>,
}

impl ImageLayer {
    /// Explicit offsets win over the base position, per axis.
    pub fn position(&self) -> Position {
        Position {
            x: self.offsetx.unwrap_or(self.x),
            y: self.offsety.unwrap_or(self.y),
        }
    }

    /// Intrinsic image size, falling back to the layer size when missing or zero.
    pub fn size(&self) -> (f64, f64) {
        let non_zero = |value: Option<f64>| value.filter(|v| *v != 0.0);
        (
            non_zero(self.imagewidth).unwrap_or(self.width),
            non_zero(self.imageheight).unwrap_or(self.height),
        )
    }

    /// Value of the first property named `index`, taken verbatim.
    pub fn index(&self) -> Option<JsonValue> {
        self.properties
            .iter()
            .find(|property| property.name == "index")
            .map(|property| property.value.clone())
            .filter(|value| !value.is_null())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawObject {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub point: bool,
    #[serde(default)]
    pub polygon: Vec<RawVertex>,
    #[serde(default)]
    pub polyline: Vec<RawVertex>,
    #[serde(default)]
    pub closed: Option<bool>,
}

impl RawObject {
    /// The object's local vertex list and whether it forms a closed ring.
    ///
    /// `polygon` shadows `polyline`; polygons default to closed, polylines to open.
    pub fn vertex_list(&self) -> Option<(&[RawVertex], bool)> {
        if !self.polygon.is_empty() {
            Some((&self.polygon, self.closed.unwrap_or(true)))
        } else if !self.polyline.is_empty() {
            Some((&self.polyline, self.closed.unwrap_or(false)))
        } else {
            None
        }
    }

    pub fn position(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct RawVertex {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawProperty {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: JsonValue,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::model::{ImageLayer, RawLayer, RawObject, RawVertex};
    use crate::summary::Position;

    #[test]
    fn absent_fields_take_defaults() {
        let object: RawObject = serde_json::from_value(json!({})).unwrap();
        assert_eq!(object, RawObject::default());
        assert_eq!(object.closed, None);
        assert!(!object.point);
    }

    #[test]
    fn integer_coordinates_read_as_floats() {
        let object: RawObject = serde_json::from_value(json!({"x": 3, "y": -4})).unwrap();
        assert_eq!(object.position(), Position { x: 3.0, y: -4.0 });
    }

    #[test]
    fn non_numeric_coordinate_is_an_error() {
        assert!(serde_json::from_value::<RawObject>(json!({"x": "ten"})).is_err());
        assert!(serde_json::from_value::<RawObject>(json!({"y": null})).is_err());
    }

    #[test]
    fn unknown_layer_types_are_not_parsed() {
        let tiles = json!({"type": "tilelayer", "data": "not a list", "x": "bogus"});
        assert_eq!(RawLayer::from_value(&tiles).unwrap(), None);
        assert_eq!(RawLayer::from_value(&json!({"name": "untyped"})).unwrap(), None);
        assert_eq!(RawLayer::from_value(&json!(42)).unwrap(), None);
        assert_eq!(RawLayer::from_value(&json!("garbage")).unwrap(), None);
    }

    #[test]
    fn object_group_layer_is_parsed() {
        let layer = json!({
            "type": "objectgroup",
            "name": "markers",
            "objects": [{"name": "a", "x": 1, "y": 2}]
        });
        let Some(RawLayer::ObjectGroup(group)) = RawLayer::from_value(&layer).unwrap() else {
            panic!("expected an object group");
        };
        assert_eq!(group.name, "markers");
        assert_eq!(group.objects.len(), 1);
        assert_eq!(group.objects[0].name, "a");
    }

    #[test]
    fn polygon_shadows_polyline() {
        let object: RawObject = serde_json::from_value(json!({
            "polygon": [{"x": 1, "y": 1}],
            "polyline": [{"x": 2, "y": 2}, {"x": 3, "y": 3}]
        }))
        .unwrap();
        let (vertices, closed) = object.vertex_list().unwrap();
        assert_eq!(vertices, &[RawVertex { x: 1.0, y: 1.0 }]);
        assert!(closed);
    }

    #[test]
    fn polyline_defaults_to_open() {
        let open: RawObject =
            serde_json::from_value(json!({"polyline": [{"x": 0}, {"y": 1}]})).unwrap();
        assert!(!open.vertex_list().unwrap().1);

        let forced: RawObject = serde_json::from_value(
            json!({"polyline": [{"x": 0}, {"y": 1}], "closed": true}),
        )
        .unwrap();
        assert!(forced.vertex_list().unwrap().1);
    }

    #[test]
    fn image_position_prefers_offsets_per_axis() {
        let layer = ImageLayer {
            x: 1.0,
            y: 2.0,
            offsetx: Some(10.0),
            ..Default::default()
        };
        assert_eq!(layer.position(), Position { x: 10.0, y: 2.0 });
    }

    #[test]
    fn image_size_skips_zero_intrinsic_size() {
        let layer = ImageLayer {
            width: 32.0,
            height: 16.0,
            imagewidth: Some(0.0),
            imageheight: Some(64.0),
            ..Default::default()
        };
        assert_eq!(layer.size(), (32.0, 64.0));
    }

    #[test]
    fn first_index_property_wins() {
        let layer: ImageLayer = serde_json::from_value(json!({
            "properties": [
                {"name": "depth", "value": 9, "type": "int"},
                {"name": "index", "value": "front", "type": "string"},
                {"name": "index", "value": 3, "type": "int"}
            ]
        }))
        .unwrap();
        assert_eq!(layer.index(), Some(json!("front")));
    }

    #[test]
    fn missing_or_null_index_is_absent() {
        let missing: ImageLayer =
            serde_json::from_value(json!({"properties": [{"name": "depth", "value": 1}]}))
                .unwrap();
        assert_eq!(missing.index(), None);

        let null: ImageLayer =
            serde_json::from_value(json!({"properties": [{"name": "index", "value": null}]}))
                .unwrap();
        assert_eq!(null.index(), None);
    }
}
