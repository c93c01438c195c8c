use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;
use serde_json::Value as JsonValue;

use crate::{
    error::FlattenError,
    model::{ImageLayer, ObjectGroupLayer, RawLayer},
    shape::Shape,
    summary::{ImageEntry, LayerSummary, Summary},
};

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w]+").expect("static pattern is valid"));

/// Flatten every object group and image layer of `document` into one summary.
///
/// Entries land in document order: layers top to bottom, then objects top to
/// bottom within each layer. The input is never modified.
pub fn flatten(document: &JsonValue) -> Result<Summary, FlattenError> {
    let mut summary = Summary::default();
    for layer in parse_layers(document)? {
        flatten_layer(&layer, &mut summary);
    }
    debug!(
        "flattened {} points, {} rectangles, {} polygons, {} images",
        summary.points.len(),
        summary.rectangles.len(),
        summary.polygons.len(),
        summary.images.len()
    );
    Ok(summary)
}

/// Like [`flatten`], but produces a separate summary for each layer.
pub fn flatten_per_layer(document: &JsonValue) -> Result<Vec<LayerSummary>, FlattenError> {
    let layers = parse_layers(document)?
        .iter()
        .map(|layer| {
            let mut summary = Summary::default();
            flatten_layer(layer, &mut summary);
            let name = match layer.name().trim() {
                "" => "layer".to_string(),
                _ => layer.name().to_string(),
            };
            LayerSummary { name, summary }
        })
        .collect();
    Ok(layers)
}

/// Turn a layer name into a file-system friendly identifier.
pub fn sanitize_name(raw_name: &str) -> String {
    let sanitized = NON_WORD.replace_all(raw_name.trim(), "_");
    let sanitized = sanitized.trim_matches('_');
    if sanitized.is_empty() {
        "layer".to_string()
    } else {
        sanitized.to_string()
    }
}

fn parse_layers(document: &JsonValue) -> Result<Vec<RawLayer>, FlattenError> {
    let layers = document
        .get("layers")
        .and_then(JsonValue::as_array)
        .ok_or(FlattenError::MissingLayers)?;

    let mut parsed = Vec::with_capacity(layers.len());
    for (index, value) in layers.iter().enumerate() {
        match RawLayer::from_value(value) {
            Ok(Some(layer)) => parsed.push(layer),
            Ok(None) => debug!("skipping layer #{index}: not an object group or image layer"),
            Err(source) => {
                return Err(FlattenError::MalformedLayer {
                    index,
                    name: value
                        .get("name")
                        .and_then(JsonValue::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    source,
                });
            }
        }
    }
    Ok(parsed)
}

fn flatten_layer(layer: &RawLayer, summary: &mut Summary) {
    match layer {
        RawLayer::ObjectGroup(group) => flatten_objects(group, summary),
        RawLayer::Image(image) => {
            let entry = image_entry(image);
            trace!("image {:?} from layer {:?}", entry.image, entry.name);
            summary.push_image(entry);
        }
    }
}

fn flatten_objects(group: &ObjectGroupLayer, summary: &mut Summary) {
    for object in &group.objects {
        if let Some(shape) = Shape::classify(object) {
            trace!("{:?} from layer {:?}", shape, group.name);
            summary.push_shape(shape);
        }
    }
}

fn image_entry(layer: &ImageLayer) -> ImageEntry {
    let (width, height) = layer.size();
    ImageEntry {
        name: layer.name.clone(),
        image: layer.image.clone(),
        position: layer.position(),
        width,
        height,
        index: layer.index(),
    }
}
