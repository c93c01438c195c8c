mod error;
mod flatten;
mod io;
mod model;
mod shape;
mod summary;

pub use error::FlattenError;
pub use flatten::{flatten, flatten_per_layer, sanitize_name};
pub use io::{read_document, write_summary};
pub use model::{
    IMAGE_LAYER, ImageLayer, OBJECT_GROUP, ObjectGroupLayer, RawLayer, RawObject, RawProperty,
    RawVertex,
};
pub use shape::Shape;
pub use summary::{
    ImageEntry, LayerSummary, PointEntry, PolygonEntry, Position, RectangleEntry, Summary,
};
