#![doc = include_str!("../README.md")]

mod array;
mod config;
pub mod dataset;
pub mod element;
pub mod field;
pub mod grid;
pub mod prelude;
mod traits;
mod write_xdmf;

pub use traits::XdmfElement;

pub use array::as3d;
pub use config::WriteOptions;

pub use dataset::{Container, DataItem, Dataset, DatasetRef, Shape};
pub use element::{is_correct_shape, AttributeCenter, ElementType};

pub use field::{attribute, geometry, structured, topology, unstructured};
pub use field::{Attribute, AttributeType, Field, Geometry, GeometryType, Topology};

pub use grid::{Grid, Step, TimeSeries, TimeStep, TimeValue};

pub use write_xdmf::{to_string, write, write_xdmf, write_xdmf_with};
pub use write_xdmf::{
    write_data_item, write_empty_element, write_end_element, write_start_element,
};

pub use ndarray;

pub use quick_xml::writer::Writer;

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("An io error occured: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("Could not convert document to utf8 encoding: `{0}`")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Could not write XML data: `{0}`")]
    XmlWrite(#[from] quick_xml::Error),
    #[error("dataset `{path}` does not exist in `{filename}`")]
    MissingDataset { filename: String, path: String },
    #[error("dataset `{path}` with shape ({shape}) cannot be interpreted as {element} elements")]
    IncorrectShape {
        path: String,
        shape: Shape,
        element: ElementType,
    },
    #[error("dataset `{path}` with shape ({shape}) is not a list of 1, 2, or 3 dimensional points")]
    GeometryDimensions { path: String, shape: Shape },
    #[error("cannot deduce the attribute type of dataset `{path}` with shape ({shape})")]
    AttributeRank { path: String, shape: Shape },
    #[error("geometry `{geometry}` has {points} points but topology `{topology}` has {vertices} vertices")]
    StructuredMismatch {
        geometry: String,
        points: usize,
        topology: String,
        vertices: usize,
    },
    #[error("cannot pad an array with {columns} columns to 3 components")]
    TooManyComponents { columns: usize },
    #[error("unknown element type `{0}`")]
    UnknownElementType(String),
    #[error("unknown attribute center `{0}`")]
    UnknownAttributeCenter(String),
}
