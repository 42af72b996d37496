//! # Fields
//!
//! A field is one interpretation of a dataset inside a grid: the nodal
//! coordinates ([`Geometry`]), the connectivity ([`Topology`]), or values
//! defined on the mesh ([`Attribute`]). The builders in this module only read
//! the shape and path of a dataset and check that the shape makes sense for
//! the requested interpretation.
//!
//! ```
//! use xdmf_write::{AttributeCenter, Container, ElementType};
//!
//! let mut file = Container::new("tmp.h5");
//! file.insert("/coor", [6, 2]).insert("/conn", [2, 4]).insert("/stress", [2]);
//!
//! let mesh = xdmf_write::unstructured(
//!     file.dataset("/coor")?,
//!     file.dataset("/conn")?,
//!     ElementType::Quadrilateral,
//! )?;
//! let stress = xdmf_write::attribute(file.dataset("/stress")?, AttributeCenter::Cell, None)?;
//!
//! assert_eq!(mesh.len(), 2);
//! assert_eq!(stress.name(), Some("/stress"));
//! # Ok::<(), xdmf_write::Error>(())
//! ```

use crate::dataset::{DataItem, Dataset, Shape};
use crate::element::{is_correct_shape, AttributeCenter, ElementType};
use crate::write_xdmf::{write_data_item, write_end_element, write_start_element};
use crate::Error;
use crate::Writer;
use crate::XdmfElement;

use std::fmt;
use std::io::Write;

use derive_more::From;

/// Number of spatial components of a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryType {
    X,
    XY,
    XYZ,
}

impl GeometryType {
    fn from_columns(columns: usize) -> Option<Self> {
        match columns {
            1 => Some(Self::X),
            2 => Some(Self::XY),
            3 => Some(Self::XYZ),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X => "X",
            Self::XY => "XY",
            Self::XYZ => "XYZ",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar or vector valued attribute, deduced from the rank of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    Scalar,
    Vector,
}

impl AttributeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "Scalar",
            Self::Vector => "Vector",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nodal coordinates (vertices) of a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub geometry_type: GeometryType,
    pub data: DataItem,
}

impl Geometry {
    /// Interpret a `[N, d]` dataset as the coordinates of `N` points in `d`
    /// dimensions (`1 <= d <= 3`).
    pub fn from_dataset<D: Dataset>(dataset: D) -> Result<Self, Error> {
        let shape = dataset.shape();

        let geometry_type = match shape {
            [_, columns] => GeometryType::from_columns(*columns),
            _ => None,
        }
        .ok_or_else(|| Error::GeometryDimensions {
            path: dataset.path().to_string(),
            shape: Shape::from(shape),
        })?;

        Ok(Self {
            geometry_type,
            data: dataset.data_item(),
        })
    }
}

/// Connectivity of a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    pub element: ElementType,
    pub number_of_elements: usize,
    pub data: DataItem,
}

impl Topology {
    /// Interpret a dataset as the connectivity of `element`s. The shape must
    /// pass [`is_correct_shape`].
    pub fn from_dataset<D: Dataset>(dataset: D, element: ElementType) -> Result<Self, Error> {
        let shape = dataset.shape();

        if !is_correct_shape(shape, element) {
            return Err(Error::IncorrectShape {
                path: dataset.path().to_string(),
                shape: Shape::from(shape),
                element,
            });
        }

        Ok(Self {
            element,
            number_of_elements: shape[0],
            data: dataset.data_item(),
        })
    }
}

/// Values defined on the nodes or cells of a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub attribute_type: AttributeType,
    pub center: AttributeCenter,
    pub name: String,
    pub data: DataItem,
}

impl Attribute {
    /// Interpret a dataset as an attribute. A rank-1 dataset is a scalar,
    /// a rank-2 dataset a vector. The attribute is named after the
    /// dataset path unless `name` is given.
    pub fn from_dataset<D: Dataset>(
        dataset: D,
        center: AttributeCenter,
        name: Option<&str>,
    ) -> Result<Self, Error> {
        let shape = dataset.shape();

        let attribute_type = match shape.len() {
            1 => AttributeType::Scalar,
            2 => AttributeType::Vector,
            _ => {
                return Err(Error::AttributeRank {
                    path: dataset.path().to_string(),
                    shape: Shape::from(shape),
                })
            }
        };

        let name = name.unwrap_or_else(|| dataset.path()).to_string();

        Ok(Self {
            attribute_type,
            center,
            name,
            data: dataset.data_item(),
        })
    }
}

/// A single interpretation of a dataset inside a grid.
#[derive(Debug, Clone, PartialEq, From)]
pub enum Field {
    Geometry(Geometry),
    Topology(Topology),
    Attribute(Attribute),
}

impl Field {
    /// the dataset this field refers to
    pub fn data(&self) -> &DataItem {
        match self {
            Self::Geometry(geometry) => &geometry.data,
            Self::Topology(topology) => &topology.data,
            Self::Attribute(attribute) => &attribute.data,
        }
    }

    /// name of the field, only attributes carry one
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Attribute(attribute) => Some(attribute.name.as_str()),
            _ => None,
        }
    }
}

impl XdmfElement for Geometry {
    fn write_element<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
        write_start_element(
            writer,
            "Geometry",
            &[("GeometryType", self.geometry_type.as_str())],
        )?;
        write_data_item(writer, &self.data)?;
        write_end_element(writer, "Geometry")
    }
}

impl XdmfElement for Topology {
    fn write_element<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
        let number_of_elements = self.number_of_elements.to_string();
        write_start_element(
            writer,
            "Topology",
            &[
                ("NumberOfElements", number_of_elements.as_str()),
                ("TopologyType", self.element.as_str()),
            ],
        )?;
        write_data_item(writer, &self.data)?;
        write_end_element(writer, "Topology")
    }
}

impl XdmfElement for Attribute {
    fn write_element<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
        write_start_element(
            writer,
            "Attribute",
            &[
                ("AttributeType", self.attribute_type.as_str()),
                ("Center", self.center.as_str()),
                ("Name", self.name.as_str()),
            ],
        )?;
        write_data_item(writer, &self.data)?;
        write_end_element(writer, "Attribute")
    }
}

impl XdmfElement for Field {
    fn write_element<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
        match self {
            Self::Geometry(geometry) => geometry.write_element(writer),
            Self::Topology(topology) => topology.write_element(writer),
            Self::Attribute(attribute) => attribute.write_element(writer),
        }
    }
}

/// Interpret a dataset as a geometry (nodal coordinates).
pub fn geometry<D: Dataset>(dataset: D) -> Result<Field, Error> {
    Geometry::from_dataset(dataset).map(Field::from)
}

/// Interpret a dataset as a topology (connectivity) of `element`s.
pub fn topology<D: Dataset>(dataset: D, element: ElementType) -> Result<Field, Error> {
    Topology::from_dataset(dataset, element).map(Field::from)
}

/// Interpret a dataset as an attribute, named after its path unless `name`
/// is given.
pub fn attribute<D: Dataset>(
    dataset: D,
    center: AttributeCenter,
    name: Option<&str>,
) -> Result<Field, Error> {
    Attribute::from_dataset(dataset, center, name).map(Field::from)
}

/// Individual points: a geometry plus a `Polyvertex` topology.
///
/// The topology is a mock connectivity (usually `0..N`) and must have one
/// entry per point of the geometry.
pub fn structured<G: Dataset, T: Dataset>(geometry: G, topology: T) -> Result<Vec<Field>, Error> {
    let points = geometry.shape().first().copied().unwrap_or_default();
    let vertices = topology.shape().first().copied().unwrap_or_default();

    if points != vertices {
        return Err(Error::StructuredMismatch {
            geometry: geometry.path().to_string(),
            points,
            topology: topology.path().to_string(),
            vertices,
        });
    }

    Ok(vec![
        self::geometry(geometry)?,
        self::topology(topology, ElementType::Polyvertex)?,
    ])
}

/// A mesh of `element`s: a geometry plus a topology.
pub fn unstructured<G: Dataset, T: Dataset>(
    geometry: G,
    topology: T,
    element: ElementType,
) -> Result<Vec<Field>, Error> {
    Ok(vec![
        self::geometry(geometry)?,
        self::topology(topology, element)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Container;

    fn container() -> Container {
        let mut file = Container::new("tmp.h5");
        file.insert("/coor", [6, 2])
            .insert("/coor3", [6, 3])
            .insert("/coor4", [6, 4])
            .insert("/conn", [2, 4])
            .insert("/points", [6])
            .insert("/stress", [2])
            .insert("/disp", [6, 3])
            .insert("/tensor", [6, 3, 3]);
        file
    }

    #[test]
    fn geometry_type_from_columns() {
        let file = container();

        let xy = Geometry::from_dataset(file.dataset("/coor").unwrap()).unwrap();
        assert_eq!(xy.geometry_type, GeometryType::XY);
        assert_eq!(xy.data.dimensions.to_string(), "6 2");

        let xyz = Geometry::from_dataset(file.dataset("/coor3").unwrap()).unwrap();
        assert_eq!(xyz.geometry_type, GeometryType::XYZ);
    }

    #[test]
    fn geometry_rejects_bad_shapes() {
        let file = container();

        for path in ["/coor4", "/points", "/tensor"] {
            let err = geometry(file.dataset(path).unwrap()).unwrap_err();
            assert!(matches!(err, Error::GeometryDimensions { .. }), "{path}");
        }
    }

    #[test]
    fn topology_counts_elements() {
        let file = container();
        let topology = Topology::from_dataset(
            file.dataset("/conn").unwrap(),
            ElementType::Quadrilateral,
        )
        .unwrap();

        assert_eq!(topology.number_of_elements, 2);
        assert_eq!(topology.element, ElementType::Quadrilateral);
    }

    #[test]
    fn topology_rejects_wrong_element() {
        let file = container();
        let err = topology(file.dataset("/conn").unwrap(), ElementType::Triangle).unwrap_err();

        assert_eq!(
            err.to_string(),
            "dataset `/conn` with shape (2 4) cannot be interpreted as Triangle elements"
        );
    }

    #[test]
    fn attribute_type_from_rank() {
        let file = container();

        let stress =
            Attribute::from_dataset(file.dataset("/stress").unwrap(), AttributeCenter::Cell, None)
                .unwrap();
        assert_eq!(stress.attribute_type, AttributeType::Scalar);
        assert_eq!(stress.name, "/stress");

        let disp = Attribute::from_dataset(
            file.dataset("/disp").unwrap(),
            AttributeCenter::Node,
            Some("Displacement"),
        )
        .unwrap();
        assert_eq!(disp.attribute_type, AttributeType::Vector);
        assert_eq!(disp.name, "Displacement");

        let err = attribute(file.dataset("/tensor").unwrap(), AttributeCenter::Node, None)
            .unwrap_err();
        assert!(matches!(err, Error::AttributeRank { .. }));
    }

    #[test]
    fn structured_requires_one_vertex_per_point() {
        let file = container();

        let fields =
            structured(file.dataset("/coor").unwrap(), file.dataset("/points").unwrap()).unwrap();
        assert_eq!(fields.len(), 2);
        assert!(matches!(
            &fields[1],
            Field::Topology(Topology {
                element: ElementType::Polyvertex,
                number_of_elements: 6,
                ..
            })
        ));

        let err = structured(file.dataset("/coor").unwrap(), file.dataset("/stress").unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::StructuredMismatch {
                points: 6,
                vertices: 2,
                ..
            }
        ));
    }
}
