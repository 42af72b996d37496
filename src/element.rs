//! Element types for topologies, attribute centering, and the shape rules
//! that tie a connectivity dataset to an element type.

use crate::Error;

use std::fmt;
use std::str::FromStr;

/// The cell type used to interpret a topology (connectivity) dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// individual points, connectivity is a rank-1 list of node indices
    Polyvertex,
    /// 3 nodes per element
    Triangle,
    /// 4 nodes per element
    Quadrilateral,
    /// 8 nodes per element
    Hexahedron,
}

impl ElementType {
    /// every available element type
    pub const ALL: [ElementType; 4] = [
        ElementType::Polyvertex,
        ElementType::Triangle,
        ElementType::Quadrilateral,
        ElementType::Hexahedron,
    ];

    /// the name written to the `TopologyType` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Polyvertex => "Polyvertex",
            Self::Triangle => "Triangle",
            Self::Quadrilateral => "Quadrilateral",
            Self::Hexahedron => "Hexahedron",
        }
    }

    /// number of nodes per element, `None` for `Polyvertex` whose
    /// connectivity is a flat list
    pub fn nodes_per_element(&self) -> Option<usize> {
        match self {
            Self::Polyvertex => None,
            Self::Triangle => Some(3),
            Self::Quadrilateral => Some(4),
            Self::Hexahedron => Some(8),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|element| element.as_str() == s)
            .ok_or_else(|| Error::UnknownElementType(s.to_string()))
    }
}

/// Where the values of an attribute live on the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeCenter {
    Cell,
    Node,
}

impl AttributeCenter {
    /// every available centering
    pub const ALL: [AttributeCenter; 2] = [AttributeCenter::Cell, AttributeCenter::Node];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cell => "Cell",
            Self::Node => "Node",
        }
    }
}

impl fmt::Display for AttributeCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeCenter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|center| center.as_str() == s)
            .ok_or_else(|| Error::UnknownAttributeCenter(s.to_string()))
    }
}

/// Check that the shape of a connectivity dataset matches an element type.
///
/// `Polyvertex` expects a rank-1 shape. The other element types expect a
/// rank-2 shape whose column count is the number of nodes per element.
pub fn is_correct_shape(shape: &[usize], element: ElementType) -> bool {
    match (shape, element.nodes_per_element()) {
        ([_], None) => true,
        ([_, columns], Some(nodes)) => *columns == nodes,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyvertex_expects_rank_one() {
        assert!(is_correct_shape(&[6], ElementType::Polyvertex));
        assert!(!is_correct_shape(&[6, 1], ElementType::Polyvertex));
        assert!(!is_correct_shape(&[], ElementType::Polyvertex));
    }

    #[test]
    fn columns_must_match_nodes() {
        let cases = [
            (ElementType::Triangle, 3),
            (ElementType::Quadrilateral, 4),
            (ElementType::Hexahedron, 8),
        ];

        for (element, nodes) in cases {
            assert!(is_correct_shape(&[10, nodes], element), "{element}");
            assert!(!is_correct_shape(&[10], element), "{element}");
            assert!(!is_correct_shape(&[10, nodes, 1], element), "{element}");

            for columns in [1, 2, 3, 4, 5, 8, 9] {
                if columns != nodes {
                    assert!(!is_correct_shape(&[10, columns], element), "{element}");
                }
            }
        }
    }

    #[test]
    fn element_names_round_trip() {
        for element in ElementType::ALL {
            let parsed: ElementType = element.to_string().parse().unwrap();
            assert_eq!(parsed, element);
        }

        for center in AttributeCenter::ALL {
            let parsed: AttributeCenter = center.as_str().parse().unwrap();
            assert_eq!(parsed, center);
        }
    }

    #[test]
    fn unknown_names() {
        let err = "Tetrahedron".parse::<ElementType>().unwrap_err();
        assert!(matches!(err, Error::UnknownElementType(name) if name == "Tetrahedron"));

        let err = "Edge".parse::<AttributeCenter>().unwrap_err();
        assert!(matches!(err, Error::UnknownAttributeCenter(name) if name == "Edge"));
    }
}
