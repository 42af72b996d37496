//! Common traits and types that are useful for working with `xdmf-write`

pub use crate::dataset::{Container, Dataset};
pub use crate::element::{AttributeCenter, ElementType};
pub use crate::field::Field;
pub use crate::grid::{Grid, TimeSeries, TimeStep};
pub use crate::traits::XdmfElement;
pub use crate::Writer;
