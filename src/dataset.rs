//! # Dataset references
//!
//! `xdmf-write` never opens the container file. Everything it needs from a
//! dataset is the name of the file it lives in, its path inside that file,
//! and its shape. Any handle from an array-storage library can be used by
//! implementing [`Dataset`] for it. For cases where the layout of the file
//! is already known, [`Container`] is a small in-memory manifest of the
//! datasets in a single file.

use crate::Error;

use std::collections::BTreeMap;
use std::fmt;

use derive_more::{Deref, From};
use ndarray::{ArrayBase, Data, Dimension};

/// Describes a dataset stored in an external container file.
pub trait Dataset {
    /// name of the file containing the dataset, exactly as it should be
    /// referenced from the XDMF document
    fn filename(&self) -> &str;

    /// path of the dataset inside the file (e.g. `/coor`)
    fn path(&self) -> &str;

    /// extents of the dataset
    fn shape(&self) -> &[usize];

    /// the `file:path` reference to this dataset
    fn data_item(&self) -> DataItem {
        DataItem {
            dimensions: Shape::from(self.shape()),
            filename: self.filename().to_string(),
            path: self.path().to_string(),
        }
    }
}

impl<T: Dataset + ?Sized> Dataset for &T {
    fn filename(&self) -> &str {
        (**self).filename()
    }

    fn path(&self) -> &str {
        (**self).path()
    }

    fn shape(&self) -> &[usize] {
        (**self).shape()
    }
}

/// Extents of a dataset.
///
/// Formats as the extents separated by single spaces, which is the text
/// of a `Dimensions` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deref, From)]
pub struct Shape(Vec<usize>);

impl Shape {
    pub fn new(extents: Vec<usize>) -> Self {
        Self(extents)
    }

    pub fn rank(&self) -> usize {
        self.0.len()
    }
}

impl From<&[usize]> for Shape {
    fn from(x: &[usize]) -> Self {
        Self(x.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(x: [usize; N]) -> Self {
        Self(x.to_vec())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut extents = self.0.iter();

        if let Some(first) = extents.next() {
            write!(f, "{first}")?;
        }

        for extent in extents {
            write!(f, " {extent}")?;
        }

        Ok(())
    }
}

/// Reference to the numeric data backing a geometry, topology, or attribute.
///
/// Written to the document as
/// `<DataItem Dimensions="6 2" Format="HDF"> file.h5:/coor </DataItem>`
#[derive(Debug, Clone, PartialEq)]
pub struct DataItem {
    pub dimensions: Shape,
    pub filename: String,
    pub path: String,
}

impl DataItem {
    /// the `file:path` text content of the element
    pub fn location(&self) -> String {
        format!("{}:{}", self.filename, self.path)
    }
}

/// In-memory description of the datasets stored in one container file.
///
/// ```
/// let mut file = xdmf_write::Container::new("tmp.h5");
/// file.insert("/coor", [6, 2]);
///
/// let coor = file.dataset("/coor").unwrap();
/// assert_eq!(xdmf_write::Dataset::shape(&coor), &[6, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    filename: String,
    datasets: BTreeMap<String, Shape>,
}

impl Container {
    pub fn new<T: Into<String>>(filename: T) -> Self {
        Self {
            filename: filename.into(),
            datasets: BTreeMap::new(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Record a dataset with a known shape. An existing entry at the same
    /// path is replaced.
    pub fn insert<P: Into<String>, S: Into<Shape>>(&mut self, path: P, shape: S) -> &mut Self {
        self.datasets.insert(path.into(), shape.into());
        self
    }

    /// Record a dataset whose shape is that of `array`.
    pub fn insert_array<P, S, D>(&mut self, path: P, array: &ArrayBase<S, D>) -> &mut Self
    where
        P: Into<String>,
        S: Data,
        D: Dimension,
    {
        self.insert(path, array.shape())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.datasets.contains_key(path)
    }

    /// Look up a dataset by its path
    pub fn dataset<'a>(&'a self, path: &str) -> Result<DatasetRef<'a>, Error> {
        let (path, shape) =
            self.datasets
                .get_key_value(path)
                .ok_or_else(|| Error::MissingDataset {
                    filename: self.filename.clone(),
                    path: path.to_string(),
                })?;

        Ok(DatasetRef {
            filename: &self.filename,
            path: path.as_str(),
            shape,
        })
    }

    /// iterate over every recorded dataset, ordered by path
    pub fn datasets(&self) -> impl Iterator<Item = DatasetRef<'_>> {
        self.datasets.iter().map(|(path, shape)| DatasetRef {
            filename: &self.filename,
            path: path.as_str(),
            shape,
        })
    }
}

/// A dataset borrowed from a [`Container`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetRef<'a> {
    filename: &'a str,
    path: &'a str,
    shape: &'a Shape,
}

impl<'a> Dataset for DatasetRef<'a> {
    fn filename(&self) -> &str {
        self.filename
    }

    fn path(&self) -> &str {
        self.path
    }

    fn shape(&self) -> &[usize] {
        self.shape
    }
}
