//! # Grids
//!
//! A [`Grid`] is a single mesh with its fields. A [`TimeSeries`] is a
//! sequence of grids (time steps) that ParaView animates. Fields that do not
//! change between steps (typically the geometry and topology) are cloned into
//! every step and keep referring to the same datasets.
//!
//! ```
//! use xdmf_write::{AttributeCenter, Container, ElementType, TimeSeries, TimeStep};
//!
//! let mut file = Container::new("tmp.h5");
//! file.insert("/coor", [6, 2]).insert("/conn", [2, 4]);
//! for i in 0..4 {
//!     file.insert(format!("/stress/{i}"), [2]);
//! }
//!
//! let mesh = xdmf_write::unstructured(
//!     file.dataset("/coor")?,
//!     file.dataset("/conn")?,
//!     ElementType::Quadrilateral,
//! )?;
//!
//! let mut series = TimeSeries::new();
//! for i in 0..4 {
//!     let stress = file.dataset(&format!("/stress/{i}"))?;
//!
//!     series += TimeStep::new().time(0.25 * i as f64);
//!     series += mesh.clone();
//!     series += xdmf_write::attribute(stress, AttributeCenter::Cell, Some("Stress"))?;
//! }
//!
//! assert_eq!(series.len(), 4);
//! # Ok::<(), xdmf_write::Error>(())
//! ```

use crate::field::Field;
use crate::write_xdmf::{write_empty_element, write_end_element, write_start_element};
use crate::Error;
use crate::Writer;
use crate::XdmfElement;

use std::fmt;
use std::io::Write;
use std::ops::AddAssign;

const DEFAULT_GRID_NAME: &str = "Grid";
const DEFAULT_SERIES_NAME: &str = "TimeSeries";

/// A single mesh: geometry, topology, and any number of attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub(crate) name: String,
    pub(crate) fields: Vec<Field>,
}

impl Grid {
    /// an empty grid named `"Grid"`
    pub fn new() -> Self {
        Self::with_name(DEFAULT_GRID_NAME)
    }

    pub fn with_name<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Build a grid from fields in one go
    pub fn from_fields<I: IntoIterator<Item = Field>>(fields: I) -> Self {
        let mut grid = Self::new();
        grid.extend(fields);
        grid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn push<F: Into<Field>>(&mut self, field: F) {
        self.fields.push(field.into());
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Field> for Grid {
    fn extend<I: IntoIterator<Item = Field>>(&mut self, iter: I) {
        self.fields.extend(iter)
    }
}

impl AddAssign<Field> for Grid {
    fn add_assign(&mut self, field: Field) {
        self.push(field);
    }
}

impl AddAssign<Vec<Field>> for Grid {
    fn add_assign(&mut self, fields: Vec<Field>) {
        self.extend(fields);
    }
}

/// opens the temporal collection that wraps both grids and time series
fn write_collection_start<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), Error> {
    write_start_element(
        writer,
        "Grid",
        &[
            ("CollectionType", "Temporal"),
            ("GridType", "Collection"),
            ("Name", name),
        ],
    )
}

impl XdmfElement for Grid {
    fn write_element<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
        write_collection_start(writer, &self.name)?;
        write_start_element(writer, "Grid", &[("Name", self.name.as_str())])?;
        self.fields.write_element(writer)?;
        write_end_element(writer, "Grid")?;
        write_end_element(writer, "Grid")
    }
}

/// Time value of a step in a [`TimeSeries`].
///
/// Steps without an explicit time are placed at their (zero based) index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeValue {
    Index(usize),
    Value(f64),
}

impl From<usize> for TimeValue {
    fn from(x: usize) -> Self {
        Self::Index(x)
    }
}

impl From<f64> for TimeValue {
    fn from(x: f64) -> Self {
        Self::Value(x)
    }
}

impl From<f32> for TimeValue {
    fn from(x: f32) -> Self {
        Self::Value(x as f64)
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Value(value) => {
                let mut buffer = ryu::Buffer::new();
                f.write_str(buffer.format(*value))
            }
        }
    }
}

/// Marker that opens a new step in a [`TimeSeries`], optionally with a name
/// and a time value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeStep {
    name: Option<String>,
    time: Option<TimeValue>,
}

impl TimeStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the step. Defaults to `"Increment {index}"`.
    pub fn name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Time of the step. Defaults to the index of the step.
    pub fn time<T: Into<TimeValue>>(mut self, time: T) -> Self {
        self.time = Some(time.into());
        self
    }
}

/// One resolved step of a [`TimeSeries`].
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub name: String,
    pub time: TimeValue,
    pub fields: Vec<Field>,
}

/// A sequence of grids, one per time step.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub(crate) name: String,
    pub(crate) steps: Vec<Step>,
}

impl TimeSeries {
    /// an empty series named `"TimeSeries"`
    pub fn new() -> Self {
        Self::with_name(DEFAULT_SERIES_NAME)
    }

    pub fn with_name<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Open a new step. Fields added afterwards with [`push`](Self::push),
    /// `extend` or `+=` are appended to it.
    pub fn begin_step(&mut self, step: TimeStep) {
        let index = self.steps.len();
        let TimeStep { name, time } = step;

        let name = name.unwrap_or_else(|| format!("Increment {index}"));
        let time = time.unwrap_or(TimeValue::Index(index));

        tracing::trace!(series = %self.name, step = index, name = %name, time = %time, "opened time step");

        self.steps.push(Step {
            name,
            time,
            fields: Vec::new(),
        });
    }

    /// Add a complete step with default name and time.
    pub fn push_back<I: IntoIterator<Item = Field>>(&mut self, fields: I) {
        self.push_step(TimeStep::new(), fields)
    }

    /// Add a complete step.
    pub fn push_step<I: IntoIterator<Item = Field>>(&mut self, step: TimeStep, fields: I) {
        self.begin_step(step);
        self.extend(fields);
    }

    /// Append a field to the open step, opening a default step if there is
    /// none yet.
    pub fn push<F: Into<Field>>(&mut self, field: F) {
        self.current_step().fields.push(field.into());
    }

    fn current_step(&mut self) -> &mut Step {
        if self.steps.is_empty() {
            self.begin_step(TimeStep::new());
        }

        let last = self.steps.len() - 1;
        &mut self.steps[last]
    }
}

impl Default for TimeSeries {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Field> for TimeSeries {
    fn extend<I: IntoIterator<Item = Field>>(&mut self, iter: I) {
        self.current_step().fields.extend(iter)
    }
}

impl AddAssign<TimeStep> for TimeSeries {
    fn add_assign(&mut self, step: TimeStep) {
        self.begin_step(step);
    }
}

impl AddAssign<Field> for TimeSeries {
    fn add_assign(&mut self, field: Field) {
        self.push(field);
    }
}

impl AddAssign<Vec<Field>> for TimeSeries {
    fn add_assign(&mut self, fields: Vec<Field>) {
        self.extend(fields);
    }
}

impl XdmfElement for Step {
    fn write_element<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
        let time = self.time.to_string();
        write_start_element(writer, "Grid", &[("Name", self.name.as_str())])?;
        write_empty_element(writer, "Time", &[("Value", time.as_str())])?;
        self.fields.write_element(writer)?;
        write_end_element(writer, "Grid")
    }
}

impl XdmfElement for TimeSeries {
    fn write_element<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
        tracing::debug!(series = %self.name, steps = self.steps.len(), "writing time series");

        write_collection_start(writer, &self.name)?;
        self.steps.write_element(writer)?;
        write_end_element(writer, "Grid")
    }
}
