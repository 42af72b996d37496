//! # Traits
//!
//! [`XdmfElement`] is implemented by everything that can be placed inside the
//! `<Domain>` of an XDMF document: a [`Grid`](crate::Grid), a
//! [`TimeSeries`](crate::TimeSeries), single [`Field`](crate::Field)s, and
//! lists of any of those.
//!
//! If you need an element that this crate does not provide, implement the
//! trait yourself with the helpers in [`write_xdmf`](crate::write_xdmf()):
//!
//! ```
//! use xdmf_write::{Error, Writer, XdmfElement};
//! use std::io::Write;
//!
//! struct Information(String);
//!
//! impl XdmfElement for Information {
//!     fn write_element<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
//!         xdmf_write::write_empty_element(writer, "Information", &[("Name", self.0.as_str())])
//!     }
//! }
//!
//! let text = xdmf_write::to_string(&Information("mesh".into()))?;
//! assert!(text.contains(r#"<Information Name="mesh"/>"#));
//! # Ok::<(), Error>(())
//! ```

use crate::Error;
use crate::Writer;

use std::io::Write;

/// describes how to write a piece of the document
pub trait XdmfElement {
    /// Write this element, and everything it contains, to `writer`
    fn write_element<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error>;
}

impl<T: XdmfElement + ?Sized> XdmfElement for &T {
    fn write_element<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
        (**self).write_element(writer)
    }
}

impl<T: XdmfElement> XdmfElement for [T] {
    fn write_element<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
        for element in self {
            element.write_element(writer)?;
        }
        Ok(())
    }
}

impl<T: XdmfElement> XdmfElement for Vec<T> {
    fn write_element<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
        self.as_slice().write_element(writer)
    }
}
