use crate::config::WriteOptions;
use crate::dataset::DataItem;
use crate::Error;
use crate::Writer;
use crate::XdmfElement;

use std::io::Write;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// Write a complete XDMF document to a `Writer` using the default options.
///
/// The content is wrapped in the `<Xdmf>` and `<Domain>` envelope.
pub fn write_xdmf<W, E>(writer: W, content: &E) -> Result<(), Error>
where
    W: Write,
    E: XdmfElement + ?Sized,
{
    write_xdmf_with(writer, content, &WriteOptions::default())
}

/// Write a complete XDMF document to a `Writer`
pub fn write_xdmf_with<W, E>(writer: W, content: &E, options: &WriteOptions) -> Result<(), Error>
where
    W: Write,
    E: XdmfElement + ?Sized,
{
    let mut writer = if options.indent_size == 0 {
        Writer::new(writer)
    } else {
        Writer::new_with_indent(writer, options.indent_char, options.indent_size)
    };

    if options.declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
    }

    write_start_element(&mut writer, "Xdmf", &[("Version", options.version.as_str())])?;
    write_start_element(&mut writer, "Domain", &[])?;

    content.write_element(&mut writer)?;

    write_end_element(&mut writer, "Domain")?;
    write_end_element(&mut writer, "Xdmf")?;

    Ok(())
}

/// Serialize a complete XDMF document to a string
pub fn to_string<E: XdmfElement + ?Sized>(content: &E) -> Result<String, Error> {
    let mut output = Vec::new();
    write_xdmf(&mut output, content)?;
    let text = String::from_utf8(output)?;

    tracing::debug!(bytes = text.len(), "assembled xdmf document");

    Ok(text)
}

/// Serialize a complete XDMF document, additionally writing it to `path`
/// if one is given. The text of the document is returned either way.
pub fn write<E: XdmfElement + ?Sized>(content: &E, path: Option<&Path>) -> Result<String, Error> {
    let text = to_string(content)?;

    if let Some(path) = path {
        std::fs::write(path, &text)?;
        tracing::debug!(path = %path.display(), "wrote xdmf document");
    }

    Ok(text)
}

/// open an element with the given attributes
pub fn write_start_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
) -> Result<(), Error> {
    let start = BytesStart::new(name).with_attributes(attributes.iter().copied());
    writer.write_event(Event::Start(start))?;
    Ok(())
}

/// close an element opened with `write_start_element`
pub fn write_end_element<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), Error> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// write a self-closing element (`<Time Value="0"/>`)
pub fn write_empty_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
) -> Result<(), Error> {
    let empty = BytesStart::new(name).with_attributes(attributes.iter().copied());
    writer.write_event(Event::Empty(empty))?;
    Ok(())
}

/// Write the reference to a dataset. The text content stays on the same line
/// as the tags:
///
/// `<DataItem Dimensions="6 2" Format="HDF"> tmp.h5:/coor </DataItem>`
pub fn write_data_item<W: Write>(writer: &mut Writer<W>, item: &DataItem) -> Result<(), Error> {
    let dimensions = item.dimensions.to_string();
    write_start_element(
        writer,
        "DataItem",
        &[("Dimensions", dimensions.as_str()), ("Format", "HDF")],
    )?;

    let location = format!(" {} ", item.location());
    writer.write_event(Event::Text(BytesText::new(&location)))?;

    write_end_element(writer, "DataItem")
}
