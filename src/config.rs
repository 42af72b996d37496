/// Options that control how a document is serialized.
///
/// The defaults produce the canonical layout: an XML declaration, elements
/// indented by four spaces, and `<Xdmf Version="3.0">` as the root.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteOptions {
    /// character used for indentation
    pub indent_char: u8,
    /// indentation per nesting level, `0` writes the whole document on one line
    pub indent_size: usize,
    /// value of the `Version` attribute of the root element
    pub version: String,
    /// emit `<?xml version="1.0"?>` before the root element
    pub declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent_char: b' ',
            indent_size: 4,
            version: "3.0".into(),
            declaration: true,
        }
    }
}

impl WriteOptions {
    pub fn indent(mut self, indent_char: u8, indent_size: usize) -> Self {
        self.indent_char = indent_char;
        self.indent_size = indent_size;
        self
    }

    pub fn version<T: Into<String>>(mut self, version: T) -> Self {
        self.version = version.into();
        self
    }

    pub fn declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }
}
