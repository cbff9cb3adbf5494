mod svg_document;

pub use svg_document::SvgDocument;
