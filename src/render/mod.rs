/// Polygon surface trait and the SVG writer.
pub mod svg;
