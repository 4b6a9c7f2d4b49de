use std::fmt::Write as _;

use crate::{
    foundation::{
        core::{Point, Rect, check_size},
        error::MarkResult,
    },
    morph::compose::Frame,
    pattern::{
        generate::PatternGenerator,
        source::{BlobSource, TriangulationSource},
    },
};

/// Clip id used by animated frames.
pub const FRAME_CLIP_ID: &str = "alogorithm2-clip";
/// Clip id used by static marks.
pub const MARK_CLIP_ID: &str = "clip";

/// Sink for one clipped polygon picture.
///
/// Calls arrive in order: `begin`, at most one `clip_path`, any number of
/// `polygon`s, then `finish`.
pub trait RenderSurface {
    fn begin(&mut self, width: u32, height: u32, view_box: Rect);
    /// Clip every later polygon to the SVG path `d`.
    fn clip_path(&mut self, d: &str);
    fn polygon(&mut self, points: &[Point], fill: &str, opacity: f64);
    /// Close the picture and hand back its serialized form.
    fn finish(&mut self) -> String;
}

/// Writes a standalone SVG document.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    clip_id: String,
    buf: String,
    group_open: bool,
}

impl SvgSurface {
    pub fn new(clip_id: impl Into<String>) -> Self {
        Self {
            clip_id: clip_id.into(),
            buf: String::new(),
            group_open: false,
        }
    }
}

impl RenderSurface for SvgSurface {
    fn begin(&mut self, width: u32, height: u32, view_box: Rect) {
        self.buf.clear();
        self.group_open = false;
        let _ = write!(
            self.buf,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="{} {} {} {}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height()
        );
    }

    fn clip_path(&mut self, d: &str) {
        let id = escape_attr(&self.clip_id);
        let _ = write!(
            self.buf,
            r#"<defs><clipPath id="{id}"><path d="{}"/></clipPath></defs><g clip-path="url(#{id})">"#,
            escape_attr(d)
        );
        self.group_open = true;
    }

    fn polygon(&mut self, points: &[Point], fill: &str, opacity: f64) {
        self.buf.push_str(r#"<polygon points=""#);
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                self.buf.push(' ');
            }
            let _ = write!(self.buf, "{},{}", p.x, p.y);
        }
        let _ = write!(self.buf, r#"" fill="{}""#, escape_attr(fill));
        let opacity = if opacity.is_nan() { 0.0 } else { opacity.clamp(0.0, 1.0) };
        if opacity < 1.0 {
            let _ = write!(self.buf, r#" opacity="{opacity}""#);
        }
        self.buf.push_str("/>");
    }

    fn finish(&mut self) -> String {
        if std::mem::take(&mut self.group_open) {
            self.buf.push_str("</g>");
        }
        self.buf.push_str("</svg>");
        std::mem::take(&mut self.buf)
    }
}

fn escape_attr(s: &str) -> std::borrow::Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"']) {
        return s.into();
    }
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out.into()
}

/// Paint a composed frame on a `size` x `size` canvas.
pub fn paint_frame<R: RenderSurface + ?Sized>(
    surface: &mut R,
    frame: &Frame,
    size: f64,
) -> MarkResult<String> {
    let size = check_size(size)?;
    let px = size.ceil() as u32;
    surface.begin(px, px, Rect::new(0.0, 0.0, size, size));
    surface.clip_path(&frame.outline_path);
    for tri in &frame.triangles {
        surface.polygon(&tri.points, &tri.color, tri.opacity);
    }
    Ok(surface.finish())
}

/// SVG document for one animation frame.
pub fn render_frame_svg(frame: &Frame, size: f64) -> MarkResult<String> {
    paint_frame(&mut SvgSurface::new(FRAME_CLIP_ID), frame, size)
}

/// Static mark for `seed`: the unsorted triangulation of a `width` x `height`
/// canvas clipped by the outline. Document dimensions are rounded up to whole
/// pixels.
#[tracing::instrument(skip(generator))]
pub fn render_mark_svg<T, B>(
    generator: &PatternGenerator<T, B>,
    seed: &str,
    width: f64,
    height: f64,
) -> MarkResult<String>
where
    T: TriangulationSource,
    B: BlobSource,
{
    let triangles = generator.triangulate(seed, width, height)?;
    let outline = generator.generate_outline(seed, width, height)?;

    let (w, h) = (width.ceil() as u32, height.ceil() as u32);
    let mut surface = SvgSurface::new(MARK_CLIP_ID);
    surface.begin(w, h, Rect::new(0.0, 0.0, f64::from(w), f64::from(h)));
    surface.clip_path(&outline);
    for tri in &triangles {
        surface.polygon(&tri.points, &tri.color, 1.0);
    }
    Ok(surface.finish())
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
