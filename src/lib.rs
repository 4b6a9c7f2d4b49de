//! alogorithm2 renders a procedurally generated logo mark and animates
//! transitions between its seeded variations.
//!
//! A mark is a field of colored triangles clipped by an organic blob outline.
//! Everything is derived from a seed string, so the same seed always yields the
//! same picture.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: `seed -> Pattern` (sorted triangles plus outline path)
//! 2. **Link**: `Pattern -> VertexGraph` (shared corners deduplicated, morph mode only)
//! 3. **Match**: greedy nearest-neighbor correspondence between two graphs
//! 4. **Drive**: `MorphState` progress advanced by the [`Animator`] or set manually
//! 5. **Compose**: `MorphState + eased progress -> Frame`
//! 6. **Paint**: `Frame -> SVG` through a [`RenderSurface`]
//!
//! The raw triangulation and outline generators sit behind the
//! [`TriangulationSource`] and [`BlobSource`] traits; the crate ships a
//! jittered-grid triangulator and a radial blob as defaults.
#![forbid(unsafe_code)]

mod animation;
mod color;
mod config;
mod foundation;
mod morph;
mod path;
mod pattern;
mod render;

pub use animation::ease::{Ease, ease_in_out_sine};
pub use color::hsl::{Hsl, interpolate_color, normalize_color};
pub use config::options::{AnimationOptions, MarkDefaults};
pub use foundation::core::{Affine, BezPath, Mode, Point, Rect, Triangle};
pub use foundation::error::{MarkError, MarkResult};
pub use foundation::math::interpolate_number;
pub use morph::animator::{Animator, ProgressDrive, RandomSeeds, SeedList, SeedSource};
pub use morph::compose::{Frame, RenderTriangle, compose_frame};
pub use morph::matcher::{
    CENTROID_MATCH_RATIO, Correspondence, VERTEX_MATCH_RATIO, match_nearest,
};
pub use morph::state::{MorphPhase, MorphState, advance_state};
pub use morph::vertex::{Vertex, VertexGraph, VertexRef, build_vertex_graph};
pub use path::interp::interpolate_path;
pub use path::scale::{fit_affine, parse_svg_path, scale_svg_path};
pub use pattern::blob::RadialBlob;
pub use pattern::generate::{BLOB_CANVAS, Pattern, PatternGenerator, generate_pattern};
pub use pattern::source::{
    BlobParams, BlobSource, RawPolygon, TriangulationParams, TriangulationSource,
};
pub use pattern::trianglify::JitterGridTriangulator;
pub use render::svg::{
    FRAME_CLIP_ID, MARK_CLIP_ID, RenderSurface, SvgSurface, paint_frame, render_frame_svg,
    render_mark_svg,
};
