//! Correspondence and interpolation between two patterns.
//!
//! Data flows one way: [`vertex`] graphs feed the [`matcher`], the result is
//! held in a [`state::MorphState`], advanced by the [`animator`] and turned
//! into frames by [`compose`].

pub mod animator;
pub mod compose;
pub mod matcher;
pub mod state;
pub mod vertex;
