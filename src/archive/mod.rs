//! Bundle assembly for the host drawing application.
//!
//! A `.brush` bundle is a deflated zip archive with a fixed internal
//! layout: binary-plist metadata plus three PNG rasters. The metadata
//! is an NSKeyedArchiver object graph the host decodes into its
//! `SilicaBrush` class.

mod bundle;
mod metadata;
pub mod plist;

pub use bundle::{
    BrushBundle, GRAIN_ENTRY, METADATA_ENTRY, SHAPE_ENTRY, THUMBNAIL_ENTRY,
};
pub use metadata::brush_archive;
