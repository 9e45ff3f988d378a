//! Stroke-preview thumbnail configuration.

/// Completed preview parameters.
///
/// The preview repeats the rendered tip along a fixed diagonal arc;
/// these fields control the tint, per-stamp opacity, and stamp count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailConfig {
    /// RGB tint applied to each stamp.
    pub stroke_color: [u8; 3],
    /// Peak alpha of a single stamp.
    pub stamp_alpha: u8,
    /// Number of stamps along the preview path. Zero renders the
    /// background only.
    pub n_stamps: u32,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            stroke_color: [58, 58, 58],
            stamp_alpha: 200,
            n_stamps: 12,
        }
    }
}
