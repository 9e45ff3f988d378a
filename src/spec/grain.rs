//! Paper grain texture configuration.

/// Completed grain parameters: a square gaussian noise field in the
/// 0-255 intensity domain, softened by a post blur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrainConfig {
    /// Texture edge length in pixels.
    pub size: u32,
    /// Mean intensity of the noise distribution.
    pub mean: f32,
    /// Standard deviation of the noise distribution.
    pub std: f32,
    /// Gaussian blur sigma applied after sampling.
    pub blur: f32,
}

impl Default for GrainConfig {
    fn default() -> Self {
        Self {
            size: 512,
            mean: 220.0,
            std: 25.0,
            blur: 0.7,
        }
    }
}
