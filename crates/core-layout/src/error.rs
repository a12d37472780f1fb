use thiserror::Error;

/// Boundary errors raised while turning host values into layout inputs.
///
/// The calculation itself is total; these only surface when decoding a
/// tab position handed over as a raw code or a name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("unknown tab position code {0} (expected 0 = top, 1 = bottom, 2 = left)")]
    UnknownTabPosition(i32),
    #[error("unknown tab position name `{0}` (expected top, bottom or left)")]
    UnknownTabPositionName(String),
}
