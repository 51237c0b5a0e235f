//! Error types shared by the geometry, drawing and rendering layers.

use core::fmt;

/// Which end of a [`BezierPath`](crate::geometry::BezierPath) a
/// degenerate segment was found at.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SegmentEnd {
    /// The anchor at index 0 coincides with the control point at index 1.
    Start,
    /// The anchor at index 3 coincides with the control point at index 2.
    End,
}

#[derive(Debug)]
pub enum Error {
    /// An anchor coincides with its adjacent control point, so the
    /// tangent direction used for truncation is undefined.
    DegenerateSegment(SegmentEnd),
    /// A layout did not produce a position for the node with this index.
    MissingPosition(usize),
    /// The scene has no area to rasterize.
    EmptyScene,
    /// A configuration file could not be parsed.
    Config(String),
    Io(std::io::Error),
    Png(png::EncodingError),
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateSegment(SegmentEnd::Start) => {
                write!(f, "degenerate segment: start anchor equals its control point")
            }
            Error::DegenerateSegment(SegmentEnd::End) => {
                write!(f, "degenerate segment: end anchor equals its control point")
            }
            Error::MissingPosition(node) => write!(f, "no layout position for node {}", node),
            Error::EmptyScene => write!(f, "scene bounds have no area"),
            Error::Config(msg) => write!(f, "invalid configuration: {}", msg),
            Error::Io(e) => write!(f, "i/o error: {}", e),
            Error::Png(e) => write!(f, "png encoding error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Png(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<png::EncodingError> for Error {
    fn from(e: png::EncodingError) -> Self {
        Error::Png(e)
    }
}

impl From<ron::error::SpannedError> for Error {
    fn from(e: ron::error::SpannedError) -> Self {
        Error::Config(e.to_string())
    }
}
