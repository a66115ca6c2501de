//! Fixed values shared across the library.

/// File name suffix marking a frame-stack movie eligible for spoofing
pub const FRACTIONS_SUFFIX: &str = "_fractions.mrc";

/// Default output directory for generated sidecar files, relative to the
/// invocation's working directory
pub const MDOC_DIR: &str = "mdoc";

/// Extension appended to the tilt-series basename for output files
pub const MDOC_EXTENSION: &str = ".mrc.mdoc";

/// Placeholder frame-server path embedded in every SubFramePath field
pub const SUBFRAME_PREFIX: &str = r"X:\spoof\frames";
