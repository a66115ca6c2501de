//! # mdocspoofer
//!
//! mdocspoofer generates SerialEM-style `.mdoc` metadata sidecar files for
//! tilt-series electron-microscopy movie frames when the acquisition software's
//! real metadata is unavailable. It scans a directory for frame-stack movies
//! (files ending in `_fractions.mrc`), groups them into tilt series by the
//! acquisition name shared in their file names, and writes one sidecar file per
//! series into an `mdoc` output directory.
//!
//! ## Input naming convention
//!
//! Movie file names must carry the tilt-series position and stage tilt angle:
//!
//! ```text
//! <basename>_<3-digit index>[<tilt angle>]_fractions.mrc
//! ```
//!
//! e.g. `TS_01_003[-54.0]_fractions.mrc` is image 3 of series `TS_01`, taken at
//! a stage tilt of -54 degrees. The index is 1-based on disk and 0-based in the
//! generated `ZValue` entries. A file carrying the `_fractions.mrc` marker but
//! not the index/angle suffix aborts the run; files without the marker are
//! ignored entirely.
//!
//! ## Output
//!
//! One `<basename>.mrc.mdoc` file per tilt series, containing a fixed header
//! and one `[ZValue]` block per image in acquisition order. Only the index,
//! tilt angle, dose and source file name are real data; all other fields are
//! constants copied from a reference mdoc so that downstream tools accept the
//! file structurally. No field is derived from the clock, so repeated runs over
//! unchanged input produce byte-identical files.
//!
//! ## Configuration
//!
//! The CLI can run from flags/prompts or from a YAML configuration:
//!
//! ```yml
//! frames_path: /data/my_experiment/frames
//! dose_per_image: 2.5
//! mdoc_path: mdoc
//! ```
//!
//! `dose_per_image` is the electron dose per image in electrons per square
//! angstrom; it is stamped unmodified into every `ExposureDose` field.
pub mod config;
pub mod constants;
pub mod error;
pub mod mdoc;
pub mod mdoc_image;
pub mod process;
