use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use super::constants::SUBFRAME_PREFIX;
use super::error::MdocImageError;

/// Pattern for eligible frame-stack names: `<basename>_<3-digit index>[<tilt angle>]...`
/// The basename match is non-greedy, so the first `_###[...]` site in the name wins.
static FRAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)_([0-9]{3})\[([^\]]*)\]").expect("frame pattern is valid"));

/// MdocImage holds the metadata for a single movie of the tilt series.
///
/// All fields are derived once from the file name at construction and frozen;
/// a name that does not carry the index/angle suffix fails construction.
#[derive(Debug, Clone)]
pub struct MdocImage {
    pub source_path: PathBuf,
    pub file_name: String,
    pub basename: String,
    pub image_idx: usize,
    pub tilt_angle: f64,
    pub dose: f64,
}

impl MdocImage {
    /// Parse one movie file name into an MdocImage. The dose is not derivable
    /// from the acquisition and is injected, shared by every image of a run.
    pub fn new(path: &Path, dose: f64) -> Result<Self, MdocImageError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                MdocImageError::MalformedFilename(path.to_string_lossy().into_owned())
            })?
            .to_string();

        let captures = FRAME_PATTERN
            .captures(&file_name)
            .ok_or_else(|| MdocImageError::MalformedFilename(file_name.clone()))?;

        let basename = captures[1].to_string();
        // The on-disk index is 1-based acquisition order; store it 0-based.
        // An index of 000 cannot be a 1-based position and is rejected.
        let image_idx = captures[2]
            .parse::<usize>()
            .ok()
            .and_then(|idx| idx.checked_sub(1))
            .ok_or_else(|| MdocImageError::MalformedFilename(file_name.clone()))?;
        let tilt_angle = captures[3]
            .parse::<f64>()
            .map_err(|_| MdocImageError::BadTiltAngle(file_name.clone()))?;

        Ok(Self {
            source_path: path.to_path_buf(),
            file_name,
            basename,
            image_idx,
            tilt_angle,
            dose,
        })
    }

    /// Render the `[ZValue]` record block for this image.
    ///
    /// Only the index, tilt angle, dose and file name are real data; every
    /// other field is a constant copied from a reference SerialEM mdoc so that
    /// downstream tools accept the file structurally.
    pub fn record_block(&self) -> Vec<String> {
        vec![
            format!("[ZValue = {}]", self.image_idx),
            format!("TiltAngle = {}", format_float(self.tilt_angle)),
            String::from("StagePosition = 302.007 -82.443"),
            String::from("StageZ = -28.1985"),
            String::from("Magnification = 64000"),
            String::from("Intensity = 0.111751"),
            format!("ExposureDose = {}", format_float(self.dose)),
            String::from("PixelSpacing = 1.000"),
            String::from("SpotSize = 8"),
            String::from("Defocus = 1.40864"),
            String::from("ImageShift = -0.124064 -0.00516909"),
            String::from("RotationAngle = 175.95"),
            String::from("ExposureTime = 3"),
            String::from("Binning = 1"),
            String::from("CameraIndex = 0"),
            String::from("DividedBy2 = 1"),
            String::from("MagIndex = 29"),
            String::from("CountsPerElectron = 16.82"),
            String::from("MinMaxMean = -1041 4987 86.6576"),
            String::from("TargetDefocus = -2"),
            format!("SubFramePath = {}\\{}", SUBFRAME_PREFIX, self.file_name),
            String::from("NumSubFrames = 15"),
            String::from("FrameDosesAndNumber = 0 15"),
            String::from("DateTime = 24-Sep-18  16:47:20"),
            String::from("NavigatorLabel = 37"),
        ]
    }
}

/// Format a float the way SerialEM prints them: whole values keep one decimal
/// place (`-10.0`), everything else uses the shortest decimal form (`12.5`).
pub(crate) fn format_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
