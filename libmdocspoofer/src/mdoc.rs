use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::constants::MDOC_EXTENSION;
use super::error::MdocError;
use super::mdoc_image::MdocImage;

/// Mdoc is one complete sidecar file: every image of a single tilt series,
/// identified by the basename the images share.
#[derive(Debug)]
pub struct Mdoc {
    basename: String,
    images: Vec<MdocImage>,
}

impl Mdoc {
    /// Create an Mdoc from the images of one tilt series.
    /// All images must share a basename; an empty set is an error.
    pub fn new(images: Vec<MdocImage>) -> Result<Self, MdocError> {
        let basename = match images.first() {
            Some(image) => image.basename.clone(),
            None => return Err(MdocError::NoImages),
        };
        Ok(Self { basename, images })
    }

    /// Partition a run's images into one Mdoc per distinct basename.
    ///
    /// Every image lands in exactly one group; groups come out in the order
    /// their basename was first seen.
    pub fn partition(images: Vec<MdocImage>) -> Vec<Mdoc> {
        let mut mdocs: Vec<Mdoc> = Vec::new();
        for image in images {
            match mdocs.iter_mut().find(|mdoc| mdoc.basename == image.basename) {
                Some(mdoc) => mdoc.images.push(image),
                None => mdocs.push(Mdoc {
                    basename: image.basename.clone(),
                    images: vec![image],
                }),
            }
        }
        mdocs
    }

    pub fn basename(&self) -> &str {
        &self.basename
    }

    pub fn n_images(&self) -> usize {
        self.images.len()
    }

    /// Members in ascending acquisition order. The sort is stable, so images
    /// sharing an index keep their discovery order.
    pub fn ordered_images(&self) -> Vec<&MdocImage> {
        let mut ordered: Vec<&MdocImage> = self.images.iter().collect();
        ordered.sort_by_key(|image| image.image_idx);
        ordered
    }

    /// The fixed header block. Only the ImageFile field depends on the group;
    /// the remaining values come verbatim from the reference template so the
    /// file validates structurally. Nothing reads the clock.
    fn header(&self) -> Vec<String> {
        vec![
            String::from("PixelSpacing = 1.000"),
            String::from("Voltage = 300"),
            format!("ImageFile = {}.mrc", self.basename),
            String::from("ImageSize = 5760 4092"),
            String::from("DataMode = 1"),
            String::new(),
            String::from(
                "[T = SpoofedSerialEM: mdocspoofer                               15-July-20  16:44:02    ]",
            ),
            String::new(),
            String::from(
                "[T =     Tilt axis angle = 85.9, binning = 1  spot = 8  camera = 0]",
            ),
            String::new(),
        ]
    }

    /// Render the complete file: header, then one record block per image in
    /// acquisition order, each block terminated by a blank line.
    pub fn render(&self) -> String {
        let mut lines = self.header();
        for image in self.ordered_images() {
            lines.extend(image.record_block());
            lines.push(String::new());
        }
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Write the rendered file to `<mdoc_dir>/<basename>.mrc.mdoc`.
    ///
    /// Creates or overwrites in place; a failure partway leaves whatever the
    /// stream wrote. Returns the path written.
    pub fn write(&self, mdoc_dir: &Path) -> Result<PathBuf, MdocError> {
        let path = mdoc_dir.join(format!("{}{}", self.basename, MDOC_EXTENSION));
        let mut writer = BufWriter::new(File::create(&path)?);
        writer.write_all(self.render().as_bytes())?;
        writer.flush()?;
        Ok(path)
    }
}
