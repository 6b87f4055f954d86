use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};
use log::{debug, info};

use crate::error::{ViewError, ViewResult};

/// Decoded image owned by a single view run.
///
/// The only ways to get one are [`ImageHandle::open`] and converting an already decoded
/// [`DynamicImage`], so a handle always refers to a valid image.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageHandle {
    image: DynamicImage,
    format: Option<ImageFormat>,
}

impl ImageHandle {
    /// Decodes the image file at `path`.
    ///
    /// The format is guessed from the leading bytes of the file, and the extension is used only
    /// when the content is not recognized.
    ///
    /// # Errors
    ///
    /// * Returns [`ViewError::UnreadableImage`] if the file does not exist or cannot be read.
    /// * Returns [`ViewError::UnreadableImage`] if the format is unsupported or the data is corrupt.
    pub fn open<P>(path: P) -> ViewResult<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let reader = ImageReader::open(path)
            .and_then(|rdr| rdr.with_guessed_format())
            .map_err(|e| ViewError::new_unreadable(path, e))?;
        let format = reader.format();

        let image = reader
            .decode()
            .map_err(|e| ViewError::new_unreadable(path, e))?;

        debug!(
            "decoded {} as {:?}: {}x{} {:?}",
            path.display(),
            format,
            image.width(),
            image.height(),
            image.color()
        );

        Ok(Self { image, format })
    }

    /// Writes the image to `path`, re-encoding it to the format implied by the extension.
    ///
    /// # Errors
    ///
    /// * Returns [`ViewError::Write`] if the extension does not name a known format.
    /// * Returns [`ViewError::Write`] if the format cannot be encoded, or cannot hold the color
    ///   type of this image.
    /// * Returns [`ViewError::Write`] if filesystem/write operation fails.
    pub fn save<P>(&self, path: P) -> ViewResult<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let format = ImageFormat::from_path(path).map_err(|e| ViewError::new_write(path, e))?;
        if !format.writing_enabled() {
            return Err(ViewError::new_write(
                path,
                format!("encoding {:?} is not supported", format),
            ));
        }

        self.image
            .save_with_format(path, format)
            .map_err(|e| ViewError::new_write(path, e))?;

        info!("saved {} as {:?}", path.display(), format);

        Ok(())
    }

    /// Returns the width of this image in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Returns the height of this image in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns `(width, height)` of this image in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Returns the format the image was decoded from, if it came from a file.
    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    /// Returns the decoded image.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
}

impl From<DynamicImage> for ImageHandle {
    fn from(image: DynamicImage) -> Self {
        Self {
            image,
            format: None,
        }
    }
}
