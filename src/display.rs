use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use image::{DynamicImage, ImageFormat, ImageResult};
use log::{debug, info};

use crate::error::{ViewError, ViewResult};
use crate::handle::ImageHandle;

/// Presents a decoded image to the user.
pub trait Show {
    /// Hands `image` over for display. Returns as soon as the display has been requested.
    fn show(&mut self, image: &ImageHandle) -> ViewResult<()>;
}

/// Seconds the temporary file outlives the viewer command on Unix.
#[cfg(unix)]
const TEMP_FILE_GRACE_SECS: u32 = 20;

/// An external program able to open an image file, with its fixed leading arguments.
///
/// The image path is appended after `args`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ViewerCommand {
    program: &'static str,
    args: &'static [&'static str],
}

impl ViewerCommand {
    pub const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }

    /// Builds the command which opens `path` with this viewer.
    ///
    /// On Unix the viewer runs under `sh`, which removes `path` a while after the viewer
    /// command returns. `xdg-open` and friends return before the image has been read, hence the
    /// delay.
    #[cfg(unix)]
    pub fn command(&self, path: &Path) -> Command {
        let mut argv = vec![self.program];
        argv.extend_from_slice(self.args);

        let script = format!(
            "{} \"$1\"; sleep {}; rm -f \"$1\"",
            argv.join(" "),
            TEMP_FILE_GRACE_SECS
        );

        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(script).arg("img-view").arg(path);
        cmd
    }

    /// Builds the command which opens `path` with this viewer.
    #[cfg(not(unix))]
    pub fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(self.program);
        cmd.args(self.args).arg(path);
        cmd
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
const PLATFORM_VIEWERS: &[ViewerCommand] = &[
    ViewerCommand::new("xdg-open", &[]),
    ViewerCommand::new("display", &[]),
    ViewerCommand::new("gm", &["display"]),
    ViewerCommand::new("eog", &["-n"]),
    ViewerCommand::new("xv", &[]),
];

#[cfg(target_os = "macos")]
const PLATFORM_VIEWERS: &[ViewerCommand] = &[ViewerCommand::new("open", &["-a", "Preview.app"])];

#[cfg(windows)]
const PLATFORM_VIEWERS: &[ViewerCommand] = &[ViewerCommand::new("cmd", &["/c", "start", ""])];

#[cfg(not(any(unix, windows)))]
const PLATFORM_VIEWERS: &[ViewerCommand] = &[];

/// Shows images with whatever viewer the host associates with them.
///
/// The image is written to a temporary PNG file, and the first candidate viewer found on `PATH`
/// is launched on it. The viewer process is never waited on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExternalViewer {
    candidates: Vec<ViewerCommand>,
}

impl ExternalViewer {
    /// Uses `candidates` in order of preference instead of the platform defaults.
    pub fn with_candidates(candidates: Vec<ViewerCommand>) -> Self {
        Self { candidates }
    }

    /// Returns the first candidate whose program can be found on `PATH`.
    ///
    /// # Errors
    ///
    /// * Returns [`ViewError::Display`] if no candidate is installed.
    pub fn locate(&self) -> ViewResult<ViewerCommand> {
        for viewer in &self.candidates {
            match which::which(viewer.program) {
                Ok(found) => {
                    debug!("using viewer {}", found.display());
                    return Ok(*viewer);
                }
                Err(e) => debug!("viewer {} unavailable: {}", viewer.program, e),
            }
        }

        Err(ViewError::new_display("no image viewer found"))
    }
}

impl Default for ExternalViewer {
    fn default() -> Self {
        Self::with_candidates(PLATFORM_VIEWERS.to_vec())
    }
}

impl Show for ExternalViewer {
    fn show(&mut self, image: &ImageHandle) -> ViewResult<()> {
        let viewer = self.locate()?;
        let path = write_temp_png(image.image())?;

        let mut cmd = viewer.command(&path);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = cmd.spawn().map_err(|e| {
            let _ = fs::remove_file(&path);
            ViewError::new_display(format!("cannot launch {}: {}", viewer.program, e))
        })?;

        info!(
            "showing {} with {} (pid {})",
            path.display(),
            viewer.program,
            child.id()
        );

        Ok(())
    }
}

/// Writes `image` as PNG to a new temporary file which is kept after this process exits.
/// Returns the path of the file.
///
/// Float images are converted to RGBA8 first since PNG cannot hold them.
///
/// # Errors
///
/// * Returns [`ViewError::Display`] if the file cannot be created or written. The file is
///   removed in that case.
pub fn write_temp_png(image: &DynamicImage) -> ViewResult<PathBuf> {
    let (file, path) = tempfile::Builder::new()
        .prefix("img-view-")
        .suffix(".png")
        .tempfile()
        .and_then(|tmp| tmp.keep().map_err(|e| e.error))
        .map_err(|e| ViewError::new_display(format!("cannot create temporary file: {}", e)))?;

    let converted;
    let image = match image {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            converted = DynamicImage::ImageRgba8(image.to_rgba8());
            &converted
        }
        _ => image,
    };

    if let Err(e) = write_png(file, image) {
        let _ = fs::remove_file(&path);
        return Err(ViewError::new_display(format!(
            "cannot write {}: {}",
            path.display(),
            e
        )));
    }

    debug!("wrote {}", path.display());

    Ok(path)
}

fn write_png(file: File, image: &DynamicImage) -> ImageResult<()> {
    let mut wtr = BufWriter::new(file);

    image.write_to(&mut wtr, ImageFormat::Png)?;

    wtr.flush()?;

    Ok(())
}
