use log::info;

use crate::args::ViewArgs;
use crate::display::Show;
use crate::error::ViewResult;
use crate::handle::ImageHandle;

/// Opens `args.input`, saves it to `args.output` if one was given, and hands it to `display`.
///
/// The steps always run in this order, and the first failure ends the run. So nothing is saved
/// or shown when the input cannot be opened, and nothing is shown when saving fails.
///
/// # Errors
///
/// * Returns [`ViewError::UnreadableImage`] if the input cannot be opened.
/// * Returns [`ViewError::Write`] if saving fails.
/// * Returns whatever `display` returns.
///
/// [`ViewError::UnreadableImage`]: crate::ViewError::UnreadableImage
/// [`ViewError::Write`]: crate::ViewError::Write
pub fn view<S>(args: &ViewArgs, display: &mut S) -> ViewResult<()>
where
    S: Show + ?Sized,
{
    let handle = ImageHandle::open(&args.input)?;
    info!(
        "opened {} ({}x{})",
        args.input.display(),
        handle.width(),
        handle.height()
    );

    if let Some(output) = &args.output {
        handle.save(output)?;
    }

    display.show(&handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::path::{Path, PathBuf};

    use image::{Rgb, RgbImage};

    use crate::error::ViewError;

    #[derive(Debug, Default)]
    struct Recorder {
        shown: Vec<(u32, u32)>,
    }

    impl Show for Recorder {
        fn show(&mut self, image: &ImageHandle) -> ViewResult<()> {
            self.shown.push(image.dimensions());
            Ok(())
        }
    }

    struct Broken;

    impl Show for Broken {
        fn show(&mut self, _image: &ImageHandle) -> ViewResult<()> {
            Err(ViewError::Display("no image viewer found".to_owned()))
        }
    }

    fn write_2x2(dir: &Path) -> PathBuf {
        let path = dir.join("in.png");
        let img = RgbImage::from_fn(2, 2, |x, y| Rgb([x as u8 * 255, y as u8 * 255, 0]));
        img.save(&path).unwrap();
        path
    }

    fn file_count(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_view_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_2x2(dir.path());

        let mut recorder = Recorder::default();
        view(
            &ViewArgs {
                input,
                output: None,
            },
            &mut recorder,
        )
        .unwrap();

        assert_eq!(recorder.shown, [(2, 2)]);
        assert_eq!(file_count(dir.path()), 1);
    }

    #[test]
    fn test_view_with_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_2x2(dir.path());
        let output = dir.path().join("out.bmp");

        let mut recorder = Recorder::default();
        view(
            &ViewArgs {
                input: input.clone(),
                output: Some(output.clone()),
            },
            &mut recorder,
        )
        .unwrap();

        assert_eq!(recorder.shown, [(2, 2)]);

        let original = ImageHandle::open(&input).unwrap();
        let saved = ImageHandle::open(&output).unwrap();
        assert_eq!(saved.dimensions(), (2, 2));
        assert_eq!(saved.image().to_rgb8(), original.image().to_rgb8());
    }

    #[test]
    fn test_view_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.png");

        let mut recorder = Recorder::default();
        let res = view(
            &ViewArgs {
                input: dir.path().join("missing.png"),
                output: Some(output.clone()),
            },
            &mut recorder,
        );

        assert!(matches!(res, Err(ViewError::UnreadableImage { .. })));
        assert!(recorder.shown.is_empty());
        assert!(!output.exists());
    }

    #[test]
    fn test_view_save_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_2x2(dir.path());

        let mut recorder = Recorder::default();
        let res = view(
            &ViewArgs {
                input,
                output: Some(dir.path().join("out.unknown")),
            },
            &mut recorder,
        );

        assert!(matches!(res, Err(ViewError::Write { .. })));
        assert!(recorder.shown.is_empty());
    }

    #[test]
    fn test_view_display_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_2x2(dir.path());
        let output = dir.path().join("out.png");

        let res = view(
            &ViewArgs {
                input,
                output: Some(output.clone()),
            },
            &mut Broken,
        );

        assert!(matches!(res, Err(ViewError::Display(_))));
        // saving happens before showing.
        assert!(output.exists());
    }
}
