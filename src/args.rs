use std::ffi::OsString;
use std::path::PathBuf;

use structopt::StructOpt;

/// Message printed when the command line does not hold one or two paths.
pub const USAGE: &str = "Usage: img-view <file_path> <save_path>(optional)";

/// Positional arguments of a view run.
#[derive(Clone, Debug, Eq, PartialEq, StructOpt)]
#[structopt(
    name = "img-view",
    about = "Opens an image, optionally saves it in another format, and shows it. Example: img-view foo.qoi foo.png"
)]
pub struct ViewArgs {
    /// Image to open. The format is detected from the content.
    #[structopt(parse(from_os_str))]
    pub input: PathBuf,

    /// Where to save a copy. The extension selects the output format.
    #[structopt(parse(from_os_str))]
    pub output: Option<PathBuf>,
}

/// What the command line asks for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Invocation {
    /// Open (and maybe save) an image, then show it.
    View(ViewArgs),

    /// Wrong argument count. [`USAGE`] should be printed.
    Usage,
}

/// Parses a full command line (including the program name) into an [`Invocation`].
///
/// Only the argument count matters: every argument after the program name is a path, even one
/// starting with `-`. Never fails: anything that is not one or two paths turns into
/// [`Invocation::Usage`].
pub fn parse_args<I>(args: I) -> Invocation
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);

    // `--` stops clap from reading flags, so `-foo.png` and `--help` stay positional.
    let mut argv: Vec<OsString> = args.next().into_iter().collect();
    argv.push("--".into());
    argv.extend(args);

    match ViewArgs::from_iter_safe(argv) {
        Ok(args) => Invocation::View(args),
        Err(_) => Invocation::Usage,
    }
}
