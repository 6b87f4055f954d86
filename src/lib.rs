//! Minimal image viewer: opens an image, optionally saves a re-encoded copy, and shows it in
//! the viewer the host associates with images.
//!
//! Decoding and encoding are left to the [`image`] crate. The image is shown by writing a
//! temporary PNG file and launching an external viewer on it.
//!
//! # Examples
//!
//! Convert QOI to PNG and show the result:
//!
//! ```no_run
//! use img_view::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let handle = ImageHandle::open("foo.qoi")?;
//! handle.save("foo.png")?;
//!
//! ExternalViewer::default().show(&handle)?;
//! # Ok(())
//! # }
//! ```
//!
//! Run the whole command line:
//!
//! ```no_run
//! use img_view::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! match parse_args(["img-view", "foo.jpg", "foo.bmp"]) {
//!     Invocation::View(args) => view(&args, &mut ExternalViewer::default())?,
//!     _ => println!("{}", USAGE),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`image`]: https://docs.rs/image/

mod args;
mod display;
mod error;
mod handle;
mod view;

pub use self::args::*;
pub use self::display::*;
pub use self::error::*;
pub use self::handle::*;
pub use self::view::*;
