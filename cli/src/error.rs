//! Errors reported by the command-line front end.

use displaydoc::Display;
use image::ColorType;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Display, Error)]
pub(crate) enum Error {
    /// cannot find folder '{0}': neither a directory nor a name under examples/
    FolderNotFound(String),
    /// {path}: {source}
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
    /// {path}: {source}
    Io { path: PathBuf, source: io::Error },
    /// {0}
    Sim(#[from] wormlife_lib::Error),
    /// {first} is {first_size:?} but {name} is {size:?}; the input images must agree in size
    SizeMismatch {
        first: &'static str,
        first_size: (u32, u32),
        name: &'static str,
        size: (u32, u32),
    },
    /// {first} is {first_color:?} but {name} is {color:?}; the input images must share a color mode
    ColorModeMismatch {
        first: &'static str,
        first_color: ColorType,
        name: &'static str,
        color: ColorType,
    },
}
