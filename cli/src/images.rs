//! Reading and writing the PNG and GIF sidecar files.

use crate::error::Error;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, GrayImage, Luma, RgbImage};
use std::fs::File;
use std::path::{Path, PathBuf};
use wormlife_lib::{Board, ColorGrid};

pub(crate) const BOARD_IMAGE: &str = "starting_position.png";
pub(crate) const HORIZONTAL_IMAGE: &str = "horizontal_tunnel.png";
pub(crate) const VERTICAL_IMAGE: &str = "vertical_tunnel.png";
pub(crate) const GIF_IMAGE: &str = "all_output.gif";

/// Tunnel images mark "no tunnel here" with black.
pub(crate) const BACKGROUND: u32 = 0x000000;

/// Milliseconds per GIF frame.
const FRAME_DELAY_MS: u32 = 500;

fn open_rgb(path: &Path) -> Result<RgbImage, Error> {
    let img = image::open(path).map_err(|source| Error::Image {
        path: path.to_owned(),
        source,
    })?;
    Ok(img.to_rgb8())
}

/// Loads `starting_position.png`: exactly-white pixels are live cells.
pub(crate) fn load_board(folder: &Path) -> Result<Board, Error> {
    let img = open_rgb(&folder.join(BOARD_IMAGE))?;
    let (width, height) = img.dimensions();
    Ok(Board::from_fn(height as isize, width as isize, |(row, col)| {
        img.get_pixel(col as u32, row as u32).0 == [255, 255, 255]
    }))
}

/// Loads one tunnel image as a grid of packed `0x00RRGGBB` values.
pub(crate) fn load_tunnel_grid(folder: &Path, name: &str) -> Result<ColorGrid, Error> {
    let img = open_rgb(&folder.join(name))?;
    let (width, height) = img.dimensions();
    Ok(ColorGrid::from_fn(
        height as isize,
        width as isize,
        |(row, col)| {
            let [red, green, blue] = img.get_pixel(col as u32, row as u32).0;
            u32::from(red) << 16 | u32::from(green) << 8 | u32::from(blue)
        },
    ))
}

/// Saves a board as an 8-bit grayscale PNG: live is white, dead is black.
pub(crate) fn save_board(board: &Board, path: &Path) -> Result<(), Error> {
    let img = GrayImage::from_fn(board.width() as u32, board.height() as u32, |x, y| {
        if board.get((y as isize, x as isize)) == Some(true) {
            Luma([255])
        } else {
            Luma([0])
        }
    });
    img.save(path).map_err(|source| Error::Image {
        path: path.to_owned(),
        source,
    })
}

/// Assembles the milestone snapshots into an animated GIF, in milestone
/// order, looping forever.
pub(crate) fn write_gif(folder: &Path, milestones: &[u64]) -> Result<PathBuf, Error> {
    let path = folder.join(GIF_IMAGE);
    let file = File::create(&path).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    let image_error = |source| Error::Image {
        path: path.clone(),
        source,
    };
    let mut encoder = GifEncoder::new(file);
    encoder.set_repeat(Repeat::Infinite).map_err(image_error)?;
    for &generation in milestones {
        let frame_path = folder.join(format!("{generation}.png"));
        let frame = image::open(&frame_path)
            .map_err(|source| Error::Image {
                path: frame_path.clone(),
                source,
            })?
            .to_rgba8();
        let frame = Frame::from_parts(frame, 0, 0, Delay::from_numer_denom_ms(FRAME_DELAY_MS, 1));
        encoder.encode_frame(frame).map_err(image_error)?;
    }
    Ok(path)
}

/// Reports each required image's size and color mode, and checks that
/// the three agree in size and color mode.
pub(crate) fn check_folder(folder: &Path) -> Result<(), Error> {
    let mut reference: Option<(&str, (u32, u32), image::ColorType)> = None;
    for name in [BOARD_IMAGE, HORIZONTAL_IMAGE, VERTICAL_IMAGE] {
        let path = folder.join(name);
        let img = image::open(&path).map_err(|source| Error::Image {
            path: path.clone(),
            source,
        })?;
        let size = (img.width(), img.height());
        let color = img.color();
        println!("{name}: {}x{}, {color:?}", size.0, size.1);
        match reference {
            None => reference = Some((name, size, color)),
            Some((first, first_size, first_color)) => {
                if size != first_size {
                    return Err(Error::SizeMismatch {
                        first,
                        first_size,
                        name,
                        size,
                    });
                }
                if color != first_color {
                    return Err(Error::ColorModeMismatch {
                        first,
                        first_color,
                        name,
                        color,
                    });
                }
            }
        }
    }
    Ok(())
}
