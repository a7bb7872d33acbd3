//! Turning color-coded tunnel grids into mouth pairings.

use crate::cells::{Axis, Coord};
use crate::error::Error;
use std::collections::{BTreeMap, HashMap};

/// An H×W grid of packed `0x00RRGGBB` pixel values.
///
/// This is the decoded form of one tunnel image; producing it from an
/// actual image file is the front end's job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorGrid {
    height: isize,
    width: isize,
    pixels: Box<[u32]>,
}

impl ColorGrid {
    /// Wraps a row-major pixel buffer.
    ///
    /// # Panics
    ///
    /// Panics if a dimension is negative or the buffer length is not
    /// `height * width`.
    pub fn new(height: isize, width: isize, pixels: Vec<u32>) -> Self {
        assert!(
            height >= 0 && width >= 0,
            "grid dimensions must be non-negative"
        );
        assert_eq!(
            pixels.len(),
            (height * width) as usize,
            "pixel buffer length must match the grid dimensions"
        );
        Self {
            height,
            width,
            pixels: pixels.into_boxed_slice(),
        }
    }

    /// Creates a grid by evaluating `f` at every coordinate, row by row.
    pub fn from_fn<F>(height: isize, width: isize, mut f: F) -> Self
    where
        F: FnMut(Coord) -> u32,
    {
        assert!(
            height >= 0 && width >= 0,
            "grid dimensions must be non-negative"
        );
        let mut pixels = Vec::with_capacity((height * width) as usize);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f((row, col)));
            }
        }
        Self {
            height,
            width,
            pixels: pixels.into_boxed_slice(),
        }
    }

    /// `(height, width)`.
    #[inline]
    pub fn dimensions(&self) -> (isize, isize) {
        (self.height, self.width)
    }

    /// The pixel at a coordinate, or `None` outside the grid.
    #[inline]
    pub fn get(&self, (row, col): Coord) -> Option<u32> {
        (0 <= row && row < self.height && 0 <= col && col < self.width)
            .then(|| self.pixels[(row * self.width + col) as usize])
    }
}

/// Bidirectional per-axis pairing of tunnel mouths.
///
/// Built once from the two tunnel grids (or directly from link lists)
/// and frozen for the life of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TunnelMap {
    height: isize,
    width: isize,
    horizontal: HashMap<Coord, Coord>,
    vertical: HashMap<Coord, Coord>,
}

impl TunnelMap {
    /// Builds the pairings from the two tunnel grids.
    ///
    /// Pixels equal to `background` carry no tunnel meaning. Every other
    /// color must mark exactly two cells, which become the mouths of one
    /// tunnel on that grid's axis.
    pub fn from_grids(
        height: isize,
        width: isize,
        horizontal: &ColorGrid,
        vertical: &ColorGrid,
        background: u32,
    ) -> Result<Self, Error> {
        Ok(Self {
            height,
            width,
            horizontal: pair_mouths(height, width, horizontal, background, Axis::Horizontal)?,
            vertical: pair_mouths(height, width, vertical, background, Axis::Vertical)?,
        })
    }

    /// Builds the pairings directly from per-axis link lists.
    ///
    /// Checks the same contract as [`from_grids`](Self::from_grids):
    /// every mouth must lie on the board and belong to at most one link
    /// per axis.
    pub fn from_links(
        height: isize,
        width: isize,
        horizontal: &[(Coord, Coord)],
        vertical: &[(Coord, Coord)],
    ) -> Result<Self, Error> {
        Ok(Self {
            height,
            width,
            horizontal: link_map(height, width, horizontal, Axis::Horizontal)?,
            vertical: link_map(height, width, vertical, Axis::Vertical)?,
        })
    }

    /// The board dimensions the map was built for, `(height, width)`.
    #[inline]
    pub fn dimensions(&self) -> (isize, isize) {
        (self.height, self.width)
    }

    /// The paired mouth of `coord` on the given axis, if `coord` is a
    /// tunnel mouth there.
    pub fn partner(&self, axis: Axis, coord: Coord) -> Option<Coord> {
        self.map(axis).get(&coord).copied()
    }

    /// Iterates over the links on one axis, yielding each unordered
    /// mouth pair exactly once.
    pub fn links(&self, axis: Axis) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.map(axis)
            .iter()
            .filter(|(a, b)| a < b)
            .map(|(&a, &b)| (a, b))
    }

    fn map(&self, axis: Axis) -> &HashMap<Coord, Coord> {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }
}

/// Groups the non-background pixels of one grid by color and pairs each
/// two-member group into a link.
fn pair_mouths(
    height: isize,
    width: isize,
    grid: &ColorGrid,
    background: u32,
    axis: Axis,
) -> Result<HashMap<Coord, Coord>, Error> {
    if grid.dimensions() != (height, width) {
        return Err(Error::DimensionMismatch {
            expected: (height, width),
            found: grid.dimensions(),
        });
    }

    // BTreeMap so that a malformed group is reported deterministically.
    let mut groups: BTreeMap<u32, Vec<Coord>> = BTreeMap::new();
    for row in 0..height {
        for col in 0..width {
            let color = grid.get((row, col)).unwrap();
            if color != background {
                groups.entry(color).or_default().push((row, col));
            }
        }
    }

    let mut pairs = HashMap::with_capacity(groups.len() * 2);
    for (color, coords) in groups {
        if let [a, b] = coords[..] {
            insert_link(&mut pairs, axis, a, b)?;
        } else {
            return Err(Error::MalformedTunnel { axis, color, coords });
        }
    }
    Ok(pairs)
}

fn link_map(
    height: isize,
    width: isize,
    links: &[(Coord, Coord)],
    axis: Axis,
) -> Result<HashMap<Coord, Coord>, Error> {
    let mut pairs = HashMap::with_capacity(links.len() * 2);
    for &(a, b) in links {
        for mouth in [a, b] {
            let (row, col) = mouth;
            if !(0 <= row && row < height && 0 <= col && col < width) {
                return Err(Error::MouthOutOfBounds {
                    axis,
                    mouth,
                    board: (height, width),
                });
            }
        }
        insert_link(&mut pairs, axis, a, b)?;
    }
    Ok(pairs)
}

fn insert_link(
    pairs: &mut HashMap<Coord, Coord>,
    axis: Axis,
    a: Coord,
    b: Coord,
) -> Result<(), Error> {
    if a == b {
        return Err(Error::DuplicateMouth { axis, coord: a });
    }
    for mouth in [a, b] {
        if pairs.contains_key(&mouth) {
            return Err(Error::DuplicateMouth { axis, coord: mouth });
        }
    }
    pairs.insert(a, b);
    pairs.insert(b, a);
    Ok(())
}
