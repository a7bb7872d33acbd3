//! Loading a folder, running the simulation, and writing snapshots.

use crate::args::Args;
use crate::error::Error;
use crate::images;
use std::path::{Path, PathBuf};
use wormlife_lib::{Config, Status, TunnelMap};

/// Accepts either a directory path, or a bare example name that is
/// looked up under `examples/` in the working directory.
fn resolve_folder(folder: &str) -> Result<PathBuf, Error> {
    let direct = PathBuf::from(folder);
    if direct.is_dir() {
        return Ok(direct);
    }
    let candidate = Path::new("examples").join(folder);
    if candidate.is_dir() {
        return Ok(candidate);
    }
    Err(Error::FolderNotFound(folder.to_owned()))
}

pub(crate) fn run(args: &Args) -> Result<(), Error> {
    let folder = resolve_folder(&args.folder)?;
    if args.check {
        return images::check_folder(&folder);
    }

    let board = images::load_board(&folder)?;
    let (height, width) = board.dimensions();
    let horizontal = images::load_tunnel_grid(&folder, images::HORIZONTAL_IMAGE)?;
    let vertical = images::load_tunnel_grid(&folder, images::VERTICAL_IMAGE)?;
    let tunnels = TunnelMap::from_grids(height, width, &horizontal, &vertical, images::BACKGROUND)?;

    // All construction errors have surfaced by now; nothing has been
    // written yet.
    let mut sim = Config::new(args.milestones.clone()).simulation(board, &tunnels)?;
    while sim.status() != Status::Done {
        if let Some((generation, board)) = sim.advance()? {
            let path = folder.join(format!("{generation}.png"));
            images::save_board(board, &path)?;
            println!("✓ {}", path.display());
        }
    }

    if args.gif {
        let path = images::write_gif(&folder, &args.milestones)?;
        println!("✓ {}", path.display());
    }
    Ok(())
}
