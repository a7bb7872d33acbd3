//! Parsing command-line arguments.

use clap::{command, value_parser, Arg, ArgAction};

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) folder: String,
    pub(crate) milestones: Vec<u64>,
    pub(crate) gif: bool,
    pub(crate) check: bool,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Self {
        let matches = command!()
            .long_about(
                "Runs a Game of Life simulation whose grid adjacency is \n\
                 rewired by wormhole tunnels, and saves PNG snapshots.\n\
                 \n\
                 The input folder must contain three images of equal size:\n\
                 * starting_position.png - white pixels are live cells;\n\
                 * horizontal_tunnel.png - each non-black color marks the \
                 two mouths of a left/right tunnel;\n\
                 * vertical_tunnel.png - likewise for up/down tunnels.\n\
                 \n\
                 One snapshot named <GEN>.png is written into the folder \
                 for every requested milestone generation.\n",
            )
            .arg(
                Arg::new("FOLDER")
                    .help("Folder with the board and tunnel bitmaps")
                    .long_help(
                        "Folder with the board and tunnel bitmaps\n\
                         Either a directory path, or a bare name that is \
                         looked up under ./examples/.\n",
                    )
                    .required(true)
                    .index(1),
            )
            .arg(
                Arg::new("MILESTONES")
                    .help("Generations at which to write <GEN>.png")
                    .short('m')
                    .long("milestones")
                    .value_name("GEN")
                    .num_args(1..)
                    .value_parser(value_parser!(u64).range(1..))
                    .default_values(["1", "10", "100", "1000"]),
            )
            .arg(
                Arg::new("GIF")
                    .help("Assembles the snapshots into all_output.gif after the run")
                    .long("gif")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("CHECK")
                    .help("Only validates the three input images, then exits")
                    .long("check")
                    .action(ArgAction::SetTrue),
            )
            .get_matches();

        Args {
            folder: matches.get_one::<String>("FOLDER").unwrap().clone(),
            milestones: matches
                .get_many::<u64>("MILESTONES")
                .unwrap()
                .copied()
                .collect(),
            gif: matches.get_flag("GIF"),
            check: matches.get_flag("CHECK"),
        }
    }
}
