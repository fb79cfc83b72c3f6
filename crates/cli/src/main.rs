use anyhow::{anyhow, bail, Context};
use cellgrid::{
    timed, Grid, GridCell, GridConfig, HexCell, HexGrid, HexTiling, Point2,
    SquareCell, SquareGrid, SquareTiling, TriGrid, TrihexGrid,
};
use config::{Config, File};
use log::{debug, LevelFilter};
use serde::Serialize;
use serde_json::{json, Value};
use simple_logger::SimpleLogger;
use std::{
    path::{Path, PathBuf},
    process,
    str::FromStr,
};
use structopt::{clap::AppSettings, StructOpt};
use strum::{Display, EnumString};

/// CLI for querying square, triangle, hex and trihex grids. Every result is
/// printed as JSON.
///
/// Cells are given as comma-separated coordinates, e.g. `1,0,-1`. If the
/// first coordinate is negative, wrap them in parens: `(-1,0,1)`.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "cellgrid",
    global_settings = &[AppSettings::AllowNegativeNumbers]
)]
struct Opt {
    /// Path to a config file that defines the grid. Supported formats: JSON,
    /// TOML
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// The type of grid to query
    #[structopt(short, long, default_value = "hex")]
    grid: GridKind,

    /// Print the full config being used, in TOML format, before running the
    /// command
    #[structopt(long)]
    dump_config: bool,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Option<Command>,
}

/// Different grid types
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum GridKind {
    Tri,
    Hex,
    Trihex,
    Square,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Find the cell containing a point
    Pick { x: f64, y: f64 },
    /// Get the center point of a cell
    Center { cell: String },
    /// Get the corner points of a cell
    Corners { cell: String },
    /// List the cells that share an edge with a cell
    Neighbours { cell: String },
    /// List all cells within some number of steps of a cell
    Disc { cell: String, radius: u32 },
    /// List the cells along the line between the centers of two cells
    Line { from: String, to: String },
    /// List the cells overlapping a rectangle, given by its bottom-left
    /// corner and size
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Get the parent tile of a cell, and the cell's index within it. Only
    /// supported for hex and square grids.
    Parent { cell: String },
}

fn load_config(config_path: &Path) -> anyhow::Result<GridConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

fn parse_cell<C>(s: &str) -> anyhow::Result<C>
where
    C: FromStr<Err = anyhow::Error>,
{
    s.parse().with_context(|| format!("invalid cell {:?}", s))
}

/// Run a command that works the same on every grid
fn query<G>(grid: &G, command: &Command) -> anyhow::Result<Value>
where
    G: Grid,
    G::Cell: FromStr<Err = anyhow::Error> + Serialize,
{
    let value = match command {
        Command::Pick { x, y } => json!(grid.pick(Point2::new(*x, *y))),
        Command::Center { cell } => json!(grid.center(parse_cell(cell)?)),
        Command::Corners { cell } => json!(grid.corners(parse_cell(cell)?)),
        Command::Neighbours { cell } => {
            let cell: G::Cell = parse_cell(cell)?;
            json!(cell.neighbours().collect::<Vec<_>>())
        }
        Command::Disc { cell, radius } => {
            let cell: G::Cell = parse_cell(cell)?;
            json!(cell.disc(*radius).collect::<Vec<_>>())
        }
        Command::Line { from, to } => {
            let cells: Vec<_> =
                grid.line(parse_cell(from)?, parse_cell(to)?).collect();
            json!(cells)
        }
        Command::Rect {
            x,
            y,
            width,
            height,
        } => {
            if *width < 0.0 || *height < 0.0 {
                bail!("rectangle width and height can't be negative");
            }
            let cells: Vec<_> = grid
                .rect_intersect(Point2::new(*x, *y), *width, *height)
                .collect();
            json!(cells)
        }
        Command::Parent { .. } => {
            bail!("parent tiles are only supported for hex and square grids")
        }
    };
    Ok(value)
}

fn parent_json(parent: impl Serialize, index: usize) -> Value {
    json!({ "parent": parent, "index": index })
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => GridConfig::default(),
    };
    debug!("Using config {:?}", config);
    if opt.dump_config {
        print!("{}", toml::to_string_pretty(&config)?);
    }

    let command = match &opt.command {
        Some(command) => command,
        None if opt.dump_config => return Ok(()),
        None => bail!("no command given, see --help for options"),
    };

    let output = timed!(format!("{} grid query", opt.grid), {
        match (opt.grid, command) {
            (GridKind::Hex, Command::Parent { cell }) => {
                let tiling = HexTiling::from_config(&config)?;
                let (parent, index) =
                    tiling.child_index(parse_cell::<HexCell>(cell)?);
                parent_json(parent, index)
            }
            (GridKind::Square, Command::Parent { cell }) => {
                let tiling = SquareTiling::from_config(&config)?;
                let (parent, index) =
                    tiling.child_index(parse_cell::<SquareCell>(cell)?);
                parent_json(parent, index)
            }
            (GridKind::Tri, _) => {
                query(&TriGrid::from_config(&config)?, command)?
            }
            (GridKind::Hex, _) => {
                query(&HexGrid::from_config(&config)?, command)?
            }
            (GridKind::Trihex, _) => {
                query(&TrihexGrid::from_config(&config)?, command)?
            }
            (GridKind::Square, _) => {
                query(&SquareGrid::from_config(&config)?, command)?
            }
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
