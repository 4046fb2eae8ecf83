use crate::config::{LayerMode, load_config};
use crate::ir::parse_flow_json;
use crate::layout::compute_layout;
use crate::layout_dump::{layout_json, write_layout_dump};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "sklay", version, about = "Sankey diagram layout engine")]
pub struct Args {
    /// Input edge list (JSON) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the layout dump. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Plot width
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Plot height
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,

    /// Node rectangle width
    #[arg(long = "node-width")]
    pub node_width: Option<f32>,

    /// Vertical gap between stacked nodes
    #[arg(long = "node-padding")]
    pub node_padding: Option<f32>,

    /// Column assignment mode
    #[arg(long = "layering", value_enum)]
    pub layering: Option<LayeringArg>,

    /// Pretty-print JSON written to stdout
    #[arg(long = "pretty")]
    pub pretty: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum LayeringArg {
    Strict,
    InputOrder,
}

impl From<LayeringArg> for LayerMode {
    fn from(arg: LayeringArg) -> Self {
        match arg {
            LayeringArg::Strict => LayerMode::Strict,
            LayeringArg::InputOrder => LayerMode::InputOrder,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.layout.plot_width = width;
    }
    if let Some(height) = args.height {
        config.layout.plot_height = height;
    }
    if let Some(node_width) = args.node_width {
        config.layout.node_width = node_width;
    }
    if let Some(node_padding) = args.node_padding {
        config.layout.node_padding = node_padding;
    }
    if let Some(layering) = args.layering {
        config.layout.layering = layering.into();
    }

    let input = read_input(args.input.as_deref())?;
    let data = parse_flow_json(&input)?;
    let layout = compute_layout(&data, &config.theme, &config.layout)?;

    match args.output {
        Some(path) => write_layout_dump(&path, &layout)?,
        None => {
            let json = layout_json(&layout, args.pretty)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
