//! Offline header mapping CLI.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use header_bridge::config::{load_config, MapperConfig, Preset};
use header_bridge::headers::{MessageHeaders, ProtocolHeaders};
use header_bridge::mapping::HeaderMapper;

#[derive(Parser)]
#[command(name = "header-map")]
#[command(about = "Map headers between message and HTTP form", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Message headers (JSON object) to HTTP header lines
    Outbound(MapArgs),
    /// HTTP header lines to message headers (JSON)
    Inbound(MapArgs),
}

#[derive(Args)]
struct MapArgs {
    /// TOML config whose [mapper] section builds the mapper
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input file; stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Preset used when no config is given
    #[arg(short, long, value_enum, default_value_t = PresetArg::None)]
    preset: PresetArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    None,
    Inbound,
    Outbound,
}

impl From<PresetArg> for Preset {
    fn from(value: PresetArg) -> Self {
        match value {
            PresetArg::None => Preset::None,
            PresetArg::Inbound => Preset::Inbound,
            PresetArg::Outbound => Preset::Outbound,
        }
    }
}

impl MapArgs {
    fn mapper(&self) -> Result<HeaderMapper, Box<dyn std::error::Error>> {
        let config = match &self.config {
            Some(path) => load_config(path)?.mapper,
            None => MapperConfig {
                preset: self.preset.into(),
                ..MapperConfig::default()
            },
        };
        Ok(HeaderMapper::from_config(&config))
    }

    fn read_input(&self) -> io::Result<String> {
        match &self.input {
            Some(path) => fs::read_to_string(path),
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Outbound(args) => {
            let mapper = args.mapper()?;
            let json: serde_json::Value = serde_json::from_str(&args.read_input()?)?;
            let headers = MessageHeaders::from_json(json)?;
            let mut protocol = ProtocolHeaders::new();
            mapper.from_headers(&headers, &mut protocol)?;
            print!("{protocol}");
        }
        Commands::Inbound(args) => {
            let mapper = args.mapper()?;
            let protocol = ProtocolHeaders::parse_lines(&args.read_input()?)?;
            let headers = mapper.to_headers(&protocol)?;
            println!("{}", serde_json::to_string_pretty(&headers)?);
        }
    }

    Ok(())
}
