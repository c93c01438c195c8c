use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(
    version,
    about = "Flatten level-editor object and image layers into entity loader JSON"
)]
pub struct Cli {
    /// Level-editor JSON export to read
    #[arg(short, long, env = "LAYER_FLATTENER_INPUT", default_value = "tiled/objects.json")]
    pub input: PathBuf,
    /// Summary file to write
    #[arg(
        short,
        long,
        env = "LAYER_FLATTENER_OUTPUT",
        default_value = "resources/json/objects.json"
    )]
    pub output: PathBuf,
    /// Write one summary per layer into this directory instead of `--output`
    #[arg(long, value_name = "DIR")]
    pub split: Option<PathBuf>,
    /// Write single-line JSON
    #[arg(long)]
    pub compact: bool,
}
