use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "pointer-lessons")]
#[command(about = "Walks through pointer basics: addresses, dereferencing, pointer arithmetic")]
pub struct Cli {
    /// TOML file choosing lessons, prompt text and closing message
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run only these lessons, in the order given (repeatable)
    #[arg(short, long = "lesson")]
    pub lessons: Vec<String>,

    /// List available lessons and exit
    #[arg(long)]
    pub list: bool,

    /// Answer yes to every prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Plain output without colored banners
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
