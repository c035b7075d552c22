use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "libree")]
#[command(about = "Mirror filesystem metadata into a libree document store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Post one metadata record per file under a directory
    Index(IndexArgs),
    /// Remove indexed records from the store
    Trim(TrimArgs),
}

#[derive(Debug, Args)]
pub struct IndexArgs {
    /// Directory to index; environment variables like $HOME are expanded
    pub directory: String,

    /// Document store URL [default: http://localhost:5984/libree]
    #[arg(short = 'u', long)]
    pub url: Option<String>,
}

#[derive(Debug, Args)]
pub struct TrimArgs {
    /// Pattern of records to keep
    #[arg(short = 'x', long)]
    pub exclude: Option<String>,
}
