mod encode;
mod fetch;
mod vocab;

use encode::EncodeArgs;
use fetch::FetchArgs;
use vocab::VocabArgs;

/// Subcommands for the CLI.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Fetch a corpus into the disk cache.
    Fetch(FetchArgs),

    /// Fit a vocabulary on a training file and write it as JSON.
    Vocab(VocabArgs),

    /// Encode corpus files as word-ID sequences.
    Encode(EncodeArgs),
}

impl Commands {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Fetch(args) => args.run(),
            Commands::Vocab(args) => args.run(),
            Commands::Encode(args) => args.run(),
        }
    }
}
