use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use wordbridge::vocab::io::read_vocab_json;
use wordbridge::{VocabBuilderOptions, WordVocab};

use crate::logging::LogArgs;

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Input files to encode.
    files: Vec<PathBuf>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Fit the vocabulary on this training file.
    #[arg(long, conflicts_with = "vocab")]
    train: Option<PathBuf>,

    /// Load a previously saved vocabulary JSON document.
    #[arg(long, conflicts_with = "train")]
    vocab: Option<PathBuf>,

    /// Output path; defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl EncodeArgs {
    fn load_vocab(&self) -> Result<WordVocab<u32>, Box<dyn std::error::Error>> {
        if let Some(path) = &self.vocab {
            log::info!("loading vocabulary from {}", path.display());
            let mut reader = File::open(path)?;
            return Ok(read_vocab_json(&mut reader)?);
        }

        let train = self
            .train
            .as_ref()
            .ok_or("either --train or --vocab is required")?;

        log::info!("fitting vocabulary on {}", train.display());
        let mut builder = VocabBuilderOptions::default().init()?;
        builder.fit(train)?;
        Ok(builder.into_vocab()?)
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let vocab = self.load_vocab()?;

        let mut writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(std::io::stdout()),
        };

        for path in &self.files {
            log::info!("encoding {}", path.display());
            let lines = std::fs::read_to_string(path)?;
            for sentence in vocab.encode_lines(lines.lines()) {
                writeln!(writer, "{}", serde_json::to_string(&sentence)?)?;
            }
        }
        writer.flush()?;

        Ok(())
    }
}
