use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use wordbridge::vocab::io::write_vocab_json;
use wordbridge::{VocabBuilder, VocabBuilderOptions};

use crate::logging::LogArgs;

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// The training file to fit on.
    train_file: PathBuf,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// The first ID assigned to corpus words.
    #[arg(long, default_value = "4")]
    index_from: u32,

    /// Output path; defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl VocabArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut builder: VocabBuilder<u32> = VocabBuilderOptions::default()
            .with_index_from(self.index_from)
            .init()?;

        log::info!("fitting vocabulary on {}", self.train_file.display());
        let vocab = builder.fit(&self.train_file)?;
        log::info!("vocabulary size: {}", vocab.num_words());

        let mut writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(std::io::stdout()),
        };
        write_vocab_json(vocab, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}
