//! briefit CLI - summarise text, documents and webpages
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors. Without a subcommand
//! the interactive session loop runs; the subcommands cover one-shot use.

use briefit::{agent, input, session, Config, RawInput, SummaryLength};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "briefit")]
#[command(author, version, about = "CLI for summarising text, documents and webpages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise text given on the command line
    Text {
        /// The text to summarise
        text: String,
        #[arg(short, long, value_enum, default_value_t = LengthArg::Short)]
        length: LengthArg,
    },
    /// Summarise a local file (PDF, DOCX or plain text)
    File {
        /// Path to the file
        path: String,
        #[arg(short, long, value_enum, default_value_t = LengthArg::Short)]
        length: LengthArg,
    },
    /// Summarise the content of a URL
    Url {
        /// URL to fetch
        url: String,
        #[arg(short, long, value_enum, default_value_t = LengthArg::Short)]
        length: LengthArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LengthArg {
    Short,
    Long,
}

impl From<LengthArg> for SummaryLength {
    fn from(arg: LengthArg) -> Self {
        match arg {
            LengthArg::Short => SummaryLength::Short,
            LengthArg::Long => SummaryLength::Long,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    let one_shot = match cli.command {
        Some(Commands::Text { text, length }) => Some((RawInput::TypedText(text), length)),
        Some(Commands::File { path, length }) => Some((RawInput::FilePath(path), length)),
        Some(Commands::Url { url, length }) => Some((RawInput::Url(url), length)),
        None => None,
    };

    match one_shot {
        Some((raw, length)) => {
            let text = input::normalize(raw).await?;
            let summary = agent::summarize(&text, length.into(), &config).await?;
            session::print_summary(&summary);
        }
        None => session::run(&config).await?,
    }

    Ok(())
}
