//! Interactive session loop.
//!
//! Prompt for an input source, normalise it, request a summary, display it
//! between markers and optionally save it, then offer to go again. Every
//! operational failure is reported and the loop regains control; only a
//! broken terminal ends the process early.

use crate::agent::{self, SummaryLength};
use crate::config::Config;
use crate::input::{self, RawInput};
use colored::Colorize;
use dialoguer::{Confirm, Input};
use std::path::{Path, PathBuf};

const DELIMITER: &str = "----------------------------------------";

/// Run the interactive prompt loop until the user chooses to exit.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    println!("{}", "Welcome to BRIEF IT Article Summarizer".bold());

    loop {
        match acquire_input().await? {
            Some(text) => {
                println!("\n{}", DELIMITER);
                let choice: String = Input::new()
                    .with_prompt("Choose summarization type (short/long) [s/l]")
                    .interact_text()?;
                let length = SummaryLength::from_selector(&choice);

                println!("Generating summary... (this can take a few seconds)");
                match agent::summarize(&text, length, config).await {
                    Ok(summary) => {
                        print_summary(&summary);
                        offer_save(&summary)?;
                    }
                    Err(e) => eprintln!("{} {}", "Error in summarisation:".red(), e),
                }
            }
            None => println!("No valid input provided."),
        }

        let again = Confirm::new()
            .with_prompt("Do you want to summarize another text?")
            .interact()?;
        if !again {
            println!("Thanks for using BRIEF IT.");
            break;
        }
    }

    Ok(())
}

/// Prompt for an input source and normalise it.
///
/// `None` means no valid input was acquired; the cause has already been
/// printed. Prompt failures (closed stdin) propagate.
async fn acquire_input() -> Result<Option<String>, dialoguer::Error> {
    let choice: String = Input::new()
        .with_prompt("Choose input method (type/file/url) [t/f/u]")
        .interact_text()?;

    let raw = match choice.trim().to_lowercase().as_str() {
        "t" => {
            println!("\n{}", DELIMITER);
            let text: String = Input::new()
                .with_prompt("Enter your text")
                .allow_empty(true)
                .interact_text()?;
            RawInput::TypedText(text)
        }
        "f" => {
            let path: String = Input::new()
                .with_prompt("Enter the path to your file")
                .interact_text()?;
            RawInput::FilePath(path)
        }
        "u" => {
            let url: String = Input::new().with_prompt("Enter the URL").interact_text()?;
            println!("Loading online content...");
            RawInput::Url(url.trim().to_string())
        }
        _ => {
            eprintln!("{}", "Invalid choice.".red());
            return Ok(None);
        }
    };

    match input::normalize(raw).await {
        Ok(text) => Ok(Some(text)),
        Err(e) => {
            eprintln!("{} {}", "Error reading input:".red(), e);
            Ok(None)
        }
    }
}

/// Print the summary between its markers.
pub fn print_summary(summary: &str) {
    println!("\n{}", DELIMITER);
    println!("Start of Summary:\n");
    println!("{}", summary);
    println!("\nEnd of Summary");
    println!("{}", DELIMITER);
}

/// Ask whether to persist the summary, and do so if confirmed.
fn offer_save(summary: &str) -> Result<(), dialoguer::Error> {
    let save = Confirm::new()
        .with_prompt("Save summary to file?")
        .interact()?;
    if !save {
        return Ok(());
    }

    let filename: String = Input::new()
        .with_prompt("Enter filename to save (without extension)")
        .interact_text()?;

    match save_summary(Path::new(filename.trim()), summary) {
        Ok(path) => println!("Summary saved to {}", path.display()),
        Err(e) => eprintln!("{} {}", "Error saving summary:".red(), e),
    }
    Ok(())
}

/// Write the summary to `name` with the extension forced to `.txt`,
/// overwriting any existing file. Returns the path actually written.
pub fn save_summary(name: &Path, summary: &str) -> std::io::Result<PathBuf> {
    let path = name.with_extension("txt");
    std::fs::write(&path, summary)?;
    Ok(path)
}
