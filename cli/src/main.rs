//! rambutan CLI - generates the ChatFlow360 knowledge-base onboarding questionnaire.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use rambutan::questionnaire::{self, content};

#[derive(Parser)]
#[command(name = "rambutan")]
#[command(version)]
#[command(about = "Generate the bilingual knowledge-base onboarding questionnaire (.docx)", long_about = None)]
struct Cli {
    /// Output path for the generated document
    #[arg(short, long, value_name = "FILE", default_value = content::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Logo image inserted on the cover when the file exists
    #[arg(long, value_name = "FILE", default_value = content::DEFAULT_LOGO)]
    logo: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    debug!("generating questionnaire at {}", cli.output.display());
    match questionnaire::generate(&cli.output, Some(&cli.logo)) {
        Ok(path) => {
            println!("Document saved: {}", path.display());
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}
