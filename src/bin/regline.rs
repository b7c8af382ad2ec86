//! regline: fit a line to `x,y` samples by gradient descent and plot it.
//!
//! Run: `regline data.csv`

use clap::Parser;
use regline::app::{self, Session};
use regline::output::{PngEncoder, TerminalEncoder};
use regline::plot::PlotComposer;
use regline::{report, Config, Result, Trainer};
use std::path::PathBuf;
use std::process::ExitCode;

/// Fit y = mx + b by batch gradient descent and plot the result
#[derive(Parser, Debug)]
#[command(name = "regline")]
#[command(version)]
#[command(about = "Gradient-descent line fitting with a terminal plot", long_about = None)]
struct Cli {
    /// CSV file with one `x,y` pair per line
    #[arg(default_value = "data.csv")]
    data: PathBuf,

    /// Config file path (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the plot to a PNG file instead of opening the interactive view
    #[arg(long)]
    png: Option<PathBuf>,

    /// Print the plot to stdout instead of opening the interactive view
    #[arg(long)]
    print: bool,

    /// Skip the interactive view
    #[arg(long)]
    no_tui: bool,

    /// Override the number of training epochs
    #[arg(long)]
    epochs: Option<usize>,

    /// Override the learning rate
    #[arg(long)]
    learning_rate: Option<f64>,
}

impl Cli {
    fn interactive(&self) -> bool {
        !(self.no_tui || self.print || self.png.is_some())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(epochs) = cli.epochs {
        config.training.epochs = epochs;
    }
    if let Some(lr) = cli.learning_rate {
        config.training.learning_rate = lr;
    }
    config.validate()?;

    let dataset = config.data.loader().load_path(&cli.data)?;
    let model = Trainer::new(config.training)
        .train_with(&dataset, |epoch| println!("{}", report::progress_line(epoch)));

    println!("\n{}", report::model_summary(&model));
    println!("\nPredictions:");
    print!("{}", report::prediction_table(&dataset, &model));

    let composer = PlotComposer::new(config.plot.clone());
    if let Some(path) = &cli.png {
        let frame = composer.compose(&dataset, &model)?;
        PngEncoder::write_to_file(&frame, path)?;
        println!("\nSaved plot to {}", path.display());
    }
    if cli.print {
        let frame = composer.compose(&dataset, &model)?;
        print!("{}", TerminalEncoder::new().width(120).render(&frame));
    }

    if cli.interactive() {
        let mut session = Session::new(&config, dataset, model)?;
        app::run(&mut session, config.ui.poll_interval())?;
    }

    Ok(())
}
