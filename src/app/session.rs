//! Interactive session state.
//!
//! The session owns the current dataset, model and rendered frame and
//! advances through an explicit state machine:
//!
//! ```text
//! Idle --(Retrain | Load ok)--> Training --> Rendering --> Idle
//! ```
//!
//! Each call to [`Session::step`] performs at most one transition, so the
//! surface can redraw between them (showing "training..." before the
//! blocking run starts). Commands arriving meanwhile wait in a queue.

use super::input::{Action, InputMode};
use crate::config::Config;
use crate::dataset::{DataLoader, Dataset};
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::output::PngEncoder;
use crate::plot::PlotComposer;
use crate::report::{format_equation, model_summary, prediction_table, progress_line};
use crate::trainer::{compute_mse, Model, Trainer};
use log::{debug, info, warn};
use std::collections::VecDeque;
use std::path::PathBuf;

/// Where the session is in its work cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for a command.
    #[default]
    Idle,
    /// A model will be fitted on the next step.
    Training,
    /// A frame will be composed on the next step.
    Rendering,
}

/// Work requested by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fit a fresh model on the current dataset.
    Retrain,
    /// Replace the dataset from a file, then train and render.
    Load(PathBuf),
    /// Export the current frame as PNG.
    SavePng,
    /// End the session.
    Quit,
}

/// Everything the interactive surface shows and mutates.
#[derive(Debug)]
pub struct Session {
    phase: Phase,
    queue: VecDeque<Command>,
    dataset: Dataset,
    model: Model,
    frame: Framebuffer,
    trainer: Trainer,
    loader: DataLoader,
    composer: PlotComposer,
    snapshot_path: PathBuf,
    prompt: Option<String>,
    status: String,
    should_quit: bool,
}

impl Session {
    /// Start a session on an already trained model.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured frame size is invalid.
    pub fn new(config: &Config, dataset: Dataset, model: Model) -> Result<Self> {
        let composer = PlotComposer::new(config.plot.clone());
        let frame = composer.compose(&dataset, &model)?;
        Ok(Self {
            phase: Phase::Idle,
            queue: VecDeque::new(),
            status: fit_status(&dataset, &model),
            dataset,
            model,
            frame,
            trainer: Trainer::new(config.training),
            loader: config.data.loader(),
            composer,
            snapshot_path: config.ui.snapshot_path.clone(),
            prompt: None,
            should_quit: false,
        })
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current dataset.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Current model.
    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Most recently composed frame.
    #[must_use]
    pub fn frame(&self) -> &Framebuffer {
        &self.frame
    }

    /// Frame title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.composer.layout().title
    }

    /// One-line feedback for the user.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Text typed into the open path prompt.
    #[must_use]
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// How key presses should be interpreted.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.prompt.is_some() {
            InputMode::Prompt
        } else {
            InputMode::Normal
        }
    }

    /// The quit flag.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Queue a command.
    pub fn submit(&mut self, command: Command) {
        debug!("queued {command:?}");
        self.queue.push_back(command);
    }

    /// Apply a key action: edit the prompt or queue a command.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.submit(Command::Quit),
            Action::Retrain => self.submit(Command::Retrain),
            Action::SavePng => self.submit(Command::SavePng),
            Action::NewData => {
                self.prompt = Some(String::new());
                self.status = "Data file (Enter to load, Esc to cancel)".to_string();
            }
            Action::PromptInput(c) => {
                if let Some(buffer) = self.prompt.as_mut() {
                    buffer.push(c);
                }
            }
            Action::PromptBackspace => {
                if let Some(buffer) = self.prompt.as_mut() {
                    buffer.pop();
                }
            }
            Action::PromptCancel => {
                self.prompt = None;
                self.status = fit_status(&self.dataset, &self.model);
            }
            Action::PromptSubmit => {
                let path = self.prompt.take().map(|p| p.trim().to_string()).unwrap_or_default();
                if path.is_empty() {
                    self.status = fit_status(&self.dataset, &self.model);
                } else {
                    self.submit(Command::Load(PathBuf::from(path)));
                }
            }
            Action::None => {}
        }
    }

    /// Perform one state transition. Returns whether anything happened.
    pub fn step(&mut self) -> bool {
        match self.phase {
            Phase::Idle => match self.queue.pop_front() {
                Some(command) => {
                    self.execute(command);
                    true
                }
                None => false,
            },
            Phase::Training => {
                self.model = self.trainer.train_with(&self.dataset, |report| {
                    info!("{}", progress_line(report));
                });
                info!("{}", model_summary(&self.model));
                debug!("predictions:\n{}", prediction_table(&self.dataset, &self.model));
                self.phase = Phase::Rendering;
                true
            }
            Phase::Rendering => {
                match self.composer.compose(&self.dataset, &self.model) {
                    Ok(frame) => {
                        self.frame = frame;
                        self.status = fit_status(&self.dataset, &self.model);
                    }
                    Err(e) => {
                        warn!("frame not updated: {e}");
                        self.status = e.to_string();
                    }
                }
                self.phase = Phase::Idle;
                true
            }
        }
    }

    /// Step until idle with an empty queue or until quit.
    pub fn run_pending(&mut self) {
        while !self.should_quit && self.step() {}
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Quit => self.should_quit = true,
            Command::Retrain => self.begin_training(),
            Command::Load(path) => match self.loader.load_path(&path) {
                Ok(dataset) => {
                    info!("replaced dataset with {} samples from {}", dataset.len(), path.display());
                    self.dataset = dataset;
                    self.begin_training();
                }
                Err(e) => {
                    warn!("load failed: {e}");
                    self.status = e.to_string();
                }
            },
            Command::SavePng => match PngEncoder::write_to_file(&self.frame, &self.snapshot_path) {
                Ok(()) => self.status = format!("Saved {}", self.snapshot_path.display()),
                Err(e) => {
                    warn!("snapshot failed: {e}");
                    self.status = e.to_string();
                }
            },
        }
    }

    fn begin_training(&mut self) {
        self.status = format!("Training on {} samples...", self.dataset.len());
        self.phase = Phase::Training;
    }
}

/// Equation and training error, e.g. `y = 2.00x + 3.00   MSE 0.000012`.
fn fit_status(dataset: &Dataset, model: &Model) -> String {
    format!("{}   MSE {:.6}", format_equation(model), compute_mse(dataset, model))
}
