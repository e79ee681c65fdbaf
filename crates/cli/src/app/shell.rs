//! The interactive shell: reads commands, routes them to screens and drives
//! the add/edit forms.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use investment_tracker_core::errors::CoreError;
use investment_tracker_core::form::{FormField, InvestmentForm};
use investment_tracker_core::models::investment::InvestmentId;
use investment_tracker_core::InvestmentTracker;

use super::router::Route;
use super::screens;
use crate::config::ShellConfig;
use crate::error::Result;

/// Typed at any form prompt to abandon the form.
const CANCEL: &str = ":cancel";

/// Typed in the edit form to blank an optional field.
const CLEAR: &str = "-";

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-oriented shell over any reader and writer.
///
/// Owns the tracker; every screen handler borrows it from here.
pub struct Shell<R, W> {
    tracker: InvestmentTracker,
    config: ShellConfig,
    input: R,
    output: W,
}

impl<R, W> std::fmt::Debug for Shell<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("tracker", &self.tracker)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(tracker: InvestmentTracker, config: ShellConfig, input: R, output: W) -> Self {
        Self {
            tracker,
            config,
            input,
            output,
        }
    }

    #[must_use]
    pub fn tracker(&self) -> &InvestmentTracker {
        &self.tracker
    }

    /// Give back the writer, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read and execute commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        self.tracker.refresh_days();
        writeln!(
            self.output,
            "Investment Tracker ({} investments). Type `help` for commands.",
            self.tracker.investment_count()
        )?;

        // Env values arrive trimmed; always leave one space before the cursor.
        let prompt = format!("{} ", self.config.prompt.trim_end());
        while let Some(line) = self.read_answer(&prompt)? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if self.execute(line)? == Flow::Quit {
                break;
            }
        }
        info!("shell closed");
        Ok(())
    }

    /// Execute one command line.
    ///
    /// # Errors
    ///
    /// Returns an error only on I/O failure; domain errors are printed.
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let (command, argument) = match line.trim().split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line.trim(), ""),
        };
        debug!(command, argument, "shell command");

        match command {
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => self.print(&screens::render_help())?,
            "dashboard" => self.navigate(Route::Dashboard)?,
            "list" => self.navigate(Route::List)?,
            "add" => self.navigate(Route::Add)?,
            "show" | "edit" | "delete" | "search" | "go" if argument.is_empty() => {
                self.print(&format!("Usage: {command} <{}>", usage_argument(command)))?;
            }
            "show" => self.navigate(Route::Show(argument.to_string()))?,
            "edit" => self.navigate(Route::Edit(argument.to_string()))?,
            "delete" => self.delete(argument)?,
            "search" => self.search(argument)?,
            "refresh" => {
                let changed = self.tracker.refresh_days();
                self.print(&format!("Elapsed days updated for {changed} investment(s)."))?;
            }
            "go" => self.navigate(Route::parse(argument))?,
            path if path.starts_with('/') => self.navigate(Route::parse(path))?,
            other => {
                self.print(&format!("Unknown command '{other}'. Type `help` for commands."))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn navigate(&mut self, route: Route) -> Result<()> {
        debug!(%route, "navigate");
        match route {
            Route::Dashboard => self.print(&screens::render_dashboard(&self.tracker)),
            Route::List => self.print(&screens::render_list(&self.tracker)),
            Route::Add => self.add(),
            Route::Show(reference) => match self.lookup(&reference)? {
                Some(id) => match self.tracker.get_investment(id) {
                    Some(investment) => {
                        let screen = screens::render_details(investment);
                        self.print(&screen)
                    }
                    None => self.print(&screens::render_investment_not_found(&reference)),
                },
                None => Ok(()),
            },
            Route::Edit(reference) => match self.lookup(&reference)? {
                Some(id) => self.edit(id),
                None => Ok(()),
            },
            Route::NotFound(path) => self.print(&screens::render_not_found(&path)),
        }
    }

    /// Resolve a reference to an id in the book, printing why when it
    /// cannot be.
    fn lookup(&mut self, reference: &str) -> Result<Option<InvestmentId>> {
        match self.tracker.resolve_id(reference) {
            Ok(id) if self.tracker.get_investment(id).is_some() => Ok(Some(id)),
            Ok(_) | Err(CoreError::InvestmentNotFound(_)) => {
                self.print(&screens::render_investment_not_found(reference))?;
                Ok(None)
            }
            Err(err) => {
                self.print(&format!("Error: {err}"))?;
                Ok(None)
            }
        }
    }

    fn add(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "New investment. Fields marked * are required; type {CANCEL} to abandon."
        )?;
        let Some(form) = self.fill_form(InvestmentForm::blank(), false)? else {
            return self.print("Cancelled. Nothing was saved.");
        };

        match self.tracker.submit_new(&form) {
            Ok(id) => {
                writeln!(self.output, "✓ Investment created")?;
                self.show_after_save(id)
            }
            Err(err) => self.print(&format!("Error: {err}")),
        }
    }

    fn edit(&mut self, id: InvestmentId) -> Result<()> {
        let Some(prefilled) = self.tracker.edit_form(id) else {
            return self.print(&screens::render_investment_not_found(&id.to_string()));
        };
        writeln!(
            self.output,
            "Editing '{}'. Press Enter to keep a value, {CLEAR} to clear the yield, {CANCEL} to abandon.",
            prefilled.name
        )?;
        let Some(form) = self.fill_form(prefilled, true)? else {
            return self.print("Cancelled. Nothing was changed.");
        };

        match self.tracker.submit_edit(id, &form) {
            Ok(()) => {
                writeln!(self.output, "✓ Investment updated")?;
                self.show_after_save(id)
            }
            Err(err) => self.print(&format!("Error: {err}")),
        }
    }

    fn show_after_save(&mut self, id: InvestmentId) -> Result<()> {
        match self.tracker.get_investment(id) {
            Some(investment) => {
                let screen = screens::render_details(investment);
                self.print(&screen)
            }
            None => Ok(()),
        }
    }

    /// Prompt for every field in order. A field whose answer is invalid shows
    /// its inline error and is asked again. `None` means the user cancelled
    /// or input ended.
    fn fill_form(
        &mut self,
        mut form: InvestmentForm,
        editing: bool,
    ) -> Result<Option<InvestmentForm>> {
        for field in FormField::ALL {
            loop {
                let prompt = field_prompt(&form, field, editing);
                let Some(answer) = self.read_answer(&prompt)? else {
                    return Ok(None);
                };
                let answer = answer.trim();
                if answer == CANCEL {
                    return Ok(None);
                }

                if editing && !field.is_required() && answer == CLEAR {
                    form.set(field, "");
                } else if !(editing && answer.is_empty()) {
                    form.set(field, answer);
                }

                match form.validate() {
                    Err(errors) => match errors.get(field) {
                        Some(message) => writeln!(self.output, "  ! {message}")?,
                        None => break,
                    },
                    Ok(_) => break,
                }
            }
        }
        Ok(Some(form))
    }

    fn delete(&mut self, reference: &str) -> Result<()> {
        let Some(id) = self.lookup(reference)? else {
            return Ok(());
        };
        let name = self
            .tracker
            .get_investment(id)
            .map(|inv| inv.name().to_string())
            .unwrap_or_default();

        if self.config.confirm_deletes {
            let question = format!("Delete '{name}'? This cannot be undone. [y/N] ");
            let confirmed = self
                .read_answer(&question)?
                .is_some_and(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"));
            if !confirmed {
                return self.print("Deletion cancelled.");
            }
        }

        if self.tracker.delete_investment(id) {
            self.print("✓ Investment deleted")
        } else {
            self.print(&screens::render_investment_not_found(reference))
        }
    }

    fn search(&mut self, query: &str) -> Result<()> {
        let hits: Vec<InvestmentId> = self.tracker.search(query).iter().map(|inv| inv.id()).collect();
        let cards: Vec<String> = self
            .tracker
            .investments()
            .iter()
            .enumerate()
            .filter(|(_, inv)| hits.contains(&inv.id()))
            .map(|(idx, inv)| screens::render_card(idx + 1, inv))
            .collect();

        if cards.is_empty() {
            self.print(&format!("No investments match '{query}'."))
        } else {
            self.print(&cards.join("\n\n"))
        }
    }

    fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Write `prompt`, then read one line. `None` at end of input.
    fn read_answer(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn usage_argument(command: &str) -> &'static str {
    match command {
        "search" => "text",
        "go" => "path",
        _ => "ref",
    }
}

/// `Label (hint): ` when adding, `Label (hint) [current]: ` when editing.
fn field_prompt(form: &InvestmentForm, field: FormField, editing: bool) -> String {
    let current = form.get(field);
    if editing && !current.is_empty() {
        format!("{} ({}) [{current}]: ", field.label(), field.placeholder())
    } else {
        format!("{} ({}): ", field.label(), field.placeholder())
    }
}
