//! The interactive shell: one menu choice, one parse attempt, one report.

use crate::core::report::{OutputFormat, Report};
use crate::domain::model::{Flow, SeriesDigits};
use crate::domain::ports::Console;
use crate::utils::error::Result;

pub const MENU_PROMPT: &str = "What do you want to do?\n\
1) I have a CPU -> recommend GPU\n\
2) I have a GPU -> recommend CPU\n\
Enter choice (1 or 2): ";
pub const CPU_BRAND_PROMPT: &str = "\nWhich brand of CPU do you have (Intel/AMD)? ";
pub const CPU_SERIES_PROMPT: &str = "Which series do you have? (e.g., i5, Ryzen7): ";
pub const GPU_PROMPT: &str = "\nWhich GPU do you have? (e.g., RTX 4070 Ti): ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub series_digits: SeriesDigits,
    pub format: OutputFormat,
}

pub struct Session<C: Console> {
    console: C,
    options: SessionOptions,
}

impl<C: Console> Session<C> {
    pub fn new(console: C, options: SessionOptions) -> Self {
        Self { console, options }
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Runs a single interaction and writes the rendered report.
    pub fn run(&mut self) -> Result<Report> {
        let report = match self.choose_direction()? {
            Some(Flow::Cpu) => self.run_cpu()?,
            Some(Flow::Gpu) => self.run_gpu()?,
            None => Report::InvalidSelection,
        };
        let rendered = report.render(self.options.format)?;
        self.console.write(&rendered)?;
        Ok(report)
    }

    fn choose_direction(&mut self) -> Result<Option<Flow>> {
        self.console.write(MENU_PROMPT)?;
        let choice = self.console.read_token()?.as_deref().and_then(parse_choice);
        let flow = choice.and_then(Flow::from_choice);
        match flow {
            Some(flow) => tracing::info!("Selected {:?} flow", flow),
            None => tracing::info!("Invalid menu selection: {:?}", choice),
        }
        Ok(flow)
    }

    fn run_cpu(&mut self) -> Result<Report> {
        self.console.write(CPU_BRAND_PROMPT)?;
        let brand = self.console.read_token()?.unwrap_or_default();
        if let Some(rejection) = Report::check_cpu_brand(&brand) {
            return Ok(rejection);
        }

        self.console.write(CPU_SERIES_PROMPT)?;
        let series = self.console.read_token()?.unwrap_or_default();
        Ok(Report::for_cpu(&brand, &series, self.options.series_digits))
    }

    fn run_gpu(&mut self) -> Result<Report> {
        self.console.write(GPU_PROMPT)?;
        match self.console.read_line()? {
            Some(line) => Ok(Report::for_gpu(&line)),
            None => {
                tracing::warn!("Input closed before GPU line");
                Ok(Report::InputError { flow: Flow::Gpu })
            }
        }
    }
}

/// Reads a leading integer the way `1abc` reads as 1. Anything else is no choice.
pub fn parse_choice(token: &str) -> Option<i64> {
    let sign_len = usize::from(token.starts_with(['+', '-']));
    let digits_end = token[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(token.len(), |i| i + sign_len);
    token[..digits_end].parse().ok()
}
