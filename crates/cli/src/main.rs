// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # availability - replay contract availability edits
//!
//! Hydrates a scheduler from an optional stored document, replays a JSON
//! script of commands against it, and prints the resulting stored document
//! followed by the grouped date ranges.
//!
//! ```text
//! availability --snapshot contract.json --script edits.json --pretty
//! ```
//!
//! A script is a JSON array of commands:
//!
//! ```json
//! [
//!   { "action": "select_weekdays", "month": "2025-11" },
//!   { "action": "set_duration_mode", "mode": "Uniform" },
//!   { "action": "set_master_window", "window": { "start_time": "08:00", "end_time": "16:00" } }
//! ]
//! ```
//!
//! Logs go to stderr. `RUST_LOG` overrides the `-v`/`-q` level.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

use std::path::{Path, PathBuf};

use availability::{Command, DEFAULT_SETTLE_DELAY_MS, SchedulerConfig};
use availability_api::{LoadSummary, ScheduleView, SchedulerSession};
use availability_domain::{Holiday, HolidayCalendar, TimeWindow};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:?}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "availability",
    version,
    about = "Replay contract availability edits"
)]
struct Args {
    /// Stored availability document to hydrate from
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// JSON array of commands to apply after hydration
    #[arg(long)]
    script: Option<PathBuf>,

    /// JSON array of `{date, name}` holidays replacing the built-in Canadian table
    #[arg(long)]
    holidays: Option<PathBuf>,

    /// Start of the window given to newly selected dates
    #[arg(long, default_value = "09:00")]
    default_start: String,

    /// End of the window given to newly selected dates
    #[arg(long, default_value = "17:00")]
    default_end: String,

    /// Milliseconds after a load during which changes count as load-caused
    #[arg(long, default_value_t = DEFAULT_SETTLE_DELAY_MS)]
    settle_ms: u64,

    /// Print the stored document indented
    #[arg(long)]
    pretty: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn run(self) -> Result<()> {
        let calendar: HolidayCalendar = self.calendar()?;
        let config: SchedulerConfig = self.config()?;
        let mut session: SchedulerSession = match &self.snapshot {
            Some(path) => {
                let stored: String = read(path)?;
                let (session, summary): (SchedulerSession, LoadSummary) =
                    SchedulerSession::open_stored(calendar, config, &stored)
                        .map_err(|err| eyre!("{err}"))
                        .wrap_err_with(|| format!("loading {}", path.display()))?;
                report_load(&summary);
                session
            }
            None => SchedulerSession::open(calendar, config),
        };
        // The replayed script is the user's own editing.
        session.mark_interactive();

        for command in self.commands()? {
            match session.execute(command) {
                Ok(response) => info!(
                    action = response.action.as_str(),
                    fields = response.updates.len(),
                    "Applied command"
                ),
                Err(err) => warn!(action = command.name(), error = %err, "Command rejected"),
            }
        }

        let stored = session.stored();
        let document: String = if self.pretty {
            stored.to_json_pretty()
        } else {
            stored.to_json()
        }
        .map_err(|err| eyre!("{err}"))?;
        println!("{document}");
        print_ranges(&session.view());
        Ok(())
    }

    fn calendar(&self) -> Result<HolidayCalendar> {
        let Some(path) = &self.holidays else {
            return Ok(HolidayCalendar::canadian_statutory());
        };
        let holidays: Vec<Holiday> = serde_json::from_str(&read(path)?)
            .wrap_err_with(|| format!("parsing holidays from {}", path.display()))?;
        info!(count = holidays.len(), "Loaded holiday calendar");
        Ok(HolidayCalendar::new(holidays))
    }

    fn config(&self) -> Result<SchedulerConfig> {
        let default_window: TimeWindow = TimeWindow::parse(&self.default_start, &self.default_end)
            .map_err(|err| eyre!("invalid default window: {err}"))?;
        Ok(SchedulerConfig {
            default_window,
            settle_delay_ms: self.settle_ms,
        })
    }

    fn commands(&self) -> Result<Vec<Command>> {
        let Some(path) = &self.script else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&read(path)?)
            .wrap_err_with(|| format!("parsing commands from {}", path.display()))
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("reading {}", path.display()))
}

fn report_load(summary: &LoadSummary) {
    info!(
        selected = summary.selected,
        mode = summary.duration_mode.as_str(),
        from_range = summary.generated_from_range,
        "Hydrated from stored document"
    );
    for note in &summary.corrections {
        warn!("{note}");
    }
}

fn print_ranges(view: &ScheduleView) {
    println!(
        "{} date(s), {} mode, master {}-{}",
        view.selected_count, view.duration_mode, view.master_start_time, view.master_end_time
    );
    for range in &view.ranges {
        println!("{}", range.label);
        for slot in &range.slots {
            println!("  {}  {}-{}", slot.label, slot.start_time, slot.end_time);
        }
    }
}
