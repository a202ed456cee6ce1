//! Session construction and one-shot view rendering

use clap::Args;

use crate::config::Settings;
use crate::error::FinanceResult;
use crate::models::parse_date;
use crate::reports::View;
use crate::session::Session;

/// Options shared by every command that starts a session
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Seed for the sample expense generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with empty tables instead of the sample data
    #[arg(long)]
    pub empty: bool,

    /// Reference date for deadline calculations (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub as_of: Option<String>,
}

/// Build a fresh session from settings and command-line overrides
pub fn build_session(mut settings: Settings, args: &SessionArgs) -> FinanceResult<Session> {
    if let Some(seed) = args.seed {
        settings.sample.seed = Some(seed);
    }

    let session = if args.empty || !settings.sample.enabled {
        Session::new(settings)
    } else {
        Session::with_sample_data(settings)?
    };

    match &args.as_of {
        Some(date) => Ok(session.with_as_of(parse_date(date)?)),
        None => Ok(session),
    }
}

/// Render a single view of a new session
pub fn handle_show(settings: Settings, view: View, args: &SessionArgs) -> FinanceResult<String> {
    let session = build_session(settings, args)?;
    Ok(session.render(view)?.format_terminal(session.settings()))
}
