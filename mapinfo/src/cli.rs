use argh::FromArgs;
use buildmap::{ReportMode, log};

/// Displays information about Build engine MAP files
#[derive(Debug, Clone, FromArgs)]
pub struct CLIOptions {
    /// verbose level: off, error, warn, info, debug
    #[argh(option)]
    pub verbose: Option<log::LevelFilter>,
    /// report mode <summary, detailed>
    #[argh(option)]
    pub mode: Option<ReportMode>,
    /// shorthand for `--mode detailed`: list every sector, wall and sprite
    #[argh(switch, short = 'd')]
    pub detailed: bool,
    /// worker threads, 0 picks one per core and 1 runs sequentially
    #[argh(option, short = 'j')]
    pub jobs: Option<usize>,
    /// MAP files to read, e.g. e1l1.map myhouse.map
    #[argh(positional)]
    pub files: Vec<String>,
}

impl CLIOptions {
    /// The mode asked for on the command line, if any
    pub fn report_mode(&self) -> Option<ReportMode> {
        if self.detailed {
            Some(ReportMode::Detailed)
        } else {
            self.mode
        }
    }
}
