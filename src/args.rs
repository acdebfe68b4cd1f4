use clap::Parser;

/// This is a single-station voting kiosk program.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, default eligible_voters.csv) The CSV file with the eligibility roster.
    /// It is externally provisioned and only ever read by this program.
    #[clap(long, value_parser, default_value = "eligible_voters.csv")]
    pub voters: String,

    /// (file path, default voters_log.csv) The CSV ballot log. Read in full for the
    /// duplicate check; one row is appended per successful vote.
    #[clap(long, value_parser, default_value = "voters_log.csv")]
    pub ballot_log: String,

    /// (one-shot mode) The voter's first name. When the three identity flags are
    /// omitted, the program runs an interactive session on standard input instead.
    #[clap(short, long, value_parser)]
    pub first_name: Option<String>,

    /// (one-shot mode) The voter's last name.
    #[clap(short, long, value_parser)]
    pub last_name: Option<String>,

    /// (one-shot mode) The voter's ID.
    #[clap(short = 'i', long, value_parser)]
    pub voter_id: Option<String>,

    /// (one-shot mode, one of John, Alice, Bob) The selected candidate.
    #[clap(short, long, value_parser)]
    pub candidate: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
