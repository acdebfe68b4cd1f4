use log::{debug, info};

use ballot_core::*;
use snafu::{prelude::*, Snafu};

use std::io;
use std::io::{BufRead, Write};

pub mod store_csv;

/// Storage-level failures. These are deployment or configuration faults,
/// kept separate from the four business [`Outcome`] values: a missing or
/// unreadable store must never read as "not eligible" or "has not voted".
#[derive(Debug, Snafu)]
pub enum KioskError {
    #[snafu(display("Error opening record store {path}"))]
    StoreOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading a record from store {path}"))]
    StoreRow { source: csv::Error, path: String },
    #[snafu(display("Error opening ballot log {path} for append"))]
    LogAppendOpen {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error appending to ballot log {path}"))]
    LogAppend { source: csv::Error, path: String },
    #[snafu(display("Error flushing ballot log {path}"))]
    LogFlush {
        source: std::io::Error,
        path: String,
    },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type KioskResult<T> = Result<T, KioskError>;

/// The station's validation-and-logging sequence, bound to the two record
/// stores: the eligibility roster (read-only) and the ballot log
/// (append-only).
pub struct VoteProcessor {
    roster_path: String,
    log_path: String,
}

impl VoteProcessor {
    pub fn new(roster_path: &str, log_path: &str) -> VoteProcessor {
        VoteProcessor {
            roster_path: roster_path.to_string(),
            log_path: log_path.to_string(),
        }
    }

    /// Evaluates one submission and, on [`Outcome::Success`], appends the
    /// voter to the ballot log. Both stores are re-read in full on every
    /// call: the datasets are small and a kiosk session is interactive, so
    /// nothing is cached across calls.
    pub fn submit_vote(&self, request: &VoteRequest) -> KioskResult<Outcome> {
        let roster = store_csv::read_records(&self.roster_path)?;
        let ballot_log = store_csv::read_records(&self.log_path)?;

        let outcome = evaluate(&roster, &ballot_log, request);
        debug!("submit_vote: outcome {:?} for {:?}", outcome, request.voter);

        // The append is the last step of a submission: all the other paths
        // are pure reads and no partial commit can occur.
        if outcome == Outcome::Success {
            store_csv::append_record(&self.log_path, &request.voter)?;
            info!(
                "submit_vote: recorded ballot for {} {} ({})",
                request.voter.first_name, request.voter.last_name, request.voter.voter_id
            );
        }
        Ok(outcome)
    }
}

/// Runs the interactive kiosk session on standard input until end of input.
///
/// Every field is trimmed before it reaches the processor, and a submission
/// with any empty identity field is short-circuited without touching the
/// stores. After an outcome that asks for correction the identity fields are
/// retained and only the candidate is prompted again; after every other
/// outcome the form starts over for the next voter.
pub fn run_session(processor: &VoteProcessor) -> KioskResult<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut retained: Option<VoterRecord> = None;

    loop {
        let voter = match retained.take() {
            Some(v) => v,
            None => {
                let first = match prompt(&mut lines, "First name: ")? {
                    Some(s) => s,
                    None => return Ok(()),
                };
                let last = match prompt(&mut lines, "Last name: ")? {
                    Some(s) => s,
                    None => return Ok(()),
                };
                let id = match prompt(&mut lines, "Voter ID: ")? {
                    Some(s) => s,
                    None => return Ok(()),
                };
                if first.is_empty() || last.is_empty() || id.is_empty() {
                    println!("Please fill in all fields.");
                    continue;
                }
                VoterRecord::new(&first, &last, &id)
            }
        };

        let selection = match prompt(&mut lines, "Candidate (John, Alice or Bob): ")? {
            Some(s) => s,
            None => return Ok(()),
        };
        let candidate = match selection.as_str() {
            "" => None,
            s => match s.parse::<Candidate>() {
                Ok(c) => Some(c),
                Err(e) => {
                    println!("{}", e);
                    None
                }
            },
        };

        let request = VoteRequest { voter, candidate };
        let outcome = processor.submit_vote(&request)?;
        println!("{}", outcome.message());
        if !outcome.clears_inputs() {
            retained = Some(request.voter);
        }
    }
}

fn prompt<B: BufRead>(
    lines: &mut std::io::Lines<B>,
    label: &str,
) -> KioskResult<Option<String>> {
    print!("{}", label);
    let _ = io::stdout().flush();
    match lines.next() {
        None => Ok(None),
        Some(Err(e)) => whatever!("Error reading from standard input: {:?}", e),
        Some(Ok(s)) => Ok(Some(s.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_store(dir: &Path, name: &str, rows: &[&str]) -> String {
        let path = dir.join(name);
        let mut contents = String::from("First Name,Last Name,ID\n");
        for r in rows {
            contents.push_str(r);
            contents.push('\n');
        }
        fs::write(&path, contents).unwrap();
        path.display().to_string()
    }

    fn request(first: &str, last: &str, id: &str, candidate: Option<Candidate>) -> VoteRequest {
        VoteRequest {
            voter: VoterRecord::new(first, last, id),
            candidate,
        }
    }

    #[test]
    fn success_appends_exactly_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let roster = write_store(dir.path(), "eligible_voters.csv", &["John,Smith,100"]);
        let log = write_store(dir.path(), "voters_log.csv", &[]);
        let processor = VoteProcessor::new(&roster, &log);

        let outcome = processor
            .submit_vote(&request("John", "Smith", "100", Some(Candidate::Alice)))
            .unwrap();
        assert_eq!(outcome, Outcome::Success);

        let rows = store_csv::read_records(&log).unwrap();
        assert_eq!(rows, vec![VoterRecord::new("John", "Smith", "100")]);
    }

    #[test]
    fn appended_row_is_headerless_and_at_the_end() {
        let dir = tempfile::tempdir().unwrap();
        let roster = write_store(dir.path(), "eligible_voters.csv", &["John,Smith,100"]);
        let log = write_store(dir.path(), "voters_log.csv", &["Ann,Lee,42"]);
        let processor = VoteProcessor::new(&roster, &log);

        processor
            .submit_vote(&request("John", "Smith", "100", Some(Candidate::Bob)))
            .unwrap();

        let contents = fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec!["First Name,Last Name,ID", "Ann,Lee,42", "John,Smith,100"]
        );
    }

    #[test]
    fn resubmission_is_rejected_without_growth() {
        let dir = tempfile::tempdir().unwrap();
        let roster = write_store(dir.path(), "eligible_voters.csv", &["John,Smith,100"]);
        let log = write_store(dir.path(), "voters_log.csv", &[]);
        let processor = VoteProcessor::new(&roster, &log);

        let first = processor
            .submit_vote(&request("John", "Smith", "100", Some(Candidate::Alice)))
            .unwrap();
        assert_eq!(first, Outcome::Success);
        let second = processor
            .submit_vote(&request("John", "Smith", "100", Some(Candidate::Alice)))
            .unwrap();
        assert_eq!(second, Outcome::AlreadyVoted);

        let rows = store_csv::read_records(&log).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn not_eligible_leaves_the_log_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let roster = write_store(dir.path(), "eligible_voters.csv", &["John,Smith,100"]);
        let log = write_store(dir.path(), "voters_log.csv", &[]);
        let processor = VoteProcessor::new(&roster, &log);

        let outcome = processor
            .submit_vote(&request("X", "Y", "999", Some(Candidate::Bob)))
            .unwrap();
        assert_eq!(outcome, Outcome::NotEligible);
        assert!(store_csv::read_records(&log).unwrap().is_empty());
    }

    #[test]
    fn roster_matching_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        let roster = write_store(dir.path(), "eligible_voters.csv", &["Ann,Lee,42"]);
        let log = write_store(dir.path(), "voters_log.csv", &[]);
        let processor = VoteProcessor::new(&roster, &log);

        let outcome = processor
            .submit_vote(&request("ann", "lee", "42", Some(Candidate::John)))
            .unwrap();
        assert_eq!(outcome, Outcome::NotEligible);
    }

    #[test]
    fn candidate_omission_leaves_the_log_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let roster = write_store(dir.path(), "eligible_voters.csv", &["Ann,Lee,42"]);
        let log = write_store(dir.path(), "voters_log.csv", &[]);
        let processor = VoteProcessor::new(&roster, &log);

        let outcome = processor.submit_vote(&request("Ann", "Lee", "42", None)).unwrap();
        assert_eq!(outcome, Outcome::NoCandidateSelected);
        assert!(store_csv::read_records(&log).unwrap().is_empty());
    }

    #[test]
    fn missing_roster_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let log = write_store(dir.path(), "voters_log.csv", &[]);
        let missing = dir.path().join("no_such_file.csv").display().to_string();
        let processor = VoteProcessor::new(&missing, &log);

        let res = processor.submit_vote(&request("John", "Smith", "100", Some(Candidate::Bob)));
        assert!(res.is_err());
    }

    #[test]
    fn missing_log_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let roster = write_store(dir.path(), "eligible_voters.csv", &["John,Smith,100"]);
        let missing = dir.path().join("no_such_file.csv").display().to_string();
        let processor = VoteProcessor::new(&roster, &missing);

        let res = processor.submit_vote(&request("John", "Smith", "100", Some(Candidate::Bob)));
        assert!(res.is_err());
    }
}
