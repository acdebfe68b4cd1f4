// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;
use std::str::FromStr;

/// The identity of a voter, as it appears both in the eligibility roster
/// and in the ballot log.
///
/// Matching is exact and case-sensitive on all three fields jointly. The
/// core performs no normalization: trimming whitespace is the caller's
/// responsibility, before the fields reach this type.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct VoterRecord {
    pub first_name: String,
    pub last_name: String,
    pub voter_id: String,
}

impl VoterRecord {
    pub fn new(first_name: &str, last_name: &str, voter_id: &str) -> VoterRecord {
        VoterRecord {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            voter_id: voter_id.to_string(),
        }
    }
}

/// The candidates on the ballot for this station.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Candidate {
    John,
    Alice,
    Bob,
}

impl Candidate {
    pub const ALL: [Candidate; 3] = [Candidate::John, Candidate::Alice, Candidate::Bob];

    pub fn name(&self) -> &'static str {
        match self {
            Candidate::John => "John",
            Candidate::Alice => "Alice",
            Candidate::Bob => "Bob",
        }
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error when parsing a candidate name that is not on the ballot.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct UnknownCandidate {
    pub name: String,
}

impl Error for UnknownCandidate {}

impl Display for UnknownCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "not a candidate on this ballot: {}", self.name)
    }
}

impl FromStr for Candidate {
    type Err = UnknownCandidate;

    // Exact names only, matching the ballot labels.
    fn from_str(s: &str) -> Result<Candidate, UnknownCandidate> {
        Candidate::ALL
            .iter()
            .find(|c| c.name() == s)
            .copied()
            .ok_or(UnknownCandidate {
                name: s.to_string(),
            })
    }
}

/// One submission attempt. Ephemeral: nothing of it is persisted except the
/// voter identity, and only on a successful vote.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct VoteRequest {
    pub voter: VoterRecord,
    pub candidate: Option<Candidate>,
}

// ******** Output data structures *********

/// The categorical result of a submission attempt, returned to the caller
/// for display. All four values are expected, non-exceptional results;
/// storage failures are reported separately by the caller's store layer.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Outcome {
    /// The vote was accepted and must be committed to the ballot log.
    Success,
    /// No roster record matches the supplied identity.
    NotEligible,
    /// A ballot-log record already matches the supplied identity.
    AlreadyVoted,
    /// The identity checks passed but no candidate was selected.
    NoCandidateSelected,
}

impl Outcome {
    /// The status line a kiosk front end shows for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Success => "Thank you for Voting.",
            Outcome::NotEligible => "You are not eligible to vote.",
            Outcome::AlreadyVoted => "You have already voted.",
            Outcome::NoCandidateSelected => "Please select a candidate.",
        }
    }

    /// Whether a front end should clear its input fields after showing this
    /// outcome. `NoCandidateSelected` keeps the fields so the voter can
    /// correct the submission; every other outcome ends the session for
    /// that voter.
    pub fn clears_inputs(&self) -> bool {
        !matches!(self, Outcome::NoCandidateSelected)
    }
}
