mod records;
use log::debug;

pub use crate::records::*;

/// Runs the kiosk validation sequence for one submission.
///
/// Arguments:
/// * `roster` the eligibility roster, one record per registered voter
/// * `ballot_log` the records of voters who have already cast a ballot,
/// in the order they voted
/// * `request` the submission to evaluate
///
/// The checks are strictly ordered: eligibility, then prior vote, then
/// candidate selection. A later check never runs when an earlier one has
/// already rejected the submission. Both lookups are full linear scans with
/// first-match semantics; duplicate roster rows are not detected here.
///
/// The function is pure: committing a `Success` to the ballot log is the
/// caller's responsibility. Every other outcome leaves the log untouched.
pub fn evaluate(
    roster: &[VoterRecord],
    ballot_log: &[VoterRecord],
    request: &VoteRequest,
) -> Outcome {
    let voter = &request.voter;
    debug!(
        "evaluate: roster size {:?}, ballot log size {:?}, request {:?}",
        roster.len(),
        ballot_log.len(),
        request
    );

    let is_eligible = roster.iter().any(|r| r == voter);
    if !is_eligible {
        debug!("evaluate: no roster match for {:?}", voter);
        return Outcome::NotEligible;
    }

    let has_voted = ballot_log.iter().any(|r| r == voter);
    if has_voted {
        debug!("evaluate: ballot log already contains {:?}", voter);
        return Outcome::AlreadyVoted;
    }

    match request.candidate {
        None => Outcome::NoCandidateSelected,
        Some(candidate) => {
            debug!("evaluate: accepting vote for {:?}", candidate);
            Outcome::Success
        }
    }
}
