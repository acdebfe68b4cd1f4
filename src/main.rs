use log::info;

use clap::Parser;
use snafu::{prelude::*, ErrorCompat};

use ballot_core::*;

mod args;
mod kiosk;

use crate::args::Args;
use crate::kiosk::{KioskResult, VoteProcessor};

fn run(args: &Args) -> KioskResult<()> {
    let processor = VoteProcessor::new(&args.voters, &args.ballot_log);

    if args.first_name.is_none() && args.last_name.is_none() && args.voter_id.is_none() {
        return kiosk::run_session(&processor);
    }

    // One-shot submission from the command line flags.
    let first = args.first_name.as_deref().unwrap_or("").trim();
    let last = args.last_name.as_deref().unwrap_or("").trim();
    let id = args.voter_id.as_deref().unwrap_or("").trim();
    if first.is_empty() || last.is_empty() || id.is_empty() {
        println!("Please fill in all fields.");
        return Ok(());
    }

    let candidate = match args.candidate.as_deref().map(|s| s.trim()) {
        None | Some("") => None,
        Some(s) => match s.parse::<Candidate>() {
            Ok(c) => Some(c),
            Err(e) => whatever!("{}", e),
        },
    };

    let request = VoteRequest {
        voter: VoterRecord::new(first, last, id),
        candidate,
    };
    let outcome = processor.submit_vote(&request)?;
    println!("{}", outcome.message());
    Ok(())
}

fn main() {
    let args = Args::parse();
    if args.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }
    info!("args: {:?}", args);

    if let Err(e) = run(&args) {
        eprintln!("An error occured {}", e);
        if let Some(bt) = ErrorCompat::backtrace(&e) {
            eprintln!("trace: {}", bt);
        }
        std::process::exit(1);
    }
}
