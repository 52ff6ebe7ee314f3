use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::Path;

use crate::club::ClubId;
use crate::config::Settings;
use crate::error::{ErrorKind, Result};
use crate::fetcher::Fetcher;
use crate::output;

const DEFAULT_PROGRAM: &str = env!("CARGO_PKG_NAME");

fn program_name(arg0: Option<&OsStr>) -> String {
    arg0.and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}

fn fetch_matches<W>(args: &[OsString], settings: &Settings, stdout: W) -> Result
where
    W: Write,
{
    if args.len() != 2 {
        let program = program_name(args.first().map(OsString::as_os_str));
        return Err(ErrorKind::Usage(program).into());
    }

    // A club id that is not UTF-8 cannot be put in the query.
    let club_id = args[1].to_str().ok_or(ErrorKind::InvalidClubId)?;
    let club_id = ClubId::new(club_id)?;
    let matches = Fetcher::new(settings.clone()).fetch(&club_id)?;
    output::write_json(stdout, &matches)
}

/// Run the command line program and return its exit code.
///
/// `args` includes the program name and may hold arguments that are not UTF-8. The match data
/// goes to `stdout`; any failure is written to `stderr` as `{"error": ...}` and yields exit code 1.
pub fn run<I, A, O, E>(args: I, settings: &Settings, stdout: O, mut stderr: E) -> i32
where
    I: IntoIterator<Item = A>,
    A: Into<OsString>,
    O: Write,
    E: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    match fetch_matches(&args, settings, stdout) {
        Ok(()) => 0,
        Err(err) => {
            if err.is_request_failure() {
                warn!("request to the upstream API failed: {:?}", err);
            } else {
                debug!("fetch failed: {:?}", err);
            }
            if let Err(e) = output::write_error(&mut stderr, &err) {
                error!("could not report failure: {}", e);
            }
            1
        }
    }
}
