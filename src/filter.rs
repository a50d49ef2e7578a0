use crate::diagnostics::Diagnostics;
use crate::input::RegistrationInput;
use crate::registration::Registration;
use anyhow::Result;
use std::io::Write;

/// What a single pass over the input produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The input was empty; only the diagnostic was written.
    NoJson,
    /// The extracted identifier, as written to `out`.
    AppId(String),
}

/// Extracts `appId` from `input`, writing the diagnostic line to `err` and
/// the bare identifier to `out`.
///
/// Empty input is the only condition handled here. Malformed JSON and a
/// missing `appId` are returned as errors before anything is written, so
/// `out` stays empty on every failure.
pub fn run<O: Write, E: Write>(
    input: &RegistrationInput,
    diagnostics: &Diagnostics,
    out: &mut O,
    err: &mut E,
) -> Result<Outcome> {
    if input.is_empty() {
        writeln!(err, "{}", diagnostics.no_json())?;
        err.flush()?;
        return Ok(Outcome::NoJson);
    }

    let registration = Registration::decode(&input.raw)?;
    let id = registration.app_id_text();

    writeln!(err, "{}", diagnostics.app_id(&id))?;
    err.flush()?;
    writeln!(out, "{id}")?;
    out.flush()?;

    Ok(Outcome::AppId(id))
}
