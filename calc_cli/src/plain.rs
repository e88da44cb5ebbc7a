//! Line-oriented front end.
//!
//! Each input line is a run of keypad characters (`7+3=`) or one word
//! command (`clear`, `safe off`). Emissions are printed as text or as JSON
//! lines. `quit` or end of input stops the session.

use std::io::{BufRead, Write};

use anyhow::Result;
use calc_core::engine::Engine;
use calc_core::errors::CalcError;
use calc_core::keys::Key;
use calc_core::render::{Emission, Presenter, RecordingPresenter, Render};
use calc_core::settings::Settings;
use serde_json::json;
use tracing::warn;

/// How emissions are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
}

/// Run a session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    mut engine: Engine,
    settings: &Settings,
    input: R,
    mut out: W,
    output: Output,
) -> Result<()> {
    let mut presenter = RecordingPresenter::default();

    // Initial screen, as a freshly opened calculator shows it
    if settings.show_status {
        presenter.render_status(&engine.status());
    }
    presenter.render(&Render::display_only(engine.entry()));
    write_emissions(&mut out, presenter.drain(), output, settings)?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            break;
        }

        if let Err(err) = run_line(&mut engine, trimmed, &mut presenter) {
            warn!(line = trimmed, error = %err, "input rejected");
            write_error(&mut out, &err, output)?;
            continue;
        }
        write_emissions(&mut out, presenter.drain(), output, settings)?;
    }

    out.flush()?;
    Ok(())
}

fn run_line(engine: &mut Engine, line: &str, presenter: &mut RecordingPresenter) -> Result<(), CalcError> {
    for key in Key::parse_line(line)? {
        engine.dispatch(key, presenter)?;
    }
    Ok(())
}

fn write_emissions<W: Write>(out: &mut W, emissions: Vec<Emission>, output: Output, settings: &Settings) -> Result<()> {
    for emission in emissions {
        match output {
            Output::Json => writeln!(out, "{}", serde_json::to_string(&emission)?)?,
            Output::Text => match emission {
                Emission::Render(render) => {
                    writeln!(out, "{}", render.display)?;
                    if !render.note.is_empty() {
                        writeln!(out, "  ({})", render.note)?;
                    }
                }
                Emission::Status(status) if settings.show_status => {
                    writeln!(out, "[Safe division: {}]", status.label)?;
                }
                Emission::Status(_) => {}
            },
        }
    }
    Ok(())
}

fn write_error<W: Write>(out: &mut W, err: &CalcError, output: Output) -> Result<()> {
    match output {
        Output::Json => {
            let line = json!({
                "kind": "error",
                "code": err.error_code(),
                "message": err.to_string(),
            });
            writeln!(out, "{}", line)?;
        }
        Output::Text => writeln!(out, "! {}", err)?,
    }
    Ok(())
}
