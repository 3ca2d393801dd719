//! Interactive resolution change: pick a display, enter a size, apply it.

use crate::cursor::display_at_cursor;
use crate::display::{DisplayApi, ModeRequest};
use crate::enumerate::list_displays;
use crate::error::{Error, Result};
use crate::resolution::change_resolution;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Run the interactive resolution prompt against `api`.
///
/// Reads answers from `input` and writes the listing, prompts and outcome to
/// `output`. Returns the outcome of the resolution change, or the reason the
/// session stopped before reaching it.
pub fn run_resolution_session<A, R, W>(api: &A, input: &mut R, output: &mut W) -> Result<()>
where
    A: DisplayApi,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Active displays:")?;
    let displays = list_displays(api);
    for display in &displays {
        writeln!(output, "  {} - {}", display.device_name, display.description)?;
    }

    if displays.is_empty() {
        writeln!(output, "No active displays found.")?;
        return Err(Error::EmptyDisplayList);
    }

    writeln!(output)?;
    for (i, display) in displays.iter().enumerate() {
        writeln!(output, "  {}. {}", i + 1, display.device_name)?;
    }
    writeln!(output)?;

    let names: Vec<&str> = displays.iter().map(|d| d.device_name.as_str()).collect();
    match display_at_cursor(api, names.as_slice()) {
        Ok(Some(name)) => writeln!(output, "Mouse cursor is on: {name}")?,
        Ok(None) => {}
        Err(e) => log::warn!("could not locate mouse cursor: {e}"),
    }
    writeln!(output)?;

    let count = displays.len();
    let choice: i64 = prompt(input, output, &format!("Select display (1-{count}): "))?;
    if choice < 1 || choice > count as i64 {
        writeln!(output, "Invalid selection.")?;
        return Err(Error::InvalidSelection { choice, count });
    }

    let selected = &displays[(choice - 1) as usize].device_name;
    writeln!(output, "Selected: {selected}")?;

    let width: u32 = prompt(input, output, "Enter desired width: ")?;
    let height: u32 = prompt(input, output, "Enter desired height: ")?;

    let request = ModeRequest::new(width, height).on_device(selected.clone());
    match change_resolution(api, &request) {
        Ok(()) => {
            writeln!(output, "Resolution changed to {width}x{height} successfully.")?;
            Ok(())
        }
        Err(e) => {
            writeln!(output, "Error: {e}")?;
            Err(e)
        }
    }
}

fn prompt<T, R, W>(input: &mut R, output: &mut W, message: &str) -> Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed",
        )));
    }

    let answer = line.trim();
    answer
        .parse()
        .map_err(|_| Error::InvalidNumber(answer.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Rect;
    use crate::testing::FakeDisplay;
    use std::io::Cursor;

    fn run(api: &FakeDisplay, answers: &str) -> (Result<()>, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = run_resolution_session(api, &mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    fn two_displays() -> FakeDisplay {
        FakeDisplay::new()
            .with_display("DISPLAY1", Rect::new(0, 0, 1920, 1080))
            .with_display("DISPLAY2", Rect::new(1920, 0, 1920, 1080))
    }

    #[test]
    fn test_select_second_display_and_apply() {
        let api = two_displays().with_cursor(2000, 10);
        let (result, output) = run(&api, "2\n1280\n720\n");

        assert!(result.is_ok());
        assert!(output.contains("  1. DISPLAY1\n  2. DISPLAY2\n"));
        assert!(output.contains("Mouse cursor is on: DISPLAY2"));
        assert!(output.contains("Selected: DISPLAY2"));
        assert!(output.contains("Resolution changed to 1280x720 successfully."));

        let calls = api.change_calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|c| c.0.as_deref() == Some("DISPLAY2")));
        assert!(calls.iter().all(|c| (c.1.width, c.1.height) == (1280, 720)));
    }

    #[test]
    fn test_empty_display_list_stops_before_prompting() {
        let api = FakeDisplay::new();
        let (result, output) = run(&api, "1\n800\n600\n");

        assert!(matches!(result, Err(Error::EmptyDisplayList)));
        assert!(output.contains("No active displays found."));
        assert!(!output.contains("Select display"));
        assert!(api.change_calls().is_empty());
    }

    #[test]
    fn test_out_of_range_selection() {
        let api = two_displays();
        let (result, output) = run(&api, "3\n");

        assert!(matches!(
            result,
            Err(Error::InvalidSelection { choice: 3, count: 2 })
        ));
        assert!(output.contains("Invalid selection."));
        assert!(!output.contains("Enter desired width"));

        let (result, _) = run(&api, "0\n");
        assert!(matches!(result, Err(Error::InvalidSelection { choice: 0, .. })));
    }

    #[test]
    fn test_non_numeric_answer() {
        let api = two_displays();
        let (result, _) = run(&api, "1\nwide\n");
        assert!(matches!(result, Err(Error::InvalidNumber(ref s)) if s == "wide"));
    }

    #[test]
    fn test_unsupported_mode_is_reported() {
        let api = two_displays().with_codes(-2, 0);
        let (result, output) = run(&api, "1\n7\n7\n");

        assert!(matches!(result, Err(Error::UnsupportedMode { .. })));
        assert!(output.contains("Error: Resolution 7x7 is not supported."));
        assert_eq!(api.change_calls().len(), 1);
    }

    #[test]
    fn test_missing_cursor_is_not_fatal() {
        let api = two_displays();
        let (result, output) = run(&api, "1\n1024\n768\n");
        assert!(result.is_ok());
        assert!(!output.contains("Mouse cursor is on"));
    }

    #[test]
    fn test_closed_input() {
        let api = two_displays();
        let (result, _) = run(&api, "");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
