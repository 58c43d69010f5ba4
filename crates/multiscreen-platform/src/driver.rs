use std::io::{BufRead, Write};

use crate::{HeadlessApp, PlatformError, UiEvent};

const HELP: &str =
    "commands: click <label> | toggle <label> | type <hint>=<text> | back | show | stats | help | quit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Event(UiEvent),
    Show,
    Stats,
    Help,
    Quit,
}

/// Parse one driver line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, PlatformError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let unknown = || PlatformError::UnknownCommand {
        line: line.to_string(),
    };
    let cmd = match (verb, rest) {
        ("click", label) if !label.is_empty() => Command::Event(UiEvent::Click(label.into())),
        ("toggle", label) if !label.is_empty() => Command::Event(UiEvent::Toggle(label.into())),
        ("type", spec) => match spec.split_once('=') {
            Some((field, text)) if !field.trim().is_empty() => Command::Event(UiEvent::Input {
                field: field.trim().into(),
                text: text.into(),
            }),
            _ => return Err(unknown()),
        },
        ("back", "") => Command::Event(UiEvent::Back),
        ("show", "") => Command::Show,
        ("stats", "") => Command::Stats,
        ("help", "") => Command::Help,
        ("quit" | "exit", "") => Command::Quit,
        _ => return Err(unknown()),
    };
    Ok(Some(cmd))
}

/// Drive `app` with line commands from `input`, printing each new frame to `out`.
///
/// A back event nobody consumes ends the session, like leaving the root screen.
pub fn run_headless_app(
    mut app: HeadlessApp,
    input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<()> {
    print_frame(&mut app, &mut out)?;
    for line in input.lines() {
        let line = line?;
        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                continue;
            }
        };
        match cmd {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Show => print_frame(&mut app, &mut out)?,
            Command::Stats => print_stats(&app, &mut out)?,
            Command::Event(event) => match app.dispatch(event) {
                Ok(true) => print_frame(&mut app, &mut out)?,
                Ok(false) => {
                    log::info!("back at root, leaving");
                    break;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
        }
    }
    out.flush()?;
    Ok(())
}

fn print_frame(app: &mut HeadlessApp, out: &mut impl Write) -> std::io::Result<()> {
    let number = app.frame().number;
    writeln!(out, "--- frame {number} ---")?;
    writeln!(out, "{}", app.dump())
}

fn print_stats(app: &HeadlessApp, out: &mut impl Write) -> std::io::Result<()> {
    let inspector = app.inspector();
    let last = inspector.last_metrics().cloned().unwrap_or_default();
    writeln!(
        out,
        "frames: {}, avg build {:.2} ms, last: {} nodes, {} hit regions",
        inspector.frame_count(),
        inspector.average_build_ms(),
        last.scene_nodes,
        last.hit_regions
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiscreen_core::*;
    use multiscreen_ui::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_command("click Go to Settings").unwrap(),
            Some(Command::Event(UiEvent::Click("Go to Settings".into())))
        );
        assert_eq!(
            parse_command("  type Enter something=hello world ").unwrap(),
            Some(Command::Event(UiEvent::Input {
                field: "Enter something".into(),
                text: "hello world".into(),
            }))
        );
        assert_eq!(
            parse_command("type Enter something=").unwrap(),
            Some(Command::Event(UiEvent::Input {
                field: "Enter something".into(),
                text: String::new(),
            }))
        );
        assert_eq!(parse_command("back").unwrap(), Some(Command::Event(UiEvent::Back)));
        assert_eq!(parse_command("stats").unwrap(), Some(Command::Stats));
        assert_eq!(parse_command("# comment").unwrap(), None);
        assert_eq!(parse_command("").unwrap(), None);
        assert!(parse_command("click").is_err());
        assert!(parse_command("type nothing").is_err());
        assert!(parse_command("dance").is_err());
        assert!(parse_command("back now").is_err());
    }

    #[test]
    fn test_session_prints_frames() {
        let n = signal(0);
        let mut app = HeadlessApp::new({
            let n = n.clone();
            move || {
                Column(Modifier::new()).child((
                    Text(format!("n={}", n.get())),
                    Button("inc", {
                        let n = n.clone();
                        move || n.update(|v| *v += 1)
                    }),
                ))
            }
        });
        app.watch(&n);
        let input = "click inc\nbogus\nclick missing\nstats\nback\nclick inc\n";
        let mut out = Vec::new();
        run_headless_app(app, input.as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("--- frame 1 ---"));
        assert!(out.contains("--- frame 2 ---\nColumn\n  Text \"n=1\""));
        assert!(out.contains("error: unknown command `bogus`"));
        assert!(out.contains("error: no button labelled `missing` on screen"));
        assert!(out.contains("frames: 2, avg build"), "{out}");
        assert!(out.contains("last: 3 nodes, 1 hit regions"), "{out}");
        // unconsumed back ends the session before the last click
        assert_eq!(n.get(), 1);
    }
}
