use randpick::{Definition, Picker, format_report, sample};
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::debug;

pub const PROMPT: &str = "Press Enter to generate another, or Ctrl+C to quit...";
pub const FAREWELL: &str = "Goodbye!";

// ============================================================================
// Loop state machine
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    AwaitingInput,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    /// A line of input arrived; its content is ignored.
    Regenerate,
    /// The user pressed Ctrl+C.
    Interrupt,
    /// Standard input was closed.
    EndOfInput,
}

/// A loaded definition plus the randomness it is sampled with.
pub struct Session<P> {
    definition: Definition,
    picker: P,
    state: LoopState,
}

impl<P: Picker> Session<P> {
    pub fn new(definition: Definition, picker: P) -> Self {
        Self {
            definition,
            picker,
            state: LoopState::Terminated,
        }
    }

    /// Sample every category once and render the report.
    pub fn generate(&mut self) -> String {
        let results = sample(&self.definition, &mut self.picker);
        debug!(categories = results.len(), "generated picks");
        format_report(&self.definition, &results)
    }

    /// Print the first report. The loop only continues when the definition
    /// allows regenerating and the caller has not asked for a single report.
    pub fn start(&mut self, out: &mut impl Write, once: bool) -> io::Result<LoopState> {
        writeln!(out, "{}", self.generate())?;

        self.state = if self.definition.allow_regenerate && !once {
            writeln!(out, "\n{}", PROMPT)?;
            LoopState::AwaitingInput
        } else {
            LoopState::Terminated
        };
        out.flush()?;
        Ok(self.state)
    }

    pub fn handle(&mut self, event: LoopEvent, out: &mut impl Write) -> io::Result<LoopState> {
        if self.state == LoopState::Terminated {
            return Ok(self.state);
        }

        debug!(?event, "loop event");
        match event {
            LoopEvent::Regenerate => {
                writeln!(out, "\n{}", self.generate())?;
                writeln!(out, "\n{}", PROMPT)?;
            }
            LoopEvent::Interrupt | LoopEvent::EndOfInput => {
                writeln!(out, "\n\n{}", FAREWELL)?;
                self.state = LoopState::Terminated;
            }
        }
        out.flush()?;
        Ok(self.state)
    }
}

// ============================================================================
// Event sources
// ============================================================================

pub(crate) trait EventSource {
    async fn next_event(&mut self) -> io::Result<LoopEvent>;
}

#[cfg(unix)]
type Interrupts = tokio::signal::unix::Signal;

#[cfg(windows)]
type Interrupts = tokio::signal::windows::CtrlC;

#[cfg(unix)]
fn listen_for_interrupts() -> io::Result<Interrupts> {
    tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())
}

#[cfg(windows)]
fn listen_for_interrupts() -> io::Result<Interrupts> {
    tokio::signal::windows::ctrl_c()
}

/// Enter presses from stdin, racing against Ctrl+C.
///
/// The interrupt listener is registered on construction and lives as long
/// as the source, so a Ctrl+C between two reads is queued rather than lost.
pub struct TerminalEvents {
    lines: Lines<BufReader<Stdin>>,
    interrupts: Interrupts,
}

impl TerminalEvents {
    /// Must be called from inside a tokio runtime with signals enabled.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            interrupts: listen_for_interrupts()?,
        })
    }
}

impl EventSource for TerminalEvents {
    async fn next_event(&mut self) -> io::Result<LoopEvent> {
        // A line that is already buffered wins over a pending interrupt.
        tokio::select! {
            biased;
            line = self.lines.next_line() => match line? {
                Some(_) => Ok(LoopEvent::Regenerate),
                None => Ok(LoopEvent::EndOfInput),
            },
            _ = self.interrupts.recv() => Ok(LoopEvent::Interrupt),
        }
    }
}

/// Print the first report, then regenerate on every event until terminated.
pub(crate) async fn drive<P: Picker>(
    session: &mut Session<P>,
    events: &mut impl EventSource,
    out: &mut impl Write,
    once: bool,
) -> io::Result<()> {
    let mut state = session.start(out, once)?;
    while state == LoopState::AwaitingInput {
        let event = events.next_event().await?;
        state = session.handle(event, out)?;
    }
    Ok(())
}
