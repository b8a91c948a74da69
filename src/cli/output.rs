//! Terminal reporting for release runs.
//!
//! Progress and results go to stdout and are silenced by `--quiet`; fatal
//! errors always go to stderr.

use crate::{
    bundler::{ReleaseArtifacts, ReleaseStep},
    error::BundlerError,
};
use std::{io::Write, path::Path};
use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Reports release progress and outcome to the terminal.
#[derive(Debug)]
pub struct OutputManager {
    stdout: BufferWriter,
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager for the given verbosity.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            stdout: BufferWriter::stdout(ColorChoice::Auto),
            verbose,
            quiet,
        }
    }

    /// Announces the project being released.
    pub fn banner(&self, project: &Path) {
        if self.quiet {
            return;
        }
        let mut buffer = self.stdout.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true));
        let _ = writeln!(buffer, "═══ macOS release: {} ═══", project.display());
        let _ = buffer.reset();
        self.flush(&buffer);
    }

    /// Shows `[n/total] <step>` before a step starts. Verbose only.
    pub fn step(&self, step: ReleaseStep) {
        if !self.verbose || self.quiet {
            return;
        }
        let total = ReleaseStep::ALL.len();
        let number = ReleaseStep::ALL
            .iter()
            .position(|s| *s == step)
            .map_or(total, |i| i + 1);

        let mut buffer = self.stdout.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)));
        let _ = write!(buffer, "[{number}/{total}]");
        let _ = buffer.reset();
        let _ = writeln!(buffer, " {step}...");
        self.flush(&buffer);
    }

    /// Prints the release directory and, when present, the DMG with its size
    /// and checksum. A missing DMG is reported as a warning.
    pub fn report(&self, artifacts: &ReleaseArtifacts) {
        if self.quiet {
            return;
        }
        let manifest = &artifacts.manifest;
        let mut buffer = self.stdout.buffer();

        marker(&mut buffer, "✓", Color::Green);
        let _ = writeln!(
            buffer,
            " {} {} released to {}",
            manifest.product_name,
            manifest.version,
            artifacts.release_dir.display()
        );

        match &artifacts.dmg {
            Some(dmg) => {
                marker(&mut buffer, "✓", Color::Green);
                let _ = writeln!(buffer, " DMG file ready! {}", dmg.path.display());
                let _ = writeln!(buffer, "    size:   {} bytes", dmg.size);
                let _ = writeln!(buffer, "    sha256: {}", dmg.checksum);
            }
            None => {
                marker(&mut buffer, "⚠", Color::Yellow);
                let _ = writeln!(
                    buffer,
                    " No DMG was produced; see the log above for the appdmg error"
                );
            }
        }

        self.flush(&buffer);
    }

    /// Prints a fatal error and its recovery suggestions to stderr.
    ///
    /// Shown even in quiet mode.
    pub fn fatal(&self, error: &BundlerError) {
        let stderr = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = stderr.buffer();

        marker(&mut buffer, "✗", Color::Red);
        let _ = writeln!(buffer, " Fatal error: {error}");

        let suggestions = error.recovery_suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(buffer, "\nRecovery suggestions:");
            for suggestion in suggestions {
                let _ = writeln!(buffer, "    {suggestion}");
            }
        }

        if stderr.print(&buffer).is_err() {
            eprintln!("Fatal error: {error}");
        }
    }

    fn flush(&self, buffer: &Buffer) {
        if let Err(e) = self.stdout.print(buffer) {
            log::debug!("Failed to write to stdout: {}", e);
        }
    }
}

fn marker(buffer: &mut Buffer, symbol: &str, color: Color) {
    let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = write!(buffer, "{symbol}");
    let _ = buffer.reset();
}
