//! Styled console I/O for the interactive session.
//!
//! [`Console`] wraps any `BufRead`/`Write` pair, so the session can run against
//! the real terminal or against in-memory buffers in tests. Colour and screen
//! clearing go through crossterm and can be switched off.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{style, Attribute, Color, ResetColor, SetForegroundColor, Stylize},
    terminal::{Clear, ClearType},
};
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Named styles for console text.
///
/// The session itself uses `Blue`, `Cyan`, `Green` and `Fail`; the rest
/// complete the palette for callers building their own screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Section banners.
    Header,
    /// Screen headers.
    Blue,
    /// User input echo.
    Cyan,
    /// Success messages.
    Green,
    /// Warnings.
    Warning,
    /// Error messages.
    Fail,
    /// Bold text.
    Bold,
    /// Underlined text.
    Underline,
}

impl Tone {
    /// Foreground colour of this tone, if it is a colour rather than an
    /// attribute.
    #[must_use]
    pub fn foreground(self) -> Option<Color> {
        match self {
            Self::Header => Some(Color::Magenta),
            Self::Blue => Some(Color::Blue),
            Self::Cyan => Some(Color::Cyan),
            Self::Green => Some(Color::Green),
            Self::Warning => Some(Color::Yellow),
            Self::Fail => Some(Color::Red),
            Self::Bold | Self::Underline => None,
        }
    }

    /// Apply this tone to `text` as ANSI escapes.
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        let content = style(text);
        let styled = match (self, self.foreground()) {
            (_, Some(color)) => content.with(color),
            (Self::Underline, None) => content.attribute(Attribute::Underlined),
            (_, None) => content.attribute(Attribute::Bold),
        };
        styled.to_string()
    }
}

/// A primitive the console can prompt for.
pub trait Prompted: FromStr {
    /// Type name shown when the user enters something unparseable.
    const TYPE_NAME: &'static str;
}

impl Prompted for i64 {
    const TYPE_NAME: &'static str = "int";
}

impl Prompted for f64 {
    const TYPE_NAME: &'static str = "float";
}

/// Console behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// Emit ANSI colour codes.
    pub color: bool,
    /// Clear the screen on [`Console::clear`].
    pub clear_screen: bool,
    /// Invalid answers allowed per prompt; 0 means unlimited.
    pub max_attempts: u32,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
            max_attempts: 0,
        }
    }
}

impl ConsoleOptions {
    /// Plain output: no colour, no clearing, unlimited attempts.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            color: false,
            clear_screen: false,
            max_attempts: 0,
        }
    }
}

/// Line-oriented console over a reader and a writer.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
    options: ConsoleOptions,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given streams.
    pub fn new(reader: R, writer: W, options: ConsoleOptions) -> Self {
        Self {
            reader,
            writer,
            options,
        }
    }

    /// The underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consume the console, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if self.options.color {
            tone.paint(text)
        } else {
            text.to_string()
        }
    }

    /// Clear the screen and home the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the console fails.
    pub fn clear(&mut self) -> Result<()> {
        if self.options.clear_screen {
            queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
            self.writer.flush()?;
        }
        Ok(())
    }

    /// Write a line of plain text.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the console fails.
    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    /// Write preformatted text as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the console fails.
    pub fn write_block(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Clear the screen and show a screen title followed by a blank line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the console fails.
    pub fn header(&mut self, title: &str) -> Result<()> {
        self.clear()?;
        let painted = self.paint(&format!("{title}\n"), Tone::Blue);
        self.line(&painted)
    }

    /// Show a success message preceded by a blank line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the console fails.
    pub fn success(&mut self, message: &str) -> Result<()> {
        let painted = self.paint(message, Tone::Green);
        self.line(&format!("\n{painted}"))
    }

    /// Show an error message.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the console fails.
    pub fn error(&mut self, message: &str) -> Result<()> {
        let painted = self.paint(message, Tone::Fail);
        self.line(&painted)
    }

    /// Show `prompt` and read one line, without its line terminator.
    ///
    /// User input is echoed in cyan when colour is on. Invalid UTF-8 is
    /// decoded lossily rather than reported as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] at end of input, or an I/O error.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.writer.write_all(prompt.as_bytes())?;
        if let (true, Some(echo)) = (self.options.color, Tone::Cyan.foreground()) {
            queue!(self.writer, SetForegroundColor(echo))?;
        }
        self.writer.flush()?;

        let mut raw = Vec::new();
        let read = self.reader.read_until(b'\n', &mut raw);

        if self.options.color {
            queue!(self.writer, ResetColor)?;
            self.writer.flush()?;
        }

        if read? == 0 {
            debug!("Input closed at prompt {prompt:?}");
            return Err(Error::InputClosed);
        }

        // Undecodable bytes become U+FFFD and fail parsing like any bad answer.
        let mut buf = String::from_utf8_lossy(&raw).into_owned();
        let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed_len);
        trace!("Read {buf:?}");
        Ok(buf)
    }

    /// Prompt until the answer parses as `T`.
    ///
    /// Surrounding whitespace is ignored. Each failure reports the expected
    /// type and asks again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyAttempts`] once the configured attempt limit is
    /// reached, [`Error::InputClosed`] at end of input, or an I/O error.
    pub fn prompt_parsed<T: Prompted>(&mut self, prompt: &str) -> Result<T> {
        let mut attempts = 0;
        loop {
            let answer = self.read_line(prompt)?;
            if let Ok(value) = answer.trim().parse::<T>() {
                return Ok(value);
            }

            attempts += 1;
            debug!("Rejected {answer:?} as {} (attempt {attempts})", T::TYPE_NAME);
            self.error(&format!(
                "O valor digitado deve ser do tipo {}.",
                T::TYPE_NAME
            ))?;

            if self.options.max_attempts != 0 && attempts >= self.options.max_attempts {
                return Err(Error::TooManyAttempts {
                    prompt: prompt.to_string(),
                    attempts,
                });
            }
        }
    }

    /// Wait for the user to press enter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] at end of input, or an I/O error.
    pub fn pause(&mut self) -> Result<()> {
        self.read_line("\nPressione <enter> para continuar...")?;
        Ok(())
    }
}
