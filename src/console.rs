use std::io::{self, BufRead, Write};

/// A line read from the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// One line, without its line terminator
    Line(String),
    /// Nothing left to read
    Exhausted,
}

/// Line oriented player I/O.
///
/// Reading never fails at end of input; that is reported as
/// [`Input::Exhausted`] so callers can end the game normally.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    /// Read the next line.
    ///
    /// # Example
    ///
    /// ```
    /// use hangman::console::{Console, Input};
    /// let mut console = Console::new(&b"W\r\n\nlast"[..], Vec::new());
    /// assert_eq!(console.read_line().unwrap(), Input::Line("W".into()));
    /// assert_eq!(console.read_line().unwrap(), Input::Line("".into()));
    /// assert_eq!(console.read_line().unwrap(), Input::Line("last".into()));
    /// assert_eq!(console.read_line().unwrap(), Input::Exhausted);
    /// ```
    pub fn read_line(&mut self) -> io::Result<Input> {
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(Input::Exhausted);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Input::Line(line))
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R, W: Write> Write for Console<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
