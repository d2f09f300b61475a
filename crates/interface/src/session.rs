//! Session - 控制台问答会话
//!
//! 职责：
//! - 写提示语并立即 flush
//! - 按顺序读取三行输入
//! - 输出三行问候
//!
//! The session owns its reader, so the input is released when the session
//! is dropped, whether the run succeeded or failed.

use std::io::{BufRead, ErrorKind, Write};
use tracing::{debug, info};

use hola_core::{parse_age, prompts, GreeterError, Profile, Result};

/// Console session over an input/output pair
pub struct Session<R: BufRead, W: Write> {
    input: R,
    output: W,
    buffer: Vec<u8>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        debug!("console session opened");
        Self {
            input,
            output,
            buffer: Vec::new(),
        }
    }

    /// Write `prompt` (no newline) and read one full line of text.
    pub fn ask_line(&mut self, prompt: &str, field: &'static str) -> Result<String> {
        self.prompt(prompt)?;
        let line = self.read_line(field)?;
        debug!(field, "line read");
        Ok(line)
    }

    /// Write the age prompt and read the age.
    ///
    /// Blank lines are skipped before the number, as an integer read skips
    /// any whitespace. Only the first token of the line is used.
    pub fn ask_age(&mut self) -> Result<i32> {
        self.prompt(prompts::AGE)?;
        loop {
            let line = self.read_line("age")?;
            if line.trim().is_empty() {
                continue;
            }
            let age = parse_age(&line)?;
            debug!(age, "age read");
            return Ok(age);
        }
    }

    /// 按顺序收集三个回答
    pub fn collect_profile(&mut self) -> Result<Profile> {
        let name = self.ask_line(prompts::NAME, "name")?;
        let age = self.ask_age()?;
        let favorite_language = self.ask_line(prompts::FAVORITE_LANGUAGE, "favorite language")?;

        Ok(Profile {
            name,
            age,
            favorite_language,
        })
    }

    /// Write the three greeting lines, each newline-terminated.
    pub fn greet(&mut self, profile: &Profile) -> Result<()> {
        for line in profile.greeting_lines() {
            writeln!(self.output, "{}", line)?;
        }
        self.output.flush()?;
        info!("greeting written");
        Ok(())
    }

    /// Ask all questions, then greet.
    pub fn run(mut self) -> Result<Profile> {
        let profile = self.collect_profile()?;
        self.greet(&profile)?;
        Ok(profile)
    }

    fn prompt(&mut self, prompt: &str) -> Result<()> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line ended by `\n`, `\r\n` or a lone `\r`.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so free
    /// text never fails to read.
    fn read_line(&mut self, field: &'static str) -> Result<String> {
        self.buffer.clear();
        let mut terminated = false;

        loop {
            let available = match self.input.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if available.is_empty() {
                break;
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    let carriage_return = available[end] == b'\r';
                    self.buffer.extend_from_slice(&available[..end]);
                    self.input.consume(end + 1);
                    if carriage_return {
                        self.skip_line_feed()?;
                    }
                    terminated = true;
                    break;
                }
                None => {
                    let len = available.len();
                    self.buffer.extend_from_slice(available);
                    self.input.consume(len);
                }
            }
        }

        if !terminated && self.buffer.is_empty() {
            return Err(GreeterError::UnexpectedEof { field });
        }
        Ok(String::from_utf8_lossy(&self.buffer).into_owned())
    }

    // `\r\n` counts as one terminator
    fn skip_line_feed(&mut self) -> Result<()> {
        loop {
            match self.input.fill_buf() {
                Ok(next) => {
                    if next.first() == Some(&b'\n') {
                        self.input.consume(1);
                    }
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

impl<R: BufRead, W: Write> Drop for Session<R, W> {
    fn drop(&mut self) {
        debug!("console session closed");
    }
}

/// Run one greeter session over the given input and output.
pub fn run_greeter<R: BufRead, W: Write>(input: R, output: W) -> Result<Profile> {
    Session::new(input, output).run()
}
