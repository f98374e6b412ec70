use std::io::{BufRead, Write};

use crate::domain::ProductForm;
use crate::errors::TrackerResult;

/// Fills a `ProductForm` line by line. An empty answer keeps the current value.
pub struct FormPrompt<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> FormPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns `false` when the user quits ('q' or end of input at the name prompt)
    pub fn fill(&mut self, form: &mut ProductForm) -> TrackerResult<bool> {
        let name = match self.ask("Name", &form.name)? {
            Some(name) if name.eq_ignore_ascii_case("q") => return Ok(false),
            Some(name) => name,
            None => return Ok(false),
        };
        form.name = name;

        let Some(url) = self.ask("URL", &form.url)? else {
            return Ok(false);
        };
        form.url = url;

        let Some(price) = self.ask("Price", &form.price)? else {
            return Ok(false);
        };
        form.price = price;

        Ok(true)
    }

    /// `None` on end of input
    fn ask(&mut self, label: &str, current: &str) -> TrackerResult<Option<String>> {
        if current.is_empty() {
            write!(self.output, "{}: ", label)?;
        } else {
            write!(self.output, "{} [{}]: ", label, current)?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        if answer.trim().is_empty() {
            return Ok(Some(current.to_string()));
        }
        Ok(Some(answer.to_string()))
    }
}
