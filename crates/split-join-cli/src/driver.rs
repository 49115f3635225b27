use std::io::Write;

use log::{debug, warn};
use split_join_config::{Config, RangeErrorPolicy};
use split_join_engine::LineProcessor;
use split_join_engine::io::InputError;

use crate::error::CliError;

/// Runs the line processor over an input source, writing one output line
/// per input line in order.
pub struct Driver {
    processor: LineProcessor,
    config: Config,
}

impl Driver {
    pub fn new(processor: LineProcessor, config: Config) -> Self {
        Self { processor, config }
    }

    pub fn run<I, L, W>(&self, lines: I, out: &mut W) -> Result<(), CliError>
    where
        I: IntoIterator<Item = Result<L, InputError>>,
        L: AsRef<str>,
        W: Write,
    {
        debug!(
            "processing with delimiter {:?}, range {}, on_range_error {}",
            self.processor.delimiter(),
            self.processor.range(),
            self.config.on_range_error
        );

        for (index, line) in lines.into_iter().enumerate() {
            let line = line?;
            let line = self.prepare(line.as_ref());
            let number = index + 1;

            match self.processor.process(line) {
                Ok(output) => writeln!(out, "{output}")?,
                Err(source) => match self.config.on_range_error {
                    RangeErrorPolicy::Abort => {
                        out.flush()?;
                        return Err(CliError::LineRange {
                            line: number,
                            source,
                        });
                    }
                    RangeErrorPolicy::Skip => {
                        warn!("line {number}: {source}; skipped");
                    }
                    RangeErrorPolicy::Blank => {
                        warn!("line {number}: {source}; printed blank");
                        writeln!(out)?;
                    }
                },
            }
        }

        out.flush()?;
        Ok(())
    }

    fn prepare<'a>(&self, line: &'a str) -> &'a str {
        if self.config.strip_carriage_return {
            line.strip_suffix('\r').unwrap_or(line)
        } else {
            line
        }
    }
}
