use split_join_config::ConfigError;
use split_join_engine::RangeError;
use split_join_engine::io::InputError;

/// Everything that ends a run with a non-zero exit status.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("2 args required, 1 optional: recieved {0}")]
    ArgumentCount(usize),
    #[error("invalid value for split_char: empty string")]
    EmptyDelimiter,
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("line {line}: {source}")]
    LineRange { line: usize, source: RangeError },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// True when stdout was closed by the reader, e.g. `split-join , : | head -1`.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
