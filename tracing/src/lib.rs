use tracing::Level;
use tracing_subscriber::{
    filter::FromEnvError, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Init(#[from] tracing_subscriber::util::TryInitError),

    #[error("invalid RUST_LOG: {0}")]
    Filter(#[from] FromEnvError),
}

#[derive(Clone, Debug)]
pub struct TracingHandle {
    _priv: (),
}

impl TracingHandle {
    /// Returns a writer for [std::io::Stdout], where program output goes.
    /// Logs are written to stderr, so they never interleave with it.
    ///
    /// Instead of `println!(...)` prefer `writeln!(handle.get_stdout_writer(), ...)`
    pub fn get_stdout_writer(&self) -> std::io::Stdout {
        std::io::stdout()
    }

    /// Returns a writer for [std::io::Stderr], shared with the log output.
    pub fn get_stderr_writer(&self) -> std::io::Stderr {
        std::io::stderr()
    }
}

pub struct TracingBuilder {
    level: Level,
}

impl Default for TracingBuilder {
    fn default() -> Self {
        TracingBuilder { level: Level::INFO }
    }
}

impl TracingBuilder {
    /// Set the log level for the stderr layer. RUST_LOG still has a higher
    /// priority over this value.
    pub fn level(mut self, level: Level) -> TracingBuilder {
        self.level = level;
        self
    }

    /// This will setup tracing based on the configuration passed in.
    /// It will setup a stderr writer output layer and a EnvFilter based on the provided log
    /// level (RUST_LOG still has a higher priority over the configured value).
    ///
    /// Fails if RUST_LOG can't be parsed, or a global subscriber was already
    /// installed.
    pub fn build(self) -> Result<TracingHandle, Error> {
        tracing_subscriber::registry()
            .with(
                EnvFilter::builder()
                    .with_default_directive(self.level.into())
                    .from_env()?,
            )
            .with(
                tracing_subscriber::fmt::Layer::new()
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()?;

        Ok(TracingHandle { _priv: () })
    }
}

#[cfg(test)]
mod tests {
    use super::TracingBuilder;
    use tracing::Level;

    #[test]
    fn build_only_once() {
        TracingBuilder::default()
            .level(Level::DEBUG)
            .build()
            .expect("first init must succeed");

        assert!(
            TracingBuilder::default().build().is_err(),
            "a second global subscriber must be rejected"
        );
    }
}
