use super::*;

fn env_filter() -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// The terminal belongs to the UI while the reader runs, so its logs go to a
/// file instead.
pub(crate) fn init_file(path: &Path) -> Result {
  let file = fs::OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("could not open log file `{}`", path.display()))?;

  tracing_subscriber::registry()
    .with(env_filter())
    .with(
      tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file)),
    )
    .try_init()
    .context("could not install logger")
}

pub(crate) fn init_stderr() {
  tracing_subscriber::registry()
    .with(env_filter())
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();
}
