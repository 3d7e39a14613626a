use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "extrablatt",
  version,
  about = "Read stories and comment threads in the terminal"
)]
pub(crate) struct Arguments {
  /// Base URL of the story API
  #[arg(long, env = "EXTRABLATT_API_URL", default_value = DEFAULT_API_URL)]
  pub(crate) api_url: String,
  /// Write logs to this file
  #[arg(long, env = "EXTRABLATT_LOG_FILE")]
  pub(crate) log_file: Option<PathBuf>,
  /// Path to open on startup, `/` or `/thread/<id>`
  #[arg(long, default_value = "/")]
  pub(crate) route: String,
  #[command(subcommand)]
  pub(crate) subcommand: Option<Subcommand>,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Subcommand {
  /// Serve fixture data for local development
  Mock {
    #[arg(long, default_value_t = DEFAULT_MOCK_PORT)]
    port: u16,
  },
}

impl Arguments {
  pub(crate) async fn run(self) -> Result {
    match self.subcommand {
      Some(Subcommand::Mock { port }) => {
        logging::init_stderr();
        mock::serve(port).await
      }
      None => {
        if let Some(path) = &self.log_file {
          logging::init_file(path)?;
        }

        let config = Config::new(&self.api_url);

        tracing::info!(api_url = config.base_url(), "starting reader");

        let client = Client::new(config);

        let mut terminal = initialize_terminal()?;

        let result = App::new(client, &self.route).run(&mut terminal);

        restore_terminal(&mut terminal)?;

        result
      }
    }
  }
}
