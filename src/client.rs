use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
  config: Config,
}

impl Client {
  async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    let url = self.config.endpoint(path);

    tracing::debug!(%url, "fetching");

    let body = self
      .client
      .get(&url)
      .send()
      .await
      .with_context(|| format!("request to `{url}` failed"))?
      .error_for_status()
      .with_context(|| format!("`{url}` returned an error status"))?
      .bytes()
      .await
      .with_context(|| format!("could not read response from `{url}`"))?;

    parse_json(&body)
      .with_context(|| format!("`{url}` returned malformed JSON"))
  }

  pub(crate) async fn fetch_stats(&self) -> Result<Stats> {
    self.fetch("stats").await
  }

  pub(crate) async fn fetch_stories(&self) -> Result<Vec<Story>> {
    self.fetch("").await
  }

  pub(crate) async fn fetch_thread(&self, id: &str) -> Result<Thread> {
    self.fetch(&format!("thread/{id}")).await
  }

  pub(crate) fn new(config: Config) -> Self {
    Self {
      client: reqwest::Client::new(),
      config,
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, tokio::net::TcpListener};

  async fn serve(router: axum::Router) -> Client {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
      axum::serve(listener, router).await.unwrap();
    });

    Client::new(Config::new(&format!("http://{address}")))
  }

  #[tokio::test]
  async fn fetches_fixture_stories_in_order() {
    let client = serve(mock::router()).await;

    let stories = client.fetch_stories().await.unwrap();

    let expected = serde_json::from_str::<Vec<Story>>(mock::STORIES).unwrap();

    assert!(!stories.is_empty());
    assert_eq!(stories, expected);
  }

  #[tokio::test]
  async fn fetches_thread_for_id() {
    let client = serve(mock::router()).await;

    let thread = client.fetch_thread("42").await.unwrap();

    assert!(thread.has_comments());
  }

  #[tokio::test]
  async fn fetches_stats() {
    let client = serve(mock::router()).await;

    let stats = client.fetch_stats().await.unwrap();

    assert!(stats.items_cached > 0);
  }

  #[tokio::test]
  async fn error_status_is_a_failure() {
    let client = serve(axum::Router::new().route(
      "/",
      axum::routing::get(|| async { axum::http::StatusCode::NOT_FOUND }),
    ))
    .await;

    assert!(client.fetch_stories().await.is_err());
  }

  #[tokio::test]
  async fn malformed_json_is_a_failure() {
    let client = serve(
      axum::Router::new().route("/", axum::routing::get(|| async { "[{" })),
    )
    .await;

    assert!(client.fetch_stories().await.is_err());
  }

  #[tokio::test]
  async fn unreachable_host_is_a_failure() {
    let client = Client::new(Config::new("not a url"));

    assert!(client.fetch_stories().await.is_err());
  }
}
