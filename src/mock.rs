use super::*;

pub(crate) const STATS: &str = include_str!("../mocks/stats.json");
pub(crate) const STORIES: &str = include_str!("../mocks/stories.json");
pub(crate) const THREAD: &str = include_str!("../mocks/thread.json");

fn json(body: &'static str) -> impl IntoResponse {
  ([(header::CONTENT_TYPE, "application/json")], body)
}

pub(crate) fn router() -> Router {
  Router::new()
    .route("/", get(|| async { json(STORIES) }))
    .route("/stats", get(|| async { json(STATS) }))
    .route(
      "/thread/{id}",
      get(|AxumPath(id): AxumPath<String>| async move {
        tracing::debug!(%id, "serving thread fixture");
        json(THREAD)
      }),
    )
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
}

pub(crate) async fn serve(port: u16) -> Result {
  let address = SocketAddr::from(([127, 0, 0, 1], port));

  let listener = TcpListener::bind(address)
    .await
    .with_context(|| format!("could not bind mock server to {address}"))?;

  tracing::info!("mock api listening at http://{address}");

  axum::serve(listener, router())
    .await
    .context("mock server failed")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fixtures_parse() {
    let stories = serde_json::from_str::<Vec<Story>>(STORIES).unwrap();

    assert!(stories.iter().any(|story| story.is_hot));
    assert!(stories.iter().any(|story| story.preview_image.is_none()));
    assert!(stories.iter().any(|story| story.title.chars().count() > 50));

    let thread = serde_json::from_str::<Thread>(THREAD).unwrap();

    assert!(thread.comments.iter().any(Thread::has_comments));

    serde_json::from_str::<Stats>(STATS).unwrap();
  }

  #[tokio::test]
  async fn thread_route_ignores_id() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
      axum::serve(listener, router()).await.unwrap();
    });

    let client = Client::new(Config::new(&format!("http://{address}")));

    assert_eq!(
      client.fetch_thread("1").await.unwrap(),
      client.fetch_thread("anything").await.unwrap()
    );
  }
}
