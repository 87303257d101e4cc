use crate::prelude::{eprintln, *};
use blogroll_core::feed::Feed;
use blogroll_core::post::{Post, PostsResponse};

/// Path of the post collection on the backend
pub const DATA_PATH: &str = "/api/data";

pub fn data_url(base: &str) -> String {
    format!("{}{DATA_PATH}", base.trim_end_matches('/'))
}

/// Fetch the full post collection from `base`
pub async fn fetch_posts(client: &reqwest::Client, base: &str) -> Result<Vec<Post>, Error> {
    let url = data_url(base);
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Network(format!("{url}: {e}")))?;

    if !response.status().is_success() {
        return Err(Error::Status {
            status: response.status().as_u16(),
            url,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| Error::Network(format!("{url}: {e}")))?;

    let data: PostsResponse =
        serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))?;

    Ok(data.posts)
}

/// Build a feed from a single fetch
///
/// A failed fetch is logged and leaves the feed in the loading state. There
/// is no retry.
pub async fn init_feed(client: &reqwest::Client, global: &crate::Global) -> Feed {
    let mut feed = Feed::default();

    if global.verbose {
        eprintln!("Fetching posts from {}", data_url(&global.url));
    }

    match fetch_posts(client, &global.url).await {
        Ok(posts) => {
            log::debug!("fetched {} posts", posts.len());
            feed.load(posts);
        }
        Err(err) => log::error!("Error fetching data: {err}"),
    }

    feed
}
