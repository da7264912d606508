//! In-memory mock of the cutt.ly API endpoint.
//!
//! Serves the same single-GET protocol as the real service: `short`/`name`
//! query parameters shorten a link, `stats` queries click analytics, and all
//! outcomes travel as in-body status codes on an HTTP 200. One link is
//! pre-seeded with recorded clicks so stats answers can exercise both wire
//! shapes of `devices`/`refs` — the empty array for a fresh link and the
//! populated structure for the seeded one.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// The one API key the mock accepts.
pub const API_KEY: &str = "mock-api-key";

/// Domain the mock issues short links under.
pub const SHORT_DOMAIN: &str = "https://mock.ly";

/// Slug of the pre-seeded link that already has click data.
pub const SEEDED_SLUG: &str = "seed";

#[derive(Clone, Debug)]
pub struct ShortLink {
    pub full_link: String,
    pub date: String,
    pub title: String,
    pub clicks: u64,
}

pub type Db = Arc<RwLock<HashMap<String, ShortLink>>>;

#[derive(Debug, Deserialize)]
pub struct ApiQuery {
    key: Option<String>,
    short: Option<String>,
    name: Option<String>,
    stats: Option<String>,
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(seeded_links()));
    Router::new().route("/api.php", get(handle)).with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn seeded_links() -> HashMap<String, ShortLink> {
    HashMap::from([(
        SEEDED_SLUG.to_string(),
        ShortLink {
            full_link: "https://example.org/article".to_string(),
            date: "2024-01-05".to_string(),
            title: "Example article".to_string(),
            clicks: 42,
        },
    )])
}

/// A stats query carries the full short link; links are stored by slug.
fn slug_of(short_url: &str) -> &str {
    short_url.rsplit('/').next().unwrap_or(short_url)
}

async fn handle(State(db): State<Db>, Query(q): Query<ApiQuery>) -> Json<Value> {
    if let Some(long_url) = q.short.as_deref() {
        Json(shorten(&db, q.key.as_deref(), long_url, q.name.as_deref()).await)
    } else if let Some(short_url) = q.stats.as_deref() {
        Json(stats(&db, q.key.as_deref(), short_url).await)
    } else {
        Json(json!({}))
    }
}

async fn shorten(db: &Db, key: Option<&str>, long_url: &str, name: Option<&str>) -> Value {
    if key != Some(API_KEY) {
        return json!({"url": {"status": 4}});
    }
    if long_url.starts_with(SHORT_DOMAIN) {
        return json!({"url": {"status": 1}});
    }
    if !long_url.starts_with("http://") && !long_url.starts_with("https://") {
        return json!({"url": {"status": 2}});
    }

    let mut links = db.write().await;
    let slug = match name.filter(|n| !n.is_empty()) {
        Some(n) => n.to_string(),
        None => format!("s{}", links.len() + 1),
    };
    if links.contains_key(&slug) {
        return json!({"url": {"status": 3}});
    }

    let date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let title = format!("Title of {long_url}");
    links.insert(
        slug.clone(),
        ShortLink {
            full_link: long_url.to_string(),
            date: date.clone(),
            title: title.clone(),
            clicks: 0,
        },
    );
    json!({
        "url": {
            "status": 7,
            "fullLink": long_url,
            "date": date,
            "shortLink": format!("{SHORT_DOMAIN}/{slug}"),
            "title": title,
        }
    })
}

async fn stats(db: &Db, key: Option<&str>, short_url: &str) -> Value {
    if key != Some(API_KEY) {
        return json!({"stats": {"status": 2}});
    }
    let links = db.read().await;
    let slug = slug_of(short_url);
    let Some(link) = links.get(slug) else {
        return json!({"stats": {"status": 0}});
    };

    // Fresh links answer with the empty-array shape, clicked ones with the
    // populated structure, mirroring the real service's inconsistency.
    let (devices, refs) = if link.clicks == 0 {
        (json!([]), json!([]))
    } else {
        (
            json!({
                "dev": [
                    {"tag": "Desktop", "clicks": "30"},
                    {"tag": "Mobile", "clicks": "12"},
                ],
                "sys": [
                    {"tag": "Windows", "clicks": "22"},
                    {"tag": "Android", "clicks": "12"},
                    {"tag": "Linux", "clicks": "8"},
                ],
                "bro": [
                    {"tag": "Chrome", "clicks": "25"},
                    {"tag": "Firefox", "clicks": "17"},
                ],
            }),
            json!([
                {"link": "https://news.ycombinator.com/", "clicks": "28"},
                {"link": "https://reddit.com/", "clicks": "14"},
            ]),
        )
    };

    let short_link = format!("{SHORT_DOMAIN}/{slug}");
    json!({
        "url": {
            "status": 1,
            "fullLink": link.full_link,
            "date": link.date,
            "shortLink": short_link,
            "title": link.title,
        },
        "stats": {
            "status": 1,
            "clicks": link.clicks.to_string(),
            "date": link.date,
            "title": link.title,
            "fullLink": link.full_link,
            "shortLink": short_link,
            "facebook": 3,
            "twitter": 5,
            "pinterest": 0,
            "instagram": 1,
            "googlePlus": 0,
            "linkedin": 2,
            "rest": 31,
            "devices": devices,
            "refs": refs,
        }
    })
}
