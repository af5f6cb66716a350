//! Community Directory CLI
//!
//! Loads the full member directory page by page (simulated scrolling),
//! optionally narrows it with a search term, and prints the result.
//!
//! Usage: `community-directory [search term]`

use community_directory::{Config, CurrentUser, Directory, FetchState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Community directory client");
    tracing::info!("Backend: {}", config.backend_url);
    tracing::info!("Page size: {}", config.page_size);

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let current_user = std::env::var("COMMUNITY_USER_EMAIL")
        .ok()
        .filter(|e| !e.is_empty())
        .map(|email| CurrentUser { email });

    let mut directory = Directory::mount(&config, current_user)?;
    directory.load_first_page().await;

    // Drive the sentinel as if the tail kept scrolling into view, until the
    // backend runs out of pages or a fetch fails.
    loop {
        match directory.fetch_state().clone() {
            FetchState::Idle => {
                directory.sentinel_visible(false).await;
                directory.sentinel_visible(true).await;
            }
            FetchState::Exhausted => break,
            FetchState::Errored(msg) => {
                tracing::error!("Stopped after fetch failure: {}", msg);
                break;
            }
            FetchState::Loading => unreachable!("no fetch is awaited here"),
        }
    }

    if !query.is_empty() {
        directory.set_query(&query);
    }

    let visible = directory.visible();
    println!(
        "{} of {} loaded members{}",
        visible.len(),
        directory.loaded_count(),
        if query.is_empty() {
            String::new()
        } else {
            format!(" matching \"{}\"", query)
        }
    );

    for member in visible {
        let joined = member
            .joined_display()
            .map(|d| format!(" (joined {})", d))
            .unwrap_or_default();
        println!("- {} <{}>{}", member.name, member.email, joined);
        if let Some(about) = &member.about {
            println!("    {}", about);
        }
        if let Some(url) = directory.avatar_url(member) {
            println!("    avatar: {}", url);
        }
    }

    Ok(())
}
