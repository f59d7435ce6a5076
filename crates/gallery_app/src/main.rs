mod container;
mod render;

use anyhow::Context;
use log::LevelFilter;

use gallery_core::FetchState;
use gallery_engine::{ClientSettings, PhotoFeed};

use crate::container::AppContainer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gallery_logging::initialize_terminal(LevelFilter::Info);

    let settings = ClientSettings::default();
    log::info!("photo listing endpoint: {}", settings.base_url);

    let container =
        AppContainer::new(settings).context("building the application container")?;
    let feed = PhotoFeed::new(container.photo_repository);

    let mut states = feed.subscribe();
    let mut rendered = None;
    let outcome = loop {
        let state = states.borrow_and_update().clone();
        if rendered.as_ref() != Some(&state) {
            render::render(&state);
            rendered = Some(state.clone());
        }
        if state.is_terminal() {
            break state;
        }
        states.changed().await.context("feed closed before finishing")?;
    };

    anyhow::ensure!(outcome != FetchState::Error, "photo fetch failed");
    Ok(())
}
