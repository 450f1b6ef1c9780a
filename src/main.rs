//! Cause submission - GPUI window for submitting a personal cause for review
//!
//! Loads the endpoint settings, then opens a single window holding the
//! submission form.

mod app;
mod components;
mod theme;

use anyhow::Context as _;
use app::CauseFormApp;
use cause_submission::{AppSettings, SubmissionClient};
use gpui::*;
use std::sync::Arc;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = AppSettings::load();
    let http = reqwest::blocking::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .build()
        .context("failed to build the HTTP client")?;
    let client = Arc::new(SubmissionClient::with_http_client(
        settings.endpoint_url(),
        http,
    ));
    log::info!("Submitting causes to {}", client.endpoint());

    Application::new().run(move |cx: &mut App| {
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds {
                origin: Point::default(),
                size: Size {
                    width: px(820.0),
                    height: px(960.0),
                },
            })),
            titlebar: Some(TitlebarOptions {
                title: Some("Submit Personal Cause".into()),
                appears_transparent: false,
                ..Default::default()
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| CauseFormApp::new(client.clone(), cx))
        }) {
            log::error!("Failed to open window: {:?}", e);
            cx.quit();
        }
    });

    Ok(())
}
