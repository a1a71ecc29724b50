use log::{debug, error, info, Level};
use web_sys::{window, Document, Event};

mod api;
mod campaign;
mod config;
mod dom;
mod error;
mod models;
mod nav;

fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

fn boot(document: &Document) {
    nav::highlight_active_links();

    match campaign::mount(document) {
        Ok(true) => info!("Campaign page activated"),
        Ok(false) => debug!("No campaign form on this page"),
        Err(e) => error!("Campaign page not activated: {}", e),
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(log_level()).expect("error initializing log");

    info!("Starting campaign frontend");
    let Some(document) = window().and_then(|w| w.document()) else {
        error!("{}", error::MountError::NoDocument);
        return;
    };

    // The script may load before or after the markup is parsed.
    if document.ready_state() == "loading" {
        let loaded = document.clone();
        if let Err(e) = dom::listen(&document, "DOMContentLoaded", move |_: Event| boot(&loaded)) {
            error!("{}", e);
        }
    } else {
        boot(&document);
    }
}
