use crate::config::Config;
use crate::text_art::TextArt;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub text_art: Arc<dyn TextArt>,
}
