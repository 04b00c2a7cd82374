use tokio::sync::watch;

use crate::{
    config::Config,
    contact::RelayClient,
    logger::Logger,
    navigation::NavigationState,
    settings::{Settings, SettingsStore},
    ui::theme::Palette,
};

/// Services shared by the whole UI
pub struct AppContext {
    pub config: Config,
    pub settings: SettingsStore,
    pub settings_rx: watch::Receiver<Settings>,
    pub relay: Option<RelayClient>,
    pub logger: Logger,
}

impl AppContext {
    pub fn new(config: Config, settings: SettingsStore) -> Self {
        let logger = Logger::new();
        let relay = match RelayClient::new(
            config.relay.base_url.clone(),
            config.relay.anon_key(),
            config.relay.request_timeout(),
        ) {
            Ok(client) => Some(client),
            Err(e) => {
                logger.log(format!("Contact relay unavailable: {}", e));
                None
            }
        };
        let settings_rx = settings.subscribe();

        Self {
            config,
            settings,
            settings_rx,
            relay,
            logger,
        }
    }

    /// Settings published since the last call, if any
    pub fn settings_changed(&mut self) -> Option<Settings> {
        match self.settings_rx.has_changed() {
            Ok(true) => Some(*self.settings_rx.borrow_and_update()),
            _ => None,
        }
    }
}

/// Per-frame data handed to every component's `render`
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub palette: Palette,
    pub nav: NavigationState,
    /// Frame counter for spinners; frozen when reduced motion is on
    pub tick: u64,
}
