#![deny(clippy::all)]

use std::{path::PathBuf, sync::Arc, time::Instant};

use hopperfilter::plugin::{HopperFilterPlugin, Plugin, ServerContext, METADATA};
use hopperfilter_config::{logging::LoggingConfig, PluginConfig};
use hopperfilter_registry::RecipeTable;
use itertools::Itertools;
use log::LevelFilter;

const DEFAULT_DATA_FOLDER: &str = "plugins/HopperFilterX";

fn init_logger(config: &LoggingConfig) {
    if config.enabled {
        let mut logger = simple_logger::SimpleLogger::new();
        logger = logger.with_timestamp_format(time::macros::format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ));

        if !config.timestamp {
            logger = logger.without_timestamps();
        }

        if config.env {
            logger = logger.env();
        }

        logger = logger.with_level(convert_logger_filter(config.level));

        logger = logger.with_colors(config.color);
        logger = logger.with_threads(config.threads);
        if let Err(err) = logger.init() {
            eprintln!("Couldn't install logger: {err}");
        }
    }
}

const fn convert_logger_filter(level: hopperfilter_config::logging::LevelFilter) -> LevelFilter {
    match level {
        hopperfilter_config::logging::LevelFilter::Off => LevelFilter::Off,
        hopperfilter_config::logging::LevelFilter::Error => LevelFilter::Error,
        hopperfilter_config::logging::LevelFilter::Warn => LevelFilter::Warn,
        hopperfilter_config::logging::LevelFilter::Info => LevelFilter::Info,
        hopperfilter_config::logging::LevelFilter::Debug => LevelFilter::Debug,
        hopperfilter_config::logging::LevelFilter::Trace => LevelFilter::Trace,
    }
}

fn main() {
    let time = Instant::now();
    let data_folder = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_DATA_FOLDER), PathBuf::from);

    let (config, config_error) = match PluginConfig::load(&data_folder) {
        Ok(config) => (config, None),
        Err(err) => (PluginConfig::default(), Some(err)),
    };
    init_logger(&config.logging());
    if let Some(err) = config_error {
        log::error!("{err}");
        log::warn!("Falling back to the default configuration");
    }

    log::info!(
        "Starting {} {} by {}",
        METADATA.name,
        METADATA.version,
        METADATA.authors.join(", ")
    );
    log::info!("{}", METADATA.description);
    log::debug!("Data folder: {}", data_folder.display());

    let recipes = Arc::new(RecipeTable::new());
    let context = ServerContext::new(&METADATA, config, recipes.clone());
    let mut plugin = HopperFilterPlugin::default();

    if let Err(err) = plugin.on_load(&context) {
        log::error!("Failed to load {}: {err}", METADATA.name);
    }
    log::info!(
        "{} recipe(s) registered: [{}]",
        recipes.len(),
        recipes.keys().iter().join(", ")
    );
    log::info!("Started in {}ms", time.elapsed().as_millis());

    let (stop_sender, stop_receiver) = crossbeam::channel::bounded(1);
    match ctrlc::set_handler(move || {
        let _ = stop_sender.try_send(());
    }) {
        Ok(()) => {
            log::info!("Press Ctrl-C to stop");
            let _ = stop_receiver.recv();
        }
        Err(err) => log::warn!("Unable to setup signal handler, stopping right away: {err}"),
    }

    log::info!("Stopping {}", METADATA.name);
    if let Err(err) = plugin.on_unload(&context) {
        log::error!("Failed to unload {}: {err}", METADATA.name);
    }
    recipes.close();
    log::info!("{} recipe(s) left after shutdown", recipes.len());
}
