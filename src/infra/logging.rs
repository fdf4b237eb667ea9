//! Инициализация логгера для бинарников.
//!
//! Библиотека пишет только через фасад `log`; backend выбирает приложение.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Поднять терминальный логгер. `verbose` переключает уровень на DEBUG.
///
/// Повторная инициализация не ошибка: просто остаётся первый логгер.
pub fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let _ = TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto);
}
