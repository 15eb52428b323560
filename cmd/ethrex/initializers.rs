//! Logger initialization (spec §6 "CLI": "a thin logger-initialization
//! shim"), grounded on the teacher's `init_tracing` — trimmed to the
//! pieces that still apply without a log-file layer or a build-time
//! version banner.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, Layer, Registry, filter::Directive, fmt, layer::SubscriberExt};

use crate::cli::{LogColor, Options};

pub fn init_tracing(opts: &Options) {
    let log_filter = EnvFilter::builder()
        .with_default_directive(Directive::from(opts.log_level))
        .from_env_lossy();

    let stdout_is_tty = std::io::stdout().is_terminal();
    let use_color = match opts.log_color {
        LogColor::Always => true,
        LogColor::Never => false,
        LogColor::Auto => stdout_is_tty,
    };

    let include_target = matches!(
        opts.log_level,
        tracing::Level::DEBUG | tracing::Level::TRACE
    );

    let fmt_layer = fmt::layer()
        .with_target(include_target)
        .with_ansi(use_color)
        .with_filter(log_filter);

    let subscriber = Registry::default().with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)
        .expect("tracing subscriber should only be installed once");
}
