// src/core/bootstrap_resolver/bootstrap_resolver_notice.rs

use log::info;

/// Senke für informative Hinweise der Resolver.
/// Wird hineingereicht statt eines globalen Loggers, damit Tests mitlesen können.
pub trait NoticeSink: Send + Sync {
    fn notice(&self, message: &str);
}

/// Leitet Hinweise auf Info-Level an die `log`-Fassade weiter.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNoticeSink;

impl NoticeSink for LogNoticeSink {
    fn notice(&self, message: &str) {
        info!("{}", message);
    }
}
