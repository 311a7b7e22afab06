// SPDX-License-Identifier: MPL-2.0
//! Process-wide tracing subscriber.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `chat_lens=debug`.
pub const ENV_LOG: &str = "CHAT_LENS_LOG";

const DEFAULT_FILTER: &str = "chat_lens=info";

/// Installs the fmt subscriber. Later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| DEFAULT_FILTER.into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
