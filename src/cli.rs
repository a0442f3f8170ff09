use clap::Parser;

/// Relay GitLab merge-request webhooks to a WeCom group bot.
#[derive(Debug, Parser)]
#[command(name = "mr-hook", version, about)]
pub struct Cli {
    /// WeCom group-bot key, appended to the webhook URL as `?key=`.
    #[arg(long, env = "WECOM_BOT_KEY", hide_env_values = true)]
    pub key: String,

    /// Address the HTTP server listens on.
    #[arg(long, env = "API_ADDRESS", default_value = "0.0.0.0:8080")]
    pub addr: String,

    /// Bot webhook base URL, without the query string.
    #[arg(long, env = "WECOM_WEBHOOK_URL", default_value = bot_notifier::DEFAULT_WEBHOOK_URL)]
    pub webhook_url: String,
}
