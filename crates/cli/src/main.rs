//! `enka-assets` -- resolve Enka Network player showcases from the shell.
//!
//! Fetches each UID's public profile, resolves icons against the reference
//! datasets and prints the result as pretty JSON on stdout.
//!
//! # Environment variables
//!
//! | Variable                   | Required | Default                        | Description                      |
//! |----------------------------|----------|--------------------------------|----------------------------------|
//! | `ENKA_BASE_URL`            | no       | `https://enka.network/ui`      | Base URL for icon assets         |
//! | `ENKA_API_URL`             | no       | `https://enka.network/api`     | Profile API root                 |
//! | `ENKA_CACHE_DURATION_SECS` | no       | `3600`                         | Player cache TTL in seconds      |
//! | `ENKA_ENABLE_CACHE`        | no       | `true`                         | Toggle the player cache          |
//! | `ENKA_USER_AGENT`          | no       | `enka-asset-wrapper/1.0.0`     | User-Agent sent on every request |

use enka_cli::args::{CliArgs, USAGE};
use enka_client::{EnkaAssets, EnkaConfig};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "enka_cli=info,enka_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse(std::env::args().skip(1)).unwrap_or_else(|e| {
        eprintln!("{e}\n{USAGE}");
        std::process::exit(2);
    });

    let config = EnkaConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    tracing::info!(
        api_url = %config.api_url,
        base_url = %config.base_url,
        players = args.uids.len(),
        "Starting enka-assets",
    );

    let assets = EnkaAssets::new(config).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to build Enka client");
        std::process::exit(1);
    });

    let mut failed = false;
    for uid in &args.uids {
        let result = if args.uncached {
            assets.get_player_assets_uncached(uid).await
        } else {
            assets.get_player_assets(uid).await
        };

        let player = match result {
            Ok(player) => player,
            Err(e) => {
                tracing::error!(uid = %uid, error = %e, "Failed to get player assets");
                failed = true;
                break;
            }
        };

        match serde_json::to_string_pretty(&player) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!(uid = %uid, error = %e, "Failed to serialize player assets");
                failed = true;
                break;
            }
        }

        if let Some(options) = &args.icon_options {
            let urls = assets.url_builder();
            for avatar in &player.show_avatars {
                println!(
                    "{}\t{}",
                    avatar.avatar_id,
                    urls.build_character_icon_url(&avatar.icon_name, options)
                );
            }
        }
    }

    let stats = assets.cache_stats().await;
    tracing::info!(
        total = stats.total,
        valid = stats.valid,
        expired = stats.expired,
        "Player cache stats",
    );

    assets.shutdown().await;

    if failed {
        std::process::exit(1);
    }
}
