//! Instagram Archiver - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use instagram_archiver::{
    api::InstagramApi,
    cli::Args,
    config::{validate_config, Config},
    crawl::{crawl_user_feed, next_high_water_mark},
    error::{exit_codes, Error, Result},
    export::export_feed,
    fs::ensure_dir,
    output::{print_banner, print_config_summary, print_error, print_info, print_run_stats, print_warning},
    tag::JheadTagger,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Remote { .. } => ExitCode::from(exit_codes::REMOTE_ERROR as u8),
                Error::Download(_) | Error::Tagging(_) | Error::TaggerNotFound(_) => {
                    ExitCode::from(exit_codes::EXPORT_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    // Print configuration summary
    print_config_summary(
        &config.target.username,
        config.high_water_mark(),
        &config.download_directory().display().to_string(),
    );

    // Initialize API client
    let api = InstagramApi::new(&config.options.feed_base_url)?;

    // Crawl everything posted since the last run. Any remote failure here
    // aborts the whole run with nothing exported.
    print_info(&format!("Crawling feed for {}...", config.target.username));
    let items = crawl_user_feed(&api, &config).await?;

    if items.is_empty() {
        print_info("No new photos since the last run");
        return Ok(());
    }

    print_info(&format!("{} new photo(s) to export", items.len()));

    // Export each photo in feed order
    ensure_dir(&config.download_directory())?;
    let tagger = JheadTagger::new(&config.options.jhead_path);
    let state = export_feed(&api, &tagger, &config, &items).await?;

    print_run_stats(&state, items.len());

    // Tell the operator what to record for the next run
    if let Some(new_mark) = next_high_water_mark(&items, config.high_water_mark()) {
        println!();
        print_info(&format!(
            "Set last_scraped_id = \"{}\" in {} before the next run",
            new_mark,
            config_path.display()
        ));
    }

    Ok(())
}
