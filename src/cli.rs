use crate::admin;
use crate::alerts::AlertStack;
use crate::announcements;
use crate::api::ApiClient;
use crate::config::ResolvedConfig;
use crate::errors::{AppError, AppResult};
use crate::filters::Filters;
use crate::pages::Page;
use crate::ui;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Parses command-line arguments and executes the selected action.
///
/// Subcommands:
/// - `list`: fetch and render the announcement listing with search filters
/// - `classify`: manually classify one announcement into a region
/// - `collect`: trigger a backend data-collection job
/// - `watch`: periodically re-render the listing (admin dashboard refresh)
/// - `page`: route-detection dispatch on a literal path
///
/// A TOML config file may be passed with `--config`; defaults apply
/// otherwise.
pub async fn cli() -> AppResult<()> {
    let cmd = build_command();

    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    let config = load_config(&matches)?;

    match matches.subcommand() {
        Some(("list", sub)) => {
            let api = ApiClient::new(&config)?;
            run_list(&api, &filters_from_matches(sub, &config)?, output_from_matches(sub)).await
        }
        Some(("classify", sub)) => {
            let api = ApiClient::new(&config)?;
            let id = *sub.get_one::<i64>("id").expect("id is required");
            let region_code = sub
                .get_one::<String>("region_code")
                .expect("region-code is required");
            run_classify(&api, id, region_code).await
        }
        Some(("collect", sub)) => {
            let api = ApiClient::new(&config)?;
            let count = *sub.get_one::<usize>("count").expect("count has default_value");
            run_collect(&api, count).await
        }
        Some(("watch", sub)) => {
            let api = ApiClient::new(&config)?;
            let interval = sub
                .get_one::<u64>("interval")
                .copied()
                .unwrap_or(config.auto_refresh_secs);
            run_watch(
                &api,
                &filters_from_matches(sub, &config)?,
                Duration::from_secs(interval),
                output_from_matches(sub),
            )
            .await
        }
        Some(("page", sub)) => {
            let path = sub.get_one::<String>("path").expect("path is required");
            run_page(&config, path).await
        }
        _ => {
            cmd_for_help
                .print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
            Ok(())
        }
    }
}

fn build_command() -> Command<'static> {
    let filter_args = |cmd: Command<'static>| {
        cmd.arg(
            Arg::new("region")
                .short('r')
                .long("region")
                .help("Region code to filter by (e.g. 48000)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("limit")
                .short('l')
                .long("limit")
                .help("Maximum number of announcements to request")
                .value_parser(clap::value_parser!(usize))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("filter")
                .short('f')
                .long("filter")
                .help("Extra filter as key=value, repeatable")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the rendered HTML fragment to this file instead of stdout")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
    };

    Command::new("gsrc-cli")
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a TOML config file")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .subcommand(filter_args(
            Command::new("list")
                .about("Fetch announcements and render them as HTML cards")
                .after_help("Example:\n  gsrc-cli list -r 48000 -l 10 -f keyword=수출"),
        ))
        .subcommand(
            Command::new("classify")
                .about("Manually classify one announcement into a region")
                .arg(
                    Arg::new("id")
                        .help("Announcement id")
                        .required(true)
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(
                    Arg::new("region_code")
                        .help("Region code to assign (e.g. 48250)")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("collect")
                .about("Trigger a backend data-collection job")
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .help("Number of announcements to fetch upstream")
                        .default_value("20")
                        .value_parser(clap::value_parser!(usize))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            filter_args(
                Command::new("watch")
                    .about("Re-render the listing on a fixed interval until Ctrl-C"),
            )
            .arg(
                Arg::new("interval")
                    .long("interval")
                    .help("Seconds between refreshes (default from config)")
                    .value_parser(clap::value_parser!(u64))
                    .action(ArgAction::Set),
            ),
        )
        .subcommand(
            Command::new("page")
                .about("Run the initializer for a page path ('/' loads the listing, '/admin' watches)")
                .arg(Arg::new("path").help("Page path, e.g. / or /admin").required(true)),
        )
}

fn load_config(matches: &ArgMatches) -> AppResult<ResolvedConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => ResolvedConfig::from_toml_file(path),
        None => Ok(ResolvedConfig::default()),
    }
}

/// Collects the search-form fields into the filter map. Empty values never
/// make it into the map; the configured page size fills in when no explicit
/// limit was given.
fn filters_from_matches(sub: &ArgMatches, config: &ResolvedConfig) -> AppResult<Filters> {
    let mut filters = Filters::new();

    if let Some(region) = sub.get_one::<String>("region") {
        filters.insert("region", region.clone());
    }

    let limit = sub
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(config.page_size);
    filters.insert("limit", limit.to_string());

    if let Some(raw_filters) = sub.get_many::<String>("filter") {
        for raw in raw_filters {
            let (key, value) = Filters::parse_pair(raw)?;
            filters.insert(key, value);
        }
    }

    Ok(filters)
}

fn output_from_matches(sub: &ArgMatches) -> Option<PathBuf> {
    sub.get_one::<PathBuf>("output").cloned()
}

async fn run_list(api: &ApiClient, filters: &Filters, output: Option<PathBuf>) -> AppResult<()> {
    let mut alerts = AlertStack::new();
    let page = announcements::load_announcements(api, filters, &mut alerts).await;
    ui::write_fragment(output.as_deref(), &page.html)
}

async fn run_classify(api: &ApiClient, id: i64, region_code: &str) -> AppResult<()> {
    let mut alerts = AlertStack::new();
    let classified = admin::classify_announcement(api, id, region_code, &mut alerts).await;
    if !classified {
        return Err(AppError::ApiError("분류 실패".to_string()));
    }
    Ok(())
}

async fn run_collect(api: &ApiClient, count: usize) -> AppResult<()> {
    let mut alerts = AlertStack::new();
    match admin::collect_data(api, count, &mut alerts).await {
        Some(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        None => Err(AppError::ApiError("데이터 수집 실패".to_string())),
    }
}

async fn run_watch(
    api: &ApiClient,
    filters: &Filters,
    interval: Duration,
    output: Option<PathBuf>,
) -> AppResult<()> {
    // File output is always "visible"; stdout refreshing is pointless when
    // nothing is attached to read it.
    let to_file = output.is_some();
    let is_visible = move || to_file || std::io::stdout().is_terminal();
    admin::run_auto_refresh(api, filters, interval, output.as_deref(), is_visible).await
}

async fn run_page(config: &ResolvedConfig, path: &str) -> AppResult<()> {
    match Page::detect(path) {
        Some(page) => {
            info!(path = path, page = page.display_name(), "Initializing page");
            let api = ApiClient::new(config)?;
            match page {
                Page::Index => run_list(&api, &filters_from_matches_empty(config), None).await,
                Page::AdminDashboard => {
                    run_watch(
                        &api,
                        &filters_from_matches_empty(config),
                        Duration::from_secs(config.auto_refresh_secs),
                        None,
                    )
                    .await
                }
            }
        }
        None => {
            warn!(path = path, "No initializer for path");
            Ok(())
        }
    }
}

/// The unfiltered initial load: only the configured page size applies.
fn filters_from_matches_empty(config: &ResolvedConfig) -> Filters {
    let mut filters = Filters::new();
    filters.insert("limit", config.page_size.to_string());
    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_SEARCH_COUNT;

    #[test]
    fn list_parses_filter_flags() {
        let matches = build_command()
            .try_get_matches_from(vec![
                "gsrc-cli", "list", "-r", "48000", "-l", "10", "-f", "keyword=수출",
            ])
            .unwrap();
        let sub = matches.subcommand_matches("list").unwrap();
        let filters = filters_from_matches(sub, &ResolvedConfig::default()).unwrap();
        let pairs: Vec<(&str, &str)> = filters.iter().collect();
        assert_eq!(
            pairs,
            vec![("keyword", "수출"), ("limit", "10"), ("region", "48000")]
        );
    }

    #[test]
    fn list_defaults_limit_to_page_size() {
        let matches = build_command()
            .try_get_matches_from(vec!["gsrc-cli", "list"])
            .unwrap();
        let sub = matches.subcommand_matches("list").unwrap();
        let filters = filters_from_matches(sub, &ResolvedConfig::default()).unwrap();
        let pairs: Vec<(&str, &str)> = filters.iter().collect();
        assert_eq!(pairs, vec![("limit", "20")]);
    }

    #[test]
    fn malformed_filter_flag_errors() {
        let matches = build_command()
            .try_get_matches_from(vec!["gsrc-cli", "list", "-f", "no-equals"])
            .unwrap();
        let sub = matches.subcommand_matches("list").unwrap();
        assert!(filters_from_matches(sub, &ResolvedConfig::default()).is_err());
    }

    #[test]
    fn classify_requires_both_arguments() {
        let result = build_command().try_get_matches_from(vec!["gsrc-cli", "classify", "42"]);
        assert!(result.is_err());
    }

    #[test]
    fn classify_parses_id_as_integer() {
        let matches = build_command()
            .try_get_matches_from(vec!["gsrc-cli", "classify", "42", "48250"])
            .unwrap();
        let sub = matches.subcommand_matches("classify").unwrap();
        assert_eq!(*sub.get_one::<i64>("id").unwrap(), 42);
        assert_eq!(sub.get_one::<String>("region_code").unwrap(), "48250");
    }

    #[test]
    fn collect_count_defaults() {
        let matches = build_command()
            .try_get_matches_from(vec!["gsrc-cli", "collect"])
            .unwrap();
        let sub = matches.subcommand_matches("collect").unwrap();
        assert_eq!(*sub.get_one::<usize>("count").unwrap(), DEFAULT_SEARCH_COUNT);
    }

    #[test]
    fn watch_accepts_interval() {
        let matches = build_command()
            .try_get_matches_from(vec!["gsrc-cli", "watch", "--interval", "60"])
            .unwrap();
        let sub = matches.subcommand_matches("watch").unwrap();
        assert_eq!(*sub.get_one::<u64>("interval").unwrap(), 60);
    }
}
