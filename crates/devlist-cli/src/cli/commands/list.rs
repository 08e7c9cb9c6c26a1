//! `devlist list` – load developers in the background and print them.

use anyhow::{Context, Result};
use devlist_core::config::DevlistConfig;
use devlist_core::{CurlFetcher, FetchError, FetchErrorKind, Loader, Pipeline, Record};

/// Options of the `list` command.
#[derive(Debug, Default)]
pub struct ListArgs {
    pub url: Option<String>,
    pub json: bool,
    pub token: Option<String>,
}

pub async fn run_list(cfg: &DevlistConfig, args: ListArgs) -> Result<()> {
    let mut opts = cfg.fetch_options();
    if args.token.is_some() {
        opts.auth_token = args.token;
    }
    let url = args.url.as_deref().unwrap_or(&cfg.endpoint);

    let loader = Loader::new(Pipeline::new(CurlFetcher::new(opts)));
    let records = match loader.load(url).await {
        Ok(records) => records,
        Err(e) => {
            if let Some(notice) = failure_notice(e, url)? {
                eprintln!("{}", notice);
            }
            return Ok(());
        }
    };

    if args.json {
        println!("{}", render_json(&records)?);
    } else {
        print!("{}", render_table(&records));
    }
    Ok(())
}

/// Message for a failed load: `Err` for a bad URL, nothing for an interrupted load,
/// the short user message for connectivity problems.
pub(crate) fn failure_notice(e: FetchError, url: &str) -> Result<Option<&'static str>> {
    match e.kind() {
        FetchErrorKind::BadUrl => Err(e).with_context(|| format!("cannot query {:?}", url)),
        FetchErrorKind::Interrupted => {
            tracing::debug!("list load interrupted");
            Ok(None)
        }
        FetchErrorKind::Network | FetchErrorKind::Io => {
            tracing::warn!("list load failed: {}", e);
            Ok(Some(e.user_message()))
        }
    }
}

pub(crate) fn render_json(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Table of records in load order, or the empty-state message.
pub(crate) fn render_table(records: &[Record]) -> String {
    if records.is_empty() {
        return "No developers found.\n".to_string();
    }
    let width = records
        .iter()
        .map(|r| r.username().chars().count())
        .max()
        .unwrap_or(0)
        .max("USERNAME".len());
    let mut out = format!("{:<4} {:<width$} {}\n", "#", "USERNAME", "PROFILE", width = width);
    for (i, r) in records.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<width$} {}\n",
            i + 1,
            r.username(),
            r.profile_url(),
            width = width
        ));
    }
    out
}
