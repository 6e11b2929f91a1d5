use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use url::Url;

use video_url_lister::cli::{self, Args};
use video_url_lister::error::ListerError;
use video_url_lister::fetch::{self, FetchOptions};
use video_url_lister::extract;
use video_url_lister::output::{self, OutputFormat};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            println!("{}", cli::usage());
            eprint!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Run failed: {:?}", e);
            match e.downcast_ref::<ListerError>() {
                Some(ListerError::Usage(msg)) => {
                    println!("{}", msg);
                    println!("{}", cli::usage());
                }
                Some(err) => println!("{}", err),
                None => println!("Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<()> {
    let format = OutputFormat::parse(&args.format)?;
    let page_url = Url::parse(&args.playlist_url).map_err(ListerError::from)?;

    log::info!("Scanning {}", page_url);

    let options = FetchOptions {
        timeout: Duration::from_secs(args.timeout),
        user_agent: args.user_agent.clone(),
        proxy: args.proxy.clone(),
    };
    let html = fetch::fetch_page(&page_url, &options).await?;

    let urls = extract::extract_candidates(&html, &page_url);
    if urls.is_empty() {
        return Err(ListerError::NoResults.into());
    }

    output::write_results(&urls, format, &args.output_file)?;

    println!("[+] Found {} video-related URLs", urls.len());
    println!("[+] Saved to {}", args.output_file.display());
    Ok(())
}
