//! invoicr-client CLI entry point.

use chrono::Utc;
use clap::Parser;
use invoicr_client::cli::{Cli, Commands, OutputFormat};
use invoicr_client::output::{format_output, pretty};
use invoicr_client::services::{InvoiceService, SettingsService};
use invoicr_client::{shared_client, ClientError, ScopedClientFactory};
use invoicr_core::auth::{login, AccessToken, Credentials};
use invoicr_core::seo::{render_sitemap_xml, sitemap};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "invoicr_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Login { email, password } => {
            let client = shared_client()?;
            let session = login(&*client, &Credentials::new(email, password)).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&session, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_session(&session)),
            }
        }
        Commands::Settings { token } => {
            let factory = ScopedClientFactory::new(shared_client()?, Some(AccessToken::new(token)));
            let settings = SettingsService::new(factory).get_user_settings().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&settings, cli.format)),
                OutputFormat::Pretty => {
                    println!("{}", pretty::format_settings(settings.as_ref()))
                }
            }
        }
        Commands::Invoices { token } => {
            let factory = ScopedClientFactory::new(shared_client()?, Some(AccessToken::new(token)));
            let invoices = InvoiceService::new(factory).list_invoices().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&invoices, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_invoices(&invoices)),
            }
        }
        Commands::Sitemap { base_url } => {
            let entries = sitemap(&base_url, Utc::now());
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&entries, cli.format)),
                OutputFormat::Pretty => print!("{}", render_sitemap_xml(&entries)),
            }
            if !cli.quiet {
                eprintln!("{} pages", entries.len());
            }
        }
    }

    Ok(())
}
