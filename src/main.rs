use clap::Parser;
use portfolio::{cli, commands, config, error};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Check { root } => {
            let root = config.resolve_root(root);
            println!("🔍 portfolio - コンテンツ検証: {}\n", root.display());

            let summary = commands::check(&root).await?;
            println!("✔ プロジェクト: {}件", summary.catalog.records.len());
            for skipped in &summary.catalog.skipped {
                println!("✘ {}: {}", skipped.path, skipped.reason);
            }
            if summary.contact_ok {
                println!("✔ 連絡先ページ");
            } else {
                println!("✘ 連絡先ページを読み込めません");
            }
            for problem in &summary.manifest_problems {
                println!("✘ {}", problem);
            }

            let problems = summary.problem_count();
            if problems > 0 {
                return Err(error::PortfolioError::InvalidContent(problems));
            }
            println!("\n✅ 問題なし");
        }

        Commands::Manifest { root } => {
            let root = config.resolve_root(root);
            let (path, names) = commands::manifest(&root)?;
            println!("✔ {}件を掲載: {}", names.len(), path.display());
        }

        Commands::List { root, category, search, json } => {
            let root = config.resolve_root(root);
            let visible = commands::list(&root, category.as_deref(), &search).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                for project in &visible {
                    println!("{} [{}] {}", project.id, project.category, project.title);
                    if !project.tags.is_empty() {
                        println!("    tags: {}", project.tags.join(", "));
                    }
                }
                println!("\n{}件", visible.len());
            }
        }

        Commands::Categories { root } => {
            let root = config.resolve_root(root);
            for label in commands::categories(&root).await? {
                println!("{}", label);
            }
        }

        Commands::Config { set_site_root, show } => {
            let mut config = config;

            if let Some(root) = set_site_root {
                config.set_site_root(root)?;
                println!("✔ サイトルートを設定しました");
            }

            if show {
                println!("設定:");
                println!("  サイトルート: {}", config.site_root.display());
            }
        }
    }

    Ok(())
}
