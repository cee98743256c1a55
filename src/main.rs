use anyhow::Context;
use clap::Parser;
use sivu_render::config::toml_config::OutputFormat;
use sivu_render::utils::error::ErrorSeverity;
use sivu_render::utils::{logger, validation::Validate};
use sivu_render::{page_skeleton, BootState, CliConfig, RenderError, Renderer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // logs go to stderr, stdout carries the page
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting sivu-render");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let base_url = match config.base_url() {
        Ok(url) => url,
        Err(e) => exit_with(&e),
    };
    let source = match config.build_source() {
        Ok(source) => source,
        Err(e) => exit_with(&e),
    };

    let page = config.page_kind();
    let mut document = page_skeleton(page, base_url);
    let renderer = Renderer::with_policy(source, config.transport_policy());

    let state = renderer.init_page(&mut document).await;

    let rendered = match config.output_format() {
        OutputFormat::Html => document.to_html(),
        OutputFormat::Json => document.to_json()?,
    };

    match config.output_path() {
        Some(path) => {
            std::fs::write(path, &rendered).with_context(|| format!("writing {}", path))?;
            tracing::info!("Output saved to: {}", path);
        }
        None => println!("{}", rendered),
    }

    if state == BootState::Failed {
        tracing::error!("The {} page was rendered with the fallback message", page);
        std::process::exit(2);
    }

    Ok(())
}

fn exit_with(e: &RenderError) -> ! {
    tracing::error!("{} (Severity: {:?})", e, e.severity());
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
