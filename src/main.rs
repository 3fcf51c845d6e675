use anyhow::{Context, Result};
use govspeak_render::components::layout::preview_page;
use govspeak_render::{Config, GovspeakRenderer, Header};
use std::fs;
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flags so individual
/// targets can be tuned without changing the invocation.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Formats headings as one `id<TAB>text` line each.
fn format_headers(headers: &[Header]) -> String {
    headers
        .iter()
        .map(|header| format!("{}\t{}\n", header.id, header.text))
        .collect()
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(&config);
    config.validate().context("Invalid configuration")?;

    let context = config.link_context()?;
    let store = config.load_store().context("Failed to load content store")?;
    let renderer = GovspeakRenderer::new(&context, &store);

    let source = config.read_input()?;

    let output = match config.headers {
        Some(level) => format_headers(&renderer.headers(&source, level)),
        None => {
            let html = if config.admin {
                renderer.to_admin_html(&source)
            } else {
                renderer.to_html(&source)
            }
            .context("Failed to render govspeak")?;

            if config.standalone {
                preview_page(&config.title(), &html).into_string()
            } else {
                html
            }
        }
    };

    match &config.output {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote rendered output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}
