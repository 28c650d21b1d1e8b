//! Command-line front end: renders one mockup to stdout.
//!
//! ```text
//! device-mockup --attr type=phone --attr src=shot.webp --attr fallback=shot.png
//! device-mockup --config hero.json --theme-override dark --fragment
//! ```
//!
//! Attributes from `--config` (a flat JSON object of strings) are applied
//! first, then every `--attr` in order. Advisories go to stderr.

use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use console::Style;
use device_mockup::{
    Advisory, Attributes, DeviceMockup, ManualThemeSource, RenderStatus, SystemThemeSource, ThemeSource,
};
use tracing_subscriber::prelude::*;

/// Render a device mockup (laptop, phone or tablet) as HTML
#[derive(Parser, Debug)]
#[command(name = "device-mockup")]
#[command(version)]
struct Cli {
    /// Set an attribute, e.g. `--attr type=phone` (repeatable)
    #[arg(short, long = "attr", value_name = "KEY=VALUE", value_parser = parse_attr)]
    attrs: Vec<(String, String)>,

    /// Read attributes from a JSON object file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Use this preference instead of the OS setting for `theme=auto`
    #[arg(long, value_enum)]
    theme_override: Option<Preference>,

    /// Print the `<style>` and markup only, without the host document
    #[arg(long)]
    fragment: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preference {
    Light,
    Dark,
}

fn parse_attr(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim().to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{}`", raw)),
    }
}

fn load_attributes(cli: &Cli) -> Result<Attributes> {
    let mut attrs = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<Attributes>(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => Attributes::new(),
    };
    attrs.extend(cli.attrs.iter().cloned());
    Ok(attrs)
}

fn theme_source(preference: Option<Preference>) -> Rc<dyn ThemeSource> {
    match preference {
        Some(Preference::Light) => Rc::new(ManualThemeSource::new(false)),
        Some(Preference::Dark) => Rc::new(ManualThemeSource::new(true)),
        None => Rc::new(SystemThemeSource::new()),
    }
}

fn report(advisory: &Advisory) {
    let label = Style::new().yellow().bold();
    eprintln!("{} {}", label.apply_to("warning:"), advisory);
}

fn document(fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"></head>\n<body>\n\
         <device-mockup><template shadowrootmode=\"open\">\n{}\n</template></device-mockup>\n\
         </body>\n</html>\n",
        fragment
    )
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "device_mockup=error".into()),
        )
        .init();

    let cli = Cli::parse();
    let attrs = load_attributes(&cli)?;
    tracing::debug!(count = attrs.len(), "loaded attributes");

    let mockup = DeviceMockup::new(theme_source(cli.theme_override))?;
    let status = mockup.mount(attrs)?;

    for advisory in mockup.advisories() {
        report(&advisory);
    }

    let html = match (status, mockup.html()) {
        (RenderStatus::Rendered, Some(html)) => html,
        _ => bail!("nothing rendered: set `src`, or `mode=iframe` with `href`"),
    };

    if cli.fragment {
        println!("{}", html);
    } else {
        print!("{}", document(&html));
    }
    Ok(())
}
