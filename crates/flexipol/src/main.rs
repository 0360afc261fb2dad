//! `flexipol <scene.json> [--root-font-size N] [--top-level-only]`
//!
//! Lays out every flex container of a JSON scene and prints the resulting
//! geometry as JSON on stdout.

use anyhow::{Context as _, Result, anyhow};
use env_logger::{Builder, Env};
use flexipol::{LayoutOptions, run_scene};
use serde_json::to_string_pretty;
use std::env;
use std::fs::read_to_string;
use std::io::{Write as _, stdout};
use std::path::PathBuf;

/// Parsed command line.
#[derive(Clone, Debug, PartialEq)]
struct Args {
    scene: PathBuf,
    options: LayoutOptions,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut scene = None;
    let mut options = LayoutOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--root-font-size" => {
                let raw = args
                    .next()
                    .ok_or_else(|| anyhow!("--root-font-size needs a value"))?;
                let size: f32 = raw
                    .parse()
                    .with_context(|| format!("invalid root font size '{raw}'"))?;
                options.root_font_size_px = Some(size);
            }
            "--top-level-only" => options.include_nested = false,
            _ if scene.is_none() => scene = Some(PathBuf::from(arg)),
            _ => return Err(anyhow!("unexpected argument '{arg}'")),
        }
    }
    let scene = scene.ok_or_else(|| {
        anyhow!("usage: flexipol <scene.json> [--root-font-size N] [--top-level-only]")
    })?;
    Ok(Args { scene, options })
}

fn main() -> Result<()> {
    let _log_init: Result<(), _> = Builder::from_env(Env::default().filter_or("RUST_LOG", "warn"))
        .is_test(false)
        .try_init();
    let args = parse_args(env::args().skip(1))?;
    let raw = read_to_string(&args.scene)
        .with_context(|| format!("failed to read {}", args.scene.display()))?;
    let snapshot = run_scene(&raw, &args.options)?;
    let mut out = stdout().lock();
    writeln!(out, "{}", to_string_pretty(&snapshot)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Result<Args> {
        parse_args(raw.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    /// # Panics
    /// Panics if flags are not read in any position.
    fn parses_flags_around_scene() -> Result<()> {
        let parsed = args(&["--root-font-size", "20", "scene.json", "--top-level-only"])?;
        assert_eq!(parsed.scene, PathBuf::from("scene.json"));
        assert_eq!(parsed.options.root_font_size_px, Some(20.0));
        assert!(!parsed.options.include_nested);
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if a missing scene or a bad font size is accepted.
    fn rejects_bad_input() {
        let message = |raw: &[&str]| args(raw).err().map(|err| err.to_string());
        assert_eq!(
            message(&[]),
            Some("usage: flexipol <scene.json> [--root-font-size N] [--top-level-only]".to_owned())
        );
        assert_eq!(
            message(&["a.json", "--root-font-size", "big"]),
            Some("invalid root font size 'big'".to_owned())
        );
        assert_eq!(
            message(&["a.json", "b.json"]),
            Some("unexpected argument 'b.json'".to_owned())
        );
    }
}
