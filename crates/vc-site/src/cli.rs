#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::build::{BuildArgs, run_build};
use crate::check::{CheckArgs, run_check};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::routing::Router;

#[derive(Debug, Parser)]
#[command(
    name = "vclasses",
    about = "Static renderer for the VClasses bilingual landing site",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render every enabled locale into the output directory.
    Build(BuildArgs),

    /// Validate the config and translation coverage.
    Check(CheckArgs),

    /// Print the published locales and their URLs.
    Locales(LocalesArgs),
}

#[derive(Debug, Clone, Args)]
pub struct LocalesArgs {
    /// TOML config; built-in defaults when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build(args) => run_build(args),
        Commands::Check(args) => run_check(args),
        Commands::Locales(args) => run_locales(args),
    }
}

fn run_locales(args: LocalesArgs) -> Result<()> {
    let config = SiteConfig::load(args.config.as_deref())?;
    config.ensure_valid()?;
    for line in locale_lines(&Router::from_config(&config)) {
        println!("{line}");
    }
    Ok(())
}

/// `code dir href`, the default locale marked.
fn locale_lines(router: &Router) -> Vec<String> {
    router
        .locales()
        .iter()
        .map(|locale| {
            let marker = if *locale == router.default_locale() {
                " (default)"
            } else {
                ""
            };
            format!(
                "{} {} {}{marker}",
                locale.code(),
                locale.direction().as_str(),
                router.href(*locale)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::{Cli, Commands, LocalesArgs, locale_lines, run};
    use crate::build::BuildArgs;
    use crate::check::CheckArgs;
    use crate::config::SiteConfig;
    use crate::error::SiteError;
    use crate::routing::Router;

    #[test]
    fn locales_command_dispatches_successfully() {
        let result = run(Cli {
            command: Commands::Locales(LocalesArgs { config: None }),
        });
        assert!(result.is_ok());
    }

    #[test]
    fn locales_command_accepts_config() {
        let cli = Cli::try_parse_from(["vclasses", "locales", "--config", "vclasses.toml"])
            .expect("parse");
        match cli.command {
            Commands::Locales(args) => {
                assert_eq!(args.config, Some(PathBuf::from("vclasses.toml")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn locales_follow_loaded_config() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("vclasses.toml");
        std::fs::write(
            &path,
            "[site]\nbase_path = \"/site/\"\n[locales]\nenabled = [\"ar\"]\ndefault = \"ar\"\n",
        )
        .expect("write config");
        let config = SiteConfig::load(Some(&path)).expect("load");
        assert_eq!(
            locale_lines(&Router::from_config(&config)),
            vec!["ar rtl /site/ar/ (default)".to_string()]
        );
        assert!(
            run(Cli {
                command: Commands::Locales(LocalesArgs { config: Some(path) }),
            })
            .is_ok()
        );
    }

    #[test]
    fn locales_reject_invalid_config() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("vclasses.toml");
        std::fs::write(&path, "[locales]\nenabled = [\"en\"]\ndefault = \"ar\"\n")
            .expect("write config");
        let result = run(Cli {
            command: Commands::Locales(LocalesArgs { config: Some(path) }),
        });
        assert!(matches!(result, Err(SiteError::InvalidConfig { .. })));
    }

    #[test]
    fn check_command_passes_with_defaults() {
        let result = run(Cli {
            command: Commands::Check(CheckArgs {
                config: None,
                json: true,
            }),
        });
        assert!(result.is_ok());
    }

    #[test]
    fn build_command_reports_missing_config() {
        let temp = tempdir().expect("tempdir");
        let result = run(Cli {
            command: Commands::Build(BuildArgs {
                config: Some(PathBuf::from("/definitely/missing/vclasses.toml")),
                out: Some(temp.path().to_path_buf()),
                locale: None,
            }),
        });
        assert!(matches!(result, Err(SiteError::MissingConfig { .. })));
    }

    #[test]
    fn build_command_writes_output() {
        let temp = tempdir().expect("tempdir");
        let config = temp.path().join("vclasses.toml");
        std::fs::write(&config, "[locales]\nenabled = [\"ar\"]\ndefault = \"ar\"\n")
            .expect("write config");
        let out = temp.path().join("dist");
        run(Cli {
            command: Commands::Build(BuildArgs {
                config: Some(config),
                out: Some(out.clone()),
                locale: None,
            }),
        })
        .expect("build");
        assert!(out.join("ar/index.html").exists());
        assert!(!out.join("en/index.html").exists());
    }
}
