use std::path::PathBuf;

use crate::error::{AppError, AppResult};

pub const USAGE: &str = "\
usage: folio-theme [--storage PATH] [--prefers-dark | --prefers-light] <command>

commands:
  show     resolve and print the current theme
  toggle   resolve, toggle once, and print the new theme
  render   print the server, first-paint, and hydrated root markup
  css      print the marker-keyed stylesheet
  help     print this message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Show,
    Toggle,
    Render,
    Css,
    Help,
}

impl Command {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "show" => Some(Self::Show),
            "toggle" => Some(Self::Toggle),
            "render" => Some(Self::Render),
            "css" => Some(Self::Css),
            "help" | "-h" | "--help" => Some(Self::Help),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupOptions {
    pub command: Command,
    pub storage_path: Option<PathBuf>,
    pub prefers_dark: Option<bool>,
}

impl StartupOptions {
    pub fn parse<I>(args: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut command = None;
        let mut storage_path = None;
        let mut prefers_dark = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--storage" => {
                    let path = args
                        .next()
                        .ok_or_else(|| AppError::Usage("--storage needs a path".to_string()))?;
                    storage_path = Some(PathBuf::from(path));
                }
                "--prefers-dark" => prefers_dark = Some(true),
                "--prefers-light" => prefers_dark = Some(false),
                other => {
                    let parsed = Command::parse(other)
                        .ok_or_else(|| AppError::Usage(format!("unknown argument {other:?}")))?;
                    if command.replace(parsed).is_some() {
                        return Err(AppError::Usage("only one command may be given".to_string()));
                    }
                }
            }
        }

        Ok(Self {
            command: command.unwrap_or(Command::Show),
            storage_path,
            prefers_dark,
        })
    }
}
