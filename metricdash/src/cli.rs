//! Command-line parsing. Configuration proper comes from the environment;
//! flags only tune how the dashboard runs.

use std::{path::PathBuf, time::Duration};

use crate::config::Config;

pub const USAGE: &str = "[--interval SECS|-i SECS] [--tls-ca CERT_PEM|-t CERT_PEM] [--once] [--log-file PATH] [--help|-h]

Environment:
  METRICDASH_API_URL   base URL of the metrics API
  METRICDASH_HOSTNAME  host whose metrics are shown
  METRICDASH_API_KEY   bearer token";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedArgs {
    pub interval: Option<Duration>,
    pub tls_ca: Option<String>,
    pub once: bool,
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArgsError {
    /// `--help` was given; carries the usage text.
    Help(String),
    Invalid(String),
}

impl ParsedArgs {
    pub fn apply_to(&self, cfg: &mut Config) {
        if let Some(iv) = self.interval {
            cfg.interval = iv;
        }
        if let Some(ca) = &self.tls_ca {
            cfg.tls_ca = Some(PathBuf::from(ca));
        }
    }
}

fn parse_interval(v: &str) -> Result<Duration, String> {
    match v.parse::<u64>() {
        Ok(0) => Err("--interval must be at least 1 second".into()),
        Ok(n) => Ok(Duration::from_secs(n)),
        Err(_) => Err(format!("invalid --interval '{v}'")),
    }
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, ArgsError> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "metricdash".into());
    let usage = format!("Usage: {prog} {USAGE}");
    let invalid = |msg: String| ArgsError::Invalid(format!("{msg}\n{usage}"));
    let mut out = ParsedArgs::default();

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(ArgsError::Help(usage.clone())),
            "--interval" | "-i" => {
                let v = it.next().ok_or_else(|| invalid("--interval needs a value".into()))?;
                out.interval = Some(parse_interval(&v).map_err(invalid)?);
            }
            "--tls-ca" | "-t" => {
                out.tls_ca = Some(it.next().ok_or_else(|| invalid("--tls-ca needs a path".into()))?);
            }
            "--log-file" => {
                out.log_file = Some(it.next().ok_or_else(|| invalid("--log-file needs a path".into()))?);
            }
            "--once" => out.once = true,
            _ if arg.starts_with("--interval=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    out.interval = Some(parse_interval(v).map_err(invalid)?);
                }
            }
            _ if arg.starts_with("--tls-ca=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        out.tls_ca = Some(v.to_string());
                    }
                }
            }
            _ if arg.starts_with("--log-file=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        out.log_file = Some(v.to_string());
                    }
                }
            }
            _ => return Err(invalid(format!("Unexpected argument '{arg}'."))),
        }
    }
    Ok(out)
}
