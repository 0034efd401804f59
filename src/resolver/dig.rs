//! `dig` subprocess resolver.
//!
//! Runs the `dig` binary directly (never through a shell) and hands back its
//! stdout. Each invocation is bounded by a timeout and killed if it overruns.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use super::NameResolver;
use crate::error_handling::ResolverError;

/// `dig` exit status when no server answered.
const NO_REPLY_EXIT_CODE: i32 = 9;

const HEADER_MARKER: &str = ";; ->>HEADER<<-";

/// Query option that makes `dig` print the HEADER block of a zone transfer.
const PRINT_QUERY_OPTION: &str = "+qr";

/// [`NameResolver`] backed by the `dig` command-line tool.
#[derive(Debug, Clone)]
pub struct DigResolver {
    binary: PathBuf,
    timeout: Duration,
}

impl DigResolver {
    /// Creates a resolver that runs `binary` with a per-invocation `timeout`.
    pub fn new(binary: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }

    async fn run(&self, args: Vec<String>) -> Result<String, ResolverError> {
        log::debug!("Running {} {}", self.binary.display(), args.join(" "));

        let mut command = Command::new(&self.binary);
        command
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| {
                ResolverError::Unavailable(format!(
                    "{} timed out after {:?}",
                    self.binary.display(),
                    self.timeout
                ))
            })?
            .map_err(|e| {
                ResolverError::Unavailable(format!("failed to run {}: {e}", self.binary.display()))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            // exit 9 is "no reply from server"; dig prints the timeout notice
            // on stdout, which is not a transcript
            let has_reply = output.status.code() != Some(NO_REPLY_EXIT_CODE)
                && stdout.contains(HEADER_MARKER);
            if !has_reply {
                return Err(ResolverError::Unavailable(failure_message(
                    &self.binary.display().to_string(),
                    &output.status.to_string(),
                    &stdout,
                    &String::from_utf8_lossy(&output.stderr),
                )));
            }
            log::debug!(
                "{} exited with {}; keeping its reply",
                self.binary.display(),
                output.status
            );
        }

        if stdout.trim().is_empty() {
            return Err(ResolverError::Unavailable(format!(
                "{} produced no output",
                self.binary.display()
            )));
        }

        Ok(stdout)
    }
}

#[async_trait]
impl NameResolver for DigResolver {
    async fn lookup(
        &self,
        name: &str,
        record_type: &str,
        server: Option<&str>,
    ) -> Result<String, ResolverError> {
        self.run(lookup_args(name, record_type, server)?).await
    }

    async fn reverse_lookup(
        &self,
        ip: &str,
        server: Option<&str>,
    ) -> Result<String, ResolverError> {
        self.run(reverse_args(ip, server)?).await
    }

    async fn text_lookup(&self, name: &str) -> Result<String, ResolverError> {
        self.run(lookup_args(name, "TXT", None)?).await
    }
}

fn failure_message(binary: &str, status: &str, stdout: &str, stderr: &str) -> String {
    let detail: Vec<&str> = [stderr.trim(), stdout.trim()]
        .into_iter()
        .filter(|text| !text.is_empty())
        .collect();
    if detail.is_empty() {
        format!("{binary} exited with {status}")
    } else {
        format!("{binary} exited with {status}: {}", detail.join("; "))
    }
}

/// Rejects arguments `dig` would read as an option or query flag.
fn check_argument(value: &str) -> Result<&str, ResolverError> {
    if value.is_empty() || value.starts_with('-') || value.starts_with('+') {
        return Err(ResolverError::InvalidArgument(value.to_string()));
    }
    Ok(value)
}

fn push_server(args: &mut Vec<String>, server: Option<&str>) -> Result<(), ResolverError> {
    if let Some(server) = server {
        args.push(format!("@{}", check_argument(server)?));
    }
    Ok(())
}

pub(crate) fn lookup_args(
    name: &str,
    record_type: &str,
    server: Option<&str>,
) -> Result<Vec<String>, ResolverError> {
    let mut args = vec![
        check_argument(name)?.to_string(),
        "-t".to_string(),
        check_argument(record_type)?.to_string(),
    ];
    if record_type.eq_ignore_ascii_case("AXFR") {
        args.push(PRINT_QUERY_OPTION.to_string());
    }
    push_server(&mut args, server)?;
    Ok(args)
}

pub(crate) fn reverse_args(ip: &str, server: Option<&str>) -> Result<Vec<String>, ResolverError> {
    let mut args = vec!["-x".to_string(), check_argument(ip)?.to_string()];
    push_server(&mut args, server)?;
    Ok(args)
}
