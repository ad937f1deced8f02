//! kube-check - monitoring plugin for Kubernetes node and pod health.
//!
//! This is the entry point for the `check_kube` binary. It prints one
//! report on stdout and exits with the matching plugin status code:
//!
//! | Code | Meaning  |
//! |------|----------|
//! | 0    | OK       |
//! | 1    | WARNING  |
//! | 2    | CRITICAL |
//! | 3    | UNKNOWN  |
//!
//! Logs go to stderr so they never mix with plugin output.

mod args;
mod dispatch;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use kube_check_core::{Report, Severity};
use tracing_subscriber::EnvFilter;

use args::Args;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are "errors" that belong on stdout.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(Severity::Unknown.exit_code())
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(args.debug);

    let report = run(&args).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Check could not run");
        Report::connectivity_failure(format!("{e:#}"))
    });

    println!("{report}");
    ExitCode::from(report.exit_code())
}

/// Run the selected check on a single-threaded runtime.
fn run(args: &Args) -> anyhow::Result<Report> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    Ok(runtime.block_on(dispatch::check_cluster(&args.cluster_config(), args.check())))
}

/// Filter for `--debug`: this binary plus the library crates.
const DEBUG_FILTER: &str = "check_kube=debug,kube_check=debug,warn";
const DEFAULT_FILTER: &str = "warn";

fn init_tracing(debug: bool) {
    let default_filter = if debug { DEBUG_FILTER } else { DEFAULT_FILTER };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use dispatch::Check;
    use kube_check_cluster::MockClusterClient;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logs_for(filter: &str) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        tracing::subscriber::with_default(subscriber, || {
            runtime.block_on(dispatch::run_check(
                &MockClusterClient::new(),
                Check::Pod {
                    grace_period: Duration::from_secs(300),
                },
                chrono::Utc::now(),
            ));
        });

        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn debug_filter_shows_dispatcher_logs() {
        let logs = logs_for(DEBUG_FILTER);
        assert!(logs.contains("Check evaluated"), "dispatcher log missing: {logs:?}");
        assert!(logs.contains("check_kube::dispatch"));
    }

    #[test]
    fn default_filter_hides_dispatcher_logs() {
        assert!(logs_for(DEFAULT_FILTER).is_empty());
    }
}
