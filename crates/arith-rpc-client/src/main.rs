//! Arith RPC Client - command-line caller for an arith-rpc endpoint.
//!
//! With only `HOST PORT` it runs a fixed set of self-checks against the server
//! and prints `true` or `false` for each. `call METHOD ARGS...` performs a
//! single call and prints its result.

use anyhow::Result;
use arith_rpc_core::RpcClient;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "arith-rpc-client")]
#[command(about = "XML-RPC client for 32-bit integer arithmetic")]
struct Args {
    /// Address of the endpoint
    host: String,

    /// Port of the endpoint
    port: u16,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Run the built-in self-checks (default)
    Check,
    /// Call one method and print the result
    Call {
        /// add, subtract, multiply, divide or modulo
        method: String,
        /// Integer arguments, in order
        #[arg(allow_negative_numbers = true)]
        args: Vec<i32>,
    },
}

/// A call with a known answer.
struct SelfCheck {
    method: &'static str,
    args: &'static [i32],
    expected: i32,
}

const SELF_CHECKS: &[SelfCheck] = &[
    SelfCheck {
        method: "add",
        args: &[],
        expected: 0,
    },
    SelfCheck {
        method: "add",
        args: &[1, 2, 3, 4, 5],
        expected: 15,
    },
    SelfCheck {
        method: "add",
        args: &[2, 4],
        expected: 6,
    },
    SelfCheck {
        method: "subtract",
        args: &[12, 6],
        expected: 6,
    },
    SelfCheck {
        method: "multiply",
        args: &[3, 4],
        expected: 12,
    },
    SelfCheck {
        method: "multiply",
        args: &[1, 2, 3, 4, 5],
        expected: 120,
    },
    SelfCheck {
        method: "divide",
        args: &[10, 5],
        expected: 2,
    },
    SelfCheck {
        method: "modulo",
        args: &[10, 5],
        expected: 0,
    },
];

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Set up logging; stdout is reserved for results
    let log_level = if args.debug { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let client = RpcClient::for_host(&args.host, args.port)?;
    info!("Using endpoint {}", client.endpoint());

    match args.command.unwrap_or(Command::Check) {
        Command::Check => {
            let mut all_passed = true;
            for check in SELF_CHECKS {
                let passed = run_check(&client, check).await;
                all_passed &= passed;
                println!("{}", passed);
            }
            Ok(if all_passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Call { method, args } => {
            let value = client.call(&method, &args).await?;
            println!("{}", value);
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_check(client: &RpcClient, check: &SelfCheck) -> bool {
    match client.call(check.method, check.args).await {
        Ok(value) => value == check.expected,
        Err(e) => {
            warn!("{}({:?}) failed: {}", check.method, check.args, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arith_rpc_core::{dispatcher, Call, Response};

    #[test]
    fn test_self_checks_match_local_dispatch() {
        for check in SELF_CHECKS {
            assert_eq!(
                dispatcher::execute(&Call::new(check.method, check.args.to_vec())),
                Response::Success(check.expected),
                "{}({:?})",
                check.method,
                check.args
            );
        }
    }

    #[test]
    fn test_parse_default_is_check() {
        let args = Args::try_parse_from(["arith-rpc-client", "localhost", "8080"]).unwrap();
        assert_eq!(args.host, "localhost");
        assert_eq!(args.port, 8080);
        assert_eq!(args.command, None);
    }

    #[test]
    fn test_parse_call_with_negative_args() {
        let args = Args::try_parse_from([
            "arith-rpc-client",
            "127.0.0.1",
            "9000",
            "call",
            "subtract",
            "-3",
            "4",
        ])
        .unwrap();
        assert_eq!(
            args.command,
            Some(Command::Call {
                method: "subtract".to_string(),
                args: vec![-3, 4],
            })
        );
    }

    #[test]
    fn test_parse_requires_host_and_port() {
        assert!(Args::try_parse_from(["arith-rpc-client", "localhost"]).is_err());
        assert!(Args::try_parse_from(["arith-rpc-client", "localhost", "port"]).is_err());
    }
}
