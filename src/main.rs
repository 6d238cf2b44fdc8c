// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! api-base CLI
//!
//! Builds a client from the process environment and issues single calls.

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use api_base::{ApiClient, ProcessEnvironment};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("api_base=info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "host" => show_host(),
        "options" => show_options(),
        "get" | "delete" => match args.get(2) {
            Some(path) => call(&args[1], path, None).await,
            None => {
                eprintln!("Usage: api-base {} <path>", args[1]);
                return ExitCode::from(1);
            }
        },
        "post" | "put" | "patch" => match (args.get(2), args.get(3)) {
            (Some(path), Some(body)) => call(&args[1], path, Some(body)).await,
            _ => {
                eprintln!("Usage: api-base {} <path> <json>", args[1]);
                return ExitCode::from(1);
            }
        },
        "--help" | "-h" | "help" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        "--version" | "-v" | "version" => {
            println!("api-base {}", api_base::VERSION);
            return ExitCode::SUCCESS;
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            return ExitCode::from(1);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"api-base - Base API client

USAGE:
    api-base <COMMAND> [ARGS]

COMMANDS:
    host                    Show the API host derived from API_HOSTNAME
    options                 Show the headers sent with every request
    get <path>              GET a path and print the JSON response
    delete <path>           DELETE a path and print the JSON response
    post <path> <json>      POST a JSON body
    put <path> <json>       PUT a JSON body
    patch <path> <json>     PATCH a JSON body
    help                    Show this help message
    version                 Show version information

ENVIRONMENT:
    API_HOSTNAME    Page hostname (default: localhost)
    API_COOKIE      Cookie string, e.g. "x-api-key=secret; theme=dark"
    RUST_LOG        Log filter (default: api_base=info)

EXAMPLES:
    api-base host
    API_HOSTNAME=example.com api-base get /items
    API_COOKIE="x-api-key=secret" api-base post /items '{{"name":"widget"}}'
"#
    );
}

fn client() -> anyhow::Result<ApiClient> {
    ApiClient::new(ProcessEnvironment).context("Failed to create API client")
}

fn show_host() -> anyhow::Result<()> {
    println!("{}", client()?.host());
    Ok(())
}

fn show_options() -> anyhow::Result<()> {
    let options = client()?.options();
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}

async fn call(method: &str, path: &str, body: Option<&String>) -> anyhow::Result<()> {
    let api = client()?;

    let body: Option<Value> = body
        .map(|b| serde_json::from_str(b))
        .transpose()
        .context("Request body is not valid JSON")?;

    let response: Value = match (method, body) {
        ("get", _) => api.get(path).await?,
        ("delete", _) => api.delete(path).await?,
        ("post", Some(body)) => api.post(path, &body).await?,
        ("put", Some(body)) => api.put(path, &body).await?,
        ("patch", Some(body)) => api.patch(path, &body).await?,
        (other, _) => anyhow::bail!("Unsupported method: {}", other),
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
