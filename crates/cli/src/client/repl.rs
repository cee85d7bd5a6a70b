use super::output::{
    no_results_message, render_json, render_json_error, render_table, timeout_message,
};
use minidns_application::use_cases::LookupDomainUseCase;
use minidns_domain::{DomainError, LookupResult};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

const PROMPT: &str = "Enter a domain name (or type 'exit' to quit): ";
const EXIT_COMMAND: &str = "exit";

/// Prompts for names until `exit` or end of input. Failed lookups are
/// reported and the prompt comes back.
pub async fn run_repl(lookup: &LookupDomainUseCase, timeout_secs: u64) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}", PROMPT);
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == EXIT_COMMAND {
            println!("Exiting DNS client.");
            break;
        }

        debug!(domain = %input, "Query sent");
        match lookup.execute(input).await {
            Ok(result) => print_result(&result),
            Err(e) => eprintln!("{}", describe_error(&e, timeout_secs)),
        }
    }

    Ok(())
}

/// Resolves each name once. Returns how many lookups failed; a name with no
/// records is not a failure.
pub async fn run_lookups(
    lookup: &LookupDomainUseCase,
    domains: &[String],
    json: bool,
    timeout_secs: u64,
) -> anyhow::Result<usize> {
    let mut failures = 0;

    for domain in domains {
        match lookup.execute(domain).await {
            Ok(result) if json => println!("{}", render_json(&result)?),
            Ok(result) => print_result(&result),
            Err(e) => {
                failures += 1;
                if json {
                    println!("{}", render_json_error(domain, &e.to_string()));
                } else {
                    eprintln!("{}", describe_error(&e, timeout_secs));
                }
            }
        }
    }

    Ok(failures)
}

fn print_result(result: &LookupResult) {
    if result.is_empty() {
        println!("{}", no_results_message(&result.domain));
    } else {
        print!("{}", render_table(result));
    }
}

fn describe_error(error: &DomainError, timeout_secs: u64) -> String {
    match error {
        DomainError::Timeout { .. } => timeout_message(timeout_secs),
        other => format!("Lookup failed: {}", other),
    }
}
