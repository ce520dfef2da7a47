mod assignment;
mod client;
mod config;
mod selector;
mod session;
mod sheets;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use dialoguer::Select;
use tracing_subscriber::EnvFilter;

use crate::assignment::Assignments;
use crate::client::{Boutique, DrawnClient};
use crate::config::Config;
use crate::session::Session;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let matches = Command::new("Ile-des-Miracles")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Draws the visitors of L'Île des Miracles from the shared client sheet")
        .arg(
            Arg::new("mode")
                .long("mode")
                .value_name("MODE")
                .help("draw: reveal a handful of clients; boutique: one client per boutique")
                .default_value("draw")
                .value_parser(["draw", "boutique"]),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .value_name("N")
                .help("Clients per draw (overrides ILE_DRAW_COUNT)")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("sheet-url")
                .long("sheet-url")
                .value_name("URL")
                .help("CSV export URL (overrides ILE_SHEET_URL)"),
        )
        .arg(
            Arg::new("offline")
                .long("offline")
                .help("Skip the sheet and use the sample clients")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("boutique")
                .long("boutique")
                .value_name("NAME")
                .help("Boutique to draw for, in order (Lisa, Morgane, Mildred); repeatable")
                .action(ArgAction::Append)
                .value_parser(|s: &str| s.parse::<Boutique>()),
        )
        .get_matches();

    let mut config = Config::load()?;
    if let Some(count) = matches.get_one::<usize>("count") {
        config.draw_count = *count;
    }
    if let Some(url) = matches.get_one::<String>("sheet-url") {
        config.sheet_url = url.clone();
    }

    let clients = if matches.get_flag("offline") {
        sheets::fallback_clients()
    } else {
        sheets::load_from_url(&config.sheet_url, config.request_timeout()).await
    };

    let mut session = Session::new(clients);
    if !session.is_ready() {
        println!("The sheet has no clients yet, nothing to draw.");
        return Ok(());
    }

    let mut rng = rand::thread_rng();
    let mode = matches.get_one::<String>("mode").map(String::as_str);
    match mode {
        Some("boutique") => {
            let scripted: Vec<Boutique> = matches
                .get_many::<Boutique>("boutique")
                .map(|b| b.copied().collect())
                .unwrap_or_default();
            if scripted.is_empty() {
                run_interactive(&mut session)?;
            } else {
                for boutique in scripted {
                    if let Some(drawn) = session.draw_for(boutique, &mut rng) {
                        print_card(&drawn);
                    }
                }
                print_board(session.assignments());
            }
        }
        _ => {
            for drawn in session.draw(config.draw_count, &mut rng) {
                print_card(&drawn);
            }
        }
    }

    Ok(())
}

/// One boutique per action until the visitor picks "Quit".
fn run_interactive(session: &mut Session) -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut items: Vec<String> = Boutique::ALL
        .iter()
        .map(|b| format!("Boutique de {}", b))
        .collect();
    items.push("Quit".to_string());

    loop {
        let choice = Select::new()
            .with_prompt("Which boutique opens its door?")
            .items(&items)
            .default(0)
            .interact()
            .context("Failed to read boutique choice")?;

        let Some(&boutique) = Boutique::ALL.get(choice) else {
            return Ok(());
        };
        if let Some(drawn) = session.draw_for(boutique, &mut rng) {
            print_card(&drawn);
        }
        print_board(session.assignments());
        if session.assignments().is_complete() {
            tracing::info!("every boutique has a visitor");
        }
    }
}

fn print_card(drawn: &DrawnClient) {
    println!("{}\n", drawn);
}

fn print_board(board: &Assignments) {
    println!("── Boutiques ──");
    for (boutique, client) in board.iter() {
        match client {
            Some(c) => println!("{:<8} {} {}", boutique, c.emoji_or_default(), c.name),
            None => println!("{:<8} …", boutique),
        }
    }
    println!();
}
