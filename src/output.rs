//! Text and JSON rendering for CLI results.

use aim_core::portfolio::EtfItem;
use aim_shell::commands::dto::{DashboardDto, FormStateDto, RouteDto, SessionStatusDto};
use aim_shell::commands::CommandError;
use anyhow::Result;
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn field(json: bool, state: &FormStateDto, name: &str) -> Result<()> {
    let Some(field) = state.field(name) else {
        return Ok(());
    };
    if json {
        return print_json(field);
    }
    match &field.error {
        Some(message) => println!("{name}: {message}"),
        None => println!("{name}: ok"),
    }
    Ok(())
}

pub fn form(json: bool, state: &FormStateDto) -> Result<()> {
    if json {
        return print_json(state);
    }
    for field in &state.fields {
        if let Some(message) = &field.error {
            println!("{}: {message}", field.name);
        }
    }
    println!("form valid: {}", state.is_valid);
    Ok(())
}

pub fn route(json: bool, what: &str, route: &RouteDto) -> Result<()> {
    if json {
        return print_json(route);
    }
    println!("{what}, now at {}", route.route);
    Ok(())
}

pub fn status(json: bool, status: &SessionStatusDto) -> Result<()> {
    if json {
        return print_json(status);
    }
    let session = if status.logged_in { "saved" } else { "none" };
    println!("session: {session}");
    println!("start screen: {}", status.route.route);
    Ok(())
}

pub fn dashboard(json: bool, dashboard: &DashboardDto) -> Result<()> {
    if json {
        return print_json(dashboard);
    }
    let tabs: Vec<String> = dashboard
        .tabs
        .iter()
        .map(|t| if t.selected { format!("[{}]", t.label) } else { t.label.to_string() })
        .collect();
    println!("{}", tabs.join(" | "));
    for group in &dashboard.groups {
        println!("{} {} {:.2}%", group.color, group.label, group.total_percentage);
        for item in &group.items {
            println!("    {:<20} {:>6.2}%", item.name, item.percentage);
        }
    }
    println!("total {:.2}%", dashboard.total_percentage);
    Ok(())
}

pub fn etfs(json: bool, etfs: &[EtfItem]) -> Result<()> {
    if json {
        return print_json(etfs);
    }
    for etf in etfs {
        println!("{}  {}  {}", etf.title, etf.change_rate, etf.shares);
        println!("    {}", etf.description);
    }
    Ok(())
}

pub fn command_error(json: bool, err: &CommandError) -> Result<()> {
    if json {
        return print_json(err);
    }
    eprintln!("error [{}]: {}", err.code, err.message);
    Ok(())
}
