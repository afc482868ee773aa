//! Navigation commands.

use super::build_guard;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use route_guard::Navigation;

/// Resolve a console path through the route guard.
pub fn open(path: &str, format: &OutputFormat) -> Result<()> {
    let guard = build_guard()?;
    let navigation = guard.resolve(path);

    match format {
        OutputFormat::Text => match &navigation {
            Navigation::Proceed { name, params } => {
                println!("Opening {}", name);
                for (key, value) in params {
                    output::print_row(key, value);
                }
            }
            Navigation::Redirect { to } => {
                println!("Not logged in, redirecting to {}", to);
            }
            Navigation::NotFound => {
                output::print_error(&format!("No route matches {}", path), format);
            }
        },
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&navigation)?);
        }
    }

    Ok(())
}

/// List the console's routes.
pub fn routes(format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{:<32} {:<24} {}", "Pattern", "Name", "Auth");
            output::print_divider(64);
            for route in route_guard::table() {
                println!(
                    "{:<32} {:<24} {}",
                    route.pattern,
                    route.name,
                    if route.requires_auth {
                        "required"
                    } else {
                        "public"
                    }
                );
            }
        }
        OutputFormat::Json => {
            let rows: Vec<_> = route_guard::table()
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "pattern": r.pattern,
                        "name": r.name,
                        "requires_auth": r.requires_auth,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}
