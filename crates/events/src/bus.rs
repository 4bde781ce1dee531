use super::models::{AppEvent, EventBus};
use std::sync::Arc;
use colored::Colorize;

impl EventBus {
    pub fn new(silent_mode: bool) -> Arc<Self> {
        Arc::new(Self { silent_mode })
    }

    pub fn emit(&self, event: AppEvent) {
        // Warnings and errors always reach the log, even when the console is silenced
        match &event {
            AppEvent::ConfigCreated { path } => {
                tracing::warn!("Configuration file not found");
                tracing::info!("Created default configuration at: {}", path);
            }
            AppEvent::PathTableEmpty { category } => {
                tracing::warn!("Category '{}' produced no switcher paths", category);
            }
            AppEvent::Error { context, error } => {
                tracing::error!("{}: {}", context, error);
            }
            _ => {}
        }

        if self.silent_mode {
            return;
        }

        match event {
            // Application lifecycle
            AppEvent::Starting => {
                println!("\n{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
                println!("  {}", "Version Switcher".white().bold());
                println!("  {} {}", "Version".dimmed(), env!("CARGO_PKG_VERSION").cyan());
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
            }
            AppEvent::Ready { addr, base_url } => {
                println!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
                println!("  {} {}", "Server".white(), addr.cyan());
                println!("  {} {}", "URL   ".white(), base_url.blue());
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
            }
            AppEvent::Shutdown => {
                println!("\n{}", "Server shutting down".red());
            }

            // Configuration
            AppEvent::ConfigLoading { path } => {
                println!("  {} {}", "Loading config".dimmed(), path.cyan());
            }
            AppEvent::ConfigLoaded { directory_path } => {
                println!("  {} Directory {}", "✓".green(), directory_path.cyan());
            }
            AppEvent::ConfigMigrated { added_fields } => {
                if !added_fields.is_empty() {
                    println!("  {} Config updated: added {}",
                        "↻".blue(),
                        added_fields.join(", ").dimmed()
                    );
                }
            }
            AppEvent::ConfigCreated { .. } => {
                // Logged above
            }

            // Content directory
            AppEvent::DirectoryLoading { path } => {
                println!("  {} {}", "Reading directory".dimmed(), path.cyan());
            }
            AppEvent::DirectoryLoaded { categories } => {
                println!("  {} {} categor(y/ies)", "✓".green(), categories.to_string().cyan());
            }

            // Path table
            AppEvent::PathTableBuilt { category, entries, paths } => {
                println!("  {} {} → {} entries, {} paths",
                    "✓".green(),
                    category.cyan(),
                    entries.to_string().cyan(),
                    paths.to_string().cyan()
                );
            }
            AppEvent::PathTableEmpty { category } => {
                println!("  {} No paths under {}", "⚠".yellow(), category.cyan());
            }

            // Errors
            AppEvent::Error { .. } => {
                // Logged above
            }
        }
    }
}
