//! Interactive driver for the chalkboard navigation core.
//!
//! Stands in for the browser host: wires the authentication state, the
//! route guard, and the navigation shell together, then accepts line
//! commands (`go <path>`, `login <name>`, `logout`, `whoami`, `routes`,
//! `quit`). It renders no pages — it only shows where each navigation
//! lands.

mod config;

use chalkboard_access::{AuthState, UserIdentity};
use chalkboard_guard::RouteGuard;
use chalkboard_shell::{MemoryHistory, NavigationShell, RouteEntry, RouteTable};
use config::AppConfig;
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().expect("failed to load configuration");
    tracing::info!("Loaded configuration");

    let auth = AuthState::new();
    let guard = RouteGuard::new(&config.guard, auth.clone());
    let routes = course_platform_routes();

    // Header stand-in: reacts to auth transitions the way the real
    // header re-renders.
    let _header = auth.subscribe(|snapshot| match snapshot.user() {
        Some(user) => println!("* signed in as {}", user.display_name()),
        None => println!("* signed out"),
    });

    let mut shell = NavigationShell::new(guard, MemoryHistory::new(), &config.start_path);
    println!("at {}", shell.current_path());

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().expect("failed to flush stdout");

        let mut line = String::new();
        let read = stdin.read_line(&mut line).expect("failed to read input");
        if read == 0 {
            break;
        }

        let line = line.trim();
        let (command, argument) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "go" if !argument.is_empty() => {
                shell.navigate(argument);
                println!("at {}", shell.current_path());
            }
            "login" if !argument.is_empty() => {
                auth.login(UserIdentity::new(argument));
                shell.refresh();
                println!("at {}", shell.current_path());
            }
            "logout" => {
                auth.logout();
                shell.refresh();
                println!("at {}", shell.current_path());
            }
            "whoami" => match auth.current_user() {
                Some(user) => println!("{} ({})", user.display_name(), user.user_id()),
                None => println!("signed out"),
            },
            "routes" => {
                for entry in routes.visible_entries() {
                    println!("{:<12} {}", entry.name, entry.path);
                }
            }
            "quit" | "exit" => break,
            _ => {
                println!("commands: go <path>, login <name>, logout, whoami, routes, quit");
            }
        }
    }
}

/// The course platform's page table.
///
/// Detail pages use `:param` router segments; the public whitelist covers
/// them with prefix patterns instead (e.g. `/course/*`).
fn course_platform_routes() -> RouteTable {
    RouteTable::new(vec![
        RouteEntry::new("Home", "/"),
        RouteEntry::hidden("Login", "/login"),
        RouteEntry::new("Courses", "/courses"),
        RouteEntry::hidden("Course Detail", "/course/:courseId"),
        RouteEntry::hidden("Lesson", "/lesson/:lessonId"),
        RouteEntry::hidden("Dashboard", "/dashboard"),
        RouteEntry::hidden("Profile", "/profile"),
        RouteEntry::hidden("Admin", "/admin"),
    ])
}
