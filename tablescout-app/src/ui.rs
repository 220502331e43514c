//! Line-oriented frontend.
//!
//! Renders the active view as text and maps input lines to navigation
//! actions; all state lives in the controller.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tablescout_core::accounts::CredentialStore;
use tablescout_core::catalog::{
    PriceBand, Restaurant, RestaurantBrowsing, RestaurantDatabase, RestaurantFilter,
};
use tablescout_core::config::Config;
use tablescout_core::i18n::Translator;
use tablescout_core::session::{Action, NavigationController, Outcome, View};

pub fn run(config: Config) -> Result<()> {
    let store = CredentialStore::open(config.users_path())?;
    let database = match &config.storage.catalog_file {
        Some(path) => RestaurantDatabase::from_path(path)?,
        None => RestaurantDatabase::seed(),
    };
    let translator = match &config.storage.language_file {
        Some(path) => Translator::from_path(path, &config.language)?,
        None => Translator::new(&config.language),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut controller = NavigationController::new(store, translator);

    loop {
        let keep_going = match controller.view() {
            View::Startup => startup_screen(&mut input, &mut controller)?,
            View::Register => {
                register_screen(&mut input, &mut controller)?;
                true
            }
            View::Login => {
                login_screen(&mut input, &mut controller)?;
                true
            }
            View::Main => main_screen(&mut input, &mut controller, &database)?,
        };
        if !keep_going {
            break;
        }
    }

    Ok(())
}

fn startup_screen(input: &mut impl BufRead, controller: &mut NavigationController) -> Result<bool> {
    println!("\n=== {} ===", tr(controller, "welcome"));
    println!("  1) {}", tr(controller, "register"));
    println!("  2) {}", tr(controller, "login"));
    println!("  q) {}", tr(controller, "quit"));

    let choice = match read_line(input, "> ")? {
        Some(c) => c,
        None => return Ok(false),
    };
    match choice.as_str() {
        "1" => {
            controller.handle(Action::ChooseRegister);
        }
        "2" => {
            controller.handle(Action::ChooseLogin);
        }
        "q" | "quit" => return Ok(false),
        _ => println!("{}", tr(controller, "invalid_choice")),
    }
    Ok(true)
}

fn register_screen(input: &mut impl BufRead, controller: &mut NavigationController) -> Result<()> {
    println!("\n--- {} ---", tr(controller, "register_new_user"));

    // An empty email (or EOF) backs out to the startup view.
    let email = match read_field(input, &tr(controller, "email"))? {
        Some(v) if !v.is_empty() => v,
        _ => {
            controller.handle(Action::Back);
            return Ok(());
        }
    };
    let password = match read_field(input, &tr(controller, "password"))? {
        Some(v) => v,
        None => {
            controller.handle(Action::Back);
            return Ok(());
        }
    };
    let confirm_password = match read_field(input, &tr(controller, "confirm_password"))? {
        Some(v) => v,
        None => {
            controller.handle(Action::Back);
            return Ok(());
        }
    };

    match controller.handle(Action::SubmitRegistration { email, password, confirm_password }) {
        Outcome::Switched(_) => println!("{}", tr(controller, "registration_success")),
        Outcome::Rejected(err) => println!("{}: {}", tr(controller, "error"), err),
        _ => {}
    }
    Ok(())
}

fn login_screen(input: &mut impl BufRead, controller: &mut NavigationController) -> Result<()> {
    println!("\n--- {} ---", tr(controller, "user_login"));

    let email = match read_field(input, &tr(controller, "email"))? {
        Some(v) if !v.is_empty() => v,
        _ => {
            controller.handle(Action::Back);
            return Ok(());
        }
    };
    let password = match read_field(input, &tr(controller, "password"))? {
        Some(v) => v,
        None => {
            controller.handle(Action::Back);
            return Ok(());
        }
    };

    match controller.handle(Action::SubmitLogin { email, password }) {
        Outcome::Rejected(_) => {
            println!("{}: {}", tr(controller, "error"), tr(controller, "invalid_credentials"));
        }
        _ => {}
    }
    Ok(())
}

fn main_screen(
    input: &mut impl BufRead,
    controller: &mut NavigationController,
    database: &RestaurantDatabase,
) -> Result<bool> {
    let user = controller
        .session()
        .current_user()
        .unwrap_or_default()
        .to_string();
    println!("\n=== {} ===", tr(controller, "welcome"));
    println!("{}: {}", tr(controller, "logged_in_as"), user);
    println!("{}:", tr(controller, "browse"));
    println!("  list | top <n> | cuisine <name> | location <name> | rating <min>");
    println!("  filter [cuisine=..] [location=..] [rating=..] [price=..] [delivery=yes|no]");
    println!("  lang <code> | q");

    let line = match read_line(input, "> ")? {
        Some(l) => l,
        None => return Ok(false),
    };
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("list") => {
            print_restaurants(&RestaurantFilter::new().apply(database), controller);
        }
        Some("top") => {
            let n = parts.next().and_then(|s| s.parse().ok()).unwrap_or(5);
            print_restaurants(&RestaurantBrowsing::new(database).top_rated(n), controller);
        }
        Some("cuisine") => {
            let name = parts.collect::<Vec<_>>().join(" ");
            print_restaurants(&RestaurantBrowsing::new(database).by_cuisine(&name), controller);
        }
        Some("location") => {
            let name = parts.collect::<Vec<_>>().join(" ");
            print_restaurants(&RestaurantBrowsing::new(database).by_location(&name), controller);
        }
        Some("rating") => match parts.next().and_then(|s| s.parse::<f32>().ok()) {
            Some(min) => {
                print_restaurants(&RestaurantBrowsing::new(database).min_rating(min), controller);
            }
            None => println!("{}", tr(controller, "invalid_choice")),
        },
        Some("filter") => {
            let filter = parse_filter(parts);
            print_restaurants(&filter.apply(database), controller);
        }
        Some("lang") => match parts.next() {
            Some(code) => {
                controller.handle(Action::ChangeLanguage(code.to_string()));
            }
            None => println!("{}", tr(controller, "invalid_choice")),
        },
        Some("q") | Some("quit") => return Ok(false),
        _ => println!("{}", tr(controller, "invalid_choice")),
    }
    Ok(true)
}

fn print_restaurants(results: &[&Restaurant], controller: &NavigationController) {
    if results.is_empty() {
        println!("{}", tr(controller, "no_results"));
        return;
    }
    for r in results {
        println!(
            "  {:<18} {:<12} {:<10} {:>4.1}  {:<8} {}",
            r.name,
            r.cuisine,
            r.location,
            r.rating,
            r.price,
            if r.delivery { "delivery" } else { "" }
        );
    }
}

/// Build a filter from `key=value` tokens; unknown keys and bad values
/// are skipped rather than refused.
fn parse_filter<'a>(parts: impl Iterator<Item = &'a str>) -> RestaurantFilter {
    let mut filter = RestaurantFilter::new();
    for part in parts {
        let (key, value) = match part.split_once('=') {
            Some(kv) => kv,
            None => continue,
        };
        match key {
            "cuisine" => filter.cuisine = Some(value.to_string()),
            "location" => filter.location = Some(value.to_string()),
            "rating" => filter.min_rating = value.parse().ok(),
            "price" => filter.price = PriceBand::parse(value),
            "delivery" => {
                filter.delivery = match value {
                    "yes" | "true" => Some(true),
                    "no" | "false" => Some(false),
                    _ => None,
                }
            }
            _ => {}
        }
    }
    filter
}

fn tr(controller: &NavigationController, key: &str) -> String {
    controller.translator().translate(key).to_string()
}

fn read_field(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    read_line(input, &format!("{}: ", label))
}

/// Print a prompt and read one trimmed line; `None` on EOF.
fn read_line(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
