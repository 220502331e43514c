//! TableScout core library.
//!
//! Local accounts over a flat JSON credential file, a navigation state
//! machine driving the application's views, a restaurant catalog with
//! browsing and filtering, localized message tables, configuration, and
//! logging. The binary crate wires these together behind a terminal
//! frontend.

pub mod accounts;
pub mod catalog;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod session;

pub use accounts::{Account, AccountError, Authenticator, CredentialStore, RegistrationService};
pub use catalog::{
    PriceBand, Restaurant, RestaurantBrowsing, RestaurantDatabase, RestaurantFilter,
};
pub use config::Config;
pub use i18n::Translator;
pub use logging::{init_logging, init_logging_with_config, LogConfig, LogLevel};
pub use session::{Action, NavigationController, Outcome, Session, Transition, View};
