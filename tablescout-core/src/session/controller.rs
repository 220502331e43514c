//! The navigation controller: one owner for the active view, the session,
//! and the account services behind it.

use tracing::{debug, info, warn};

use crate::accounts::{AccountError, Authenticator, CredentialStore, RegistrationService};
use crate::i18n::Translator;

use super::{Action, Session, View};

/// One recorded view swap. `from == to` when a view is torn down and
/// rebuilt in place (failed submit, language change).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: View,
    pub to: View,
}

/// What an action did to the active view.
#[derive(Debug)]
pub enum Outcome {
    /// The active view was replaced by a new one.
    Switched(View),
    /// The view was rebuilt in place and an error is surfaced to the user.
    Rejected(AccountError),
    /// The action is not meaningful in the current view; nothing happened.
    Ignored,
}

/// Drives transitions between views and holds the current-user state.
pub struct NavigationController {
    store: CredentialStore,
    registration: RegistrationService,
    authenticator: Authenticator,
    translator: Translator,
    session: Session,
    view: View,
    transitions: Vec<Transition>,
}

impl NavigationController {
    pub fn new(store: CredentialStore, translator: Translator) -> Self {
        NavigationController {
            store,
            registration: RegistrationService::new(),
            authenticator: Authenticator::new(),
            translator,
            session: Session::new(),
            view: View::Startup,
            transitions: Vec::new(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Every view swap since startup, oldest first.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Handle one user action to completion.
    pub fn handle(&mut self, action: Action) -> Outcome {
        match (self.view, action) {
            (View::Startup, Action::ChooseRegister) => self.switch_to(View::Register),
            (View::Startup, Action::ChooseLogin) => self.switch_to(View::Login),

            (
                View::Register,
                Action::SubmitRegistration { email, password, confirm_password },
            ) => {
                match self.registration.register(
                    &mut self.store,
                    &email,
                    &password,
                    &confirm_password,
                ) {
                    Ok(_) => self.switch_to(View::Login),
                    Err(err) => {
                        warn!(email = %email, error = %err, "registration rejected");
                        self.reenter();
                        Outcome::Rejected(err)
                    }
                }
            }
            (View::Register, Action::Back) => self.switch_to(View::Startup),

            (View::Login, Action::SubmitLogin { email, password }) => {
                if self.authenticator.authenticate(&self.store, &email, &password) {
                    self.session.log_in(email.clone());
                    info!(email = %email, "login successful");
                    self.switch_to(View::Main)
                } else {
                    warn!(email = %email, "login rejected");
                    self.reenter();
                    Outcome::Rejected(AccountError::AuthenticationFailed)
                }
            }
            (View::Login, Action::Back) => self.switch_to(View::Startup),

            (View::Main, Action::ChangeLanguage(language)) => {
                self.translator.set_language(&language);
                info!(language = %self.translator.language(), "display language changed");
                // The main view is rebuilt; the session is untouched.
                self.switch_to(View::Main)
            }

            (view, action) => {
                debug!(?view, ?action, "action ignored in current view");
                Outcome::Ignored
            }
        }
    }

    /// Replace the active view. The old view is dropped here; exactly one
    /// view exists after this returns.
    fn switch_to(&mut self, to: View) -> Outcome {
        self.record(to);
        Outcome::Switched(to)
    }

    /// Tear down and rebuild the current view (error display paths).
    fn reenter(&mut self) {
        let current = self.view;
        self.record(current);
    }

    fn record(&mut self, to: View) {
        let from = std::mem::replace(&mut self.view, to);
        self.transitions.push(Transition { from, to });
        debug!(?from, ?to, "view transition");
    }
}
