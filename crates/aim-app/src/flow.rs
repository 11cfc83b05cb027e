//! Screen flow coordinator.
//!
//! Ties the login form, the session tracker and the back stack together the
//! way the screens move: login → dashboard (login popped) → ETF detail.

use aim_core::form::FormState;
use aim_core::navigation::{DashboardTab, NavStack, PopUpTo, Route};
use aim_core::AppConfig;
use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};

use crate::deps::AppDeps;
use crate::usecases::{LoginForm, SessionCommands, SessionError, SessionTracker};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("login form is not valid")]
    InvalidForm,

    #[error(transparent)]
    Session(#[from] SessionError),
}

const LEAVE_LOGIN: PopUpTo = PopUpTo {
    route: Route::Login,
    inclusive: true,
};

pub struct AppFlow {
    form: LoginForm,
    tracker: SessionTracker,
    session: SessionCommands,
    nav: NavStack,
    tab: DashboardTab,
    await_persistence: bool,
}

impl AppFlow {
    /// Build the flow and start session tracking. Must be called inside a tokio runtime.
    pub fn new(deps: &AppDeps, config: &AppConfig) -> Self {
        Self {
            form: LoginForm::new(config.confirm_revalidation),
            tracker: SessionTracker::start(deps.preferences.clone()),
            session: SessionCommands::new(
                deps.preferences.clone(),
                deps.hasher.clone(),
                config.password_storage,
            ),
            nav: NavStack::default(),
            tab: DashboardTab::default(),
            await_persistence: config.await_persistence,
        }
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn tracker(&self) -> &SessionTracker {
        &self.tracker
    }

    pub fn session(&self) -> &SessionCommands {
        &self.session
    }

    pub fn nav(&self) -> &NavStack {
        &self.nav
    }

    pub fn route(&self) -> Route {
        self.nav.current()
    }

    pub fn tab(&self) -> DashboardTab {
        self.tab
    }

    /// Persist the form's credentials and move to the dashboard.
    ///
    /// With `await_persistence` the route only changes after the write is
    /// committed; otherwise the write is detached and failures only reach the
    /// failure channel.
    pub async fn submit_login(&mut self) -> Result<Route, SubmitError> {
        let span = info_span!("flow.submit_login", await_persistence = self.await_persistence);

        async {
            let state: FormState = self.form.snapshot();
            let Some(credentials) = state.credentials() else {
                warn!("Login submitted with an invalid form");
                return Err(SubmitError::InvalidForm);
            };

            let pending = self.session.login(credentials);
            if self.await_persistence {
                pending.confirmed().await?;
            } else {
                drop(pending);
            }

            self.enter_dashboard();
            info!("Logged in");
            Ok(self.route())
        }
        .instrument(span)
        .await
    }

    /// Skip the login screen when a saved session is present. Returns whether
    /// the route changed.
    pub fn sync_auto_login(&mut self) -> bool {
        if self.route() != Route::Login || !self.tracker.is_present() {
            return false;
        }
        self.enter_dashboard();
        info!("Auto-login from saved session");
        true
    }

    /// Wait for the first store snapshot, then apply [`AppFlow::sync_auto_login`].
    pub async fn wait_for_auto_login(&mut self) -> bool {
        self.tracker.synced().await;
        self.sync_auto_login()
    }

    /// Returns `false` when the detail screen is not reachable from the current route.
    pub fn open_etf_detail(&mut self) -> bool {
        if self.route() != Route::Dashboard {
            return false;
        }
        self.nav.navigate(Route::EtfDetail, None);
        true
    }

    pub fn select_tab(&mut self, tab: DashboardTab) -> DashboardTab {
        self.tab = tab;
        self.tab
    }

    pub fn back(&mut self) -> bool {
        self.nav.pop_back()
    }

    /// Clear the store, then return to a fresh login screen.
    pub async fn logout(&mut self) -> Result<(), SessionError> {
        self.session.logout().confirmed().await?;
        self.form.reset();
        self.nav.reset(Route::Login);
        self.tab = DashboardTab::default();
        info!("Logged out");
        Ok(())
    }

    pub async fn shutdown(&self) {
        self.tracker.stop().await;
    }

    fn enter_dashboard(&mut self) {
        self.nav.navigate(Route::Dashboard, Some(LEAVE_LOGIN));
        self.tab = DashboardTab::default();
    }
}
