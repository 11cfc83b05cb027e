//! Screen destinations and the back stack.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Login,
    Dashboard,
    EtfDetail,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Login => "login",
            Route::Dashboard => "dashboard",
            Route::EtfDetail => "etf-detail",
        }
    }
}

/// Tabs shown under the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardTab {
    My,
    Trend,
    #[default]
    Allocation,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [DashboardTab::My, DashboardTab::Trend, DashboardTab::Allocation];

    pub fn route(&self) -> &'static str {
        match self {
            DashboardTab::My => "my",
            DashboardTab::Trend => "trend",
            DashboardTab::Allocation => "allocation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::My => "MY AIM",
            DashboardTab::Trend => "자산추이",
            DashboardTab::Allocation => "자산배분",
        }
    }

    pub fn from_route(route: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.route() == route)
    }
}

/// Pop entries up to `route` before pushing; `inclusive` pops `route` too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopUpTo {
    pub route: Route,
    pub inclusive: bool,
}

/// Back stack of screens. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStack {
    entries: Vec<Route>,
}

impl Default for NavStack {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}

impl NavStack {
    pub fn new(start: Route) -> Self {
        Self {
            entries: vec![start],
        }
    }

    pub fn current(&self) -> Route {
        // invariant: entries is never empty
        self.entries.last().copied().unwrap_or(Route::Login)
    }

    pub fn entries(&self) -> &[Route] {
        &self.entries
    }

    pub fn navigate(&mut self, route: Route, pop_up_to: Option<PopUpTo>) {
        if let Some(PopUpTo { route: target, inclusive }) = pop_up_to {
            if let Some(pos) = self.entries.iter().rposition(|r| *r == target) {
                let keep = if inclusive { pos } else { pos + 1 };
                self.entries.truncate(keep);
            }
        }
        self.entries.push(route);
    }

    /// Returns `false` when only the root entry is left.
    pub fn pop_back(&mut self) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        self.entries.pop();
        true
    }

    /// Replace the whole stack with a single entry.
    pub fn reset(&mut self, route: Route) {
        self.entries.clear();
        self.entries.push(route);
    }
}
