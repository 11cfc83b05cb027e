//! Navigation commands

use aim_core::navigation::DashboardTab;

use crate::bootstrap::AppRuntime;
use crate::commands::dto::RouteDto;
use crate::commands::error::CommandError;

pub async fn current_route(runtime: &AppRuntime) -> RouteDto {
    let flow = runtime.flow().await;
    RouteDto::new(flow.nav(), flow.tab())
}

/// At the root entry this is a no-op; the host may close the app instead.
pub async fn go_back(runtime: &AppRuntime) -> RouteDto {
    let mut flow = runtime.flow().await;
    flow.back();
    RouteDto::new(flow.nav(), flow.tab())
}

pub async fn select_tab(runtime: &AppRuntime, tab: &str) -> Result<RouteDto, CommandError> {
    let tab = DashboardTab::from_route(tab)
        .ok_or_else(|| CommandError::new("unknown_tab", format!("unknown dashboard tab: {tab}")))?;
    let mut flow = runtime.flow().await;
    flow.select_tab(tab);
    Ok(RouteDto::new(flow.nav(), flow.tab()))
}

pub async fn open_etf_detail(runtime: &AppRuntime) -> Result<RouteDto, CommandError> {
    let mut flow = runtime.flow().await;
    if !flow.open_etf_detail() {
        return Err(CommandError::new(
            "navigation_unavailable",
            format!("ETF detail is not reachable from {}", flow.route().as_str()),
        ));
    }
    Ok(RouteDto::new(flow.nav(), flow.tab()))
}
