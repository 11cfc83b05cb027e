//! Dashboard and ETF detail commands

use aim_core::portfolio::EtfItem;

use crate::bootstrap::AppRuntime;
use crate::commands::dto::DashboardDto;
use crate::commands::error::{map_err, CommandError};

pub async fn get_dashboard(runtime: &AppRuntime) -> Result<DashboardDto, CommandError> {
    let view = runtime
        .usecases()
        .get_dashboard()
        .execute()
        .await
        .map_err(map_err)?;
    let tab = runtime.flow().await.tab();
    Ok(DashboardDto::new(&view, tab))
}

pub async fn list_etfs(runtime: &AppRuntime) -> Result<Vec<EtfItem>, CommandError> {
    runtime.usecases().list_etfs().execute().await.map_err(map_err)
}
