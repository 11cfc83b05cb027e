//! Login screen commands

use tracing::{info_span, Instrument};

use crate::bootstrap::AppRuntime;
use crate::commands::dto::{FormStateDto, RouteDto, SessionStatusDto};
use crate::commands::error::CommandError;

/// Text of `field` changed. Unknown field names leave the form untouched.
pub async fn field_changed(
    runtime: &AppRuntime,
    field: &str,
    value: String,
) -> Result<FormStateDto, CommandError> {
    let flow = runtime.flow().await;
    let state = flow.form().field_changed_named(field, value)?;
    Ok(FormStateDto::from(&state))
}

pub async fn field_focus_lost(runtime: &AppRuntime, field: &str) -> Result<FormStateDto, CommandError> {
    let flow = runtime.flow().await;
    let state = flow.form().focus_lost_named(field)?;
    Ok(FormStateDto::from(&state))
}

pub async fn form_state(runtime: &AppRuntime) -> FormStateDto {
    let flow = runtime.flow().await;
    FormStateDto::from(&flow.form().snapshot())
}

pub async fn submit_login(runtime: &AppRuntime) -> Result<RouteDto, CommandError> {
    let span = info_span!("command.submit_login");
    async {
        let mut flow = runtime.flow().await;
        flow.submit_login().await?;
        Ok::<_, CommandError>(RouteDto::new(flow.nav(), flow.tab()))
    }
    .instrument(span)
    .await
}

pub async fn logout(runtime: &AppRuntime) -> Result<RouteDto, CommandError> {
    let span = info_span!("command.logout");
    async {
        let mut flow = runtime.flow().await;
        flow.logout().await?;
        Ok::<_, CommandError>(RouteDto::new(flow.nav(), flow.tab()))
    }
    .instrument(span)
    .await
}

/// Waits for the first store snapshot, applies auto-login, then reports.
pub async fn session_status(runtime: &AppRuntime) -> SessionStatusDto {
    let mut flow = runtime.flow().await;
    flow.wait_for_auto_login().await;
    SessionStatusDto {
        logged_in: flow.tracker().is_present(),
        route: RouteDto::new(flow.nav(), flow.tab()),
    }
}
