//! DTOs for the view host, kept apart from the domain models.

use aim_app::usecases::DashboardView;
use aim_core::form::{FieldId, FieldStatus, FormState};
use aim_core::navigation::{DashboardTab, NavStack, Route};
use aim_core::portfolio::{AllocationGroup, AssetAllocation, DonutSegment};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDto {
    pub name: &'static str,
    /// `pristine`, `valid` or `invalid`.
    pub status: &'static str,
    pub error: Option<String>,
    pub error_code: Option<&'static str>,
}

/// Field text is left out: the view already owns it, and it may be a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormStateDto {
    pub fields: Vec<FieldDto>,
    pub is_valid: bool,
}

impl From<&FormState> for FormStateDto {
    fn from(state: &FormState) -> Self {
        let fields = FieldId::ALL
            .iter()
            .map(|&id| {
                let field = state.field(id);
                let status = match field.status() {
                    FieldStatus::Pristine => "pristine",
                    FieldStatus::Valid => "valid",
                    FieldStatus::Invalid(_) => "invalid",
                };
                FieldDto {
                    name: id.as_str(),
                    status,
                    error: field.error().map(|e| e.to_string()),
                    error_code: field.error().map(|e| e.code()),
                }
            })
            .collect();

        Self {
            fields,
            is_valid: state.is_valid(),
        }
    }
}

impl FormStateDto {
    pub fn field(&self, name: &str) -> Option<&FieldDto> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    pub route: &'static str,
    /// Selected tab, only while on the dashboard.
    pub tab: Option<&'static str>,
    pub can_go_back: bool,
}

impl RouteDto {
    pub fn new(nav: &NavStack, tab: DashboardTab) -> Self {
        let route = nav.current();
        Self {
            route: route.as_str(),
            tab: (route == Route::Dashboard).then(|| tab.route()),
            can_go_back: nav.entries().len() > 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusDto {
    pub logged_in: bool,
    pub route: RouteDto,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabDto {
    pub route: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationDto {
    pub name: String,
    pub percentage: f32,
    pub color: String,
}

impl From<&AssetAllocation> for AllocationDto {
    fn from(a: &AssetAllocation) -> Self {
        Self {
            name: a.name.clone(),
            percentage: a.percentage,
            color: a.color.to_hex_rgb(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDto {
    pub label: &'static str,
    pub color: String,
    pub total_percentage: f32,
    pub items: Vec<AllocationDto>,
}

impl From<&AllocationGroup> for GroupDto {
    fn from(g: &AllocationGroup) -> Self {
        Self {
            label: g.group.label(),
            color: g.group.color().to_hex_rgb(),
            total_percentage: g.total_percentage(),
            items: g.items.iter().map(AllocationDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDto {
    pub start_angle: f32,
    pub sweep_angle: f32,
    pub color: String,
}

impl From<&DonutSegment> for SegmentDto {
    fn from(s: &DonutSegment) -> Self {
        Self {
            start_angle: s.start_angle,
            sweep_angle: s.sweep_angle,
            color: s.color.to_hex_rgb(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub tabs: Vec<TabDto>,
    pub total_percentage: f32,
    pub groups: Vec<GroupDto>,
    pub segments: Vec<SegmentDto>,
}

impl DashboardDto {
    pub fn new(view: &DashboardView, selected: DashboardTab) -> Self {
        Self {
            tabs: DashboardTab::ALL
                .iter()
                .map(|&tab| TabDto {
                    route: tab.route(),
                    label: tab.label(),
                    selected: tab == selected,
                })
                .collect(),
            total_percentage: view.total_percentage,
            groups: view.groups.iter().map(GroupDto::from).collect(),
            segments: view.segments.iter().map(SegmentDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aim_core::form::{on_field_change, ConfirmRevalidation};

    #[test]
    fn form_dto_reports_status_and_messages() {
        let state = on_field_change(
            &FormState::default(),
            FieldId::Id,
            "short",
            ConfirmRevalidation::default(),
        );
        let dto = FormStateDto::from(&state);

        let id = dto.field("id").unwrap();
        assert_eq!(id.status, "invalid");
        assert_eq!(id.error_code, Some("id_too_short"));
        assert_eq!(id.error.as_deref(), Some("아이디를 입력해주세요"));
        assert_eq!(dto.field("email").unwrap().status, "pristine");
        assert!(!dto.is_valid);
    }

    #[test]
    fn route_dto_only_carries_tab_on_dashboard() {
        let nav = NavStack::default();
        let dto = RouteDto::new(&nav, DashboardTab::Trend);
        assert_eq!(dto.route, "login");
        assert_eq!(dto.tab, None);
        assert!(!dto.can_go_back);

        let nav = NavStack::new(Route::Dashboard);
        assert_eq!(RouteDto::new(&nav, DashboardTab::Trend).tab, Some("trend"));
    }

    #[test]
    fn form_dto_serializes_camel_case() {
        let json = serde_json::to_value(FormStateDto::from(&FormState::default())).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["fields"][2]["name"], "passwordConfirm");
        assert!(json["fields"][0]["errorCode"].is_null());
    }
}
