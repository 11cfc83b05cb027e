//! Use cases backing the dashboard and the ETF detail screen.

use std::sync::Arc;

use aim_core::portfolio::{
    allocations_from, donut_segments, group_allocations, AllocationGroup, AssetAllocation,
    DonutSegment, EtfItem,
};
use aim_core::ports::PortfolioCatalogPort;
use anyhow::Result;
use serde::Serialize;
use tracing::{info, info_span, Instrument};

/// Everything the allocation tab renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub allocations: Vec<AssetAllocation>,
    pub groups: Vec<AllocationGroup>,
    pub segments: Vec<DonutSegment>,
    pub total_percentage: f32,
}

impl DashboardView {
    pub fn from_allocations(allocations: Vec<AssetAllocation>) -> Self {
        let groups = group_allocations(&allocations);
        let segments = donut_segments(&allocations);
        let total_percentage = allocations.iter().map(|a| a.percentage).sum();
        Self {
            allocations,
            groups,
            segments,
            total_percentage,
        }
    }
}

pub struct GetDashboard {
    catalog: Arc<dyn PortfolioCatalogPort>,
}

impl GetDashboard {
    pub fn new(catalog: Arc<dyn PortfolioCatalogPort>) -> Self {
        Self { catalog }
    }

    pub async fn execute(&self) -> Result<DashboardView> {
        let span = info_span!("usecase.get_dashboard.execute");

        async {
            let items = self.catalog.asset_items().await?;
            let view = DashboardView::from_allocations(allocations_from(&items));

            info!(
                holdings = view.allocations.len(),
                groups = view.groups.len(),
                "Dashboard projected"
            );
            Ok(view)
        }
        .instrument(span)
        .await
    }
}

pub struct ListEtfs {
    catalog: Arc<dyn PortfolioCatalogPort>,
}

impl ListEtfs {
    pub fn new(catalog: Arc<dyn PortfolioCatalogPort>) -> Self {
        Self { catalog }
    }

    pub async fn execute(&self) -> Result<Vec<EtfItem>> {
        let span = info_span!("usecase.list_etfs.execute");

        async {
            let etfs = self.catalog.etf_items().await?;
            info!(count = etfs.len(), "ETF list loaded");
            Ok(etfs)
        }
        .instrument(span)
        .await
    }
}
