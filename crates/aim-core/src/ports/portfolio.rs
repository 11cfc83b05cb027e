use async_trait::async_trait;

use crate::portfolio::{AssetItem, EtfItem};

#[async_trait]
pub trait PortfolioCatalogPort: Send + Sync {
    async fn asset_items(&self) -> anyhow::Result<Vec<AssetItem>>;
    async fn etf_items(&self) -> anyhow::Result<Vec<EtfItem>>;
}
