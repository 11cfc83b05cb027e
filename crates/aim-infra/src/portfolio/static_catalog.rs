use aim_core::portfolio::{AssetItem, AssetType, EtfItem};
use aim_core::ports::PortfolioCatalogPort;
use anyhow::Result;
use async_trait::async_trait;

/// Hardcoded sample holdings and ETFs until a portfolio API exists.
pub struct StaticPortfolioCatalog {
    assets: Vec<AssetItem>,
    etfs: Vec<EtfItem>,
}

const SAMPLE_ASSETS: [(&str, &str, u32, f32, &str, &str); 8] = [
    ("TEST1", "stock", 1, 10.05, "test security 1", "테스트를 위한 종목1"),
    ("TEST2", "stock", 1, 8.03, "test security 2", "테스트를 위한 종목2"),
    ("TEST3", "stock", 1, 6.5, "test security 3", "테스트를 위한 종목3"),
    ("TEST4", "stock", 1, 8.5, "test security 4", "테스트를 위한 종목4"),
    ("TEST5", "bond", 3, 9.5, "test security 5", "테스트를 위한 종목5"),
    ("TEST6", "bond", 1, 8.5, "test security 6", "테스트를 위한 종목6"),
    ("TEST7", "bond", 1, 13.42, "test security 7", "테스트를 위한 종목7"),
    ("usd_cash", "etc", 1, 35.5, "cash", "현금"),
];

const SAMPLE_ETFS: [(&str, &str, &str); 4] = [
    (
        "MSCI Australia ETF",
        "커먼웰스은행, 알루미나, 시드니공항 등 호주를 대표하는 70여개 기업을 포함하는 MSCI 지수 종목에 투자하는 ETF",
        "-0.60%",
    ),
    (
        "MSCI Germany ETF",
        "SAP, 지멘스, 아디다스 등 독일을 대표하는 59개 기업에 투자하는 ETF",
        "-0.63%",
    ),
    (
        "MSCI HONG KONG ETF",
        "AIA생명 등 홍콩거래소에 상장된 상위 우량기업 45개로 구성된 대표지수 구성 종목에 투자하는 ETF",
        "-3.71%",
    ),
    (
        "MSCI United Kingdom ETF",
        "HSBC, 보다폰, 유니레버 등 영국을 대표하는 런던증시 상장 109개 기업에 투자하는 ETF",
        "-0.81%",
    ),
];

impl StaticPortfolioCatalog {
    pub fn new() -> Self {
        let assets = SAMPLE_ASSETS
            .iter()
            .map(|&(symbol, kind, quantity, ratio, name, description)| AssetItem {
                security_symbol: symbol.to_string(),
                asset_type: AssetType::parse(kind),
                quantity,
                ratio,
                security_name: name.to_string(),
                security_description: Some(description.to_string()),
            })
            .collect();

        let etfs = SAMPLE_ETFS
            .iter()
            .map(|&(title, description, change_rate)| EtfItem {
                title: title.to_string(),
                description: description.to_string(),
                change_rate: change_rate.to_string(),
                shares: "1주".to_string(),
            })
            .collect();

        Self { assets, etfs }
    }
}

impl Default for StaticPortfolioCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PortfolioCatalogPort for StaticPortfolioCatalog {
    async fn asset_items(&self) -> Result<Vec<AssetItem>> {
        Ok(self.assets.clone())
    }

    async fn etf_items(&self) -> Result<Vec<EtfItem>> {
        Ok(self.etfs.clone())
    }
}
