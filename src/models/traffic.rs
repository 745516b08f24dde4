//! Typed view of the traffic overview payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::response::SitePayload;

/// Traffic overview statistics for a site.
///
/// Field names mirror the wire format (`GlobalRank`, `TopCountryShares`,
/// ...); dates arrive as opaque strings in whatever format the API uses
/// for the field (`DD/MM/YYYY` for reach points, `MM/YYYY` for the report
/// date) and are not interpreted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrafficStats {
    /// Worldwide traffic rank.
    pub global_rank: u64,

    /// Numeric code of the site's top country.
    pub country_code: u32,

    /// Traffic rank within the top country.
    pub country_rank: u64,

    /// Traffic share per country, largest first.
    #[serde(default)]
    pub top_country_shares: Vec<TopCountryShare>,

    /// Weekly reach samples.
    #[serde(default)]
    pub traffic_reach: Vec<ReachPoint>,

    /// Traffic share per source type.
    #[serde(default)]
    pub traffic_shares: Vec<SourceShare>,

    /// Report month, as `MM/YYYY`.
    pub date: String,
}

/// Share of traffic attributed to one country.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TopCountryShare {
    /// Numeric country code.
    pub country_code: u32,
    /// Fraction of total traffic, in `[0, 1]`.
    pub traffic_share: f64,
}

/// One weekly reach sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReachPoint {
    /// Sample date, as `DD/MM/YYYY`.
    pub date: String,
    /// Reach fraction for that week.
    pub value: f64,
}

/// Share of traffic attributed to one source type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourceShare {
    /// Source category, e.g. `Search`, `Direct`, `Paid Referrals`.
    pub source_type: String,
    /// Fraction of total traffic from this source.
    pub source_value: f64,
}

impl TrafficStats {
    /// Build a typed view from a raw [`crate::TrafficClient::traffic`]
    /// payload.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the payload does not have the traffic
    /// shape, including when it is an `{"Error": ...}` payload.
    pub fn from_payload(payload: &SitePayload) -> Result<Self> {
        let stats = serde_json::from_value(Value::Object(payload.clone()))?;
        Ok(stats)
    }
}
