use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// One rung of the team performance ladder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierInfo {
    pub name: &'static str,
    /// 1-based position in the ladder
    pub level: u8,
    /// Small-area performance, in units, needed to reach the tier
    pub min_performance_units: u64,
    /// Inclusive upper bound; `None` for the top tier
    pub max_performance_units: Option<u64>,
    pub performance_range: &'static str,
    pub team_dividend_percent: f64,
    pub streaming_management_percent: f64,
    pub is_supreme: bool,
}

const fn tier(
    name: &'static str,
    level: u8,
    min_performance_units: u64,
    max_performance_units: Option<u64>,
    performance_range: &'static str,
    team_dividend_percent: f64,
    streaming_management_percent: f64,
) -> TierInfo {
    TierInfo {
        name,
        level,
        min_performance_units,
        max_performance_units,
        performance_range,
        team_dividend_percent,
        streaming_management_percent,
        is_supreme: false,
    }
}

static TIER_TABLE: [TierInfo; 8] = [
    tier("VIP", 1, 10, Some(49), "10 - 49 units", 3.0, 2.0),
    tier("1-Star Expert", 2, 50, Some(199), "50 - 199 units", 5.0, 3.0),
    tier("2-Star Expert", 3, 200, Some(499), "200 - 499 units", 7.0, 4.0),
    tier("3-Star Expert", 4, 500, Some(999), "500 - 999 units", 9.0, 5.0),
    tier("1-Star Ambassador", 5, 1_000, Some(2_999), "1,000 - 2,999 units", 11.0, 6.0),
    tier("2-Star Ambassador", 6, 3_000, Some(5_999), "3,000 - 5,999 units", 13.0, 7.0),
    tier("3-Star Ambassador", 7, 6_000, Some(9_999), "6,000 - 9,999 units", 15.0, 8.0),
    TierInfo {
        name: "Supreme",
        level: 8,
        min_performance_units: 10_000,
        max_performance_units: None,
        performance_range: "10,000+ units",
        team_dividend_percent: 17.0,
        streaming_management_percent: 10.0,
        is_supreme: true,
    },
];

static TIERS_BY_NAME: Lazy<HashMap<&'static str, &'static TierInfo>> =
    Lazy::new(|| TIER_TABLE.iter().map(|t| (t.name, t)).collect());

/// The full ladder, lowest tier first
pub fn tier_table() -> &'static [TierInfo] {
    &TIER_TABLE
}

/// Exact-name lookup
pub fn find_tier(name: &str) -> Option<&'static TierInfo> {
    TIERS_BY_NAME.get(name).copied()
}

/// Highest tier whose minimum performance is met, `None` below VIP
pub fn tier_for_performance(small_area_units: u64) -> Option<&'static TierInfo> {
    TIER_TABLE
        .iter()
        .rev()
        .find(|t| small_area_units >= t.min_performance_units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_order_and_size() {
        let names: Vec<_> = tier_table().iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "VIP",
                "1-Star Expert",
                "2-Star Expert",
                "3-Star Expert",
                "1-Star Ambassador",
                "2-Star Ambassador",
                "3-Star Ambassador",
                "Supreme",
            ]
        );

        for (i, t) in tier_table().iter().enumerate() {
            assert_eq!(t.level as usize, i + 1);
        }
    }

    #[test]
    fn test_only_top_tier_is_supreme() {
        let supreme: Vec<_> = tier_table().iter().filter(|t| t.is_supreme).collect();
        assert_eq!(supreme.len(), 1);
        assert_eq!(supreme[0].name, "Supreme");
    }

    #[test]
    fn test_ranges_are_contiguous_and_percents_increase() {
        for pair in tier_table().windows(2) {
            let (low, high) = (&pair[0], &pair[1]);
            assert_eq!(low.max_performance_units, Some(high.min_performance_units - 1));
            assert!(high.team_dividend_percent > low.team_dividend_percent);
            assert!(high.streaming_management_percent > low.streaming_management_percent);
        }
    }

    #[test]
    fn test_find_tier() {
        assert_eq!(find_tier("2-Star Expert").unwrap().level, 3);
        assert!(find_tier("Supreme").unwrap().is_supreme);
        assert!(find_tier("supreme").is_none());
        assert!(find_tier("Gold").is_none());
    }

    #[test]
    fn test_tier_for_performance() {
        assert!(tier_for_performance(9).is_none());
        assert_eq!(tier_for_performance(10).unwrap().name, "VIP");
        assert_eq!(tier_for_performance(199).unwrap().name, "1-Star Expert");
        assert_eq!(tier_for_performance(1_000).unwrap().name, "1-Star Ambassador");
        assert_eq!(tier_for_performance(250_000).unwrap().name, "Supreme");
    }
}
