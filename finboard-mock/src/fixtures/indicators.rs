use finboard_core::{Category, IndicatorRecord};

const PROFITABILITY: [&str; 3] = ["ROE", "ROA", "순이익률"];
const STABILITY: [&str; 3] = ["부채비율", "유동비율", "당좌비율"];
const GROWTH: [&str; 3] = ["매출성장률", "자산성장률", "자본성장률"];
const ACTIVITY: [&str; 3] = ["총자산회전율", "재고자산회전율", "매출채권회전율"];

fn rows(p: [f64; 3], s: [f64; 3], g: [f64; 3], a: [f64; 3]) -> Vec<IndicatorRecord> {
    [
        (Category::Profitability, PROFITABILITY, p),
        (Category::Stability, STABILITY, s),
        (Category::Growth, GROWTH, g),
        (Category::Activity, ACTIVITY, a),
    ]
    .into_iter()
    .flat_map(|(category, names, values)| {
        names
            .into_iter()
            .zip(values)
            .map(move |(name, value)| IndicatorRecord::new(category, name, value))
    })
    .collect()
}

/// Canned indicators for a fixture company code; empty for unknown codes.
pub fn by_code(code: &str) -> Vec<IndicatorRecord> {
    match code {
        "00126380" => rows(
            [15.5, 8.2, 11.4],
            [38.7, 262.2, 208.4],
            [-14.3, 1.9, 2.4],
            [0.6, 3.9, 6.2],
        ),
        "00164779" => rows(
            [-12.1, -7.6, -22.3],
            [86.6, 103.3, 65.8],
            [-26.6, -3.3, -8.5],
            [0.3, 1.4, 4.3],
        ),
        "00164742" => rows(
            [12.7, 4.9, 7.6],
            [183.2, 110.4, 86.1],
            [14.4, 8.7, 10.1],
            [0.6, 9.4, 23.5],
        ),
        "00401731" => rows(
            [5.3, 1.8, 1.4],
            [174.7, 109.4, 76.2],
            [3.4, 2.2, 3.7],
            [1.3, 6.8, 7.1],
        ),
        "00266961" => rows(
            [5.4, 3.7, 9.8],
            [52.1, 148.3, 147.9],
            [8.2, 4.1, 3.9],
            [0.3, 0.0, 7.8],
        ),
        "00258801" => rows(
            [-6.8, -3.9, -13.1],
            [66.5, 112.5, 111.7],
            [14.6, 2.8, -1.6],
            [0.3, 0.0, 10.4],
        ),
        _ => Vec::new(),
    }
}

/// Representative mid-range indicators served for companies outside the fixture set.
pub fn fallback() -> Vec<IndicatorRecord> {
    rows(
        [8.0, 4.0, 6.0],
        [120.0, 150.0, 110.0],
        [5.0, 3.0, 4.0],
        [0.8, 5.0, 6.0],
    )
}
