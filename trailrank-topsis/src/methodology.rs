//! Summaries describing how a ranking was produced.

use trailrank_core::{
    Factor, FactorSummary, FactorWeights, Methodology, RankedRoute, RankingSummary,
};

/// Name reported in [`Methodology::algorithm`].
pub const ALGORITHM: &str = "TOPSIS";

const EXPLANATION: &str = "Routes are scored with TOPSIS (Technique for Order of Preference by \
Similarity to Ideal Solution). Each criterion is vector-normalised, weighted by its factor's \
baseline weight, your personal factor weight and its share within the factor, and every route is \
scored by its relative closeness to the best and worst values observed across all routes.";

/// Per-factor contribution: baseline times user weight, renormalised.
///
/// When the products cannot be renormalised (every product zero) they are
/// reported as they are.
#[expect(
    clippy::float_arithmetic,
    reason = "effective weights multiply baseline and user weights"
)]
#[must_use]
pub fn effective_weights(baseline: FactorWeights, user: FactorWeights) -> FactorWeights {
    let mut product = baseline;
    for factor in Factor::ALL {
        product.set(factor, baseline.get(factor) * user.get(factor));
    }
    product.normalised().unwrap_or(product)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the mean score divides a float sum by the route count"
)]
fn summarise(routes: &[RankedRoute]) -> RankingSummary {
    let total = routes.len();
    let average_score = if total == 0 {
        0.0
    } else {
        routes.iter().map(|ranked| ranked.score).sum::<f64>() / total as f64
    };
    RankingSummary {
        total_routes: total,
        average_score,
        top_route_name: routes.first().map(|ranked| ranked.route.name.clone()),
    }
}

/// Build the methodology block for ranked routes.
#[must_use]
pub fn describe(
    baseline: FactorWeights,
    user: FactorWeights,
    routes: &[RankedRoute],
) -> Methodology {
    let effective = effective_weights(baseline, user);
    let mut factors: Vec<Factor> = Factor::ALL.to_vec();
    factors.sort_by_key(|factor| factor.display_order());
    Methodology {
        algorithm: ALGORITHM.to_owned(),
        factors: factors
            .into_iter()
            .map(|factor| FactorSummary {
                factor,
                name: factor.name().to_owned(),
                effective_weight: effective.get(factor),
                description: factor.description().to_owned(),
            })
            .collect(),
        explanation: EXPLANATION.to_owned(),
        summary: summarise(routes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn effective_weights_are_renormalised_products() {
        let effective = effective_weights(
            FactorWeights::new(0.5, 0.25, 0.25),
            FactorWeights::new(0.2, 0.4, 0.4),
        );
        // products 0.1, 0.1, 0.1
        for factor in Factor::ALL {
            assert!((effective.get(factor) - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[rstest]
    fn zero_products_are_reported_unchanged() {
        let effective = effective_weights(
            FactorWeights::new(1.0, 0.0, 0.0),
            FactorWeights::new(0.0, 0.5, 0.5),
        );
        assert_eq!(effective, FactorWeights::new(0.0, 0.0, 0.0));
    }

    #[rstest]
    fn empty_summary_has_no_top_route() {
        let methodology = describe(
            FactorWeights::new(0.35, 0.30, 0.35),
            FactorWeights::new(0.33, 0.33, 0.34),
            &[],
        );
        assert_eq!(methodology.algorithm, "TOPSIS");
        assert_eq!(methodology.summary.total_routes, 0);
        assert_eq!(methodology.summary.top_route_name, None);
        let names: Vec<&str> = methodology.factors.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Physical Demand", "Logistics & Cost", "Experience Quality"]
        );
    }
}
