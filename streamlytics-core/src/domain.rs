//! Color scale bounds for choropleth layers.

use streamlytics_model::NumericDomain;

/// `[min, max]` over the finite values, `[0, 0]` when there are none.
pub fn numeric_domain<I>(values: I) -> NumericDomain
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |bounds: Option<NumericDomain>, value| {
            Some(match bounds {
                None => NumericDomain {
                    min: value,
                    max: value,
                },
                Some(domain) => NumericDomain {
                    min: domain.min.min(value),
                    max: domain.max.max(value),
                },
            })
        })
        .unwrap_or(NumericDomain::EMPTY)
}
