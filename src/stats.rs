//! Mean and Student-t confidence intervals over metric samples.

use anyhow::{ensure, Result};
use stats_ci::*;
use thiserror::Error;

/// Mean and two-sided confidence bounds for one group of samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateStat {
    pub mean: f64,
    pub ci_low: f64,
    pub ci_high: f64,
}

/// A group too small to carry a confidence interval. One sample leaves zero
/// degrees of freedom, so the run aborts instead of emitting NaN bounds.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("confidence interval needs at least 2 samples, got {0}")]
pub struct TooFewSamples(pub usize);

/// Arithmetic mean and two-sided Student-t confidence interval at the given
/// confidence level. Sample standard deviation uses the n-1 divisor; the
/// interval half-width is t(confidence, n-1) * std / sqrt(n).
pub fn confidence_interval(values: &[f64], confidence: f64) -> Result<AggregateStat> {
    ensure!(
        confidence > 0.0 && confidence < 1.0,
        "confidence must be strictly between 0 and 1, got {confidence}"
    );
    if values.len() < 2 {
        return Err(TooFewSamples(values.len()).into());
    }

    let mean = statistical::mean(values);
    let std_dev = statistical::standard_deviation(values, Some(mean));
    if std_dev == 0.0 {
        // Zero variance collapses the interval to a point.
        return Ok(AggregateStat {
            mean,
            ci_low: mean,
            ci_high: mean,
        });
    }

    let interval = mean::Arithmetic::ci(Confidence::new(confidence), &values.to_vec())
        .map_err(|e| anyhow::anyhow!("confidence interval computation failed: {e}"))?;

    Ok(AggregateStat {
        mean,
        ci_low: interval.low_f(),
        ci_high: interval.high_f(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_sample_is_an_error() {
        let err = confidence_interval(&[5.0], 0.90).unwrap_err();
        assert_eq!(err.downcast::<TooFewSamples>().unwrap(), TooFewSamples(1));
        assert!(confidence_interval(&[], 0.90).is_err());
    }

    #[test]
    fn identical_values_collapse_to_a_point() {
        let stat = confidence_interval(&[7.5, 7.5, 7.5, 7.5], 0.90).unwrap();
        assert_eq!(stat.mean, 7.5);
        assert_eq!(stat.ci_low, 7.5);
        assert_eq!(stat.ci_high, 7.5);
    }

    #[test]
    fn two_samples_give_symmetric_t_interval() {
        // std = sqrt(2), se = 1, t(0.90, df=1) = 6.3138
        let stat = confidence_interval(&[4.0, 6.0], 0.90).unwrap();
        assert!((stat.mean - 5.0).abs() < 1e-12);

        let lower_half = stat.mean - stat.ci_low;
        let upper_half = stat.ci_high - stat.mean;
        assert!((lower_half - upper_half).abs() < 1e-9);
        assert!(
            lower_half > 6.0 && lower_half < 6.7,
            "half-width {lower_half} not near t(0.90, 1)"
        );
    }

    #[test]
    fn four_samples_match_tabulated_t_quantile() {
        // std = sqrt(5/3), se = 0.6455, t(0.90, df=3) = 2.3534
        let stat = confidence_interval(&[1.0, 2.0, 3.0, 4.0], 0.90).unwrap();
        assert!((stat.mean - 2.5).abs() < 1e-12);
        let half = (stat.ci_high - stat.ci_low) / 2.0;
        assert!(
            (half - 1.5192).abs() < 0.02,
            "half-width {half} not near t(0.90, 3) * se"
        );
    }

    #[test]
    fn mean_lies_inside_the_interval() {
        let values = [3.1, 4.7, 5.2, 2.8, 6.0, 4.4];
        let stat = confidence_interval(&values, 0.90).unwrap();
        assert!(stat.ci_low < stat.mean);
        assert!(stat.mean < stat.ci_high);
    }

    #[test]
    fn higher_confidence_widens_the_interval() {
        let values = [3.1, 4.7, 5.2, 2.8, 6.0, 4.4];
        let narrow = confidence_interval(&values, 0.90).unwrap();
        let wide = confidence_interval(&values, 0.99).unwrap();
        assert!(wide.ci_high - wide.ci_low > narrow.ci_high - narrow.ci_low);
    }

    #[test]
    fn invalid_confidence_level_is_rejected() {
        assert!(confidence_interval(&[1.0, 2.0], 0.0).is_err());
        assert!(confidence_interval(&[1.0, 2.0], 1.0).is_err());
    }
}
