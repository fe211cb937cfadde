//! Plain-text rendering of a suite report

use std::fmt;

use super::{GeneratorReport, SuiteReport};

/// Render the human-readable report printed to the console and saved as text
///
/// # Example
/// ```
/// use prng_suite_core::suite::{render_text, run_suite, SuiteConfig};
///
/// let config = SuiteConfig { seed: Some(5), sample_count: 500, ..SuiteConfig::default() };
/// let text = render_text(&run_suite(&config).unwrap());
/// assert!(text.starts_with("Seed: 5\n\n"));
/// assert!(text.contains("[ XORShift ]"));
/// ```
pub fn render_text(report: &SuiteReport) -> String {
    report.to_string()
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed: {}\n\n", self.seed)?;
        for generator in &self.generators {
            write!(f, "{generator}")?;
        }
        Ok(())
    }
}

impl fmt::Display for GeneratorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chi = &self.chi_square;
        let ks = &self.kolmogorov_smirnov;

        writeln!(f, "[ {} ]", self.name)?;
        writeln!(f, "\n[TEST] > Chi Square")?;
        writeln!(f, "         P value        : {}", chi.p_value)?;
        writeln!(f, "         Chi-square     : {}", chi.chi_square)?;
        writeln!(f, "         Critical value : {}", chi.critical_value)?;
        writeln!(f, "{}", verdict(chi.consistent))?;
        writeln!(f, "\n[TEST] > Kolmogorov Smirnov")?;
        writeln!(f, "         P value        : {}", ks.p_value)?;
        writeln!(f, "         Statistic      : {}", ks.statistic)?;
        write!(f, "{}\n\n", verdict(ks.consistent))
    }
}

fn verdict(consistent: bool) -> &'static str {
    if consistent {
        "The distribution is consistent with the specified distribution."
    } else {
        "The distribution is not consistent with the specified distribution."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GeneratorKind;
    use crate::stats::{ChiSquareResult, KolmogorovSmirnovResult};

    fn sample_report(consistent: bool) -> SuiteReport {
        SuiteReport {
            seed: 42,
            sample_count: 100,
            generators: vec![GeneratorReport {
                generator: GeneratorKind::LinearCongruential,
                name: "LinearCongruentialGenerator".to_string(),
                chi_square: ChiSquareResult {
                    consistent,
                    chi_square: 1.5,
                    critical_value: 3.0,
                    p_value: 0.25,
                    bins: 2,
                },
                kolmogorov_smirnov: KolmogorovSmirnovResult {
                    consistent: true,
                    statistic: 0.125,
                    p_value: 0.5,
                },
                preview: vec![],
            }],
        }
    }

    #[test]
    fn test_render_layout() {
        let text = render_text(&sample_report(true));
        let expected = "Seed: 42\n\n\
            [ LinearCongruentialGenerator ]\n\
            \n[TEST] > Chi Square\n\
            \x20        P value        : 0.25\n\
            \x20        Chi-square     : 1.5\n\
            \x20        Critical value : 3\n\
            The distribution is consistent with the specified distribution.\n\
            \n[TEST] > Kolmogorov Smirnov\n\
            \x20        P value        : 0.5\n\
            \x20        Statistic      : 0.125\n\
            The distribution is consistent with the specified distribution.\n\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_text_matches_display() {
        let report = sample_report(true);
        assert_eq!(render_text(&report), format!("{report}"));
        assert!(render_text(&report).ends_with(&report.generators[0].to_string()));
    }

    #[test]
    fn test_render_rejection() {
        let text = render_text(&sample_report(false));
        assert!(text.contains("The distribution is not consistent"));
    }
}
