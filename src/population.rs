//! Bayes'-rule breakdown of a population screened for a disease.
//!
//! Everything is in head counts (as `f64`, since prevalence can make them fractional).

use crate::error::{OverlapError, Result};
use serde::Serialize;

/// The five groups a screened population splits into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Group {
    Diseased,
    Healthy,
    TestNegativeDiseased,
    TestPositive,
    TestNegativeHealthy,
}

impl Group {
    pub fn name(&self) -> &'static str {
        match self {
            Group::Diseased => "Diseased",
            Group::Healthy => "Healthy",
            Group::TestNegativeDiseased => "Test negative, but infected!",
            Group::TestPositive => "Test positive for the Disease",
            Group::TestNegativeHealthy => "Test negative and Healthy",
        }
    }
}

/// A weighted link between two groups.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Flow {
    pub source: Group,
    pub target: Group,
    pub value: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiseaseTest {
    pub total_population: f64,
    /// Fraction of the population with the disease.
    pub prevalence: f64,
    /// Fraction of tests that give the correct answer.
    pub accuracy: f64,
}

impl DiseaseTest {
    pub fn new(total_population: f64, prevalence: f64, accuracy: f64) -> Result<Self> {
        if !total_population.is_finite() || total_population <= 0.0 {
            return Err(OverlapError::InvalidInput(format!(
                "total population must be positive, got {}", total_population
            )));
        }
        if !(prevalence > 0.0 && prevalence <= 1.0) {
            return Err(OverlapError::InvalidInput(format!(
                "prevalence must be in (0, 1], got {}", prevalence
            )));
        }
        // A perfect test leaves nobody healthy in the positive group and the
        // Venn circles degenerate.
        if !(accuracy >= 0.0 && accuracy < 1.0) {
            return Err(OverlapError::InvalidInput(format!(
                "accuracy must be in [0, 1), got {}", accuracy
            )));
        }
        Ok(Self { total_population, prevalence, accuracy })
    }

    /// Same as [`DiseaseTest::new`] but with prevalence and accuracy given in percent.
    pub fn from_percentages(
        total_population: f64,
        pct_diseased: f64,
        pct_accuracy: f64,
    ) -> Result<Self> {
        Self::new(total_population, pct_diseased / 100.0, pct_accuracy / 100.0)
    }

    pub fn breakdown(&self) -> PopulationBreakdown {
        let diseased = self.prevalence * self.total_population;
        let healthy = self.total_population - diseased;
        let test_negative_healthy = self.accuracy * healthy;
        let test_negative_diseased = (1.0 - self.accuracy) * diseased;

        PopulationBreakdown {
            total: self.total_population,
            diseased,
            healthy,
            test_negative_healthy,
            test_negative_diseased,
            test_positive_diseased: diseased - test_negative_diseased,
            test_positive_healthy: healthy - test_negative_healthy,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PopulationBreakdown {
    pub total: f64,
    pub diseased: f64,
    pub healthy: f64,
    pub test_negative_healthy: f64,
    pub test_negative_diseased: f64,
    pub test_positive_diseased: f64,
    pub test_positive_healthy: f64,
}

impl PopulationBreakdown {
    pub fn test_positive(&self) -> f64 {
        self.test_positive_diseased + self.test_positive_healthy
    }

    pub fn probability_positive(&self) -> f64 {
        self.test_positive() / self.total
    }

    /// P(diseased | positive): the share of positives who are actually sick.
    pub fn probability_diseased_given_positive(&self) -> f64 {
        self.test_positive_diseased / self.test_positive()
    }

    /// Links between the groups, diseased side first.
    pub fn flows(&self) -> [Flow; 4] {
        [
            Flow {
                source: Group::Diseased,
                target: Group::TestNegativeDiseased,
                value: self.test_negative_diseased,
            },
            Flow {
                source: Group::Diseased,
                target: Group::TestPositive,
                value: self.test_positive_diseased,
            },
            Flow {
                source: Group::Healthy,
                target: Group::TestPositive,
                value: self.test_positive_healthy,
            },
            Flow {
                source: Group::Healthy,
                target: Group::TestNegativeHealthy,
                value: self.test_negative_healthy,
            },
        ]
    }
}
