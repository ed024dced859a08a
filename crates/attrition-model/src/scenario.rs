//! Scenario input: the ten employee attributes collected by the form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use attrition_core::errors::ScenarioError;

/// Whether the employee works overtime. Encoded as 0/1 in the feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverTime {
    #[default]
    No,
    Yes,
}

impl OverTime {
    pub fn as_flag(self) -> f64 {
        match self {
            Self::No => 0.0,
            Self::Yes => 1.0,
        }
    }
}

impl fmt::Display for OverTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::No => f.write_str("No"),
            Self::Yes => f.write_str("Yes"),
        }
    }
}

impl FromStr for OverTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "1" | "true" => Ok(Self::Yes),
            "no" | "n" | "0" | "false" => Ok(Self::No),
            other => Err(format!("expected yes or no, got '{other}'")),
        }
    }
}

/// One submission's worth of form values.
///
/// `Default` yields the form's initial values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioInput {
    pub monthly_income: u32,
    pub incentive: u32,
    pub job_level: u32,
    pub stock_option_level: u32,
    pub stress_rating: u32,
    pub environment_satisfaction: u32,
    pub overtime: OverTime,
    pub age: u32,
    pub years_at_company: u32,
    pub years_with_manager: u32,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            monthly_income: 5000,
            incentive: 200,
            job_level: 2,
            stock_option_level: 1,
            stress_rating: 3,
            environment_satisfaction: 3,
            overtime: OverTime::No,
            age: 30,
            years_at_company: 5,
            years_with_manager: 3,
        }
    }
}

impl ScenarioInput {
    /// Check every field against its form bounds.
    ///
    /// `job_level >= 1` is what keeps the unjustified-stress division defined.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        for field in ScenarioField::ALL {
            let value = field.raw(self);
            let (min, max) = field.bounds();
            if value < min || value > max {
                return Err(ScenarioError::OutOfRange {
                    field: field.name(),
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}

/// The form fields, each mapped to exactly one schema column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioField {
    MonthlyIncome,
    Incentive,
    JobLevel,
    StockOptionLevel,
    StressRating,
    EnvironmentSatisfaction,
    OverTime,
    Age,
    YearsAtCompany,
    YearsWithCurrManager,
}

impl ScenarioField {
    pub const ALL: [ScenarioField; 10] = [
        Self::MonthlyIncome,
        Self::Incentive,
        Self::JobLevel,
        Self::StockOptionLevel,
        Self::StressRating,
        Self::EnvironmentSatisfaction,
        Self::OverTime,
        Self::Age,
        Self::YearsAtCompany,
        Self::YearsWithCurrManager,
    ];

    /// Training column this field overwrites.
    pub fn column(self) -> &'static str {
        match self {
            Self::MonthlyIncome => "MonthlyIncome",
            Self::Incentive => "Incentive",
            Self::JobLevel => "JobLevel",
            Self::StockOptionLevel => "StockOptionLevel",
            Self::StressRating => "StressRating",
            Self::EnvironmentSatisfaction => "EnvironmentSatisfaction",
            Self::OverTime => "OverTime",
            Self::Age => "Age",
            Self::YearsAtCompany => "YearsAtCompany",
            Self::YearsWithCurrManager => "YearsWithCurrManager",
        }
    }

    /// Field name as used in errors and flags.
    pub fn name(self) -> &'static str {
        match self {
            Self::MonthlyIncome => "monthly_income",
            Self::Incentive => "incentive",
            Self::JobLevel => "job_level",
            Self::StockOptionLevel => "stock_option_level",
            Self::StressRating => "stress_rating",
            Self::EnvironmentSatisfaction => "environment_satisfaction",
            Self::OverTime => "overtime",
            Self::Age => "age",
            Self::YearsAtCompany => "years_at_company",
            Self::YearsWithCurrManager => "years_with_manager",
        }
    }

    /// Inclusive bounds enforced by the form.
    pub fn bounds(self) -> (i64, i64) {
        match self {
            Self::MonthlyIncome => (1000, 20000),
            Self::Incentive => (0, 5000),
            Self::JobLevel => (1, 5),
            Self::StockOptionLevel => (0, 3),
            Self::StressRating => (1, 4),
            Self::EnvironmentSatisfaction => (1, 4),
            Self::OverTime => (0, 1),
            Self::Age => (18, 60),
            Self::YearsAtCompany => (0, 40),
            Self::YearsWithCurrManager => (0, 20),
        }
    }

    /// Value written into the feature vector. Overtime is coerced to 0/1.
    pub fn value(self, input: &ScenarioInput) -> f64 {
        match self {
            Self::OverTime => input.overtime.as_flag(),
            _ => self.raw(input) as f64,
        }
    }

    fn raw(self, input: &ScenarioInput) -> i64 {
        let value = match self {
            Self::MonthlyIncome => input.monthly_income,
            Self::Incentive => input.incentive,
            Self::JobLevel => input.job_level,
            Self::StockOptionLevel => input.stock_option_level,
            Self::StressRating => input.stress_rating,
            Self::EnvironmentSatisfaction => input.environment_satisfaction,
            Self::OverTime => match input.overtime {
                OverTime::No => 0,
                OverTime::Yes => 1,
            },
            Self::Age => input.age,
            Self::YearsAtCompany => input.years_at_company,
            Self::YearsWithCurrManager => input.years_with_manager,
        };
        i64::from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_defaults_are_valid() {
        let input = ScenarioInput::default();
        assert!(input.validate().is_ok());
        assert_eq!(input.monthly_income, 5000);
        assert_eq!(input.overtime, OverTime::No);
    }

    #[test]
    fn job_level_zero_is_rejected() {
        let input = ScenarioInput {
            job_level: 0,
            ..Default::default()
        };
        match input.validate().unwrap_err() {
            ScenarioError::OutOfRange { field, min, .. } => {
                assert_eq!(field, "job_level");
                assert_eq!(min, 1);
            }
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let input = ScenarioInput {
            monthly_income: 20000,
            incentive: 0,
            age: 60,
            years_with_manager: 20,
            ..Default::default()
        };
        assert!(input.validate().is_ok());

        let input = ScenarioInput {
            monthly_income: 999,
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn overtime_parses_form_values() {
        assert_eq!("Yes".parse::<OverTime>().unwrap(), OverTime::Yes);
        assert_eq!("no".parse::<OverTime>().unwrap(), OverTime::No);
        assert!("maybe".parse::<OverTime>().is_err());
        assert_eq!(OverTime::Yes.as_flag(), 1.0);
    }

    #[test]
    fn every_field_has_a_distinct_column() {
        let mut columns: Vec<_> = ScenarioField::ALL.iter().map(|f| f.column()).collect();
        columns.sort_unstable();
        columns.dedup();
        assert_eq!(columns.len(), ScenarioField::ALL.len());
    }
}
