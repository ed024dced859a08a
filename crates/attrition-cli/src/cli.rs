use std::path::PathBuf;

use clap::builder::RangedI64ValueParser;
use clap::error::ErrorKind;
use clap::{Args, Parser, ValueEnum};

use attrition_core::config::CliOverrides;
use attrition_core::SubmissionError;
use attrition_model::{OverTime, ScenarioField, ScenarioInput};

use crate::handler::{self, EXIT_FAILURE, EXIT_OK};

#[derive(Debug, Parser)]
#[command(
    name = "attrition",
    about = "Predict whether an employee is likely to leave, and what replacing them would cost",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Classifier artifact (JSON). Default: champion_model.json
    #[arg(long = "model")]
    pub model_path: Option<String>,

    /// Ordered column list the classifier was trained on (JSON).
    /// Default: model_columns.json
    #[arg(long = "columns")]
    pub columns_path: Option<String>,

    /// Report format. Default: text, or `report.format` from config.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file used in place of ./attrition.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

const INCENTIVES: &str = "Incentives & Level";
const STRESS: &str = "Stress & Environment";
const TENURE: &str = "Demographics & Tenure";

/// One flag per form field, grouped as on the form.
#[derive(Debug, Clone, Args)]
pub struct ScenarioArgs {
    /// Monthly income ($).
    #[arg(long, help_heading = INCENTIVES, default_value_t = 5000,
          value_parser = bounded(ScenarioField::MonthlyIncome))]
    pub monthly_income: u32,

    /// Incentive / bonus ($).
    #[arg(long, help_heading = INCENTIVES, default_value_t = 200,
          value_parser = bounded(ScenarioField::Incentive))]
    pub incentive: u32,

    #[arg(long, help_heading = INCENTIVES, default_value_t = 2,
          value_parser = bounded(ScenarioField::JobLevel))]
    pub job_level: u32,

    #[arg(long, help_heading = INCENTIVES, default_value_t = 1,
          value_parser = bounded(ScenarioField::StockOptionLevel))]
    pub stock_option_level: u32,

    /// Stress rating, 1 (low) to 4 (high).
    #[arg(long, help_heading = STRESS, default_value_t = 3,
          value_parser = bounded(ScenarioField::StressRating))]
    pub stress_rating: u32,

    /// Environment satisfaction, 1 (low) to 4 (high).
    #[arg(long, help_heading = STRESS, default_value_t = 3,
          value_parser = bounded(ScenarioField::EnvironmentSatisfaction))]
    pub environment_satisfaction: u32,

    /// Works overtime: yes or no.
    #[arg(long, help_heading = STRESS, default_value = "no", value_parser = parse_overtime)]
    pub overtime: OverTime,

    #[arg(long, help_heading = TENURE, default_value_t = 30,
          value_parser = bounded(ScenarioField::Age))]
    pub age: u32,

    #[arg(long, help_heading = TENURE, default_value_t = 5,
          value_parser = bounded(ScenarioField::YearsAtCompany))]
    pub years_at_company: u32,

    /// Years with current manager.
    #[arg(long, help_heading = TENURE, default_value_t = 3,
          value_parser = bounded(ScenarioField::YearsWithCurrManager))]
    pub years_with_manager: u32,
}

impl ScenarioArgs {
    pub fn to_input(&self) -> ScenarioInput {
        ScenarioInput {
            monthly_income: self.monthly_income,
            incentive: self.incentive,
            job_level: self.job_level,
            stock_option_level: self.stock_option_level,
            stress_rating: self.stress_rating,
            environment_satisfaction: self.environment_satisfaction,
            overtime: self.overtime,
            age: self.age,
            years_at_company: self.years_at_company,
            years_with_manager: self.years_with_manager,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Json => "json",
        }
    }
}

impl Cli {
    /// Flags that override the config file and environment.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            model_path: self.model_path.clone(),
            columns_path: self.columns_path.clone(),
            report_format: self.format.map(|f| f.as_str().to_string()),
        }
    }
}

/// Range check taken from the field's own bounds.
fn bounded(field: ScenarioField) -> RangedI64ValueParser<u32> {
    let (min, max) = field.bounds();
    clap::value_parser!(u32).range(min..=max)
}

fn parse_overtime(value: &str) -> Result<OverTime, String> {
    value.parse()
}

/// Parse the process arguments and run. A rejected flag prints clap's
/// message and exits with `EXIT_FAILURE`, never the unavailable-assets code.
pub fn run_from_env() -> Result<i32, SubmissionError> {
    match Cli::try_parse() {
        Ok(cli) => run(cli),
        Err(err) => {
            let _ = err.print();
            Ok(parse_error_exit_code(&err))
        }
    }
}

/// Help and version requests succeed; every other parse error is a
/// failed submission.
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_OK,
        _ => EXIT_FAILURE,
    }
}

pub fn run(cli: Cli) -> Result<i32, SubmissionError> {
    attrition_core::tracing::init_tracing();
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = handler::resolve_config(&root, &cli)?;
    let state = attrition_model::assets::runtime::initialize(&config.assets);
    let submission = handler::submit(state, &cli.scenario.to_input(), &config.report)?;
    print!("{}", submission.output);
    Ok(submission.exit_code)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn no_flags_is_the_initial_form() {
        let cli = Cli::try_parse_from(["attrition"]).unwrap();
        assert_eq!(cli.scenario.to_input(), ScenarioInput::default());
        assert!(cli.format.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn flags_fill_the_scenario() {
        let cli = Cli::try_parse_from([
            "attrition",
            "--monthly-income",
            "12000",
            "--overtime",
            "yes",
            "--years-with-manager",
            "0",
            "--format",
            "markdown",
        ])
        .unwrap();
        let input = cli.scenario.to_input();
        assert_eq!(input.monthly_income, 12000);
        assert_eq!(input.overtime, OverTime::Yes);
        assert_eq!(input.years_with_manager, 0);
        assert_eq!(cli.overrides().report_format.as_deref(), Some("markdown"));
    }

    #[test]
    fn out_of_range_flags_are_rejected_by_the_parser() {
        for args in [
            ["attrition", "--job-level", "0"],
            ["attrition", "--monthly-income", "999"],
            ["attrition", "--age", "61"],
            ["attrition", "--stress-rating", "5"],
            ["attrition", "--overtime", "sometimes"],
        ] {
            assert!(Cli::try_parse_from(args).is_err(), "{args:?} should fail");
        }
    }

    #[test]
    fn rejected_flags_exit_as_failures_not_missing_assets() {
        let err = Cli::try_parse_from(["attrition", "--job-level", "0"]).unwrap_err();
        assert_eq!(parse_error_exit_code(&err), EXIT_FAILURE);

        let err = Cli::try_parse_from(["attrition", "--no-such-flag"]).unwrap_err();
        assert_eq!(parse_error_exit_code(&err), EXIT_FAILURE);

        let err = Cli::try_parse_from(["attrition", "--help"]).unwrap_err();
        assert_eq!(parse_error_exit_code(&err), EXIT_OK);

        let err = Cli::try_parse_from(["attrition", "--version"]).unwrap_err();
        assert_eq!(parse_error_exit_code(&err), EXIT_OK);
    }

    #[test]
    fn help_groups_fields_as_on_the_form() {
        let help = Cli::command().render_help().to_string();
        let incentives = help.find("Incentives & Level:").unwrap();
        let stress = help.find("Stress & Environment:").unwrap();
        let tenure = help.find("Demographics & Tenure:").unwrap();
        assert!(incentives < stress && stress < tenure);
        assert!(help[incentives..stress].contains("--job-level"));
        assert!(help[stress..tenure].contains("--overtime"));
        assert!(help[tenure..].contains("--years-with-manager"));
    }

    #[test]
    fn artifact_flags_become_overrides() {
        let cli = Cli::try_parse_from([
            "attrition",
            "--model",
            "models/champion.json",
            "--columns",
            "models/columns.json",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.model_path.as_deref(), Some("models/champion.json"));
        assert_eq!(overrides.columns_path.as_deref(), Some("models/columns.json"));
        assert!(overrides.report_format.is_none());
    }
}
