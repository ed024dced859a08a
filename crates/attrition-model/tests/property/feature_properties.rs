use std::path::Path;
use std::sync::OnceLock;

use attrition_model::{Assets, OverTime, ScenarioInput};
use proptest::prelude::*;

fn assets() -> &'static Assets {
    static ASSETS: OnceLock<Assets> = OnceLock::new();
    ASSETS.get_or_init(|| {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/attrition");
        Assets::load(
            &dir.join("champion_model.json"),
            &dir.join("model_columns.json"),
        )
        .unwrap()
    })
}

fn scenario() -> impl Strategy<Value = ScenarioInput> {
    (
        (1000u32..=20000, 0u32..=5000, 1u32..=5, 0u32..=3, 1u32..=4),
        (1u32..=4, any::<bool>(), 18u32..=60, 0u32..=40, 0u32..=20),
    )
        .prop_map(
            |(
                (monthly_income, incentive, job_level, stock_option_level, stress_rating),
                (environment_satisfaction, overtime, age, years_at_company, years_with_manager),
            )| ScenarioInput {
                monthly_income,
                incentive,
                job_level,
                stock_option_level,
                stress_rating,
                environment_satisfaction,
                overtime: if overtime { OverTime::Yes } else { OverTime::No },
                age,
                years_at_company,
                years_with_manager,
            },
        )
}

proptest! {
    #[test]
    fn vector_columns_equal_schema(input in scenario()) {
        let vector = assets().assembler().assemble(&input).unwrap();
        let names: Vec<&str> = vector.iter().map(|(c, _)| c).collect();
        let schema: Vec<&str> = assets().schema().columns().iter().map(String::as_str).collect();
        prop_assert_eq!(names, schema);
    }

    #[test]
    fn derived_ratios_are_finite(input in scenario()) {
        let result = assets().predict(&input).unwrap();
        prop_assert!(result.derived.incentive_ratio.is_finite());
        prop_assert!(result.derived.incentive_ratio >= 0.0);
        prop_assert!(result.derived.unjustified_stress.is_finite());
        prop_assert!(result.derived.unjustified_stress > 0.0);
        prop_assert_eq!(result.vector.get("Incentive_Ratio"), Some(result.derived.incentive_ratio));
        prop_assert_eq!(result.vector.get("Unjustified_Stress"), Some(result.derived.unjustified_stress));
    }

    #[test]
    fn probability_is_a_probability(input in scenario()) {
        let result = assets().predict(&input).unwrap();
        prop_assert!((0.0..=1.0).contains(&result.prediction.probability));
    }

    #[test]
    fn prediction_is_deterministic(input in scenario()) {
        let first = assets().predict(&input).unwrap();
        let second = assets().predict(&input).unwrap();
        prop_assert_eq!(first, second);
    }
}
