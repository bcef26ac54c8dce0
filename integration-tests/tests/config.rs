use pensim_entities::PrincipalInertia;
use pensim_solvers::Config;

#[test]
fn config_from_json() {
    let config: Config =
        serde_json::from_str(r#"{ "duration": 2.04, "step": 0.01, "verbose": true }"#)
            .expect("valid config json");

    assert_eq!(config, Config::new(2.04, 0.01).with_verbose(true));
    assert!(!config.halt_on_non_finite);
    assert!(config.validate().is_ok());
}

#[test]
fn missing_fields_use_defaults() {
    let config: Config = serde_json::from_str("{}").expect("empty object is valid");

    assert_eq!(config, Config::default());
}

#[test]
fn inertia_round_trips_as_array() {
    let inertia: PrincipalInertia =
        serde_json::from_str("[10.0, 10.0, 1.0]").expect("valid inertia");

    assert_eq!(inertia.moments(), [10.0, 10.0, 1.0]);
    assert_eq!(serde_json::to_string(&inertia).unwrap(), "[10.0,10.0,1.0]");
}

#[test]
fn inertia_json_is_validated() {
    let result = serde_json::from_str::<PrincipalInertia>("[10.0, 0.0, 1.0]");

    let message = result.unwrap_err().to_string();
    assert!(message.contains("axis 1"), "unexpected message: {message}");
}
