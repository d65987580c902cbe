//! Tests for csviewer-model types.

use csviewer_model::{
    AxisLimits, AxisScale, AxisSettings, CellValue, ColumnName, FigureSettings, ModelError,
    SourceId, Table,
};

#[test]
fn figure_defaults_match_the_desktop_app() {
    let figure = FigureSettings::default();
    assert_eq!(figure.title, "");
    assert!((figure.size.width - 4.8).abs() < f64::EPSILON);
    assert!((figure.size.height - 2.4).abs() < f64::EPSILON);
    assert!(figure.grid_visible);
    assert!(figure.legend_visible);
}

#[test]
fn axis_defaults_to_linear_auto_range() {
    let axis = AxisSettings::default();
    assert_eq!(axis.scale, AxisScale::Linear);
    assert!(axis.limits.is_none());
}

#[test]
fn axis_scale_parses_case_insensitively() {
    assert_eq!("LOG".parse::<AxisScale>().unwrap(), AxisScale::Log);
    assert_eq!(" linear ".parse::<AxisScale>().unwrap(), AxisScale::Linear);
    assert_eq!(
        "symlog".parse::<AxisScale>().unwrap_err(),
        ModelError::UnknownScale("symlog".to_string())
    );
}

#[test]
fn limits_must_be_strictly_ordered() {
    assert!(AxisLimits::new(1.0, 5.0).is_ordered());
    assert!(!AxisLimits::new(5.0, 5.0).is_ordered());
    assert!(!AxisLimits::new(6.0, 5.0).is_ordered());
    assert!(!AxisLimits::new(f64::NAN, 5.0).is_ordered());
    assert!(!AxisLimits::new(f64::NEG_INFINITY, f64::INFINITY).is_ordered());
    assert!(!AxisLimits::new(0.0, f64::INFINITY).is_ordered());
}

#[test]
fn column_names_are_trimmed_and_non_empty() {
    assert_eq!(ColumnName::new("  time ").unwrap().as_str(), "time");
    assert!(matches!(
        ColumnName::new("   "),
        Err(ModelError::InvalidColumnName(_))
    ));
    assert_eq!(ColumnName::positional(3).as_str(), "column-3");
}

#[test]
fn column_names_deserialize_through_the_same_rule() {
    let name: ColumnName = serde_json::from_str(r#"" time ""#).expect("trimmed name");
    assert_eq!(name.as_str(), "time");
    assert_eq!(serde_json::to_string(&name).expect("serialize"), r#""time""#);

    let err = serde_json::from_str::<ColumnName>(r#""   ""#).unwrap_err();
    assert!(err.to_string().contains("invalid column name"), "{err}");
}

#[test]
fn source_ids_parse_and_order() {
    let id: SourceId = " 2 ".parse().unwrap();
    assert_eq!(id, SourceId::new(2));
    assert!(SourceId::new(1) < id);
    assert_eq!(id.to_string(), "2");
}

#[test]
fn settings_serialize_with_lowercase_scale() {
    let axis = AxisSettings::default()
        .with_label("time")
        .with_scale(AxisScale::Log)
        .with_limits(1.0, 10.0);
    let json = serde_json::to_value(&axis).expect("serialize axis");
    assert_eq!(json["scale"], "log");
    assert_eq!(json["limits"]["min"], 1.0);
    assert_eq!(json["label"], "time");
}

#[test]
fn table_round_trips_through_json() {
    let mut table = Table::new(
        vec![ColumnName::new("x").unwrap(), ColumnName::new("y").unwrap()],
        true,
    )
    .unwrap();
    table
        .push_row(vec![CellValue::Number(1.0), CellValue::Missing])
        .unwrap();
    let json = serde_json::to_string(&table).expect("serialize table");
    let back: Table = serde_json::from_str(&json).expect("deserialize table");
    assert_eq!(back, table);
}
