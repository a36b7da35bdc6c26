//! Integration tests for depleted material storage and slicing

use nalgebra::{dmatrix, dvector};
use rstest::{fixture, rstest};
use std::path::PathBuf;
use stools_depletion::{DepletedMaterial, DepletionMetadata, Error, DAYS};
use stools_utils::{Array, NamedObject};

const FILE: &str = "./data/depletion/ref_dep.m";

#[fixture]
fn metadata() -> DepletionMetadata {
    DepletionMetadata::new(FILE)
        .with_zai([922350, 922380])
        .with_names(["U235", "U238"])
        .with_days([0.0, 10.0, 20.0])
}

#[fixture]
fn fuel(metadata: DepletionMetadata) -> DepletedMaterial {
    let mut fuel = metadata.material("fuel");
    fuel.add_data("BURNUP", "0.0 0.5 1.0").unwrap();
    fuel.add_data("ADENS", ["1.0 2.0 3.0", "4.0 5.0 6.0"]).unwrap();
    fuel.add_data("MDENS", ["0.1 0.2 0.3", "0.4 0.5 0.6"]).unwrap();
    fuel
}

#[rstest]
fn names_and_days_slice(fuel: DepletedMaterial) {
    let values = fuel
        .get_values(DAYS, "adens", Some(&[0.0, 20.0]), Some(&["U238"]))
        .unwrap();
    assert_eq!(values, Array::from(dmatrix![4.0, 6.0]));
}

#[rstest]
#[case(DAYS)]
#[case("burnup")]
fn full_selection_round_trip(fuel: DepletedMaterial, #[case] x_units: &str) {
    let all = fuel.get_values(x_units, "adens", None, None).unwrap();
    assert_eq!(&all, fuel.get("adens").unwrap());

    // the full axis as time points selects everything
    let axis: Vec<f64> = match x_units {
        DAYS => fuel.days().unwrap().to_vec(),
        _ => fuel.get(x_units).unwrap().to_row_major(),
    };
    let selected = fuel.get_values(x_units, "adens", Some(axis.as_slice()), None).unwrap();
    assert_eq!(selected, all);
}

#[rstest]
fn columns_follow_axis_order(fuel: DepletedMaterial) {
    let values = fuel
        .get_values(DAYS, "adens", Some(&[20.0, 0.0]), None)
        .unwrap();
    assert_eq!(values, Array::from(dmatrix![1.0, 3.0; 4.0, 6.0]));
}

#[rstest]
fn rows_follow_requested_order(fuel: DepletedMaterial) {
    let values = fuel
        .get_values(DAYS, "mdens", None, Some(&["U238", "U235"]))
        .unwrap();
    assert_eq!(values, Array::from(dmatrix![0.4, 0.5, 0.6; 0.1, 0.2, 0.3]));
}

#[rstest]
fn burnup_as_x_axis(fuel: DepletedMaterial) {
    let values = fuel
        .get_values("burnup", "adens", Some(&[0.5]), Some(&["U235"]))
        .unwrap();
    assert_eq!(values, Array::from(dmatrix![2.0]));
}

#[rstest]
fn vector_quantities_ignore_names(fuel: DepletedMaterial) {
    let with_names = fuel
        .get_values(DAYS, "burnup", None, Some(&["Xe135"]))
        .unwrap();
    let without = fuel.get_values(DAYS, "burnup", None, None).unwrap();

    assert_eq!(with_names, without);
    assert_eq!(without, Array::from(dvector![0.0, 0.5, 1.0]));

    let subset = fuel
        .get_values(DAYS, "burnup", Some(&[10.0, 20.0]), None)
        .unwrap();
    assert_eq!(subset, Array::from(vec![0.5, 1.0]));
}

#[rstest]
fn missing_time_point(fuel: DepletedMaterial) {
    let err = fuel
        .get_values(DAYS, "adens", Some(&[0.0, 15.0]), None)
        .unwrap_err();

    assert_eq!(
        err,
        Error::CoordinateNotFound {
            points: vec![15.0],
            path: PathBuf::from(FILE),
        }
    );

    let message = err.to_string();
    assert!(message.contains("15"));
    assert!(message.contains("ref_dep.m"));
}

#[rstest]
fn every_missing_time_point_reported(fuel: DepletedMaterial) {
    let err = fuel
        .get_values(DAYS, "adens", Some(&[5.0, 10.0, 25.0]), None)
        .unwrap_err();

    match &err {
        Error::CoordinateNotFound { points, .. } => assert_eq!(points, &vec![5.0, 25.0]),
        _ => panic!("unexpected error {err:?}"),
    }

    let message = err.to_string();
    assert!(message.contains('5'));
    assert!(message.contains("25"));
}

#[rstest]
fn names_without_isotope_axis() {
    let metadata = DepletionMetadata::new(FILE).with_days([0.0, 10.0]);
    let mut fuel = metadata.material("fuel");
    fuel.add_data("ADENS", ["1.0 2.0", "3.0 4.0"]).unwrap();

    // fails before looking anything up, even for unknown quantities
    for y_units in ["adens", "notStored"] {
        let err = fuel
            .get_values(DAYS, y_units, None, Some(&["U235"]))
            .unwrap_err();
        assert!(matches!(err, Error::AxisUnavailable { .. }));
    }

    // all rows are still available without names
    let all = fuel.get_values(DAYS, "adens", None, None).unwrap();
    assert_eq!(all.shape(), (2, 2));
}

#[rstest]
fn days_axis_not_recorded() {
    let mut fuel = DepletionMetadata::new(FILE).material("fuel");
    fuel.add_data("BURNUP", "0.0 1.0").unwrap();

    assert!(matches!(
        fuel.get_values(DAYS, "burnup", None, None),
        Err(Error::AxisUnavailable { axis: DAYS, .. })
    ));
    assert!(fuel.get_values("burnup", "burnup", Some(&[1.0]), None).is_ok());
}

#[rstest]
fn unknown_isotopes_reported(fuel: DepletedMaterial) {
    let err = fuel
        .get_values(DAYS, "adens", None, Some(&["U235", "Pu239", "Xe135"]))
        .unwrap_err();

    assert_eq!(
        err,
        Error::IsotopeNotFound {
            names: vec!["Pu239".to_string(), "Xe135".to_string()],
            material: "fuel".to_string(),
        }
    );
}

#[rstest]
fn duplicate_isotope_names_use_first() {
    let metadata = DepletionMetadata::new(FILE)
        .with_names(["U235", "U235"])
        .with_days([0.0]);
    let mut fuel = metadata.material("fuel");
    fuel.add_data("ADENS", ["1.0", "2.0"]).unwrap();

    let values = fuel
        .get_values(DAYS, "adens", None, Some(&["U235"]))
        .unwrap();
    assert_eq!(values, Array::from(dmatrix![1.0]));
}

#[rstest]
fn unknown_quantities(fuel: DepletedMaterial) {
    assert!(matches!(
        fuel.get_values(DAYS, "ingTox", None, None),
        Err(Error::KeyNotFound { .. })
    ));
    assert!(matches!(
        fuel.get_values("volume", "adens", None, None),
        Err(Error::KeyNotFound { .. })
    ));
}

#[rstest]
fn matrix_x_axis_rejected(fuel: DepletedMaterial) {
    assert!(matches!(
        fuel.get_values("adens", "burnup", None, None),
        Err(Error::UnexpectedShape { found: (2, 3), .. })
    ));
}

#[rstest]
fn time_dimension_mismatch(mut fuel: DepletedMaterial) {
    fuel.add_data("VOLUME", "1.0 2.0").unwrap();
    assert!(matches!(
        fuel.get_values(DAYS, "volume", None, None),
        Err(Error::UnexpectedLength {
            expected: 3,
            found: 2,
            ..
        })
    ));
}

#[rstest]
fn failed_parse_stores_nothing(mut fuel: DepletedMaterial) {
    let result = fuel.add_data("ING_TOX", ["1.0 2.0 3.0", "4.0 five 6.0"]);
    assert!(matches!(result, Err(Error::ParseError { ref token, .. }) if token == "five"));
    assert!(fuel.get("ingTox").is_err());

    // a failed overwrite keeps the previous values
    let result = fuel.add_data("ADENS", "not numbers");
    assert!(result.is_err());
    assert_eq!(fuel.get("adens").unwrap().shape(), (2, 3));
}

#[rstest]
fn blank_lines_store_nothing(mut fuel: DepletedMaterial) {
    let result = fuel.add_data("ING_TOX", ["", "   "]);
    assert!(matches!(result, Err(Error::UnexpectedLength { found: 0, .. })));
    assert!(fuel.get("ingTox").is_err());
}

#[rstest]
fn variable_names_normalised(mut fuel: DepletedMaterial) {
    fuel.add_data("ING_TOX", ["1.0 2.0 3.0", "4.0 5.0 6.0"]).unwrap();
    assert!(fuel.data().contains_key("ingTox"));
    assert_eq!(fuel.get("ING_TOX").unwrap(), fuel.get("ingTox").unwrap());
}

#[rstest]
fn cached_accessors_are_stale(mut fuel: DepletedMaterial) {
    let first = fuel.adens().unwrap().clone();
    let burnup = fuel.burnup().unwrap().clone();

    fuel.add_data("ADENS", ["9.0 9.0 9.0", "9.0 9.0 9.0"]).unwrap();
    fuel.add_data("BURNUP", "9.0 9.0 9.0").unwrap();

    // first read wins
    assert_eq!(fuel.adens().unwrap(), &first);
    assert_eq!(fuel.burnup().unwrap(), &burnup);

    // storage itself holds the new values
    assert_eq!(fuel.get("adens").unwrap().to_row_major(), vec![9.0; 6]);
    assert_eq!(fuel.get("burnup").unwrap().to_row_major(), vec![9.0; 3]);
}

#[rstest]
fn accessor_before_loading(metadata: DepletionMetadata) {
    let mut fuel = metadata.material("fuel");
    assert_eq!(
        fuel.mdens(),
        Err(Error::DataNotLoaded {
            variable: "mdens".to_string(),
            material: "fuel".to_string(),
        })
    );

    // nothing is cached by a failed access
    fuel.add_data("MDENS", ["1.0 2.0 3.0", "4.0 5.0 6.0"]).unwrap();
    assert_eq!(fuel.mdens().unwrap().shape(), (2, 3));
}

#[rstest]
fn truthiness(metadata: DepletionMetadata) {
    let mut fuel = metadata.material("fuel");
    assert!(!fuel.has_data());
    assert_eq!(fuel.name(), "fuel");

    fuel.add_data("VOLUME", "1.0 1.0 1.0").unwrap();
    assert!(fuel.has_data());
}

#[rstest]
fn axes_are_shared(metadata: DepletionMetadata) {
    let fuel = metadata.material("fuel");
    let clad = metadata.material("clad");

    assert_eq!(fuel.zai(), Some([922350, 922380].as_slice()));
    assert!(std::ptr::eq(
        fuel.days().unwrap().as_ptr(),
        clad.days().unwrap().as_ptr()
    ));
    assert_eq!(fuel.file_path(), clad.file_path());
}
