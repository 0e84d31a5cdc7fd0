//! End-to-end scenario for the BCC paracrystal powder average.
//!
//! Exercises the full pipeline (quadrature tables, structure factor,
//! sphere form factor, volume fraction) on the reference configuration.

use approx::assert_relative_eq;
use sas_core::math::sphere::sphere_form;
use sas_models::paracrystal::BccParacrystal;
use sas_models::sweep::iq_profile;
use sas_models::ScatteringModel;

#[test]
fn test_low_q_reference_scenario() {
    // dnn = 160, d = 0.02, radius = 40, contrast 3e-6 at q = 0.001
    let model = BccParacrystal::new(160.0, 0.02, 40.0, 4e-6, 1e-6).unwrap();
    let q = 0.001;

    let iq = model.iq(q);
    assert!(iq.is_finite(), "Iq must be finite");
    assert!(iq > 0.0, "Iq must be positive");

    // The distortion factor damps the orientation-averaged lattice sum
    // below unity at low q, so the intensity sits strictly under the
    // volume-fraction-scaled single-sphere intensity
    let ceiling = model.volume_fraction() * sphere_form(q, 40.0, 4e-6, 1e-6);
    assert!(
        iq < ceiling,
        "Iq = {iq} must stay below vf * Pq = {ceiling}"
    );
}

#[test]
fn test_powder_profile_shows_structure_peak() {
    // The first allowed reflection must rise above the surrounding
    // intensity floor on a coarse profile
    let model = BccParacrystal::new(220.0, 0.06, 40.0, 4e-6, 1e-6).unwrap();
    let grid: Vec<f64> = (1..=60).map(|i| i as f64 * 2e-3).collect();
    let profile = iq_profile(&model, &grid);

    assert!(profile.iter().all(|i| i.is_finite() && *i > 0.0));

    // Normalise out the sphere envelope to expose the structure factor
    let sq: Vec<f64> = grid
        .iter()
        .zip(&profile)
        .map(|(&q, &iq)| iq / (model.volume_fraction() * sphere_form(q, 40.0, 4e-6, 1e-6)))
        .collect();
    let max_sq = sq.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let first = sq[0];
    assert!(
        max_sq > 5.0 * first,
        "structure peak ({max_sq}) should dominate the low-q floor ({first})"
    );
}

#[test]
fn test_strong_disorder_washes_out_structure() {
    // As the distortion factor grows the lattice sum tends to 1 uniformly
    // over orientations, so the powder intensity converges onto the
    // volume-fraction-scaled sphere intensity
    let model = BccParacrystal::new(220.0, 5.0, 40.0, 4e-6, 1e-6).unwrap();
    let q = 0.01;
    let iq = model.iq(q);
    let uncorrelated = model.volume_fraction() * sphere_form(q, 40.0, 4e-6, 1e-6);
    assert_relative_eq!(iq, uncorrelated, max_relative = 1e-4);
}

#[test]
fn test_trait_object_profile_consistency() {
    let model = BccParacrystal::new(160.0, 0.02, 40.0, 4e-6, 1e-6).unwrap();
    let as_trait: &dyn ScatteringModel = &model;
    assert_eq!(as_trait.iq(0.01), model.iq(0.01));
    assert!(as_trait.form_volume() > 0.0);
}
