//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

use sas_core::math::vec3::Vec3;

/// Test that the magnetic machinery is accessible via absolute path.
#[test]
fn test_magnetic_module_exports() {
    use sas_models::magnetic::{fq_core_shell, mag_sld, set_scatvec, CoreShellProfile, SpinWeights};

    let w = SpinWeights::from_efficiencies(0.9, 0.9);
    assert_eq!(w.to_array().len(), 8);

    let xs = mag_sld(
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1e-6, 0.0, 0.0),
        Vec3::ZERO,
        2e-6,
    );
    assert_eq!(xs.to_array().len(), 8);

    let v = set_scatvec(0.01, 1.0, 0.0, 30.0, 60.0);
    assert!(v.norm() > 0.0);

    let f = fq_core_shell(0.01, 1e-6, 20.0, 6e-6, 0.0, &[], &[]);
    assert!(f.is_finite());

    let profile = CoreShellProfile::new(1e-6, 20.0, 6e-6, vec![2e-6], vec![5.0]).unwrap();
    assert!(profile.amplitude(0.01).is_finite());
}

/// Test that the model types are accessible and evaluate.
#[test]
fn test_model_module_exports() {
    use sas_models::empirical::{BroadPeak, GuinierPorod, LamellarHg};
    use sas_models::paracrystal::BccParacrystal;
    use sas_models::shapes::Cylinder;

    let bcc = BccParacrystal::new(220.0, 0.06, 40.0, 4e-6, 1e-6).unwrap();
    assert!(bcc.structure_factor(0.01, 0.02, 0.03).is_finite());

    let cyl = Cylinder::new(20.0, 400.0, 4e-6, 1e-6).unwrap();
    assert!(cyl.iqxy(0.01, 0.02, 10.0, 20.0).is_finite());

    let gp = GuinierPorod::new(60.0, 1.0, 3.0);
    assert!(gp.iq(0.01) > 0.0);

    let bp = BroadPeak::new(1e-5, 3.0, 10.0, 50.0, 0.1, 2.0);
    assert!(bp.iq(0.05) > 0.0);

    let lam = LamellarHg::new(15.0, 10.0, 0.4, 3.0, 6.0).unwrap();
    assert!(lam.iq(0.01) > 0.0);
}

/// Test that the trait seam and error type are re-exported at crate root.
#[test]
fn test_root_reexports() {
    use sas_models::{ModelError, ScatteringModel};

    let err = ModelError::InvalidLattice { dnn: -1.0 };
    assert!(format!("{}", err).contains("dnn"));

    fn evaluate<M: ScatteringModel>(model: &M) -> f64 {
        model.iq(0.01)
    }
    let gp = sas_models::empirical::GuinierPorod::new(60.0, 1.0, 3.0);
    assert!(evaluate(&gp) > 0.0);
}

/// Test the parallel sweep surface.
#[test]
fn test_sweep_exports() {
    use sas_models::sweep::iq_profile;

    let gp = sas_models::empirical::GuinierPorod::new(60.0, 1.0, 3.0);
    let profile = iq_profile(&gp, &[0.01, 0.02, 0.03]);
    assert_eq!(profile.len(), 3);
}
