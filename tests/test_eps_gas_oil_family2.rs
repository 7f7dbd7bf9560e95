use epscale::{
    EndpointInfo, EpsConfig, EpsError, EpsGridProperties, Samples, ScalingPoints, TwoPhaseSystemType,
};
use russell_lab::array_approx_eq;

#[test]
fn test_eps_gas_oil_family2() -> Result<(), EpsError> {
    // region tables and family selection
    let tables = Samples::sat_func_tables_family2();
    let family = tables.family(0)?;

    // unscaled end points of the region
    let unscaled = EndpointInfo::extract_unscaled(&family, 0)?;
    assert_eq!(unscaled.swl, 0.2);
    assert_eq!(unscaled.sgl, 0.0);
    assert_eq!(unscaled.sgu, 0.7);
    assert_eq!(unscaled.sgcr, 0.2);
    assert_eq!(unscaled.sogcr, 0.2);

    // no overrides: the cell record equals the unscaled one
    let props = EpsGridProperties::new(vec![0, 0]);
    let info = props.extract_scaled(&unscaled, 1)?;
    assert_eq!(info, unscaled);

    // two-point scaling (points on the 1 − Sg axis)
    let config = EpsConfig::new();
    let points = ScalingPoints::new(&info, &config, TwoPhaseSystemType::GasOil);
    array_approx_eq(points.saturation_pc_points(), &[0.3, 1.0], 1e-15);
    array_approx_eq(points.saturation_krw_points(), &[0.2, 0.8], 1e-15);
    array_approx_eq(points.saturation_krn_points(), &[0.3, 0.8], 1e-15);
    assert_eq!(points.max_pcnw(), 0.7);
    assert_eq!(points.max_krw(), 0.8);
    assert_eq!(points.max_krn(), 0.6);

    // three-point scaling
    let mut config = EpsConfig::new();
    config.enable_three_point_kr_sat_scaling = true;
    let points = ScalingPoints::new(&info, &config, TwoPhaseSystemType::GasOil);
    array_approx_eq(points.saturation_krw_points(), &[0.2, 0.6, 0.8], 1e-15);
    array_approx_eq(points.saturation_krn_points(), &[0.3, 0.4, 0.8], 1e-15);
    Ok(())
}
