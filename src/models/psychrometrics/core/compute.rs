use tracing::debug;
use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{Pressure, Ratio, SpecificVolume, ThermodynamicTemperature},
    pressure::kilopascal,
    ratio::ratio,
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    psychro::{
        PsychroError, SolverConfig, degree_of_saturation, enthalpy, saturation_humidity_ratio,
        saturation_pressure, specific_volume, vapor_pressure, wet_bulb_temperature,
    },
    units::SpecificEnthalpy,
};

use super::{PsychrometricInput, PsychrometricState};

/// Computes the full psychrometric state of one sample.
///
/// The humidity ratio is floored at `config.min_humidity_ratio`, and every
/// property that depends on it (degree of saturation, specific volume,
/// enthalpy) uses the floored value. The dew point is capped at the dry bulb.
///
/// Identical inputs and configuration always produce identical states.
///
/// # Errors
///
/// - [`PsychroError::OutOfDomain`] if the dry bulb is outside the saturation
///   pressure or dew-point fits.
/// - [`PsychroError::InvalidRange`] if the pressure does not exceed the
///   saturation pressure at the dry bulb.
/// - [`PsychroError::ConvergenceFailure`] if the wet-bulb solve does not converge.
pub fn compute_state(
    input: &PsychrometricInput,
    config: &SolverConfig,
) -> Result<PsychrometricState, PsychroError> {
    let t = input.dry_bulb.get::<degree_celsius>();
    let rh = input.relative_humidity.as_ref().get::<ratio>();
    let p = input.pressure.as_ref().get::<kilopascal>();

    let pvs = saturation_pressure(t)?;
    let pv = vapor_pressure(rh, pvs)?;
    let ws = saturation_humidity_ratio(p, pvs)?;

    let solution = wet_bulb_temperature(t, rh, p, config)?;
    let w = solution.humidity_ratio;

    let state = PsychrometricState {
        dry_bulb: input.dry_bulb,
        relative_humidity: *input.relative_humidity.as_ref(),
        pressure: *input.pressure.as_ref(),
        saturation_pressure: Pressure::new::<kilopascal>(pvs),
        vapor_pressure: Pressure::new::<kilopascal>(pv),
        saturation_humidity_ratio: Ratio::new::<ratio>(ws),
        humidity_ratio: Ratio::new::<ratio>(w),
        degree_of_saturation: Ratio::new::<ratio>(degree_of_saturation(w, ws)?),
        specific_volume: SpecificVolume::new::<cubic_meter_per_kilogram>(specific_volume(
            t, w, p,
        )?),
        dew_point: ThermodynamicTemperature::new::<degree_celsius>(solution.dew_point_c),
        enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(enthalpy(t, w)),
        wet_bulb: ThermodynamicTemperature::new::<degree_celsius>(solution.wet_bulb_c),
    };

    debug!(
        dry_bulb_c = t,
        relative_humidity = rh,
        pressure_kpa = p,
        wet_bulb_c = solution.wet_bulb_c,
        iters = solution.iters,
        "computed psychrometric state"
    );

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, TemperatureInterval},
        length::meter,
        ratio::percent,
        temperature_interval::kelvin as delta_kelvin,
    };

    use crate::support::psychro::humidity_ratio_from_wet_bulb;

    fn input(t: f64, rh: f64, p: f64) -> PsychrometricInput {
        PsychrometricInput::new(
            ThermodynamicTemperature::new::<degree_celsius>(t),
            Ratio::new::<ratio>(rh),
            Pressure::new::<kilopascal>(p),
        )
        .unwrap()
    }

    fn state(t: f64, rh: f64, p: f64) -> PsychrometricState {
        compute_state(&input(t, rh, p), &SolverConfig::default()).unwrap()
    }

    fn celsius(t: ThermodynamicTemperature) -> f64 {
        t.get::<degree_celsius>()
    }

    #[test]
    fn reference_state_at_sea_level() {
        let s = state(20.0, 0.5, 101.325);

        assert_relative_eq!(s.saturation_pressure.get::<kilopascal>(), 2.339, epsilon = 1e-3);
        assert_relative_eq!(s.vapor_pressure.get::<kilopascal>(), 1.1694, epsilon = 1e-3);
        assert_relative_eq!(s.humidity_ratio.get::<ratio>(), 0.007_262, epsilon = 1e-5);
        assert_relative_eq!(s.degree_of_saturation.get::<ratio>(), 0.494, epsilon = 1e-3);
        assert_relative_eq!(
            s.specific_volume.get::<cubic_meter_per_kilogram>(),
            0.8341,
            epsilon = 1e-3
        );
        assert_relative_eq!(celsius(s.dew_point), 9.147, epsilon = 1e-3);
        assert_relative_eq!(celsius(s.wet_bulb), 13.78, epsilon = 0.01);
        assert_relative_eq!(
            s.enthalpy.get::<kilojoule_per_kilogram>(),
            38.547,
            epsilon = 1e-2
        );
    }

    #[test]
    fn mountain_station_converges() {
        let input = PsychrometricInput::at_altitude(
            ThermodynamicTemperature::new::<degree_celsius>(19.7),
            Ratio::new::<percent>(15.0),
            Length::new::<meter>(2250.0),
        )
        .unwrap();
        let s = compute_state(&input, &SolverConfig::default()).unwrap();
        assert_relative_eq!(celsius(s.wet_bulb), 6.758, epsilon = 0.01);
        assert!(s.dew_point < s.wet_bulb);
    }

    #[test]
    fn below_freezing() {
        let s = state(-10.0, 0.5, 101.325);
        assert_relative_eq!(celsius(s.dew_point), -17.458, epsilon = 1e-3);
        assert_relative_eq!(celsius(s.wet_bulb), -11.64, epsilon = 0.01);
        assert!(s.humidity_ratio.get::<ratio>() < 0.001);
    }

    #[test]
    fn wet_bulb_matches_humidity_ratio_at_every_station() {
        let tol = SolverConfig::default().tolerance();
        for p in [101.325, 77.058, 60.0] {
            for t in [-20.0, -10.0, -0.5, 0.5, 5.0, 20.0, 35.0, 60.0] {
                for step in 0..=10 {
                    let rh = f64::from(step) / 10.0;
                    let s = state(t, rh, p);
                    let w = s.humidity_ratio.get::<ratio>();
                    let twb = celsius(s.wet_bulb);
                    assert!(w > 0.0);
                    assert!(s.dew_point <= s.wet_bulb, "T={t} RH={rh} P={p}");
                    assert!(s.wet_bulb <= s.dry_bulb, "T={t} RH={rh} P={p}");

                    // The energy balance must cross W within one tolerance of the wet bulb.
                    let below = humidity_ratio_from_wet_bulb(t, twb - tol, p, 1e-7).unwrap();
                    let above =
                        humidity_ratio_from_wet_bulb(t, (twb + tol).min(t), p, 1e-7).unwrap();
                    assert!(below <= w * (1.0 + 1e-9), "T={t} RH={rh} P={p}");
                    assert!(above >= w * (1.0 - 1e-9), "T={t} RH={rh} P={p}");
                }
            }
        }
    }

    #[test]
    fn monotonic_in_relative_humidity() {
        let states: Vec<_> = (0..=20)
            .map(|step| state(25.0, f64::from(step) / 20.0, 101.325))
            .collect();

        for pair in states.windows(2) {
            let [lower, upper] = pair else { unreachable!() };
            assert!(upper.humidity_ratio > lower.humidity_ratio);
            assert!(upper.degree_of_saturation > lower.degree_of_saturation);
            assert!(upper.wet_bulb >= lower.wet_bulb);
        }
    }

    #[test]
    fn wet_bulb_reproduces_humidity_ratio() {
        for (t, rh) in [(20.0, 0.5), (30.0, 0.8), (-5.0, 0.4), (10.0, 0.05)] {
            let s = state(t, rh, 101.325);
            let w = humidity_ratio_from_wet_bulb(t, celsius(s.wet_bulb), 101.325, 1e-7).unwrap();
            assert_relative_eq!(w, s.humidity_ratio.get::<ratio>(), epsilon = 1e-5);
        }
    }

    #[test]
    fn dry_air_is_floored() {
        let s = state(20.0, 0.0, 101.325);
        assert_relative_eq!(s.humidity_ratio.get::<ratio>(), 1e-7);
        assert_relative_eq!(s.vapor_pressure.get::<kilopascal>(), 0.0);
        assert!(s.dew_point < s.wet_bulb);
        assert!(s.wet_bulb < s.dry_bulb);
    }

    #[test]
    fn identical_inputs_give_identical_states() {
        let sample = input(17.3, 0.62, 84.1);
        let config = SolverConfig::default();
        assert_eq!(
            compute_state(&sample, &config).unwrap(),
            compute_state(&sample, &config).unwrap()
        );
    }

    #[test]
    fn saturated_air_has_no_depression() {
        let s = state(25.0, 1.0, 101.325);
        assert_relative_eq!(
            s.wet_bulb_depression().get::<delta_kelvin>(),
            0.0,
            epsilon = 2e-3
        );
        assert_relative_eq!(s.degree_of_saturation.get::<ratio>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn out_of_domain_dry_bulb() {
        let result = compute_state(&input(75.0, 0.5, 101.325), &SolverConfig::default());
        assert!(matches!(result, Err(PsychroError::OutOfDomain { .. })));
    }

    #[test]
    fn tight_budget_fails_to_converge() {
        let config = SolverConfig {
            max_iters: 3,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-6),
            ..SolverConfig::default()
        };
        let result = compute_state(&input(20.0, 0.5, 101.325), &config);
        let Err(PsychroError::ConvergenceFailure { iters, .. }) = result else {
            panic!("expected convergence failure, got {result:?}");
        };
        assert!(iters <= 3);
    }
}
