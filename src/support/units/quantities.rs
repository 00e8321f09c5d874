use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, P2, Z0},
};

/// Specific enthalpy, J/kg in SI.
///
/// Shares its dimension with [`uom::si::f64::AvailableEnergy`], so the
/// `available_energy` units (e.g. `kilojoule_per_kilogram`) apply.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::available_energy::{joule_per_kilogram, kilojoule_per_kilogram};

    #[test]
    fn kilojoule_per_kilogram_of_dry_air() {
        let h = SpecificEnthalpy::new::<kilojoule_per_kilogram>(38.5);
        assert_relative_eq!(h.get::<joule_per_kilogram>(), 38_500.0, epsilon = 1e-9);
    }
}
