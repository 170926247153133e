//! Density table validation.

use orbfield_common::SizeTier;

use crate::schema::OrbfieldConfig;

use super::helpers::{validate_positive_f64, validate_range, validate_range_f64};

pub(crate) fn validate_density(errors: &mut Vec<String>, config: &OrbfieldConfig) {
    for tier in SizeTier::ALL {
        let d = config.density.for_tier(tier);
        let prefix = format!("density.{tier}");

        validate_range(
            errors,
            &format!("{prefix}.max_count"),
            d.max_count as u64,
            1,
            200_000,
        );
        if d.min_count > d.max_count {
            errors.push(format!(
                "{prefix}.min_count = {} exceeds max_count = {}",
                d.min_count, d.max_count
            ));
        }
        validate_positive_f64(
            errors,
            &format!("{prefix}.particles_per_area"),
            d.particles_per_area,
            10.0,
        );
        validate_range_f64(errors, &format!("{prefix}.dpr_cap"), d.dpr_cap, 1.0, 4.0);
        validate_positive_f64(
            errors,
            &format!("{prefix}.radius_fraction"),
            d.radius_fraction,
            0.5,
        );
    }
}
