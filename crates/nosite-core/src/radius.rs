//! Probe radius planning.
//!
//! The nearby-search endpoint returns a bounded number of results per call and
//! favours nearer places, so one call at the full radius silently truncates.
//! Probing at several increasing radii recovers places a single call drops.

/// The mandatory smallest probe, in meters.
pub const NEAR_FIELD_RADIUS_M: f64 = 1000.0;

/// Fractions of the maximum radius probed when it exceeds the near field.
const FRACTIONS: [f64; 3] = [0.25, 0.5, 0.75];

/// An ordered, strictly increasing sequence of probe radii in meters.
///
/// The last element is always exactly the requested maximum radius.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusPlan(Vec<f64>);

impl RadiusPlan {
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build the probe sequence for `max_radius_m`.
///
/// - `max_radius_m <= 1000`: a single probe at `max_radius_m`.
/// - otherwise: `1000`, then 25 %, 50 % and 75 % of the maximum (floored to
///   whole meters, never below the near-field probe), then the maximum itself.
///
/// Duplicates collapse, values are sorted ascending and anything above
/// `max_radius_m` is discarded.
#[must_use]
pub fn plan_radii(max_radius_m: f64) -> RadiusPlan {
    let mut radii = vec![NEAR_FIELD_RADIUS_M];

    if max_radius_m > NEAR_FIELD_RADIUS_M {
        radii.extend(
            FRACTIONS
                .iter()
                .map(|fraction| (max_radius_m * fraction).floor().max(NEAR_FIELD_RADIUS_M)),
        );
    }
    radii.push(max_radius_m);

    radii.retain(|r| *r <= max_radius_m);
    radii.sort_by(f64::total_cmp);
    radii.dedup();

    RadiusPlan(radii)
}
