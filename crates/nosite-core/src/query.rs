use crate::{Category, Coordinate, CoreError};

/// Search radius used when a caller supplies none.
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// One validated search request: where, how far, and which categories.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    origin: Coordinate,
    max_radius_m: f64,
    categories: Vec<Category>,
}

impl SearchQuery {
    /// Builds a query, collapsing repeated categories to their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRadius`] if `max_radius_m` is not a finite,
    /// strictly positive number.
    pub fn new(
        origin: Coordinate,
        max_radius_m: f64,
        categories: impl IntoIterator<Item = Category>,
    ) -> Result<Self, CoreError> {
        Self::validate_radius(max_radius_m)?;

        let mut unique: Vec<Category> = Vec::new();
        for category in categories {
            if !unique.contains(&category) {
                unique.push(category);
            }
        }

        Ok(Self {
            origin,
            max_radius_m,
            categories: unique,
        })
    }

    /// Checks a radius before any network work is done for it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRadius`] unless `max_radius_m` is finite and
    /// strictly positive.
    pub fn validate_radius(max_radius_m: f64) -> Result<(), CoreError> {
        if max_radius_m.is_finite() && max_radius_m > 0.0 {
            Ok(())
        } else {
            Err(CoreError::InvalidRadius(max_radius_m))
        }
    }

    #[must_use]
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    #[must_use]
    pub fn max_radius_m(&self) -> f64 {
        self.max_radius_m
    }

    /// The qualification cutoff: the requested radius in kilometers.
    #[must_use]
    pub fn max_radius_km(&self) -> f64 {
        self.max_radius_m / 1000.0
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Coordinate = Coordinate::new(0.0, 0.0);

    #[test]
    fn rejects_non_positive_radius() {
        assert_eq!(
            SearchQuery::new(ORIGIN, 0.0, [Category::Cafe]),
            Err(CoreError::InvalidRadius(0.0))
        );
        assert!(SearchQuery::new(ORIGIN, -5.0, [Category::Cafe]).is_err());
    }

    #[test]
    fn rejects_non_finite_radius() {
        assert!(SearchQuery::new(ORIGIN, f64::NAN, [Category::Cafe]).is_err());
        assert!(SearchQuery::new(ORIGIN, f64::INFINITY, [Category::Cafe]).is_err());
    }

    #[test]
    fn duplicate_categories_keep_first_occurrence_order() {
        let query = SearchQuery::new(
            ORIGIN,
            2500.0,
            [
                Category::Bakery,
                Category::Cafe,
                Category::Bakery,
                Category::Plumber,
                Category::Cafe,
            ],
        )
        .expect("valid query");
        assert_eq!(
            query.categories(),
            &[Category::Bakery, Category::Cafe, Category::Plumber]
        );
    }

    #[test]
    fn cutoff_is_expressed_in_kilometers() {
        let query = SearchQuery::new(ORIGIN, 2500.0, [Category::Cafe]).expect("valid query");
        assert!((query.max_radius_km() - 2.5).abs() < f64::EPSILON);
        assert!((query.max_radius_m() - 2500.0).abs() < f64::EPSILON);
    }
}
