use std::fmt;

pub const MIN_HEIGHT_CM: u16 = 140;
pub const MAX_HEIGHT_CM: u16 = 220;
pub const MIN_WEIGHT_KG: u16 = 40;
pub const MAX_WEIGHT_KG: u16 = 150;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    Underweight,
    Ideal,
    Overweight,
    ObesityI,
    ObesityII,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Ideal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else if bmi < 35.0 {
            BmiCategory::ObesityI
        } else {
            BmiCategory::ObesityII
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Ideal => "Ideal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObesityI => "Obesity I",
            BmiCategory::ObesityII => "Obesity II+",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bmi {
    pub value: f64,
    pub category: BmiCategory,
}

impl Bmi {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            category: BmiCategory::from_bmi(value),
        }
    }

    /// Position of the marker on the summary gauge, which spans BMI 15 to 40.
    pub fn gauge_percent(&self) -> f64 {
        ((self.value - 15.0) / 25.0 * 100.0).clamp(0.0, 100.0)
    }
}

impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} ({})", self.value, self.category)
    }
}

/// Body mass index rounded to one decimal. The category is taken from the
/// rounded value so that it always agrees with the number shown.
pub fn calculate(height_cm: u16, weight_kg: u16) -> Bmi {
    let height_m = height_cm as f64 / 100.0;
    Bmi::new(crate::round1(weight_kg as f64 / (height_m * height_m)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculates_value_and_category() {
        let test_data = [
            (170, 70, 24.2, BmiCategory::Ideal),
            (160, 45, 17.6, BmiCategory::Underweight),
            (180, 90, 27.8, BmiCategory::Overweight),
            (165, 90, 33.1, BmiCategory::ObesityI),
            (150, 100, 44.4, BmiCategory::ObesityII),
            (140, 40, 20.4, BmiCategory::Ideal),
            (220, 150, 31.0, BmiCategory::ObesityI),
        ];

        for (i, (height, weight, value, category)) in test_data.into_iter().enumerate() {
            let bmi = super::calculate(height, weight);
            assert_eq!(bmi.value, value, "Test case #{}", i);
            assert_eq!(bmi.category, category, "Test case #{}", i);
        }
    }

    #[test]
    fn category_boundaries() {
        let test_data = [
            (18.4, BmiCategory::Underweight),
            (18.5, BmiCategory::Ideal),
            (24.9, BmiCategory::Ideal),
            (25.0, BmiCategory::Overweight),
            (29.9, BmiCategory::Overweight),
            (30.0, BmiCategory::ObesityI),
            (34.9, BmiCategory::ObesityI),
            (35.0, BmiCategory::ObesityII),
        ];

        for (i, (value, category)) in test_data.into_iter().enumerate() {
            assert_eq!(BmiCategory::from_bmi(value), category, "Test case #{}", i);
        }
    }

    #[test]
    fn rounded_value_decides_category() {
        let bmi = Bmi::new(crate::round1(24.96));
        assert_eq!(bmi.value, 25.0);
        assert_eq!(bmi.category, BmiCategory::Overweight);
    }

    #[test]
    fn every_slider_position_matches_formula() {
        for height in MIN_HEIGHT_CM..=MAX_HEIGHT_CM {
            for weight in MIN_WEIGHT_KG..=MAX_WEIGHT_KG {
                let h = height as f64 / 100.0;
                let expected = (weight as f64 / (h * h) * 10.0).round() / 10.0;
                let bmi = super::calculate(height, weight);
                assert!((bmi.value - expected).abs() < 1e-9);
                assert_eq!(bmi.category, BmiCategory::from_bmi(bmi.value));
            }
        }
    }

    #[test]
    fn gauge_is_clamped() {
        assert_eq!(Bmi::new(10.0).gauge_percent(), 0.0);
        assert_eq!(Bmi::new(27.5).gauge_percent(), 50.0);
        assert_eq!(Bmi::new(45.0).gauge_percent(), 100.0);
    }

    #[test]
    fn display() {
        assert_eq!(super::calculate(170, 70).to_string(), "24.2 (Ideal)");
    }
}
