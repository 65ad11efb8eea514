//! Patient biographical data and field-range validation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Patient sex as collected by the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            "other" => Ok(Sex::Other),
            _ => Err(format!("'{}' is not one of: male, female, other", s)),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
            Sex::Other => write!(f, "other"),
        }
    }
}

/// A single failed field check, suitable for display next to the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Patient biographical attributes
///
/// Weight is in pounds and height in feet/inches to match the wording of
/// the prompt sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioData {
    pub age: u32,
    pub weight_lbs: u32,
    pub height_feet: u32,
    pub height_inches: Option<u32>,
    pub sex: Sex,
}

/// Maximum accepted age in years
pub const MAX_AGE: u32 = 120;

/// Maximum accepted weight in pounds
pub const MAX_WEIGHT_LBS: u32 = 1000;

/// Maximum accepted height feet component
pub const MAX_HEIGHT_FEET: u32 = 9;

/// Maximum accepted height inches component
pub const MAX_HEIGHT_INCHES: u32 = 11;

impl BioData {
    /// Check every field against its accepted range
    ///
    /// Returns all failures at once rather than stopping at the first, so
    /// the whole form can be annotated in a single pass.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.age > MAX_AGE {
            errors.push(FieldError {
                field: "age",
                message: format!("must be between 0 and {}", MAX_AGE),
            });
        }

        if self.weight_lbs > MAX_WEIGHT_LBS {
            errors.push(FieldError {
                field: "weight",
                message: format!("must be between 0 and {} lbs", MAX_WEIGHT_LBS),
            });
        }

        if self.height_feet > MAX_HEIGHT_FEET {
            errors.push(FieldError {
                field: "height (feet)",
                message: format!("must be between 0 and {}", MAX_HEIGHT_FEET),
            });
        }

        if let Some(inches) = self.height_inches {
            if inches > MAX_HEIGHT_INCHES {
                errors.push(FieldError {
                    field: "height (inches)",
                    message: format!("must be between 0 and {}", MAX_HEIGHT_INCHES),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Render height the way the prompt expects it, e.g. "5 feet 11 inches"
    ///
    /// The inches component is omitted when it was not provided.
    pub fn height_description(&self) -> String {
        match self.height_inches {
            Some(inches) => format!("{} feet {} inches", self.height_feet, inches),
            None => format!("{} feet", self.height_feet),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bio() -> BioData {
        BioData {
            age: 25,
            weight_lbs: 150,
            height_feet: 5,
            height_inches: Some(11),
            sex: Sex::Female,
        }
    }

    #[test]
    fn test_valid_bio_passes() {
        assert!(sample_bio().validate().is_ok());
    }

    #[test]
    fn test_age_out_of_range() {
        let mut bio = sample_bio();
        bio.age = 121;

        let errors = bio.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "age");
    }

    #[test]
    fn test_weight_out_of_range() {
        let mut bio = sample_bio();
        bio.weight_lbs = 1001;

        let errors = bio.validate().unwrap_err();
        assert_eq!(errors[0].field, "weight");
    }

    #[test]
    fn test_height_components_out_of_range() {
        let mut bio = sample_bio();
        bio.height_feet = 10;
        bio.height_inches = Some(12);

        let errors = bio.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&"height (feet)"));
        assert!(fields.contains(&"height (inches)"));
    }

    #[test]
    fn test_all_errors_reported_together() {
        let bio = BioData {
            age: 200,
            weight_lbs: 2000,
            height_feet: 12,
            height_inches: Some(20),
            sex: Sex::Other,
        };
        assert_eq!(bio.validate().unwrap_err().len(), 4);
    }

    #[test]
    fn test_height_description_with_inches() {
        assert_eq!(sample_bio().height_description(), "5 feet 11 inches");
    }

    #[test]
    fn test_height_description_without_inches() {
        let mut bio = sample_bio();
        bio.height_inches = None;
        assert_eq!(bio.height_description(), "5 feet");
    }

    #[test]
    fn test_sex_parsing() {
        assert_eq!("Male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("f".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!(" OTHER ".parse::<Sex>().unwrap(), Sex::Other);
        assert!("unknown".parse::<Sex>().is_err());
    }

    #[test]
    fn test_sex_display() {
        assert_eq!(Sex::Male.to_string(), "male");
        assert_eq!(Sex::Female.to_string(), "female");
    }
}
