use crate::entity::ValidationError;

/// Three-level rating, carried as the integers 1 to 3 on the wire.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Rating {
    One,
    Two,
    Three,
}

impl From<Rating> for i32 {
    fn from(value: Rating) -> Self {
        match value {
            Rating::One => 1,
            Rating::Two => 2,
            Rating::Three => 3,
        }
    }
}

impl TryFrom<i32> for Rating {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Rating::One),
            2 => Ok(Rating::Two),
            3 => Ok(Rating::Three),
            _ => Err(ValidationError::RatingInvalid),
        }
    }
}
