use crate::error::AppError;
use crate::models::AppointmentInput;
use crate::dates;

pub const NAME_LEN: (usize, usize) = (3, 30);
pub const LOCATION_LEN: (usize, usize) = (3, 40);

/// Unsubmitted registration form. `date` holds the raw local date-time input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub date: String,
    pub location: String,
}

impl Draft {
    pub fn validate(&self) -> Result<(), AppError> {
        check_length("Nome", &self.name, NAME_LEN)?;
        if self.date.trim().is_empty() {
            return Err(AppError::Validation("Data e Hora é obrigatório".to_string()));
        }
        check_length("Local", &self.location, LOCATION_LEN)?;
        Ok(())
    }

    /// Validates the draft and builds the creation body with the date in
    /// `dd/MM/yyyy HH:mm`.
    pub fn to_submission(&self) -> Result<AppointmentInput, AppError> {
        self.validate()?;
        Ok(AppointmentInput {
            name: self.name.clone(),
            date: dates::format_for_submission(&self.date)?,
            location: self.location.clone(),
        })
    }
}

fn check_length(label: &str, value: &str, (min, max): (usize, usize)) -> Result<(), AppError> {
    let len = value.chars().count();
    if len == 0 {
        return Err(AppError::Validation(format!("{} é obrigatório", label)));
    }
    if len < min || len > max {
        return Err(AppError::Validation(format!(
            "{} deve ter entre {} e {} caracteres",
            label, min, max
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, date: &str, location: &str) -> Draft {
        Draft {
            name: name.to_string(),
            date: date.to_string(),
            location: location.to_string(),
        }
    }

    #[test]
    fn accepts_bounds() {
        assert!(draft("Ana", "2024-01-02T09:05", "Sala").validate().is_ok());
        assert!(draft(&"a".repeat(30), "2024-01-02T09:05", &"b".repeat(40)).validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        assert!(draft("Al", "2024-01-02T09:05", "Sala").validate().is_err());
        assert!(draft(&"a".repeat(31), "2024-01-02T09:05", "Sala").validate().is_err());
        assert!(draft("Ana", "2024-01-02T09:05", "Sa").validate().is_err());
        assert!(draft("Ana", "2024-01-02T09:05", &"b".repeat(41)).validate().is_err());
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!(draft("Zé", "2024-01-02T09:05", "Sala").validate().is_err());
        assert!(draft("Joã", "2024-01-02T09:05", "Sala").validate().is_ok());
    }

    #[test]
    fn requires_date() {
        let err = draft("Ana", "  ", "Sala").validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn submission_formats_date() {
        let input = draft("Ana", "2024-01-02T09:05", "Sala").to_submission().unwrap();
        assert_eq!(input.date, "02/01/2024 09:05");
        assert_eq!(input.name, "Ana");
        assert_eq!(input.location, "Sala");
    }

    #[test]
    fn submission_rejects_unparseable_date() {
        let err = draft("Ana", "amanhã", "Sala").to_submission().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
