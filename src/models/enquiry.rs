//! Visitor enquiries.

use super::all_filled;
use crate::error::{AppError, Result};

/// A submitted enquiry. Only validated, never stored.
#[derive(Debug, Clone)]
pub struct Enquiry {
    pub name: String,
    pub email: String,
    pub query: String,
}

impl Enquiry {
    pub fn new(name: &str, email: &str, query: &str) -> Result<Self> {
        if !all_filled(&[name, email, query]) {
            return Err(AppError::validation("Fill all fields."));
        }
        Ok(Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            query: query.trim().to_string(),
        })
    }

    /// Length of the query in characters.
    pub fn query_chars(&self) -> usize {
        self.query.chars().count()
    }

    /// Accept the enquiry. The content is dropped here; there is no inbox.
    pub fn submit(self) {
        tracing::info!("Enquiry received ({} chars)", self.query_chars());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiline_query_trimmed() {
        let enquiry = Enquiry::new("Ada", "a@x.com", "\nWhen do classes start?\n\n").unwrap();
        assert_eq!(enquiry.query, "When do classes start?");
    }

    #[test]
    fn test_query_length_counts_characters() {
        let enquiry = Enquiry::new("Zoë", "z@x.com", "Frais à payer?").unwrap();
        assert_eq!(enquiry.query_chars(), 14);
        assert!(enquiry.query.len() > 14);
    }

    #[test]
    fn test_blank_query_rejected() {
        assert!(matches!(Enquiry::new("Ada", "a@x.com", "\n \n"), Err(AppError::Validation(_))));
    }
}
