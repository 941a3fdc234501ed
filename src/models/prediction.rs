//! Prediction label model

/// Class the classifier reports for fraudulent transactions.
pub const FRAUD_CLASS: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    Fraud,
    NotFraud,
}

impl Prediction {
    /// Map a raw classifier output to a label.
    ///
    /// Only [`FRAUD_CLASS`] is fraud. Every other value, including classes
    /// outside {0, 1} that a mis-exported model might produce, is reported
    /// as not fraud.
    pub fn from_class(class: i64) -> Self {
        if class == FRAUD_CLASS {
            Prediction::Fraud
        } else {
            Prediction::NotFraud
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Prediction::Fraud => "Fraud",
            Prediction::NotFraud => "Not Fraud",
        }
    }
}
