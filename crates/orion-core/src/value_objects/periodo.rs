//! Periodo - a start date with an optional end date

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Closed or open-ended date interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Periodo {
    inicio: NaiveDate,
    termino: Option<NaiveDate>,
}

impl Periodo {
    /// Build a period, rejecting an end date before the start date
    pub fn new(inicio: NaiveDate, termino: Option<NaiveDate>) -> Result<Self, DomainError> {
        if let Some(termino) = termino {
            if termino < inicio {
                return Err(DomainError::InvalidPeriodo);
            }
        }
        Ok(Self { inicio, termino })
    }

    pub fn inicio(&self) -> NaiveDate {
        self.inicio
    }

    pub fn termino(&self) -> Option<NaiveDate> {
        self.termino
    }

    /// Inclusive length in days, `None` while open-ended
    pub fn dias(&self) -> Option<i64> {
        self.termino
            .map(|termino| (termino - self.inicio).num_days() + 1)
    }

    /// Check whether a date falls inside the period
    pub fn contiene(&self, fecha: NaiveDate) -> bool {
        fecha >= self.inicio && self.termino.map_or(true, |termino| fecha <= termino)
    }
}

/// Validate a pair of years the same way dates are validated
pub fn validar_anos(inicio: Option<i32>, termino: Option<i32>) -> Result<(), DomainError> {
    match (inicio, termino) {
        (Some(inicio), Some(termino)) if termino < inicio => Err(DomainError::InvalidPeriodo),
        _ => Ok(()),
    }
}
