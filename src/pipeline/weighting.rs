//! IDF and TF-IDF weighting.
//!
//! The last two teaching steps. Depending on [`IdfMode`] the weights are
//! either unevaluated formula strings — IDF as the ratio `"N/df"`, TF-IDF as
//! `"tf × log(N/df)"` — or evaluated natural-log values rounded to 3 decimal
//! places. The two shapes are kept as explicit arms of [`Weight`] rather
//! than being squeezed into one ambiguous field.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pipeline::config::IdfMode;
use crate::pipeline::frequency::round3;

/// A derived weight: either an evaluated number or an unevaluated formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Weight {
    /// An evaluated value, rounded to 3 decimal places.
    Numeric(f64),
    /// A formula string left for the reader to evaluate.
    Expression(String),
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Numeric(value) => write!(f, "{value}"),
            Weight::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

/// Compute the IDF weight of one term.
///
/// `document_frequency` is at least 1 by vocabulary construction, so the
/// ratio is always defined.
pub fn idf_weight(document_frequency: u32, num_docs: usize, mode: IdfMode) -> Weight {
    match mode {
        IdfMode::Symbolic => Weight::Expression(format!("{num_docs}/{document_frequency}")),
        IdfMode::Numeric => {
            Weight::Numeric(round3((num_docs as f64 / document_frequency as f64).ln()))
        }
    }
}

/// Compute the IDF weight of every vocabulary term.
pub fn idf_weights(document_frequency: &[u32], num_docs: usize, mode: IdfMode) -> Vec<Weight> {
    document_frequency
        .iter()
        .map(|&df| idf_weight(df, num_docs, mode))
        .collect()
}

/// Compute the TF-IDF weight for one (document, term) cell.
///
/// `term_frequency` is the already-rounded value from the TF table — the
/// number students are expected to plug into the formula.
pub fn tf_idf_weight(
    term_frequency: f64,
    document_frequency: u32,
    num_docs: usize,
    mode: IdfMode,
) -> Weight {
    match mode {
        IdfMode::Symbolic => Weight::Expression(format!(
            "{term_frequency} × log({num_docs}/{document_frequency})"
        )),
        IdfMode::Numeric => Weight::Numeric(round3(
            term_frequency * (num_docs as f64 / document_frequency as f64).ln(),
        )),
    }
}

/// Compute the documents × vocabulary TF-IDF grid.
pub fn tf_idf_matrix(
    term_frequency: &[Vec<f64>],
    document_frequency: &[u32],
    num_docs: usize,
    mode: IdfMode,
) -> Vec<Vec<Weight>> {
    term_frequency
        .iter()
        .map(|row| {
            row.iter()
                .zip(document_frequency)
                .map(|(&tf, &df)| tf_idf_weight(tf, df, num_docs, mode))
                .collect()
        })
        .collect()
}
