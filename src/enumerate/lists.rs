use log::debug;

use crate::algebra::Expr;
use crate::enumerate::errors::InputError;
use crate::enumerate::literals::piece_readings;
use crate::enumerate::partitions::Partitions;
use crate::enumerate::validation::validate_digit_string;

/// Lazily yields one operand list per (partition, decimal-placement)
/// combination over the input digit string.
///
/// Each list is an ordered sequence of literal expressions covering every
/// digit. The iterator holds no solver state and is restartable by
/// constructing afresh.
pub struct OperandLists {
    digits: String,
    partitions: Partitions,
    product: Option<ReadingProduct>,
}

impl OperandLists {
    /// # Errors
    ///
    /// Returns an error when the input contains non-digit characters.
    pub fn new(digits: &str) -> Result<Self, InputError> {
        validate_digit_string(digits)?;
        Ok(Self {
            digits: digits.to_string(),
            partitions: Partitions::new(digits.len()),
            product: None,
        })
    }
}

impl Iterator for OperandLists {
    type Item = Vec<Expr>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(product) = self.product.as_mut() {
                if let Some(list) = product.next_list() {
                    return Some(list);
                }
                self.product = None;
            }
            let partition = self.partitions.next()?;
            debug!("Enumerating operand lists for partition {:?}", partition);
            let readings = partition
                .iter()
                .map(|&(start, end)| piece_readings(&self.digits, start, end))
                .collect();
            self.product = ReadingProduct::new(readings);
        }
    }
}

/// Odometer over the per-piece readings of one partition.
struct ReadingProduct {
    readings: Vec<Vec<Expr>>,
    index: Vec<usize>,
    done: bool,
}

impl ReadingProduct {
    fn new(readings: Vec<Vec<Expr>>) -> Option<Self> {
        if readings.iter().any(Vec::is_empty) {
            return None;
        }
        let index = vec![0; readings.len()];
        Some(Self {
            readings,
            index,
            done: false,
        })
    }

    fn next_list(&mut self) -> Option<Vec<Expr>> {
        if self.done {
            return None;
        }
        let list = self
            .readings
            .iter()
            .zip(&self.index)
            .map(|(options, &i)| options[i].clone())
            .collect();

        let mut advanced = false;
        for (slot, options) in self.index.iter_mut().zip(&self.readings) {
            *slot += 1;
            if *slot < options.len() {
                advanced = true;
                break;
            }
            *slot = 0;
        }
        if !advanced {
            self.done = true;
        }
        Some(list)
    }
}
