use log::debug;

use crate::algebra::{Expr, Span};

/// Every way to read one digit piece as a numeric literal.
///
/// `"0"` reads only as zero; a longer piece with a leading zero reads only
/// as `0.<rest>`; anything else reads as the plain integer plus every
/// internal decimal-point insertion. A literal `"00"` is never produced.
pub fn piece_readings(digits: &str, start: usize, end: usize) -> Vec<Expr> {
    let piece = &digits[start..end];
    let span = Span::new(start, end);

    let mut texts = Vec::new();
    if piece == "0" {
        texts.push(piece.to_string());
    } else if piece.starts_with('0') {
        texts.push(format!("0.{}", &piece[1..]));
    } else {
        texts.push(piece.to_string());
        for k in 1..piece.len() {
            texts.push(format!("{}.{}", &piece[..k], &piece[k..]));
        }
    }

    texts
        .into_iter()
        .filter_map(|text| match Expr::number(&text, span) {
            Ok(expr) => Some(expr),
            Err(err) => {
                debug!("Skipping unreadable literal '{}': {}", text, err);
                None
            }
        })
        .collect()
}
